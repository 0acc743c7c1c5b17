/*
 * @Author       : 老董
 * @Date         : 2026-10-19
 * @Description  : Graph 模块的错误类型
 */

use crate::ir::NodeId;
use crate::ir::shape::PartialShape;
use thiserror::Error;

/// 图构建、校验过程中的错误类型
///
/// 注意：激活函数下标越界属于调用方（具体循环单元）的编程错误，直接 panic，不在此列。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("未找到节点{0}")]
    NodeNotFound(NodeId),
    #[error("{0}")]
    InvalidOperation(String),
    #[error("{message}：期望形状{expected}，实际形状{got}")]
    ShapeMismatch {
        expected: PartialShape,
        got: PartialShape,
        message: String,
    },
    #[error("{0}")]
    DuplicateNodeName(String),
    /// 归属于某个节点的结构校验失败
    #[error("{node}校验失败：{message}")]
    NodeValidation { node: String, message: String },
    #[error("无法识别的激活函数：{0}")]
    UnknownActivation(String),
}
