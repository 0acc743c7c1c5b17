/*
 * @Author       : 老董
 * @Date         : 2026-10-19
 * @Description  : Graph 模块：静态计算图 IR 的节点容器
 *
 * 各 impl 块分散在子模块中：
 * - core.rs: 创建与基础访问器
 * - node_builders.rs: new_*_node
 * - describe.rs: describe 导出描述符
 */

mod core;
mod describe;
mod error;
mod node_builders;

pub use error::GraphError;

use crate::ir::NodeId;
use crate::ir::nodes::NodeHandle;
use std::collections::{HashMap, HashSet};

/// 图的完整定义
///
/// 图拥有所有节点，调用方只持有 `NodeId`。节点一经创建不可修改，
/// 构建期唯一的副作用是向图中追加新节点。
pub struct Graph {
    name: String,
    nodes: HashMap<NodeId, NodeHandle>,
    /// 正向边：parent_id -> child_ids（父节点指向子节点）
    forward_edges: HashMap<NodeId, Vec<NodeId>>,
    /// 反向边：child_id -> parent_ids（子节点指向父节点）
    backward_edges: HashMap<NodeId, Vec<NodeId>>,
    /// 已占用的节点名
    node_names: HashSet<String>,
    /// 节点类型 -> 上一次自动命名用到的序号
    name_counters: HashMap<String, usize>,
    next_id: u64,
}
