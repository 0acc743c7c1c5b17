/*
 * @Author       : 老董
 * @Date         : 2026-10-19
 * @Description  : 算子节点。只负责声明输出形状、校验父节点，不含任何数值计算
 */

mod activation;
mod add;
mod clamp;
mod multiply;
mod subtract;

pub(in crate::ir) use activation::Activation;
pub(in crate::ir) use add::Add;
pub(in crate::ir) use clamp::Clamp;
pub(in crate::ir) use multiply::Multiply;
pub(in crate::ir) use subtract::Subtract;

use crate::ir::GraphError;
use crate::ir::nodes::NodeHandle;
use crate::ir::shape::PartialShape;

/// 逐元素二元算子共用的校验：正好 2 个父节点，且形状可广播
///
/// 返回广播后的输出形状。
fn elementwise_output_shape(
    op_name: &str,
    parents: &[&NodeHandle],
) -> Result<PartialShape, GraphError> {
    if parents.len() != 2 {
        return Err(GraphError::InvalidOperation(format!(
            "{op_name} 节点需要正好 2 个父节点"
        )));
    }

    let left_shape = parents[0].expected_shape();
    let right_shape = parents[1].expected_shape();
    left_shape
        .broadcast_with(right_shape)
        .ok_or_else(|| GraphError::ShapeMismatch {
            expected: left_shape.clone(),
            got: right_shape.clone(),
            message: format!("{op_name} 节点的父节点形状无法广播"),
        })
}

/// 一元算子共用的校验：正好 1 个父节点，输出形状与父节点一致
fn unary_output_shape(
    op_name: &str,
    parents: &[&NodeHandle],
) -> Result<PartialShape, GraphError> {
    match parents {
        [parent] => Ok(parent.expected_shape().clone()),
        _ => Err(GraphError::InvalidOperation(format!(
            "{op_name} 节点只需要 1 个父节点"
        ))),
    }
}
