/*
 * @Author       : 老董
 * @Date         : 2026-10-19
 * @Description  : 静态计算图 IR：节点、形状与循环单元的公共基础
 */

mod activation;
mod attribute;
mod descriptor;
mod display;
mod graph;
mod nodes;
mod rnn_cell_base;
mod shape;

pub use activation::{ActivationFunction, ActivationKind};
pub use attribute::{AttributeVisitor, JsonAttributeReader, JsonAttributeWriter};
pub use descriptor::{GraphDescriptor, NodeDescriptor, NodeTypeDescriptor};
pub use graph::{Graph, GraphError};
pub use nodes::NodeId;
pub use rnn_cell_base::{GateParams, RnnCellBase};
pub use shape::{Dim, PartialShape, Rank, dims_compatible};

#[cfg(test)]
mod tests;
