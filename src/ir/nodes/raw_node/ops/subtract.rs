/*
 * @Author       : 老董
 * @Date         : 2026-10-19
 * @Description  : 逐元素减法节点
 *                 声明 C = A - B（element-wise），支持 NumPy 风格广播
 */

use super::elementwise_output_shape;
use crate::ir::GraphError;
use crate::ir::NodeId;
use crate::ir::descriptor::NodeTypeDescriptor;
use crate::ir::nodes::NodeHandle;
use crate::ir::nodes::raw_node::TraitNode;
use crate::ir::shape::PartialShape;

#[derive(Clone)]
pub(in crate::ir) struct Subtract {
    id: NodeId,
    name: String,
    /// 广播后的输出形状
    shape: PartialShape,
    parents_ids: Vec<NodeId>,
}

impl Subtract {
    pub(in crate::ir) fn new(parents: &[&NodeHandle]) -> Result<Self, GraphError> {
        let shape = elementwise_output_shape("Subtract", parents)?;
        Ok(Self {
            id: NodeId::UNBOUND,
            name: String::new(),
            shape,
            parents_ids: parents.iter().map(|p| p.id()).collect(),
        })
    }
}

impl TraitNode for Subtract {
    fn id(&self) -> NodeId {
        self.id
    }

    fn set_id(&mut self, id: NodeId) {
        self.id = id;
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    fn type_name(&self) -> &'static str {
        "subtract"
    }

    fn expected_shape(&self) -> &PartialShape {
        &self.shape
    }

    fn parents_ids(&self) -> &[NodeId] {
        &self.parents_ids
    }

    fn type_descriptor(&self) -> NodeTypeDescriptor {
        NodeTypeDescriptor::Subtract
    }
}
