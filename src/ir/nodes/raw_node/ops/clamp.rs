/*
 * @Author       : 老董
 * @Date         : 2026-10-19
 * @Description  : Clamp 节点：把输入值截断到 [min, max]
 */

use super::unary_output_shape;
use crate::ir::GraphError;
use crate::ir::NodeId;
use crate::ir::descriptor::NodeTypeDescriptor;
use crate::ir::nodes::NodeHandle;
use crate::ir::nodes::raw_node::TraitNode;
use crate::ir::shape::PartialShape;

#[derive(Clone)]
pub(in crate::ir) struct Clamp {
    id: NodeId,
    name: String,
    shape: PartialShape,
    min: f32,
    max: f32,
    parents_ids: Vec<NodeId>,
}

impl Clamp {
    pub(in crate::ir) fn new(
        parents: &[&NodeHandle],
        min: f32,
        max: f32,
    ) -> Result<Self, GraphError> {
        // 1. 必要的验证
        // 1.1 父节点数量验证
        let shape = unary_output_shape("Clamp", parents)?;

        // 1.2 边界验证
        if !min.is_finite() || !max.is_finite() {
            return Err(GraphError::InvalidOperation(format!(
                "Clamp 的边界必须是有限值，但得到: [{min}, {max}]"
            )));
        }
        if min > max {
            return Err(GraphError::InvalidOperation(format!(
                "Clamp 的下界不能大于上界，但得到: [{min}, {max}]"
            )));
        }

        // 2. 返回
        Ok(Self {
            id: NodeId::UNBOUND,
            name: String::new(),
            shape,
            min,
            max,
            parents_ids: parents.iter().map(|p| p.id()).collect(),
        })
    }
}

impl TraitNode for Clamp {
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
        "clamp"
    }

    fn expected_shape(&self) -> &PartialShape {
        &self.shape
    }

    fn parents_ids(&self) -> &[NodeId] {
        &self.parents_ids
    }

    fn type_descriptor(&self) -> NodeTypeDescriptor {
        NodeTypeDescriptor::Clamp {
            min: self.min,
            max: self.max,
        }
    }
}
