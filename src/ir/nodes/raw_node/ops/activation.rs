/*
 * @Author       : 老董
 * @Date         : 2026-10-19
 * @Description  : 激活函数节点（sigmoid/tanh/relu/hardsigmoid）
 *                 具体是哪种非线性由已解析的 ActivationFunction 决定
 */

use super::unary_output_shape;
use crate::ir::GraphError;
use crate::ir::NodeId;
use crate::ir::activation::ActivationFunction;
use crate::ir::descriptor::NodeTypeDescriptor;
use crate::ir::nodes::NodeHandle;
use crate::ir::nodes::raw_node::TraitNode;
use crate::ir::shape::PartialShape;

#[derive(Clone)]
pub(in crate::ir) struct Activation {
    id: NodeId,
    name: String,
    shape: PartialShape,
    func: ActivationFunction,
    parents_ids: Vec<NodeId>,
}

impl Activation {
    pub(in crate::ir) fn new(
        parents: &[&NodeHandle],
        func: ActivationFunction,
    ) -> Result<Self, GraphError> {
        let shape = unary_output_shape(func.kind().name(), parents)?;
        Ok(Self {
            id: NodeId::UNBOUND,
            name: String::new(),
            shape,
            func,
            parents_ids: parents.iter().map(|p| p.id()).collect(),
        })
    }
}

impl TraitNode for Activation {
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
        self.func.kind().name()
    }

    fn expected_shape(&self) -> &PartialShape {
        &self.shape
    }

    fn parents_ids(&self) -> &[NodeId] {
        &self.parents_ids
    }

    fn type_descriptor(&self) -> NodeTypeDescriptor {
        NodeTypeDescriptor::Activation {
            function: self.func.kind(),
            alpha: self.func.alpha(),
            beta: self.func.beta(),
        }
    }
}
