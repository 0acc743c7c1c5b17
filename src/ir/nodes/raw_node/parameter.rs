use crate::ir::NodeId;
use crate::ir::descriptor::NodeTypeDescriptor;
use crate::ir::nodes::raw_node::TraitNode;
use crate::ir::shape::PartialShape;

/// 图的叶子节点：外部输入或权重，只声明形状
#[derive(Clone)]
pub(in crate::ir) struct Parameter {
    id: NodeId,
    name: String,
    shape: PartialShape,
}

impl Parameter {
    pub(in crate::ir) fn new(shape: &PartialShape) -> Self {
        Self {
            id: NodeId::UNBOUND,
            name: String::new(),
            shape: shape.clone(),
        }
    }
}

impl TraitNode for Parameter {
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
        "parameter"
    }

    fn expected_shape(&self) -> &PartialShape {
        &self.shape
    }

    fn type_descriptor(&self) -> NodeTypeDescriptor {
        NodeTypeDescriptor::Parameter
    }
}
