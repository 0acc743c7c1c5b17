use super::raw_node::{NodeType, TraitNode};
use crate::ir::descriptor::NodeTypeDescriptor;
use crate::ir::shape::PartialShape;
use std::fmt;

/// 图中节点的唯一标识，由 `Graph` 分配，从 1 开始
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u64);

impl NodeId {
    /// 尚未加入图的节点所持有的占位 id
    pub(in crate::ir) const UNBOUND: Self = Self(0);
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 图内节点的统一外壳，屏蔽具体节点类型
pub(in crate::ir) struct NodeHandle {
    raw_node: NodeType,
}

impl NodeHandle {
    pub(in crate::ir) fn new<T: Into<NodeType>>(raw_node: T) -> Self {
        Self {
            raw_node: raw_node.into(),
        }
    }

    pub(in crate::ir) fn bind_id_and_name(&mut self, id: NodeId, name: &str) {
        self.raw_node.set_id(id);
        self.raw_node.set_name(name);
    }

    pub(in crate::ir) fn id(&self) -> NodeId {
        self.raw_node.id()
    }

    pub(in crate::ir) fn name(&self) -> &str {
        self.raw_node.name()
    }

    /// 父节点 id，按操作数顺序
    pub(in crate::ir) fn parents_ids(&self) -> &[NodeId] {
        self.raw_node.parents_ids()
    }

    pub(in crate::ir) fn expected_shape(&self) -> &PartialShape {
        self.raw_node.expected_shape()
    }

    pub(in crate::ir) fn type_descriptor(&self) -> NodeTypeDescriptor {
        self.raw_node.type_descriptor()
    }
}

impl fmt::Display for NodeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw_node.display_node())
    }
}
