mod ops;
mod parameter;

pub(in crate::ir) use ops::*;
pub(in crate::ir) use parameter::Parameter;

use crate::ir::NodeId;
use crate::ir::descriptor::NodeTypeDescriptor;
use crate::ir::display::format_node_display;
use crate::ir::shape::PartialShape;
use enum_dispatch::enum_dispatch;

#[enum_dispatch]
#[derive(Clone)]
pub(in crate::ir) enum NodeType {
    Parameter(Parameter),
    Add(Add),
    Subtract(Subtract),
    Multiply(Multiply),
    Clamp(Clamp),
    Activation(Activation),
}

#[enum_dispatch(NodeType)]
pub(in crate::ir) trait TraitNode {
    fn id(&self) -> NodeId;

    fn set_id(&mut self, id: NodeId);

    fn name(&self) -> &str;

    fn set_name(&mut self, name: &str);

    /// 节点类型名，也用作自动命名的前缀
    fn type_name(&self) -> &'static str;

    /// 本节点输出在图构建期声明的形状
    fn expected_shape(&self) -> &PartialShape;

    fn parents_ids(&self) -> &[NodeId] {
        &[]
    }

    /// 导出为可序列化的类型描述（含类型特定参数）
    fn type_descriptor(&self) -> NodeTypeDescriptor;

    fn display_node(&self) -> String {
        format_node_display(self.id(), self.name(), self.type_name())
    }
}
