/*
 * @Author       : 老董
 * @Date         : 2026-10-19
 * @Description  : Graph 节点构建方法（new_*_node）
 */

use super::{Graph, GraphError};
use crate::ir::NodeId;
use crate::ir::activation::ActivationFunction;
use crate::ir::nodes::NodeHandle;
use crate::ir::nodes::raw_node::{Activation, Add, Clamp, Multiply, Parameter, Subtract};
use crate::ir::shape::PartialShape;

impl Graph {
    /// 创建参数节点（图输入或权重），只声明形状
    pub fn new_parameter_node(
        &mut self,
        shape: &PartialShape,
        name: Option<&str>,
    ) -> Result<NodeId, GraphError> {
        let node = NodeHandle::new(Parameter::new(shape));
        self.add_node_to_list(node, name, "parameter")
    }

    /// 创建 Add 节点：`lhs + rhs`
    pub fn new_add_node(
        &mut self,
        lhs: NodeId,
        rhs: NodeId,
        name: Option<&str>,
    ) -> Result<NodeId, GraphError> {
        let parents = self.get_nodes(&[lhs, rhs])?;
        let node = NodeHandle::new(Add::new(&parents)?);
        self.add_node_to_list(node, name, "add")
    }

    /// 创建 Subtract 节点：`lhs - rhs`
    pub fn new_subtract_node(
        &mut self,
        lhs: NodeId,
        rhs: NodeId,
        name: Option<&str>,
    ) -> Result<NodeId, GraphError> {
        let parents = self.get_nodes(&[lhs, rhs])?;
        let node = NodeHandle::new(Subtract::new(&parents)?);
        self.add_node_to_list(node, name, "subtract")
    }

    /// 创建 Multiply 节点：`lhs ⊙ rhs`
    pub fn new_multiply_node(
        &mut self,
        lhs: NodeId,
        rhs: NodeId,
        name: Option<&str>,
    ) -> Result<NodeId, GraphError> {
        let parents = self.get_nodes(&[lhs, rhs])?;
        let node = NodeHandle::new(Multiply::new(&parents)?);
        self.add_node_to_list(node, name, "multiply")
    }

    /// 创建 Clamp 节点：把 `input` 截断到 `[min, max]`
    pub fn new_clamp_node(
        &mut self,
        input: NodeId,
        min: f32,
        max: f32,
        name: Option<&str>,
    ) -> Result<NodeId, GraphError> {
        let parents = self.get_nodes(&[input])?;
        let node = NodeHandle::new(Clamp::new(&parents, min, max)?);
        self.add_node_to_list(node, name, "clamp")
    }

    /// 创建激活节点，自动命名时以激活函数名为前缀（如 `sigmoid_1`）
    pub fn new_activation_node(
        &mut self,
        input: NodeId,
        func: ActivationFunction,
        name: Option<&str>,
    ) -> Result<NodeId, GraphError> {
        let parents = self.get_nodes(&[input])?;
        let node = NodeHandle::new(Activation::new(&parents, func)?);
        self.add_node_to_list(node, name, func.kind().name())
    }
}
