/*
 * @Author       : 老董
 * @Date         : 2026-10-19
 * @Description  : Graph 创建 + 基础访问器
 */

use super::{Graph, GraphError};
use crate::ir::NodeId;
use crate::ir::descriptor::NodeTypeDescriptor;
use crate::ir::nodes::NodeHandle;
use crate::ir::shape::PartialShape;
use std::collections::{HashMap, HashSet};

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl Graph {
    // ========== 创建 ==========

    pub fn new() -> Self {
        Self::with_name("default_graph")
    }

    pub fn with_name(name: &str) -> Self {
        Self {
            name: name.to_string(),
            nodes: HashMap::new(),
            forward_edges: HashMap::new(),
            backward_edges: HashMap::new(),
            node_names: HashSet::new(),
            name_counters: HashMap::new(),
            next_id: 0,
        }
    }

    // ========== 基础访问器 ==========

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn nodes(&self) -> Vec<NodeId> {
        let mut ids: Vec<_> = self.nodes.keys().copied().collect();
        ids.sort();
        ids
    }

    pub fn nodes_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn contains_node(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    pub(in crate::ir) fn get_node(&self, id: NodeId) -> Result<&NodeHandle, GraphError> {
        self.nodes.get(&id).ok_or(GraphError::NodeNotFound(id))
    }

    pub(in crate::ir) fn get_nodes(&self, ids: &[NodeId]) -> Result<Vec<&NodeHandle>, GraphError> {
        ids.iter().map(|&id| self.get_node(id)).collect()
    }

    pub fn get_node_name(&self, id: NodeId) -> Result<&str, GraphError> {
        Ok(self.get_node(id)?.name())
    }

    /// 节点输出在构建期声明的形状
    pub fn get_node_shape(&self, id: NodeId) -> Result<&PartialShape, GraphError> {
        Ok(self.get_node(id)?.expected_shape())
    }

    pub fn get_node_type(&self, id: NodeId) -> Result<NodeTypeDescriptor, GraphError> {
        Ok(self.get_node(id)?.type_descriptor())
    }

    pub fn get_node_parents(&self, id: NodeId) -> Result<Vec<NodeId>, GraphError> {
        // 先检查节点是否存在
        let _ = self.get_node(id)?;
        Ok(self.backward_edges.get(&id).cloned().unwrap_or_default())
    }

    pub fn get_node_children(&self, id: NodeId) -> Result<Vec<NodeId>, GraphError> {
        let _ = self.get_node(id)?;
        Ok(self.forward_edges.get(&id).cloned().unwrap_or_default())
    }

    /// 节点的可读描述，格式同错误信息中的 `节点[id=.., name=.., type=..]`
    pub fn display_node(&self, id: NodeId) -> Result<String, GraphError> {
        Ok(self.get_node(id)?.to_string())
    }

    // ========== 内部：id 与名称 ==========

    pub(in crate::ir::graph) const fn generate_valid_node_id(&mut self) -> NodeId {
        self.next_id += 1;
        NodeId(self.next_id)
    }

    fn check_duplicate_node_name(&self, name: &str) -> Result<(), GraphError> {
        if self.node_names.contains(name) {
            return Err(GraphError::DuplicateNodeName(format!(
                "节点{}在图{}中重复",
                name,
                self.name()
            )));
        }
        Ok(())
    }

    pub(in crate::ir::graph) fn generate_valid_new_node_name(
        &mut self,
        base_name: &str,
        node_type: &str,
    ) -> Result<String, GraphError> {
        // 若用户提供了名称，检查重复并直接返回错误
        if !base_name.is_empty() {
            self.check_duplicate_node_name(base_name)?;
            return Ok(base_name.to_string());
        }

        // 从该类型上次用到的序号之后继续，只有用户占用了同名时才需要跳过
        let counter = self.name_counters.entry(node_type.to_string()).or_default();
        loop {
            *counter += 1;
            let name = format!("{node_type}_{counter}");
            if !self.node_names.contains(&name) {
                return Ok(name);
            }
        }
    }

    /// 把已构造的节点登记到图中，建立边并分配 id/名称
    pub(in crate::ir::graph) fn add_node_to_list(
        &mut self,
        mut node_handle: NodeHandle,
        name: Option<&str>,
        node_type: &str,
    ) -> Result<NodeId, GraphError> {
        let node_name = self.generate_valid_new_node_name(name.unwrap_or(""), node_type)?;
        let node_id = self.generate_valid_node_id();

        let parents = node_handle.parents_ids().to_vec();
        for &parent_id in &parents {
            self.forward_edges
                .entry(parent_id)
                .or_default()
                .push(node_id);
        }
        self.backward_edges
            .entry(node_id)
            .or_default()
            .extend(parents);

        node_handle.bind_id_and_name(node_id, &node_name);
        self.node_names.insert(node_name);
        log::debug!("图{}新增{}", self.name, node_handle);
        self.nodes.insert(node_id, node_handle);
        Ok(node_id)
    }
}
