/*
 * @Author       : 老董
 * @Date         : 2026-10-19
 * @Description  : Graph describe 相关方法
 */

use super::Graph;
use crate::ir::descriptor::{GraphDescriptor, NodeDescriptor};

impl Graph {
    /// 导出图的描述符（用于序列化、调试）
    ///
    /// # 示例
    /// ```
    /// use rnn_cell_ir::ir::{Graph, PartialShape};
    ///
    /// let mut graph = Graph::new();
    /// let x = graph.new_parameter_node(&PartialShape::fixed(&[2, 3]), Some("x")).unwrap();
    /// graph.new_add_node(x, x, None).unwrap();
    ///
    /// let descriptor = graph.describe();
    /// assert_eq!(descriptor.nodes.len(), 2);
    /// assert_eq!(descriptor.nodes[1].parents, vec![1, 1]);
    /// ```
    pub fn describe(&self) -> GraphDescriptor {
        let mut descriptor = GraphDescriptor::new(&self.name);

        // 按 ID 排序节点，确保输出顺序一致
        for node_id in self.nodes() {
            let Some(node) = self.nodes.get(&node_id) else {
                continue;
            };
            let parents = self
                .backward_edges
                .get(&node_id)
                .map(|ids| ids.iter().map(|id| id.0).collect())
                .unwrap_or_default();

            descriptor.add_node(NodeDescriptor {
                id: node_id.0,
                name: node.name().to_string(),
                node_type: node.type_descriptor(),
                output_shape: node.expected_shape().clone(),
                parents,
            });
        }

        descriptor
    }
}
