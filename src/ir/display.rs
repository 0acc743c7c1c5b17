/*
 * @Author       : 老董
 * @Date         : 2026-10-19
 * @Description  : 图节点的显示格式化
 */

use super::NodeId;

/// 格式化图节点的显示
///
/// # Returns
/// 返回格式化后的字符串，格式为：`节点[id={}, name={}, type={}]`
pub(in crate::ir) fn format_node_display(id: NodeId, name: &str, type_name: &str) -> String {
    format!("节点[id={id}, name={name}, type={type_name}]")
}
