/*
 * @Author       : 老董
 * @Description  : Clamp 节点单元测试
 */

use crate::assert_err;
use crate::ir::{Graph, GraphError, NodeTypeDescriptor, PartialShape};

#[test]
fn test_clamp_creation() {
    let mut graph = Graph::new();
    let shape = PartialShape::with_dynamic_batch(&[64]);
    let x = graph.new_parameter_node(&shape, Some("x")).unwrap();
    let result = graph.new_clamp_node(x, -1.5, 1.5, None).unwrap();

    assert_eq!(graph.get_node_name(result).unwrap(), "clamp_1");
    assert_eq!(graph.get_node_parents(result).unwrap(), vec![x]);
    assert_eq!(graph.get_node_shape(result).unwrap(), &shape);
    assert_eq!(
        graph.get_node_type(result).unwrap(),
        NodeTypeDescriptor::Clamp {
            min: -1.5,
            max: 1.5
        }
    );
}

#[test]
fn test_clamp_invalid_bounds() {
    let mut graph = Graph::new();
    let x = graph
        .new_parameter_node(&PartialShape::fixed(&[2, 2]), Some("x"))
        .unwrap();

    // 1. 下界大于上界
    assert_err!(
        graph.new_clamp_node(x, 1.0, -1.0, None),
        GraphError::InvalidOperation("Clamp 的下界不能大于上界，但得到: [1, -1]")
    );

    // 2. 非有限值
    assert_err!(
        graph.new_clamp_node(x, f32::NEG_INFINITY, 1.0, None),
        GraphError::InvalidOperation(msg) if msg.contains("有限值")
    );
    assert_err!(
        graph.new_clamp_node(x, 0.0, f32::NAN, None),
        GraphError::InvalidOperation(_)
    );

    // 3. min == max 合法
    assert!(graph.new_clamp_node(x, 0.5, 0.5, None).is_ok());
}
