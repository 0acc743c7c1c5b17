/*
 * @Author       : 老董
 * @Description  : Graph::describe 与描述符 JSON 序列化测试
 */

use crate::ir::{
    ActivationFunction, ActivationKind, Graph, GraphDescriptor, NodeTypeDescriptor, PartialShape,
};

#[test]
fn test_describe_gate_graph() {
    let mut graph = Graph::with_name("gate");
    let x = graph
        .new_parameter_node(&PartialShape::with_dynamic_batch(&[32]), Some("x"))
        .unwrap();
    let b = graph
        .new_parameter_node(&PartialShape::fixed(&[32]), Some("b"))
        .unwrap();
    let sum = graph.new_add_node(x, b, None).unwrap();
    let clipped = graph.new_clamp_node(sum, -1.0, 1.0, Some("clipped")).unwrap();
    let mut func = ActivationFunction::new(ActivationKind::HardSigmoid);
    func.set_alpha(0.3);
    func.apply(&mut graph, clipped, None).unwrap();

    let descriptor = graph.describe();
    assert_eq!(descriptor.name, "gate");
    assert_eq!(descriptor.version, env!("CARGO_PKG_VERSION"));

    let names: Vec<&str> = descriptor.nodes.iter().map(|n| n.name.as_str()).collect();
    assert_eq!(names, vec!["x", "b", "add_1", "clipped", "hardsigmoid_1"]);

    let ids: Vec<u64> = descriptor.nodes.iter().map(|n| n.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);

    assert_eq!(descriptor.nodes[2].parents, vec![1, 2]);
    assert_eq!(descriptor.nodes[2].output_shape.to_string(), "[?, 32]");
    assert_eq!(
        descriptor.nodes[3].node_type,
        NodeTypeDescriptor::Clamp {
            min: -1.0,
            max: 1.0
        }
    );
    assert_eq!(
        descriptor.nodes[4].node_type,
        NodeTypeDescriptor::Activation {
            function: ActivationKind::HardSigmoid,
            alpha: Some(0.3),
            beta: None
        }
    );
}

#[test]
fn test_descriptor_json() {
    let mut graph = Graph::new();
    let x = graph
        .new_parameter_node(&PartialShape::dynamic_rank(), Some("x"))
        .unwrap();
    let t = graph
        .new_activation_node(x, ActivationFunction::new(ActivationKind::Tanh), None)
        .unwrap();
    graph.new_multiply_node(x, t, None).unwrap();

    let descriptor = graph.describe();
    let json = descriptor.to_json().unwrap();
    // 未配置的参数不出现在输出中
    assert!(json.contains("\"function\": \"tanh\""));
    assert!(!json.contains("alpha"));
    assert!(json.contains("\"type\": \"Multiply\""));

    let restored = GraphDescriptor::from_json(&json).unwrap();
    assert_eq!(restored, descriptor);
}
