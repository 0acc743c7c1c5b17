/*
 * @Author       : 老董
 * @Date         : 2026-10-19
 * @Description  : 图描述符（Graph Descriptor）
 *                 可序列化的图结构快照，用于调试输出与工具间交换
 */

use super::activation::ActivationKind;
use super::shape::PartialShape;
use serde::{Deserialize, Serialize};

/// 图的可序列化描述
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphDescriptor {
    /// 格式版本（用于向后兼容）
    pub version: String,
    /// 图名称
    pub name: String,
    /// 所有节点描述，按 id 升序
    pub nodes: Vec<NodeDescriptor>,
}

/// 节点描述
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeDescriptor {
    pub id: u64,
    pub name: String,
    pub node_type: NodeTypeDescriptor,
    /// 构建期声明的输出形状
    pub output_shape: PartialShape,
    /// 父节点 ID 列表（定义拓扑）
    pub parents: Vec<u64>,
}

/// 节点类型描述（包含类型特定参数）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum NodeTypeDescriptor {
    Parameter,
    Add,
    Subtract,
    Multiply,
    Clamp {
        min: f32,
        max: f32,
    },
    Activation {
        function: ActivationKind,
        #[serde(skip_serializing_if = "Option::is_none", default)]
        alpha: Option<f32>,
        #[serde(skip_serializing_if = "Option::is_none", default)]
        beta: Option<f32>,
    },
}

impl GraphDescriptor {
    pub fn new(name: &str) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            name: name.to_string(),
            nodes: Vec::new(),
        }
    }

    pub fn add_node(&mut self, node: NodeDescriptor) {
        self.nodes.push(node);
    }

    /// 转换为 JSON 字符串
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// 从 JSON 字符串解析
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
