/*
 * @Author       : 老董
 * @Date         : 2026-10-19
 * @Description  : 激活函数解析：名称 -> 封闭的非线性种类 + 可选的 alpha/beta 参数
 *
 * 已知的非线性集合是固定的，注册表在首次使用时构建一次，此后只读。
 */

use super::graph::{Graph, GraphError};
use super::nodes::NodeId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// 已知的非线性种类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivationKind {
    Sigmoid,
    Tanh,
    Relu,
    /// y = max(0, min(1, alpha * x + beta))
    HardSigmoid,
}

/// 名称 -> 种类，键均为小写
static ACTIVATION_REGISTRY: LazyLock<HashMap<&'static str, ActivationKind>> =
    LazyLock::new(|| {
        ActivationKind::ALL
            .iter()
            .map(|&kind| (kind.name(), kind))
            .collect()
    });

impl ActivationKind {
    pub const ALL: [Self; 4] = [Self::Sigmoid, Self::Tanh, Self::Relu, Self::HardSigmoid];

    /// 规范（小写）名称
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Sigmoid => "sigmoid",
            Self::Tanh => "tanh",
            Self::Relu => "relu",
            Self::HardSigmoid => "hardsigmoid",
        }
    }

    /// 按名称查找，名称须已是小写
    pub fn from_name(name: &str) -> Result<Self, GraphError> {
        ACTIVATION_REGISTRY
            .get(name)
            .copied()
            .ok_or_else(|| GraphError::UnknownActivation(name.to_string()))
    }

    /// 未配置 alpha 时采用的默认值（不使用 alpha 的种类返回 None）
    pub const fn default_alpha(&self) -> Option<f32> {
        match self {
            Self::HardSigmoid => Some(0.2),
            _ => None,
        }
    }

    pub const fn default_beta(&self) -> Option<f32> {
        match self {
            Self::HardSigmoid => Some(0.5),
            _ => None,
        }
    }
}

impl fmt::Display for ActivationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// 已解析的激活函数：非线性种类 + 可选参数
///
/// 按需创建、不缓存的值类型。alpha 与 beta 相互独立，可以只配置其一。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivationFunction {
    kind: ActivationKind,
    alpha: Option<f32>,
    beta: Option<f32>,
}

impl ActivationFunction {
    pub const fn new(kind: ActivationKind) -> Self {
        Self {
            kind,
            alpha: None,
            beta: None,
        }
    }

    /// 按名称解析（大小写不敏感）
    ///
    /// # 示例
    /// ```
    /// use rnn_cell_ir::ir::{ActivationFunction, ActivationKind};
    ///
    /// let func = ActivationFunction::from_name("Sigmoid").unwrap();
    /// assert_eq!(func.kind(), ActivationKind::Sigmoid);
    /// assert!(ActivationFunction::from_name("swish").is_err());
    /// ```
    pub fn from_name(name: &str) -> Result<Self, GraphError> {
        ActivationKind::from_name(&name.to_lowercase()).map(Self::new)
    }

    pub const fn kind(&self) -> ActivationKind {
        self.kind
    }

    /// 显式配置的 alpha
    pub const fn alpha(&self) -> Option<f32> {
        self.alpha
    }

    /// 显式配置的 beta
    pub const fn beta(&self) -> Option<f32> {
        self.beta
    }

    pub fn set_alpha(&mut self, alpha: f32) {
        self.alpha = Some(alpha);
    }

    pub fn set_beta(&mut self, beta: f32) {
        self.beta = Some(beta);
    }

    /// 实际生效的 alpha：显式值优先，否则取该种类的默认值
    pub fn effective_alpha(&self) -> Option<f32> {
        self.alpha.or(self.kind.default_alpha())
    }

    pub fn effective_beta(&self) -> Option<f32> {
        self.beta.or(self.kind.default_beta())
    }

    /// 在图中为 `input` 施加本激活函数，返回新建的激活节点
    pub fn apply(
        &self,
        graph: &mut Graph,
        input: NodeId,
        name: Option<&str>,
    ) -> Result<NodeId, GraphError> {
        graph.new_activation_node(input, *self, name)
    }
}
