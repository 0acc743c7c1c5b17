/*
 * @Author       : 老董
 * @Date         : 2026-10-19
 * @Description  : 循环单元（RNN/LSTM/GRU 等）算子的公共基础
 *
 * 具体的循环单元在插入图之前，借助本模块完成：
 * 1. 输入形状校验（秩 + input_size 维度）
 * 2. 按门解析激活函数（含可选的 alpha/beta）
 * 3. 用 add/subtract/multiply/clip 拼出门的计算子图
 *
 * 输入约定（按顺序）：X, initial_hidden_state, W, R, B
 * - X: [batch, input_size]
 * - initial_hidden_state: [batch, hidden_size]
 * - W: [gates * hidden_size, input_size]
 * - R: [gates * hidden_size, hidden_size]
 * - B: [gates * hidden_size]
 *
 * 门的个数以及 hidden_size 的倍数由具体单元自行校验，这里不涉及。
 */

use super::activation::ActivationFunction;
use super::attribute::{AttributeVisitor, JsonAttributeReader, JsonAttributeWriter};
use super::graph::{Graph, GraphError};
use super::nodes::NodeId;
use super::shape::{PartialShape, dims_compatible};
use serde_json::{Map, Value};
use std::fmt;

// 输入角色下标
const X: usize = 0;
const W: usize = 2;
const B: usize = 4;

/// 按门存放的可选参数（alpha 或 beta），长度等于门数
///
/// 外部（属性、构造参数）以定长前缀的浮点序列表示：序列短于门数时，
/// 尾部的门没有参数。内部则显式地用 `None` 表示"未配置"。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GateParams(Vec<Option<f32>>);

impl GateParams {
    /// 由前缀序列构造，`values` 超出 `gate_count` 的部分被丢弃
    pub fn from_positional(values: &[f32], gate_count: usize) -> Self {
        let mut params: Vec<Option<f32>> =
            values.iter().take(gate_count).map(|&v| Some(v)).collect();
        params.resize(gate_count, None);
        Self(params)
    }

    /// 第 `gate` 个门的参数；未配置或越界返回 None
    pub fn get(&self, gate: usize) -> Option<f32> {
        self.0.get(gate).copied().flatten()
    }

    /// 门数
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// 转回前缀序列（遇到第一个未配置的门即止）
    pub fn to_positional(&self) -> Vec<f32> {
        self.0.iter().map_while(|v| *v).collect()
    }
}

/// 循环单元的共享配置
///
/// 构造后不可变，由具体单元独占。默认值（全 0、空序列）表示"未配置"，不是可用的单元。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RnnCellBase {
    hidden_size: usize,
    /// 对称截断界，0 表示不截断
    clip: f32,
    /// 每个门一个激活函数名，已统一为小写
    activations: Vec<String>,
    activations_alpha: GateParams,
    activations_beta: GateParams,
}

impl RnnCellBase {
    /// 创建循环单元配置
    ///
    /// # 参数
    /// - `hidden_size`: 隐藏状态维度
    /// - `clip`: 对称截断界，须为有限非负数；0 表示不截断
    /// - `activations`: 每个门的激活函数名（大小写不敏感）
    /// - `activations_alpha` / `activations_beta`: 各门的可选参数，可以短于 `activations`
    ///
    /// # 示例
    /// ```
    /// use rnn_cell_ir::ir::RnnCellBase;
    ///
    /// let cell = RnnCellBase::new(32, 0.0, &["Sigmoid", "TANH", "tanh"], &[], &[]).unwrap();
    /// assert_eq!(cell.activations(), &["sigmoid", "tanh", "tanh"]);
    /// ```
    pub fn new<S: AsRef<str>>(
        hidden_size: usize,
        clip: f32,
        activations: &[S],
        activations_alpha: &[f32],
        activations_beta: &[f32],
    ) -> Result<Self, GraphError> {
        // 1. 必要的验证
        if !clip.is_finite() || clip < 0.0 {
            return Err(GraphError::InvalidOperation(format!(
                "RNNCellBase 的clip应为有限非负数，但得到: {clip}"
            )));
        }
        let gate_count = activations.len();
        for (param_name, params) in [
            ("activations_alpha", activations_alpha),
            ("activations_beta", activations_beta),
        ] {
            if params.len() > gate_count {
                return Err(GraphError::InvalidOperation(format!(
                    "RNNCellBase 的{param_name}长度{}超过了激活函数个数{gate_count}",
                    params.len()
                )));
            }
            // NaN/inf 无法写入 JSON 属性
            if let Some((gate, value)) =
                params.iter().enumerate().find(|(_, v)| !v.is_finite())
            {
                return Err(GraphError::InvalidOperation(format!(
                    "RNNCellBase 的{param_name}第{gate}个值应为有限数，但得到: {value}"
                )));
            }
        }

        // 2. 返回
        Ok(Self {
            hidden_size,
            clip,
            activations: to_lower_case(activations),
            activations_alpha: GateParams::from_positional(activations_alpha, gate_count),
            activations_beta: GateParams::from_positional(activations_beta, gate_count),
        })
    }

    // ========== 访问器 ==========

    pub const fn hidden_size(&self) -> usize {
        self.hidden_size
    }

    /// 对称截断界，0 表示不截断
    pub const fn clip_bound(&self) -> f32 {
        self.clip
    }

    pub fn activations(&self) -> &[String] {
        &self.activations
    }

    pub const fn activations_alpha(&self) -> &GateParams {
        &self.activations_alpha
    }

    pub const fn activations_beta(&self) -> &GateParams {
        &self.activations_beta
    }

    /// 门数，即配置的激活函数个数
    pub fn gate_count(&self) -> usize {
        self.activations.len()
    }

    // ========== 属性 ==========

    /// 依次访问 `hidden_size`、`activations`、`activations_alpha`、`activations_beta`、`clip`
    ///
    /// 访问器回写的值会被重新规范化：激活函数名转小写，alpha/beta 按新的门数重新对齐。
    /// 总是返回 true。
    pub fn visit_attributes(&mut self, visitor: &mut dyn AttributeVisitor) -> bool {
        let mut alpha = self.activations_alpha.to_positional();
        let mut beta = self.activations_beta.to_positional();

        visitor.on_usize("hidden_size", &mut self.hidden_size);
        visitor.on_strings("activations", &mut self.activations);
        visitor.on_f32s("activations_alpha", &mut alpha);
        visitor.on_f32s("activations_beta", &mut beta);
        visitor.on_f32("clip", &mut self.clip);

        self.activations = to_lower_case(&self.activations);
        let gate_count = self.gate_count();
        if alpha.len() > gate_count || beta.len() > gate_count {
            log::warn!(
                "RNNCellBase 的alpha/beta长度({}/{})超过门数{gate_count}，多余部分被忽略",
                alpha.len(),
                beta.len()
            );
        }
        self.activations_alpha = GateParams::from_positional(&alpha, gate_count);
        self.activations_beta = GateParams::from_positional(&beta, gate_count);
        true
    }

    /// 把五个属性导出为 JSON 对象
    pub fn to_json_attributes(&self) -> Map<String, Value> {
        let mut writer = JsonAttributeWriter::new();
        self.clone().visit_attributes(&mut writer);
        writer.into_map()
    }

    /// 从 JSON 对象重建配置，缺失的属性取默认值，结果与 [`RnnCellBase::new`] 一样经过校验
    pub fn from_json_attributes(map: &Map<String, Value>) -> Result<Self, GraphError> {
        let mut raw = Self::default();
        let mut reader = JsonAttributeReader::new(map);
        raw.visit_attributes(&mut reader);
        reader.finish()?;

        Self::new(
            raw.hidden_size,
            raw.clip,
            &raw.activations,
            &raw.activations_alpha.to_positional(),
            &raw.activations_beta.to_positional(),
        )
    }

    // ========== 校验 ==========

    /// 校验输入张量的秩与 input_size 维度
    ///
    /// `node` 是调用方（具体单元）自身的标识，用于错误归属。
    /// 顺序不可调换：先确认所有输入都是静态秩，再检查各自的秩，最后才读取具体维度。
    pub fn validate_input_rank_dimension(
        &self,
        node: impl fmt::Display,
        inputs: &[PartialShape],
    ) -> Result<(), GraphError> {
        let fail = |message: String| -> Result<(), GraphError> {
            log::warn!("{node}输入校验失败：{message}");
            Err(GraphError::NodeValidation {
                node: node.to_string(),
                message,
            })
        };

        // 1. 所有输入必须是静态秩
        for (i, input) in inputs.iter().enumerate() {
            if input.rank().is_dynamic() {
                return fail(format!(
                    "RNNCellBase 仅支持静态秩的输入张量，第{i}个输入的秩是动态的"
                ));
            }
        }

        // 2. B 为 1 维，其余为 2 维
        for (i, input) in inputs.iter().enumerate() {
            let rank = input.rank().get_length().unwrap_or_default();
            if i == B {
                if rank != 1 {
                    return fail(format!(
                        "RNNCellBase 第{i}个(B)输入张量的秩不正确：当前为{rank}，期望为1"
                    ));
                }
            } else if rank != 2 {
                return fail(format!(
                    "RNNCellBase 第{i}个输入张量的秩不正确：当前为{rank}，期望为2"
                ));
            }
        }

        // 3. X 与 W 的 input_size 维度须兼容
        let (Some(x_shape), Some(w_shape)) = (inputs.get(X), inputs.get(W)) else {
            return fail(format!(
                "RNNCellBase 至少需要X、initial_hidden_state、W共3个输入，但只得到{}个",
                inputs.len()
            ));
        };
        if !dims_compatible(x_shape.dim(1), w_shape.dim(1)) {
            return fail(format!(
                "RNNCellBase mismatched input_size dimension：X为{x_shape}，W为{w_shape}"
            ));
        }

        Ok(())
    }

    // ========== 激活函数 ==========

    /// 解析第 `idx` 个门的激活函数，并附上该门配置的 alpha/beta
    ///
    /// # Panics
    /// `idx` 超出已配置的门数。具体单元只应请求其声明范围内的门，越界属于实现错误。
    pub fn get_activation_function(&self, idx: usize) -> Result<ActivationFunction, GraphError> {
        assert!(
            idx < self.activations.len(),
            "激活函数下标{idx}越界，当前只配置了{}个",
            self.activations.len()
        );

        let mut func = ActivationFunction::from_name(&self.activations[idx])?;
        if let Some(alpha) = self.activations_alpha.get(idx) {
            func.set_alpha(alpha);
        }
        if let Some(beta) = self.activations_beta.get(idx) {
            func.set_beta(beta);
        }
        Ok(func)
    }

    // ========== 门计算的构建辅助 ==========

    pub fn add(graph: &mut Graph, lhs: NodeId, rhs: NodeId) -> Result<NodeId, GraphError> {
        graph.new_add_node(lhs, rhs, None)
    }

    pub fn subtract(graph: &mut Graph, lhs: NodeId, rhs: NodeId) -> Result<NodeId, GraphError> {
        graph.new_subtract_node(lhs, rhs, None)
    }

    pub fn multiply(graph: &mut Graph, lhs: NodeId, rhs: NodeId) -> Result<NodeId, GraphError> {
        graph.new_multiply_node(lhs, rhs, None)
    }

    /// 按配置的 clip 截断 `data`
    ///
    /// clip 为 0 时不建新节点，原样返回 `data`；否则返回截断到 `[-clip, clip]` 的 Clamp 节点。
    pub fn clip(&self, graph: &mut Graph, data: NodeId) -> Result<NodeId, GraphError> {
        if self.clip == 0.0 {
            // 仍需确认节点存在，与其它构建方法一致
            graph.get_node(data)?;
            log::debug!("clip为0，跳过对节点{data}的截断");
            return Ok(data);
        }
        graph.new_clamp_node(data, -self.clip, self.clip, None)
    }
}

fn to_lower_case<S: AsRef<str>>(names: &[S]) -> Vec<String> {
    names.iter().map(|s| s.as_ref().to_lowercase()).collect()
}
