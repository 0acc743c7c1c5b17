/*
 * @Author       : 老董
 * @Date         : 2026-10-19
 * @Description  : PartialShape: 支持动态维度、动态秩的形状系统
 *
 * 静态计算图在构建时并不总能知道全部形状信息：
 * - 维度可能是动态的（如 batch），用 `None` 表示，显示为 `?`
 * - 秩（维度数量）本身也可能未知，显示为 `[...]`
 *
 * # 示例
 * ```
 * use rnn_cell_ir::ir::PartialShape;
 *
 * let fixed = PartialShape::fixed(&[32, 128]);
 * assert_eq!(fixed.to_string(), "[32, 128]");
 *
 * let dynamic_batch = PartialShape::with_dynamic_batch(&[128]);
 * assert_eq!(dynamic_batch.to_string(), "[?, 128]");
 *
 * let unknown = PartialShape::dynamic_rank();
 * assert_eq!(unknown.to_string(), "[...]");
 * ```
 */

use serde::{Deserialize, Serialize};
use std::fmt;

/// 维度值：Some(n) 表示固定值 n，None 表示动态（任意值）
pub type Dim = Option<usize>;

/// 两个维度是否兼容：值相等，或至少一方是动态的
pub fn dims_compatible(a: Dim, b: Dim) -> bool {
    match (a, b) {
        (None, _) | (_, None) => true,
        (Some(x), Some(y)) => x == y,
    }
}

/// 形状的秩
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rank {
    /// 构建期已知的维度数量
    Static(usize),
    /// 构建期未知
    Dynamic,
}

impl Rank {
    pub const fn is_static(&self) -> bool {
        matches!(self, Self::Static(_))
    }

    pub const fn is_dynamic(&self) -> bool {
        matches!(self, Self::Dynamic)
    }

    /// 静态秩的长度；动态秩返回 None
    pub const fn get_length(&self) -> Option<usize> {
        match self {
            Self::Static(len) => Some(*len),
            Self::Dynamic => None,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(len) => write!(f, "{len}"),
            Self::Dynamic => write!(f, "?"),
        }
    }
}

/// 部分已知的形状
///
/// `dims` 为 None 表示秩本身是动态的，此时任何维度都无从谈起。
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PartialShape {
    dims: Option<Vec<Dim>>,
}

impl PartialShape {
    /// 创建一个静态秩的形状，维度可以是动态的
    ///
    /// # 示例
    /// ```
    /// use rnn_cell_ir::ir::PartialShape;
    ///
    /// let shape = PartialShape::new(&[None, Some(128)]);
    /// assert_eq!(shape.rank().get_length(), Some(2));
    /// assert!(shape.is_dynamic(0));
    /// assert!(!shape.is_dynamic(1));
    /// ```
    pub fn new(dims: &[Dim]) -> Self {
        Self {
            dims: Some(dims.to_vec()),
        }
    }

    /// 从固定形状创建（所有维度都是确定的）
    pub fn fixed(dims: &[usize]) -> Self {
        Self {
            dims: Some(dims.iter().map(|&d| Some(d)).collect()),
        }
    }

    /// 秩未知的形状
    pub const fn dynamic_rank() -> Self {
        Self { dims: None }
    }

    /// 第一维动态（batch），其余维度固定
    pub fn with_dynamic_batch(feature_dims: &[usize]) -> Self {
        let mut dims = vec![None];
        dims.extend(feature_dims.iter().map(|&d| Some(d)));
        Self { dims: Some(dims) }
    }

    pub fn rank(&self) -> Rank {
        match &self.dims {
            Some(dims) => Rank::Static(dims.len()),
            None => Rank::Dynamic,
        }
    }

    /// 秩是否静态（不代表各维度都已确定）
    pub const fn is_static(&self) -> bool {
        self.dims.is_some()
    }

    /// 获取指定维度的值
    ///
    /// 维度动态、秩动态或越界时都返回 None，调用方若需区分越界，应先检查 `rank()`。
    pub fn dim(&self, index: usize) -> Dim {
        self.dims
            .as_ref()
            .and_then(|dims| dims.get(index).copied().flatten())
    }

    /// 检查指定维度是否是动态的（秩动态时视为动态）
    pub fn is_dynamic(&self, index: usize) -> bool {
        match &self.dims {
            Some(dims) => dims.get(index).is_some_and(Option::is_none),
            None => true,
        }
    }

    /// 是否存在任何未知信息（动态秩或动态维度）
    pub fn has_dynamic_dims(&self) -> bool {
        match &self.dims {
            Some(dims) => dims.iter().any(Option::is_none),
            None => true,
        }
    }

    /// 获取内部维度数组的引用；动态秩返回 None
    pub fn dims(&self) -> Option<&[Dim]> {
        self.dims.as_deref()
    }

    /// 转换为固定形状向量（仅当秩静态且所有维度都固定）
    pub fn to_vec_fixed(&self) -> Option<Vec<usize>> {
        self.dims.as_ref()?.iter().copied().collect()
    }

    /// 检查此形状是否与另一个形状兼容
    ///
    /// 兼容规则：
    /// - 任一方秩动态：兼容
    /// - 秩必须相同，且每个维度两两兼容（见 [`dims_compatible`]）
    ///
    /// # 示例
    /// ```
    /// use rnn_cell_ir::ir::PartialShape;
    ///
    /// let a = PartialShape::new(&[None, Some(128)]);
    /// assert!(a.compatible(&PartialShape::fixed(&[32, 128])));
    /// assert!(!a.compatible(&PartialShape::fixed(&[32, 64])));
    /// assert!(a.compatible(&PartialShape::dynamic_rank()));
    /// ```
    pub fn compatible(&self, other: &PartialShape) -> bool {
        match (&self.dims, &other.dims) {
            (Some(a), Some(b)) => {
                a.len() == b.len()
                    && a.iter().zip(b.iter()).all(|(&x, &y)| dims_compatible(x, y))
            }
            _ => true,
        }
    }

    /// 计算两个形状按 NumPy 规则广播后的形状
    ///
    /// - 任一方秩动态，结果秩动态
    /// - 从右对齐；固定维度需相等或其一为 1
    /// - 动态维度遇到固定值 n（n != 1）时取 n，遇到 1 或动态时仍为动态
    ///
    /// 两个形状无法广播时返回 None。
    pub fn broadcast_with(&self, other: &PartialShape) -> Option<PartialShape> {
        let (Some(a), Some(b)) = (&self.dims, &other.dims) else {
            return Some(Self::dynamic_rank());
        };

        let ndim = a.len().max(b.len());
        let mut dims = Vec::with_capacity(ndim);
        for i in 0..ndim {
            // 从右往左取，缺失的前导维度视为 1
            let x = a.len().checked_sub(ndim - i).map_or(Some(1), |j| a[j]);
            let y = b.len().checked_sub(ndim - i).map_or(Some(1), |j| b[j]);
            let dim = match (x, y) {
                (Some(x), Some(y)) if x == y => Some(x),
                (Some(1), other) | (other, Some(1)) => other,
                (None, None) => None,
                (None, Some(n)) | (Some(n), None) => Some(n),
                (Some(_), Some(_)) => return None,
            };
            dims.push(dim);
        }
        Some(Self { dims: Some(dims) })
    }
}

impl fmt::Display for PartialShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(dims) = &self.dims else {
            return write!(f, "[...]");
        };
        let parts: Vec<String> = dims
            .iter()
            .map(|d| match d {
                Some(n) => n.to_string(),
                None => "?".to_string(),
            })
            .collect();
        write!(f, "[{}]", parts.join(", "))
    }
}

impl From<&[usize]> for PartialShape {
    fn from(shape: &[usize]) -> Self {
        Self::fixed(shape)
    }
}

impl From<Vec<usize>> for PartialShape {
    fn from(shape: Vec<usize>) -> Self {
        Self::fixed(&shape)
    }
}
