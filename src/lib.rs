//! # RNN Cell IR
//!
//! 静态计算图 IR 中循环单元（RNN、LSTM、GRU 等）算子的公共校验与配置层。
//! 具体单元借助 [`ir::RnnCellBase`] 校验输入，并用它提供的构建辅助拼出门计算子图。
//! 本 crate 只声明与校验图结构，不执行任何计算。
//!

pub mod ir;
pub mod utils;
