/*
 * @Author       : 老董
 * @Description  : RnnCellBase 构造与访问器测试
 */

use crate::assert_err;
use crate::ir::{GateParams, GraphError, RnnCellBase};

#[test]
fn test_default_is_unconfigured() {
    let cell = RnnCellBase::default();
    assert_eq!(cell.hidden_size(), 0);
    assert_eq!(cell.clip_bound(), 0.0);
    assert!(cell.activations().is_empty());
    assert!(cell.activations_alpha().is_empty());
    assert!(cell.activations_beta().is_empty());
    assert_eq!(cell.gate_count(), 0);
}

#[test]
fn test_activation_names_normalized_to_lowercase() {
    let cell = RnnCellBase::new(32, 0.0, &["Sigmoid", "TANH", "tanh", "ReLu"], &[], &[]).unwrap();
    assert_eq!(cell.activations(), &["sigmoid", "tanh", "tanh", "relu"]);
    assert!(
        cell.activations()
            .iter()
            .all(|name| *name == name.to_lowercase())
    );

    // String 与 &str 都可作为输入
    let names = vec!["HardSigmoid".to_string()];
    let cell = RnnCellBase::new(8, 0.0, &names, &[], &[]).unwrap();
    assert_eq!(cell.activations(), &["hardsigmoid"]);
}

/// 未知名称在构造时不报错，解析时才报错
#[test]
fn test_unknown_name_is_stored_verbatim() {
    let cell = RnnCellBase::new(4, 0.0, &["Swish"], &[], &[]).unwrap();
    assert_eq!(cell.activations(), &["swish"]);
}

#[test]
fn test_fields_stored() {
    let cell = RnnCellBase::new(
        128,
        3.5,
        &["sigmoid", "tanh", "tanh"],
        &[0.1, 0.2],
        &[0.3],
    )
    .unwrap();
    assert_eq!(cell.hidden_size(), 128);
    assert_eq!(cell.clip_bound(), 3.5);
    assert_eq!(cell.gate_count(), 3);

    // alpha/beta 按门对齐，缺失的门显式为 None
    assert_eq!(cell.activations_alpha().len(), 3);
    assert_eq!(cell.activations_alpha().get(0), Some(0.1));
    assert_eq!(cell.activations_alpha().get(1), Some(0.2));
    assert_eq!(cell.activations_alpha().get(2), None);
    assert_eq!(cell.activations_beta().get(0), Some(0.3));
    assert_eq!(cell.activations_beta().get(1), None);
    assert_eq!(cell.activations_alpha().to_positional(), vec![0.1, 0.2]);
    assert_eq!(cell.activations_beta().to_positional(), vec![0.3]);
}

#[test]
fn test_invalid_clip() {
    assert_err!(
        RnnCellBase::new(4, -1.0, &["tanh"], &[], &[]),
        GraphError::InvalidOperation("RNNCellBase 的clip应为有限非负数，但得到: -1")
    );
    assert_err!(
        RnnCellBase::new(4, f32::NAN, &["tanh"], &[], &[]),
        GraphError::InvalidOperation(_)
    );
    assert_err!(
        RnnCellBase::new(4, f32::INFINITY, &["tanh"], &[], &[]),
        GraphError::InvalidOperation(_)
    );
}

#[test]
fn test_params_longer_than_activations() {
    assert_err!(
        RnnCellBase::new(4, 0.0, &["tanh"], &[0.1, 0.2], &[]),
        GraphError::InvalidOperation("RNNCellBase 的activations_alpha长度2超过了激活函数个数1")
    );
    assert_err!(
        RnnCellBase::new(4, 0.0, &["tanh"], &[], &[0.1, 0.2]),
        GraphError::InvalidOperation(msg) if msg.contains("activations_beta")
    );
}

#[test]
fn test_gate_params() {
    let params = GateParams::from_positional(&[1.0, 2.0], 4);
    assert_eq!(params.len(), 4);
    assert_eq!(params.get(1), Some(2.0));
    assert_eq!(params.get(2), None);
    // 越界视为未配置
    assert_eq!(params.get(10), None);

    // 多余的值被丢弃
    let truncated = GateParams::from_positional(&[1.0, 2.0, 3.0], 2);
    assert_eq!(truncated.to_positional(), vec![1.0, 2.0]);

    assert!(GateParams::from_positional(&[], 0).is_empty());
}

#[test]
fn test_non_finite_params() {
    assert_err!(
        RnnCellBase::new(8, 0.0, &["hardsigmoid"], &[f32::INFINITY], &[]),
        GraphError::InvalidOperation("RNNCellBase 的activations_alpha第0个值应为有限数，但得到: inf")
    );
    assert_err!(
        RnnCellBase::new(8, 0.0, &["hardsigmoid", "tanh"], &[0.2], &[0.5, f32::NAN]),
        GraphError::InvalidOperation(msg) if msg.contains("activations_beta第1个值")
    );
}

/// 凡是构造成功的配置，导出属性后都能原样重建
#[test]
fn test_accepted_config_survives_json() {
    let cell = RnnCellBase::new(8, 0.0, &["hardsigmoid"], &[f32::MAX], &[-0.0]).unwrap();
    let restored = RnnCellBase::from_json_attributes(&cell.to_json_attributes()).unwrap();
    assert_eq!(restored, cell);
}
