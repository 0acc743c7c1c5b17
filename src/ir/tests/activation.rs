/*
 * @Author       : 老董
 * @Description  : 激活函数注册表与解析测试
 */

use crate::assert_err;
use crate::ir::{ActivationFunction, ActivationKind, GraphError};
use approx::assert_abs_diff_eq;

#[test]
fn test_registry_lookup() {
    for kind in ActivationKind::ALL {
        assert_eq!(ActivationKind::from_name(kind.name()).unwrap(), kind);
    }
    assert_eq!(ActivationKind::from_name("tanh").unwrap(), ActivationKind::Tanh);
    assert_eq!(
        ActivationKind::from_name("hardsigmoid").unwrap(),
        ActivationKind::HardSigmoid
    );
}

/// 注册表本身只接受小写；大小写归一在 ActivationFunction::from_name 中完成
#[test]
fn test_registry_is_lowercase_only() {
    assert_err!(
        ActivationKind::from_name("Tanh"),
        GraphError::UnknownActivation("Tanh")
    );
    assert_eq!(
        ActivationFunction::from_name("Tanh").unwrap().kind(),
        ActivationKind::Tanh
    );
    assert_eq!(
        ActivationFunction::from_name("HardSigmoid").unwrap().kind(),
        ActivationKind::HardSigmoid
    );
}

#[test]
fn test_unknown_activation() {
    let result = ActivationFunction::from_name("Swish");
    assert_err!(result, GraphError::UnknownActivation("swish"));
    assert_eq!(
        result.unwrap_err().to_string(),
        "无法识别的激活函数：swish"
    );
    assert_err!(
        ActivationFunction::from_name(""),
        GraphError::UnknownActivation("")
    );
}

#[test]
fn test_alpha_beta_defaults() {
    // sigmoid 不使用参数
    let sigmoid = ActivationFunction::new(ActivationKind::Sigmoid);
    assert_eq!(sigmoid.alpha(), None);
    assert_eq!(sigmoid.effective_alpha(), None);
    assert_eq!(sigmoid.effective_beta(), None);

    // hardsigmoid 未配置时取默认 0.2 / 0.5
    let mut hard = ActivationFunction::new(ActivationKind::HardSigmoid);
    assert_eq!(hard.alpha(), None);
    assert_abs_diff_eq!(hard.effective_alpha().unwrap(), 0.2);
    assert_abs_diff_eq!(hard.effective_beta().unwrap(), 0.5);

    // 显式配置优先，且 alpha/beta 互不影响
    hard.set_alpha(0.25);
    assert_eq!(hard.alpha(), Some(0.25));
    assert_eq!(hard.beta(), None);
    assert_abs_diff_eq!(hard.effective_alpha().unwrap(), 0.25);
    assert_abs_diff_eq!(hard.effective_beta().unwrap(), 0.5);
}

#[test]
fn test_kind_display_and_serde() {
    assert_eq!(ActivationKind::HardSigmoid.to_string(), "hardsigmoid");
    assert_eq!(
        serde_json::to_string(&ActivationKind::HardSigmoid).unwrap(),
        "\"hardsigmoid\""
    );
    let kind: ActivationKind = serde_json::from_str("\"relu\"").unwrap();
    assert_eq!(kind, ActivationKind::Relu);
}
