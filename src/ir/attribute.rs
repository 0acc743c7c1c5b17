/*
 * @Author       : 老董
 * @Date         : 2026-10-19
 * @Description  : 节点属性访问器
 *
 * 节点通过 `visit_attributes` 把自己的配置字段逐个交给访问器，
 * 访问器可以只读（序列化、检视），也可以回写（反序列化）。
 * 这样通用工具无需知道具体节点类型就能读写其配置。
 */

use super::graph::GraphError;
use serde_json::{Map, Value};

/// 具名属性的访问器
///
/// 每个方法拿到的是字段的可变引用：只读的访问器不修改它，回写的访问器可以覆盖它。
pub trait AttributeVisitor {
    fn on_usize(&mut self, name: &str, value: &mut usize);

    fn on_f32(&mut self, name: &str, value: &mut f32);

    fn on_strings(&mut self, name: &str, value: &mut Vec<String>);

    fn on_f32s(&mut self, name: &str, value: &mut Vec<f32>);
}

/// 把访问到的属性收集为 JSON 对象
#[derive(Debug, Default)]
pub struct JsonAttributeWriter {
    map: Map<String, Value>,
}

impl JsonAttributeWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.map
    }
}

impl AttributeVisitor for JsonAttributeWriter {
    fn on_usize(&mut self, name: &str, value: &mut usize) {
        self.map.insert(name.to_string(), Value::from(*value));
    }

    fn on_f32(&mut self, name: &str, value: &mut f32) {
        self.map.insert(name.to_string(), Value::from(*value));
    }

    fn on_strings(&mut self, name: &str, value: &mut Vec<String>) {
        self.map.insert(name.to_string(), Value::from(value.clone()));
    }

    fn on_f32s(&mut self, name: &str, value: &mut Vec<f32>) {
        self.map.insert(name.to_string(), Value::from(value.clone()));
    }
}

/// 从 JSON 对象回写属性
///
/// 缺失的键保持字段原值；类型不符的键记为错误，由 [`JsonAttributeReader::finish`] 统一返回。
#[derive(Debug)]
pub struct JsonAttributeReader<'a> {
    map: &'a Map<String, Value>,
    errors: Vec<String>,
}

impl<'a> JsonAttributeReader<'a> {
    pub fn new(map: &'a Map<String, Value>) -> Self {
        Self {
            map,
            errors: Vec::new(),
        }
    }

    /// 结束读取，报告期间遇到的所有类型错误
    pub fn finish(self) -> Result<(), GraphError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(GraphError::InvalidOperation(format!(
                "属性读取失败：{}",
                self.errors.join("；")
            )))
        }
    }

    fn report(&mut self, name: &str, expected: &str) {
        log::warn!("属性{name}不是{expected}，已忽略");
        self.errors.push(format!("{name}应为{expected}"));
    }
}

impl AttributeVisitor for JsonAttributeReader<'_> {
    fn on_usize(&mut self, name: &str, value: &mut usize) {
        let Some(raw) = self.map.get(name) else {
            return;
        };
        match raw.as_u64().and_then(|v| usize::try_from(v).ok()) {
            Some(v) => *value = v,
            None => self.report(name, "非负整数"),
        }
    }

    fn on_f32(&mut self, name: &str, value: &mut f32) {
        let Some(raw) = self.map.get(name) else {
            return;
        };
        match raw.as_f64() {
            Some(v) => *value = v as f32,
            None => self.report(name, "数值"),
        }
    }

    fn on_strings(&mut self, name: &str, value: &mut Vec<String>) {
        let Some(raw) = self.map.get(name) else {
            return;
        };
        let parsed: Option<Vec<String>> = raw
            .as_array()
            .and_then(|items| items.iter().map(|v| v.as_str().map(str::to_string)).collect());
        match parsed {
            Some(v) => *value = v,
            None => self.report(name, "字符串数组"),
        }
    }

    fn on_f32s(&mut self, name: &str, value: &mut Vec<f32>) {
        let Some(raw) = self.map.get(name) else {
            return;
        };
        let parsed: Option<Vec<f32>> = raw
            .as_array()
            .and_then(|items| items.iter().map(|v| v.as_f64().map(|f| f as f32)).collect());
        match parsed {
            Some(v) => *value = v,
            None => self.report(name, "数值数组"),
        }
    }
}
