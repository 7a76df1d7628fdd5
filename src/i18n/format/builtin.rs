//! 内置解码函数
//!
//! 支持 json/json5/yaml/yml/toml，统一解码为 JsonValue

use once_cell::sync::Lazy;
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::i18n::core::UnmarshalFunc;

fn from_utf8(buf: &[u8]) -> anyhow::Result<&str> {
    Ok(std::str::from_utf8(buf)?)
}

fn unmarshal_json(buf: &[u8]) -> anyhow::Result<JsonValue> {
    Ok(serde_json::from_slice(buf)?)
}

fn unmarshal_json5(buf: &[u8]) -> anyhow::Result<JsonValue> {
    Ok(json5::from_str(from_utf8(buf)?)?)
}

fn unmarshal_yaml(buf: &[u8]) -> anyhow::Result<JsonValue> {
    Ok(serde_yaml::from_slice(buf)?)
}

fn unmarshal_toml(buf: &[u8]) -> anyhow::Result<JsonValue> {
    Ok(toml::from_str(from_utf8(buf)?)?)
}

static BUILTIN: Lazy<BTreeMap<&'static str, UnmarshalFunc>> = Lazy::new(|| {
    let mut m: BTreeMap<&'static str, UnmarshalFunc> = BTreeMap::new();
    m.insert("json", Arc::new(unmarshal_json));
    m.insert("json5", Arc::new(unmarshal_json5));
    m.insert("yaml", Arc::new(unmarshal_yaml));
    m.insert("yml", Arc::new(unmarshal_yaml));
    m.insert("toml", Arc::new(unmarshal_toml));
    m
});

/// 获取内置格式的解码函数
pub fn builtin_unmarshal(format: &str) -> Option<UnmarshalFunc> {
    BUILTIN.get(format).cloned()
}

/// 所有内置格式名（已排序）
pub fn builtin_formats() -> Vec<&'static str> {
    BUILTIN.keys().copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builtin_formats() {
        assert_eq!(
            builtin_formats(),
            vec!["json", "json5", "toml", "yaml", "yml"]
        );
        assert!(builtin_unmarshal("xml").is_none());
    }

    #[test]
    fn test_unmarshal_json() {
        let f = builtin_unmarshal("json").unwrap();
        let v = f(br#"{"greeting": {"hello": "Hello"}}"#).unwrap();
        assert_eq!(v, json!({"greeting": {"hello": "Hello"}}));
        assert!(f(b"{").is_err());
    }

    #[test]
    fn test_unmarshal_json5() {
        let f = builtin_unmarshal("json5").unwrap();
        let v = f(b"{ hello: 'Hello', // comment\n }").unwrap();
        assert_eq!(v, json!({"hello": "Hello"}));
    }

    #[test]
    fn test_unmarshal_yaml() {
        let f = builtin_unmarshal("yaml").unwrap();
        let v = f(b"greeting:\n  hello: Bonjour\n").unwrap();
        assert_eq!(v, json!({"greeting": {"hello": "Bonjour"}}));

        let yml = builtin_unmarshal("yml").unwrap();
        assert_eq!(yml(b"a: b\n").unwrap(), json!({"a": "b"}));
    }

    #[test]
    fn test_unmarshal_toml() {
        let f = builtin_unmarshal("toml").unwrap();
        let v = f(b"hello = \"Hallo\"\n[greeting]\nbye = \"Tschuss\"\n").unwrap();
        assert_eq!(v, json!({"hello": "Hallo", "greeting": {"bye": "Tschuss"}}));
        assert!(f(b"hello = ").is_err());
    }

    #[test]
    fn test_unmarshal_rejects_invalid_utf8() {
        let f = builtin_unmarshal("toml").unwrap();
        assert!(f(&[0xff, 0xfe, 0x00]).is_err());
    }
}
