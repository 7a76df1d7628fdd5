//! 内存消息目录
//!
//! MessageSink 的一个最小实现：按语言保存扁平化后的消息，
//! 嵌套对象的键以 `.` 连接，如 `{"menu": {"open": "Open"}}` 注册为 `menu.open`。
//! 不涉及复数和格式化。

use serde_json::Value as JsonValue;
use std::collections::HashMap;

use super::core::{MessageSink, UnmarshalFunc};
use super::format::builtin_unmarshal;
use super::locale::LocaleTag;
use super::naming::parse_filename;

#[derive(Default)]
pub struct MessageCatalog {
    unmarshals: HashMap<String, UnmarshalFunc>,
    current: Option<LocaleTag>,
    messages: HashMap<LocaleTag, HashMap<String, String>>,
}

impl MessageCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// 查找某个语言下的消息
    pub fn get(&self, tag: &LocaleTag, key: &str) -> Option<&str> {
        self.messages
            .get(tag)
            .and_then(|m| m.get(key))
            .map(String::as_str)
    }

    /// 已加载的语言，按标签字符串排序
    pub fn locales(&self) -> Vec<&LocaleTag> {
        let mut locales: Vec<&LocaleTag> = self.messages.keys().collect();
        locales.sort_by_key(|t| t.to_string());
        locales
    }

    /// 某个语言下的消息数量
    pub fn len(&self, tag: &LocaleTag) -> usize {
        self.messages.get(tag).map_or(0, HashMap::len)
    }

    pub fn is_empty(&self) -> bool {
        self.messages.values().all(HashMap::is_empty)
    }

    pub fn current_locale(&self) -> Option<&LocaleTag> {
        self.current.as_ref()
    }

    pub fn has_unmarshal_func(&self, format: &str) -> bool {
        self.unmarshals.contains_key(format)
    }
}

/// 将嵌套的 JsonValue 展开为 `a.b.c -> 文本`，null 被忽略
fn flatten(prefix: &str, value: &JsonValue, out: &mut HashMap<String, String>) {
    let key = |k: &str| {
        if prefix.is_empty() {
            k.to_string()
        } else {
            format!("{}.{}", prefix, k)
        }
    };

    match value {
        JsonValue::Null => {}
        JsonValue::Object(map) => {
            for (k, v) in map {
                flatten(&key(k.as_str()), v, out);
            }
        }
        JsonValue::Array(items) => {
            for (i, v) in items.iter().enumerate() {
                flatten(&key(i.to_string().as_str()), v, out);
            }
        }
        JsonValue::String(s) => {
            out.insert(prefix.to_string(), s.clone());
        }
        other => {
            out.insert(prefix.to_string(), other.to_string());
        }
    }
}

impl MessageSink for MessageCatalog {
    fn register_unmarshal_func(&mut self, format: &str, func: UnmarshalFunc) {
        self.unmarshals.insert(format.to_string(), func);
    }

    fn register_default_unmarshal_func(&mut self, format: &str) -> bool {
        if self.unmarshals.contains_key(format) {
            return true;
        }
        match builtin_unmarshal(format) {
            Some(func) => {
                self.unmarshals.insert(format.to_string(), func);
                true
            }
            None => false,
        }
    }

    fn set_localizer(&mut self, tag: LocaleTag) {
        self.current = Some(tag);
    }

    fn parse_message_bytes(&mut self, buf: &[u8], filename: &str) -> anyhow::Result<()> {
        let file = parse_filename(filename)?;
        let func = self
            .unmarshals
            .get(file.format)
            .ok_or_else(|| anyhow::anyhow!("no unmarshal func for format {:?}", file.format))?;
        let tag = self
            .current
            .clone()
            .ok_or_else(|| anyhow::anyhow!("no locale set before parsing {}", filename))?;

        let value = func(buf)?;
        if !matches!(value, JsonValue::Object(_) | JsonValue::Null) {
            anyhow::bail!("message file {} must contain a map at top level", filename);
        }

        let mut flat = HashMap::new();
        flatten("", &value, &mut flat);
        self.messages.entry(tag).or_default().extend(flat);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(s: &str) -> LocaleTag {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_nested_messages() {
        let mut catalog = MessageCatalog::new();
        assert!(catalog.register_default_unmarshal_func("json"));
        catalog.set_localizer(tag("en"));
        catalog
            .parse_message_bytes(
                br#"{"menu": {"open": "Open", "recent": ["a.txt", "b.txt"]}, "count": 3, "skip": null}"#,
                "en.json",
            )
            .unwrap();

        let en = tag("en");
        assert_eq!(catalog.get(&en, "menu.open"), Some("Open"));
        assert_eq!(catalog.get(&en, "menu.recent.1"), Some("b.txt"));
        assert_eq!(catalog.get(&en, "count"), Some("3"));
        assert_eq!(catalog.get(&en, "skip"), None);
        assert_eq!(catalog.len(&en), 4);
    }

    #[test]
    fn test_merge_same_locale() {
        let mut catalog = MessageCatalog::new();
        catalog.register_default_unmarshal_func("json");
        catalog.register_default_unmarshal_func("yaml");
        catalog.set_localizer(tag("fr"));
        catalog.parse_message_bytes(br#"{"a": "1", "b": "2"}"#, "fr.json").unwrap();
        catalog.parse_message_bytes(b"b: deux\nc: trois\n", "fr.yaml").unwrap();

        let fr = tag("fr");
        assert_eq!(catalog.get(&fr, "a"), Some("1"));
        assert_eq!(catalog.get(&fr, "b"), Some("deux"));
        assert_eq!(catalog.get(&fr, "c"), Some("trois"));
    }

    #[test]
    fn test_default_unmarshal_unknown_format() {
        let mut catalog = MessageCatalog::new();
        assert!(!catalog.register_default_unmarshal_func("xml"));
        assert!(!catalog.has_unmarshal_func("xml"));
    }

    #[test]
    fn test_parse_errors() {
        let mut catalog = MessageCatalog::new();
        catalog.register_default_unmarshal_func("json");

        // 未设置语言
        assert!(catalog.parse_message_bytes(b"{}", "en.json").is_err());

        catalog.set_localizer(tag("en"));
        assert!(catalog.parse_message_bytes(b"{", "en.json").is_err());
        assert!(catalog.parse_message_bytes(b"{}", "en.toml").is_err());
        assert!(catalog.parse_message_bytes(b"[1, 2]", "en.json").is_err());
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_locales_sorted() {
        let mut catalog = MessageCatalog::new();
        catalog.register_default_unmarshal_func("json");
        for locale in ["fr", "de", "en"] {
            catalog.set_localizer(tag(locale));
            catalog.parse_message_bytes(br#"{"k": "v"}"#, "x.json").unwrap();
        }
        let locales: Vec<String> = catalog.locales().iter().map(|t| t.to_string()).collect();
        assert_eq!(locales, vec!["de", "en", "fr"]);
        assert_eq!(catalog.current_locale(), Some(&tag("en")));
    }
}
