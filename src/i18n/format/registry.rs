use std::collections::{BTreeMap, HashMap};
use std::fmt;

use crate::i18n::core::UnmarshalFunc;

/// 格式注册表：格式名 -> 解码函数
///
/// 同一格式只保留一个解码函数，后注册的覆盖先注册的。注册表本身不会失败，
/// 查不到格式只是未命中。遍历按格式名排序，保证推送给 sink 的顺序稳定。
#[derive(Clone, Default)]
pub struct FormatRegistry {
    entries: BTreeMap<String, UnmarshalFunc>,
}

impl FormatRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册单个格式，覆盖已有的同名格式
    pub fn register(&mut self, format: impl Into<String>, func: UnmarshalFunc) {
        self.entries.insert(format.into(), func);
    }

    /// 整体替换注册表
    pub fn register_all(&mut self, funcs: HashMap<String, UnmarshalFunc>) {
        self.entries = funcs.into_iter().collect();
    }

    pub fn get(&self, format: &str) -> Option<&UnmarshalFunc> {
        self.entries.get(format)
    }

    pub fn contains(&self, format: &str) -> bool {
        self.entries.contains_key(format)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &UnmarshalFunc)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn formats(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for FormatRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormatRegistry")
            .field("formats", &self.formats())
            .finish()
    }
}

impl FromIterator<(String, UnmarshalFunc)> for FormatRegistry {
    fn from_iter<I: IntoIterator<Item = (String, UnmarshalFunc)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
