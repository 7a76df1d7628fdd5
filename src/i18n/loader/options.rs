//! 加载器选项
//!
//! 选项按传入顺序依次作用于新建的 FsLoader，后面的选项覆盖前面的：
//! - `with_source` / `with_path`：绑定文件源，最后一个生效
//! - `with_unmarshal`：追加单个格式
//! - `with_unmarshals`：整体替换注册表，之后的选项继续在其上叠加

use serde_json::Value as JsonValue;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use super::fs_loader::FsLoader;
use crate::i18n::core::{unmarshal_func, UnmarshalFunc};
use crate::i18n::locale::TagParser;
use crate::i18n::source::{DirSource, SourceTree};

/// 加载器选项
pub enum LoaderOption {
    /// 绑定文件源
    Source(Arc<dyn SourceTree>),
    /// 注册单个格式
    Unmarshal(String, UnmarshalFunc),
    /// 整体替换格式注册表
    Unmarshals(HashMap<String, UnmarshalFunc>),
    /// 替换语言标签解析器
    TagParser(Arc<dyn TagParser>),
}

impl LoaderOption {
    pub(crate) fn apply(self, loader: &mut FsLoader) {
        match self {
            LoaderOption::Source(source) => loader.source = source,
            LoaderOption::Unmarshal(format, func) => loader.unmarshals.register(format, func),
            LoaderOption::Unmarshals(funcs) => loader.unmarshals.register_all(funcs),
            LoaderOption::TagParser(parser) => loader.tag_parser = parser,
        }
    }
}

/// 绑定任意文件源
pub fn with_source<S: SourceTree + 'static>(source: S) -> LoaderOption {
    LoaderOption::Source(Arc::new(source))
}

/// 绑定共享的文件源，多个 Loader 可以读取同一棵树
pub fn with_shared_source(source: Arc<dyn SourceTree>) -> LoaderOption {
    LoaderOption::Source(source)
}

/// 绑定本地目录
pub fn with_path(path: impl Into<PathBuf>) -> LoaderOption {
    with_source(DirSource::new(path))
}

/// 注册单个格式的解码函数
pub fn with_unmarshal<F>(format: impl Into<String>, func: F) -> LoaderOption
where
    F: Fn(&[u8]) -> anyhow::Result<JsonValue> + Send + Sync + 'static,
{
    LoaderOption::Unmarshal(format.into(), unmarshal_func(func))
}

/// 整体替换格式注册表
pub fn with_unmarshals(funcs: HashMap<String, UnmarshalFunc>) -> LoaderOption {
    LoaderOption::Unmarshals(funcs)
}

/// 替换语言标签解析器
pub fn with_tag_parser<P: TagParser + 'static>(parser: P) -> LoaderOption {
    LoaderOption::TagParser(Arc::new(parser))
}
