//! RustX i18n - 可插拔的多语言消息加载器
//!
//! 从目录树中发现消息文件，按文件名推断语言和格式，解码后注册到消息中心。
//!
//! ## 模块
//!
//! - **i18n::source**: 文件源抽象（本地目录、内存文件树）
//! - **i18n::format**: 格式注册表与内置解码函数（json/json5/yaml/toml）
//! - **i18n::naming**: `<locale>.<format>` 文件名约定
//! - **i18n::loader**: 递归加载器与加载选项
//! - **i18n::catalog**: 内存消息目录
//!
//! ## 示例
//!
//! ```
//! use rustx_i18n::{FsLoader, Loader, LocaleTag, MemorySource, MessageCatalog};
//! use rustx_i18n::i18n::loader::with_unmarshal;
//! use std::sync::Arc;
//!
//! let source = MemorySource::new()
//!     .with_file("en.json", r#"{"hello": "Hello"}"#)
//!     .with_file("nested/de.json", r#"{"hello": "Hallo"}"#);
//!
//! let loader = FsLoader::with_source(
//!     Arc::new(source),
//!     [with_unmarshal("json", |buf| Ok(serde_json::from_slice(buf)?))],
//! );
//!
//! let mut catalog = MessageCatalog::new();
//! loader.parse_message(&mut catalog).unwrap();
//!
//! let de: LocaleTag = "de".parse().unwrap();
//! assert_eq!(catalog.get(&de, "hello"), Some("Hallo"));
//! ```

pub mod i18n;

// 重新导出主要的公共 API
pub use i18n::{
    FsLoader, FsLoaderConfig, Loader, LoaderError, LocaleTag, MemorySource, MessageCatalog,
    MessageSink, SourceTree, UnmarshalFunc,
};
