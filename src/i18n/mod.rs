//! i18n 模块 - 消息文件加载
//!
//! 递归遍历消息文件目录，根据文件名 `<locale>.<format>` 推断语言和格式，
//! 将文件内容交给 MessageSink 解码注册

pub mod catalog;
pub mod core;
pub mod format;
pub mod loader;
pub mod locale;
pub mod naming;
pub mod source;

// 重新导出公共 API
pub use self::core::{unmarshal_func, Loader, LoaderError, MessageSink, UnmarshalFunc};
pub use catalog::MessageCatalog;
pub use format::{builtin_formats, builtin_unmarshal, FormatRegistry};
pub use loader::{FsLoader, FsLoaderConfig, LoaderOption};
pub use locale::{LangIdParser, LocaleError, LocaleTag, TagParser};
pub use naming::{parse_filename, FileName};
pub use source::{DirSource, DirSourceConfig, MemorySource, SourceEntry, SourceTree};
