use serde_json::Value as JsonValue;
use std::sync::Arc;
use thiserror::Error;

use super::locale::{LocaleError, LocaleTag};

/// 反序列化函数：将文件原始字节解码为统一的 JsonValue 消息树
///
/// 所有格式（json/yaml/toml...）最终都转换为 JsonValue，由 MessageSink 决定如何注册
pub type UnmarshalFunc = Arc<dyn Fn(&[u8]) -> anyhow::Result<JsonValue> + Send + Sync>;

/// 将闭包包装为 UnmarshalFunc
pub fn unmarshal_func<F>(f: F) -> UnmarshalFunc
where
    F: Fn(&[u8]) -> anyhow::Result<JsonValue> + Send + Sync + 'static,
{
    Arc::new(f)
}

/// 加载器相关错误
///
/// 任何一个错误都会立即中止整个加载过程，错误中携带出错的文件名或路径
#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("malformed filename {name:?}, expect <locale>.<format>[.<any>]")]
    MalformedFilename { name: String },

    #[error("invalid locale {segment:?} in file {name:?}: {source}")]
    InvalidLocale {
        name: String,
        segment: String,
        #[source]
        source: LocaleError,
    },

    #[error("unsupported format {format:?} in file {name:?}")]
    UnsupportedFormat { name: String, format: String },

    #[error("read source {path:?} failed: {source}")]
    SourceRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("decode file {name:?} failed: {source}")]
    Decode {
        name: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("invalid loader config: {0}")]
    InvalidConfig(String),
}

/// 消息注册中心：接收 Loader 推送的解码函数、当前语言和文件内容
///
/// Loader 对 sink 只写不读，sink 的存储、查找、复数和格式化都不属于加载器的职责
pub trait MessageSink {
    /// 注册某种格式的解码函数，后注册的覆盖先注册的
    fn register_unmarshal_func(&mut self, format: &str, func: UnmarshalFunc);

    /// Loader 自身没有该格式的解码函数时，请求 sink 启用它的默认实现
    ///
    /// 返回 false 表示 sink 也无法处理该格式
    fn register_default_unmarshal_func(&mut self, format: &str) -> bool;

    /// 设置当前语言，之后解析的消息都归属于该语言
    fn set_localizer(&mut self, tag: LocaleTag);

    /// 解码并注册一个文件的消息，filename 为文件的 basename
    fn parse_message_bytes(&mut self, buf: &[u8], filename: &str) -> anyhow::Result<()>;
}

/// 核心加载器 trait
///
/// 文件系统和内存两种加载方式的区别只在于绑定的 SourceTree
pub trait Loader: Send + Sync {
    /// 将全部消息文件加载到 sink 中，遇到第一个错误立即返回
    fn parse_message(&self, sink: &mut dyn MessageSink) -> Result<(), LoaderError>;
}
