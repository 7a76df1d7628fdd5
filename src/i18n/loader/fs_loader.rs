use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;

use super::options::LoaderOption;
use crate::i18n::core::{Loader, LoaderError, MessageSink};
use crate::i18n::format::{builtin_unmarshal, FormatRegistry};
use crate::i18n::locale::{LangIdParser, TagParser};
use crate::i18n::naming::parse_filename;
use crate::i18n::source::{join_path, DirSource, SourceTree, ROOT};

/// FsLoader 配置
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FsLoaderConfig {
    /// 消息文件根目录
    pub path: String,

    /// 启用的内置格式（默认：["json", "yaml", "yml", "toml"]）
    #[serde(default = "default_formats")]
    pub formats: Vec<String>,
}

fn default_formats() -> Vec<String> {
    ["json", "yaml", "yml", "toml"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// 消息文件加载器：递归遍历文件源，按文件名推断语言和格式，交给 sink 解析
///
/// 每次 parse_message 都会重新向 sink 注册解码函数并完整遍历文件树，
/// 两次调用之间不保留任何状态。
///
/// # 示例
/// ```no_run
/// use rustx_i18n::i18n::{FsLoader, Loader, MessageCatalog};
/// use rustx_i18n::i18n::loader::with_unmarshal;
///
/// let loader = FsLoader::with_path(
///     "locales",
///     [with_unmarshal("json", |buf| Ok(serde_json::from_slice(buf)?))],
/// );
///
/// let mut catalog = MessageCatalog::new();
/// loader.parse_message(&mut catalog).unwrap();
/// ```
pub struct FsLoader {
    pub(crate) source: Arc<dyn SourceTree>,
    pub(crate) unmarshals: FormatRegistry,
    pub(crate) tag_parser: Arc<dyn TagParser>,
}

impl FsLoader {
    /// 从配置创建加载器，启用配置中列出的内置格式
    pub fn new(config: FsLoaderConfig) -> Result<Self, LoaderError> {
        let mut unmarshals = FormatRegistry::new();
        for format in &config.formats {
            let func = builtin_unmarshal(format).ok_or_else(|| {
                LoaderError::InvalidConfig(format!("unknown builtin format {:?}", format))
            })?;
            unmarshals.register(format.as_str(), func);
        }

        Ok(Self {
            source: Arc::new(DirSource::new(config.path)),
            unmarshals,
            tag_parser: Arc::new(LangIdParser),
        })
    }

    /// 以本地目录为文件源创建加载器
    pub fn with_path(
        path: impl Into<PathBuf>,
        opts: impl IntoIterator<Item = LoaderOption>,
    ) -> Self {
        Self::with_source(Arc::new(DirSource::new(path)), opts)
    }

    /// 以任意文件源创建加载器
    pub fn with_source(
        source: Arc<dyn SourceTree>,
        opts: impl IntoIterator<Item = LoaderOption>,
    ) -> Self {
        let mut loader = Self {
            source,
            unmarshals: FormatRegistry::new(),
            tag_parser: Arc::new(LangIdParser),
        };
        loader.apply(opts);
        loader
    }

    /// 按顺序应用选项，只能在加载前调用
    pub fn apply(&mut self, opts: impl IntoIterator<Item = LoaderOption>) {
        for opt in opts {
            opt.apply(self);
        }
    }

    pub fn source(&self) -> &Arc<dyn SourceTree> {
        &self.source
    }

    pub fn unmarshals(&self) -> &FormatRegistry {
        &self.unmarshals
    }

    pub fn tag_parser(&self) -> &Arc<dyn TagParser> {
        &self.tag_parser
    }

    /// 深度优先遍历目录，返回已处理的文件数
    fn parse_dir(&self, sink: &mut dyn MessageSink, path: &str) -> Result<usize, LoaderError> {
        let entries = self
            .source
            .read_dir(path)
            .map_err(|source| LoaderError::SourceRead {
                path: path.to_string(),
                source,
            })?;

        let mut count = 0;
        for entry in entries {
            let fp = join_path(path, entry.name());
            if entry.is_dir() {
                count += self.parse_dir(sink, &fp)?;
            } else {
                let buf = self
                    .source
                    .read_file(&fp)
                    .map_err(|source| LoaderError::SourceRead {
                        path: fp.clone(),
                        source,
                    })?;
                self.parse_file(sink, &fp, entry.name(), &buf)?;
                count += 1;
            }
        }
        Ok(count)
    }

    /// 处理单个文件：解析文件名 -> 确认格式 -> 解析语言 -> 交给 sink
    fn parse_file(
        &self,
        sink: &mut dyn MessageSink,
        path: &str,
        name: &str,
        buf: &[u8],
    ) -> Result<(), LoaderError> {
        let file = parse_filename(name).map_err(|_| LoaderError::MalformedFilename {
            name: path.to_string(),
        })?;

        // 以自身注册表为准，缺失时才向 sink 请求默认实现
        if !self.unmarshals.contains(file.format) && !sink.register_default_unmarshal_func(file.format)
        {
            return Err(LoaderError::UnsupportedFormat {
                name: path.to_string(),
                format: file.format.to_string(),
            });
        }

        let tag = self
            .tag_parser
            .parse(file.locale)
            .map_err(|source| LoaderError::InvalidLocale {
                name: path.to_string(),
                segment: file.locale.to_string(),
                source,
            })?;

        log::debug!("parse message file {}, locale: {}, format: {}", path, tag, file.format);
        sink.set_localizer(tag);
        sink.parse_message_bytes(buf, name)
            .map_err(|source| LoaderError::Decode {
                name: path.to_string(),
                source,
            })
    }
}

impl Loader for FsLoader {
    fn parse_message(&self, sink: &mut dyn MessageSink) -> Result<(), LoaderError> {
        for (format, func) in self.unmarshals.iter() {
            sink.register_unmarshal_func(format, func.clone());
        }

        let count = self.parse_dir(sink, ROOT)?;
        log::info!(
            "loaded {} message files, formats: {:?}",
            count,
            self.unmarshals.formats()
        );
        Ok(())
    }
}
