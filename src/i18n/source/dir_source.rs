//! 文件系统目录源
//!
//! 以本地目录为根，只读访问其中的消息文件

use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};

use super::core::{SourceEntry, SourceTree, ROOT};

/// 目录源的配置
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DirSourceConfig {
    /// 消息文件所在根目录
    pub base_path: String,
}

/// 文件系统目录源
///
/// 根目录在构造时不做校验，不存在时在加载阶段以读取错误返回。
/// read_dir 结果按名称排序，保证遍历顺序稳定。
///
/// # 示例
/// ```no_run
/// use rustx_i18n::i18n::source::{DirSource, SourceTree};
///
/// let source = DirSource::new("locales");
/// for entry in source.read_dir(".").unwrap() {
///     println!("{} dir={}", entry.name(), entry.is_dir());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct DirSource {
    base_path: PathBuf,
}

impl DirSource {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// 将相对路径转换为文件系统路径
    fn resolve(&self, path: &str) -> PathBuf {
        let mut full = self.base_path.clone();
        for part in path.split('/') {
            if part.is_empty() || part == ROOT {
                continue;
            }
            full.push(part);
        }
        full
    }
}

impl From<DirSourceConfig> for DirSource {
    fn from(config: DirSourceConfig) -> Self {
        Self::new(config.base_path)
    }
}

impl SourceTree for DirSource {
    fn read_dir(&self, path: &str) -> io::Result<Vec<SourceEntry>> {
        let mut entries = Vec::new();
        for entry in std::fs::read_dir(self.resolve(path))? {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().into_owned();
            // 跟随符号链接，与直接打开文件的行为一致
            let is_dir = std::fs::metadata(entry.path())?.is_dir();
            entries.push(if is_dir {
                SourceEntry::dir(name)
            } else {
                SourceEntry::file(name)
            });
        }
        entries.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(entries)
    }

    fn read_file(&self, path: &str) -> io::Result<Vec<u8>> {
        std::fs::read(self.resolve(path))
    }
}
