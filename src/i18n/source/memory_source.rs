//! 内存文件树
//!
//! 用于嵌入资源或测试，目录由文件路径隐式生成

use std::collections::BTreeMap;
use std::io;

use super::core::{SourceEntry, SourceTree, ROOT};

/// 内存文件树
///
/// # 示例
/// ```
/// use rustx_i18n::i18n::source::{MemorySource, SourceTree};
///
/// let source = MemorySource::new()
///     .with_file("en.json", r#"{"hello": "Hello"}"#)
///     .with_file("nested/de.json", r#"{"hello": "Hallo"}"#);
///
/// let entries = source.read_dir(".").unwrap();
/// assert_eq!(entries.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    files: BTreeMap<String, Vec<u8>>,
}

/// 规范化路径：去掉空片段和 `.`，`a//b/./c/` -> `a/b/c`，根目录为空串
fn normalize(path: &str) -> String {
    path.split('/')
        .filter(|part| !part.is_empty() && *part != ROOT)
        .collect::<Vec<_>>()
        .join("/")
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加文件，中间目录自动生成，同名文件覆盖
    ///
    /// 同一个名字不能既是文件又是目录（如 `a` 和 `a/b.json`），
    /// 出现这种冲突时读取所在目录会返回 InvalidData 错误
    pub fn insert(&mut self, path: &str, content: impl Into<Vec<u8>>) {
        self.files.insert(normalize(path), content.into());
    }

    pub fn with_file(mut self, path: &str, content: impl Into<Vec<u8>>) -> Self {
        self.insert(path, content);
        self
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl<P: AsRef<str>, C: Into<Vec<u8>>> FromIterator<(P, C)> for MemorySource {
    fn from_iter<I: IntoIterator<Item = (P, C)>>(iter: I) -> Self {
        let mut source = Self::new();
        for (path, content) in iter {
            source.insert(path.as_ref(), content);
        }
        source
    }
}

impl SourceTree for MemorySource {
    fn read_dir(&self, path: &str) -> io::Result<Vec<SourceEntry>> {
        let dir = normalize(path);
        if self.files.contains_key(&dir) && !dir.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("not a directory: {}", path),
            ));
        }

        let prefix = if dir.is_empty() {
            String::new()
        } else {
            format!("{}/", dir)
        };

        // name -> is_dir
        let mut children: BTreeMap<&str, bool> = BTreeMap::new();
        for key in self.files.keys() {
            let Some(rest) = key.strip_prefix(prefix.as_str()) else {
                continue;
            };
            let (name, is_dir) = match rest.split_once('/') {
                Some((name, _)) => (name, true),
                None => (rest, false),
            };
            if let Some(&seen) = children.get(name) {
                if seen != is_dir {
                    return Err(io::Error::new(
                        io::ErrorKind::InvalidData,
                        format!("{:?} is both a file and a directory", prefix.clone() + name),
                    ));
                }
                continue;
            }
            children.insert(name, is_dir);
        }

        if children.is_empty() && !dir.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("directory not found: {}", path),
            ));
        }

        Ok(children
            .into_iter()
            .map(|(name, is_dir)| {
                if is_dir {
                    SourceEntry::dir(name)
                } else {
                    SourceEntry::file(name)
                }
            })
            .collect())
    }

    fn read_file(&self, path: &str) -> io::Result<Vec<u8>> {
        self.files.get(&normalize(path)).cloned().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("file not found: {}", path))
        })
    }
}
