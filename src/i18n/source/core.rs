use std::io;

/// 根目录路径
pub const ROOT: &str = ".";

/// 目录项
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceEntry {
    name: String,
    is_dir: bool,
}

impl SourceEntry {
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: false,
        }
    }

    pub fn dir(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: true,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_dir(&self) -> bool {
        self.is_dir
    }
}

/// 层级文件树抽象，Loader 只读
///
/// 路径以 `/` 分隔，相对于根目录 `.`。实现需要保证同一次遍历中 read_dir 的顺序稳定。
pub trait SourceTree: Send + Sync {
    /// 列出目录下的直接子项
    fn read_dir(&self, path: &str) -> io::Result<Vec<SourceEntry>>;

    /// 读取文件内容
    fn read_file(&self, path: &str) -> io::Result<Vec<u8>>;
}

/// 拼接子路径，根目录下的子项不带 `./` 前缀
pub fn join_path(parent: &str, name: &str) -> String {
    if parent.is_empty() || parent == ROOT {
        name.to_string()
    } else {
        format!("{}/{}", parent.trim_end_matches('/'), name)
    }
}
