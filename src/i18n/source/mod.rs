pub mod core;
pub mod dir_source;
pub mod memory_source;

// 重新导出核心类型和 trait
pub use self::core::{join_path, SourceEntry, SourceTree, ROOT};
pub use dir_source::{DirSource, DirSourceConfig};
pub use memory_source::MemorySource;
