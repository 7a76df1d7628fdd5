pub mod builtin;
pub mod registry;

// 重新导出核心类型
pub use builtin::{builtin_formats, builtin_unmarshal};
pub use registry::FormatRegistry;
