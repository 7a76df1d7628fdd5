pub mod fs_loader;
pub mod options;

// 重新导出加载器和选项
pub use fs_loader::{FsLoader, FsLoaderConfig};
pub use options::{
    with_path, with_shared_source, with_source, with_tag_parser, with_unmarshal,
    with_unmarshals, LoaderOption,
};
