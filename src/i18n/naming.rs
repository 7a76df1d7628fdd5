//! 消息文件命名约定
//!
//! 文件名格式为 `<locale>.<format>[.<any>]`，以 `.` 分隔，第一段为语言，第二段为格式。
//! 这是按位置取段的约定，不是去扩展名：`en.messages.json` 的格式是 `messages`。

use super::core::LoaderError;

/// 从文件名中解析出的语言和格式片段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileName<'a> {
    pub name: &'a str,
    pub locale: &'a str,
    pub format: &'a str,
}

/// 解析文件名，至少需要两个以 `.` 分隔的片段
pub fn parse_filename(name: &str) -> Result<FileName<'_>, LoaderError> {
    let mut segments = name.split('.');
    match (segments.next(), segments.next()) {
        (Some(locale), Some(format)) if !name.is_empty() => Ok(FileName {
            name,
            locale,
            format,
        }),
        _ => Err(LoaderError::MalformedFilename {
            name: name.to_string(),
        }),
    }
}
