use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use unic_langid::LanguageIdentifier;

/// 语言标签解析错误
#[derive(Error, Debug)]
pub enum LocaleError {
    #[error("empty locale")]
    Empty,

    #[error("invalid locale {segment:?}: {reason}")]
    Invalid { segment: String, reason: String },
}

/// 规范化后的语言标签（BCP-47）
///
/// 例如 `en`、`en-US`、`zh-Hans-CN`，`zh_cn` 会被规范化为 `zh-CN`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocaleTag(LanguageIdentifier);

impl LocaleTag {
    pub fn new(langid: LanguageIdentifier) -> Self {
        Self(langid)
    }

    /// 主语言子标签，如 `en-US` 的 `en`
    pub fn language(&self) -> &str {
        self.0.language.as_str()
    }

    pub fn as_langid(&self) -> &LanguageIdentifier {
        &self.0
    }

    pub fn into_langid(self) -> LanguageIdentifier {
        self.0
    }
}

impl FromStr for LocaleTag {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(LocaleError::Empty);
        }
        s.parse::<LanguageIdentifier>()
            .map(Self)
            .map_err(|e| LocaleError::Invalid {
                segment: s.to_string(),
                reason: e.to_string(),
            })
    }
}

impl fmt::Display for LocaleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<LanguageIdentifier> for LocaleTag {
    fn from(langid: LanguageIdentifier) -> Self {
        Self(langid)
    }
}

/// 语言标签解析器：把文件名中的语言片段转换为规范化的 LocaleTag
pub trait TagParser: Send + Sync {
    fn parse(&self, segment: &str) -> Result<LocaleTag, LocaleError>;
}

/// 基于 unic-langid 的默认解析器
#[derive(Debug, Clone, Copy, Default)]
pub struct LangIdParser;

impl TagParser for LangIdParser {
    fn parse(&self, segment: &str) -> Result<LocaleTag, LocaleError> {
        segment.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_locales() {
        let parser = LangIdParser;
        assert_eq!(parser.parse("en").unwrap().to_string(), "en");
        assert_eq!(parser.parse("en-US").unwrap().to_string(), "en-US");
        assert_eq!(parser.parse("zh-Hans-CN").unwrap().to_string(), "zh-Hans-CN");
    }

    #[test]
    fn test_parse_canonicalizes() {
        let parser = LangIdParser;
        assert_eq!(parser.parse("zh_cn").unwrap().to_string(), "zh-CN");
        assert_eq!(parser.parse("EN-us").unwrap().to_string(), "en-US");
        assert_eq!(parser.parse("en_US").unwrap(), parser.parse("en-US").unwrap());
    }

    #[test]
    fn test_parse_invalid_locales() {
        let parser = LangIdParser;
        assert!(matches!(parser.parse(""), Err(LocaleError::Empty)));
        assert!(matches!(
            parser.parse("xx-bad-tag"),
            Err(LocaleError::Invalid { .. })
        ));
        assert!(parser.parse("12345").is_err());
        assert!(parser.parse("en US").is_err());
    }

    #[test]
    fn test_locale_tag_language() {
        let tag: LocaleTag = "pt-BR".parse().unwrap();
        assert_eq!(tag.language(), "pt");
        assert_eq!(tag.as_langid().to_string(), "pt-BR");
    }
}
