//! 분석 언어 태그

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// 분류기가 지원하는 언어
///
/// 호출자가 넘긴 태그가 `"ko"`가 아니면 모두 영어로 취급합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    /// 한국어 (`"ko"`)
    Korean,
    /// 영어 (`"en"`, 기본값)
    #[default]
    English,
}

impl Language {
    /// 지원하는 모든 언어
    pub const ALL: [Language; 2] = [Language::Korean, Language::English];

    /// 언어 태그를 해석 (알 수 없는 태그는 영어로 폴백)
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "ko" => Language::Korean,
            _ => Language::English,
        }
    }

    /// 언어 태그 문자열
    pub fn tag(self) -> &'static str {
        match self {
            Language::Korean => "ko",
            Language::English => "en",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl Serialize for Language {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.tag())
    }
}

impl<'de> Deserialize<'de> for Language {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(Language::from_tag(&tag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tag() {
        assert_eq!(Language::from_tag("ko"), Language::Korean);
        assert_eq!(Language::from_tag("en"), Language::English);
        // 알 수 없는 태그는 영어
        assert_eq!(Language::from_tag("fr"), Language::English);
        assert_eq!(Language::from_tag(""), Language::English);
        assert_eq!(Language::from_tag("KO"), Language::English);
    }

    #[test]
    fn test_tag_display() {
        assert_eq!(Language::Korean.to_string(), "ko");
        assert_eq!(Language::English.tag(), "en");
    }

    #[test]
    fn test_serde_uses_tag() {
        let json = serde_json::to_string(&Language::Korean).unwrap();
        assert_eq!(json, "\"ko\"");
        let parsed: Language = serde_json::from_str("\"jp\"").unwrap();
        assert_eq!(parsed, Language::English);
    }
}
