//! 분류 결과 타입

use serde::{Deserialize, Serialize};
use std::fmt;

/// 감정 극성
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Polarity {
    Positive,
    Negative,
    Neutral,
}

impl Polarity {
    /// 대문자 레이블 (`POSITIVE` 등)
    pub fn as_str(self) -> &'static str {
        match self {
            Polarity::Positive => "POSITIVE",
            Polarity::Negative => "NEGATIVE",
            Polarity::Neutral => "NEUTRAL",
        }
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 분류 결과
///
/// `score`는 항상 [0, 1] 구간의 유한한 값입니다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub label: Polarity,
    pub score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polarity_serde() {
        let result = ClassificationResult {
            label: Polarity::Negative,
            score: 0.95,
        };
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(json, r#"{"label":"NEGATIVE","score":0.95}"#);

        let parsed: ClassificationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, result);
    }

    #[test]
    fn test_polarity_display() {
        assert_eq!(Polarity::Neutral.to_string(), "NEUTRAL");
    }
}
