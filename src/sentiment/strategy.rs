//! 언어별 표지어 매칭 전략
//!
//! 두 언어의 전략은 의도적으로 다르게 동작합니다:
//!
//! | 언어 | 매칭 | 집계 | 임계 밀도 | 배수 |
//! |------|------|------|-----------|------|
//! | 한국어 | 부분 문자열 | 표지어당 최대 1회 | 0.1 | 2 |
//! | 영어 | 단어 경계, 대소문자 무시 | 등장 횟수 전부 | 0.05 | 3 |
//!
//! 새 언어는 `STRATEGIES` 테이블에 항목을 추가해서 지원합니다.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;

use super::language::Language;
use super::lexicon::{self, Lexicon};
use super::result::Polarity;

/// 표지어 매칭 방식
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// 부분 문자열 포함 여부 (표지어당 최대 1회)
    Substring,
    /// 소문자 변환 후 단어 경계 매칭, 모든 등장 횟수를 셈
    WordBoundary,
}

lazy_static! {
    /// 단어 경계 매칭용 정규식 (표지어 -> `\b표지어\b`)
    static ref WORD_PATTERNS: HashMap<&'static str, Regex> = {
        let mut patterns = HashMap::new();
        for strategy in STRATEGIES.iter().filter(|s| s.mode == MatchMode::WordBoundary) {
            for &marker in strategy.lexicon.positive.iter().chain(strategy.lexicon.negative) {
                let pattern = format!(r"\b{}\b", regex::escape(marker));
                match Regex::new(&pattern) {
                    Ok(re) => {
                        patterns.insert(marker, re);
                    }
                    Err(e) => log::error!("표지어 정규식 컴파일 실패 ({}): {}", marker, e),
                }
            }
        }
        patterns
    };
}

impl MatchMode {
    /// 표지어 목록의 적중 수 계산
    ///
    /// `WordBoundary`는 `text`가 이미 소문자라고 가정합니다.
    fn count_hits(self, text: &str, markers: &[&'static str]) -> usize {
        match self {
            MatchMode::Substring => markers.iter().filter(|m| text.contains(**m)).count(),
            MatchMode::WordBoundary => markers
                .iter()
                .map(|m| {
                    WORD_PATTERNS
                        .get(m)
                        .map_or(0, |re| re.find_iter(text).count())
                })
                .sum(),
        }
    }
}

/// 밀도 -> 판정/점수 규칙
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringRule {
    /// 이 밀도를 초과해야 긍정/부정으로 판정
    pub threshold: f64,
    /// 점수 = base + 밀도 × multiplier
    pub multiplier: f64,
    pub base: f64,
    /// 점수 상한
    pub cap: f64,
}

impl ScoringRule {
    pub const fn new(threshold: f64, multiplier: f64) -> Self {
        Self {
            threshold,
            multiplier,
            base: 0.6,
            cap: 0.95,
        }
    }

    /// 긍정/부정 밀도로 판정. 어느 쪽도 우세하지 않으면 `None` (중립)
    pub fn decide(&self, positive_density: f64, negative_density: f64) -> Option<(Polarity, f64)> {
        if positive_density > negative_density && positive_density > self.threshold {
            Some((Polarity::Positive, self.score(positive_density)))
        } else if negative_density > positive_density && negative_density > self.threshold {
            Some((Polarity::Negative, self.score(negative_density)))
        } else {
            None
        }
    }

    fn score(&self, density: f64) -> f64 {
        (self.base + density * self.multiplier).min(self.cap)
    }
}

/// 표지어 집계 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tally {
    pub positive_hits: usize,
    pub negative_hits: usize,
    /// 공백 기준 토큰 수 (최소 1)
    pub tokens: usize,
}

impl Tally {
    /// (긍정 밀도, 부정 밀도)
    pub fn densities(&self) -> (f64, f64) {
        let tokens = self.tokens.max(1) as f64;
        (
            self.positive_hits as f64 / tokens,
            self.negative_hits as f64 / tokens,
        )
    }
}

/// 한 언어의 분류 전략
#[derive(Debug, Clone, Copy)]
pub struct Strategy {
    pub language: Language,
    pub lexicon: Lexicon,
    pub mode: MatchMode,
    pub rule: ScoringRule,
}

/// 언어별 전략 테이블
pub static STRATEGIES: [Strategy; 2] = [
    Strategy {
        language: Language::Korean,
        lexicon: lexicon::KOREAN,
        mode: MatchMode::Substring,
        rule: ScoringRule::new(0.1, 2.0),
    },
    Strategy {
        language: Language::English,
        lexicon: lexicon::ENGLISH,
        mode: MatchMode::WordBoundary,
        rule: ScoringRule::new(0.05, 3.0),
    },
];

impl Strategy {
    /// 언어에 해당하는 전략 조회
    pub fn for_language(language: Language) -> &'static Strategy {
        STRATEGIES
            .iter()
            .find(|s| s.language == language)
            .unwrap_or(&STRATEGIES[1])
    }

    /// 텍스트의 긍정/부정 표지어 적중 수와 토큰 수 집계
    pub fn tally(&self, text: &str) -> Tally {
        let lowered;
        let haystack = match self.mode {
            MatchMode::Substring => text,
            MatchMode::WordBoundary => {
                lowered = text.to_lowercase();
                lowered.as_str()
            }
        };

        Tally {
            positive_hits: self.mode.count_hits(haystack, self.lexicon.positive),
            negative_hits: self.mode.count_hits(haystack, self.lexicon.negative),
            tokens: token_count(text),
        }
    }
}

/// 공백 기준 토큰 수 (빈 문자열도 1)
pub fn token_count(text: &str) -> usize {
    text.split_whitespace().count().max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn korean() -> &'static Strategy {
        Strategy::for_language(Language::Korean)
    }

    fn english() -> &'static Strategy {
        Strategy::for_language(Language::English)
    }

    #[test]
    fn test_token_count() {
        assert_eq!(token_count(""), 1);
        assert_eq!(token_count("   "), 1);
        assert_eq!(token_count("This is bad"), 3);
        assert_eq!(token_count("  여러  공백\t\n구분 "), 3);
    }

    #[test]
    fn test_strategy_table() {
        assert_eq!(korean().mode, MatchMode::Substring);
        assert_eq!(korean().rule, ScoringRule::new(0.1, 2.0));
        assert_eq!(english().mode, MatchMode::WordBoundary);
        assert_eq!(english().rule, ScoringRule::new(0.05, 3.0));

        // 모든 언어에 전략이 하나씩 있어야 함
        for language in Language::ALL {
            let rows = STRATEGIES.iter().filter(|s| s.language == language).count();
            assert_eq!(rows, 1, "{}", language);
            assert_eq!(Strategy::for_language(language).language, language);
        }
    }

    #[test]
    fn test_korean_presence_counting() {
        // 같은 표지어가 여러 번 나와도 1회
        let tally = korean().tally("좋다 좋다 좋다");
        assert_eq!(tally.positive_hits, 1);
        assert_eq!(tally.tokens, 3);
    }

    #[test]
    fn test_korean_substring_inside_token() {
        let tally = korean().tally("정말나쁘다니");
        assert_eq!(tally.negative_hits, 1);
        assert_eq!(tally.tokens, 1);
    }

    #[test]
    fn test_korean_overlapping_markers() {
        // "기분좋다"는 "좋다"도 포함하므로 긍정 2회
        let tally = korean().tally("기분좋다");
        assert_eq!(tally.positive_hits, 2);
        // "실망스럽다"는 "실망"도 포함
        let tally = korean().tally("실망스럽다");
        assert_eq!(tally.negative_hits, 2);
    }

    #[test]
    fn test_english_frequency_counting() {
        let tally = english().tally("bad bad BAD");
        assert_eq!(tally.negative_hits, 3);
        assert_eq!(tally.positive_hits, 0);
    }

    #[test]
    fn test_english_word_boundary() {
        assert_eq!(english().tally("badger").negative_hits, 0);
        assert_eq!(english().tally("likely goodness").positive_hits, 0);
        assert_eq!(english().tally("bad, really bad.").negative_hits, 2);
    }

    #[test]
    fn test_english_boundary_is_unicode_aware() {
        // 한글/악센트 문자도 단어 문자로 취급: 붙어 있으면 매칭하지 않음
        assert_eq!(english().tally("bad한").negative_hits, 0);
        assert_eq!(english().tally("badé").negative_hits, 0);
        assert_eq!(english().tally("한good").positive_hits, 0);
        // 공백/구두점으로 떨어져 있으면 매칭
        assert_eq!(english().tally("bad 한").negative_hits, 1);
        assert_eq!(english().tally("「good」").positive_hits, 1);
    }

    #[test]
    fn test_decide_rule() {
        let rule = ScoringRule::new(0.1, 2.0);
        assert_eq!(rule.decide(1.0, 0.0), Some((Polarity::Positive, 0.95)));
        assert_eq!(rule.decide(0.0, 0.0), None);
        // 동률은 중립
        assert_eq!(rule.decide(0.5, 0.5), None);
        // 임계값과 같으면 초과가 아님
        assert_eq!(rule.decide(0.1, 0.0), None);

        let (label, score) = rule.decide(0.0, 0.125).unwrap();
        assert_eq!(label, Polarity::Negative);
        assert!((score - 0.85).abs() < 1e-12);
    }

    #[test]
    fn test_densities() {
        let tally = Tally {
            positive_hits: 1,
            negative_hits: 2,
            tokens: 4,
        };
        assert_eq!(tally.densities(), (0.25, 0.5));
        assert_eq!(Tally::default().densities(), (0.0, 0.0));
    }
}
