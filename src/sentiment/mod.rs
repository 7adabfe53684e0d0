//! 어휘 기반 감정 분류
//!
//! 텍스트와 언어 태그를 받아 극성(긍정/부정/중립)과 신뢰 점수를 계산합니다.
//!
//! # 개요
//!
//! 1. **언어 선택**: `"ko"`는 한국어 전략, 그 외 태그는 모두 영어 전략
//! 2. **표지어 집계**: 언어별 사전의 긍정/부정 표지어 적중 수를 셈
//! 3. **밀도 판정**: 적중 수 / 토큰 수가 임계값을 넘고 반대쪽보다 크면 해당 극성
//! 4. **중립**: 그렇지 않으면 [0.6, 0.7) 구간의 무작위 점수
//!
//! # 사용 예시
//!
//! ```
//! use gamjeong::sentiment::{FixedSource, Polarity, SentimentClassifier};
//!
//! let classifier = SentimentClassifier::new();
//! assert_eq!(classifier.classify("정말 좋다", "ko").label, Polarity::Positive);
//!
//! // 중립 점수를 고정하려면 난수 공급원을 주입
//! let classifier = SentimentClassifier::with_source(FixedSource(0.0));
//! assert_eq!(classifier.classify("", "en").score, 0.6);
//! ```

mod classifier;
mod language;
pub mod lexicon;
mod random;
mod result;
mod strategy;

// 공개 인터페이스
pub use classifier::{classify, Analysis, SentimentClassifier};
pub use language::Language;
pub use lexicon::Lexicon;
pub use random::{FixedSource, SeededSource, ThreadRngSource, UnitSource};
pub use result::{ClassificationResult, Polarity};
pub use strategy::{token_count, MatchMode, ScoringRule, Strategy, Tally};
