//! 어휘 기반 감정 분류기
//!
//! 입력 텍스트와 언어 태그만으로 극성과 신뢰 점수를 계산합니다.
//! 외부 모델 호출, 에러 경로, 공유 가변 상태가 없습니다.

use lazy_static::lazy_static;

use super::language::Language;
use super::random::{clamp_unit, ThreadRngSource, UnitSource};
use super::result::{ClassificationResult, Polarity};
use super::strategy::{Strategy, Tally};

/// 중립 점수 하한
const NEUTRAL_FLOOR: f64 = 0.6;
/// 중립 점수 = max(0.5 + u × 0.2, 0.6)
const NEUTRAL_BASE: f64 = 0.5;
const NEUTRAL_SPREAD: f64 = 0.2;

/// 분류 결과와 근거가 된 집계값
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Analysis {
    pub language: Language,
    pub result: ClassificationResult,
    pub tally: Tally,
}

/// 감정 분류기
///
/// 난수 공급원 `R`은 중립 판정 점수에만 쓰입니다.
/// 분류기 자체는 불변이므로 여러 스레드에서 공유해 동시에 호출할 수 있습니다.
#[derive(Debug, Default)]
pub struct SentimentClassifier<R: UnitSource = ThreadRngSource> {
    source: R,
}

impl SentimentClassifier<ThreadRngSource> {
    /// 스레드 로컬 RNG를 쓰는 분류기 생성
    pub fn new() -> Self {
        Self {
            source: ThreadRngSource,
        }
    }
}

impl<R: UnitSource> SentimentClassifier<R> {
    /// 난수 공급원을 지정하여 생성
    pub fn with_source(source: R) -> Self {
        Self { source }
    }

    /// 언어 태그로 분류 (`"ko"` 외에는 영어 전략)
    pub fn classify(&self, text: &str, language: &str) -> ClassificationResult {
        self.classify_language(text, Language::from_tag(language))
    }

    /// 언어를 지정하여 분류
    pub fn classify_language(&self, text: &str, language: Language) -> ClassificationResult {
        self.analyze(text, language).result
    }

    /// 분류하고 적중 수/토큰 수도 함께 반환
    pub fn analyze(&self, text: &str, language: Language) -> Analysis {
        let strategy = Strategy::for_language(language);
        let tally = strategy.tally(text);
        let (positive_density, negative_density) = tally.densities();

        let result = match strategy.rule.decide(positive_density, negative_density) {
            Some((label, score)) => ClassificationResult { label, score },
            None => ClassificationResult {
                label: Polarity::Neutral,
                score: self.neutral_score(),
            },
        };

        log::trace!(
            "[{}] +{} -{} / {} 토큰 -> {} ({:.3})",
            language,
            tally.positive_hits,
            tally.negative_hits,
            tally.tokens,
            result.label,
            result.score
        );

        Analysis {
            language,
            result,
            tally,
        }
    }

    /// [0.6, 0.7) 구간의 중립 점수
    fn neutral_score(&self) -> f64 {
        let u = clamp_unit(self.source.next_unit());
        let score = (NEUTRAL_BASE + u * NEUTRAL_SPREAD).max(NEUTRAL_FLOOR);
        // 반올림으로 상한에 닿는 경우 0.7 바로 아래 값으로
        score.min(neutral_ceiling())
    }
}

/// 0.7보다 작은 가장 큰 f64
fn neutral_ceiling() -> f64 {
    f64::from_bits((NEUTRAL_BASE + NEUTRAL_SPREAD).to_bits() - 1)
}

lazy_static! {
    static ref DEFAULT_CLASSIFIER: SentimentClassifier = SentimentClassifier::new();
}

/// 기본 분류기로 분류
///
/// # Examples
/// ```
/// use gamjeong::{classify, Polarity};
///
/// let result = classify("This is bad", "en");
/// assert_eq!(result.label, Polarity::Negative);
/// assert_eq!(result.score, 0.95);
/// ```
pub fn classify(text: &str, language: &str) -> ClassificationResult {
    DEFAULT_CLASSIFIER.classify(text, language)
}
