//! 분류 결과를 저장/응답용 레코드로 변환
//!
//! 분류기는 항상 양수 점수를 돌려주지만, 저장 레코드는 부정일 때 점수의 부호를 뒤집고
//! 중립일 때 0으로 둡니다. 원래 점수는 `confidence`로 보존합니다.

use serde::{Deserialize, Serialize};

use crate::sentiment::{ClassificationResult, Language, Polarity, SentimentClassifier, UnitSource};

/// 한 텍스트의 분석 레코드
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentRecord {
    pub text: String,
    pub language: Language,
    /// `positive` / `negative` / `neutral`
    pub label: String,
    /// 부호 있는 점수: 긍정 +confidence, 부정 -confidence, 중립 0
    pub score: f64,
    pub confidence: f64,
}

impl SentimentRecord {
    pub fn new(text: impl Into<String>, language: Language, result: ClassificationResult) -> Self {
        let (label, score) = match result.label {
            Polarity::Positive => ("positive", result.score),
            Polarity::Negative => ("negative", -result.score),
            Polarity::Neutral => ("neutral", 0.0),
        };
        Self {
            text: text.into(),
            language,
            label: label.to_string(),
            score,
            confidence: result.score,
        }
    }
}

/// 배치 결과의 극성별 개수
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BatchSummary {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl BatchSummary {
    fn count(&mut self, label: Polarity) {
        match label {
            Polarity::Positive => self.positive += 1,
            Polarity::Negative => self.negative += 1,
            Polarity::Neutral => self.neutral += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }
}

/// 배치 분석 결과
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    pub results: Vec<SentimentRecord>,
    pub summary: BatchSummary,
    /// 실제로 분류한 텍스트 수
    pub processed: usize,
    /// 입력 텍스트 수 (공백/초과분 포함)
    pub total_items: usize,
}

/// 텍스트 목록을 한꺼번에 분류
///
/// 공백뿐인 텍스트는 건너뛰고, `limit`개까지만 분류합니다.
pub fn analyze_batch<R, I, S>(
    classifier: &SentimentClassifier<R>,
    texts: I,
    language: Language,
    limit: usize,
) -> BatchReport
where
    R: UnitSource,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut results = Vec::new();
    let mut summary = BatchSummary::default();
    let mut total_items = 0;

    for text in texts {
        total_items += 1;
        let text = text.as_ref();

        if text.trim().is_empty() {
            log::warn!("빈 텍스트 건너뜀 (#{})", total_items);
            continue;
        }
        if results.len() >= limit {
            continue;
        }

        let result = classifier.classify_language(text, language);
        summary.count(result.label);
        results.push(SentimentRecord::new(text, language, result));
    }

    if results.len() < total_items {
        log::debug!("배치 {}건 중 {}건 분류", total_items, results.len());
    }

    BatchReport {
        processed: results.len(),
        results,
        summary,
        total_items,
    }
}
