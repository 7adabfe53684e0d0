pub mod config;
pub mod report;
pub mod sentiment;

pub use sentiment::{classify, ClassificationResult, Language, Polarity, SentimentClassifier};
