//! 감정 어휘 사전
//!
//! 언어별 긍정/부정 표지어 목록입니다. 프로세스 시작 시점부터 고정된 상수 데이터입니다.

use super::language::Language;

/// 한국어 긍정 표지어
pub const KOREAN_POSITIVE: &[&str] = &[
    "좋다", "좋은", "좋습니다", "기분좋다", "기쁘다", "행복하다", "행복한", "훌륭하다", "멋지다",
    "완벽하다", "최고다", "사랑한다", "좋아한다", "감사하다", "만족하다", "성공적이다",
    "흥미롭다", "재미있다", "놀라운", "탁월한", "우수한", "효과적인", "편리한",
];

/// 한국어 부정 표지어
pub const KOREAN_NEGATIVE: &[&str] = &[
    "싫다", "싫은", "나쁘다", "나쁜", "실망스럽다", "실망", "화나다", "화가", "슬프다", "슬픈",
    "짜증나다", "문제가", "오류가", "실패", "최악", "별로", "비싸다", "어렵다", "복잡하다",
    "불편하다", "불만", "후회", "걱정", "스트레스", "피곤하다",
];

/// 영어 긍정 표지어 (소문자)
pub const ENGLISH_POSITIVE: &[&str] = &[
    "good", "great", "excellent", "amazing", "wonderful", "fantastic", "love", "like",
    "happy", "pleased", "satisfied", "perfect", "awesome", "brilliant", "outstanding",
    "impressive", "effective", "convenient", "useful", "helpful",
];

/// 영어 부정 표지어 (소문자)
pub const ENGLISH_NEGATIVE: &[&str] = &[
    "bad", "terrible", "horrible", "awful", "disappointing", "sad", "angry", "hate",
    "dislike", "frustrated", "annoyed", "problem", "issue", "error", "failed", "worst",
    "expensive", "difficult", "complicated", "inconvenient", "useless",
];

/// 한 언어의 긍정/부정 표지어 쌍
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lexicon {
    pub positive: &'static [&'static str],
    pub negative: &'static [&'static str],
}

pub const KOREAN: Lexicon = Lexicon {
    positive: KOREAN_POSITIVE,
    negative: KOREAN_NEGATIVE,
};

pub const ENGLISH: Lexicon = Lexicon {
    positive: ENGLISH_POSITIVE,
    negative: ENGLISH_NEGATIVE,
};

impl Lexicon {
    pub fn for_language(language: Language) -> Lexicon {
        match language {
            Language::Korean => KOREAN,
            Language::English => ENGLISH,
        }
    }
}
