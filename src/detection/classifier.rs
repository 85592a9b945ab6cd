//! 단어 토큰 언어 분류
//!
//! 사전과 음운 휴리스틱으로 단어가 싱글리시인지 영어(외래어)인지 판별합니다.
//! 확실하지 않으면 변환하지 않는 쪽(Foreign/Ambiguous)으로 기웁니다.

use super::dictionary::{Dictionary, Treatment};
use super::phonotactics::is_pronounceable;

/// 단어 토큰의 출처
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Origin {
    /// 로마자 싱할라어 -> 변환
    Singlish,
    /// 영어/고유명사/약어 -> 원문 유지
    Foreign,
    /// 판별 불가 -> 원문 유지
    Ambiguous,
}

impl Origin {
    /// 변환 대상인지 확인
    pub fn is_transliterated(&self) -> bool {
        matches!(self, Origin::Singlish)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Origin::Singlish => "singlish",
            Origin::Foreign => "foreign",
            Origin::Ambiguous => "ambiguous",
        }
    }
}

/// 단어 분류기
#[derive(Debug, Clone, Copy)]
pub struct Classifier<'d> {
    dictionary: &'d Dictionary,
}

impl<'d> Classifier<'d> {
    /// 사전을 지정하여 분류기 생성
    pub fn new(dictionary: &'d Dictionary) -> Self {
        Self { dictionary }
    }

    /// 단어 하나를 분류
    ///
    /// 1. 보호 단어 -> Foreign
    /// 2. 싱글리시 예외 단어 -> Singlish
    /// 3. 대문자 약어 (PM, ID) -> Foreign
    /// 4. 음운 구조 검사 통과 -> Singlish, 실패 -> Ambiguous
    pub fn classify(&self, word: &str) -> Origin {
        let origin = match self.dictionary.lookup(word) {
            Some(Treatment::PassThrough) => Origin::Foreign,
            Some(Treatment::ForceTransliterate | Treatment::Fixed(_)) => Origin::Singlish,
            None if is_acronym(word) => Origin::Foreign,
            None if is_pronounceable(word) => Origin::Singlish,
            None => Origin::Ambiguous,
        };
        log::trace!("분류: {:?} -> {:?}", word, origin);
        origin
    }
}

impl Default for Classifier<'static> {
    fn default() -> Self {
        Self::new(Dictionary::global())
    }
}

/// 2글자 이상 모두 대문자인 토큰
fn is_acronym(word: &str) -> bool {
    word.chars().count() >= 2 && word.chars().all(|c| c.is_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dictionary_foreign() {
        let classifier = Classifier::default();
        assert_eq!(classifier.classify("office"), Origin::Foreign);
        assert_eq!(classifier.classify("Colombo"), Origin::Foreign);
        assert_eq!(classifier.classify("late"), Origin::Foreign);
    }

    #[test]
    fn test_singlish_words() {
        let classifier = Classifier::default();
        for w in ["mama", "yanna", "hadhanavaa", "karuNaakaralaa", "set", "miit"] {
            assert_eq!(classifier.classify(w), Origin::Singlish, "{}", w);
        }
    }

    #[test]
    fn test_exception_overrides_phonotactics() {
        let classifier = Classifier::default();
        // ng 어말 자음군은 음운 검사 실패지만 예외 사전에 있음
        assert!(!is_pronounceable("mang"));
        assert_eq!(classifier.classify("mang"), Origin::Singlish);
        assert_eq!(classifier.classify("ne"), Origin::Singlish);
    }

    #[test]
    fn test_acronyms() {
        let classifier = Classifier::default();
        assert_eq!(classifier.classify("ATM"), Origin::Foreign);
        assert_eq!(classifier.classify("SLIIT"), Origin::Foreign);
        // 한 글자 대문자는 약어가 아님
        assert_eq!(classifier.classify("A"), Origin::Foreign); // 사전의 "a"
        assert_eq!(classifier.classify("O"), Origin::Singlish);
    }

    #[test]
    fn test_ambiguous() {
        let classifier = Classifier::default();
        assert_eq!(classifier.classify("ffnfnmlfnmltn"), Origin::Ambiguous);
        assert_eq!(classifier.classify("strength"), Origin::Ambiguous);
        assert!(!Origin::Ambiguous.is_transliterated());
    }

    #[test]
    fn test_foreign_wins_over_exception() {
        use crate::detection::dictionary::DictionaryEntry;

        let dict = Dictionary::from_entries([
            DictionaryEntry {
                key: "honda",
                treatment: Treatment::PassThrough,
            },
            DictionaryEntry {
                key: "honda",
                treatment: Treatment::ForceTransliterate,
            },
        ]);
        assert_eq!(Classifier::new(&dict).classify("Honda"), Origin::Foreign);
    }

    #[test]
    fn test_deterministic() {
        let classifier = Classifier::default();
        for _ in 0..3 {
            assert_eq!(classifier.classify("passe"), Origin::Singlish);
        }
    }
}
