//! 싱글리시 단어 -> 싱할라 문자 변환기

use crate::core::rule_table::RuleTable;
use crate::core::sinhala_fsm::SinhalaFsm;
use crate::detection::dictionary::Dictionary;

/// 규칙 테이블과 사전을 참조하는 단어 변환기
#[derive(Debug, Clone, Copy)]
pub struct Transliterator<'t> {
    table: &'t RuleTable,
    dictionary: &'t Dictionary,
}

impl<'t> Transliterator<'t> {
    pub fn new(table: &'t RuleTable, dictionary: &'t Dictionary) -> Self {
        Self { table, dictionary }
    }

    /// 단어 하나를 싱할라 문자로 변환
    ///
    /// 고정 표기가 있으면 그대로 사용하고, 없으면 각 위치에서 최장 일치 규칙을 적용.
    /// 규칙이 없는 문자는 그대로 복사하고 한 글자 전진 (실패하지 않음).
    /// 문장 첫머리처럼 첫 글자만 대문자인 단어는 첫 글자를 소문자로 보고 매칭
    /// (Suba -> සුබ, karuNaakaralaa의 N은 그대로 ණ)
    pub fn transliterate(&self, word: &str) -> String {
        if let Some(form) = self.dictionary.fixed_form(word) {
            return form.to_string();
        }

        let chars = fold_title_case(word);
        let mut fsm = SinhalaFsm::new();
        let mut pos = 0;

        while pos < chars.len() {
            match self.table.longest_match(&chars, pos) {
                Some(m) => {
                    fsm.feed(m.rule.replacement);
                    pos += m.len;
                }
                None => {
                    fsm.feed_passthrough(chars[pos]);
                    pos += 1;
                }
            }
        }

        fsm.finish()
    }
}

/// 첫 글자만 대문자인 단어의 첫 글자를 소문자로 변환
fn fold_title_case(word: &str) -> Vec<char> {
    let mut chars: Vec<char> = word.chars().collect();
    if let Some((first, rest)) = chars.split_first_mut() {
        if first.is_uppercase() && !rest.iter().any(|c| c.is_uppercase()) {
            *first = first.to_ascii_lowercase();
        }
    }
    chars
}

impl Default for Transliterator<'static> {
    fn default() -> Self {
        Self::new(RuleTable::builtin(), Dictionary::global())
    }
}

/// 내장 규칙으로 싱글리시 단어를 변환
pub fn transliterate(word: &str) -> String {
    Transliterator::default().transliterate(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_conversion() {
        assert_eq!(transliterate("mama"), "මම");
        assert_eq!(transliterate("yanna"), "යන්න");
        assert_eq!(transliterate("hadhanavaa"), "හදනවා");
    }

    #[test]
    fn test_long_vowels() {
        assert_eq!(transliterate("thee"), "තේ");
        assert_eq!(transliterate("oonee"), "ඕනේ");
        assert_eq!(transliterate("iiyee"), "ඊයේ");
        assert_eq!(transliterate("miit"), "මීට්");
    }

    #[test]
    fn test_ae_vowels() {
        assert_eq!(transliterate("dhaen"), "දැන්");
        assert_eq!(transliterate("baee"), "බෑ");
        assert_eq!(transliterate("ekea"), "එකේ");
    }

    #[test]
    fn test_retroflex_capital() {
        assert_eq!(transliterate("karuNaakaralaa"), "කරුණාකරලා");
    }

    #[test]
    fn test_title_case_word() {
        assert_eq!(transliterate("Suba"), "සුබ");
        assert_eq!(transliterate("Thaththa"), "තත්ත");
        assert_eq!(transliterate("Ruwan"), "රුවන්");
        assert_eq!(transliterate("Dhaen"), "දැන්");
        // 대문자가 둘 이상이면 대소문자 그대로
        assert_eq!(transliterate("KaruNaa"), "ඛරුණා");
    }

    #[test]
    fn test_dental_vs_retroflex() {
        assert_eq!(transliterate("thaniyen"), "තනියෙන්");
        assert_eq!(transliterate("heta"), "හෙට");
        assert_eq!(transliterate("poddak"), "පොඩ්ඩක්");
        assert_eq!(transliterate("puluvandha"), "පුලුවන්ද");
    }

    #[test]
    fn test_geminate_and_final_consonant() {
        assert_eq!(transliterate("passe"), "පස්සෙ");
        assert_eq!(transliterate("puluvannam"), "පුලුවන්නම්");
        assert_eq!(transliterate("dhavasak"), "දවසක්");
        assert_eq!(transliterate("unoth"), "උනොත්");
    }

    #[test]
    fn test_anusvara_and_prenasal() {
        assert_eq!(transliterate("singhala"), "සිංහල");
        assert_eq!(transliterate("hanndha"), "හඳ");
    }

    #[test]
    fn test_fixed_form() {
        assert_eq!(transliterate("ne"), "නේ");
        assert_eq!(transliterate("nadda"), "නැද්ද");
    }

    #[test]
    fn test_unmapped_passthrough() {
        // 규칙 없는 문자는 그대로, 앞 자음은 알-라쿠나로 닫힘
        assert_eq!(transliterate("kaq"), "කq");
        assert_eq!(transliterate("xa"), "xඅ");
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(transliterate(""), "");
    }

    #[test]
    fn test_deterministic() {
        let first = transliterate("karanavaa");
        assert_eq!(first, "කරනවා");
        assert_eq!(transliterate("karanavaa"), first);
    }
}
