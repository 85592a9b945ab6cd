//! 싱할라 유니코드 블록 상수/판별 유틸리티

/// 싱할라 블록 시작 코드포인트
const SINHALA_BLOCK_START: u32 = 0x0D80;
/// 싱할라 블록 끝 코드포인트
const SINHALA_BLOCK_END: u32 = 0x0DFF;

/// 알-라쿠나 (්): 자음의 내재 모음 제거 기호
pub const AL_LAKUNA: char = '\u{0DCA}';
/// 아누스와라 (ං)
pub const ANUSVARA: char = '\u{0D82}';

/// 싱할라 블록 문자인지 확인
pub fn is_sinhala(c: char) -> bool {
    (SINHALA_BLOCK_START..=SINHALA_BLOCK_END).contains(&(c as u32))
}

/// 자음 문자 (ක ~ ෆ)
pub fn is_consonant_letter(c: char) -> bool {
    (0x0D9A..=0x0DC6).contains(&(c as u32))
}

/// 독립 모음 문자 (අ ~ ඖ)
pub fn is_independent_vowel(c: char) -> bool {
    (0x0D85..=0x0D96).contains(&(c as u32))
}

/// 종속 모음 기호 (ා ~ ෟ, ෲ, ෳ)
pub fn is_vowel_sign(c: char) -> bool {
    let cp = c as u32;
    (0x0DCF..=0x0DDF).contains(&cp) || cp == 0x0DF2 || cp == 0x0DF3
}

/// 텍스트에 싱할라 문자가 하나라도 포함되어 있는지 확인
pub fn has_sinhala(text: &str) -> bool {
    text.chars().any(is_sinhala)
}

/// 종속 기호가 자음 없이 단독으로 시작하는지 검사
///
/// 조합 FSM 결과가 정상이라면 모음 기호나 알-라쿠나는 항상 자음 뒤에 붙음
pub fn has_orphan_sign(text: &str) -> bool {
    let mut prev: Option<char> = None;
    for ch in text.chars() {
        if is_vowel_sign(ch) || ch == AL_LAKUNA {
            match prev {
                Some(p) if is_consonant_letter(p) => {}
                _ => return true,
            }
        }
        prev = Some(ch);
    }
    false
}
