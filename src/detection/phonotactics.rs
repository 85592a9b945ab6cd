//! 싱할라 음절 구조 검사
//!
//! 로마자 토큰이 싱할라 음절 구조(자음 [+ h] + 모음)로 읽힐 수 있는지 판별합니다.
//! 통과하지 못하는 토큰은 영어일 가능성이 높으므로 변환하지 않습니다.

/// 모음 연속 최대 길이 (aee)
const MAX_VOWEL_RUN: usize = 3;

/// 음운 단위
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Unit {
    Vowel,
    /// 자음 (소문자 대표 문자, h 결합 이중자 포함)
    Consonant(char),
}

/// 로마자 모음인지 확인
fn is_vowel_letter(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

/// 단어를 음운 단위로 분해 (싱글리시 문자 집합 밖이면 None)
fn split_units(word: &str) -> Option<Vec<Unit>> {
    let chars: Vec<char> = word.chars().map(|c| c.to_ascii_lowercase()).collect();
    let mut units = Vec::with_capacity(chars.len());
    let mut vowel_run = 0;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if !c.is_ascii_lowercase() {
            return None;
        }
        if is_vowel_letter(c) {
            vowel_run += 1;
            if vowel_run > MAX_VOWEL_RUN {
                return None;
            }
            units.push(Unit::Vowel);
            i += 1;
            continue;
        }
        vowel_run = 0;

        let followed_by_h = chars.get(i + 1) == Some(&'h');
        match c {
            'q' | 'x' | 'z' => return None,
            // c는 ch로만 쓰임
            'c' if !followed_by_h => return None,
            'h' => {
                units.push(Unit::Consonant('h'));
                i += 1;
            }
            _ if followed_by_h => {
                units.push(Unit::Consonant(c));
                i += 2;
            }
            _ => {
                units.push(Unit::Consonant(c));
                i += 1;
            }
        }
    }
    Some(units)
}

/// 어두 자음군 허용 여부 (예: pra, kya)
fn is_valid_onset(cluster: &[char]) -> bool {
    match cluster {
        [] | [_] => true,
        [_, second] => matches!(second, 'r' | 'y'),
        _ => false,
    }
}

/// 어중 자음군 허용 여부 (예: nn, ss, ndh, ndr)
fn is_valid_medial(cluster: &[char]) -> bool {
    match cluster {
        [] | [_] | [_, _] => true,
        ['n', 'n', _] | ['m', 'm', _] => true,
        [_, _, last] => matches!(last, 'r' | 'y'),
        _ => false,
    }
}

/// 단어가 싱할라 음절 구조로 발음 가능한지 검사
///
/// - 싱글리시 문자만 포함 (q, x, z 불가, c는 ch로만)
/// - 모음 최소 1개, 연속 모음 3개 이하
/// - 어두 자음군 2개 이하 (둘째는 r/y), 어중 자음군 2개 이하, 어말 자음 1개 이하
pub fn is_pronounceable(word: &str) -> bool {
    let Some(units) = split_units(word) else {
        return false;
    };
    if !units.contains(&Unit::Vowel) {
        return false;
    }

    let mut cluster: Vec<char> = Vec::new();
    let mut seen_vowel = false;
    for unit in &units {
        match unit {
            Unit::Consonant(c) => cluster.push(*c),
            Unit::Vowel => {
                let valid = if seen_vowel {
                    is_valid_medial(&cluster)
                } else {
                    is_valid_onset(&cluster)
                };
                if !valid {
                    return false;
                }
                cluster.clear();
                seen_vowel = true;
            }
        }
    }

    // 어말 자음군
    cluster.len() <= 1
}
