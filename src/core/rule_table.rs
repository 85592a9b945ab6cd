//! 로마자(Singlish) 패턴 -> 싱할라 문자소 규칙 테이블
//!
//! 규칙은 트라이(arena)로 한 번만 빌드되어 모든 변환 호출이 참조로 공유합니다.
//! 각 위치에서 가장 긴 패턴을 우선 적용하고(최장 일치), 길이가 같으면
//! 명시적 우선순위가 높은 규칙이 이깁니다.

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::core::unicode::ANUSVARA;

/// 규칙이 만들어내는 싱할라 문자소
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grapheme {
    /// 자음 (내재 모음 'a' 포함 형태)
    Consonant(char),
    /// 모음 (independent: 단독 모음 문자, sign: 자음 뒤 종속 기호, None이면 내재 모음)
    Vowel {
        independent: char,
        sign: Option<char>,
    },
    /// 그대로 출력되는 문자열 (아누스와라 등)
    Literal(&'static str),
}

/// 규칙 적용 조건 (다음 문자 기준)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Context {
    /// 패턴 바로 뒤에 로마자 모음이 와야 함
    FollowedByVowel,
    /// 패턴 바로 뒤에 로마자 모음이 오면 안 됨 (단어 끝 포함)
    NotFollowedByVowel,
}

impl Context {
    /// 다음 문자에 대해 조건을 만족하는지 확인
    pub fn allows(&self, next: Option<char>) -> bool {
        let vowel_next = next.is_some_and(is_roman_vowel);
        match self {
            Context::FollowedByVowel => vowel_next,
            Context::NotFollowedByVowel => !vowel_next,
        }
    }
}

/// 로마자 변환 규칙
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub pattern: &'static str,
    pub replacement: Grapheme,
    pub context: Option<Context>,
    pub priority: u8,
}

impl Rule {
    fn pattern_len(&self) -> usize {
        self.pattern.chars().count()
    }
}

const fn consonant(pattern: &'static str, letter: char) -> Rule {
    Rule {
        pattern,
        replacement: Grapheme::Consonant(letter),
        context: None,
        priority: 0,
    }
}

const fn vowel(pattern: &'static str, independent: char, sign: Option<char>) -> Rule {
    Rule {
        pattern,
        replacement: Grapheme::Vowel { independent, sign },
        context: None,
        priority: 0,
    }
}

/// 비음화 자음: 뒤에 모음이 올 때만 적용
const fn prenasal(pattern: &'static str, letter: char) -> Rule {
    Rule {
        pattern,
        replacement: Grapheme::Consonant(letter),
        context: Some(Context::FollowedByVowel),
        priority: 1,
    }
}

/// 아누스와라 문자열 (ං)
const ANUSVARA_STR: &str = "\u{0D82}";

/// 기본 규칙 목록
///
/// 대문자 패턴은 대응하는 소문자와 다른 글자(권설음, 유기음 등)를 뜻함
#[rustfmt::skip]
pub const BUILTIN_RULES: &[Rule] = &[
    // 모음 (단독 문자, 종속 기호)
    vowel("a",   'අ', None),
    vowel("aa",  'ආ', Some('ා')),
    vowel("ae",  'ඇ', Some('ැ')),
    vowel("aee", 'ඈ', Some('ෑ')),
    vowel("i",   'ඉ', Some('ි')),
    vowel("ii",  'ඊ', Some('ී')),
    vowel("u",   'උ', Some('ු')),
    vowel("uu",  'ඌ', Some('ූ')),
    vowel("e",   'එ', Some('ෙ')),
    vowel("ee",  'ඒ', Some('ේ')),
    vowel("ea",  'ඒ', Some('ේ')),
    vowel("ai",  'ඓ', Some('ෛ')),
    vowel("o",   'ඔ', Some('ො')),
    vowel("oo",  'ඕ', Some('ෝ')),
    vowel("au",  'ඖ', Some('ෞ')),
    vowel("Ru",  'ඍ', Some('ෘ')),

    // 연구개음
    consonant("k",  'ක'),
    consonant("kh", 'ඛ'),
    consonant("K",  'ඛ'),
    consonant("g",  'ග'),
    consonant("gh", 'ඝ'),
    consonant("G",  'ඝ'),
    // 경구개음
    consonant("ch", 'ච'),
    consonant("Ch", 'ඡ'),
    consonant("j",  'ජ'),
    consonant("jh", 'ඣ'),
    consonant("J",  'ඣ'),
    consonant("ny", 'ඤ'),
    // 권설음
    consonant("t",  'ට'),
    consonant("T",  'ඨ'),
    consonant("d",  'ඩ'),
    consonant("D",  'ඪ'),
    consonant("N",  'ණ'),
    // 치음
    consonant("th", 'ත'),
    consonant("Th", 'ථ'),
    consonant("dh", 'ද'),
    consonant("Dh", 'ධ'),
    consonant("n",  'න'),
    // 순음
    consonant("p",  'ප'),
    consonant("ph", 'ඵ'),
    consonant("P",  'ඵ'),
    consonant("b",  'බ'),
    consonant("bh", 'භ'),
    consonant("B",  'භ'),
    consonant("m",  'ම'),
    consonant("f",  'ෆ'),
    // 반모음, 유음
    consonant("y",  'ය'),
    consonant("r",  'ර'),
    consonant("l",  'ල'),
    consonant("L",  'ළ'),
    consonant("v",  'ව'),
    consonant("w",  'ව'),
    // 마찰음
    consonant("s",  'ස'),
    consonant("sh", 'ශ'),
    consonant("Sh", 'ෂ'),
    consonant("S",  'ෂ'),
    consonant("h",  'හ'),

    // 비음화 자음 (sanyaka)
    prenasal("nng",  'ඟ'),
    prenasal("nnd",  'ඬ'),
    prenasal("nndh", 'ඳ'),
    prenasal("mmb",  'ඹ'),

    // ng: 모음 앞이 아니면 아누스와라 (singhala -> සිංහල)
    Rule {
        pattern: "ng",
        replacement: Grapheme::Literal(ANUSVARA_STR),
        context: Some(Context::NotFollowedByVowel),
        priority: 2,
    },
];

/// 트라이 노드 (arena 인덱스로 연결)
#[derive(Debug, Default)]
struct Node {
    children: HashMap<char, usize>,
    /// 이 노드에서 끝나는 규칙 인덱스 (우선순위 내림차순)
    rules: Vec<usize>,
}

/// 최장 일치 검색 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleMatch<'t> {
    /// 소비한 입력 문자 수
    pub len: usize,
    pub rule: &'t Rule,
}

/// 불변 규칙 테이블
#[derive(Debug)]
pub struct RuleTable {
    /// 패턴 길이 내림차순, 우선순위 내림차순으로 정렬된 규칙
    rules: Vec<Rule>,
    nodes: Vec<Node>,
    max_pattern_len: usize,
}

lazy_static! {
    static ref BUILTIN_TABLE: RuleTable = RuleTable::new(BUILTIN_RULES);
}

impl RuleTable {
    /// 규칙 목록으로 테이블 생성
    pub fn new(rules: &[Rule]) -> Self {
        let mut sorted: Vec<Rule> = rules.to_vec();
        sorted.sort_by(|a, b| {
            b.pattern_len()
                .cmp(&a.pattern_len())
                .then(b.priority.cmp(&a.priority))
        });

        let mut table = Self {
            rules: Vec::with_capacity(sorted.len()),
            nodes: vec![Node::default()],
            max_pattern_len: 0,
        };
        for rule in sorted {
            table.insert(rule);
        }
        log::debug!(
            "규칙 테이블 빌드: 규칙 {}개, 노드 {}개, 최대 패턴 길이 {}",
            table.rules.len(),
            table.nodes.len(),
            table.max_pattern_len
        );
        table
    }

    /// 프로세스 전역 기본 테이블
    pub fn builtin() -> &'static RuleTable {
        &BUILTIN_TABLE
    }

    fn insert(&mut self, rule: Rule) {
        if rule.pattern.is_empty() {
            log::warn!("빈 패턴 규칙은 무시됨");
            return;
        }
        let mut node_idx = 0;
        for c in rule.pattern.chars() {
            node_idx = match self.nodes[node_idx].children.get(&c) {
                Some(&next) => next,
                None => {
                    let next = self.nodes.len();
                    self.nodes.push(Node::default());
                    self.nodes[node_idx].children.insert(c, next);
                    next
                }
            };
        }
        let rule_idx = self.rules.len();
        self.max_pattern_len = self.max_pattern_len.max(rule.pattern_len());
        self.rules.push(rule);
        // 정렬된 순서로 삽입되므로 노드 내 규칙은 우선순위 내림차순 유지
        self.nodes[node_idx].rules.push(rule_idx);
    }

    /// 정렬된 규칙 목록
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn max_pattern_len(&self) -> usize {
        self.max_pattern_len
    }

    /// `pos`에서 시작하는 최장 일치 규칙 검색
    ///
    /// 대소문자를 그대로 비교한 경로와 소문자로 접은 경로를 각각 탐색하여
    /// 더 긴 쪽을 선택하고, 길이가 같으면 대소문자 그대로의 경로가 이깁니다.
    /// 탐색 깊이는 `max_pattern_len`으로 제한되므로 입력 길이에 선형입니다.
    pub fn longest_match(&self, chars: &[char], pos: usize) -> Option<RuleMatch<'_>> {
        let exact = self.walk(chars, pos, false);
        let folded = self.walk(chars, pos, true);
        match (exact, folded) {
            (Some(e), Some(f)) if f.len > e.len => Some(f),
            (Some(e), _) => Some(e),
            (None, f) => f,
        }
    }

    fn walk(&self, chars: &[char], pos: usize, fold_case: bool) -> Option<RuleMatch<'_>> {
        // 경로상 방문한 (깊이, 노드) 기록
        let mut path: Vec<(usize, usize)> = Vec::with_capacity(self.max_pattern_len);
        let mut node_idx = 0;
        for (depth, &c) in chars[pos.min(chars.len())..].iter().enumerate() {
            let key = if fold_case { c.to_ascii_lowercase() } else { c };
            match self.nodes[node_idx].children.get(&key) {
                Some(&next) => {
                    node_idx = next;
                    path.push((depth + 1, node_idx));
                }
                None => break,
            }
        }

        for &(len, idx) in path.iter().rev() {
            let next = chars.get(pos + len).copied();
            for &rule_idx in &self.nodes[idx].rules {
                let rule = &self.rules[rule_idx];
                if rule.context.map_or(true, |ctx| ctx.allows(next)) {
                    return Some(RuleMatch { len, rule });
                }
            }
        }
        None
    }
}

/// 로마자 모음 문자인지 확인 (대소문자 무관)
pub fn is_roman_vowel(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
}

/// 아누스와라 규칙인지 확인
pub fn is_anusvara(grapheme: &Grapheme) -> bool {
    matches!(grapheme, Grapheme::Literal(s) if s.chars().eq([ANUSVARA]))
}
