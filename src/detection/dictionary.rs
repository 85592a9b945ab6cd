//! 보호 단어/싱글리시 예외 사전
//!
//! 영어 기능어, 브랜드/기술 용어, 고유명사, 약어, 월/단위 토큰은 변환하지 않고
//! 그대로 둡니다. 영어처럼 보이지만 싱할라어로 쓰인 단어는 강제로 변환합니다.

use std::collections::HashMap;

use lazy_static::lazy_static;

/// 사전 항목 처리 방식
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Treatment {
    /// 원문 그대로 출력 (Foreign)
    PassThrough,
    /// 음운 검사와 무관하게 변환 (Singlish)
    ForceTransliterate,
    /// 단어 전체를 고정된 싱할라 표기로 치환 (Singlish)
    Fixed(&'static str),
}

/// 사전 항목 (key는 소문자)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DictionaryEntry {
    pub key: &'static str,
    pub treatment: Treatment,
}

/// 영어 기능어 및 자주 섞여 쓰이는 일상 영단어
#[rustfmt::skip]
const ENGLISH_WORDS: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "is", "are", "was", "were", "be",
    "to", "of", "in", "on", "at", "for", "with", "from", "by", "it", "this",
    "that", "i", "you", "your", "we", "they", "he", "she", "my", "so",
    "yes", "no", "not", "ok", "okay", "hi", "hello", "bye", "please", "sorry",
    "thank", "thanks", "welcome", "good", "bad", "nice", "happy", "sad",
    "late", "early", "free", "busy", "open", "close", "call", "reply", "chat",
    "message", "mail", "email", "file", "form", "link", "post", "share",
    "office", "meeting", "class", "lab", "lecture", "exam", "assignment",
    "project", "campus", "school", "work", "job", "boss", "team", "part",
    "time", "full", "home", "morning", "evening", "night", "today", "weekend",
    "shopping", "lunch", "dinner", "breakfast", "party", "birthday", "traffic",
    "bus", "train", "taxi", "bike", "phone", "mobile", "laptop", "computer",
    "internet", "online", "offline", "password", "login", "logout", "update",
    "download", "upload", "connect", "video", "photo", "selfie",
];

/// 축약형 어간 (don't -> don + ' + t)
#[rustfmt::skip]
const CONTRACTION_STEMS: &[&str] = &[
    "don", "can", "won", "isn", "aren", "wasn", "weren", "doesn", "didn",
    "hasn", "haven", "hadn", "couldn", "shouldn", "wouldn", "re", "ve",
];

/// 로마자 표기 그대로 두는 싱할라어 단어
#[rustfmt::skip]
const ROMANIZED_KEEP: &[&str] = &[
    "mage",
];

/// 브랜드/서비스/기술 용어
#[rustfmt::skip]
const BRAND_TERMS: &[&str] = &[
    "wifi", "zoom", "google", "gmail", "facebook", "whatsapp", "viber",
    "youtube", "instagram", "tiktok", "skype", "teams", "android", "iphone",
    "windows", "uber", "pickme", "dialog", "mobitel", "hutch", "airtel",
];

/// 고유명사 (지명)
#[rustfmt::skip]
const PROPER_NOUNS: &[&str] = &[
    "colombo", "galle", "kandy", "jaffna", "matara", "negombo", "kurunegala",
    "anuradhapura", "trincomalee", "batticaloa", "sri", "lanka", "ceylon",
];

/// 약어, 통화, 단위
#[rustfmt::skip]
const ABBREVIATIONS: &[&str] = &[
    "rs", "id", "am", "pm", "atm", "nic", "sms", "otp", "cv", "gpa", "usd",
    "kg", "km", "cm", "ml", "mb", "gb", "kb", "hrs", "min", "mins", "sec",
];

/// 월, 요일
#[rustfmt::skip]
const CALENDAR_TERMS: &[&str] = &[
    "january", "february", "march", "april", "may", "june", "july", "august",
    "september", "october", "november", "december",
    "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep", "sept", "oct",
    "nov", "dec",
    "monday", "tuesday", "wednesday", "thursday", "friday", "saturday", "sunday",
];

/// 영어와 충돌하거나 음운 검사를 통과하지 못하지만 싱할라어인 단어
#[rustfmt::skip]
const SINGLISH_EXCEPTIONS: &[&str] = &[
    "mang", "ehenang", "thamang", "oyang", "hari", "honda", "bath", "pin",
    "me", "man", "mal", "kale", "game", "pata",
];

/// 고정 표기 (조사, 관용 철자)
#[rustfmt::skip]
const FIXED_FORMS: &[(&str, &str)] = &[
    ("ne", "නේ"),
    ("da", "ද"),
    ("ada", "අද"),
    ("nadda", "නැද්ද"),
    ("wada", "වැඩ"),
    ("vada", "වැඩ"),
];

lazy_static! {
    static ref BUILTIN_DICTIONARY: Dictionary = Dictionary::builtin();
}

/// 불변 사전 (대소문자 무관 조회)
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    entries: HashMap<&'static str, Treatment>,
}

impl Dictionary {
    /// 빈 사전 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 항목 목록으로 사전 생성 (중복 키는 먼저 온 항목 유지)
    pub fn from_entries(entries: impl IntoIterator<Item = DictionaryEntry>) -> Self {
        let mut map = HashMap::new();
        for entry in entries {
            map.entry(entry.key).or_insert(entry.treatment);
        }
        Self { entries: map }
    }

    /// 내장 단어 목록으로 사전 생성
    ///
    /// 보호 목록이 먼저 등록되므로 충돌 시 PassThrough가 이김
    pub fn builtin() -> Self {
        let protected = ENGLISH_WORDS
            .iter()
            .chain(CONTRACTION_STEMS)
            .chain(ROMANIZED_KEEP)
            .chain(BRAND_TERMS)
            .chain(PROPER_NOUNS)
            .chain(ABBREVIATIONS)
            .chain(CALENDAR_TERMS)
            .map(|&key| DictionaryEntry {
                key,
                treatment: Treatment::PassThrough,
            });
        let fixed = FIXED_FORMS.iter().map(|&(key, form)| DictionaryEntry {
            key,
            treatment: Treatment::Fixed(form),
        });
        let exceptions = SINGLISH_EXCEPTIONS.iter().map(|&key| DictionaryEntry {
            key,
            treatment: Treatment::ForceTransliterate,
        });
        let dictionary = Self::from_entries(protected.chain(fixed).chain(exceptions));
        log::debug!("내장 사전 로드: {}개 항목", dictionary.len());
        dictionary
    }

    /// 프로세스 전역 내장 사전
    pub fn global() -> &'static Dictionary {
        &BUILTIN_DICTIONARY
    }

    /// 대소문자 무관 조회
    pub fn lookup(&self, word: &str) -> Option<Treatment> {
        if word.is_empty() {
            return None;
        }
        if let Some(&t) = self.entries.get(word) {
            return Some(t);
        }
        self.entries.get(word.to_lowercase().as_str()).copied()
    }

    /// 고정 표기 조회
    pub fn fixed_form(&self, word: &str) -> Option<&'static str> {
        match self.lookup(word) {
            Some(Treatment::Fixed(form)) => Some(form),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
