//! 싱글리시 -> 싱할라 문자 변환 핵심 모듈

pub mod converter;
pub mod rule_table;
pub mod sinhala_fsm;
pub mod unicode;

pub use converter::{transliterate, Transliterator};
pub use rule_table::{Context, Grapheme, Rule, RuleTable};
