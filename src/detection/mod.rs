//! 단어 언어 분류 모듈

mod classifier;
pub mod dictionary;
pub mod phonotactics;

pub use classifier::{Classifier, Origin};
pub use dictionary::{Dictionary, DictionaryEntry, Treatment};
pub use phonotactics::is_pronounceable;
