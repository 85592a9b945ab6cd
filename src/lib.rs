pub mod composer;
pub mod config;
pub mod core;
pub mod detection;
pub mod engine;
pub mod tokenizer;

pub use composer::{compose, ClassifiedSpan};
pub use core::converter::transliterate;
pub use detection::{Classifier, Origin};
pub use engine::{translate, Engine, SpanReport, TransliterationResult};
pub use tokenizer::{tokenize, Span, SpanKind};
