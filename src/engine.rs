//! 변환 엔진 (토큰화 -> 분류 -> 변환 -> 조립)
//!
//! 엔진은 불변 규칙 테이블과 사전만 참조하므로 여러 스레드에서 동시에
//! 호출해도 됩니다. 호출 사이에 상태를 남기지 않습니다.

use crate::composer::{compose, ClassifiedSpan};
use crate::core::converter::Transliterator;
use crate::core::rule_table::RuleTable;
use crate::detection::{Classifier, Dictionary, Origin};
use crate::tokenizer::{tokenize, SpanKind};

/// 한 번의 변환 결과
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TransliterationResult {
    /// 출력 문자열
    pub text: String,
    /// 처리한 구간 수
    pub consumed_spans: usize,
}

/// `explain` 결과의 구간 하나
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanReport {
    pub kind: SpanKind,
    pub origin: Option<Origin>,
    pub start: usize,
    pub end: usize,
    pub input: String,
    pub output: String,
}

/// 싱글리시 변환 엔진
#[derive(Debug, Clone, Copy)]
pub struct Engine<'t> {
    table: &'t RuleTable,
    dictionary: &'t Dictionary,
}

impl<'t> Engine<'t> {
    /// 규칙 테이블과 사전을 지정하여 엔진 생성
    pub fn new(table: &'t RuleTable, dictionary: &'t Dictionary) -> Self {
        Self { table, dictionary }
    }

    fn classifier(&self) -> Classifier<'t> {
        Classifier::new(self.dictionary)
    }

    fn transliterator(&self) -> Transliterator<'t> {
        Transliterator::new(self.table, self.dictionary)
    }

    fn classify<'a>(&self, input: &'a str) -> Vec<ClassifiedSpan<'a>> {
        let classifier = self.classifier();
        tokenize(input)
            .into_iter()
            .map(|span| ClassifiedSpan::classify(span, &classifier))
            .collect()
    }

    /// 입력 전체를 변환
    ///
    /// 빈 입력은 즉시 빈 결과 (Idle). 그 외에는 네 단계를 전체 입력에 대해
    /// 동기적으로 수행하고 결과를 반환 (Processing -> Idle)
    pub fn translate(&self, input: &str) -> TransliterationResult {
        if input.is_empty() {
            return TransliterationResult::default();
        }
        log::trace!("Idle -> Processing ({} bytes)", input.len());

        let spans = self.classify(input);
        let text = compose(&spans, &self.transliterator());

        log::debug!(
            "변환 완료: 구간 {}개, 변환 {}개",
            spans.len(),
            spans.iter().filter(|s| s.is_transliterated()).count()
        );
        log::trace!("Processing -> Idle");

        TransliterationResult {
            text,
            consumed_spans: spans.len(),
        }
    }

    /// 구간별 분류와 출력을 반환 (디버깅용)
    pub fn explain(&self, input: &str) -> Vec<SpanReport> {
        let transliterator = self.transliterator();
        self.classify(input)
            .into_iter()
            .map(|s| SpanReport {
                kind: s.span.kind,
                origin: s.origin,
                start: s.span.start,
                end: s.span.end,
                input: s.span.text.to_string(),
                output: s.render(&transliterator),
            })
            .collect()
    }
}

impl Engine<'static> {
    /// 내장 규칙 테이블과 사전을 쓰는 엔진
    pub fn builtin() -> Self {
        Self::new(RuleTable::builtin(), Dictionary::global())
    }
}

impl Default for Engine<'static> {
    fn default() -> Self {
        Self::builtin()
    }
}

/// 내장 엔진으로 입력을 변환
pub fn translate(input: &str) -> String {
    Engine::builtin().translate(input).text
}
