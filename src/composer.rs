//! 분류된 구간을 최종 출력 문자열로 재조립

use crate::core::converter::Transliterator;
use crate::detection::{Classifier, Origin};
use crate::tokenizer::{Span, SpanKind};

/// 분류 결과가 붙은 구간 (Word 구간만 origin이 있음)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifiedSpan<'a> {
    pub span: Span<'a>,
    pub origin: Option<Origin>,
}

impl<'a> ClassifiedSpan<'a> {
    /// 구간 하나를 분류 (Word가 아니면 origin 없음)
    pub fn classify(span: Span<'a>, classifier: &Classifier<'_>) -> Self {
        let origin = match span.kind {
            SpanKind::Word => Some(classifier.classify(span.text)),
            SpanKind::Number
            | SpanKind::Punctuation
            | SpanKind::Whitespace
            | SpanKind::Quote => None,
        };
        Self { span, origin }
    }

    /// 변환 대상 구간인지 확인
    pub fn is_transliterated(&self) -> bool {
        self.origin.is_some_and(|o| o.is_transliterated())
    }

    /// 이 구간의 출력 텍스트
    pub fn render(&self, transliterator: &Transliterator<'_>) -> String {
        if self.is_transliterated() {
            transliterator.transliterate(self.span.text)
        } else {
            self.span.text.to_string()
        }
    }
}

/// 분류된 구간들을 원래 순서대로 이어 붙임
///
/// Singlish 구간만 변환하고 나머지는 원문(대소문자, 공백 포함) 그대로 출력
pub fn compose(spans: &[ClassifiedSpan<'_>], transliterator: &Transliterator<'_>) -> String {
    let mut output = String::with_capacity(spans.iter().map(|s| s.span.text.len() * 3).sum());
    for span in spans {
        if span.is_transliterated() {
            output.push_str(&transliterator.transliterate(span.span.text));
        } else {
            output.push_str(span.span.text);
        }
    }
    output
}
