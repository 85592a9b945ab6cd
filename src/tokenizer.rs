//! 입력 문자열 -> 타입이 있는 구간(Span) 분할
//!
//! 모든 구간을 순서대로 이어 붙이면 원본 입력이 정확히 복원됩니다.
//! 연속 공백은 하나의 Whitespace 구간으로 그대로 보존합니다.

/// 구간 유형
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanKind {
    /// 연속된 유니코드 문자
    Word,
    /// 연속된 숫자 (숫자 사이의 . - : / 포함: 7.15, 2026-03-10)
    Number,
    /// 그 밖의 단일 문자
    Punctuation,
    /// 연속된 공백 문자
    Whitespace,
    /// 따옴표 한 글자
    Quote,
}

impl SpanKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpanKind::Word => "word",
            SpanKind::Number => "number",
            SpanKind::Punctuation => "punct",
            SpanKind::Whitespace => "space",
            SpanKind::Quote => "quote",
        }
    }
}

/// 입력의 연속 구간 (start, end는 바이트 오프셋)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'a> {
    pub start: usize,
    pub end: usize,
    pub text: &'a str,
    pub kind: SpanKind,
}

fn is_quote(c: char) -> bool {
    matches!(c, '\'' | '"' | '\u{2018}' | '\u{2019}' | '\u{201C}' | '\u{201D}')
}

/// 숫자 구간 안에서만 허용되는 구분자
fn is_number_separator(c: char) -> bool {
    matches!(c, '.' | '-' | ':' | '/')
}

/// 입력을 구간 목록으로 분할 (실패하지 않음)
pub fn tokenize(input: &str) -> Vec<Span<'_>> {
    let chars: Vec<(usize, char)> = input.char_indices().collect();
    let mut spans = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let (start, c) = chars[i];
        let (kind, next) = if c.is_alphabetic() {
            (SpanKind::Word, scan_while(&chars, i, |c| c.is_alphabetic()))
        } else if c.is_ascii_digit() {
            (SpanKind::Number, scan_number(&chars, i))
        } else if c.is_whitespace() {
            (SpanKind::Whitespace, scan_while(&chars, i, char::is_whitespace))
        } else if is_quote(c) {
            (SpanKind::Quote, i + 1)
        } else {
            (SpanKind::Punctuation, i + 1)
        };

        let end = chars.get(next).map_or(input.len(), |&(offset, _)| offset);
        spans.push(Span {
            start,
            end,
            text: &input[start..end],
            kind,
        });
        i = next;
    }

    log::trace!("토큰화: {}개 구간", spans.len());
    spans
}

/// 조건을 만족하는 문자가 끝나는 인덱스
fn scan_while(chars: &[(usize, char)], from: usize, pred: impl Fn(char) -> bool) -> usize {
    let mut i = from;
    while i < chars.len() && pred(chars[i].1) {
        i += 1;
    }
    i
}

/// 숫자 구간 끝 인덱스 (구분자는 앞뒤가 모두 숫자일 때만 포함)
fn scan_number(chars: &[(usize, char)], from: usize) -> usize {
    let mut i = from;
    while i < chars.len() {
        let c = chars[i].1;
        if c.is_ascii_digit() {
            i += 1;
        } else if is_number_separator(c)
            && chars.get(i + 1).is_some_and(|&(_, n)| n.is_ascii_digit())
        {
            i += 2;
        } else {
            break;
        }
    }
    i
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<(SpanKind, &str)> {
        tokenize(input).into_iter().map(|s| (s.kind, s.text)).collect()
    }

    #[test]
    fn test_words_and_whitespace() {
        assert_eq!(
            kinds("mama office"),
            vec![
                (SpanKind::Word, "mama"),
                (SpanKind::Whitespace, " "),
                (SpanKind::Word, "office"),
            ]
        );
    }

    #[test]
    fn test_double_space_single_span() {
        let spans = tokenize("office  yanwaa");
        assert_eq!(spans[1].kind, SpanKind::Whitespace);
        assert_eq!(spans[1].text, "  ");
        assert_eq!((spans[1].start, spans[1].end), (6, 8));
        assert_eq!(spans[2].text, "yanwaa");
    }

    #[test]
    fn test_numbers() {
        assert_eq!(kinds("7.15"), vec![(SpanKind::Number, "7.15")]);
        assert_eq!(kinds("2026-03-10"), vec![(SpanKind::Number, "2026-03-10")]);
        assert_eq!(kinds("12:30"), vec![(SpanKind::Number, "12:30")]);
        // 숫자 뒤 마침표는 별도 구간
        assert_eq!(
            kinds("2500."),
            vec![(SpanKind::Number, "2500"), (SpanKind::Punctuation, ".")]
        );
    }

    #[test]
    fn test_punctuation_single_chars() {
        assert_eq!(
            kinds("dha???"),
            vec![
                (SpanKind::Word, "dha"),
                (SpanKind::Punctuation, "?"),
                (SpanKind::Punctuation, "?"),
                (SpanKind::Punctuation, "?"),
            ]
        );
        assert_eq!(
            kinds("Rs."),
            vec![(SpanKind::Word, "Rs"), (SpanKind::Punctuation, ".")]
        );
    }

    #[test]
    fn test_quotes() {
        assert_eq!(
            kinds("'mama ennam'kiyalaa"),
            vec![
                (SpanKind::Quote, "'"),
                (SpanKind::Word, "mama"),
                (SpanKind::Whitespace, " "),
                (SpanKind::Word, "ennam"),
                (SpanKind::Quote, "'"),
                (SpanKind::Word, "kiyalaa"),
            ]
        );
    }

    #[test]
    fn test_letters_and_digits_split() {
        assert_eq!(
            kinds("tmhl5my"),
            vec![
                (SpanKind::Word, "tmhl"),
                (SpanKind::Number, "5"),
                (SpanKind::Word, "my"),
            ]
        );
    }

    #[test]
    fn test_reconstructs_input() {
        for input in [
            "mama office  yanna hadhanavaa.",
            "eyaa kivuvee 'mama ennam'kiyalaa.",
            "2026-03-10 dhinata\tmeeting\n\neka",
            "අද 7.15 PM",
            "",
        ] {
            let spans = tokenize(input);
            let joined: String = spans.iter().map(|s| s.text).collect();
            assert_eq!(joined, input);
            // 연속성
            let mut offset = 0;
            for span in &spans {
                assert_eq!(span.start, offset);
                assert_eq!(&input[span.start..span.end], span.text);
                offset = span.end;
            }
            assert_eq!(offset, input.len());
        }
    }

    #[test]
    fn test_empty() {
        assert!(tokenize("").is_empty());
    }
}
