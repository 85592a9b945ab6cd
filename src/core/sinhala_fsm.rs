//! 싱할라 문자소 조합 유한 상태 기계 (FSM)
//!
//! 자음 + 모음 -> 자음 + 종속 모음 기호
//! 자음 + 자음 -> 앞 자음에 알-라쿠나(්)
//! 단독 모음 -> 독립 모음 문자

use crate::core::rule_table::Grapheme;
use crate::core::unicode::AL_LAKUNA;

/// FSM 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// 조합 중인 자음 없음
    Empty,
    /// 자음 하나가 모음을 기다리는 중
    Consonant,
}

/// 싱할라 조합 FSM
pub struct SinhalaFsm {
    state: State,
    /// 현재 대기 중인 자음
    consonant: char,
    /// 출력 버퍼
    output: String,
}

impl SinhalaFsm {
    /// 새 FSM 생성
    pub fn new() -> Self {
        Self {
            state: State::Empty,
            consonant: '\0',
            output: String::new(),
        }
    }

    /// 문자소를 입력하여 상태 전이
    pub fn feed(&mut self, grapheme: Grapheme) {
        match grapheme {
            Grapheme::Consonant(letter) => self.feed_consonant(letter),
            Grapheme::Vowel { independent, sign } => self.feed_vowel(independent, sign),
            Grapheme::Literal(text) => {
                self.flush_current();
                self.output.push_str(text);
            }
        }
    }

    /// 자음 입력 처리
    fn feed_consonant(&mut self, letter: char) {
        // 앞 자음은 모음 없이 끝났으므로 알-라쿠나로 확정
        self.flush_current();
        self.consonant = letter;
        self.state = State::Consonant;
    }

    /// 모음 입력 처리
    fn feed_vowel(&mut self, independent: char, sign: Option<char>) {
        match self.state {
            State::Empty => {
                self.output.push(independent);
            }
            State::Consonant => {
                self.output.push(self.consonant);
                // sign이 없으면 내재 모음 'a'
                if let Some(s) = sign {
                    self.output.push(s);
                }
                self.reset_state();
            }
        }
    }

    /// 대기 중인 자음을 알-라쿠나와 함께 출력
    fn flush_current(&mut self) {
        if self.state == State::Consonant {
            self.output.push(self.consonant);
            self.output.push(AL_LAKUNA);
        }
        self.reset_state();
    }

    fn reset_state(&mut self) {
        self.state = State::Empty;
        self.consonant = '\0';
    }

    /// 변환 규칙이 없는 문자 처리
    pub fn feed_passthrough(&mut self, c: char) {
        self.flush_current();
        self.output.push(c);
    }

    /// FSM 종료 및 최종 결과 반환
    pub fn finish(mut self) -> String {
        self.flush_current();
        self.output
    }
}

impl Default for SinhalaFsm {
    fn default() -> Self {
        Self::new()
    }
}
