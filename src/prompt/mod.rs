//! Interactive key entry.
//!
//! The loop is a small state machine: it starts in `Awaiting`, and every
//! operator answer moves it to `Validated`, back to `Awaiting` (invalid
//! key, retry accepted) or to `Cancelled`. The two last states are
//! terminal.
pub mod input;

use std::io;

use crate::models::ValidKey;
use crate::term;
use crate::validate::validate;

pub use input::{default_source, forward_ctrl_c, Interrupter, StdinInput, TerminalInput};

pub const KEY_MESSAGE: &str = "Enter Flowise API Key (or 'q' to quit):";
pub const RETRY_MESSAGE: &str = "Try again? (y/n):";

/// One answer from the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Line(String),
    /// Ctrl-C, Esc or end of input.
    Interrupted,
}

/// Where operator answers come from.
pub trait LineSource {
    fn read_line(&mut self, message: &str) -> io::Result<Reply>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelReason {
    Quit,
    Interrupted,
    DeclinedRetry,
    InputError,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptState {
    Awaiting,
    Validated(ValidKey),
    Cancelled(CancelReason),
}

/// Ask until a valid key is entered or the operator gives up.
pub fn prompt(input: &mut dyn LineSource) -> Option<ValidKey> {
    match run(input) {
        PromptState::Validated(key) => Some(key),
        _ => None,
    }
}

/// Drive the loop to a terminal state.
pub fn run(input: &mut dyn LineSource) -> PromptState {
    let mut state = PromptState::Awaiting;
    while state == PromptState::Awaiting {
        state = step(input);
    }
    tracing::debug!(?state, "prompt finished");
    state
}

fn step(input: &mut dyn LineSource) -> PromptState {
    let line = match read(input, KEY_MESSAGE) {
        Ok(line) => line,
        Err(done) => return done,
    };
    let line = line.trim();

    if line.eq_ignore_ascii_case("q") {
        term::warning("Configuration cancelled by user");
        return PromptState::Cancelled(CancelReason::Quit);
    }

    match validate(line) {
        Ok(key) => {
            if key.has_unusual_chars() {
                term::warning("API key contains unusual characters. Proceeding anyway...");
            }
            PromptState::Validated(key)
        }
        Err(e) => {
            term::error(&e.to_string());
            let answer = match read(input, RETRY_MESSAGE) {
                Ok(answer) => answer,
                Err(done) => return done,
            };
            if answer.trim().eq_ignore_ascii_case("y") {
                PromptState::Awaiting
            } else {
                PromptState::Cancelled(CancelReason::DeclinedRetry)
            }
        }
    }
}

fn read(input: &mut dyn LineSource, message: &str) -> Result<String, PromptState> {
    match input.read_line(message) {
        Ok(Reply::Line(line)) => Ok(line),
        Ok(Reply::Interrupted) => {
            println!();
            term::warning("Configuration cancelled by user");
            Err(PromptState::Cancelled(CancelReason::Interrupted))
        }
        Err(e) => {
            term::error(&format!("Error reading input: {e}"));
            Err(PromptState::Cancelled(CancelReason::InputError))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// Replays canned answers and records the questions asked.
    struct Scripted {
        replies: VecDeque<io::Result<Reply>>,
        asked: Vec<String>,
    }

    impl Scripted {
        fn new(replies: Vec<io::Result<Reply>>) -> Self {
            Self { replies: replies.into(), asked: Vec::new() }
        }

        fn lines(lines: &[&str]) -> Self {
            Self::new(lines.iter().map(|l| Ok(Reply::Line(l.to_string()))).collect())
        }
    }

    impl LineSource for Scripted {
        fn read_line(&mut self, message: &str) -> io::Result<Reply> {
            self.asked.push(message.to_string());
            self.replies.pop_front().unwrap_or(Ok(Reply::Interrupted))
        }
    }

    const GOOD: &str = "zzzzzzzzzzzzzzzzzzzz";

    #[test]
    fn valid_key_on_first_try() {
        let mut input = Scripted::lines(&[GOOD]);
        let key = prompt(&mut input).unwrap();
        assert_eq!(key.as_str(), GOOD);
        assert_eq!(input.asked, vec![KEY_MESSAGE]);
    }

    #[test]
    fn q_quits_in_any_case() {
        for q in ["q", "Q", "  q  "] {
            let mut input = Scripted::lines(&[q]);
            assert_eq!(run(&mut input), PromptState::Cancelled(CancelReason::Quit));
        }
    }

    #[test]
    fn invalid_then_retry_then_valid() {
        let mut input = Scripted::lines(&["short", "y", GOOD]);
        assert_eq!(prompt(&mut input).map(|k| k.as_str().to_string()), Some(GOOD.to_string()));
        assert_eq!(input.asked, vec![KEY_MESSAGE, RETRY_MESSAGE, KEY_MESSAGE]);
    }

    #[test]
    fn retry_accepts_uppercase_y() {
        let mut input = Scripted::lines(&["", " Y ", GOOD]);
        assert!(prompt(&mut input).is_some());
    }

    #[test]
    fn anything_but_y_declines_retry() {
        for answer in ["n", "", "yes", "no"] {
            let mut input = Scripted::lines(&["   ", answer]);
            assert_eq!(run(&mut input), PromptState::Cancelled(CancelReason::DeclinedRetry));
        }
    }

    #[test]
    fn interrupt_cancels_at_either_question() {
        let mut input = Scripted::new(vec![Ok(Reply::Interrupted)]);
        assert_eq!(run(&mut input), PromptState::Cancelled(CancelReason::Interrupted));

        let mut input = Scripted::new(vec![Ok(Reply::Line("short".into())), Ok(Reply::Interrupted)]);
        assert_eq!(run(&mut input), PromptState::Cancelled(CancelReason::Interrupted));
    }

    #[test]
    fn read_failure_cancels() {
        let mut input = Scripted::new(vec![Err(io::Error::other("tty gone"))]);
        assert_eq!(run(&mut input), PromptState::Cancelled(CancelReason::InputError));
    }

    #[test]
    fn unusual_key_is_still_accepted() {
        let mut input = Scripted::lines(&["key.with.dots.and.more.chars"]);
        let key = prompt(&mut input).unwrap();
        assert!(key.has_unusual_chars());
    }
}
