//! A console that replays a fixed list of answers.

use std::collections::VecDeque;

use super::{parse_choice, Console, ConsoleError};
use crate::events::Event;

/// Replays answers in order and records every event shown.
///
/// Answers a bounded choice would reject are consumed and skipped, the same
/// way a player retypes at a terminal. Running out of answers reports
/// [`ConsoleError::Closed`].
#[derive(Debug, Clone, Default)]
pub struct ScriptedConsole {
    answers: VecDeque<String>,
    events: Vec<Event>,
    rejected: usize,
}

impl ScriptedConsole {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            events: Vec::new(),
            rejected: 0,
        }
    }

    /// Events shown so far.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Answers not consumed yet.
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    /// Answers skipped because a bounded choice rejected them.
    pub fn rejected(&self) -> usize {
        self.rejected
    }

    fn next_answer(&mut self) -> Result<String, ConsoleError> {
        self.answers.pop_front().ok_or(ConsoleError::Closed)
    }
}

impl Console for ScriptedConsole {
    fn choose(&mut self, _question: &str, options: &[u8]) -> Result<u8, ConsoleError> {
        loop {
            let answer = self.next_answer()?;
            match parse_choice(&answer, options) {
                Ok(choice) => return Ok(choice),
                Err(_) => self.rejected += 1,
            }
        }
    }

    fn read_line(&mut self, _prompt: &str) -> Result<String, ConsoleError> {
        self.next_answer()
    }

    fn show(&mut self, event: &Event) -> Result<(), ConsoleError> {
        self.events.push(event.clone());
        Ok(())
    }
}
