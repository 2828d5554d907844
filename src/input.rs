//! Player input: single-letter commands and four-field move entry.
//!
//! A move is typed one number at a time (source section, source pile,
//! destination section, destination pile). A command letter is only
//! accepted in place of the first number.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MoveError;
use crate::moves::MoveRequest;

/// The single-letter commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// `O`: turn over the next stock card.
    Open,
    /// `R`: turn the whole stock face-down for another pass.
    Flush,
    /// `H`: ask for a hint.
    Hint,
    /// `C`: cancel the last action.
    Undo,
}

impl Command {
    pub const ALL: [Command; 4] = [Command::Open, Command::Flush, Command::Hint, Command::Undo];

    pub fn letter(self) -> char {
        match self {
            Command::Open => 'O',
            Command::Flush => 'R',
            Command::Hint => 'H',
            Command::Undo => 'C',
        }
    }
}

impl FromStr for Command {
    type Err = MoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let (Some(c), None) = (chars.next(), chars.next()) else {
            return Err(MoveError::InvalidCommand);
        };
        let c = c.to_ascii_uppercase();
        Command::ALL
            .iter()
            .copied()
            .find(|cmd| cmd.letter() == c)
            .ok_or(MoveError::InvalidCommand)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// One complete thing the player asked for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input {
    Command(Command),
    Move(MoveRequest),
}

/// Which field of a move is expected next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Prompt {
    SectionFrom,
    SlotFrom,
    SectionTo,
    SlotTo,
}

impl Prompt {
    const ORDER: [Prompt; 4] = [
        Prompt::SectionFrom,
        Prompt::SlotFrom,
        Prompt::SectionTo,
        Prompt::SlotTo,
    ];

    pub fn text(self) -> &'static str {
        match self {
            Prompt::SectionFrom => "Section to take from (1 stock, 2 columns, 3 foundations): ",
            Prompt::SlotFrom => "Pile number to take from: ",
            Prompt::SectionTo => "Section to put on: ",
            Prompt::SlotTo => "Pile number to put on: ",
        }
    }
}

/// Progress of a move being typed in.
#[derive(Clone, Debug, Default)]
pub struct MoveEntry {
    fields: Vec<i64>,
}

/// What happened after feeding one token to a `MoveEntry`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryStep {
    /// More fields are needed; ask with this prompt.
    Pending(Prompt),
    /// The input is complete.
    Ready(Input),
}

impl MoveEntry {
    pub fn new() -> Self {
        MoveEntry::default()
    }

    /// The prompt for the next field.
    pub fn prompt(&self) -> Prompt {
        Prompt::ORDER[self.fields.len()]
    }

    /// Drop any half-typed move and start again from the first field.
    pub fn reset(&mut self) {
        self.fields.clear();
    }

    /// Feed one token.
    ///
    /// Numbers fill the next field. A letter is a command, but only as the
    /// first field. Anything else, or a letter halfway through a move,
    /// throws away what was typed and fails with `InvalidCommand`.
    pub fn feed(&mut self, token: &str) -> Result<EntryStep, MoveError> {
        let token = token.trim();

        if let Ok(n) = token.parse::<i64>() {
            self.fields.push(n);
            if let [section_from, slot_from, section_to, slot_to] = self.fields[..] {
                self.reset();
                let request = MoveRequest::new(section_from, slot_from, section_to, slot_to);
                return Ok(EntryStep::Ready(Input::Move(request)));
            }
            return Ok(EntryStep::Pending(self.prompt()));
        }

        if !self.fields.is_empty() {
            self.reset();
            return Err(MoveError::InvalidCommand);
        }
        let cmd = token.parse::<Command>()?;
        Ok(EntryStep::Ready(Input::Command(cmd)))
    }
}
