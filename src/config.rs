//! House rules that change how the move counter behaves.

use serde::{Deserialize, Serialize};

/// Rule switches for a game.
///
/// Missing fields fall back to the defaults, so a partial JSON object such
/// as `{"hint_costs_move": false}` is a valid config.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// A successful hint counts as a move.
    pub hint_costs_move: bool,
    /// An undo counts as a move. When false, undoing an action takes back
    /// the move it cost instead.
    pub undo_costs_move: bool,
}

impl Default for RulesConfig {
    fn default() -> Self {
        RulesConfig {
            hint_costs_move: true,
            undo_costs_move: true,
        }
    }
}

impl RulesConfig {
    /// Parse a config from JSON text.
    pub fn from_json_str(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }
}
