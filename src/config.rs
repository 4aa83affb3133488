//! Session configuration.
//!
//! Defaults are pseudo-legal move generation and an undo that leaves
//! castling rights alone. Both can be changed from the environment at
//! startup or with `setoption` at runtime.

use std::str::FromStr;

use log::warn;

use crate::errors::{ChessErrors, ChessResult};
use crate::move_generation::legal_move_generator::{LegalMoveGenerator, PseudoLegalMoveGenerator};
use crate::move_generation::legal_move_undo::UndoPolicy;
use crate::move_generation::move_generator::MoveGenerator;

pub const LEGALITY_ENV: &str = "BOARD_LEGALITY";
pub const UNDO_POLICY_ENV: &str = "BOARD_UNDO_POLICY";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LegalityMode {
    /// Movement rules only, castling gated by attacks.
    #[default]
    PseudoLegal,
    /// Also drop moves that leave the mover's own king attacked.
    Strict,
}

impl LegalityMode {
    pub fn generator(self) -> &'static dyn MoveGenerator {
        match self {
            LegalityMode::PseudoLegal => &PseudoLegalMoveGenerator,
            LegalityMode::Strict => &LegalMoveGenerator,
        }
    }
}

impl FromStr for LegalityMode {
    type Err = ChessErrors;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pseudo" | "pseudolegal" | "pseudo-legal" => Ok(LegalityMode::PseudoLegal),
            "strict" | "legal" => Ok(LegalityMode::Strict),
            _ => Err(invalid_value("Legality", s)),
        }
    }
}

fn parse_undo_policy(value: &str) -> ChessResult<UndoPolicy> {
    match value.to_ascii_lowercase().as_str() {
        "keep" => Ok(UndoPolicy::KeepCastlingRights),
        "restore" => Ok(UndoPolicy::RestoreCastlingRights),
        _ => Err(invalid_value("UndoPolicy", value)),
    }
}

fn invalid_value(name: &str, value: &str) -> ChessErrors {
    ChessErrors::InvalidOptionValue {
        name: name.to_owned(),
        value: value.to_owned(),
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionConfig {
    pub legality: LegalityMode,
    pub undo_policy: UndoPolicy,
}

impl SessionConfig {
    /// Read `BOARD_LEGALITY` and `BOARD_UNDO_POLICY`; bad values fall back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        for (env_key, option) in [(LEGALITY_ENV, "Legality"), (UNDO_POLICY_ENV, "UndoPolicy")] {
            if let Some(value) = lookup(env_key) {
                if let Err(err) = config.set_option(option, &value) {
                    warn!("ignoring {env_key}: {err}");
                }
            }
        }
        config
    }

    pub fn set_option(&mut self, name: &str, value: &str) -> ChessResult<()> {
        if name.eq_ignore_ascii_case("Legality") {
            self.legality = value.parse()?;
        } else if name.eq_ignore_ascii_case("UndoPolicy") {
            self.undo_policy = parse_undo_policy(value)?;
        } else {
            return Err(ChessErrors::UnknownOption(name.to_owned()));
        }
        Ok(())
    }

    /// One `option` line per setting, for the `options` command.
    pub fn describe(&self) -> Vec<String> {
        let legality = match self.legality {
            LegalityMode::PseudoLegal => "pseudo",
            LegalityMode::Strict => "strict",
        };
        let undo = match self.undo_policy {
            UndoPolicy::KeepCastlingRights => "keep",
            UndoPolicy::RestoreCastlingRights => "restore",
        };
        vec![
            format!("option name Legality type combo default pseudo var pseudo var strict value {legality}"),
            format!("option name UndoPolicy type combo default keep var keep var restore value {undo}"),
        ]
    }
}
