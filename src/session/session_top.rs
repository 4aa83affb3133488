//! Text front end and UI-side session state.
//!
//! `ChessSession` plays the role of the rendering collaborator: it owns one
//! `GameState`, tracks the current selection, only executes destinations
//! the selection offered, and notifies observers after each change.

use std::io::{self, BufRead, Write};
use log::{info, warn};

use crate::config::SessionConfig;
use crate::errors::{ChessErrors, ChessResult};
use crate::game_state::{chess_types::*, game_state::GameState, undo_state::MoveRecord};
use crate::move_generation::legal_move_apply::execute_move;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_undo::undo_move_with_policy;
use crate::move_generation::move_generator::GeneratedMove;
use crate::session::board_observer::{BoardChange, BoardObserver};
use crate::session::selection::Selection;
use crate::utils::algebraic::algebraic_to_square;
use crate::utils::move_log::{movetext, write_move_log};
use crate::utils::move_notation::move_notation;
use crate::utils::render_game_state::render_game_state;

pub fn run_stdio_loop(config: SessionConfig) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut session = ChessSession::new(config);

    for line in stdin.lock().lines() {
        let line = line?;
        let should_quit = session.handle_command(&line, &mut stdout)?;
        stdout.flush()?;
        if should_quit {
            break;
        }
    }

    Ok(())
}

pub struct ChessSession {
    game_state: GameState,
    selection: Selection,
    config: SessionConfig,
    observers: Vec<Box<dyn BoardObserver>>,
}

impl Default for ChessSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl ChessSession {
    pub fn new(config: SessionConfig) -> Self {
        info!("new session ({config:?})");
        Self {
            game_state: GameState::new_game(),
            selection: Selection::default(),
            config,
            observers: Vec::new(),
        }
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn add_observer(&mut self, observer: Box<dyn BoardObserver>) {
        self.observers.push(observer);
    }

    pub fn set_option(&mut self, name: &str, value: &str) -> ChessResult<()> {
        self.config.set_option(name, value)?;
        self.selection.clear();
        info!("option {name} set to {value}");
        Ok(())
    }

    /// Select `square` and return the destinations to highlight.
    pub fn select(&mut self, square: Square) -> &[GeneratedMove] {
        let generator = self.config.legality.generator();
        self.selection.select(generator, &self.game_state, square)
    }

    /// Execute `to` for the currently selected square.
    pub fn confirm(&mut self, to: Square) -> ChessResult<MoveRecord> {
        let Some(from) = self.selection.square() else {
            return Err(ChessErrors::NothingSelected { to });
        };
        if !self.selection.offers(from, to) {
            warn!("{from}-{to} was not offered by the selection");
            return Err(ChessErrors::MoveNotSelected { from, to });
        }

        let record = execute_move(&mut self.game_state, from, to)?;
        self.selection.clear();
        self.notify(BoardChange::Executed(record));
        Ok(record)
    }

    /// Select `from` and confirm `to` in one step.
    pub fn play(&mut self, from: Square, to: Square) -> ChessResult<MoveRecord> {
        self.select(from);
        self.confirm(to)
    }

    pub fn undo(&mut self) -> Option<MoveRecord> {
        self.selection.clear();
        let record = undo_move_with_policy(&mut self.game_state, self.config.undo_policy)?;
        self.notify(BoardChange::Undone(record));
        Some(record)
    }

    pub fn reset(&mut self) {
        self.selection.clear();
        self.game_state.reset();
        self.notify(BoardChange::Reset);
    }

    pub fn load_position(&mut self, position: &str) -> ChessResult<()> {
        self.game_state = GameState::from_position(position)?;
        self.selection.clear();
        self.notify(BoardChange::Loaded);
        Ok(())
    }

    fn notify(&mut self, change: BoardChange) {
        for observer in &mut self.observers {
            observer.on_change(&self.game_state, &change);
        }
    }

    /// Handle one command line. Returns `Ok(true)` on `quit`.
    ///
    /// Command failures are reported on `out` and do not end the loop; a
    /// failed write to `out` does.
    pub fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        let mut parts = trimmed.split_whitespace();
        let cmd = parts.next().unwrap_or_default();
        let args: Vec<&str> = parts.collect();

        let result = match cmd {
            "quit" | "exit" => return Ok(true),
            "help" => Ok("commands: board, select <sq>, move <from> <to>, undo, reset, history, log, \
                 position, setposition <placement> [castling], attacked <sq> <white|black>, \
                 setoption <name> <value>, options, quit\n"
                .to_owned()),
            "board" => Ok(format!("{}\n", render_game_state(&self.game_state))),
            "select" => self.handle_select(&args),
            "move" => self.handle_move(&args),
            "undo" => Ok(match self.undo() {
                Some(record) => format!("undone {}\n", move_notation(&record)),
                None => "nothing to undo\n".to_owned(),
            }),
            "reset" => {
                self.reset();
                Ok("ok\n".to_owned())
            }
            "history" => Ok(format!("{}\n", movetext(self.game_state.history()))),
            "log" => Ok(write_move_log(self.game_state.history())),
            "position" => Ok(format!("{}\n", self.game_state.get_position())),
            "setposition" => self
                .load_position(&args.join(" "))
                .map(|()| "ok\n".to_owned()),
            "attacked" => self.handle_attacked(&args),
            "setoption" => self.handle_setoption(&args),
            "options" => Ok(self
                .config
                .describe()
                .iter()
                .map(|line| format!("{line}\n"))
                .collect()),
            _ => Err(ChessErrors::UnknownCommand(cmd.to_owned())),
        };

        match result {
            Ok(text) => write!(out, "{text}")?,
            Err(err) => {
                warn!("command '{trimmed}' failed: {err}");
                writeln!(out, "error: {err}")?;
            }
        }

        Ok(false)
    }

    fn handle_select(&mut self, args: &[&str]) -> ChessResult<String> {
        let square = single_square(args)?;
        self.select(square);
        let listed: Vec<String> = self
            .selection
            .destinations()
            .iter()
            .map(|mv| {
                if mv.is_capture {
                    format!("x{}", mv.to)
                } else {
                    mv.to.to_string()
                }
            })
            .collect();
        Ok(format!("{square}: {}\n", listed.join(" ")))
    }

    fn handle_move(&mut self, args: &[&str]) -> ChessResult<String> {
        let (from, to) = match args {
            [both] if both.len() == 4 && both.is_ascii() => {
                (algebraic_to_square(&both[0..2])?, algebraic_to_square(&both[2..4])?)
            }
            [from, to] => (algebraic_to_square(from)?, algebraic_to_square(to)?),
            _ => return Err(ChessErrors::InvalidAlgebraicString(args.join(" "))),
        };
        let record = self.play(from, to)?;
        Ok(format!("{}\n", move_notation(&record)))
    }

    fn handle_attacked(&self, args: &[&str]) -> ChessResult<String> {
        let [square, color] = args else {
            return Err(ChessErrors::InvalidAlgebraicString(args.join(" ")));
        };
        let square = algebraic_to_square(square)?;
        let color = match color.to_ascii_lowercase().as_str() {
            "white" | "w" => Color::White,
            "black" | "b" => Color::Black,
            _ => {
                return Err(ChessErrors::InvalidOptionValue {
                    name: "color".to_owned(),
                    value: (*color).to_owned(),
                })
            }
        };
        Ok(format!("{}\n", is_square_attacked(&self.game_state, square, color)))
    }

    fn handle_setoption(&mut self, args: &[&str]) -> ChessResult<String> {
        // Short form: `setoption <name> <value>`.
        if let [name, value] = args {
            if *name != "name" {
                self.set_option(name, value)?;
                return Ok("ok\n".to_owned());
            }
        }

        let mut name_tokens = Vec::<&str>::new();
        let mut value_tokens = Vec::<&str>::new();
        let mut mode = "";

        for &tok in args {
            match tok {
                "name" => mode = "name",
                "value" => mode = "value",
                _ if mode == "name" => name_tokens.push(tok),
                _ if mode == "value" => value_tokens.push(tok),
                _ => {}
            }
        }

        self.set_option(&name_tokens.join(" "), &value_tokens.join(" "))?;
        Ok("ok\n".to_owned())
    }
}

fn single_square(args: &[&str]) -> ChessResult<Square> {
    match args {
        [square] => algebraic_to_square(square),
        _ => Err(ChessErrors::InvalidAlgebraicString(args.join(" "))),
    }
}
