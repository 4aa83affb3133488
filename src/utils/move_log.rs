//! Move-log export.
//!
//! Writes the executed history as a small tagged text block: headers in
//! `[Key "Value"]` form followed by numbered move pairs in coordinate
//! notation, e.g. `1. e2-e4 e7-e5 2. g1-f3`.

use std::collections::BTreeMap;

use chrono::{Local, NaiveDate};

use crate::game_state::undo_state::MoveRecord;
use crate::utils::move_notation::move_notation;

/// Move log dated today.
pub fn write_move_log(history: &[MoveRecord]) -> String {
    write_move_log_dated(history, Local::now().date_naive())
}

pub fn write_move_log_dated(history: &[MoveRecord], date: NaiveDate) -> String {
    let mut headers = BTreeMap::<&str, String>::new();
    headers.insert("Event", "Casual Game".to_owned());
    headers.insert("Date", date.format("%Y.%m.%d").to_string());
    headers.insert("Moves", history.len().to_string());

    let mut out = String::new();
    for (key, value) in &headers {
        out.push_str(&format!("[{key} \"{value}\"]\n"));
    }
    out.push('\n');
    out.push_str(&movetext(history));
    out.push('\n');
    out
}

/// Numbered move pairs, one number per two plies.
pub fn movetext(history: &[MoveRecord]) -> String {
    let mut parts = Vec::<String>::with_capacity(history.len());
    for (ply, record) in history.iter().enumerate() {
        let notation = move_notation(record);
        if ply % 2 == 0 {
            parts.push(format!("{}. {}", (ply / 2) + 1, notation));
        } else {
            parts.push(notation);
        }
    }
    parts.join(" ")
}
