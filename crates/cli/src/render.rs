//! Plain-text rendering of turns and result tables for the terminal.

use std::fmt::Write as _;

use serde_json::Value;
use sqlchat_core::{AssistantTurn, Conversation, QueryResult, Turn};
use sqlchat_core::constants::NO_RESULTS_MESSAGE;
use sqlchat_service::ServiceError;

/// Widest a single cell may render before it is cut.
const MAX_CELL_WIDTH: usize = 60;

fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => "NULL".to_owned(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn clip(text: &str) -> String {
    if text.chars().count() <= MAX_CELL_WIDTH {
        return text.to_owned();
    }
    let cut: String = text.chars().take(MAX_CELL_WIDTH.saturating_sub(3)).collect();
    format!("{cut}...")
}

/// Renders rows as a left-aligned table with a header separator.
#[must_use]
pub(crate) fn table(result: &QueryResult) -> String {
    let mut grid: Vec<Vec<String>> = Vec::with_capacity(result.rows.len() + 1);
    grid.push(result.columns.iter().map(|c| clip(c)).collect());
    for row in &result.rows {
        grid.push(
            result
                .columns
                .iter()
                .map(|c| clip(&row.get(c).map_or_else(String::new, cell_text)))
                .collect(),
        );
    }

    let mut widths = vec![0_usize; result.columns.len()];
    for line in &grid {
        for (width, cell) in widths.iter_mut().zip(line) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    for (idx, line) in grid.iter().enumerate() {
        let cells: Vec<String> =
            line.iter().zip(&widths).map(|(cell, width)| format!("{cell:<width$}")).collect();
        let _ = writeln!(out, "{}", cells.join(" | ").trim_end());
        if idx == 0 {
            let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
            let _ = writeln!(out, "{}", rule.join("-+-"));
        }
    }
    out
}

/// Renders one assistant turn the way the chat loop prints it.
#[must_use]
pub(crate) fn assistant_turn(turn: &AssistantTurn) -> String {
    let mut out = String::new();
    if let Some(sql) = &turn.sql {
        let _ = writeln!(out, "Generated SQL:\n{sql}\n");
    }
    match &turn.results {
        Some(results) if !results.is_empty() => {
            let _ = writeln!(out, "Results:\n{}", table(results));
        },
        _ => {
            let _ = writeln!(out, "{NO_RESULTS_MESSAGE}");
        },
    }
    if let Some(insights) = &turn.insights {
        let _ = writeln!(out, "Insights:\n{insights}");
    }
    out
}

/// Renders a failed turn. Shows the SQL when the database rejected it.
#[must_use]
pub(crate) fn error(err: &ServiceError) -> String {
    match err.sql() {
        Some(sql) => format!("Generated SQL:\n{sql}\n\nError: {err}\n"),
        None => format!("Error: {err}\n"),
    }
}

/// Reprints the whole conversation.
#[must_use]
pub(crate) fn history(conversation: &Conversation) -> String {
    if conversation.is_empty() {
        return "No conversation yet.\n".to_owned();
    }
    let mut out = String::new();
    for turn in conversation.turns() {
        match turn {
            Turn::User(user) => {
                let _ = writeln!(out, "You: {}\n", user.content);
            },
            Turn::Assistant(assistant) => {
                // The body already says when nothing was found.
                if assistant.results.as_ref().is_some_and(|r| !r.is_empty()) {
                    let _ = writeln!(out, "Assistant: {}", assistant.content);
                } else {
                    out.push_str("Assistant:\n");
                }
                out.push_str(&assistant_turn(assistant));
                out.push('\n');
            },
        }
    }
    out
}
