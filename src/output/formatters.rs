//! Formatting utilities for terminal output

use crate::core::Board;

/// Stick figure pieces in the order they are drawn
pub const FIGURE_PARTS: [&str; 6] = [
    "head",
    "body",
    "left arm",
    "right arm",
    "left leg",
    "right leg",
];

/// Format the board with spaced, uppercase letters and `_` for hidden slots
#[must_use]
pub fn render_board(board: &Board) -> String {
    board
        .slots()
        .iter()
        .map(|slot| slot.map_or('_', |letter| char::from(letter).to_ascii_uppercase()))
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Draw the figure for `wrong` misses out of `max` allowed
///
/// Parts accumulate from one turn to the next. Limits other than six scale
/// the drawing so the last allowed miss always completes the figure.
#[must_use]
pub fn render_figure(wrong: usize, max: usize) -> String {
    let shown = if max == 0 {
        FIGURE_PARTS.len()
    } else {
        (wrong.min(max) * FIGURE_PARTS.len()).div_ceil(max)
    };

    let mut lines: Vec<String> = FIGURE_PARTS[..shown]
        .iter()
        .map(|part| format!("   [{part}]"))
        .collect();
    lines.push(format!("   {wrong}/{max} wrong"));
    lines.join("\n")
}

/// Format a list of letters as `A, B, C`
#[must_use]
pub fn letter_list(letters: &[u8]) -> String {
    letters
        .iter()
        .map(|&letter| char::from(letter).to_ascii_uppercase().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
