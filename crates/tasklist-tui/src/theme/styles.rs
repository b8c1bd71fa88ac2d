use super::colors::*;
use ratatui::style::{Modifier, Style};

pub fn focused_border() -> Style {
    Style::default().fg(FOCUSED_BORDER)
}

pub fn unfocused_border() -> Style {
    Style::default().fg(UNFOCUSED_BORDER)
}

pub fn border(focused: bool) -> Style {
    if focused {
        focused_border()
    } else {
        unfocused_border()
    }
}

pub fn selected_item(focused: bool) -> Style {
    if focused {
        Style::default().bg(SELECTED_BG)
    } else {
        Style::default().add_modifier(Modifier::REVERSED)
    }
}

pub fn title_text() -> Style {
    Style::default()
        .fg(TITLE_TEXT)
        .add_modifier(Modifier::BOLD)
}

pub fn check_mark() -> Style {
    Style::default()
        .fg(CHECK_MARK)
        .add_modifier(Modifier::BOLD)
}

pub fn done_text() -> Style {
    Style::default()
        .fg(DONE_TEXT)
        .add_modifier(Modifier::CROSSED_OUT)
}

pub fn normal_text() -> Style {
    Style::default().fg(NORMAL_TEXT)
}

pub fn label_text() -> Style {
    Style::default().fg(LABEL_TEXT)
}

pub fn highlight_text() -> Style {
    Style::default().fg(HIGHLIGHT_TEXT)
}

pub fn text_cursor() -> Style {
    Style::default()
        .fg(HIGHLIGHT_TEXT)
        .add_modifier(Modifier::REVERSED)
}

pub fn stat_value(color: ratatui::style::Color) -> Style {
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

pub fn stat_total() -> Style {
    stat_value(STAT_TOTAL)
}

pub fn stat_completed() -> Style {
    stat_value(STAT_COMPLETED)
}

pub fn stat_pending() -> Style {
    stat_value(STAT_PENDING)
}
