use ratatui::style::Color;

pub const FOCUSED_BORDER: Color = Color::Cyan;
pub const UNFOCUSED_BORDER: Color = Color::White;
pub const SELECTED_BG: Color = Color::Blue;

pub const TITLE_TEXT: Color = Color::Magenta;
pub const CHECK_MARK: Color = Color::Green;
pub const DONE_TEXT: Color = Color::DarkGray;
pub const NORMAL_TEXT: Color = Color::White;
pub const LABEL_TEXT: Color = Color::DarkGray;
pub const HIGHLIGHT_TEXT: Color = Color::Yellow;

pub const STAT_TOTAL: Color = Color::Cyan;
pub const STAT_COMPLETED: Color = Color::Green;
pub const STAT_PENDING: Color = Color::Yellow;
