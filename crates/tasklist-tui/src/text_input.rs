use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tasklist_core::InputState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextInputAction {
    /// Key ignored or only moved the cursor
    None,
    /// Buffer contents changed
    Changed,
    Confirm,
    Cancel,
}

/// Apply a key press to a single-line input. Enter always confirms; the
/// caller decides what a blank line means.
pub fn handle_text_input(input: &mut InputState, key: KeyEvent) -> TextInputAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('w') | KeyCode::Backspace => edit(input, InputState::delete_word_back),
            KeyCode::Char('a') => {
                input.move_home();
                TextInputAction::None
            }
            KeyCode::Char('e') => {
                input.move_end();
                TextInputAction::None
            }
            _ => TextInputAction::None,
        };
    }

    match key.code {
        KeyCode::Esc => TextInputAction::Cancel,
        KeyCode::Enter => TextInputAction::Confirm,
        KeyCode::Char(c) => {
            input.insert_char(c);
            TextInputAction::Changed
        }
        KeyCode::Backspace => edit(input, InputState::backspace),
        KeyCode::Delete => edit(input, InputState::delete),
        KeyCode::Left => {
            input.move_left();
            TextInputAction::None
        }
        KeyCode::Right => {
            input.move_right();
            TextInputAction::None
        }
        KeyCode::Home => {
            input.move_home();
            TextInputAction::None
        }
        KeyCode::End => {
            input.move_end();
            TextInputAction::None
        }
        _ => TextInputAction::None,
    }
}

fn edit(input: &mut InputState, op: fn(&mut InputState)) -> TextInputAction {
    let before = input.as_str().len();
    op(input);
    if input.as_str().len() == before {
        TextInputAction::None
    } else {
        TextInputAction::Changed
    }
}
