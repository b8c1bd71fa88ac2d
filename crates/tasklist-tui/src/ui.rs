use crate::app::{App, Focus};
use crate::theme::*;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use tasklist_core::InputState;
use tasklist_domain::Task;

pub fn render(app: &App, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(frame.area());

    render_header(app, frame, chunks[0]);
    render_stats(app, frame, chunks[1]);
    render_input(app, frame, chunks[2]);
    render_tasks(app, frame, chunks[3]);
    render_footer(app, frame, chunks[4]);
}

fn render_header(app: &App, frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(vec![
            Span::styled("✓ ", check_mark()),
            Span::styled(app.config.effective_title(), title_text()),
        ]),
        Line::from(Span::styled(app.config.effective_subtitle(), label_text())),
    ];

    let header = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

fn render_stats(app: &App, frame: &mut Frame, area: Rect) {
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(inner);

    let stats = app.store.stats();
    let items = [
        (stats.total, "Total", stat_total()),
        (stats.completed, "Completed", stat_completed()),
        (stats.pending, "Pending", stat_pending()),
    ];

    for ((value, label, style), column) in items.into_iter().zip(columns.iter()) {
        let cell = Paragraph::new(vec![
            Line::from(Span::styled(value.to_string(), style)),
            Line::from(Span::styled(label, label_text())),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(cell, *column);
    }
}

fn render_input(app: &App, frame: &mut Frame, area: Rect) {
    let focused = app.focus == Focus::Input && !app.store.is_editing();
    let block = Block::default()
        .title(" New task ")
        .borders(Borders::ALL)
        .border_style(border(focused));

    let line = if app.input.is_empty() {
        Line::from(Span::styled(app.config.effective_placeholder(), label_text()))
    } else {
        Line::from(Span::styled(app.input.as_str(), normal_text()))
    };

    let inner = block.inner(area);
    frame.render_widget(Paragraph::new(line).block(block), area);

    if focused {
        let x = inner.x + (app.input.cursor_column() as u16).min(inner.width.saturating_sub(1));
        frame.set_cursor_position((x, inner.y));
    }
}

fn render_tasks(app: &App, frame: &mut Frame, area: Rect) {
    let focused = app.focus == Focus::List || app.store.is_editing();
    let block = Block::default()
        .title(" Tasks ")
        .borders(Borders::ALL)
        .border_style(border(focused));

    if app.store.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from("📝"),
            Line::from(Span::styled(app.config.effective_empty_text(), normal_text())),
            Line::from(Span::styled(
                app.config.effective_empty_subtext(),
                label_text(),
            )),
        ])
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = app
        .store
        .tasks()
        .iter()
        .map(|task| {
            if app.store.is_editing_task(task.id) {
                ListItem::new(edit_line(&app.draft))
            } else {
                ListItem::new(task_line(task))
            }
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(selected_item(focused));

    let mut state = ListState::default().with_selected(app.selection.get());
    frame.render_stateful_widget(list, area, &mut state);
}

fn task_line(task: &Task) -> Line<'_> {
    if task.completed {
        Line::from(vec![
            Span::styled("[", label_text()),
            Span::styled("✓", check_mark()),
            Span::styled("] ", label_text()),
            Span::styled(task.text.as_str(), done_text()),
        ])
    } else {
        Line::from(vec![
            Span::styled("[ ] ", label_text()),
            Span::styled(task.text.as_str(), normal_text()),
        ])
    }
}

/// Draft with the character under the cursor drawn in reverse video.
fn edit_line(draft: &InputState) -> Line<'_> {
    let text = draft.as_str();
    let (before, rest) = text.split_at(draft.cursor_pos());
    let mut chars = rest.chars();
    let under_cursor = chars.next().map(String::from).unwrap_or_else(|| " ".to_string());
    let after = chars.as_str();

    Line::from(vec![
        Span::styled("✎ ", highlight_text()),
        Span::styled(before, highlight_text()),
        Span::styled(under_cursor, text_cursor()),
        Span::styled(after, highlight_text()),
    ])
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let help_text = if app.store.is_editing() {
        "ENTER: save | ESC: cancel | ctrl-c: quit"
    } else {
        match app.focus {
            Focus::Input => "ENTER: add task | ESC: clear | TAB: tasks | ctrl-c: quit",
            Focus::List => {
                "j/k: navigate | SPACE: toggle | e: edit | d: delete | TAB: new task | q: quit"
            }
        }
    };

    let footer = Paragraph::new(Span::styled(help_text, label_text()))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}
