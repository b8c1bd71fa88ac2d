use crate::{
    events::{Event, EventHandler},
    selection::SelectionState,
    text_input::{handle_text_input, TextInputAction},
    ui,
};
use crossterm::{
    event::{KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tasklist_core::{AppConfig, InputState, TaskListResult};
use tasklist_domain::commands::{
    AddTask, CancelEdit, Command, DeleteTask, SaveEdit, StartEditing, ToggleTask, UpdateDraft,
};
use tasklist_domain::{TaskId, TaskListStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    List,
}

pub struct App {
    pub should_quit: bool,
    pub focus: Focus,
    /// Text of the task about to be added
    pub input: InputState,
    /// Local editing buffer mirrored into the store's draft on every change
    pub draft: InputState,
    pub store: TaskListStore,
    pub selection: SelectionState,
    pub config: AppConfig,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        Self {
            should_quit: false,
            focus: Focus::Input,
            input: InputState::new(),
            draft: InputState::new(),
            store: TaskListStore::new(),
            selection: SelectionState::new(),
            config,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn selected_task_id(&self) -> Option<TaskId> {
        self.selection
            .get()
            .and_then(|idx| self.store.tasks().get(idx))
            .map(|task| task.id)
    }

    /// Run a command against the store, logging what happened.
    pub fn execute(&mut self, command: Box<dyn Command>) -> bool {
        let description = command.description();
        tracing::debug!("Executing: {}", description);

        let applied = command.execute(&mut self.store);
        if !applied {
            tracing::debug!("Ignored: {}", description);
        }
        applied
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.quit();
            return;
        }

        if self.store.is_editing() {
            self.handle_edit_key(key);
            return;
        }

        match self.focus {
            Focus::Input => self.handle_input_key(key),
            Focus::List => self.handle_list_key(key),
        }
    }

    fn handle_input_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Tab {
            self.focus_list();
            return;
        }

        match handle_text_input(&mut self.input, key) {
            TextInputAction::Confirm => self.submit_new_task(),
            TextInputAction::Cancel => self.input.clear(),
            TextInputAction::Changed | TextInputAction::None => {}
        }
    }

    fn handle_edit_key(&mut self, key: KeyEvent) {
        match handle_text_input(&mut self.draft, key) {
            TextInputAction::Confirm => {
                if self.execute(Box::new(SaveEdit)) {
                    self.draft.clear();
                }
            }
            TextInputAction::Cancel => {
                self.execute(Box::new(CancelEdit));
                self.draft.clear();
            }
            TextInputAction::Changed => {
                let text = self.draft.as_str().to_string();
                self.execute(Box::new(UpdateDraft { text }));
            }
            TextInputAction::None => {}
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent) {
        let len = self.store.len();
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => self.quit(),
            KeyCode::Tab | KeyCode::Char('i') | KeyCode::Char('a') | KeyCode::Esc => {
                self.focus = Focus::Input;
            }
            KeyCode::Char('j') | KeyCode::Down => self.selection.next(len),
            KeyCode::Char('k') | KeyCode::Up => self.selection.prev(len),
            KeyCode::Char('g') | KeyCode::Home => self.selection.jump_to_first(len),
            KeyCode::Char('G') | KeyCode::End => self.selection.jump_to_last(len),
            KeyCode::Char(' ') | KeyCode::Char('x') => {
                if let Some(id) = self.selected_task_id() {
                    self.execute(Box::new(ToggleTask { id }));
                }
            }
            KeyCode::Char('e') | KeyCode::Enter => self.begin_edit_selected(),
            KeyCode::Char('d') | KeyCode::Delete => {
                if let Some(id) = self.selected_task_id() {
                    self.execute(Box::new(DeleteTask { id }));
                    self.selection.clamp(self.store.len());
                }
            }
            _ => {}
        }
    }

    fn submit_new_task(&mut self) {
        let text = self.input.as_str().to_string();
        // A rejected add leaves the line as typed
        if self.execute(Box::new(AddTask { text })) {
            self.input.clear();
            self.selection.jump_to_last(self.store.len());
        }
    }

    fn begin_edit_selected(&mut self) {
        let Some(id) = self.selected_task_id() else {
            return;
        };
        if self.execute(Box::new(StartEditing { id })) {
            let draft = self
                .store
                .edit_cursor()
                .map(|cursor| cursor.draft_text.clone())
                .unwrap_or_default();
            self.draft.set(draft);
        }
    }

    fn focus_list(&mut self) {
        self.focus = Focus::List;
        self.selection.auto_select_first_if_empty(!self.store.is_empty());
    }

    pub async fn run(&mut self) -> TaskListResult<()> {
        let mut terminal = setup_terminal()?;
        let result = self.event_loop(&mut terminal).await;
        restore_terminal(&mut terminal)?;
        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> TaskListResult<()> {
        let mut events = EventHandler::new();
        terminal.draw(|frame| ui::render(self, frame))?;

        while !self.should_quit {
            let Some(event) = events.next().await else {
                tracing::warn!("Event stream closed");
                break;
            };
            match event {
                Event::Key(key) => {
                    self.handle_key_event(key);
                    terminal.draw(|frame| ui::render(self, frame))?;
                }
                Event::Resize => {
                    terminal.draw(|frame| ui::render(self, frame))?;
                }
                Event::Tick => {}
            }
        }

        events.stop();
        Ok(())
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, io::Error> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<(), io::Error> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

impl Default for App {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
