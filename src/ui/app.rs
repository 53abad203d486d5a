//! Presentation state and key mapping

use chrono::{DateTime, Utc};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::debug;

use crate::state::{Action, TimerState};

/// Where typed characters go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Single-key commands
    Controls,
    /// Editing the current task text
    TaskInput,
}

/// UI-only state; nothing here is persisted
#[derive(Debug)]
pub struct App {
    focus: Focus,
    selected: Option<usize>,
    should_quit: bool,
}

impl App {
    pub fn new() -> Self {
        Self {
            focus: Focus::Controls,
            selected: None,
            should_quit: false,
        }
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Highlighted row of the task log
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Keep the selection inside a log of `len` entries
    pub fn sync_selection(&mut self, len: usize) {
        self.selected = match self.selected {
            _ if len == 0 => None,
            Some(i) if i >= len => Some(len - 1),
            other => other,
        };
    }

    /// Translate a key press into at most one action
    pub fn handle_key(
        &mut self,
        key: KeyEvent,
        state: &TimerState,
        now: DateTime<Utc>,
    ) -> Option<Action> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return None;
        }

        if state.edit_start_time {
            return self.handle_start_time_key(key, state);
        }

        match self.focus {
            Focus::TaskInput => self.handle_task_key(key, state),
            Focus::Controls => self.handle_control_key(key, state, now),
        }
    }

    fn handle_start_time_key(&mut self, key: KeyEvent, state: &TimerState) -> Option<Action> {
        let mut digits = state.start_time.to_string();
        match key.code {
            KeyCode::Enter | KeyCode::Esc => return Some(Action::ToggleEditStartTime),
            KeyCode::Char(c) if !is_chord(key.modifiers) => {
                if digits == "0" {
                    digits.clear();
                }
                digits.push(c);
            }
            KeyCode::Backspace => {
                digits.pop();
                if digits.is_empty() {
                    digits.push('0');
                }
            }
            _ => return None,
        }

        match Action::change_start_time(&digits) {
            Ok(action) => Some(action),
            Err(e) => {
                debug!("Ignoring start time input: {}", e);
                None
            }
        }
    }

    fn handle_task_key(&mut self, key: KeyEvent, state: &TimerState) -> Option<Action> {
        match key.code {
            KeyCode::Enter | KeyCode::Esc => {
                self.focus = Focus::Controls;
                None
            }
            KeyCode::Char(c) if !is_chord(key.modifiers) => {
                let mut task = state.task.clone();
                task.push(c);
                Some(Action::ChangeTask(task))
            }
            KeyCode::Backspace => {
                let mut task = state.task.clone();
                task.pop()?;
                Some(Action::ChangeTask(task))
            }
            _ => None,
        }
    }

    fn handle_control_key(
        &mut self,
        key: KeyEvent,
        state: &TimerState,
        now: DateTime<Utc>,
    ) -> Option<Action> {
        match key.code {
            KeyCode::Char(' ') => Some(Action::ToggleRunning),
            KeyCode::Char('r') => Some(Action::Reset),
            KeyCode::Char('d') => Some(Action::CompleteTask {
                time_end: now.timestamp_millis(),
            }),
            KeyCode::Char('e') => Some(Action::ToggleEditStartTime),
            KeyCode::Char('i') | KeyCode::Enter => {
                self.focus = Focus::TaskInput;
                None
            }
            KeyCode::Up => {
                self.selected = match self.selected {
                    Some(i) => Some(i.saturating_sub(1)),
                    None if !state.tasks.is_empty() => Some(state.tasks.len() - 1),
                    None => None,
                };
                None
            }
            KeyCode::Down => {
                self.selected = match self.selected {
                    Some(i) if i + 1 < state.tasks.len() => Some(i + 1),
                    Some(i) => Some(i),
                    None if !state.tasks.is_empty() => Some(0),
                    None => None,
                };
                None
            }
            KeyCode::Char('x') | KeyCode::Delete => self.selected.map(Action::RemoveTask),
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
                None
            }
            _ => None,
        }
    }
}

/// Ctrl/Alt/Super combinations are commands, not text
fn is_chord(modifiers: KeyModifiers) -> bool {
    modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER)
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
