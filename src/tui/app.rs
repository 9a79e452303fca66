use crossterm::event::KeyCode;
use ratatui::Frame;

use super::entry_states::IngredientCount;
use crate::models::api::Report;
use crate::models::{Guests, ManualEntry, ManualForm, Variant};

pub enum AppAction {
    Continue, // Keep running
    Done,     // Report viewed, leave
    Cancel,   // Esc pressed
}

/// What the final "generate" step produced
pub enum EntryOutcome {
    Generated(Report),
    /// Every name was blank, nothing to scale
    Empty,
    Failed(String),
}

pub struct EntryApp {
    state: Box<dyn EntryState>,
    context: EntryContext,
}

pub struct EntryContext {
    pub form: ManualForm,
    pub current: usize, // index of the record being entered
    pub guests: Option<Guests>,
    pub outcome: Option<EntryOutcome>,
    pub default_count: usize,
    pub default_guests: Guests,
    pub finished: bool,
}

impl EntryContext {
    pub fn new(variant: Variant, default_count: usize, default_guests: Guests) -> Self {
        Self {
            form: ManualForm {
                variant,
                entries: Vec::new(),
            },
            current: 0,
            guests: None,
            outcome: None,
            default_count,
            default_guests,
            finished: false,
        }
    }

    pub fn current_entry_mut(&mut self) -> Option<&mut ManualEntry> {
        self.form.entries.get_mut(self.current)
    }

    pub fn current_name(&self) -> &str {
        self.form
            .entries
            .get(self.current)
            .map(|entry| entry.name.as_str())
            .unwrap_or_default()
    }
}

pub(crate) trait EntryState {
    fn render(&self, context: &EntryContext, frame: &mut Frame);
    fn handle_key(&mut self, key: KeyCode, context: &mut EntryContext)
    -> Option<Box<dyn EntryState>>;
}

impl EntryApp {
    pub fn new(variant: Variant, default_count: usize, default_guests: Guests) -> Self {
        Self {
            state: Box::new(IngredientCount::new()),
            context: EntryContext::new(variant, default_count, default_guests),
        }
    }

    pub fn render(&self, frame: &mut Frame) {
        self.state.render(&self.context, frame);
    }

    pub fn handle_key(&mut self, key: KeyCode) -> AppAction {
        // global exit behavior
        if key == KeyCode::Esc {
            return AppAction::Cancel;
        }

        if let Some(next_state) = self.state.handle_key(key, &mut self.context) {
            self.state = next_state
        }

        if self.context.finished {
            AppAction::Done
        } else {
            AppAction::Continue
        }
    }

    pub fn context(&self) -> &EntryContext {
        &self.context
    }

    /// Consume the app and return the entry context
    pub fn into_context(self) -> EntryContext {
        self.context
    }
}
