//! Application state management.

use bwtui_core::{
    DetailsState, FilterEngine, KeyBindings, Navigation, Notifier, Repository, VaultItem,
};
use std::fmt;

/// Application state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    /// Processing input.
    Running,
    /// Application should quit.
    Quit,
}

/// Which part of the screen receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The item list.
    List,
    /// The filter input line.
    Filter,
    /// The details overlay.
    Details,
}

/// Login field that can be copied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Username,
    Password,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Username => f.write_str("username"),
            Self::Password => f.write_str("password"),
        }
    }
}

/// Side effect requested by a key press, run by the event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Write `text` to the clipboard and report on the feedback line.
    Copy { field: Field, text: String },
}

/// Main application model.
pub struct App {
    /// Current application state.
    pub state: AppState,
    /// Current focus area.
    pub focus: Focus,
    /// Items loaded at startup.
    pub repository: Repository,
    /// Text typed into the filter input.
    pub filter_text: String,
    /// Filtered view derived from `filter_text`.
    pub filter: FilterEngine,
    /// Selection within the filtered view.
    pub navigation: Navigation,
    /// Details overlay.
    pub details: DetailsState,
    /// Transient message line.
    pub feedback: Notifier,
    /// Active key bindings.
    pub keys: KeyBindings,
}

impl App {
    /// Create a new application instance showing every item.
    pub fn new(repository: Repository, keys: KeyBindings, feedback: Notifier) -> Self {
        let filter = FilterEngine::new(repository.items());
        Self {
            state: AppState::Running,
            focus: Focus::List,
            repository,
            filter_text: String::new(),
            filter,
            navigation: Navigation::new(),
            details: DetailsState::new(),
            feedback,
            keys,
        }
    }

    /// Replace the filter text and recompute the view.
    pub fn set_filter_text(&mut self, text: impl Into<String>) {
        self.filter_text = text.into();
        self.refilter();
    }

    pub fn push_filter_char(&mut self, c: char) {
        self.filter_text.push(c);
        self.refilter();
    }

    pub fn pop_filter_char(&mut self) {
        if self.filter_text.pop().is_some() {
            self.refilter();
        }
    }

    /// Empty the filter and select the first item.
    pub fn clear_filter(&mut self) {
        self.set_filter_text(String::new());
        self.navigation.reset();
    }

    fn refilter(&mut self) {
        if self.filter.apply(self.repository.items(), &self.filter_text) {
            self.navigation.clamp(self.filter.len());
        }
    }

    /// Items in the current view, in order.
    pub fn visible_items(&self) -> impl Iterator<Item = &VaultItem> + '_ {
        self.filter
            .view()
            .iter()
            .filter_map(|&index| self.repository.get(index))
    }

    /// Position of the selection within the view.
    pub fn selected_index(&self) -> Option<usize> {
        self.navigation.selected(self.filter.len())
    }

    pub fn selected_item(&self) -> Option<&VaultItem> {
        let position = self.selected_index()?;
        let index = *self.filter.view().get(position)?;
        self.repository.get(index)
    }

    pub fn move_up(&mut self) {
        self.navigation.move_up(self.filter.len());
    }

    pub fn move_down(&mut self) {
        self.navigation.move_down(self.filter.len());
    }

    pub fn focus_filter(&mut self) {
        self.focus = Focus::Filter;
    }

    pub fn focus_list(&mut self) {
        self.focus = Focus::List;
    }

    /// Open the details overlay on the selected item, if any.
    pub fn open_details(&mut self) {
        let Some(item) = self.selected_item().cloned() else {
            return;
        };
        self.details.open(item);
        self.focus = Focus::Details;
    }

    pub fn toggle_reveal(&mut self) {
        self.details.toggle_reveal();
    }

    pub fn close_details(&mut self) {
        self.details.close();
        self.focus = Focus::List;
    }

    /// Build the copy effect for `field` of the selected item.
    ///
    /// `None` when nothing is selected or the item has no login.
    pub fn copy(&self, field: Field) -> Option<Effect> {
        let login = self.selected_item()?.login.as_ref()?;
        let text = match field {
            Field::Username => login.username.clone(),
            Field::Password => login.password.clone(),
        };
        Some(Effect::Copy { field, text })
    }

    pub fn quit(&mut self) {
        self.state = AppState::Quit;
    }
}
