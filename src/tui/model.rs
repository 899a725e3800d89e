//! TUI model types for testable state management
//!
//! This module separates state (AppState) from the view, enabling
//! comprehensive unit testing without the iocraft framework. Keyboard
//! events become `Action`s, `reduce_app_state` applies them as pure
//! state transitions, and anything that needs the API is expressed as
//! a request the view dispatches to an async handler.

use iocraft::prelude::{KeyCode, KeyModifiers};

use crate::api::TicketFilter;
use crate::collection::TicketCollection;
use crate::types::{
    Category, Classification, MAX_TITLE_LEN, Priority, Ticket, TicketDraft, TicketStats,
    TicketStatus,
};

// ============================================================================
// State Types
// ============================================================================

/// Message shown when a submission never reaches the server
pub const SUBMIT_NETWORK_ERROR: &str = "Network error. Check your connection and try again.";

/// Which part of the screen receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The ticket list
    #[default]
    List,
    /// The search box
    Search,
    /// The category filter selector
    FilterCategory,
    /// The priority filter selector
    FilterPriority,
    /// The status filter selector
    FilterStatus,
    /// The title field of the submission form
    FormTitle,
    /// The description field of the submission form
    FormDescription,
    /// The category selector of the submission form
    FormCategory,
    /// The priority selector of the submission form
    FormPriority,
}

impl Focus {
    /// All focusable areas in tab order
    const ORDER: [Focus; 9] = [
        Focus::List,
        Focus::Search,
        Focus::FilterCategory,
        Focus::FilterPriority,
        Focus::FilterStatus,
        Focus::FormTitle,
        Focus::FormDescription,
        Focus::FormCategory,
        Focus::FormPriority,
    ];

    /// The next focus area in tab order (wrapping)
    pub fn next(self) -> Self {
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(idx + 1) % Self::ORDER.len()]
    }

    /// The previous focus area in tab order (wrapping)
    pub fn prev(self) -> Self {
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(idx + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    /// Whether this focus area belongs to the submission form
    pub fn is_form(self) -> bool {
        matches!(
            self,
            Focus::FormTitle | Focus::FormDescription | Focus::FormCategory | Focus::FormPriority
        )
    }
}

/// State of the new-ticket form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    /// Title being typed
    pub title: String,
    /// Description being typed
    pub description: String,
    /// Category for the new ticket
    pub category: Category,
    /// Priority for the new ticket
    pub priority: Priority,
    /// Whether the user picked the category by hand
    pub category_touched: bool,
    /// Whether the user picked the priority by hand
    pub priority_touched: bool,
    /// Whether a classification request is in flight
    pub classifying: bool,
    /// Whether a create request is in flight
    pub submitting: bool,
    /// Error from the last submission attempt, shown verbatim
    pub error: Option<String>,
}

impl FormState {
    /// Clear every field and flag back to the defaults
    pub fn reset(&mut self) {
        *self = FormState::default();
    }
}

/// Raw state that changes during user interaction
#[derive(Debug, Clone, Default)]
pub struct AppState {
    // Data
    /// Tickets currently shown in the list
    pub tickets: TicketCollection,
    /// Dashboard statistics from the server
    pub stats: Option<TicketStats>,

    // Filters
    /// Active list filter; rebuilt and re-sent whenever a field changes
    pub filter: TicketFilter,

    // Form
    /// New-ticket form
    pub form: FormState,

    // Navigation
    /// Which part of the screen has keyboard focus
    pub focus: Focus,
    /// Index of the selected ticket in the list
    pub selected_index: usize,
    /// Scroll offset for the ticket list
    pub scroll_offset: usize,

    // Loading/app state
    /// Whether the ticket list is currently being loaded
    pub loading: bool,
    /// Error from the last list fetch, if any
    pub load_error: Option<String>,
    /// Whether the application should exit
    pub should_exit: bool,
}

// ============================================================================
// Actions
// ============================================================================

/// All state transitions the browser can perform
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Focus
    FocusNext,
    FocusPrev,
    FocusSearch,
    FocusForm,
    FocusList,

    // List navigation
    MoveUp,
    MoveDown,

    // Text input (routed to search box or form text fields by focus)
    Input(char),
    Backspace,

    // Selector cycling (routed to filter or form selectors by focus)
    SelectPrev,
    SelectNext,

    // Submission
    Submit,
    SubmitFinished(Ticket),
    SubmitRejected(String),
    SubmitFailed,

    // Classification
    ClassifyStarted,
    ClassifyFinished(Classification),
    ClassifyFailed,

    // Fetching
    FetchStarted,
    FetchFinished(Vec<Ticket>),
    FetchFailed(String),
    StatsFinished(TicketStats),

    // Status transitions
    CycleStatus,
    StatusUpdated(Ticket),

    // Search
    SearchCancelled,

    // App
    Refresh,
    Quit,
}

// ============================================================================
// Reducer
// ============================================================================

/// Apply an action to the state (pure function)
///
/// `list_height` is the number of ticket rows currently visible, used to
/// keep the selection inside the scrolled window.
pub fn reduce_app_state(mut state: AppState, action: Action, list_height: usize) -> AppState {
    match action {
        // Focus
        Action::FocusNext => {
            state.focus = state.focus.next();
        }
        Action::FocusPrev => {
            state.focus = state.focus.prev();
        }
        Action::FocusSearch => {
            state.focus = Focus::Search;
        }
        Action::FocusForm => {
            state.focus = Focus::FormTitle;
        }
        Action::FocusList => {
            state.focus = Focus::List;
        }

        // List navigation
        Action::MoveUp => {
            state.selected_index = state.selected_index.saturating_sub(1);
            state.scroll_offset =
                adjust_scroll(state.scroll_offset, state.selected_index, list_height);
        }
        Action::MoveDown => {
            let count = state.tickets.len();
            if count > 0 && state.selected_index < count - 1 {
                state.selected_index += 1;
            }
            state.scroll_offset =
                adjust_scroll(state.scroll_offset, state.selected_index, list_height);
        }

        // Text input
        Action::Input(c) => match state.focus {
            Focus::Search => state.filter.search.push(c),
            Focus::FormTitle => {
                if state.form.title.chars().count() < MAX_TITLE_LEN {
                    state.form.title.push(c);
                }
            }
            Focus::FormDescription => state.form.description.push(c),
            _ => {}
        },
        Action::Backspace => match state.focus {
            Focus::Search => {
                state.filter.search.pop();
            }
            Focus::FormTitle => {
                state.form.title.pop();
            }
            Focus::FormDescription => {
                state.form.description.pop();
            }
            _ => {}
        },

        // Selector cycling
        Action::SelectPrev => apply_select(&mut state, false),
        Action::SelectNext => apply_select(&mut state, true),

        // Submission
        Action::Submit => {
            if !state.form.submitting {
                let draft = TicketDraft {
                    title: state.form.title.clone(),
                    description: state.form.description.clone(),
                    category: state.form.category,
                    priority: state.form.priority,
                };
                match draft.validate() {
                    Ok(()) => {
                        state.form.submitting = true;
                        state.form.error = None;
                    }
                    Err(e) => state.form.error = Some(e.to_string()),
                }
            }
        }
        Action::SubmitFinished(ticket) => {
            state.tickets.prepend(ticket);
            state.form.reset();
            state.selected_index = 0;
            state.scroll_offset = 0;
            state.focus = Focus::List;
        }
        Action::SubmitRejected(payload) => {
            // Server-side validation failure. The payload is shown verbatim
            // and the form keeps everything the user typed.
            state.form.submitting = false;
            state.form.error = Some(payload);
        }
        Action::SubmitFailed => {
            state.form.submitting = false;
            state.form.error = Some(SUBMIT_NETWORK_ERROR.to_string());
        }

        // Classification
        Action::ClassifyStarted => {
            state.form.classifying = true;
        }
        Action::ClassifyFinished(classification) => {
            state.form.classifying = false;
            // A suggestion only lands on fields the user has not picked
            // by hand, checked at the moment the response arrives.
            if let Some(category) = classification.suggested_category
                && !state.form.category_touched
            {
                state.form.category = category;
            }
            if let Some(priority) = classification.suggested_priority
                && !state.form.priority_touched
            {
                state.form.priority = priority;
            }
        }
        Action::ClassifyFailed => {
            state.form.classifying = false;
        }

        // Fetching
        Action::FetchStarted => {
            state.loading = true;
        }
        Action::FetchFinished(tickets) => {
            state.loading = false;
            state.load_error = None;
            state.tickets.replace_all(tickets);
            state.selected_index = if state.tickets.is_empty() {
                0
            } else {
                state.selected_index.min(state.tickets.len() - 1)
            };
            state.scroll_offset =
                adjust_scroll(state.scroll_offset, state.selected_index, list_height);
        }
        Action::FetchFailed(message) => {
            state.loading = false;
            state.load_error = Some(message);
        }
        Action::StatsFinished(stats) => {
            state.stats = Some(stats);
        }

        // Status transitions
        Action::CycleStatus => {
            // Requires async I/O, handled externally. The list only changes
            // once the server answers with the updated ticket.
        }
        Action::StatusUpdated(ticket) => {
            state.tickets.patch_by_id(ticket);
        }

        // Search
        Action::SearchCancelled => {
            state.filter.search.clear();
            state.focus = Focus::List;
        }

        // App
        Action::Refresh => {
            // The reload itself is dispatched externally
            state.loading = true;
        }
        Action::Quit => {
            state.should_exit = true;
        }
    }
    state
}

/// Route a selector action to whichever selector has focus
fn apply_select(state: &mut AppState, forward: bool) {
    match state.focus {
        Focus::FilterCategory => {
            state.filter.category = cycle_option(&Category::ALL, state.filter.category, forward);
        }
        Focus::FilterPriority => {
            state.filter.priority = cycle_option(&Priority::ALL, state.filter.priority, forward);
        }
        Focus::FilterStatus => {
            state.filter.status = cycle_option(&TicketStatus::ALL, state.filter.status, forward);
        }
        Focus::FormCategory => {
            state.form.category = cycle_value(&Category::ALL, state.form.category, forward);
            state.form.category_touched = true;
        }
        Focus::FormPriority => {
            state.form.priority = cycle_value(&Priority::ALL, state.form.priority, forward);
            state.form.priority_touched = true;
        }
        _ => {}
    }
}

// ============================================================================
// Derived Requests
// ============================================================================

/// Build the create request for the current form, if one should be sent
///
/// Returns `None` while a submission is already in flight or when the form
/// does not validate (the reducer surfaces the validation error instead).
pub fn submit_draft(state: &AppState) -> Option<TicketDraft> {
    if state.form.submitting {
        return None;
    }
    let draft = TicketDraft {
        title: state.form.title.clone(),
        description: state.form.description.clone(),
        category: state.form.category,
        priority: state.form.priority,
    };
    draft.validate().ok()?;
    Some(draft)
}

/// Description to classify when focus leaves the description field
///
/// Classification fires on blur with a non-empty description. The text is
/// read from the post-transition state, so a transition that already
/// cleared the form produces no request.
pub fn classify_request(prev: &AppState, next: &AppState) -> Option<String> {
    if prev.focus == Focus::FormDescription
        && next.focus != Focus::FormDescription
        && !next.form.description.trim().is_empty()
    {
        Some(next.form.description.clone())
    } else {
        None
    }
}

/// The status transition to request for the selected ticket
pub fn status_request(state: &AppState) -> Option<(u64, TicketStatus)> {
    let ticket = state.tickets.get(state.selected_index)?;
    Some((ticket.id, ticket.status.cycle()))
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Cycle an optional selector value through `None` and every entry in `all`
///
/// Forward goes `None` to the first entry, then through the list, then back
/// to `None`. Backward reverses that.
pub fn cycle_option<T: Copy + PartialEq>(
    all: &[T],
    current: Option<T>,
    forward: bool,
) -> Option<T> {
    match current {
        None => {
            if forward {
                all.first().copied()
            } else {
                all.last().copied()
            }
        }
        Some(value) => {
            let idx = all.iter().position(|v| *v == value).unwrap_or(0);
            if forward {
                if idx + 1 < all.len() {
                    Some(all[idx + 1])
                } else {
                    None
                }
            } else if idx > 0 {
                Some(all[idx - 1])
            } else {
                None
            }
        }
    }
}

/// Cycle a required selector value through every entry in `all`, wrapping
pub fn cycle_value<T: Copy + PartialEq>(all: &[T], current: T, forward: bool) -> T {
    let idx = all.iter().position(|v| *v == current).unwrap_or(0);
    let next = if forward {
        (idx + 1) % all.len()
    } else {
        (idx + all.len() - 1) % all.len()
    };
    all[next]
}

/// Adjust scroll offset to keep selected item visible
///
/// Returns the new scroll offset that ensures the selected index is visible
/// within the list height.
pub fn adjust_scroll(scroll_offset: usize, selected_index: usize, list_height: usize) -> usize {
    if list_height == 0 {
        return 0;
    }

    // If selected is above the visible area, scroll up
    if selected_index < scroll_offset {
        return selected_index;
    }

    // If selected is below the visible area, scroll down
    if selected_index >= scroll_offset + list_height {
        return selected_index.saturating_sub(list_height - 1);
    }

    // Selected is within visible area, keep scroll as is
    scroll_offset
}

/// Visible slice of the ticket list together with overflow counts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListWindow {
    /// First visible index
    pub start: usize,
    /// One past the last visible index
    pub end: usize,
    /// Number of tickets hidden above the window
    pub more_above: usize,
    /// Number of tickets hidden below the window
    pub more_below: usize,
}

/// Compute which slice of the list fits in `visible_height` rows
///
/// Overflow indicators each take a row of their own, so the slice shrinks
/// when they are shown.
pub fn compute_list_window(total: usize, scroll_offset: usize, visible_height: usize) -> ListWindow {
    let start = scroll_offset.min(total);
    let above_indicator_lines = if start > 0 { 1 } else { 0 };

    // Tentatively fill the remaining rows, then make room for the below
    // indicator if the list continues past them.
    let tentative_rows = visible_height.saturating_sub(above_indicator_lines);
    let tentative_end = (start + tentative_rows).min(total);
    let below_indicator_lines = if tentative_end < total { 1 } else { 0 };

    let available_rows =
        visible_height.saturating_sub(above_indicator_lines + below_indicator_lines);
    let end = (start + available_rows).min(total);

    ListWindow {
        start,
        end,
        more_above: start,
        more_below: total - end,
    }
}

// ============================================================================
// Key Mapping
// ============================================================================

/// Convert a key event to an Action (pure function)
///
/// Maps keyboard events to abstract actions, enabling unit testing of the
/// key handling logic without any iocraft dependencies. Dispatch depends on
/// which part of the screen has focus.
///
/// Returns `None` if the key doesn't map to any action.
pub fn key_to_action(code: KeyCode, modifiers: KeyModifiers, state: &AppState) -> Option<Action> {
    // Ctrl+C always quits
    if modifiers.contains(KeyModifiers::CONTROL) && code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    // Ctrl+S submits from anywhere inside the form
    if modifiers.contains(KeyModifiers::CONTROL)
        && code == KeyCode::Char('s')
        && state.focus.is_form()
    {
        return Some(Action::Submit);
    }

    match state.focus {
        Focus::List => list_key_to_action(code, modifiers),
        Focus::Search => search_key_to_action(code, modifiers),
        Focus::FormTitle | Focus::FormDescription => {
            form_text_key_to_action(code, modifiers, state.focus)
        }
        Focus::FilterCategory
        | Focus::FilterPriority
        | Focus::FilterStatus
        | Focus::FormCategory
        | Focus::FormPriority => select_key_to_action(code, modifiers),
    }
}

/// Convert a key event in list mode to an Action
fn list_key_to_action(code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
    match (code, modifiers) {
        // Navigation
        (KeyCode::Char('j') | KeyCode::Down, KeyModifiers::NONE) => Some(Action::MoveDown),
        (KeyCode::Char('k') | KeyCode::Up, KeyModifiers::NONE) => Some(Action::MoveUp),

        // Search and form
        (KeyCode::Char('/'), KeyModifiers::NONE) => Some(Action::FocusSearch),
        (KeyCode::Char('n'), KeyModifiers::NONE) => Some(Action::FocusForm),

        // Operations
        (KeyCode::Char('s'), KeyModifiers::NONE) => Some(Action::CycleStatus),
        (KeyCode::Char('r'), KeyModifiers::NONE) => Some(Action::Refresh),

        // Focus
        (KeyCode::Tab, KeyModifiers::NONE) => Some(Action::FocusNext),
        (KeyCode::BackTab, _) => Some(Action::FocusPrev),

        // App
        (KeyCode::Char('q'), KeyModifiers::NONE) => Some(Action::Quit),

        _ => None,
    }
}

/// Convert a key event in search mode to an Action
fn search_key_to_action(code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
    if modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    match code {
        // Escape clears the query and exits
        KeyCode::Esc => Some(Action::SearchCancelled),
        // Enter exits keeping the query
        KeyCode::Enter => Some(Action::FocusList),
        KeyCode::Tab => Some(Action::FocusNext),
        KeyCode::BackTab => Some(Action::FocusPrev),
        KeyCode::Backspace => Some(Action::Backspace),
        KeyCode::Char(c) => Some(Action::Input(c)),
        _ => None,
    }
}

/// Convert a key event in a form text field to an Action
fn form_text_key_to_action(code: KeyCode, modifiers: KeyModifiers, focus: Focus) -> Option<Action> {
    if modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    match code {
        KeyCode::Esc => Some(Action::FocusList),
        KeyCode::Tab => Some(Action::FocusNext),
        KeyCode::BackTab => Some(Action::FocusPrev),
        // Enter inserts a newline in the description, otherwise advances
        KeyCode::Enter => {
            if focus == Focus::FormDescription {
                Some(Action::Input('\n'))
            } else {
                Some(Action::FocusNext)
            }
        }
        KeyCode::Backspace => Some(Action::Backspace),
        KeyCode::Char(c) => Some(Action::Input(c)),
        _ => None,
    }
}

/// Convert a key event in a selector to an Action
fn select_key_to_action(code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
    match (code, modifiers) {
        (KeyCode::Left | KeyCode::Char('h'), KeyModifiers::NONE) => Some(Action::SelectPrev),
        (KeyCode::Right | KeyCode::Char('l'), KeyModifiers::NONE) => Some(Action::SelectNext),
        (KeyCode::Tab, KeyModifiers::NONE) => Some(Action::FocusNext),
        (KeyCode::BackTab, _) => Some(Action::FocusPrev),
        (KeyCode::Esc, KeyModifiers::NONE) => Some(Action::FocusList),
        _ => None,
    }
}

// ============================================================================
// Tests
// ============================================================================
