//! Main ticket browser view component (`triage ui`)
//!
//! Provides an interactive TUI for browsing tickets, filtering the list,
//! and submitting new tickets with classification suggestions. All state
//! transitions go through the reducer in `model`; this component only
//! wires keyboard events to actions and actions to async handlers.

use iocraft::prelude::*;

use crate::api::TicketFilter;
use crate::tui::components::{
    FilterBar, Footer, FormPane, Header, ListPane, StatsBar, Toast, filter_shortcuts,
    form_shortcuts, list_shortcuts, render_toast, search_shortcuts,
};
use crate::tui::handlers::{
    create_classify_handler, create_fetch_handler, create_load_handler, create_search_handler,
    create_stats_handler, create_status_handler, create_submit_handler,
};
use crate::tui::model::{
    Action, AppState, Focus, classify_request, key_to_action, reduce_app_state, status_request,
    submit_draft,
};
use crate::tui::theme::theme;

/// Props for the TriageTui component
#[derive(Default, Props)]
pub struct TriageTuiProps {
    /// API base URL override from the command line
    pub api_url: Option<String>,
}

/// Main ticket browser component
///
/// Layout:
/// ```text
/// +---------------------------------------------+
/// | Header                                      |
/// | StatsBar                                    |
/// +------------------+--------------------------+
/// | FormPane         | FilterBar                |
/// |                  | ListPane                 |
/// |                  |                          |
/// +------------------+--------------------------+
/// | Footer                                      |
/// +---------------------------------------------+
/// ```
#[component]
pub fn TriageTui<'a>(props: &TriageTuiProps, mut hooks: Hooks) -> impl Into<AnyElement<'a>> {
    let theme = theme();
    let (width, height) = hooks.use_terminal_size();
    let mut system = hooks.use_context_mut::<SystemContext>();

    let state: State<AppState> = hooks.use_state(AppState::default);
    let toast: State<Option<Toast>> = hooks.use_state(|| None);
    let mut list_height_state: State<usize> = hooks.use_state(|| 0usize);

    // Rows left for ticket rows: header, stats bar, search line, filter
    // line, list border, and footer take seven.
    let list_height = (height as usize).saturating_sub(7);
    if list_height_state.get() != list_height {
        list_height_state.set(list_height);
    }

    // Async handlers
    let load_handler =
        create_load_handler(&mut hooks, &state, &list_height_state, &toast, &props.api_url);
    let fetch_handler =
        create_fetch_handler(&mut hooks, &state, &list_height_state, &toast, &props.api_url);
    let search_handler = create_search_handler(&mut hooks, &state, &fetch_handler);
    let stats_handler =
        create_stats_handler(&mut hooks, &state, &list_height_state, &props.api_url);
    let classify_handler =
        create_classify_handler(&mut hooks, &state, &list_height_state, &props.api_url);
    let submit_handler = create_submit_handler(
        &mut hooks,
        &state,
        &list_height_state,
        &toast,
        &stats_handler,
        &props.api_url,
    );
    let status_handler =
        create_status_handler(&mut hooks, &state, &list_height_state, &props.api_url);

    // Initial load is unfiltered
    let mut fetch_started = hooks.use_state(|| false);
    if !fetch_started.get() {
        fetch_started.set(true);
        load_handler(TicketFilter::default());
    }

    // Keyboard event handling
    hooks.use_terminal_events({
        let mut state = state;
        let load_handler = load_handler.clone();
        move |event| match event {
            TerminalEvent::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) if kind != KeyEventKind::Release => {
                let prev = state.read().clone();
                let Some(action) = key_to_action(code, modifiers, &prev) else {
                    return;
                };

                // Side effects that need the pre-transition state
                match &action {
                    Action::Submit => {
                        if let Some(draft) = submit_draft(&prev) {
                            submit_handler(draft);
                        }
                    }
                    Action::CycleStatus => {
                        if let Some(request) = status_request(&prev) {
                            status_handler(request);
                        }
                    }
                    Action::Refresh => {
                        load_handler(prev.filter.clone());
                    }
                    _ => {}
                }

                let mut next = reduce_app_state(prev.clone(), action, list_height_state.get());

                // Leaving the description field kicks off a classification
                if let Some(description) = classify_request(&prev, &next) {
                    next =
                        reduce_app_state(next, Action::ClassifyStarted, list_height_state.get());
                    classify_handler(description);
                }

                // Any filter change refetches with the rebuilt query. Typing
                // in the search box goes through the debounced handler.
                if next.filter != prev.filter {
                    if next.focus == Focus::Search {
                        search_handler(());
                    } else {
                        fetch_handler(next.filter.clone());
                    }
                }

                state.set(next);
            }
            _ => {}
        }
    });

    // Exit if requested
    let should_exit = state.read().should_exit;
    if should_exit {
        system.exit();
    }

    // Snapshot state for rendering (after the event closure)
    let app = state.read().clone();
    let toast_state = toast.read().clone();

    let shortcuts = match app.focus {
        Focus::List => list_shortcuts(),
        Focus::Search => search_shortcuts(),
        focus if focus.is_form() => form_shortcuts(),
        _ => filter_shortcuts(),
    };

    element! {
        View(
            width,
            height,
            flex_direction: FlexDirection::Column,
            background_color: theme.background,
        ) {
            Header(
                ticket_count: Some(app.tickets.len()),
                loading: app.loading,
            )
            StatsBar(stats: app.stats.clone())

            // Main content: submission form left, filters and list right
            View(
                width: 100pct,
                flex_grow: 1.0,
                flex_direction: FlexDirection::Row,
            ) {
                FormPane(
                    form: app.form.clone(),
                    focus: app.focus,
                )
                View(
                    flex_grow: 1.0,
                    flex_direction: FlexDirection::Column,
                ) {
                    FilterBar(
                        filter: app.filter.clone(),
                        focus: app.focus,
                    )
                    ListPane(
                        tickets: app.tickets.as_slice().to_vec(),
                        selected_index: app.selected_index,
                        scroll_offset: app.scroll_offset,
                        visible_height: list_height,
                        has_focus: app.focus == Focus::List,
                        loading: app.loading,
                        load_error: app.load_error.clone(),
                        filtered: !app.filter.is_empty(),
                    )
                }
            }

            #(render_toast(&toast_state))

            Footer(shortcuts: shortcuts)
        }
    }
}
