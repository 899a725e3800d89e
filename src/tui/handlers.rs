//! Async handler factories for the ticket browser
//!
//! Factory functions accept `&mut Hooks` as their first parameter so they can
//! call `hooks.use_async_handler()` internally. Each handler owns one API
//! round-trip and feeds the outcome back into the shared state through the
//! reducer, so every transition stays in `model`.

use iocraft::hooks::UseAsyncHandler;
use iocraft::prelude::{Handler, Hooks, State};

use crate::api::{ApiClient, TicketFilter};
use crate::config::Config;
use crate::error::{Result, TriageError};
use crate::tui::components::toast::Toast;
use crate::tui::model::{Action, AppState, reduce_app_state};
use crate::types::{TicketDraft, TicketStatus};

/// Debounce delay for search input in milliseconds
const SEARCH_DEBOUNCE_MS: u64 = 500;

/// Build an API client from the stored config plus an optional CLI override
fn build_client(api_url: &Option<String>) -> Result<ApiClient> {
    let config = Config::load()?.with_api_url_override(api_url.clone());
    ApiClient::from_config(&config)
}

/// Factory for the initial-load handler
///
/// Fetches the ticket list and the stats panel in one go. Stats are
/// decorative, so a stats failure only logs while the list failure is
/// surfaced.
pub fn create_load_handler(
    hooks: &mut Hooks,
    state: &State<AppState>,
    list_height: &State<usize>,
    toast: &State<Option<Toast>>,
    api_url: &Option<String>,
) -> Handler<TicketFilter> {
    let state = *state;
    let list_height = *list_height;
    let toast = *toast;
    let api_url = api_url.clone();

    hooks.use_async_handler(move |filter: TicketFilter| {
        let mut state = state;
        let mut toast = toast;
        let api_url = api_url.clone();

        async move {
            let client = match build_client(&api_url) {
                Ok(client) => client,
                Err(e) => {
                    let current = state.read().clone();
                    state.set(reduce_app_state(
                        current,
                        Action::FetchFailed(e.to_string()),
                        list_height.get(),
                    ));
                    return;
                }
            };

            let current = state.read().clone();
            state.set(reduce_app_state(
                current,
                Action::FetchStarted,
                list_height.get(),
            ));

            let (tickets, stats) = futures::join!(client.list_tickets(&filter), client.stats());

            let mut current = state.read().clone();
            current = match tickets {
                Ok(tickets) => reduce_app_state(
                    current,
                    Action::FetchFinished(tickets),
                    list_height.get(),
                ),
                Err(e) => {
                    toast.set(Some(Toast::error(format!("Failed to load tickets: {e}"))));
                    reduce_app_state(
                        current,
                        Action::FetchFailed(e.to_string()),
                        list_height.get(),
                    )
                }
            };
            match stats {
                Ok(stats) => {
                    current = reduce_app_state(
                        current,
                        Action::StatsFinished(stats),
                        list_height.get(),
                    );
                }
                Err(e) => tracing::warn!("Failed to load stats: {e}"),
            }
            state.set(current);
        }
    })
}

/// Factory for the list-refetch handler
///
/// Runs whenever the active filter changes. The current list stays on
/// screen until the replacement arrives.
pub fn create_fetch_handler(
    hooks: &mut Hooks,
    state: &State<AppState>,
    list_height: &State<usize>,
    toast: &State<Option<Toast>>,
    api_url: &Option<String>,
) -> Handler<TicketFilter> {
    let state = *state;
    let list_height = *list_height;
    let toast = *toast;
    let api_url = api_url.clone();

    hooks.use_async_handler(move |filter: TicketFilter| {
        let mut state = state;
        let mut toast = toast;
        let api_url = api_url.clone();

        async move {
            let client = match build_client(&api_url) {
                Ok(client) => client,
                Err(e) => {
                    let current = state.read().clone();
                    state.set(reduce_app_state(
                        current,
                        Action::FetchFailed(e.to_string()),
                        list_height.get(),
                    ));
                    return;
                }
            };

            let current = state.read().clone();
            state.set(reduce_app_state(
                current,
                Action::FetchStarted,
                list_height.get(),
            ));

            let result = client.list_tickets(&filter).await;

            let current = state.read().clone();
            let next = match result {
                Ok(tickets) => reduce_app_state(
                    current,
                    Action::FetchFinished(tickets),
                    list_height.get(),
                ),
                Err(e) => {
                    toast.set(Some(Toast::error(format!("Failed to load tickets: {e}"))));
                    reduce_app_state(
                        current,
                        Action::FetchFailed(e.to_string()),
                        list_height.get(),
                    )
                }
            };
            state.set(next);
        }
    })
}

/// Factory for the debounced search handler
///
/// Re-invoking the handler cancels the pending sleep, so only the last
/// keystroke in a burst triggers a request. The filter is read after the
/// wait to pick up everything typed in the meantime.
pub fn create_search_handler(
    hooks: &mut Hooks,
    state: &State<AppState>,
    fetch_handler: &Handler<TicketFilter>,
) -> Handler<()> {
    let state = *state;
    let fetch_handler = fetch_handler.clone();

    hooks.use_async_handler(move |_: ()| {
        let fetch_handler = fetch_handler.clone();

        async move {
            tokio::time::sleep(tokio::time::Duration::from_millis(SEARCH_DEBOUNCE_MS)).await;

            let filter = state.read().filter.clone();
            fetch_handler(filter);
        }
    })
}

/// Factory for the stats-refresh handler
///
/// Stats are refreshed after a successful submission. Failures are logged
/// and the previous numbers stay up.
pub fn create_stats_handler(
    hooks: &mut Hooks,
    state: &State<AppState>,
    list_height: &State<usize>,
    api_url: &Option<String>,
) -> Handler<()> {
    let state = *state;
    let list_height = *list_height;
    let api_url = api_url.clone();

    hooks.use_async_handler(move |_: ()| {
        let mut state = state;
        let api_url = api_url.clone();

        async move {
            let result = match build_client(&api_url) {
                Ok(client) => client.stats().await,
                Err(e) => Err(e),
            };

            match result {
                Ok(stats) => {
                    let current = state.read().clone();
                    state.set(reduce_app_state(
                        current,
                        Action::StatsFinished(stats),
                        list_height.get(),
                    ));
                }
                Err(e) => tracing::warn!("Failed to refresh stats: {e}"),
            }
        }
    })
}

/// Factory for the classification handler
///
/// Suggestions are best-effort. A failure clears the in-flight indicator
/// and nothing else; the response never reports an error to the user.
pub fn create_classify_handler(
    hooks: &mut Hooks,
    state: &State<AppState>,
    list_height: &State<usize>,
    api_url: &Option<String>,
) -> Handler<String> {
    let state = *state;
    let list_height = *list_height;
    let api_url = api_url.clone();

    hooks.use_async_handler(move |description: String| {
        let mut state = state;
        let api_url = api_url.clone();

        async move {
            let result = match build_client(&api_url) {
                Ok(client) => client.classify(&description).await,
                Err(e) => Err(e),
            };

            let current = state.read().clone();
            let next = match result {
                Ok(classification) => reduce_app_state(
                    current,
                    Action::ClassifyFinished(classification),
                    list_height.get(),
                ),
                Err(e) => {
                    tracing::warn!("Classification failed: {e}");
                    reduce_app_state(current, Action::ClassifyFailed, list_height.get())
                }
            };
            state.set(next);
        }
    })
}

/// Factory for the ticket submission handler
///
/// A 2xx answer prepends the created ticket and resets the form. A
/// validation rejection keeps the form and shows the server payload
/// verbatim. Anything else keeps the form with a generic retry hint.
pub fn create_submit_handler(
    hooks: &mut Hooks,
    state: &State<AppState>,
    list_height: &State<usize>,
    toast: &State<Option<Toast>>,
    stats_handler: &Handler<()>,
    api_url: &Option<String>,
) -> Handler<TicketDraft> {
    let state = *state;
    let list_height = *list_height;
    let toast = *toast;
    let stats_handler = stats_handler.clone();
    let api_url = api_url.clone();

    hooks.use_async_handler(move |draft: TicketDraft| {
        let mut state = state;
        let mut toast = toast;
        let stats_handler = stats_handler.clone();
        let api_url = api_url.clone();

        async move {
            let result = match build_client(&api_url) {
                Ok(client) => client.create_ticket(&draft).await,
                Err(e) => Err(e),
            };

            let current = state.read().clone();
            let next = match result {
                Ok(ticket) => {
                    toast.set(Some(Toast::success(format!(
                        "Ticket #{} submitted",
                        ticket.id
                    ))));
                    stats_handler(());
                    reduce_app_state(
                        current,
                        Action::SubmitFinished(ticket),
                        list_height.get(),
                    )
                }
                Err(TriageError::Validation(payload)) => reduce_app_state(
                    current,
                    Action::SubmitRejected(payload),
                    list_height.get(),
                ),
                Err(e) => {
                    tracing::warn!("Ticket submission failed: {e}");
                    reduce_app_state(current, Action::SubmitFailed, list_height.get())
                }
            };
            state.set(next);
        }
    })
}

/// Factory for the status transition handler
///
/// Sends the PATCH and patches the answered ticket into the list. On
/// failure the list keeps its current contents; there is no optimistic
/// update to roll back.
pub fn create_status_handler(
    hooks: &mut Hooks,
    state: &State<AppState>,
    list_height: &State<usize>,
    api_url: &Option<String>,
) -> Handler<(u64, TicketStatus)> {
    let state = *state;
    let list_height = *list_height;
    let api_url = api_url.clone();

    hooks.use_async_handler(move |(id, status): (u64, TicketStatus)| {
        let mut state = state;
        let api_url = api_url.clone();

        async move {
            let result = match build_client(&api_url) {
                Ok(client) => client.update_status(id, status).await,
                Err(e) => Err(e),
            };

            match result {
                Ok(ticket) => {
                    let current = state.read().clone();
                    state.set(reduce_app_state(
                        current,
                        Action::StatusUpdated(ticket),
                        list_height.get(),
                    ));
                }
                Err(e) => {
                    tracing::warn!("Status update for ticket #{id} failed: {e}");
                }
            }
        }
    })
}
