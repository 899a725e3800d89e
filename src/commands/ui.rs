//! Launch the interactive terminal UI.

use iocraft::prelude::*;

use crate::error::{Result, TriageError};
use crate::tui::TriageTui;

/// Run the fullscreen TUI until the user quits
pub async fn cmd_ui(api_url: Option<String>) -> Result<()> {
    element!(TriageTui(api_url: api_url))
        .fullscreen()
        .await
        .map_err(|e| TriageError::Other(format!("TUI error: {e}")))
}
