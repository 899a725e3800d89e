mod config;
mod ls;
mod stats;
mod status;
mod submit;
mod ui;

pub use config::{cmd_config_get, cmd_config_set, cmd_config_show};
pub use ls::cmd_ls;
pub use stats::cmd_stats;
pub use status::cmd_status;
pub use submit::{SubmitOptions, cmd_submit};
pub use ui::cmd_ui;

use crate::api::ApiClient;
use crate::config::Config;
use crate::error::Result;

/// Build an API client, honoring a command line URL override
pub(crate) fn api_client(api_url: Option<String>) -> Result<ApiClient> {
    let config = Config::load()?.with_api_url_override(api_url);
    ApiClient::from_config(&config)
}
