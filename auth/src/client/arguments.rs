use std::fmt::{Debug, Formatter};

/// API token parameters
#[derive(Clone, PartialEq, Eq, clap::Args)]
#[command(next_help_heading = "Authentication")]
pub struct ApiTokenArguments {
    /// API token of the repository account
    #[arg(id = "api_token", long = "api-token", env = "PACKAGECLOUD_TOKEN", hide_env_values = true)]
    pub api_token: String,
}

impl Debug for ApiTokenArguments {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiTokenArguments").field("api_token", &"***").finish()
    }
}
