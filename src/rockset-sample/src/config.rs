use anyhow::{Context, Result};

/// Environment-driven sample configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub api_server: String,
    pub workspace: String,
    pub collection: String,
}

fn default_api_server() -> String {
    "https://api.usw2a1.rockset.com".to_string()
}

fn default_workspace() -> String {
    "dotnet-test-workspace".to_string()
}

fn default_collection() -> String {
    "dotnet-test-collection".to_string()
}

impl Config {
    /// Load configuration from the environment
    ///
    /// The API key is required and its absence is fatal; everything else
    /// falls back to the sample defaults. Called before any client exists,
    /// so a missing key halts the program without network activity.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("ROCKSET_API_KEY")
            .context("ROCKSET_API_KEY environment variable not found")?;

        Ok(Self {
            api_key,
            api_server: std::env::var("ROCKSET_API_SERVER").unwrap_or_else(|_| default_api_server()),
            workspace: std::env::var("ROCKSET_SAMPLE_WORKSPACE")
                .unwrap_or_else(|_| default_workspace()),
            collection: std::env::var("ROCKSET_SAMPLE_COLLECTION")
                .unwrap_or_else(|_| default_collection()),
        })
    }
}
