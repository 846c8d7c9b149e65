use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use dotenvy::dotenv;
use serde::Deserialize;

const DEFAULT_API_BASE_URL: &str = "http://localhost:4000/job-portal/api/v1";
const TOKEN_FILE_NAME: &str = "jobportal-token";

/// Command line overrides for the environment configuration
#[derive(Debug, Default, Parser)]
#[command(name = "jobify", about = "Terminal client for the Jobify job portal")]
pub struct Args {
    /// Base URL of the job-portal API
    #[arg(long)]
    pub api_url: Option<String>,

    /// File the session token is persisted in
    #[arg(long)]
    pub token_file: Option<PathBuf>,

    /// File the application log is written to
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// Configuration for the application
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Base URL every API path is appended to
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Where the session token lives between runs
    #[serde(default = "default_token_path")]
    pub token_path: PathBuf,

    #[serde(default = "default_log_path")]
    pub log_path: PathBuf,

    /// Request timeout in seconds; unset means requests never time out
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn data_dir() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".jobify")
}

fn default_token_path() -> PathBuf {
    data_dir().join(TOKEN_FILE_NAME)
}

fn default_log_path() -> PathBuf {
    data_dir().join("jobify.log")
}

impl Config {
    /// Load configuration from `JOBIFY_*` environment variables
    ///
    /// This function will:
    /// 1. Load variables from .env file if it exists
    /// 2. Deserialize prefixed environment variables into Config
    pub fn load() -> Result<Self> {
        dotenv().ok();

        let config = envy::prefixed("JOBIFY_").from_env::<Config>()?;

        Ok(config)
    }

    /// Apply command line overrides on top of the environment
    pub fn with_args(mut self, args: Args) -> Self {
        if let Some(url) = args.api_url {
            self.api_base_url = url;
        }
        if let Some(path) = args.token_file {
            self.token_path = path;
        }
        if let Some(path) = args.log_file {
            self.log_path = path;
        }
        self
    }

    pub fn api_base_url(&self) -> &str {
        self.api_base_url.trim_end_matches('/')
    }
}

/// Parse the command line and merge it into the environment configuration
pub fn init() -> Result<Config> {
    let args = Args::parse();

    let config = Config::load()?.with_args(args);

    Ok(config)
}
