use std::path::PathBuf;

use clap::Parser;
use dietwatch_core::domain::common::{CedricConfig, DietwatchConfig, DocumentConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "dietwatch", about = "Diet-plan allergy annotation service")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,
    #[command(flatten)]
    pub document: DocumentArgs,
    #[command(flatten)]
    pub cedric: CedricArgs,
    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "SERVER_PORT", default_value_t = 5000)]
    pub port: u16,

    /// Path prefix for every route, e.g. "/api".
    #[arg(long, env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long,
        env = "SERVER_ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct DocumentArgs {
    /// Diet-plan JSON document served and annotated by the API.
    #[arg(
        long,
        env = "DIET_PLAN_PATH",
        default_value = "sample_diet_plan_with_alerts.json"
    )]
    pub diet_plan_path: PathBuf,
}

#[derive(Debug, Clone, clap::Args)]
pub struct CedricArgs {
    #[arg(
        long,
        env = "CEDRIC_API_URL",
        default_value = "https://api.cedric.example.com/process"
    )]
    pub cedric_api_url: String,

    /// Bearer token for Cedric. Requests go out unauthenticated when unset.
    #[arg(long, env = "CEDRIC_API_KEY")]
    pub cedric_api_key: Option<String>,

    #[arg(long, env = "CEDRIC_TIMEOUT_SECS", default_value_t = 30)]
    pub cedric_timeout_secs: u64,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    #[arg(long, env = "LOG_FILTER", default_value = "info")]
    pub log_filter: String,

    #[arg(long, env = "LOG_JSON", default_value_t = false)]
    pub log_json: bool,
}

impl From<Args> for DietwatchConfig {
    fn from(args: Args) -> Self {
        Self {
            document: DocumentConfig {
                path: args.document.diet_plan_path,
            },
            cedric: CedricConfig {
                api_url: args.cedric.cedric_api_url,
                api_key: args.cedric.cedric_api_key,
                timeout_secs: args.cedric.cedric_timeout_secs,
            },
        }
    }
}
