use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser};
use healthchat_core::domain::common::{
    DEFAULT_MAX_DEVICES, HealthChatConfig, KnowledgeConfig, SelectionConfig,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "healthchat-api", version, about = "HealthChat symptom checker API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub log: LogArgs,

    #[command(flatten)]
    pub knowledge: KnowledgeArgs,

    #[command(flatten)]
    pub selection: SelectionArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix for every route, e.g. `/api`.
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "RUST_LOG", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct KnowledgeArgs {
    /// JSON file replacing the built-in symptom and diet tables.
    #[arg(long = "knowledge-base", env = "KNOWLEDGE_BASE_PATH")]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct SelectionArgs {
    /// Device selections kept in memory before the least recently updated is evicted.
    #[arg(long = "max-devices", env = "MAX_DEVICES", default_value_t = DEFAULT_MAX_DEVICES)]
    pub max_devices: usize,
}

impl From<Args> for HealthChatConfig {
    fn from(args: Args) -> Self {
        HealthChatConfig {
            knowledge: KnowledgeConfig {
                path: args.knowledge.path,
            },
            selection: SelectionConfig {
                max_devices: args.selection.max_devices,
            },
        }
    }
}
