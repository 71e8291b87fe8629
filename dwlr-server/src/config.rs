//! Server configuration from the command line and environment.

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_PING_MESSAGE: &str = "pong";

/// Command line flags of the `dwlr-server` binary.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "dwlr-server",
    version,
    about = "DWLR water insights API and assistant proxy"
)]
pub struct Args {
    /// Address to bind
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, short, default_value_t = 8080)]
    pub port: u16,

    /// Directory with the built web app, served for non-API paths
    #[arg(long)]
    pub static_dir: Option<PathBuf>,
}

impl Args {
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr = format!("{}:{}", self.host, self.port).parse()?;
        Ok(addr)
    }
}

/// Runtime settings shared by the handlers.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// Key for the completion API; chat requests are refused without it
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub ping_message: String,
    pub static_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            openai_base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            ping_message: DEFAULT_PING_MESSAGE.to_string(),
            static_dir: None,
        }
    }
}

impl ServerConfig {
    /// Read `OPENAI_API_KEY`, `OPENAI_BASE_URL` and `PING_MESSAGE`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any variable lookup. Empty API keys count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            openai_api_key: lookup("OPENAI_API_KEY").filter(|k| !k.trim().is_empty()),
            openai_base_url: lookup("OPENAI_BASE_URL")
                .filter(|u| !u.trim().is_empty())
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or(defaults.openai_base_url),
            ping_message: lookup("PING_MESSAGE").unwrap_or(defaults.ping_message),
            static_dir: None,
        }
    }

    pub fn with_static_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.static_dir = dir;
        self
    }
}
