//! Server configuration.
//!
//! Uses Figment to merge built-in defaults with `CONCEPT_SEARCH_*`
//! environment variables.

use std::net::{AddrParseError, SocketAddr};
use std::path::PathBuf;

use figment::{
    providers::{Env, Serialized},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::page::{PagingConfig, DEFAULT_MAX_PAGE_SIZE, DEFAULT_PAGE_SIZE};

/// Prefix shared by every configuration variable.
pub const ENV_PREFIX: &str = "CONCEPT_SEARCH_";
/// Default gRPC port.
pub const DEFAULT_PORT: u16 = 50051;
const DEFAULT_HOST: &str = "[::1]";
const DEFAULT_DATA_PATH: &str = "./data";

/// Settings for the `concept-search-server` binary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Directory holding `terminologies.json` and the concept files.
    pub data_path: PathBuf,
    /// Host part of the listen address.
    #[serde(rename = "addr")]
    pub host: String,
    /// Listen port.
    pub port: u16,
    /// Page size used when a request names none.
    pub default_page_size: usize,
    /// Upper bound on any page.
    pub max_page_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: DEFAULT_MAX_PAGE_SIZE,
        }
    }
}

impl ServerConfig {
    /// Defaults overlaid with `CONCEPT_SEARCH_*` environment variables.
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Self::default())).merge(Env::prefixed(ENV_PREFIX))
    }

    /// Reads the configuration from the environment.
    ///
    /// A variable that is set but does not parse is an error.
    pub fn from_env() -> Result<Self, figment::Error> {
        Self::from_figment(Self::figment())
    }

    /// Extracts the configuration from any figment.
    pub fn from_figment(figment: Figment) -> Result<Self, figment::Error> {
        figment.extract()
    }

    /// Page sizing; the maximum is raised to at least the default.
    pub fn paging(&self) -> PagingConfig {
        PagingConfig::new(self.default_page_size, self.max_page_size)
    }

    /// The address to listen on.
    pub fn socket_addr(&self) -> Result<SocketAddr, AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }
}
