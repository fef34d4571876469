//! Environment driven settings for the engine connection and the HTTP listener.

use std::{net::SocketAddr, time::Duration};

use anyhow::Context;

pub const DEFAULT_ELASTICSEARCH_URL: &str = "http://127.0.0.1:9200";
pub const DEFAULT_TIMEOUT_SECS: u64 = 1000;
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    pub elasticsearch_url: String,
    pub index_name: String,
    pub request_timeout: Duration,
    pub listen_addr: SocketAddr,
}

impl SearchConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let elasticsearch_url = lookup("ELASTICSEARCH_URL").unwrap_or(DEFAULT_ELASTICSEARCH_URL.to_string());
        let index_name = lookup("BOOKSEARCH_INDEX").unwrap_or(common::search_const::DEFAULT_INDEX_NAME.to_string());

        let timeout_secs = match lookup("ELASTICSEARCH_TIMEOUT_SECS") {
            Some(value) => value
                .trim()
                .parse::<u64>()
                .with_context(|| format!("ELASTICSEARCH_TIMEOUT_SECS is not a number of seconds: {value:?}"))?,
            None => DEFAULT_TIMEOUT_SECS,
        };
        if timeout_secs == 0 {
            anyhow::bail!("ELASTICSEARCH_TIMEOUT_SECS must be at least 1 second, got 0");
        }

        let listen_addr = lookup("BOOKSEARCH_LISTEN_ADDR").unwrap_or(DEFAULT_LISTEN_ADDR.to_string());
        let listen_addr = listen_addr
            .parse::<SocketAddr>()
            .with_context(|| format!("BOOKSEARCH_LISTEN_ADDR is not a socket address: {listen_addr:?}"))?;

        Ok(Self {
            elasticsearch_url: elasticsearch_url.trim_end_matches('/').to_string(),
            index_name,
            request_timeout: Duration::from_secs(timeout_secs),
            listen_addr,
        })
    }
}
