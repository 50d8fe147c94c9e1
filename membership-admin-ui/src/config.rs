use std::time::Duration;

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub graphql_endpoint: String,
    pub document_base_url: String,
    pub request_timeout: Duration,
}

const GRAPHQL_ENDPOINT_VAR: &str = "MEMBERSHIP_GRAPHQL_ENDPOINT";
const DOCUMENT_BASE_URL_VAR: &str = "MEMBERSHIP_DOCUMENT_BASE_URL";
const REQUEST_TIMEOUT_VAR: &str = "MEMBERSHIP_REQUEST_TIMEOUT_SECS";

const DEFAULT_GRAPHQL_ENDPOINT: &str = "http://localhost:8080/graphql";
const DEFAULT_DOCUMENT_BASE_URL: &str = "http://localhost:8080/documents";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;

impl Config {
    /// Runtime environment first, then values baked in at build time (the browser has no env).
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok().or_else(|| compiled_in(key)))
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let timeout_secs = lookup(REQUEST_TIMEOUT_VAR)
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS);

        Self {
            graphql_endpoint: lookup(GRAPHQL_ENDPOINT_VAR)
                .unwrap_or_else(|| DEFAULT_GRAPHQL_ENDPOINT.to_string()),
            document_base_url: lookup(DOCUMENT_BASE_URL_VAR)
                .unwrap_or_else(|| DEFAULT_DOCUMENT_BASE_URL.to_string()),
            request_timeout: Duration::from_secs(timeout_secs),
        }
    }
}

fn compiled_in(key: &str) -> Option<String> {
    let value = match key {
        GRAPHQL_ENDPOINT_VAR => option_env!("MEMBERSHIP_GRAPHQL_ENDPOINT"),
        DOCUMENT_BASE_URL_VAR => option_env!("MEMBERSHIP_DOCUMENT_BASE_URL"),
        REQUEST_TIMEOUT_VAR => option_env!("MEMBERSHIP_REQUEST_TIMEOUT_SECS"),
        _ => None,
    };
    value.map(str::to_string)
}
