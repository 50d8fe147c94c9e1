use std::future::Future;
use std::time::Duration;

use crate::config::Config;
use async_trait::async_trait;
use dioxus::logger::tracing::{debug, warn};
use membership::{MemberGateway, MemberPageRequest, MembersPage, StatusChange};
use reqwest::Client;
use shared::Error;
use shared_graphql::{GetAllMembers, GraphQlResponse, HandleRegister, Operation};

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    config: Config,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_config(Config::from_env())
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            client: build_client(&config),
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    async fn execute<O: Operation>(&self, input: &O::Input) -> shared::Result<O::Output> {
        let url = &self.config.graphql_endpoint;
        debug!("{} -> {}", O::NAME, url);

        let exchange = async {
            let response = self
                .client
                .post(url)
                .json(&O::request(input))
                .send()
                .await
                .map_err(transport_error)?;

            let status = response.status();
            if !status.is_success() {
                warn!("{} failed with HTTP {}", O::NAME, status);
                return Err(Error::Status(status.as_u16()));
            }

            response
                .json::<GraphQlResponse<O::Data>>()
                .await
                .map_err(transport_error)
        };

        let envelope = with_deadline(exchange, self.config.request_timeout).await??;
        envelope.into_data().map(O::output)
    }
}

#[async_trait(?Send)]
impl MemberGateway for ApiClient {
    async fn fetch_page(&self, request: &MemberPageRequest) -> shared::Result<MembersPage> {
        self.execute::<GetAllMembers>(request).await
    }

    async fn handle_register(&self, change: &StatusChange) -> shared::Result<bool> {
        self.execute::<HandleRegister>(change).await
    }
}

fn transport_error(err: reqwest::Error) -> Error {
    if err.is_timeout() {
        Error::Timeout
    } else if err.is_decode() {
        Error::InvalidResponse(err.to_string())
    } else {
        Error::Transport(err.to_string())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn build_client(config: &Config) -> Client {
    Client::builder()
        .timeout(config.request_timeout)
        .build()
        .unwrap_or_else(|e| {
            warn!("Falling back to default HTTP client: {}", e);
            Client::new()
        })
}

// The fetch backend has no client-level timeout; `with_deadline` covers it.
#[cfg(target_arch = "wasm32")]
fn build_client(_config: &Config) -> Client {
    Client::new()
}

#[cfg(not(target_arch = "wasm32"))]
async fn with_deadline<F: Future>(exchange: F, _timeout: Duration) -> shared::Result<F::Output> {
    Ok(exchange.await)
}

#[cfg(target_arch = "wasm32")]
async fn with_deadline<F: Future>(exchange: F, timeout: Duration) -> shared::Result<F::Output> {
    use futures::future::{Either, select};
    use gloo_timers::future::TimeoutFuture;

    let millis = u32::try_from(timeout.as_millis()).unwrap_or(u32::MAX);
    let deadline = TimeoutFuture::new(millis);
    match select(Box::pin(exchange), Box::pin(deadline)).await {
        Either::Left((output, _)) => Ok(output),
        Either::Right(_) => Err(Error::Timeout),
    }
}
