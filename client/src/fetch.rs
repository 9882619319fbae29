use common::{GetRequest, PostRequest};
use reqwest::{Client, RequestBuilder};
use serde_json::Value;
use tracing::debug;

use crate::error::{FetchError, Result};

pub async fn get_branch(client: &Client, request: &GetRequest) -> Result<Value> {
    let url = request.url();
    debug!(%url, "sending GET");
    send(client.get(url)).await
}

pub async fn post_branch(client: &Client, request: &PostRequest) -> Result<Value> {
    debug!(url = %request.url, name = %request.body.name, "sending POST");
    send(client.post(&request.url).json(&request.body)).await
}

async fn send(request: RequestBuilder) -> Result<Value> {
    let response = request.send().await.map_err(FetchError::Transport)?;
    let status = response.status();
    debug!(%status, "response received");
    if !status.is_success() {
        return Err(FetchError::Status(status));
    }
    response.json::<Value>().await.map_err(FetchError::Body)
}
