//! Request translation and dispatch.
//!
//! # Responsibilities
//! - Rewrite the inbound URI to `target + path_and_query`
//! - Carry method, headers and body over to the outbound request
//! - Dispatch exactly once and buffer the full response body
//! - Copy status and headers back onto the reply
//!
//! # Design Decisions
//! - One `HeaderMap` type on both sides, so headers move across without conversion
//! - The path and query are appended as raw bytes; `http::Uri` does not normalise them
//! - `Host` is dropped so the client derives it from the target authority
//! - `Transfer-Encoding` is dropped from the reply: the body is already buffered,
//!   so the server frames it itself
//! - `http://` and `https://` targets; TLS uses rustls with the webpki root set
//! - No timeout: a stalled target holds its handler until the transport gives up

use axum::{
    body::{to_bytes, Body, Bytes},
    http::{
        header::{HOST, TRANSFER_ENCODING},
        HeaderMap, Request, Response, Uri,
    },
};
use hyper::body::Incoming;
use hyper_rustls::{HttpsConnector, HttpsConnectorBuilder};
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client},
    rt::TokioExecutor,
};

use crate::http::error::ForwardError;

/// Outbound client, shared by every handler for connection reuse.
pub type HttpClient = Client<HttpsConnector<HttpConnector>, Body>;

/// Build the outbound client.
///
/// Re-sending requests that failed on a stale pooled connection is turned
/// off: every inbound request gets exactly one outbound attempt.
pub fn build_client() -> HttpClient {
    let mut http = HttpConnector::new();
    http.enforce_http(false);

    let connector = HttpsConnectorBuilder::new()
        .with_webpki_roots()
        .https_or_http()
        .enable_http1()
        .wrap_connector(http);

    Client::builder(TokioExecutor::new())
        .retry_canceled_requests(false)
        .build(connector)
}

/// Destination for an inbound request: the target base followed by the
/// original path and query exactly as received.
pub fn destination_uri(target: &str, inbound: &Uri) -> Result<Uri, ForwardError> {
    let path_and_query = inbound.path_and_query().map_or("/", |pq| pq.as_str());
    Uri::try_from(format!("{target}{path_and_query}")).map_err(|e| ForwardError::dispatch(&e))
}

/// Turn the inbound request into the request sent to the target.
pub fn outbound_request(target: &str, inbound: Request<Body>) -> Result<Request<Body>, ForwardError> {
    let (parts, body) = inbound.into_parts();
    let uri = destination_uri(target, &parts.uri)?;

    let mut headers = parts.headers;
    headers.remove(HOST);

    let mut request = Request::builder()
        .method(parts.method)
        .uri(uri)
        .body(body)
        .map_err(|e| ForwardError::dispatch(&e))?;
    *request.headers_mut() = headers;
    Ok(request)
}

/// Forward one request and build the reply from the target's response.
pub async fn forward(
    client: &HttpClient,
    target: &str,
    inbound: Request<Body>,
) -> Result<Response<Body>, ForwardError> {
    let request = outbound_request(target, inbound)?;

    let response = client
        .request(request)
        .await
        .map_err(|e| ForwardError::dispatch(&e))?;

    let (parts, body) = response.into_parts();
    let body = read_body(body).await?;

    let mut reply = Response::new(Body::from(body));
    *reply.status_mut() = parts.status;
    *reply.headers_mut() = reply_headers(parts.headers);
    Ok(reply)
}

/// Target response headers as sent back to the caller. Framing is left to
/// the server since the body goes out as one buffered chunk.
pub fn reply_headers(mut headers: HeaderMap) -> HeaderMap {
    headers.remove(TRANSFER_ENCODING);
    headers
}

async fn read_body(body: Incoming) -> Result<Bytes, ForwardError> {
    to_bytes(Body::new(body), usize::MAX)
        .await
        .map_err(ForwardError::ResponseRead)
}
