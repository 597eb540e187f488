// src/checker/http.rs
// =============================================================================
// HTTP client setup and transport error descriptions.
//
// Key points:
// - ONE client is built per run and shared by all concurrent resolutions
//   (reqwest::Client is an Arc internally, so cloning it is cheap)
// - Automatic redirect following is DISABLED: the resolver walks every hop
//   itself so it can inspect each intermediate location
// - Transport failures are turned into readable messages that still carry
//   reqwest's own description of what went wrong
// =============================================================================

use reqwest::{redirect, Client};

use crate::config::CheckerConfig;

/// Builds the shared HTTP client for a run.
///
/// The per-request timeout is applied on each request by the resolver, so
/// the client itself only carries the user agent and the redirect policy.
pub fn build_client(config: &CheckerConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.clone())
        .redirect(redirect::Policy::none())
        .build()
}

/// Turns a reqwest error into the message stored in a result.
///
/// reqwest errors can happen for many reasons:
/// - Network timeout
/// - DNS resolution failure / connection refused
/// - SSL certificate issues
/// - A response that is not valid HTTP
pub fn describe_transport_error(error: &reqwest::Error) -> String {
    let error_string = error.to_string();

    let kind = if error.is_timeout() {
        "Request timed out"
    } else if error.is_connect() {
        if error_string.contains("dns") {
            "Could not resolve hostname"
        } else {
            "Connection failed"
        }
    } else if error_string.contains("certificate") || error_string.contains("ssl") {
        "SSL certificate error"
    } else if error.is_builder() {
        "Invalid request"
    } else {
        return error_string;
    };

    format!("{}: {}", kind, error_string)
}
