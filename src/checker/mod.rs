// src/checker/mod.rs
// =============================================================================
// This module contains all url checking logic.
//
// Submodules:
// - home: the set of generic landing pages a redirect must not end on
// - http: builds the shared HTTP client, describes transport errors
// - redirect: resolves ONE url through its redirect chain, hop by hop
// - dispatch: runs the resolver over every url with bounded concurrency
//
// This file (mod.rs) is the module root - it re-exports the public API so
// callers can write `checker::dispatch()` instead of
// `checker::dispatch::dispatch()`.
// =============================================================================

mod dispatch;
mod home;
mod http;
mod redirect;

pub use dispatch::dispatch;
pub use home::HomePages;
pub use http::{build_client, describe_transport_error};
pub use redirect::{is_redirect_status, resolve_location, resolve_redirect_chain, RedirectChainResult};
