//! Next command
//!
//! Runs the endpoint contract over a body read from stdin or the command
//! line and produces the JSON the endpoint would answer with.

use crate::api::{MAX_REQUEST_BODY_BYTES, handle_next_request};
use crate::output::log;
use crate::solver::{FeedbackCache, Solver};
use anyhow::{Context, Result};
use serde_json::Value;
use std::io::Read;

/// Read at most one byte more than the body limit
///
/// # Errors
///
/// Fails when the reader fails.
pub fn read_body<R: Read>(reader: R) -> Result<Vec<u8>> {
    let mut body = Vec::new();
    reader
        .take(MAX_REQUEST_BODY_BYTES as u64 + 1)
        .read_to_end(&mut body)
        .context("failed to read request body")?;
    Ok(body)
}

/// Response or error body for `body`
#[must_use]
pub fn respond(solver: &Solver<'_>, cache: &mut FeedbackCache, body: &[u8]) -> Value {
    match handle_next_request(solver, cache, body) {
        Ok(response) => serde_json::to_value(&response).unwrap_or(Value::Null),
        Err(err) => {
            log::warn(format_args!("request rejected ({} {err})", err.status()));
            err.to_json()
        }
    }
}
