//! HTTP client for the candidate and voter service behind the voting
//! dashboard.

mod client;
mod result;

pub use client::{Client, CANDIDATES_PATH, VOTERS_PATH};
pub use result::{user_message, Error, Result, UNKNOWN_FAILURE_MESSAGE};
