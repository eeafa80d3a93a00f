//! Client for the Gemini `generateContent` API.
//!
//! - `types`: request and response envelopes as they travel over the wire.
//! - `client`: the `GeminiClient` used by the festival service to turn a prompt
//!   into the first candidate's text.

mod client;
mod types;

pub use client::{GeminiClient, UpstreamError};
