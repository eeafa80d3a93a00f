//! # Festival Service Module
//!
//! Single endpoint that turns a festival name into a structured description
//! produced by the generation API.
//!
//! ## Sub-modules:
//! - `generate`: HTTP handler and orchestration of one lookup.
//! - `prompt`: the fixed instruction template sent to the model.
//! - `extract`: recovery of the JSON object from the model's free-form text.

pub mod extract;
mod generate;
mod prompt;

use actix_web::web::{post, resource};
use actix_web::Resource;

/// Path of the lookup endpoint.
const API_PATH: &str = "/generate-festival";

/// Configures and returns the Actix `Resource` for the festival lookup.
///
/// # Registered Routes:
///
/// *   **`POST /generate-festival`**:
///     - **Handler**: `generate::process`
///     - **Description**: Expects `{ "festival": "<name>" }`. Builds the prompt,
///       calls the generation API and answers with the eight-field
///       `FestivalRecord` on success, or a JSON error body (`400`, `502`, `500`).
pub fn configure_routes() -> Resource {
    resource(API_PATH).route(post().to(generate::process))
}
