use serde::{Deserialize, Serialize};

/// Request payload for `POST /generate-festival`.
/// Carries the festival name the user typed into the lookup form.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct GenerateFestivalRequest {
    pub festival: String,
}
