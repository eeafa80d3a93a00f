//! Component state for the festival lookup form.
//!
//! The lookup moves through four phases:
//!
//! ```text
//! Idle --submit--> Loading --ok--> Displayed
//!                     \----err--> Error
//! Displayed | Error --submit--> Loading
//! ```
//!
//! Submitting an empty name never leaves the current phase; it only sets a
//! local validation message. While `Loading`, further submits are ignored so
//! at most one request is in flight.

use common::model::festival::FestivalRecord;

/// Phase of the current lookup.
#[derive(Clone, Debug, PartialEq)]
pub enum LookupState {
    Idle,
    Loading,
    Displayed(FestivalRecord),
    Error(String),
}

/// Main state container for the `FestivalLookupComponent`.
pub struct FestivalLookupComponent {
    /// Current content of the text input.
    pub festival: String,

    pub state: LookupState,

    /// Shown under the input when the user submits an empty name.
    pub validation_message: Option<String>,
}

impl FestivalLookupComponent {
    pub fn new() -> Self {
        Self {
            festival: String::new(),
            state: LookupState::Idle,
            validation_message: None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.state == LookupState::Loading
    }

    /// Starts a lookup if one may start.
    ///
    /// Returns the subject to send, or `None` when the name is empty or a
    /// request is already in flight. On success the previous record or error
    /// is cleared and the state becomes `Loading`.
    pub fn begin_submit(&mut self) -> Option<String> {
        if self.is_loading() {
            return None;
        }
        if self.festival.is_empty() {
            self.validation_message = Some("Please enter a festival name!".to_string());
            return None;
        }
        self.validation_message = None;
        self.state = LookupState::Loading;
        Some(self.festival.clone())
    }

    /// Records the outcome of the in-flight lookup. Outcomes arriving when no
    /// lookup is in flight are dropped.
    pub fn finish(&mut self, outcome: Result<FestivalRecord, String>) {
        if !self.is_loading() {
            return;
        }
        self.state = match outcome {
            Ok(record) => LookupState::Displayed(record),
            Err(reason) => LookupState::Error(reason),
        };
    }
}
