//! Shared types between the dealer directory front-end and the listing API
//!
//! Serializable with serde for JSON over HTTP. The Django listing endpoints
//! wrap every payload in an envelope carrying an application-level `status`.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ============================================================================
// Wire Types
// ============================================================================

/// Application status code the listing API uses for a usable payload.
pub const STATUS_OK: i64 = 200;

/// Dropdown value that clears the state filter.
pub const ALL_STATES: &str = "All";

/// A car dealership as returned by `get_dealers`.
///
/// Extra fields the backend sends (coordinates, short name) are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, TS)]
#[ts(export, export_to = "../../dealer-directory/src/types/generated.ts")]
pub struct Dealer {
    pub id: i64,
    pub full_name: String,
    pub city: String,
    pub address: String,
    pub zip: String,
    pub state: String,
}

/// Envelope returned by both the unfiltered and the per-state listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, TS)]
#[ts(export, export_to = "../../dealer-directory/src/types/generated.ts")]
pub struct DealerListResponse {
    pub status: i64,
    /// Absent on error envelopes such as `{"status": 404}`
    #[serde(default)]
    pub dealers: Vec<Dealer>,
}

impl DealerListResponse {
    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }
}

// ============================================================================
// Filtering
// ============================================================================

/// Which slice of the directory to request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../dealer-directory/src/types/generated.ts")]
pub enum StateFilter {
    All,
    State(String),
}

impl StateFilter {
    /// Parse a dropdown value. The sentinel `All` clears the filter; anything
    /// else is taken verbatim as a state code.
    pub fn from_selection(value: &str) -> Self {
        if value == ALL_STATES {
            Self::All
        } else {
            Self::State(value.to_string())
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    pub fn state(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::State(state) => Some(state.as_str()),
        }
    }
}

/// Distinct `state` values in first-seen order.
pub fn distinct_states(dealers: &[Dealer]) -> Vec<String> {
    let mut states: Vec<String> = Vec::new();
    for dealer in dealers {
        if !states.iter().any(|s| s == &dealer.state) {
            states.push(dealer.state.clone());
        }
    }
    states
}

// ============================================================================
// Tests
// ============================================================================
