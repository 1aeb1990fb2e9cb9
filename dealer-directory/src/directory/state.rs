use shared_types::{distinct_states, Dealer, StateFilter};

use crate::api::ApiError;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    /// Last fetch failed; rows still show the previous result
    Failed(String),
}

/// Handle for one in-flight listing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTicket {
    pub seq: u64,
    pub filter: StateFilter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    Failed,
    /// A newer request was issued; the result was dropped
    Stale,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DirectoryState {
    pub dealers: Vec<Dealer>,
    /// Only ever derived from unfiltered loads
    pub state_options: Vec<String>,
    pub status: LoadStatus,
    latest_seq: u64,
}

impl DirectoryState {
    /// A fresh directory with its first request already issued.
    pub fn with_request(filter: StateFilter) -> (Self, RequestTicket) {
        let mut state = Self::default();
        let ticket = state.begin(filter);
        (state, ticket)
    }

    /// Issue a ticket for a new request. Any earlier ticket becomes stale.
    pub fn begin(&mut self, filter: StateFilter) -> RequestTicket {
        self.latest_seq += 1;
        self.status = LoadStatus::Loading;
        RequestTicket {
            seq: self.latest_seq,
            filter,
        }
    }

    pub fn is_current(&self, ticket: &RequestTicket) -> bool {
        ticket.seq == self.latest_seq
    }

    pub fn complete(
        &mut self,
        ticket: RequestTicket,
        result: Result<Vec<Dealer>, ApiError>,
    ) -> Completion {
        if !self.is_current(&ticket) {
            return Completion::Stale;
        }

        match result {
            Ok(dealers) => {
                if ticket.filter.is_all() {
                    self.state_options = distinct_states(&dealers);
                }
                self.dealers = dealers;
                self.status = LoadStatus::Ready;
                Completion::Applied
            }
            Err(e) => {
                self.status = LoadStatus::Failed(e.to_string());
                Completion::Failed
            }
        }
    }
}

/// Status line shown above the table. `dealer_count` is the number of rows
/// currently displayed.
pub fn status_text(status: &LoadStatus, dealer_count: usize) -> Option<String> {
    match status {
        LoadStatus::Idle => None,
        LoadStatus::Ready if dealer_count == 0 => Some("No dealers found.".to_string()),
        LoadStatus::Ready => None,
        LoadStatus::Loading => Some("Loading dealers...".to_string()),
        LoadStatus::Failed(reason) => Some(format!(
            "Could not refresh dealers ({reason}). Showing the last loaded list."
        )),
    }
}
