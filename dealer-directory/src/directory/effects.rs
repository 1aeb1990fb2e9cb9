use dioxus::prelude::{Signal, WritableExt};
use dioxus_logger::tracing::{debug, warn};

use crate::api::fetch_dealers;
use crate::config::DirectoryConfig;
use crate::directory::state::{Completion, DirectoryState, RequestTicket};

/// Fetch the listing a ticket was issued for and fold it into the directory.
///
/// Tickets come from `DirectoryState::begin` at the moment of the user's
/// change, so a later selection always outranks an earlier one. An unfiltered
/// ticket is the only kind that refreshes the dropdown options.
pub async fn load_dealers(
    config: DirectoryConfig,
    ticket: RequestTicket,
    mut directory: Signal<DirectoryState>,
) {
    debug!(
        "Loading dealers (seq={}, filter={:?})",
        ticket.seq, ticket.filter
    );

    let result = fetch_dealers(&config, &ticket.filter).await;
    if let Err(e) = &result {
        warn!(
            "Dealer listing failed (seq={}, filter={:?}): {}",
            ticket.seq, ticket.filter, e
        );
    }

    let seq = ticket.seq;
    let completion = directory.write().complete(ticket, result);
    match completion {
        Completion::Applied => {
            debug!("Applied dealer listing (seq={})", seq);
        }
        Completion::Stale => {
            debug!("Dropped stale dealer listing (seq={})", seq);
        }
        Completion::Failed => {}
    }
}
