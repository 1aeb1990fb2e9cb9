//! Dealer directory: a state-filterable table of dealerships.

use dioxus::prelude::*;
use shared_types::StateFilter;

mod effects;
pub mod state;
mod styles;
pub mod table;
mod view;

use crate::config::DirectoryConfig;
use crate::session;
use state::{status_text, DirectoryState, LoadStatus};
use styles::DIRECTORY_STYLES;
use table::TableModel;
pub use view::{DealerTable, DirectoryHeader};

#[component]
pub fn DealerDirectory(config: DirectoryConfig) -> Element {
    // Full listing once on mount; later loads come from the dropdown.
    let mount_config = config.clone();
    let mut directory = use_hook(move || {
        let (state, ticket) = DirectoryState::with_request(StateFilter::All);
        let directory = Signal::new(state);
        spawn(effects::load_dealers(mount_config, ticket, directory));
        directory
    });

    let logged_in = session::is_logged_in(&config.session_key);

    let (model, status, failed) = {
        let current = directory.read();
        (
            TableModel::build(
                &config,
                &current.dealers,
                &current.state_options,
                logged_in,
            ),
            status_text(&current.status, current.dealers.len()),
            matches!(current.status, LoadStatus::Failed(_)),
        )
    };

    let review_icon = config.review_icon.clone();
    let filter_config = config.clone();

    rsx! {
        style { {DIRECTORY_STYLES} }
        div {
            DirectoryHeader {}
            if let Some(text) = status {
                div {
                    class: if failed { "directory-status failed" } else { "directory-status" },
                    "{text}"
                }
            }
            DealerTable {
                model,
                review_icon,
                on_filter: move |value: String| {
                    // Ticket is issued in event order, before the fetch is polled.
                    let ticket = directory.write().begin(StateFilter::from_selection(&value));
                    spawn(effects::load_dealers(filter_config.clone(), ticket, directory));
                },
            }
        }
    }
}
