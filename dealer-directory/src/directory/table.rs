use shared_types::{Dealer, ALL_STATES};

use crate::config::DirectoryConfig;

pub const BASE_COLUMNS: [&str; 5] = ["ID", "Dealer Name", "City", "Address", "Zip"];
pub const REVIEW_COLUMN: &str = "Review Dealer";
pub const STATE_PLACEHOLDER: &str = "State";
pub const ALL_STATES_LABEL: &str = "All States";

#[derive(Debug, Clone, PartialEq)]
pub struct StateChoice {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DealerRow {
    pub id: i64,
    pub name: String,
    pub detail_href: String,
    pub city: String,
    pub address: String,
    pub zip: String,
    pub state: String,
    /// Present only for logged-in users
    pub review_href: Option<String>,
}

/// Everything the table renders, resolved ahead of `rsx!`.
#[derive(Debug, Clone, PartialEq)]
pub struct TableModel {
    pub show_review_column: bool,
    /// Selectable choices; the disabled placeholder is rendered separately
    pub choices: Vec<StateChoice>,
    pub rows: Vec<DealerRow>,
}

impl TableModel {
    pub fn build(
        config: &DirectoryConfig,
        dealers: &[Dealer],
        state_options: &[String],
        logged_in: bool,
    ) -> Self {
        let mut choices = Vec::with_capacity(state_options.len() + 1);
        choices.push(StateChoice {
            value: ALL_STATES.to_string(),
            label: ALL_STATES_LABEL.to_string(),
        });
        choices.extend(state_options.iter().map(|state| StateChoice {
            value: state.clone(),
            label: state.clone(),
        }));

        let rows = dealers
            .iter()
            .map(|dealer| DealerRow {
                id: dealer.id,
                name: dealer.full_name.clone(),
                detail_href: config.dealer_href(dealer.id),
                city: dealer.city.clone(),
                address: dealer.address.clone(),
                zip: dealer.zip.clone(),
                state: dealer.state.clone(),
                review_href: logged_in.then(|| config.review_href(dealer.id)),
            })
            .collect();

        Self {
            show_review_column: logged_in,
            choices,
            rows,
        }
    }
}
