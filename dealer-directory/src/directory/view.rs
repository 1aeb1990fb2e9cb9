use dioxus::prelude::*;

use crate::directory::table::{TableModel, BASE_COLUMNS, REVIEW_COLUMN, STATE_PLACEHOLDER};

#[component]
pub fn DirectoryHeader() -> Element {
    rsx! {
        div { class: "directory-header",
            h2 { class: "directory-title", "Dealerships" }
        }
    }
}

#[component]
pub fn DealerTable(
    model: TableModel,
    review_icon: String,
    on_filter: EventHandler<String>,
) -> Element {
    rsx! {
        table { class: "table",
            thead {
                tr {
                    for column in BASE_COLUMNS {
                        th { "{column}" }
                    }
                    th {
                        select {
                            name: "state",
                            id: "state",
                            onchange: move |evt: FormEvent| on_filter.call(evt.value()),
                            option {
                                value: "",
                                disabled: true,
                                hidden: true,
                                selected: true,
                                "{STATE_PLACEHOLDER}"
                            }
                            for choice in model.choices.iter() {
                                option {
                                    key: "{choice.value}",
                                    value: "{choice.value}",
                                    "{choice.label}"
                                }
                            }
                        }
                    }
                    if model.show_review_column {
                        th { "{REVIEW_COLUMN}" }
                    }
                }
            }
            tbody {
                for row in model.rows.iter() {
                    tr { key: "{row.id}",
                        td { "{row.id}" }
                        td {
                            a { href: "{row.detail_href}", "{row.name}" }
                        }
                        td { "{row.city}" }
                        td { "{row.address}" }
                        td { "{row.zip}" }
                        td { "{row.state}" }
                        if let Some(review_href) = &row.review_href {
                            td {
                                a { href: "{review_href}",
                                    img {
                                        src: "{review_icon}",
                                        class: "review_icon",
                                        alt: "Post Review",
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DirectoryConfig;
    use shared_types::{distinct_states, Dealer};

    const ICON: &str = "/static/reviewicon.png";

    #[component]
    fn TableHarness(model: TableModel) -> Element {
        rsx! {
            DealerTable {
                model,
                review_icon: ICON.to_string(),
                on_filter: move |_: String| {},
            }
        }
    }

    fn dealer(id: i64, state: &str) -> Dealer {
        Dealer {
            id,
            full_name: format!("Dealer {id}"),
            city: "Buffalo".to_string(),
            address: format!("{id} Niagara St"),
            zip: "14201".to_string(),
            state: state.to_string(),
        }
    }

    fn render(dealers: &[Dealer], state_options: &[String], logged_in: bool) -> String {
        let config = DirectoryConfig::new("http://localhost:8000").expect("valid base");
        let model = TableModel::build(&config, dealers, state_options, logged_in);
        let mut dom = VirtualDom::new_with_props(TableHarness, TableHarnessProps { model });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn tbody(html: &str) -> &str {
        let start = html.find("<tbody").expect("table body");
        &html[start..]
    }

    fn position(html: &str, needle: &str) -> usize {
        html.find(needle)
            .unwrap_or_else(|| panic!("missing {needle} in {html}"))
    }

    #[test]
    fn header_columns_in_order_with_state_dropdown() {
        let html = render(&[], &[], false);

        let mut last = 0;
        for needle in [
            ">ID</th>",
            ">Dealer Name</th>",
            ">City</th>",
            ">Address</th>",
            ">Zip</th>",
            "<select",
        ] {
            let at = position(&html, needle);
            assert!(at >= last, "{needle} out of order in {html}");
            last = at;
        }
        assert!(!html.contains("Review Dealer"));
    }

    #[test]
    fn dropdown_starts_with_placeholder_then_all_states() {
        let dealers = vec![dealer(1, "NY"), dealer(2, "NY"), dealer(3, "CA")];
        let html = render(&dealers, &distinct_states(&dealers), false);

        let first_option = position(&html, "<option");
        let placeholder_end = first_option + position(&html[first_option..], "</option>");
        let placeholder = &html[first_option..placeholder_end];
        assert!(placeholder.contains(r#"value="""#), "{placeholder}");
        assert!(placeholder.contains("disabled"), "{placeholder}");
        assert!(placeholder.contains("hidden"), "{placeholder}");
        assert!(placeholder.contains("selected"), "{placeholder}");
        assert!(placeholder.ends_with(">State"), "{placeholder}");

        let all = position(&html, r#"value="All""#);
        let ny = position(&html, r#"value="NY""#);
        let ca = position(&html, r#"value="CA""#);
        assert!(placeholder_end < all && all < ny && ny < ca);
        assert!(html.contains(">All States</option>"));
        assert_eq!(html.matches("<option").count(), 4);
    }

    #[test]
    fn empty_listing_renders_no_rows() {
        let html = render(&[], &["NY".to_string()], false);
        assert_eq!(tbody(&html).matches("<tr").count(), 0);
    }

    #[test]
    fn guest_rows_link_names_without_review_cells() {
        let dealers = vec![dealer(1, "NY"), dealer(3, "CA")];
        let html = render(&dealers, &distinct_states(&dealers), false);
        let body = tbody(&html);

        assert_eq!(body.matches("<tr").count(), 2);
        assert!(body.contains(r#"href="/dealer/1""#));
        assert!(body.contains(r#"href="/dealer/3""#));
        assert!(body.contains(">Dealer 1</a>"));
        assert!(!body.contains("/postreview/"));
        assert!(!body.contains("review_icon"));
        assert!(!html.contains("Review Dealer"));
    }

    #[test]
    fn logged_in_rows_link_to_review_page() {
        let dealers = vec![dealer(1, "NY"), dealer(3, "CA")];
        let html = render(&dealers, &distinct_states(&dealers), true);

        let header = position(&html, ">Review Dealer</th>");
        assert!(position(&html, "</select>") < header);

        let body = tbody(&html);
        for id in [1, 3] {
            let link = position(body, &format!(r#"href="/postreview/{id}""#));
            let anchor_end = link + position(&body[link..], "</a>");
            let anchor = &body[link..anchor_end];
            assert!(anchor.contains("<img"), "{anchor}");
            assert!(anchor.contains(r#"class="review_icon""#), "{anchor}");
            assert!(anchor.contains(r#"alt="Post Review""#), "{anchor}");
            assert!(anchor.contains(&format!(r#"src="{ICON}""#)), "{anchor}");
        }
        assert!(body.contains(r#"href="/dealer/1""#));
    }
}
