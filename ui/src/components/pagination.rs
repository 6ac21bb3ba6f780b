//! Page-number strip. Rendering only; the page arithmetic lives in
//! [`api::pager`].

use dioxus::prelude::*;

/// Pages to render: always the first and last, plus the current page and
/// its neighbours. `None` marks an ellipsis gap.
pub fn page_links(current: usize, total_pages: usize) -> Vec<Option<usize>> {
    let mut links = Vec::new();
    let mut previous = 0;
    for page in 1..=total_pages {
        let keep = page == 1 || page == total_pages || page.abs_diff(current) <= 1;
        if !keep {
            continue;
        }
        if previous != 0 && page > previous + 1 {
            links.push(None);
        }
        links.push(Some(page));
        previous = page;
    }
    links
}

#[component]
pub fn Pagination(current: usize, total_pages: usize, on_select: EventHandler<usize>) -> Element {
    if total_pages <= 1 {
        return rsx! {};
    }
    rsx! {
        nav {
            class: "pagination",
            NavArrow { label: "‹", enabled: current > 1, page: current.saturating_sub(1), on_select }
            for link in page_links(current, total_pages) {
                if let Some(page) = link {
                    button {
                        class: if page == current { "page-link page-current" } else { "page-link" },
                        onclick: move |_| on_select.call(page),
                        "{page}"
                    }
                } else {
                    span { class: "page-gap", "…" }
                }
            }
            NavArrow { label: "›", enabled: current < total_pages, page: current + 1, on_select }
        }
    }
}

#[component]
fn NavArrow(label: String, enabled: bool, page: usize, on_select: EventHandler<usize>) -> Element {
    rsx! {
        button {
            class: "page-link",
            disabled: !enabled,
            onclick: move |_| on_select.call(page),
            "{label}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::page_links;

    #[test]
    fn short_lists_show_every_page() {
        assert_eq!(page_links(1, 1), vec![Some(1)]);
        assert_eq!(page_links(2, 3), vec![Some(1), Some(2), Some(3)]);
    }

    #[test]
    fn long_lists_collapse_with_gaps() {
        assert_eq!(
            page_links(5, 9),
            vec![Some(1), None, Some(4), Some(5), Some(6), None, Some(9)]
        );
        assert_eq!(
            page_links(1, 9),
            vec![Some(1), Some(2), None, Some(9)]
        );
        assert_eq!(
            page_links(9, 9),
            vec![Some(1), None, Some(8), Some(9)]
        );
    }

    #[test]
    fn no_gap_for_adjacent_runs() {
        assert_eq!(
            page_links(3, 5),
            vec![Some(1), Some(2), Some(3), Some(4), Some(5)]
        );
    }
}
