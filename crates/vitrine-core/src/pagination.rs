//! Pagination window computation.
//!
//! Given the current page and the total page count, compute the bounded list
//! of page links to render. The window always contains the first and last
//! page; gaps are bridged by ellipsis entries that carry the nearest page
//! beyond the visible run as their jump target.
//!
//! Window rules:
//! - `total <= max_visible`: every page, verbatim
//! - otherwise the output has exactly `max_visible` entries: first page, an
//!   inner run of consecutive pages centered on `current` (clamped so it
//!   never runs off either end), and the last page, with an ellipsis on each
//!   side that has a gap
//! - `current` is clamped into `[1, total]` before anything else
//!
//! Output is fully determined by `(current, total, max_visible)`.

use serde::Serialize;

/// One rendered pagination entry: a page number or an ellipsis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageLink {
    pub text: String,
    pub page: u32,
    pub is_current: bool,
}

impl PageLink {
    fn number(page: u32, current: u32) -> Self {
        Self {
            text: page.to_string(),
            page,
            is_current: page == current,
        }
    }

    fn ellipsis(jump_target: u32) -> Self {
        Self {
            text: "...".to_string(),
            page: jump_target,
            is_current: false,
        }
    }
}

/// Compute the pagination window.
///
/// `total` below 1 is treated as a single page. A `max_visible` below 5
/// cannot host `first, ellipsis, current, ellipsis, last` and is clamped up
/// to 5.
pub fn window(current: u32, total: u32, max_visible: u32) -> Vec<PageLink> {
    let total = total.max(1);
    let current = current.clamp(1, total);

    if total <= max_visible {
        return (1..=total).map(|p| PageLink::number(p, current)).collect();
    }

    let max_visible = max_visible.max(5);
    if total <= max_visible {
        return (1..=total).map(|p| PageLink::number(p, current)).collect();
    }

    // Inner slots sit between the always-shown first and last page.
    let inner = max_visible - 2;
    let mut start = current.saturating_sub((inner - 1) / 2).max(2);
    if start + inner - 1 > total - 1 {
        start = total - inner;
    }
    let mut end = start + inner - 1;

    // An ellipsis consumes the outermost slot of the run on its side.
    let left_gap = start > 2;
    let right_gap = end < total - 1;
    if left_gap {
        start += 1;
    }
    if right_gap {
        end -= 1;
    }

    let mut links = Vec::with_capacity(max_visible as usize);
    links.push(PageLink::number(1, current));
    if left_gap {
        links.push(PageLink::ellipsis(start - 1));
    }
    for page in start..=end {
        links.push(PageLink::number(page, current));
    }
    if right_gap {
        links.push(PageLink::ellipsis(end + 1));
    }
    links.push(PageLink::number(total, current));

    links
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(links: &[PageLink]) -> Vec<String> {
        links.iter().map(|l| l.text.clone()).collect()
    }

    #[test]
    fn single_page() {
        let links = window(1, 1, 7);
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].text, "1");
        assert_eq!(links[0].page, 1);
        assert!(links[0].is_current);
    }

    #[test]
    fn out_of_range_current_clamps() {
        assert_eq!(window(5, 1, 7), window(1, 1, 7));
        assert_eq!(window(0, 10, 7), window(1, 10, 7));
        assert_eq!(window(99, 10, 7), window(10, 10, 7));
    }

    #[test]
    fn small_totals_show_every_page() {
        let links = window(3, 7, 7);
        assert_eq!(texts(&links), vec!["1", "2", "3", "4", "5", "6", "7"]);
        assert!(links[2].is_current);
    }

    #[test]
    fn near_start_keeps_left_run_solid() {
        let links = window(2, 20, 7);
        assert_eq!(texts(&links), vec!["1", "2", "3", "4", "5", "...", "20"]);
        // Ellipsis jumps just past the visible run.
        assert_eq!(links[5].page, 6);
    }

    #[test]
    fn near_end_keeps_right_run_solid() {
        let links = window(18, 20, 7);
        assert_eq!(texts(&links), vec!["1", "...", "16", "17", "18", "19", "20"]);
        assert_eq!(links[1].page, 15);
    }

    #[test]
    fn middle_shows_both_ellipses() {
        let links = window(10, 20, 7);
        assert_eq!(texts(&links), vec!["1", "...", "9", "10", "11", "...", "20"]);
        assert_eq!(links[1].page, 8);
        assert_eq!(links[5].page, 12);
        assert!(links[3].is_current);
    }

    #[test]
    fn window_width_is_exact() {
        for total in [8u32, 9, 20, 100, 1000] {
            for current in 1..=total.min(40) {
                let links = window(current, total, 7);
                assert_eq!(links.len(), 7, "total={total} current={current}");
            }
        }
    }

    #[test]
    fn always_contains_first_last_and_current() {
        for total in 1..=60u32 {
            for current in 1..=total {
                let links = window(current, total, 7);
                assert!(links.iter().any(|l| l.page == 1 && !l.text.contains('.')));
                assert!(links.iter().any(|l| l.page == total && !l.text.contains('.')));
                let current_links: Vec<&PageLink> =
                    links.iter().filter(|l| l.is_current).collect();
                assert_eq!(current_links.len(), 1);
                assert_eq!(current_links[0].page, current);
            }
        }
    }

    #[test]
    fn tiny_max_visible_is_clamped_up() {
        let links = window(5, 10, 3);
        assert_eq!(links.len(), 5);
        assert!(links.iter().any(|l| l.is_current && l.page == 5));
    }

    #[test]
    fn all_pages_are_in_range() {
        for current in 1..=30u32 {
            for link in window(current, 30, 7) {
                assert!(link.page >= 1 && link.page <= 30);
            }
        }
    }
}
