//! Page-link bar arithmetic for paginated listings.
//!
//! [`page_tokens`] turns a current page and page count into the sequence of
//! numbers and ellipsis markers a client renders. [`PageWindow`] bundles the
//! tokens with the "Showing X to Y of Z" bounds and previous/next targets so
//! every list endpoint returns the same `pagination` object.

use serde::{Serialize, Serializer};

/// Neighbouring page numbers shown on each side of the current page.
pub const DEFAULT_RADIUS: u32 = 2;

/// Page size used when the client does not ask for one.
pub const DEFAULT_PER_PAGE: i64 = 10;

/// Upper bound on a client-requested page size.
pub const MAX_PER_PAGE: i64 = 100;

/// Text of an ellipsis token on the wire.
pub const ELLIPSIS: &str = "...";

// ---------------------------------------------------------------------------
// Tokens
// ---------------------------------------------------------------------------

/// One entry of a page-link bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageToken {
    Page(u32),
    Ellipsis,
}

impl Serialize for PageToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Page(n) => serializer.serialize_u32(*n),
            Self::Ellipsis => serializer.serialize_str(ELLIPSIS),
        }
    }
}

/// Compute the page-link tokens for `current_page` out of `total_pages`.
///
/// Returns an empty sequence when there is at most one page. The first and
/// last pages are always present; runs of hidden pages collapse into a
/// single [`PageToken::Ellipsis`]. `current_page` is clamped into
/// `1..=total_pages`.
pub fn page_tokens(current_page: u32, total_pages: u32, radius: u32) -> Vec<PageToken> {
    if total_pages <= 1 {
        return Vec::new();
    }

    let current = i64::from(current_page.clamp(1, total_pages));
    let total = i64::from(total_pages);
    let radius = i64::from(radius);

    let mut tokens = vec![PageToken::Page(1)];

    if current - radius > 2 {
        tokens.push(PageToken::Ellipsis);
    }

    let start = (current - radius).max(2);
    let end = (current + radius).min(total - 1);
    // Bounded by 2..=total-1, so every page fits in u32.
    tokens.extend((start..=end).map(|p| PageToken::Page(p as u32)));

    if current + radius < total - 1 {
        tokens.push(PageToken::Ellipsis);
    }

    tokens.push(PageToken::Page(total_pages));
    tokens
}

// ---------------------------------------------------------------------------
// Bounds
// ---------------------------------------------------------------------------

/// 1-based item range for a "Showing X to Y of Z" caption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DisplayBounds {
    pub start_index: u64,
    pub end_index: u64,
}

/// Compute the item range shown on `current_page`.
///
/// `items_per_page` of zero is treated as one.
pub fn display_bounds(current_page: u32, items_per_page: u32, total_items: u64) -> DisplayBounds {
    let page = u64::from(current_page.max(1));
    let per_page = u64::from(items_per_page.max(1));
    DisplayBounds {
        start_index: (page - 1) * per_page + 1,
        end_index: (page * per_page).min(total_items),
    }
}

/// Number of pages needed for `total_items` at `items_per_page` each.
pub fn total_pages(total_items: u64, items_per_page: u32) -> u32 {
    let per_page = u64::from(items_per_page.max(1));
    u32::try_from(total_items.div_ceil(per_page)).unwrap_or(u32::MAX)
}

// ---------------------------------------------------------------------------
// Request clamping
// ---------------------------------------------------------------------------

/// Clamp a user-provided page number to at least 1.
pub fn clamp_page(page: Option<i64>) -> u32 {
    u32::try_from(page.unwrap_or(1).max(1)).unwrap_or(u32::MAX)
}

/// Clamp a user-provided page size to `1..=max`, using `default` when absent.
pub fn clamp_per_page(per_page: Option<i64>, default: i64, max: i64) -> u32 {
    let clamped = per_page.unwrap_or(default).max(1).min(max.max(1));
    u32::try_from(clamped).unwrap_or(u32::MAX)
}

/// A clamped page request, ready to turn into `LIMIT`/`OFFSET`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub per_page: u32,
}

impl PageRequest {
    pub fn new(page: Option<i64>, per_page: Option<i64>, default: i64, max: i64) -> Self {
        Self {
            page: clamp_page(page),
            per_page: clamp_per_page(per_page, default, max),
        }
    }

    pub fn limit(&self) -> i64 {
        i64::from(self.per_page)
    }

    pub fn offset(&self) -> i64 {
        i64::from(self.page - 1) * i64::from(self.per_page)
    }

    /// Pull `page` back onto the last page of `total_items`.
    ///
    /// Count before fetching and fetch with the returned request, so the rows
    /// and the reported window describe the same page.
    pub fn clamp_to_total(self, total_items: i64) -> Self {
        let total_items = u64::try_from(total_items).unwrap_or(0);
        let last_page = total_pages(total_items, self.per_page).max(1);
        Self {
            page: self.page.min(last_page),
            ..self
        }
    }

    /// Combine with the total row count reported by the data source.
    pub fn with_total(&self, total_items: i64) -> PaginationQuery {
        PaginationQuery::new(self.page, self.per_page, u64::try_from(total_items).unwrap_or(0))
    }
}

// ---------------------------------------------------------------------------
// Query + window
// ---------------------------------------------------------------------------

/// Listing metadata supplied by the data source on every fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaginationQuery {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_items: u64,
    pub items_per_page: u32,
}

impl PaginationQuery {
    /// Build a query, deriving `total_pages` and clamping `current_page`
    /// into range whenever there is at least one page.
    pub fn new(current_page: u32, items_per_page: u32, total_items: u64) -> Self {
        let items_per_page = items_per_page.max(1);
        let total_pages = total_pages(total_items, items_per_page);
        let current_page = if total_pages > 0 {
            current_page.clamp(1, total_pages)
        } else {
            current_page.max(1)
        };
        Self {
            current_page,
            total_pages,
            total_items,
            items_per_page,
        }
    }
}

/// Everything a client needs to draw a page-link bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageWindow {
    #[serde(flatten)]
    pub query: PaginationQuery,
    /// `false` when there is at most one page and the bar is suppressed.
    pub visible: bool,
    pub tokens: Vec<PageToken>,
    #[serde(flatten)]
    pub bounds: DisplayBounds,
    pub previous_page: Option<u32>,
    pub next_page: Option<u32>,
}

impl PageWindow {
    pub fn new(query: PaginationQuery, radius: u32) -> Self {
        let tokens = page_tokens(query.current_page, query.total_pages, radius);
        let bounds = display_bounds(query.current_page, query.items_per_page, query.total_items);
        let previous_page = (query.current_page > 1).then(|| query.current_page - 1);
        let next_page =
            (query.current_page < query.total_pages).then(|| query.current_page + 1);
        Self {
            query,
            visible: query.total_pages > 1,
            tokens,
            bounds,
            previous_page,
            next_page,
        }
    }
}

impl From<PaginationQuery> for PageWindow {
    fn from(query: PaginationQuery) -> Self {
        Self::new(query, DEFAULT_RADIUS)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use PageToken::{Ellipsis, Page};

    // -- page_tokens --

    #[test]
    fn single_page_renders_nothing() {
        assert!(page_tokens(1, 1, DEFAULT_RADIUS).is_empty());
        assert!(page_tokens(1, 0, DEFAULT_RADIUS).is_empty());
    }

    #[test]
    fn first_page_of_ten() {
        assert_eq!(
            page_tokens(1, 10, DEFAULT_RADIUS),
            vec![Page(1), Page(2), Page(3), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn middle_page_of_ten() {
        assert_eq!(
            page_tokens(5, 10, DEFAULT_RADIUS),
            vec![
                Page(1),
                Ellipsis,
                Page(3),
                Page(4),
                Page(5),
                Page(6),
                Page(7),
                Ellipsis,
                Page(10)
            ]
        );
    }

    #[test]
    fn last_page_of_ten() {
        assert_eq!(
            page_tokens(10, 10, DEFAULT_RADIUS),
            vec![Page(1), Ellipsis, Page(8), Page(9), Page(10)]
        );
    }

    #[test]
    fn two_pages_have_no_ellipsis() {
        assert_eq!(page_tokens(1, 2, DEFAULT_RADIUS), vec![Page(1), Page(2)]);
        assert_eq!(page_tokens(2, 2, DEFAULT_RADIUS), vec![Page(1), Page(2)]);
    }

    #[test]
    fn no_ellipsis_when_gap_is_empty() {
        // Page 4 reaches down to page 2, so nothing is hidden after page 1.
        assert_eq!(
            page_tokens(4, 7, DEFAULT_RADIUS),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Page(6), Page(7)]
        );
    }

    #[test]
    fn out_of_range_page_is_clamped() {
        assert_eq!(page_tokens(99, 10, DEFAULT_RADIUS), page_tokens(10, 10, DEFAULT_RADIUS));
        assert_eq!(page_tokens(0, 10, DEFAULT_RADIUS), page_tokens(1, 10, DEFAULT_RADIUS));
    }

    #[test]
    fn pages_are_strictly_increasing() {
        for total in 2..=25 {
            for current in 1..=total {
                let pages: Vec<u32> = page_tokens(current, total, DEFAULT_RADIUS)
                    .into_iter()
                    .filter_map(|t| match t {
                        Page(n) => Some(n),
                        Ellipsis => None,
                    })
                    .collect();
                assert!(pages.windows(2).all(|w| w[0] < w[1]));
                assert_eq!(pages.first(), Some(&1));
                assert_eq!(pages.last(), Some(&total));
                assert!(pages.contains(&current));
            }
        }
    }

    #[test]
    fn tokens_serialize_as_numbers_and_ellipsis() {
        let json = serde_json::to_value(page_tokens(10, 10, DEFAULT_RADIUS)).unwrap();
        assert_eq!(json, serde_json::json!([1, "...", 8, 9, 10]));
    }

    // -- display_bounds --

    #[test]
    fn bounds_on_full_page() {
        let bounds = display_bounds(2, 10, 25);
        assert_eq!(bounds.start_index, 11);
        assert_eq!(bounds.end_index, 20);
    }

    #[test]
    fn bounds_on_partial_last_page() {
        let bounds = display_bounds(3, 10, 25);
        assert_eq!(bounds.start_index, 21);
        assert_eq!(bounds.end_index, 25);
    }

    // -- total_pages --

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(5, 0), 5);
    }

    // -- clamping --

    #[test]
    fn clamp_page_floors_at_one() {
        assert_eq!(clamp_page(None), 1);
        assert_eq!(clamp_page(Some(0)), 1);
        assert_eq!(clamp_page(Some(-3)), 1);
        assert_eq!(clamp_page(Some(7)), 7);
    }

    #[test]
    fn clamp_per_page_respects_bounds() {
        assert_eq!(clamp_per_page(None, 10, 100), 10);
        assert_eq!(clamp_per_page(Some(500), 10, 100), 100);
        assert_eq!(clamp_per_page(Some(0), 10, 100), 1);
        assert_eq!(clamp_per_page(Some(25), 10, 100), 25);
    }

    #[test]
    fn page_request_offset() {
        let request = PageRequest::new(Some(3), Some(20), DEFAULT_PER_PAGE, MAX_PER_PAGE);
        assert_eq!(request.limit(), 20);
        assert_eq!(request.offset(), 40);
    }

    #[test]
    fn page_past_the_end_fetches_the_last_page() {
        let request = PageRequest::new(Some(9), Some(10), DEFAULT_PER_PAGE, MAX_PER_PAGE)
            .clamp_to_total(25);
        assert_eq!(request.page, 3);
        assert_eq!(request.offset(), 20);

        let query = request.with_total(25);
        assert_eq!(query.current_page, 3);
        let window = PageWindow::from(query);
        assert_eq!(window.bounds.start_index, 21);
        assert_eq!(window.bounds.end_index, 25);
    }

    #[test]
    fn empty_listing_stays_on_first_page() {
        let request = PageRequest::new(Some(4), Some(10), DEFAULT_PER_PAGE, MAX_PER_PAGE)
            .clamp_to_total(0);
        assert_eq!(request.page, 1);
        assert_eq!(request.offset(), 0);
    }

    #[test]
    fn page_in_range_is_untouched() {
        let request = PageRequest::new(Some(2), Some(10), DEFAULT_PER_PAGE, MAX_PER_PAGE);
        assert_eq!(request.clamp_to_total(25), request);
    }

    // -- PageWindow --

    #[test]
    fn window_for_middle_page() {
        let window = PageWindow::from(PaginationQuery::new(2, 10, 25));
        assert!(window.visible);
        assert_eq!(window.query.total_pages, 3);
        assert_eq!(window.previous_page, Some(1));
        assert_eq!(window.next_page, Some(3));
        assert_eq!(window.bounds.start_index, 11);
        assert_eq!(window.bounds.end_index, 20);
    }

    #[test]
    fn window_disables_prev_and_next_at_edges() {
        let first = PageWindow::from(PaginationQuery::new(1, 10, 25));
        assert_eq!(first.previous_page, None);
        let last = PageWindow::from(PaginationQuery::new(3, 10, 25));
        assert_eq!(last.next_page, None);
    }

    #[test]
    fn window_hidden_for_single_page() {
        let window = PageWindow::from(PaginationQuery::new(1, 10, 4));
        assert!(!window.visible);
        assert!(window.tokens.is_empty());
        assert_eq!(window.next_page, None);
    }

    #[test]
    fn query_clamps_page_past_the_end() {
        let query = PaginationQuery::new(9, 10, 25);
        assert_eq!(query.current_page, 3);
    }

    #[test]
    fn window_serializes_flat() {
        let json = serde_json::to_value(PageWindow::from(PaginationQuery::new(2, 10, 25))).unwrap();
        assert_eq!(json["current_page"], 2);
        assert_eq!(json["total_items"], 25);
        assert_eq!(json["start_index"], 11);
        assert_eq!(json["tokens"], serde_json::json!([1, 2, 3]));
    }
}
