//! # Pagination
//!
//! Filtered, sorted, offset-based paging over any collection.
//!
//! ## Query Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      paginate(source, ...)                              │
//! │                                                                         │
//! │  source ──► filter (optional) ──► stable sort by key ──► slice         │
//! │                      │                                      │           │
//! │                      ▼                                      ▼           │
//! │               total_count                        items[offset..+size]  │
//! │                                                                         │
//! │  offset = page_index * page_size                                       │
//! │                                                                         │
//! │  [B, A, C] size=2  ─►  page 0: [A, B]   page 1: [C]   page 5: []       │
//! │                        total_count = 3 on every page                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ordering
//! Sorting is stable in both directions: descending reverses the key
//! comparison only, so records with equal keys keep their input order on
//! every page.
//!
//! The store-backed repositories in `storefront-db` produce the same
//! [`Page`] from SQL, validated by the same [`PageRequest`].

use std::cmp::Reverse;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreResult;
use crate::validation::{validate_page_index, validate_page_size};

// =============================================================================
// Sort Direction
// =============================================================================

/// Sort direction for paginated queries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum SortDirection {
    /// Smallest key first.
    #[default]
    Asc,
    /// Largest key first.
    Desc,
}

impl SortDirection {
    /// Converts a `sort_descending` flag.
    #[inline]
    pub const fn from_descending(descending: bool) -> Self {
        if descending {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        }
    }

    /// Returns the SQL keyword for this direction.
    pub const fn as_sql(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

// =============================================================================
// Page Request
// =============================================================================

/// A validated page index and page size.
///
/// Construction is the only place paging input is checked, so anything
/// holding a `PageRequest` can trust `page_size > 0`.
///
/// ## Example
/// ```rust
/// use storefront_core::pagination::PageRequest;
///
/// let request = PageRequest::new(2, 20).unwrap();
/// assert_eq!(request.offset(), Some(40));
/// assert_eq!(request.limit(), 20);
///
/// assert!(PageRequest::new(0, 0).is_err());
/// assert!(PageRequest::new(-1, 20).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page_index: u64,
    page_size: u64,
}

impl PageRequest {
    /// Validates raw paging input.
    ///
    /// ## Errors
    /// - `page_size <= 0` → `ValidationError::MustBePositive`
    /// - `page_index < 0` → `ValidationError::MustNotBeNegative`
    pub fn new(page_index: i64, page_size: i64) -> CoreResult<Self> {
        validate_page_size(page_size)?;
        validate_page_index(page_index)?;

        Ok(PageRequest {
            page_index: page_index.unsigned_abs(),
            page_size: page_size.unsigned_abs(),
        })
    }

    /// Zero-based page index.
    #[inline]
    pub const fn page_index(&self) -> u64 {
        self.page_index
    }

    #[inline]
    pub const fn page_size(&self) -> u64 {
        self.page_size
    }

    /// Number of records to skip, or `None` if it does not fit in a `u64`.
    ///
    /// An overflowing offset is necessarily past the end of any real data
    /// set, so callers treat `None` as "beyond the last page".
    #[inline]
    pub const fn offset(&self) -> Option<u64> {
        self.page_index.checked_mul(self.page_size)
    }

    #[inline]
    pub const fn limit(&self) -> u64 {
        self.page_size
    }
}

// =============================================================================
// Page
// =============================================================================

/// One page of a filtered, ordered result set.
///
/// ## Invariant
/// `items.len() == min(page_size, total_count - page_index * page_size)`
/// while the offset is inside the result set, otherwise `items` is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Page<T> {
    /// Records on this page, in query order.
    pub items: Vec<T>,
    /// Size of the whole filtered set, not just this page.
    pub total_count: u64,
    pub page_index: u64,
    pub page_size: u64,
}

impl<T> Page<T> {
    /// Builds a page for the given request.
    pub fn new(items: Vec<T>, total_count: u64, request: PageRequest) -> Self {
        Page {
            items,
            total_count,
            page_index: request.page_index(),
            page_size: request.page_size(),
        }
    }

    /// A page past the end of the result set.
    pub fn beyond_end(total_count: u64, request: PageRequest) -> Self {
        Page::new(Vec::new(), total_count, request)
    }

    /// Number of pages needed to show every record (0 for an empty set).
    pub fn page_count(&self) -> u64 {
        if self.page_size == 0 {
            return 0;
        }
        self.total_count.div_ceil(self.page_size)
    }

    pub fn has_next(&self) -> bool {
        self.page_index.saturating_add(1) < self.page_count()
    }

    pub fn has_previous(&self) -> bool {
        self.page_index > 0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Paginate
// =============================================================================

/// Typed "no filter" for [`paginate`].
///
/// `None` alone can't name the predicate type, so call sites write
/// `paginate(items, no_filter(), ...)` instead of `None::<fn(&T) -> bool>`.
#[inline]
pub fn no_filter<T>() -> Option<fn(&T) -> bool> {
    None
}

/// Returns one page of `source` after filtering and sorting.
///
/// ## Steps
/// 1. Validate `page_index` / `page_size` (nothing is read on failure)
/// 2. Keep records where `filter` returns true (all records if `None`)
/// 3. Stable-sort by `sort_key` in `direction`
/// 4. Slice `[page_index * page_size, page_index * page_size + page_size)`
///
/// ## Example
/// ```rust
/// use storefront_core::pagination::{no_filter, paginate, SortDirection};
///
/// let names = vec!["B", "A", "C"];
///
/// let page = paginate(names.clone(), no_filter(), |n| *n, SortDirection::Asc, 0, 2).unwrap();
/// assert_eq!(page.items, vec!["A", "B"]);
/// assert_eq!(page.total_count, 3);
///
/// let page = paginate(names, no_filter(), |n| *n, SortDirection::Asc, 5, 2).unwrap();
/// assert!(page.items.is_empty());
/// assert_eq!(page.total_count, 3);
/// ```
pub fn paginate<T, I, F, K, KF>(
    source: I,
    filter: Option<F>,
    mut sort_key: KF,
    direction: SortDirection,
    page_index: i64,
    page_size: i64,
) -> CoreResult<Page<T>>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> bool,
    KF: FnMut(&T) -> K,
    K: Ord,
{
    let request = PageRequest::new(page_index, page_size)?;

    let mut matched: Vec<T> = match filter {
        Some(mut keep) => source.into_iter().filter(|item| keep(item)).collect(),
        None => source.into_iter().collect(),
    };

    // sort_by_cached_key is stable, and Reverse flips the comparison only.
    match direction {
        SortDirection::Asc => matched.sort_by_cached_key(|item| sort_key(item)),
        SortDirection::Desc => matched.sort_by_cached_key(|item| Reverse(sort_key(item))),
    }

    let total_count = matched.len() as u64;

    let offset = match request.offset() {
        Some(offset) if offset < total_count => offset as usize,
        _ => return Ok(Page::beyond_end(total_count, request)),
    };
    let limit = usize::try_from(request.limit()).unwrap_or(usize::MAX);

    let items: Vec<T> = matched.into_iter().skip(offset).take(limit).collect();

    Ok(Page::new(items, total_count, request))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CoreError, ValidationError};

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Item {
        name: &'static str,
        group: u8,
        seq: usize,
    }

    fn items(rows: &[(&'static str, u8)]) -> Vec<Item> {
        rows.iter()
            .enumerate()
            .map(|(seq, &(name, group))| Item { name, group, seq })
            .collect()
    }

    fn names(page: &Page<Item>) -> Vec<&'static str> {
        page.items.iter().map(|i| i.name).collect()
    }

    fn abc() -> Vec<Item> {
        items(&[("B", 0), ("A", 0), ("C", 0)])
    }

    #[test]
    fn test_first_page_sorted_by_name() {
        let page = paginate(abc(), no_filter(), |i| i.name, SortDirection::Asc, 0, 2).unwrap();
        assert_eq!(names(&page), vec!["A", "B"]);
        assert_eq!(page.total_count, 3);
        assert_eq!(page.page_index, 0);
        assert_eq!(page.page_size, 2);
    }

    #[test]
    fn test_last_partial_page() {
        let page = paginate(abc(), no_filter(), |i| i.name, SortDirection::Asc, 1, 2).unwrap();
        assert_eq!(names(&page), vec!["C"]);
        assert_eq!(page.total_count, 3);
    }

    #[test]
    fn test_page_beyond_end_is_empty_with_total() {
        let page = paginate(abc(), no_filter(), |i| i.name, SortDirection::Asc, 5, 2).unwrap();
        assert!(page.is_empty());
        assert_eq!(page.total_count, 3);
        assert!(!page.has_next());
    }

    #[test]
    fn test_descending_order() {
        let page = paginate(abc(), no_filter(), |i| i.name, SortDirection::Desc, 0, 3).unwrap();
        assert_eq!(names(&page), vec!["C", "B", "A"]);
    }

    #[test]
    fn test_zero_page_size_is_rejected() {
        let err = paginate(abc(), no_filter(), |i| i.name, SortDirection::Asc, 0, 0).unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::MustBePositive { value: 0, .. })
        ));

        let err = paginate(abc(), no_filter(), |i| i.name, SortDirection::Asc, 0, -3).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_negative_page_index_is_rejected() {
        let err = paginate(abc(), no_filter(), |i| i.name, SortDirection::Asc, -1, 2).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::MustNotBeNegative { value: -1, .. })
        ));
    }

    #[test]
    fn test_overflowing_offset_is_beyond_end() {
        let page = paginate(abc(), no_filter(), |i| i.name, SortDirection::Asc, i64::MAX, i64::MAX)
            .unwrap();
        assert!(page.is_empty());
        assert_eq!(page.total_count, 3);
    }

    #[test]
    fn test_filter_counts_only_matches() {
        let source = items(&[("a", 1), ("b", 2), ("c", 1), ("d", 2), ("e", 1)]);
        let expected = source.iter().filter(|i| i.group == 1).count() as u64;

        let page = paginate(
            source,
            Some(|i: &Item| i.group == 1),
            |i| i.name,
            SortDirection::Asc,
            0,
            2,
        )
        .unwrap();

        assert_eq!(page.total_count, expected);
        assert_eq!(names(&page), vec!["a", "c"]);
    }

    #[test]
    fn test_pages_cover_every_record_once() {
        let source = items(&[
            ("k", 0),
            ("d", 0),
            ("x", 0),
            ("a", 0),
            ("m", 0),
            ("b", 0),
            ("q", 0),
        ]);

        for size in 1..=8 {
            let first = paginate(source.clone(), no_filter(), |i| i.name, SortDirection::Asc, 0, size)
                .unwrap();
            let mut seen = Vec::new();
            for index in 0..first.page_count() as i64 {
                let page = paginate(
                    source.clone(),
                    no_filter(),
                    |i| i.name,
                    SortDirection::Asc,
                    index,
                    size,
                )
                .unwrap();
                assert_eq!(page.total_count, first.total_count);
                seen.extend(page.items);
            }
            assert_eq!(seen.len() as u64, first.total_count);

            let mut sorted = source.clone();
            sorted.sort_by_key(|i| i.name);
            assert_eq!(seen, sorted);
        }
    }

    #[test]
    fn test_ties_keep_input_order_across_pages() {
        // Every record shares a key, so order must be input order.
        let source = items(&[("e", 7), ("c", 7), ("a", 7), ("d", 7), ("b", 7)]);

        for direction in [SortDirection::Asc, SortDirection::Desc] {
            let mut seqs = Vec::new();
            for index in 0..3 {
                let page =
                    paginate(source.clone(), no_filter(), |i| i.group, direction, index, 2).unwrap();
                seqs.extend(page.items.iter().map(|i| i.seq));
            }
            assert_eq!(seqs, vec![0, 1, 2, 3, 4]);
        }
    }

    #[test]
    fn test_descending_ties_keep_input_order() {
        let source = items(&[("x1", 1), ("y2", 2), ("x2", 1), ("y1", 2)]);
        let page = paginate(source, no_filter(), |i| i.group, SortDirection::Desc, 0, 4).unwrap();
        assert_eq!(names(&page), vec!["y2", "y1", "x1", "x2"]);
    }

    #[test]
    fn test_empty_source() {
        let page = paginate(Vec::<Item>::new(), no_filter(), |i| i.name, SortDirection::Asc, 0, 10)
            .unwrap();
        assert!(page.is_empty());
        assert_eq!(page.total_count, 0);
        assert_eq!(page.page_count(), 0);
        assert!(!page.has_next());
        assert!(!page.has_previous());
    }

    #[test]
    fn test_page_navigation() {
        let request = PageRequest::new(1, 10).unwrap();
        let page: Page<u8> = Page::new(vec![0; 10], 25, request);
        assert_eq!(page.page_count(), 3);
        assert!(page.has_next());
        assert!(page.has_previous());

        let last = PageRequest::new(2, 10).unwrap();
        let page: Page<u8> = Page::new(vec![0; 5], 25, last);
        assert!(!page.has_next());
    }

    #[test]
    fn test_sort_direction_from_flag() {
        assert_eq!(SortDirection::from_descending(false), SortDirection::Asc);
        assert_eq!(SortDirection::from_descending(true), SortDirection::Desc);
        assert_eq!(SortDirection::default(), SortDirection::Asc);
        assert_eq!(SortDirection::Desc.as_sql(), "DESC");
    }
}
