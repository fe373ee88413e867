//! # Paginated Listings
//!
//! One paging routine shared by every repository.
//!
//! ## How A Page Is Read
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  fetch_page::<ProductListing>(filter, Name, Asc, page 2, size 20)      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  PageRequest::new(2, 20) ── invalid? → DbError::InvalidRequest         │
//! │       │                               (no query is sent)               │
//! │       ▼                                                                 │
//! │  BEGIN (one read snapshot)                                             │
//! │  SELECT COUNT(*) FROM products WHERE <filter>          → total_count   │
//! │  SELECT ... FROM products WHERE <filter>                               │
//! │     ORDER BY name ASC, rowid ASC LIMIT 20 OFFSET 40    → items         │
//! │  COMMIT                                                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Page { items, total_count, page_index: 2, page_size: 20 }             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `rowid` is the insertion order, so rows with equal sort keys come back in
//! the order they were stored, whichever direction the key is sorted in.

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};
use tracing::debug;

use storefront_core::{Page, PageRequest, SortDirection};

use crate::error::DbResult;

// =============================================================================
// Listing Trait
// =============================================================================

/// A column a listing can be ordered by.
pub trait SortColumn: Copy + Send {
    /// SQL column name. Always a fixed identifier, never user input.
    fn column(&self) -> &'static str;
}

/// Describes how to page through one table.
///
/// Implemented by a zero-sized marker per entity; the repository supplies
/// the filter and sort key values.
pub trait Listing {
    /// Row type decoded from `COLUMNS`.
    type Row: for<'r> FromRow<'r, SqliteRow> + Send + Unpin;

    /// Filter values understood by [`Listing::push_filter`].
    type Filter: Sync;

    type SortKey: SortColumn;

    /// Entity name for logs and errors.
    const ENTITY: &'static str;

    const TABLE: &'static str;

    /// Comma-separated select list matching `Row`.
    const COLUMNS: &'static str;

    /// Appends one predicate per active filter field.
    fn push_filter(filter: &Self::Filter, predicates: &mut Predicates<'_, '_>);
}

// =============================================================================
// Predicates
// =============================================================================

/// Joins filter predicates with `WHERE` / `AND`.
pub struct Predicates<'b, 'args> {
    builder: &'b mut QueryBuilder<'args, Sqlite>,
    any: bool,
}

impl<'b, 'args> Predicates<'b, 'args> {
    pub fn new(builder: &'b mut QueryBuilder<'args, Sqlite>) -> Self {
        Predicates {
            builder,
            any: false,
        }
    }

    /// Starts the next predicate and returns the builder to write it.
    pub fn and(&mut self) -> &mut QueryBuilder<'args, Sqlite> {
        self.builder.push(if self.any { " AND " } else { " WHERE " });
        self.any = true;
        &mut *self.builder
    }
}

/// Builds a `LIKE ... ESCAPE '\'` pattern matching `term` anywhere.
pub fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

// =============================================================================
// Fetch Page
// =============================================================================

/// Reads one page of `L` plus the filtered total.
///
/// ## Errors
/// - `DbError::InvalidRequest` for `page_size <= 0` or `page_index < 0`
/// - Store failures (`ConnectionFailed`, `PoolExhausted`, ...) unchanged
pub async fn fetch_page<L: Listing>(
    pool: &SqlitePool,
    filter: &L::Filter,
    sort: L::SortKey,
    direction: SortDirection,
    page_index: i64,
    page_size: i64,
) -> DbResult<Page<L::Row>> {
    let request = PageRequest::new(page_index, page_size)?;

    debug!(
        entity = L::ENTITY,
        page_index,
        page_size,
        sort = sort.column(),
        direction = direction.as_sql(),
        "Fetching page"
    );

    let mut tx = pool.begin().await?;

    let mut count_query: QueryBuilder<'_, Sqlite> =
        QueryBuilder::new(format!("SELECT COUNT(*) FROM {}", L::TABLE));
    L::push_filter(filter, &mut Predicates::new(&mut count_query));

    let total: i64 = count_query
        .build_query_scalar()
        .fetch_one(&mut *tx)
        .await?;
    let total_count = u64::try_from(total).unwrap_or(0);

    // offset < total_count, and COUNT(*) fits in i64, so the cast is lossless.
    let offset = match request.offset() {
        Some(offset) if offset < total_count => offset as i64,
        _ => {
            tx.commit().await?;
            debug!(entity = L::ENTITY, total_count, "Page is past the end");
            return Ok(Page::beyond_end(total_count, request));
        }
    };
    let limit = i64::try_from(request.limit()).unwrap_or(i64::MAX);

    let mut select: QueryBuilder<'_, Sqlite> =
        QueryBuilder::new(format!("SELECT {} FROM {}", L::COLUMNS, L::TABLE));
    L::push_filter(filter, &mut Predicates::new(&mut select));
    select.push(format!(
        " ORDER BY {} {}, rowid ASC",
        sort.column(),
        direction.as_sql()
    ));
    select.push(" LIMIT ").push_bind(limit);
    select.push(" OFFSET ").push_bind(offset);

    let items: Vec<L::Row> = select.build_query_as().fetch_all(&mut *tx).await?;

    tx.commit().await?;

    debug!(
        entity = L::ENTITY,
        count = items.len(),
        total_count,
        "Page fetched"
    );

    Ok(Page::new(items, total_count, request))
}
