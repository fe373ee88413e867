//! # Product Repository
//!
//! Database operations for products.
//!
//! ## Key Operations
//! - Filtered, sorted, paginated listing (`get_paginated`)
//! - Lookup by id
//! - Insert (seeding and admin tooling)
//!
//! ## Listing Filter
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ProductFilter::retail()                                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  WHERE type = 'retail' COLLATE NOCASE                                  │
//! │                                                                         │
//! │  ┌──────────┬───────────┬──────────────┐                               │
//! │  │ type     │ name      │              │                               │
//! │  ├──────────┼───────────┼──────────────┤                               │
//! │  │ retail   │ Kettle    │ ← MATCH      │                               │
//! │  │ RETAIL   │ Apron     │ ← MATCH      │                               │
//! │  │ wholesale│ Pallet    │              │                               │
//! │  └──────────┴───────────┴──────────────┘                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::str::FromStr;

use sqlx::SqlitePool;
use tracing::debug;
use uuid::Uuid;

use storefront_core::validation::{validate_id, validate_product, validate_search_term, ValidationResult};
use storefront_core::{Page, Product, SortDirection, ValidationError, RETAIL_PRODUCT_TYPE};

use crate::error::{DbError, DbResult};
use crate::repository::listing::{contains_pattern, fetch_page, Listing, Predicates, SortColumn};

const PRODUCT_COLUMNS: &str = "id, type, name, description, created_date, is_active";

// =============================================================================
// Filter & Sort
// =============================================================================

/// Which products a listing includes. The default includes everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    /// Exact product type, compared ignoring ASCII case.
    pub product_type: Option<String>,

    /// Skip inactive products.
    pub active_only: bool,

    /// Substring of the name, compared ignoring ASCII case.
    pub name_contains: Option<String>,
}

impl ProductFilter {
    /// Products of one type.
    ///
    /// The match folds ASCII case only (`COLLATE NOCASE`), so "RETAIL" and
    /// "retail" agree but non-ASCII letters must match exactly.
    pub fn of_type(product_type: impl Into<String>) -> Self {
        ProductFilter {
            product_type: Some(product_type.into()),
            ..ProductFilter::default()
        }
    }

    /// The public listing filter: type "retail", any case.
    pub fn retail() -> Self {
        ProductFilter::of_type(RETAIL_PRODUCT_TYPE)
    }

    pub fn active_only(mut self) -> Self {
        self.active_only = true;
        self
    }

    /// Restricts to names containing `term`. A blank term clears the restriction.
    pub fn name_contains(mut self, term: &str) -> ValidationResult<Self> {
        self.name_contains = validate_search_term(term)?;
        Ok(self)
    }

    /// The same predicate evaluated in memory.
    ///
    /// Agrees with the SQL form: NOCASE and LIKE both fold ASCII only.
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(product_type) = &self.product_type {
            if !product.is_type(product_type) {
                return false;
            }
        }

        if self.active_only && !product.is_active {
            return false;
        }

        if let Some(term) = &self.name_contains {
            let name = product.name.to_ascii_lowercase();
            if !name.contains(&term.to_ascii_lowercase()) {
                return false;
            }
        }

        true
    }
}

/// Columns a product listing can be ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProductSortKey {
    #[default]
    Name,
    Type,
    CreatedDate,
}

impl SortColumn for ProductSortKey {
    fn column(&self) -> &'static str {
        match self {
            ProductSortKey::Name => "name",
            ProductSortKey::Type => "type",
            ProductSortKey::CreatedDate => "created_date",
        }
    }
}

impl FromStr for ProductSortKey {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(ProductSortKey::Name),
            "type" => Ok(ProductSortKey::Type),
            "created_date" | "created" => Ok(ProductSortKey::CreatedDate),
            other => Err(ValidationError::InvalidFormat {
                field: "sort".to_string(),
                reason: format!("unknown product sort key '{other}'"),
            }),
        }
    }
}

/// Listing description for the `products` table.
pub struct ProductListing;

impl Listing for ProductListing {
    type Row = Product;
    type Filter = ProductFilter;
    type SortKey = ProductSortKey;

    const ENTITY: &'static str = "Product";
    const TABLE: &'static str = "products";
    const COLUMNS: &'static str = PRODUCT_COLUMNS;

    fn push_filter(filter: &ProductFilter, predicates: &mut Predicates<'_, '_>) {
        if let Some(product_type) = &filter.product_type {
            predicates
                .and()
                .push("type = ")
                .push_bind(product_type.clone())
                .push(" COLLATE NOCASE");
        }

        if filter.active_only {
            predicates.and().push("is_active = 1");
        }

        if let Some(term) = &filter.name_contains {
            predicates
                .and()
                .push("name LIKE ")
                .push_bind(contains_pattern(term))
                .push(" ESCAPE '\\'");
        }
    }
}

// =============================================================================
// Repository
// =============================================================================

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ProductRepository::new(pool);
///
/// let page = repo
///     .get_paginated(&ProductFilter::retail(), ProductSortKey::Name, SortDirection::Asc, 0, 20)
///     .await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Returns one page of products matching `filter`.
    ///
    /// ## Arguments
    /// * `filter` - Which products to include (`ProductFilter::default()` for all)
    /// * `sort` - Column to order by; ties keep insertion order
    /// * `direction` - Ascending or descending
    /// * `page_index` - Zero-based page (>= 0); past the end yields an empty page
    /// * `page_size` - Products per page (> 0)
    ///
    /// ## Returns
    /// * `Ok(Page<Product>)` - Items plus the filtered total
    /// * `Err(DbError::InvalidRequest)` - Bad paging input
    pub async fn get_paginated(
        &self,
        filter: &ProductFilter,
        sort: ProductSortKey,
        direction: SortDirection,
        page_index: i64,
        page_size: i64,
    ) -> DbResult<Page<Product>> {
        fetch_page::<ProductListing>(&self.pool, filter, sort, direction, page_index, page_size)
            .await
    }

    /// Gets a product by its ID.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - Product found
    /// * `Ok(None)` - Product not found
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<Product>> {
        validate_id(id)?;

        let product = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = ?1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    /// Inserts a new product.
    ///
    /// ## Returns
    /// * `Ok(Product)` - Inserted product
    /// * `Err(DbError::InvalidRequest)` - Product failed validation
    /// * `Err(DbError::UniqueViolation)` - ID already exists
    pub async fn insert(&self, product: &Product) -> DbResult<Product> {
        validate_product(product)?;

        debug!(id = %product.id, name = %product.name, "Inserting product");

        let result = sqlx::query(
            r#"
            INSERT INTO products (id, type, name, description, created_date, is_active)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(&product.id)
        .bind(&product.product_type)
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.created_date)
        .bind(product.is_active)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(product.clone()),
            Err(e) => match DbError::from(e) {
                DbError::UniqueViolation { field, .. } => Err(DbError::duplicate(field, &product.id)),
                other => Err(other),
            },
        }
    }

    /// Counts all products (for diagnostics and seeding).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

/// Helper to generate a new product ID.
pub fn generate_product_id() -> String {
    Uuid::new_v4().to_string()
}

// =============================================================================
// Unit Tests
// =============================================================================
