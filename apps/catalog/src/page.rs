//! # Index Page
//!
//! The product listing: one page of products of the configured type,
//! ordered by name.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  IndexPage::load(db, options, page_id)                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  filter: type = "retail" (any case)                                    │
//! │  sort:   name ASC                                                      │
//! │  size:   20                                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Page<Product> ──► render                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::info;

use storefront_core::{Page, Product, SortDirection};
use storefront_db::{Database, ProductFilter, ProductSortKey};

use crate::config::CatalogConfig;
use crate::error::AppResult;

/// How the listing queries products.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingOptions {
    pub product_type: String,
    pub page_size: i64,
    pub sort: ProductSortKey,
    pub direction: SortDirection,
    /// Name substring; blank means no restriction.
    pub search: Option<String>,
}

impl ListingOptions {
    /// Name-ascending listing using the configured type and page size.
    pub fn from_config(config: &CatalogConfig) -> Self {
        ListingOptions {
            product_type: config.product_type.clone(),
            page_size: config.page_size,
            sort: ProductSortKey::Name,
            direction: SortDirection::Asc,
            search: None,
        }
    }

    fn filter(&self) -> AppResult<ProductFilter> {
        let filter = ProductFilter::of_type(self.product_type.as_str());
        match &self.search {
            Some(term) => Ok(filter.name_contains(term)?),
            None => Ok(filter),
        }
    }
}

/// One rendered request's worth of products.
#[derive(Debug, Clone)]
pub struct IndexPage {
    pub products: Page<Product>,
}

impl IndexPage {
    /// Loads page `page_id` (zero-based).
    ///
    /// A page id past the end is not an error: the page is empty and still
    /// carries the total so the renderer can point at the last page.
    pub async fn load(db: &Database, options: &ListingOptions, page_id: i64) -> AppResult<Self> {
        let filter = options.filter()?;
        let products = db
            .products()
            .get_paginated(
                &filter,
                options.sort,
                options.direction,
                page_id,
                options.page_size,
            )
            .await?;

        info!(
            page_id,
            shown = products.len(),
            total = products.total_count,
            "Loaded product page"
        );

        Ok(IndexPage { products })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use storefront_db::repository::product::generate_product_id;
    use storefront_db::DbConfig;

    async fn catalog(products: &[(&str, &str)]) -> Database {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        for (product_type, name) in products {
            db.products()
                .insert(&Product {
                    id: generate_product_id(),
                    product_type: product_type.to_string(),
                    name: name.to_string(),
                    description: format!("About {name}"),
                    created_date: Utc::now(),
                    is_active: true,
                })
                .await
                .unwrap();
        }
        db
    }

    fn options(page_size: i64) -> ListingOptions {
        ListingOptions {
            page_size,
            ..ListingOptions::from_config(&CatalogConfig::default())
        }
    }

    fn names(page: &IndexPage) -> Vec<&str> {
        page.products.items.iter().map(|p| p.name.as_str()).collect()
    }

    #[tokio::test]
    async fn test_lists_retail_products_by_name() {
        let db = catalog(&[
            ("retail", "Teapot"),
            ("wholesale", "Pallet of mugs"),
            ("Retail", "Apron"),
            ("RETAIL", "Kettle"),
        ])
        .await;

        let page = IndexPage::load(&db, &options(20), 0).await.unwrap();

        assert_eq!(names(&page), vec!["Apron", "Kettle", "Teapot"]);
        assert_eq!(page.products.total_count, 3);
        assert_eq!(page.products.page_size, 20);
    }

    #[tokio::test]
    async fn test_walks_every_page() {
        let db = catalog(&[
            ("retail", "E"),
            ("retail", "B"),
            ("retail", "D"),
            ("retail", "A"),
            ("retail", "C"),
        ])
        .await;

        let mut seen = Vec::new();
        let first = IndexPage::load(&db, &options(2), 0).await.unwrap();
        for page_id in 0..first.products.page_count() as i64 {
            let page = IndexPage::load(&db, &options(2), page_id).await.unwrap();
            seen.extend(page.products.items.into_iter().map(|p| p.name));
        }

        assert_eq!(seen, vec!["A", "B", "C", "D", "E"]);
    }

    #[tokio::test]
    async fn test_page_past_end_is_empty() {
        let db = catalog(&[("retail", "A"), ("retail", "B"), ("retail", "C")]).await;

        let page = IndexPage::load(&db, &options(2), 5).await.unwrap();

        assert!(page.products.is_empty());
        assert_eq!(page.products.total_count, 3);
    }

    #[tokio::test]
    async fn test_search_narrows_and_blank_search_does_not() {
        let db = catalog(&[("retail", "Teapot"), ("retail", "Kettle"), ("retail", "Tea towel")]).await;

        let mut narrowed = options(20);
        narrowed.search = Some("tea".to_string());
        let page = IndexPage::load(&db, &narrowed, 0).await.unwrap();
        assert_eq!(names(&page), vec!["Tea towel", "Teapot"]);
        assert_eq!(page.products.total_count, 2);

        let mut blank = options(20);
        blank.search = Some("  ".to_string());
        let page = IndexPage::load(&db, &blank, 0).await.unwrap();
        assert_eq!(page.products.total_count, 3);
    }

    #[tokio::test]
    async fn test_negative_page_id_is_bad_input() {
        let db = catalog(&[]).await;

        let err = IndexPage::load(&db, &options(20), -1).await.unwrap_err();

        assert_eq!(err.exit_code(), 2);
    }
}
