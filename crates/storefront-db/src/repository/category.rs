//! # Category Repository
//!
//! Database operations for categories. Same listing contract as products.

use sqlx::SqlitePool;
use tracing::debug;
use uuid::Uuid;

use storefront_core::validation::{validate_category, validate_id, validate_search_term, ValidationResult};
use storefront_core::{Category, Page, SortDirection};

use crate::error::{DbError, DbResult};
use crate::repository::listing::{contains_pattern, fetch_page, Listing, Predicates, SortColumn};

const CATEGORY_COLUMNS: &str = "id, name, created_date, is_active";

/// Which categories a listing includes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryFilter {
    /// Only `is_active = true`; an unset flag counts as inactive.
    pub active_only: bool,
    pub name_contains: Option<String>,
}

impl CategoryFilter {
    pub fn active_only(mut self) -> Self {
        self.active_only = true;
        self
    }

    /// Restricts to names containing `term`. A blank term clears the restriction.
    pub fn name_contains(mut self, term: &str) -> ValidationResult<Self> {
        self.name_contains = validate_search_term(term)?;
        Ok(self)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategorySortKey {
    #[default]
    Name,
    CreatedDate,
}

impl SortColumn for CategorySortKey {
    fn column(&self) -> &'static str {
        match self {
            CategorySortKey::Name => "name",
            CategorySortKey::CreatedDate => "created_date",
        }
    }
}

pub struct CategoryListing;

impl Listing for CategoryListing {
    type Row = Category;
    type Filter = CategoryFilter;
    type SortKey = CategorySortKey;

    const ENTITY: &'static str = "Category";
    const TABLE: &'static str = "categories";
    const COLUMNS: &'static str = CATEGORY_COLUMNS;

    fn push_filter(filter: &CategoryFilter, predicates: &mut Predicates<'_, '_>) {
        // NULL = 1 is NULL, so unset rows drop out.
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

/// Repository for category database operations.
#[derive(Debug, Clone)]
pub struct CategoryRepository {
    pool: SqlitePool,
}

impl CategoryRepository {
    pub fn new(pool: SqlitePool) -> Self {
        CategoryRepository { pool }
    }

    /// Returns one page of categories. See
    /// [`ProductRepository::get_paginated`](crate::ProductRepository::get_paginated)
    /// for the paging rules.
    pub async fn get_paginated(
        &self,
        filter: &CategoryFilter,
        sort: CategorySortKey,
        direction: SortDirection,
        page_index: i64,
        page_size: i64,
    ) -> DbResult<Page<Category>> {
        fetch_page::<CategoryListing>(&self.pool, filter, sort, direction, page_index, page_size)
            .await
    }

    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<Category>> {
        validate_id(id)?;

        let category = sqlx::query_as::<_, Category>(&format!(
            "SELECT {CATEGORY_COLUMNS} FROM categories WHERE id = ?1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(category)
    }

    /// Inserts a new category.
    pub async fn insert(&self, category: &Category) -> DbResult<Category> {
        validate_category(category)?;

        debug!(id = %category.id, name = %category.name, "Inserting category");

        let result = sqlx::query(
            r#"
            INSERT INTO categories (id, name, created_date, is_active)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(&category.id)
        .bind(&category.name)
        .bind(category.created_date)
        .bind(category.is_active)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(category.clone()),
            Err(e) => match DbError::from(e) {
                DbError::UniqueViolation { field, .. } => {
                    Err(DbError::duplicate(field, &category.id))
                }
                other => Err(other),
            },
        }
    }

    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categories")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

/// Helper to generate a new category ID.
pub fn generate_category_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Database, DbConfig};
    use chrono::{Duration, TimeZone, Utc};

    fn category(name: &str, is_active: Option<bool>, days: i64) -> Category {
        let base = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        Category {
            id: generate_category_id(),
            name: name.to_string(),
            created_date: base + Duration::days(days),
            is_active,
        }
    }

    async fn seeded(categories: &[Category]) -> CategoryRepository {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.categories();
        for c in categories {
            repo.insert(c).await.unwrap();
        }
        repo
    }

    fn names(page: &Page<Category>) -> Vec<&str> {
        page.items.iter().map(|c| c.name.as_str()).collect()
    }

    #[tokio::test]
    async fn test_active_only_excludes_unset_flag() {
        let repo = seeded(&[
            category("Kitchen", Some(true), 0),
            category("Garden", None, 1),
            category("Bath", Some(false), 2),
            category("Office", Some(true), 3),
        ])
        .await;

        let page = repo
            .get_paginated(
                &CategoryFilter::default().active_only(),
                CategorySortKey::Name,
                SortDirection::Asc,
                0,
                10,
            )
            .await
            .unwrap();

        assert_eq!(names(&page), vec!["Kitchen", "Office"]);
        assert_eq!(page.total_count, 2);
    }

    #[tokio::test]
    async fn test_blank_search_term_lists_everything() {
        let repo = seeded(&[
            category("Kitchen", Some(true), 0),
            category("Garden", Some(true), 1),
        ])
        .await;

        let blank = CategoryFilter::default().name_contains("   ").unwrap();
        assert_eq!(blank.name_contains, None);

        let page = repo
            .get_paginated(&blank, CategorySortKey::Name, SortDirection::Asc, 0, 10)
            .await
            .unwrap();
        assert_eq!(names(&page), vec!["Garden", "Kitchen"]);

        let kitchen = CategoryFilter::default().name_contains(" kit ").unwrap();
        let page = repo
            .get_paginated(&kitchen, CategorySortKey::Name, SortDirection::Asc, 0, 10)
            .await
            .unwrap();
        assert_eq!(names(&page), vec!["Kitchen"]);
    }

    #[test]
    fn test_overlong_search_term_is_rejected() {
        let err = CategoryFilter::default().name_contains(&"k".repeat(500)).unwrap_err();
        assert!(matches!(err, storefront_core::ValidationError::TooLong { .. }));
    }

    #[tokio::test]
    async fn test_paging_by_created_date() {
        let repo = seeded(&[
            category("C", Some(true), 2),
            category("A", Some(true), 0),
            category("B", None, 1),
        ])
        .await;
        let all = CategoryFilter::default();

        let first = repo
            .get_paginated(&all, CategorySortKey::CreatedDate, SortDirection::Desc, 0, 2)
            .await
            .unwrap();
        assert_eq!(names(&first), vec!["C", "B"]);
        assert_eq!(first.page_count(), 2);
        assert!(first.has_next());

        let second = repo
            .get_paginated(&all, CategorySortKey::CreatedDate, SortDirection::Desc, 1, 2)
            .await
            .unwrap();
        assert_eq!(names(&second), vec!["A"]);
        assert!(!second.has_next());

        let beyond = repo
            .get_paginated(&all, CategorySortKey::CreatedDate, SortDirection::Desc, 9, 2)
            .await
            .unwrap();
        assert!(beyond.is_empty());
        assert_eq!(beyond.total_count, 3);
    }

    #[tokio::test]
    async fn test_round_trip_keeps_unset_flag() {
        let garden = category("Garden", None, 0);
        let repo = seeded(std::slice::from_ref(&garden)).await;

        let found = repo.get_by_id(&garden.id).await.unwrap();
        assert_eq!(found, Some(garden));
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_rejects_zero_page_size() {
        let repo = seeded(&[]).await;
        let err = repo
            .get_paginated(&CategoryFilter::default(), CategorySortKey::Name, SortDirection::Asc, 0, 0)
            .await
            .unwrap_err();
        assert!(err.is_invalid_argument());
    }
}
