//! # Domain Types
//!
//! Catalog entities used throughout Storefront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │    Product      │   │    Category     │                             │
//! │  │  ─────────────  │   │  ─────────────  │                             │
//! │  │  id (UUID)      │   │  id (UUID)      │                             │
//! │  │  product_type   │   │  name           │                             │
//! │  │  name           │   │  created_date   │                             │
//! │  │  description    │   │  is_active?     │                             │
//! │  │  created_date   │   └─────────────────┘                             │
//! │  │  is_active      │                                                   │
//! │  └─────────────────┘                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both are flat records. Pagination treats them as opaque and only reaches
//! into them through filter predicates and sort keys.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Product type shown on the public listing.
pub const RETAIL_PRODUCT_TYPE: &str = "retail";

// =============================================================================
// Product
// =============================================================================

/// A product in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct Product {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Free-form product type, e.g. "retail" or "wholesale".
    #[cfg_attr(feature = "sqlx", sqlx(rename = "type"))]
    pub product_type: String,

    /// Display name.
    pub name: String,

    /// Description shown under the name.
    pub description: String,

    /// When the product was created.
    #[ts(as = "String")]
    pub created_date: DateTime<Utc>,

    /// Whether the product is active.
    pub is_active: bool,
}

impl Product {
    /// Checks the product type, ignoring ASCII case.
    ///
    /// ## Example
    /// ```rust
    /// # use storefront_core::Product;
    /// # use chrono::Utc;
    /// let product = Product {
    ///     id: "1".into(),
    ///     product_type: "Retail".into(),
    ///     name: "Kettle".into(),
    ///     description: "Stainless".into(),
    ///     created_date: Utc::now(),
    ///     is_active: true,
    /// };
    /// assert!(product.is_type("retail"));
    /// ```
    pub fn is_type(&self, product_type: &str) -> bool {
        self.product_type.eq_ignore_ascii_case(product_type)
    }
}

// =============================================================================
// Category
// =============================================================================

/// A product category.
///
/// `is_active` is tri-state: `None` means the flag was never set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[ts(as = "String")]
    pub created_date: DateTime<Utc>,
    pub is_active: Option<bool>,
}

impl Category {
    /// Unset counts as inactive.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.is_active.unwrap_or(false)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
