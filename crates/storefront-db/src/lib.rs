//! # storefront-db: Database Layer for Storefront
//!
//! This crate provides database access for the catalog.
//! It uses SQLite for storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Storefront Data Flow                              │
//! │                                                                         │
//! │  Catalog page (IndexPage::load)                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  storefront-db (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repositories │    │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │    │  ProductRepo  │    │  (embedded)  │  │   │
//! │  │   │  SqlitePool   │◄───│  CategoryRepo │    │ 001_init.sql │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite Database (storefront.db)                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Paginated listings and repositories
//!
//! ## Usage
//!
//! ```rust,ignore
//! use storefront_core::SortDirection;
//! use storefront_db::{Database, DbConfig, ProductFilter, ProductSortKey};
//!
//! let db = Database::new(DbConfig::new("storefront.db")).await?;
//!
//! let page = db
//!     .products()
//!     .get_paginated(&ProductFilter::retail(), ProductSortKey::Name, SortDirection::Asc, 0, 20)
//!     .await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

pub use repository::category::{CategoryFilter, CategoryRepository, CategorySortKey};
pub use repository::listing::{fetch_page, Listing, SortColumn};
pub use repository::product::{ProductFilter, ProductRepository, ProductSortKey};
