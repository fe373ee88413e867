//! # storefront-core: Pure Domain Logic for Storefront
//!
//! This crate holds the catalog types and the paging logic as pure
//! functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Storefront Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    apps/catalog                                 │   │
//! │  │    IndexPage::load ──► render_page                              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ storefront-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌────────────┐  ┌────────────┐                │   │
//! │  │   │   types   │  │ pagination │  │ validation │                │   │
//! │  │   │  Product  │  │  Page<T>   │  │   rules    │                │   │
//! │  │   │  Category │  │  paginate  │  │   checks   │                │   │
//! │  │   └───────────┘  └────────────┘  └────────────┘                │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  storefront-db (Database Layer)                 │   │
//! │  │              SQLite queries, migrations, repositories           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Category)
//! - [`pagination`] - Page, PageRequest and the generic `paginate`
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Example Usage
//!
//! ```rust
//! use storefront_core::pagination::{paginate, SortDirection};
//!
//! let stock = vec![("kettle", "retail"), ("pallet", "wholesale"), ("apron", "retail")];
//!
//! let page = paginate(
//!     stock,
//!     Some(|p: &(&str, &str)| p.1 == "retail"),
//!     |p| p.0,
//!     SortDirection::Asc,
//!     0,
//!     20,
//! )
//! .unwrap();
//!
//! assert_eq!(page.items, vec![("apron", "retail"), ("kettle", "retail")]);
//! assert_eq!(page.total_count, 2);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod pagination;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use pagination::{no_filter, paginate, Page, PageRequest, SortDirection};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Page size used by the public product listing.
pub const DEFAULT_PAGE_SIZE: i64 = 20;
