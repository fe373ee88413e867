//! # Repository Module
//!
//! Database repository implementations for Storefront.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    One Listing, Many Entities                           │
//! │                                                                         │
//! │  Catalog page                                                          │
//! │       │                                                                 │
//! │       │  db.products().get_paginated(&filter, Name, Asc, page, 20)     │
//! │       ▼                                                                 │
//! │  ProductRepository ──┐                                                 │
//! │  CategoryRepository ─┼──► listing::fetch_page::<L: Listing>            │
//! │                      │     (validate → count → select, one snapshot)   │
//! │                      ▼                                                  │
//! │                 SQLite Database                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`ProductRepository`](product::ProductRepository) - Product listing and CRUD
//! - [`CategoryRepository`](category::CategoryRepository) - Category listing and CRUD

pub mod category;
pub mod listing;
pub mod product;
