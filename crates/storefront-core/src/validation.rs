//! # Validation Module
//!
//! Input validation utilities for Storefront.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Catalog app (CLI flags, config)                              │
//! │  └── Type validation (parsing)                                         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Paging input (page_index, page_size)                              │
//! │  └── Entity field rules before insert                                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── NOT NULL constraints                                              │
//! │  └── PRIMARY KEY constraints                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use storefront_core::validation::{validate_page_size, validate_product_name};
//!
//! validate_page_size(20).unwrap();
//! validate_product_name("Kettle").unwrap();
//! ```

use uuid::Uuid;

use crate::error::ValidationError;
use crate::types::{Category, Product};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest accepted name (product or category).
pub const MAX_NAME_LEN: usize = 200;

/// Longest accepted product type.
pub const MAX_TYPE_LEN: usize = 50;

/// Longest accepted description.
pub const MAX_DESCRIPTION_LEN: usize = 2000;

// =============================================================================
// Paging Validators
// =============================================================================

/// Validates a page size.
///
/// ## Rules
/// - Must be positive (> 0). Never clamped.
pub fn validate_page_size(page_size: i64) -> ValidationResult<()> {
    if page_size <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "page_size".to_string(),
            value: page_size,
        });
    }

    Ok(())
}

/// Validates a page index.
///
/// ## Rules
/// - Must be zero or greater. Indices past the last page are valid.
pub fn validate_page_index(page_index: i64) -> ValidationResult<()> {
    if page_index < 0 {
        return Err(ValidationError::MustNotBeNegative {
            field: "page_index".to_string(),
            value: page_index,
        });
    }

    Ok(())
}

// =============================================================================
// String Validators
// =============================================================================

fn validate_required(field: &str, value: &str, max: usize) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }

    Ok(())
}

/// Validates an entity ID (UUID).
///
/// ## Example
/// ```rust
/// use storefront_core::validation::validate_id;
///
/// assert!(validate_id("550e8400-e29b-41d4-a716-446655440000").is_ok());
/// assert!(validate_id("not-a-uuid").is_err());
/// ```
pub fn validate_id(id: &str) -> ValidationResult<()> {
    Uuid::parse_str(id.trim())
        .map(|_| ())
        .map_err(|e| ValidationError::InvalidFormat {
            field: "id".to_string(),
            reason: e.to_string(),
        })
}

/// Validates a product or category name.
///
/// ## Rules
/// - Must not be empty
/// - At most 200 characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    validate_required("name", name, MAX_NAME_LEN)
}

/// Validates a product type such as "retail".
pub fn validate_product_type(product_type: &str) -> ValidationResult<()> {
    validate_required("type", product_type, MAX_TYPE_LEN)
}

pub fn validate_description(description: &str) -> ValidationResult<()> {
    validate_required("description", description, MAX_DESCRIPTION_LEN)
}

/// Validates a name-contains search term.
///
/// ## Returns
/// The trimmed term, or `None` if it was blank (no filtering).
pub fn validate_search_term(term: &str) -> ValidationResult<Option<String>> {
    let term = term.trim();

    if term.is_empty() {
        return Ok(None);
    }

    if term.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "query".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(Some(term.to_string()))
}

// =============================================================================
// Entity Validators
// =============================================================================

/// Validates every required product field before insert.
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    validate_id(&product.id)?;
    validate_product_type(&product.product_type)?;
    validate_product_name(&product.name)?;
    validate_description(&product.description)?;
    Ok(())
}

/// Validates a category before insert.
pub fn validate_category(category: &Category) -> ValidationResult<()> {
    validate_id(&category.id)?;
    validate_product_name(&category.name)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
