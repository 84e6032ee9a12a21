//! Test fixtures and data generators

use std::sync::atomic::{AtomicU64, Ordering};

use catalog_service::CreateCategoryRequest;

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// A valid, unique category name
pub fn valid_category_name() -> String {
    format!("Category {}", unique_suffix())
}

/// A valid description well under the length limit
pub fn valid_category_description() -> String {
    format!("Description for category {}", unique_suffix())
}

/// A fully populated, valid create request
pub fn valid_create_request() -> CreateCategoryRequest {
    CreateCategoryRequest::new(valid_category_name())
        .description(valid_category_description())
        .is_active(unique_suffix() % 2 == 0)
}

/// Invalid create requests paired with the error each must produce
pub fn invalid_create_requests() -> Vec<(CreateCategoryRequest, &'static str)> {
    vec![
        (
            CreateCategoryRequest::new("ab"),
            "Name should be at leasts 3 characters long",
        ),
        (
            CreateCategoryRequest::new("a".repeat(256)),
            "Name should be greater than 255 characters long",
        ),
        (
            CreateCategoryRequest {
                description: None,
                ..CreateCategoryRequest::new(valid_category_name())
            },
            "Description should not be null",
        ),
        (
            CreateCategoryRequest::new(valid_category_name()).description("a".repeat(10_001)),
            "Description should be greater than 10000 characters long",
        ),
        (
            CreateCategoryRequest::new("     "),
            "Name should not be empty or null",
        ),
    ]
}
