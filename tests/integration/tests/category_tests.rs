//! Category use case integration tests
//!
//! Run with: cargo test -p integration-tests --test category_tests

use anyhow::Result;
use catalog_core::CategoryId;
use catalog_service::{
    CreateCategory, CreateCategoryRequest, GetCategory, GetCategoryRequest, UseCase,
};
use integration_tests::{invalid_create_requests, valid_create_request, TestApp};

// ============================================================================
// Create Category Tests
// ============================================================================

#[tokio::test]
async fn test_create_category_is_committed() -> Result<()> {
    let app = TestApp::new();
    let request = valid_create_request();

    let output = CreateCategory::new(&app.ctx).execute(request.clone()).await?;

    assert!(!output.id.is_nil());
    assert_eq!(Some(output.name.as_str()), request.name.as_deref());
    assert_eq!(Some(output.description.as_str()), request.description.as_deref());
    assert_eq!(output.is_active, request.is_active);
    assert_eq!(app.store.committed_len(), 1);
    assert_eq!(app.store.pending_len(), 0);
    Ok(())
}

#[tokio::test]
async fn test_create_with_only_name_uses_defaults() -> Result<()> {
    let app = TestApp::new();

    let output = CreateCategory::new(&app.ctx)
        .execute(CreateCategoryRequest::new("Category Name"))
        .await?;

    assert!(!output.id.is_nil());
    assert_eq!(output.name, "Category Name");
    assert_eq!(output.description, "");
    assert!(output.is_active);
    Ok(())
}

#[tokio::test]
async fn test_create_from_json_request() -> Result<()> {
    let app = TestApp::new();
    let request: CreateCategoryRequest =
        serde_json::from_str(r#"{"name": "Movies", "is_active": false}"#)?;

    let output = CreateCategory::new(&app.ctx).execute(request).await?;
    let json = serde_json::to_value(&output)?;

    assert_eq!(json["name"], "Movies");
    assert_eq!(json["description"], "");
    assert_eq!(json["is_active"], false);
    assert_eq!(json["id"], output.id.to_string());
    Ok(())
}

#[tokio::test]
async fn test_invalid_requests_leave_store_untouched() {
    let app = TestApp::new();

    for (request, message) in invalid_create_requests() {
        let err = CreateCategory::new(&app.ctx)
            .execute(request)
            .await
            .unwrap_err();

        assert!(err.is_validation());
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.to_string(), message);
    }

    assert_eq!(app.store.committed_len(), 0);
    assert_eq!(app.store.pending_len(), 0);
}

// ============================================================================
// Get Category Tests
// ============================================================================

#[tokio::test]
async fn test_create_then_get_round_trip() -> Result<()> {
    let app = TestApp::new();

    let created = CreateCategory::new(&app.ctx)
        .execute(
            CreateCategoryRequest::new("Category Name").description("Category Description"),
        )
        .await?;

    let fetched = GetCategory::new(&app.ctx)
        .execute(GetCategoryRequest::new(created.id))
        .await?;

    assert_eq!(fetched, created);
    assert_eq!(fetched.name, "Category Name");
    assert_eq!(fetched.description, "Category Description");
    assert!(fetched.is_active);
    Ok(())
}

#[tokio::test]
async fn test_get_unknown_category() {
    let app = TestApp::new();
    let id = CategoryId::generate();

    let err = GetCategory::new(&app.ctx)
        .execute(GetCategoryRequest::new(id))
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(err.status_code(), 404);
    assert_eq!(err.to_string(), format!("Category '{id}' not found"));
}

#[tokio::test]
async fn test_many_categories_are_independent() -> Result<()> {
    let app = TestApp::new();
    let mut ids = Vec::new();

    for _ in 0..5 {
        let output = CreateCategory::new(&app.ctx)
            .execute(valid_create_request())
            .await?;
        ids.push(output.id);
    }

    assert_eq!(app.store.committed_len(), 5);
    for id in ids {
        let output = GetCategory::new(&app.ctx)
            .execute(GetCategoryRequest::new(id))
            .await?;
        assert_eq!(output.id, id);
    }
    Ok(())
}

#[tokio::test]
async fn test_rollback_hides_uncommitted_insert() -> Result<()> {
    use catalog_core::traits::CategoryRepository;
    use catalog_core::Category;

    let app = TestApp::new();
    let category = Category::new("Staged Only", "")?;

    app.ctx.category_repo().insert(&category).await?;
    assert_eq!(app.unit_of_work.rollback(), 1);

    let err = GetCategory::new(&app.ctx)
        .execute(GetCategoryRequest::new(category.id()))
        .await
        .unwrap_err();
    assert!(err.is_not_found());
    Ok(())
}
