//! Integration tests for the category repository, including the cascading
//! delete of dependent todos.

use assert_matches::assert_matches;
use sqlx::SqlitePool;
use todoboard_core::category::DEFAULT_CATEGORY_COLOR;
use todoboard_core::error::CoreError;
use todoboard_db::error::DbError;
use todoboard_db::models::category::{CreateCategory, UpdateCategory};
use todoboard_db::models::todo::CreateTodo;
use todoboard_db::repositories::{CategoryRepo, TodoRepo};

fn new_category(name: &str, color: Option<&str>) -> CreateCategory {
    CreateCategory {
        name: name.to_string(),
        color: color.map(str::to_string),
    }
}

fn new_todo(title: &str, category_id: Option<i64>) -> CreateTodo {
    CreateTodo {
        title: title.to_string(),
        description: "details".to_string(),
        category_id,
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_and_list_in_insertion_order(pool: SqlitePool) {
    let work = CategoryRepo::create(&pool, &new_category("Work", Some("#ff0000")))
        .await
        .unwrap();
    let errands = CategoryRepo::create(&pool, &new_category("Errands", Some("#00ff00")))
        .await
        .unwrap();
    assert!(errands.id > work.id);

    let all = CategoryRepo::list(&pool).await.unwrap();
    let names: Vec<_> = all.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Work", "Errands"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_missing_or_empty_color_uses_default(pool: SqlitePool) {
    let none = CategoryRepo::create(&pool, &new_category("None", None))
        .await
        .unwrap();
    let empty = CategoryRepo::create(&pool, &new_category("Empty", Some("")))
        .await
        .unwrap();
    assert_eq!(none.color, DEFAULT_CATEGORY_COLOR);
    assert_eq!(empty.color, DEFAULT_CATEGORY_COLOR);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_overwrites_name_and_color(pool: SqlitePool) {
    let category = CategoryRepo::create(&pool, &new_category("Wrok", Some("#ff0000")))
        .await
        .unwrap();

    let updated = CategoryRepo::update(
        &pool,
        category.id,
        &UpdateCategory {
            name: "Work".to_string(),
            color: Some("#123456".to_string()),
        },
    )
    .await
    .unwrap()
    .expect("category should exist");
    assert_eq!(updated.name, "Work");
    assert_eq!(updated.color, "#123456");

    let fetched = CategoryRepo::find_by_id(&pool, category.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(fetched.name, "Work");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_without_color_resets_to_default(pool: SqlitePool) {
    let category = CategoryRepo::create(&pool, &new_category("Work", Some("#ff0000")))
        .await
        .unwrap();

    let updated = CategoryRepo::update(
        &pool,
        category.id,
        &UpdateCategory {
            name: "Work".to_string(),
            color: None,
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.color, DEFAULT_CATEGORY_COLOR);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_missing_category_returns_none(pool: SqlitePool) {
    let result = CategoryRepo::update(
        &pool,
        31337,
        &UpdateCategory {
            name: "Ghost".to_string(),
            color: None,
        },
    )
    .await
    .unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_cascades_to_all_dependent_todos(pool: SqlitePool) {
    let work = CategoryRepo::create(&pool, &new_category("Work", None))
        .await
        .unwrap();
    let home = CategoryRepo::create(&pool, &new_category("Home", None))
        .await
        .unwrap();

    let w1 = TodoRepo::create(&pool, &new_todo("W1", Some(work.id))).await.unwrap();
    let w2 = TodoRepo::create(&pool, &new_todo("W2", Some(work.id))).await.unwrap();
    let h1 = TodoRepo::create(&pool, &new_todo("H1", Some(home.id))).await.unwrap();
    let loose = TodoRepo::create(&pool, &new_todo("Loose", None)).await.unwrap();

    let removed = CategoryRepo::delete(&pool, work.id).await.unwrap();
    assert_eq!(removed, Some(2));

    assert!(CategoryRepo::find_by_id(&pool, work.id).await.unwrap().is_none());
    assert!(TodoRepo::find_by_id(&pool, w1.id).await.unwrap().is_none());
    assert!(TodoRepo::find_by_id(&pool, w2.id).await.unwrap().is_none());

    // Unrelated todos survive.
    assert!(TodoRepo::find_by_id(&pool, h1.id).await.unwrap().is_some());
    assert!(TodoRepo::find_by_id(&pool, loose.id).await.unwrap().is_some());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_empty_category_removes_no_todos(pool: SqlitePool) {
    let empty = CategoryRepo::create(&pool, &new_category("Empty", None))
        .await
        .unwrap();
    assert_eq!(CategoryRepo::delete(&pool, empty.id).await.unwrap(), Some(0));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_missing_category_returns_none(pool: SqlitePool) {
    assert_eq!(CategoryRepo::delete(&pool, 8080).await.unwrap(), None);
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_with_blank_name_rejected(pool: SqlitePool) {
    let result = CategoryRepo::create(&pool, &new_category("   ", None)).await;
    assert_matches!(result, Err(DbError::Core(CoreError::Validation(_))));

    assert!(CategoryRepo::list(&pool).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_with_malformed_color_rejected(pool: SqlitePool) {
    let result = CategoryRepo::create(&pool, &new_category("Work", Some("purple"))).await;
    assert_matches!(result, Err(DbError::Core(CoreError::Validation(_))));

    assert!(CategoryRepo::list(&pool).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_invalid_update_leaves_row_unchanged(pool: SqlitePool) {
    let category = CategoryRepo::create(&pool, &new_category("Work", Some("#ff0000")))
        .await
        .unwrap();

    let result = CategoryRepo::update(
        &pool,
        category.id,
        &UpdateCategory {
            name: "Work".to_string(),
            color: Some("#12345".to_string()),
        },
    )
    .await;
    assert_matches!(result, Err(DbError::Core(CoreError::Validation(_))));

    let result = CategoryRepo::update(
        &pool,
        category.id,
        &UpdateCategory {
            name: "".to_string(),
            color: None,
        },
    )
    .await;
    assert_matches!(result, Err(DbError::Core(CoreError::Validation(_))));

    let fetched = CategoryRepo::find_by_id(&pool, category.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!((fetched.name.as_str(), fetched.color.as_str()), ("Work", "#ff0000"));
}
