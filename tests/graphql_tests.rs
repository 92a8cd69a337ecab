use std::sync::Arc;

use serde_json::{Value, json};
use tord::graphql::{TordSchema, build_schema};
use tord::store::Store;

fn seeded_schema() -> TordSchema {
    build_schema(Arc::new(Store::seeded()))
}

fn empty_schema() -> TordSchema {
    build_schema(Arc::new(Store::new()))
}

/// Execute a document expected to succeed and return its data as JSON.
async fn execute(schema: &TordSchema, doc: &str) -> Value {
    let response = schema.execute(doc).await;
    assert!(
        response.errors.is_empty(),
        "unexpected errors for {doc}: {:?}",
        response.errors
    );
    response.data.into_json().unwrap()
}

// =============================================================================
// Queries
// =============================================================================

#[tokio::test]
async fn test_author_by_id() {
    let schema = seeded_schema();
    let data = execute(&schema, r#"{ author(id: "1") { id name } }"#).await;
    assert_eq!(
        data,
        json!({ "author": { "id": "1", "name": "Eduardo Landa" } })
    );
}

#[tokio::test]
async fn test_author_miss_is_null_not_error() {
    let schema = seeded_schema();
    let data = execute(&schema, r#"{ author(id: "999") { id } }"#).await;
    assert_eq!(data, json!({ "author": null }));
}

#[tokio::test]
async fn test_lists_come_back_in_insertion_order() {
    let schema = seeded_schema();
    let data = execute(&schema, r#"{ authors { name } truths { id } dares { id } }"#).await;
    assert_eq!(
        data["authors"],
        json!([{ "name": "Eduardo Landa" }, { "name": "Gianlucci Minarelli" }])
    );
    assert_eq!(data["truths"], json!([{ "id": "1" }, { "id": "2" }]));
    assert_eq!(data["dares"], json!([{ "id": "1" }, { "id": "2" }]));
}

#[tokio::test]
async fn test_empty_deck_lists_are_empty() {
    let schema = empty_schema();
    let data = execute(&schema, r#"{ authors { id } truths { id } dares { id } }"#).await;
    assert_eq!(
        data,
        json!({ "authors": [], "truths": [], "dares": [] })
    );
}

// =============================================================================
// Relationship resolution
// =============================================================================

#[tokio::test]
async fn test_seeded_author_truths() {
    let schema = seeded_schema();
    let data = execute(&schema, r#"{ author(id: "1") { truths { truth } } }"#).await;
    assert_eq!(
        data["author"]["truths"],
        json!([
            { "truth": "Do you like someone on this place?" },
            { "truth": "Who would you date on this place?" }
        ])
    );
}

#[tokio::test]
async fn test_truth_resolves_its_author() {
    let schema = seeded_schema();
    let data = execute(&schema, r#"{ truth(id: "1") { author { name } } }"#).await;
    assert_eq!(data["truth"]["author"]["name"], "Eduardo Landa");
}

#[tokio::test]
async fn test_dare_round_trip_through_author() {
    let schema = empty_schema();
    let author = execute(&schema, r#"mutation { addAuthor(name: "Zoe") { id } }"#).await;
    let author_id = author["addAuthor"]["id"].as_str().unwrap().to_string();

    let dare = execute(
        &schema,
        &format!(r#"mutation {{ addDare(dare: "Moonwalk", authorId: "{author_id}") {{ id author {{ id }} }} }}"#),
    )
    .await;
    assert_eq!(dare["addDare"]["author"]["id"], author_id.as_str());

    // the dare appears exactly once in its author's list
    let listed = execute(
        &schema,
        &format!(r#"{{ author(id: "{author_id}") {{ dares {{ dare }} }} }}"#),
    )
    .await;
    assert_eq!(listed["author"]["dares"], json!([{ "dare": "Moonwalk" }]));
}

#[tokio::test]
async fn test_orphaned_dare_has_null_author() {
    let schema = seeded_schema();
    execute(&schema, r#"mutation { removeAuthor(id: "2") { id } }"#).await;

    // the dares stay, their author resolves to null
    let data = execute(&schema, r#"{ dares { id author { id } } }"#).await;
    assert_eq!(data["dares"].as_array().unwrap().len(), 2);
    assert_eq!(data["dares"][0]["author"], Value::Null);
}

#[tokio::test]
async fn test_dangling_author_id_accepted_at_creation() {
    let schema = empty_schema();
    let data = execute(
        &schema,
        r#"mutation { addTruth(truth: "Ever ghosted anyone?", authorId: "nobody") { id author { id } } }"#,
    )
    .await;
    assert_eq!(data["addTruth"]["author"], Value::Null);
}

// =============================================================================
// Mutations
// =============================================================================

#[tokio::test]
async fn test_add_author_generates_fresh_id() {
    let schema = seeded_schema();
    let data = execute(&schema, r#"mutation { addAuthor(name: "X") { id name } }"#).await;

    let id = data["addAuthor"]["id"].as_str().unwrap();
    assert!(!id.is_empty());
    assert_ne!(id, "1");
    assert_ne!(id, "2");

    let authors = execute(&schema, r#"{ authors { id name } }"#).await;
    let authors = authors["authors"].as_array().unwrap();
    assert_eq!(authors.len(), 3);
    let created: Vec<&Value> = authors.iter().filter(|a| a["name"] == "X").collect();
    assert_eq!(created.len(), 1);
    assert_eq!(created[0]["id"], id);
}

#[tokio::test]
async fn test_add_then_get_deep_equal() {
    let schema = empty_schema();
    let created = execute(
        &schema,
        r#"mutation { addTruth(truth: "Biggest fear?", authorId: "1") { id truth } }"#,
    )
    .await;
    let id = created["addTruth"]["id"].as_str().unwrap();

    let fetched = execute(&schema, &format!(r#"{{ truth(id: "{id}") {{ id truth }} }}"#)).await;
    assert_eq!(fetched["truth"], created["addTruth"]);
}

#[tokio::test]
async fn test_created_ids_are_unique() {
    let schema = empty_schema();
    let mut ids = Vec::new();
    for _ in 0..10 {
        let data = execute(&schema, r#"mutation { addAuthor(name: "dup") { id } }"#).await;
        ids.push(data["addAuthor"]["id"].as_str().unwrap().to_string());
    }
    let mut deduped = ids.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(deduped.len(), ids.len());
}

#[tokio::test]
async fn test_update_truth_replaces_text_only() {
    let schema = seeded_schema();
    let data = execute(
        &schema,
        r#"mutation { updateTruth(id: "2", truth: "Worst kiss ever?") { id truth author { id } } }"#,
    )
    .await;
    assert_eq!(
        data["updateTruth"],
        json!({ "id": "2", "truth": "Worst kiss ever?", "author": { "id": "1" } })
    );

    let fetched = execute(&schema, r#"{ truth(id: "2") { truth } }"#).await;
    assert_eq!(fetched["truth"]["truth"], "Worst kiss ever?");
}

#[tokio::test]
async fn test_update_author_renames() {
    let schema = seeded_schema();
    let data = execute(
        &schema,
        r#"mutation { updateAuthor(id: "2", name: "Gian") { id name } }"#,
    )
    .await;
    assert_eq!(data["updateAuthor"]["name"], "Gian");
}

#[tokio::test]
async fn test_update_missing_truth_is_a_not_found_error() {
    let schema = seeded_schema();
    let response = schema
        .execute(r#"mutation { updateTruth(id: "999", truth: "x") { id } }"#)
        .await;

    assert_eq!(response.errors.len(), 1);
    assert_eq!(response.errors[0].message, "truth not found: 999");

    // the deck is untouched
    let data = execute(&schema, r#"{ truths { id } }"#).await;
    assert_eq!(data["truths"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_update_missing_dare_is_a_not_found_error() {
    let schema = empty_schema();
    let response = schema
        .execute(r#"mutation { updateDare(id: "1", dare: "x") { id } }"#)
        .await;
    assert_eq!(response.errors.len(), 1);
    assert_eq!(response.errors[0].message, "dare not found: 1");
}

#[tokio::test]
async fn test_remove_dare_shrinks_the_deck() {
    let schema = seeded_schema();
    let removed = execute(&schema, r#"mutation { removeDare(id: "2") { id dare } }"#).await;
    assert_eq!(removed["removeDare"]["dare"], "Drink a shot of alcohol");

    let data = execute(&schema, r#"{ dares { id } }"#).await;
    let dares = data["dares"].as_array().unwrap();
    assert_eq!(dares.len(), 1);
    assert!(dares.iter().all(|d| d["id"] != "2"));
}

#[tokio::test]
async fn test_remove_then_get_is_null() {
    let schema = seeded_schema();
    execute(&schema, r#"mutation { removeTruth(id: "1") { id } }"#).await;
    let data = execute(&schema, r#"{ truth(id: "1") { id } }"#).await;
    assert_eq!(data["truth"], Value::Null);
}

#[tokio::test]
async fn test_remove_missing_is_null_not_error() {
    let schema = seeded_schema();
    let data = execute(&schema, r#"mutation { removeAuthor(id: "999") { id } }"#).await;
    assert_eq!(data["removeAuthor"], Value::Null);
}

// =============================================================================
// GraphQL-layer validation
// =============================================================================

#[tokio::test]
async fn test_missing_required_argument_fails_validation() {
    let schema = seeded_schema();
    let response = schema.execute(r#"mutation { addAuthor { id } }"#).await;
    assert!(!response.errors.is_empty());
    // validation failed, nothing was executed
    let data = execute(&schema, r#"{ authors { id } }"#).await;
    assert_eq!(data["authors"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_variables_are_accepted() {
    let schema = seeded_schema();
    let request = async_graphql::Request::new(
        "query Author($id: ID!) { author(id: $id) { name } }",
    )
    .variables(async_graphql::Variables::from_json(json!({ "id": "2" })));

    let response = schema.execute(request).await;
    assert!(response.errors.is_empty());
    assert_eq!(
        response.data.into_json().unwrap()["author"]["name"],
        "Gianlucci Minarelli"
    );
}

#[tokio::test]
async fn test_sdl_exposes_the_full_surface() {
    let sdl = seeded_schema().sdl();
    for needle in [
        "type Author",
        "type Truth",
        "type Dare",
        "addAuthor",
        "updateDare",
        "removeTruth",
    ] {
        assert!(sdl.contains(needle), "SDL is missing {needle}");
    }
}
