use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    routing::get,
};
use faq_api_types::{CreateItemRequest, Item, ItemSelector};
use faq_store_client::ItemStore;
use faq_store_http::HttpItemStore;
use serde::Deserialize;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

type Items = Arc<Mutex<Vec<Item>>>;

#[derive(Debug, Deserialize)]
struct DeleteQuery {
    uid: Option<String>,
    category: Option<String>,
}

async fn list(State(items): State<Items>) -> Json<Vec<Item>> {
    Json(items.lock().unwrap().clone())
}

async fn create(State(items): State<Items>, Json(req): Json<CreateItemRequest>) -> StatusCode {
    if req.question.trim().is_empty() {
        return StatusCode::BAD_REQUEST;
    }
    items.lock().unwrap().push(req.into());
    StatusCode::CREATED
}

async fn delete(State(items): State<Items>, Query(query): Query<DeleteQuery>) -> StatusCode {
    let selector = match (query.uid, query.category) {
        (Some(uid), None) => ItemSelector::Uid(uid),
        (None, Some(category)) => ItemSelector::Category(category),
        _ => return StatusCode::BAD_REQUEST,
    };
    items.lock().unwrap().retain(|item| !selector.selects(item));
    StatusCode::NO_CONTENT
}

async fn spawn_stub(seed: Vec<Item>) -> anyhow::Result<(HttpItemStore, Items)> {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let items: Items = Arc::new(Mutex::new(seed));
    let app = Router::new()
        .route("/items", get(list).post(create).delete(delete))
        .with_state(items.clone());

    let listener = tokio::net::TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    Ok((HttpItemStore::new(Some(format!("http://{addr}/"))), items))
}

fn create_req(uid: &str, question: &str, category: &str) -> CreateItemRequest {
    CreateItemRequest {
        uid: uid.to_owned(),
        question: question.to_owned(),
        answer: "X is Y".to_owned(),
        category: category.to_owned(),
    }
}

#[tokio::test]
async fn created_item_appears_in_next_listing() -> anyhow::Result<()> {
    let (store, _) = spawn_stub(Vec::new()).await?;

    store
        .create_item(create_req("q1700000000000", "What is X?", "Basics"))
        .await?;

    let items = store.list_items().await?;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].uid, "q1700000000000");
    assert_eq!(items[0].category_name(), "Basics");
    Ok(())
}

#[tokio::test]
async fn rejected_create_surfaces_status() -> anyhow::Result<()> {
    let (store, items) = spawn_stub(Vec::new()).await?;

    let err = store
        .create_item(create_req("q1", "  ", "Basics"))
        .await
        .expect_err("stub rejects blank questions");
    assert!(err.to_string().contains("400"), "unexpected error: {err}");
    assert!(items.lock().unwrap().is_empty());
    Ok(())
}

#[tokio::test]
async fn delete_by_uid_and_by_category() -> anyhow::Result<()> {
    let (store, _) = spawn_stub(Vec::new()).await?;
    store.create_item(create_req("q1", "a?", "Basics")).await?;
    store.create_item(create_req("q2", "b?", "Rust & Co")).await?;
    store.create_item(create_req("q3", "c?", "Rust & Co")).await?;

    store.delete_items(&ItemSelector::Uid("q1".to_owned())).await?;
    let uids: Vec<String> = store.list_items().await?.into_iter().map(|i| i.uid).collect();
    assert_eq!(uids, ["q2", "q3"]);

    // `&` must survive query encoding or the stub would see two parameters.
    store
        .delete_items(&ItemSelector::Category("Rust & Co".to_owned()))
        .await?;
    assert!(store.list_items().await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn unreachable_store_is_a_transport_error() -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
    let addr = listener.local_addr()?;
    drop(listener);

    let store = HttpItemStore::new(Some(format!("http://{addr}")));
    let err = store.list_items().await.expect_err("nothing is listening");
    assert!(err.to_string().contains("transport"), "unexpected error: {err}");
    Ok(())
}
