use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use menu_core::{Catalog, Category, MenuItem};
use menu_server::build_router;
use menu_server::state::{AppState, CatalogState};
use serde_json::Value;
use tower::ServiceExt;

fn catalog() -> Catalog {
    Catalog::new(
        vec![
            Category::new("starters", "Starters").with_subcategories(["Veg", "Non-Veg"]),
            Category::new("biryani", "Biryani").with_subcategories(["Chicken", "Veg"]),
            Category::new("naan", "Naan"),
        ],
        vec![
            MenuItem::new("1", "Papad", 9.5, "starters", true).with_subcategory("Veg"),
            MenuItem::new("2", "Biryani", 20.5, "biryani", false).with_subcategory("Chicken"),
            MenuItem::new("3", "Garlic Naan", 4.0, "naan", true),
            MenuItem::new("4", "Vegetable Biryani", 16.5, "biryani", true).with_subcategory("Veg"),
        ],
    )
}

fn app() -> Router {
    build_router(Arc::new(AppState::ready(catalog())))
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}

fn dish_names(body: &Value) -> Vec<String> {
    body["dishes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["name"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn menu_defaults_to_everything_by_name() {
    let (status, body) = get(app(), "/api/menu").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 4);
    assert_eq!(body["summary"], "Showing 4 dishes");
    assert_eq!(
        dish_names(&body),
        vec!["Biryani", "Garlic Naan", "Papad", "Vegetable Biryani"]
    );
    assert!(body.get("empty_state").is_none());
    assert_eq!(body["filters"]["category"], "all");
}

#[tokio::test]
async fn menu_applies_filters_and_sort() {
    let (status, body) = get(
        app(),
        "/api/menu?search=BIR&dietary=veg&sort=price-high",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(dish_names(&body), vec!["Vegetable Biryani"]);
    assert_eq!(body["summary"], "Showing 1 dish");

    let card = &body["dishes"][0];
    assert_eq!(card["price_label"], "€16.50");
    assert_eq!(card["category_name"], "Biryani");
    assert_eq!(card["dietary_label"], "veg");
}

#[tokio::test]
async fn menu_offers_subcategories_of_selected_category() {
    let (_, body) = get(app(), "/api/menu?category=biryani&subcategory=Chicken").await;

    assert_eq!(dish_names(&body), vec!["Biryani"]);
    assert_eq!(body["subcategories"], serde_json::json!(["Chicken", "Veg"]));
}

#[tokio::test]
async fn menu_resets_impossible_subcategory() {
    let (_, body) = get(app(), "/api/menu?category=naan&subcategory=Chicken").await;

    assert_eq!(body["filters"]["subcategory"], "all");
    assert_eq!(dish_names(&body), vec!["Garlic Naan"]);
    assert_eq!(body["subcategories"], serde_json::json!([]));
}

#[tokio::test]
async fn menu_reports_empty_state() {
    let (status, body) = get(app(), "/api/menu?search=pizza").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 0);
    assert_eq!(body["summary"], "Showing 0 dishes");
    assert_eq!(body["empty_state"]["title"], "No dishes found");
}

#[tokio::test]
async fn menu_rejects_unknown_sort() {
    let (status, body) = get(app(), "/api/menu?sort=cheapest").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BadRequest");
}

#[tokio::test]
async fn unavailable_catalog_returns_503() {
    let state = AppState {
        catalog: CatalogState::Unavailable(
            "Sorry, we couldn't load the menu. Please try again later.".to_string(),
        ),
        source: "remote:http://menu.local".to_string(),
    };
    let app = build_router(Arc::new(state));

    let (status, body) = get(app.clone(), "/api/menu").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(
        body["message"],
        "Sorry, we couldn't load the menu. Please try again later."
    );

    let (status, _) = get(app.clone(), "/health/ready").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

    // Landing page does not depend on the catalog
    let (status, _) = get(app, "/api/home").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn subcategories_endpoint() {
    let (status, body) = get(app(), "/api/menu/subcategories?category=starters").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["subcategories"], serde_json::json!(["Veg", "Non-Veg"]));

    let (_, body) = get(app(), "/api/menu/subcategories").await;
    assert_eq!(body["category"], "all");
    assert_eq!(body["subcategories"], serde_json::json!([]));
}

#[tokio::test]
async fn categories_and_home() {
    let (status, body) = get(app(), "/api/categories").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 3);
    assert_eq!(body["categories"][2]["subcategories"], serde_json::json!([]));

    let (status, body) = get(app(), "/api/home").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["restaurant"]["name"], "7 Hills");
    assert_eq!(body["featured"].as_array().unwrap().len(), 3);
    assert_eq!(body["call_to_action"]["links"][0]["href"], "/contact");
}

#[tokio::test]
async fn health_endpoints() {
    let (status, body) = get(app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, _) = get(app(), "/health/ready").await;
    assert_eq!(status, StatusCode::OK);
}
