//! Handler tests for the Products domain
//!
//! These tests verify that HTTP handlers work correctly:
//! - Request deserialization (JSON / query strings → Rust structs)
//! - Response serialization (Rust structs → JSON)
//! - HTTP status codes
//! - Error responses
//!
//! Unlike E2E tests, these test ONLY the products domain handlers,
//! not the full application with routing, CORS middleware, etc.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_products::*;
use http_body_util::BodyExt;
use serde_json::json;
use test_utils::{TestDatabase, TestDataBuilder};
use tower::ServiceExt; // For oneshot()

// Name pool with deliberate repeats, so name filters can match several rows
const FACTORY_NAMES: [&str; 8] = [
    "Hat", "Pants", "Shirt", "Apple", "Banana", "Pots", "Towels", "Wrench",
];

const FACTORY_CATEGORIES: [Category; 6] = [
    Category::Unknown,
    Category::Cloths,
    Category::Food,
    Category::Housewares,
    Category::Automotive,
    Category::Tools,
];

// Helper to parse JSON response body
async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn factory_product(builder: &TestDataBuilder, n: usize) -> CreateProduct {
    CreateProduct {
        name: builder
            .pick(&format!("name-{}", n), &FACTORY_NAMES)
            .to_string(),
        description: format!("Factory product {}", n),
        price: builder.amount(&format!("price-{}", n), 100, 100_000),
        available: builder.flag(&format!("available-{}", n)),
        category: *builder.pick(&format!("category-{}", n), &FACTORY_CATEGORIES),
    }
}

async fn seed_products<R: ProductRepository>(
    service: &ProductService<R>,
    builder: &TestDataBuilder,
    count: usize,
) -> Vec<Product> {
    let mut products = Vec::with_capacity(count);
    for n in 0..count {
        let created = service
            .create_product(factory_product(builder, n))
            .await
            .unwrap();
        products.push(created);
    }
    products
}

#[tokio::test]
async fn test_create_product_handler_returns_201() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());
    let service = ProductService::new(repo);
    let app = handlers::router(service);

    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "name": "Fedora",
                "description": "A nice hat",
                "price": 5999,
                "available": true,
                "category": "CLOTHS"
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let product: Product = json_body(response.into_body()).await;
    assert!(product.id >= 1, "storage assigns ids starting at 1");
    assert_eq!(product.name, "Fedora");
    assert_eq!(product.price, 5999);
    assert_eq!(product.category, Category::Cloths);
}

#[tokio::test]
async fn test_create_then_get_preserves_name() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());
    let service = ProductService::new(repo);
    let app = handlers::router(service);

    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "name": "Towels",
                "description": "Bath towels",
                "price": 2500,
                "available": true,
                "category": "HOUSEWARES"
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created: Product = json_body(response.into_body()).await;

    let request = Request::builder()
        .method("GET")
        .uri(format!("/{}", created.id))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let fetched: Product = json_body(response.into_body()).await;
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.name, "Towels");
}

#[tokio::test]
async fn test_get_product_returns_404_with_message() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());
    let service = ProductService::new(repo);
    let app = handlers::router(service);

    // Ids are assigned from 1, so 0 never exists
    let request = Request::builder()
        .method("GET")
        .uri("/0")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: serde_json::Value = json_body(response.into_body()).await;
    let message = body["message"].as_str().unwrap();
    assert!(
        message.contains("was not found"),
        "unexpected message: {}",
        message
    );
    assert_eq!(body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_list_returns_all_created_products() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());
    let service = ProductService::new(repo);
    let builder = TestDataBuilder::from_test_name("handler_list_all");

    let products = seed_products(&service, &builder, 5).await;
    let app = handlers::router(service);

    let request = Request::builder()
        .method("GET")
        .uri("/")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let listed: Vec<Product> = json_body(response.into_body()).await;
    assert_eq!(listed.len(), 5);

    // Listing is id-ascending
    let ids: Vec<i32> = listed.iter().map(|p| p.id).collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    assert_eq!(ids, sorted);
    assert_eq!(listed[0].id, products[0].id);
}

#[tokio::test]
async fn test_list_filters_by_name() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());
    let service = ProductService::new(repo);
    let builder = TestDataBuilder::from_test_name("handler_filter_name");

    let products = seed_products(&service, &builder, 5).await;
    let target = products[0].name.clone();
    let expected = products.iter().filter(|p| p.name == target).count();

    let app = handlers::router(service);

    let request = Request::builder()
        .method("GET")
        .uri(format!("/?name={}", urlencoding::encode(&target)))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let listed: Vec<Product> = json_body(response.into_body()).await;
    assert_eq!(listed.len(), expected);
    assert!(listed.iter().all(|p| p.name == target));
}

#[tokio::test]
async fn test_list_name_filter_decodes_encoded_spaces() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());
    let service = ProductService::new(repo);

    let table = CreateProduct {
        name: "Dining Table".to_string(),
        description: "Six seats".to_string(),
        price: 74999,
        available: true,
        category: Category::Housewares,
    };
    service.create_product(table).await.unwrap();

    let wrench = CreateProduct {
        name: "Wrench".to_string(),
        description: "Adjustable wrench".to_string(),
        price: 1599,
        available: true,
        category: Category::Tools,
    };
    service.create_product(wrench).await.unwrap();

    let app = handlers::router(service);

    let encoded = urlencoding::encode("Dining Table");
    let request = Request::builder()
        .method("GET")
        .uri(format!("/?name={}", encoded))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let listed: Vec<Product> = json_body(response.into_body()).await;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].name, "Dining Table");
}

#[tokio::test]
async fn test_list_filters_by_category() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());
    let service = ProductService::new(repo);
    let builder = TestDataBuilder::from_test_name("handler_filter_category");

    let products = seed_products(&service, &builder, 10).await;
    let target = products[0].category;
    let expected = products.iter().filter(|p| p.category == target).count();

    let app = handlers::router(service);

    let request = Request::builder()
        .method("GET")
        .uri(format!("/?category={}", target))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let listed: Vec<Product> = json_body(response.into_body()).await;
    assert_eq!(listed.len(), expected);
    assert!(listed.iter().all(|p| p.category == target));
}

#[tokio::test]
async fn test_list_filters_by_availability() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());
    let service = ProductService::new(repo);
    let builder = TestDataBuilder::from_test_name("handler_filter_available");

    let products = seed_products(&service, &builder, 10).await;
    let expected = products.iter().filter(|p| p.available).count();

    let app = handlers::router(service);

    let request = Request::builder()
        .method("GET")
        .uri("/?available=true")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let listed: Vec<Product> = json_body(response.into_body()).await;
    assert_eq!(listed.len(), expected);
    assert!(listed.iter().all(|p| p.available));
}

#[tokio::test]
async fn test_list_combines_filters_with_and() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());
    let service = ProductService::new(repo);

    let inputs = [
        ("Hat", Category::Cloths, true),
        ("Hat", Category::Cloths, false),
        ("Hat", Category::Food, true),
        ("Wrench", Category::Tools, true),
    ];
    for (name, category, available) in inputs {
        let input = CreateProduct {
            name: name.to_string(),
            description: String::new(),
            price: 1000,
            available,
            category,
        };
        service.create_product(input).await.unwrap();
    }

    let app = handlers::router(service);

    let request = Request::builder()
        .method("GET")
        .uri("/?name=Hat&category=CLOTHS&available=true")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let listed: Vec<Product> = json_body(response.into_body()).await;
    assert_eq!(listed.len(), 1, "only one product satisfies all criteria");
    assert_eq!(listed[0].name, "Hat");
    assert_eq!(listed[0].category, Category::Cloths);
    assert!(listed[0].available);
}

#[tokio::test]
async fn test_repeated_gets_return_identical_bodies() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());
    let service = ProductService::new(repo);
    let builder = TestDataBuilder::from_test_name("handler_idempotent_get");

    let products = seed_products(&service, &builder, 3).await;
    let app = handlers::router(service);

    let uri = format!("/{}", products[0].id);
    let mut bodies = Vec::new();
    for _ in 0..2 {
        let request = Request::builder()
            .method("GET")
            .uri(&uri)
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        bodies.push(json_body::<serde_json::Value>(response.into_body()).await);
    }
    assert_eq!(bodies[0], bodies[1]);

    let mut listings = Vec::new();
    for _ in 0..2 {
        let request = Request::builder()
            .method("GET")
            .uri("/")
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        listings.push(json_body::<serde_json::Value>(response.into_body()).await);
    }
    assert_eq!(listings[0], listings[1]);
}

#[tokio::test]
async fn test_get_product_rejects_non_numeric_id() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());
    let service = ProductService::new(repo);
    let app = handlers::router(service);

    let request = Request::builder()
        .method("GET")
        .uri("/abc")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "BAD_REQUEST");
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .contains("Invalid id format")
    );
}

#[tokio::test]
async fn test_list_rejects_unparseable_filter_tokens() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());
    let service = ProductService::new(repo);
    let app = handlers::router(service);

    // Neither a boolean nor a category name; rejected rather than coerced
    let request = Request::builder()
        .method("GET")
        .uri("/?available=banana")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let request = Request::builder()
        .method("GET")
        .uri("/?category=CANDY")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_product_handler_validates_input() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());
    let service = ProductService::new(repo);
    let app = handlers::router(service);

    // Invalid name (empty string)
    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "name": "",
                "price": 100,
                "available": true
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "VALIDATION_ERROR");
    assert!(body["details"]["name"].is_array());
}

#[tokio::test]
async fn test_create_product_rejects_malformed_json() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());
    let service = ProductService::new(repo);
    let app = handlers::router(service);

    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "JSON_EXTRACTION");
}

#[tokio::test]
async fn test_update_product_handler_applies_present_fields() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());
    let service = ProductService::new(repo);

    let input = CreateProduct {
        name: "Pots".to_string(),
        description: "Cooking pots".to_string(),
        price: 3599,
        available: true,
        category: Category::Housewares,
    };
    let created = service.create_product(input).await.unwrap();

    let app = handlers::router(service);

    let request = Request::builder()
        .method("PUT")
        .uri(format!("/{}", created.id))
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "price": 2999,
                "available": false
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let updated: Product = json_body(response.into_body()).await;
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Pots");
    assert_eq!(updated.price, 2999);
    assert!(!updated.available);
    assert_eq!(updated.category, Category::Housewares);

    // The change is persisted, not just echoed
    let request = Request::builder()
        .method("GET")
        .uri(format!("/{}", created.id))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let fetched: Product = json_body(response.into_body()).await;
    assert_eq!(fetched.price, 2999);
    assert!(!fetched.available);
}

#[tokio::test]
async fn test_update_missing_product_returns_404() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());
    let service = ProductService::new(repo);
    let app = handlers::router(service);

    let request = Request::builder()
        .method("PUT")
        .uri("/999999")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({"price": 1})).unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: serde_json::Value = json_body(response.into_body()).await;
    assert!(body["message"].as_str().unwrap().contains("was not found"));
}

#[tokio::test]
async fn test_delete_product_handler_returns_204() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());
    let service = ProductService::new(repo);

    let input = CreateProduct {
        name: "Banana".to_string(),
        description: String::new(),
        price: 150,
        available: true,
        category: Category::Food,
    };
    let created = service.create_product(input).await.unwrap();

    let app = handlers::router(service);

    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/{}", created.id))
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert!(bytes.is_empty(), "204 carries no body");

    // Gone afterwards
    let request = Request::builder()
        .method("GET")
        .uri(format!("/{}", created.id))
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // A second delete reports NotFound as well
    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/{}", created.id))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
