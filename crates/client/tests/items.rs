mod common;

use recs_client::{ApiError, Item, PredictionQuery, ValidationError};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{client_for, received_bodies};

fn shoe() -> Item {
    Item::new("sku-1", "Blue Shoe", "https://shop.io/shoe", "https://shop.io/shoe.png")
}

#[tokio::test]
async fn add_item_defaults_item_type_and_encodes_values() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v3/items/"))
        .and(body_json(json!({
            "item_id": "sku-1",
            "item_name": "Blue%20Shoe",
            "item_url": "https%3A%2F%2Fshop.io%2Fshoe",
            "image_url": "https%3A%2F%2Fshop.io%2Fshoe.png",
            "item_type": "product",
            "async": 1,
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = client.add_item(shoe()).await.unwrap();
    assert_eq!(response.status(), 201);
}

#[tokio::test]
async fn variants_and_extras_are_encoded_leaf_by_leaf() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v3/items/"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut item = shoe().with_attribute("tagline", "the \"best\"\tshoe");
    item.variants = vec![
        serde_json::from_value(json!({"size": "9 1/2", "stock": 4})).unwrap(),
        serde_json::from_value(json!({"size": "10"})).unwrap(),
    ];
    client.add_item(item).await.unwrap();

    let bodies = received_bodies(&server).await;
    assert_eq!(
        bodies[0]["variants"],
        json!([{"size": "9%201%2F2", "stock": 4}, {"size": "10"}])
    );
    assert_eq!(bodies[0]["data_dict"], json!({"tagline": "the%20bestshoe"}));
}

#[tokio::test]
async fn batch_add_items_reports_missing_fields_by_entry() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let broken = Item {
        item_url: String::new(),
        ..shoe()
    };
    let err = client.batch_add_items(vec![shoe(), shoe(), broken]).await.unwrap_err();

    assert!(matches!(
        err,
        ApiError::Validation(ValidationError::BatchEntry {
            index: 2,
            field: "item_url"
        })
    ));
}

#[tokio::test]
async fn get_predictions_queries_items_by_email() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/items/"))
        .and(query_param("email", "a@b.com"))
        .and(query_param("limit", "5"))
        .and(query_param("async", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"[{"item_id":"sku-1"}]"#))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let query = PredictionQuery::new("a@b.com").with_param("limit", "5");
    let response = client.get_predictions(query).await.unwrap();

    assert_eq!(response.text().await.unwrap(), r#"[{"item_id":"sku-1"}]"#);
    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].body.is_empty());
}

#[tokio::test]
async fn get_predictions_requires_email() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .get_predictions(PredictionQuery::default())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ApiError::Validation(ValidationError::MissingField("email"))
    ));
}
