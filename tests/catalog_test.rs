use glowcart::catalog::{CatalogClient, CatalogClientConfig, CatalogService, ProductFeed};
use glowcart::model::ProductId;
use httpmock::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn beauty(id: u32) -> Value {
    json!({
        "id": id,
        "title": format!("Hydrating Cream {id}"),
        "price": 12.5,
        "thumbnail": format!("https://cdn.example/{id}.png"),
        "category": "skincare",
    })
}

fn unrelated(id: u32) -> Value {
    json!({
        "id": id,
        "title": format!("Phone Case {id}"),
        "price": 5,
        "thumbnail": format!("https://cdn.example/{id}.png"),
        "category": "smartphones",
    })
}

/// First page where only 15 of 60 raw records are beauty products.
#[tokio::test]
async fn test_thin_first_page_falls_back_to_larger_batch() {
    let server = MockServer::start_async().await;

    let thin: Vec<Value> = (1..=60)
        .map(|id| if id % 4 == 0 { beauty(id) } else { unrelated(id) })
        .collect();
    let page = server.mock(|when, then| {
        when.method(GET)
            .path("/products")
            .query_param("skip", "0")
            .query_param("limit", "60");
        then.status(200).json_body(json!({ "products": thin }));
    });

    let wide: Vec<Value> = (1..=100)
        .map(|id| if id % 3 == 0 { beauty(id) } else { unrelated(id) })
        .collect();
    let fallback = server.mock(|when, then| {
        when.method(GET).path("/products").query_param("limit", "100");
        then.status(200).json_body(json!({ "products": wide }));
    });

    let client = CatalogClient::new(CatalogClientConfig::new(server.base_url())).unwrap();
    let products = client.get_products(0, 20).await.unwrap();

    // 33 of the 100 match; the result is capped at the page size.
    assert_eq!(products.len(), 20);
    assert_eq!(products[0].id, ProductId(3));
    assert_eq!(products[19].id, ProductId(60));
    assert!(products.iter().all(|p| p.category == "skincare"));
    page.assert();
    fallback.assert();
}

#[tokio::test]
async fn test_feed_pages_until_short_batch() {
    let server = MockServer::start_async().await;

    let first: Vec<Value> = (1..=6).map(beauty).collect();
    server.mock(|when, then| {
        when.method(GET)
            .path("/products")
            .query_param("skip", "0")
            .query_param("limit", "6");
        then.status(200).json_body(json!({ "products": first }));
    });
    let second: Vec<Value> = vec![beauty(7), unrelated(8), unrelated(9)];
    server.mock(|when, then| {
        when.method(GET)
            .path("/products")
            .query_param("skip", "2")
            .query_param("limit", "6");
        then.status(200).json_body(json!({ "products": second }));
    });

    let client = CatalogClient::new(CatalogClientConfig::new(server.base_url())).unwrap();
    let mut feed = ProductFeed::with_limit(client, 2);

    assert_eq!(feed.load_more().await.unwrap().len(), 2);
    assert!(feed.has_more());
    assert_eq!(feed.skip(), 2);

    let batch = feed.load_more().await.unwrap();
    assert_eq!(batch.len(), 1);
    assert!(!feed.has_more());

    let ids: Vec<u32> = feed.products().iter().map(|p| p.id.0).collect();
    assert_eq!(ids, vec![1, 2, 7]);

    // Exhausted feeds do not hit the network again.
    assert!(feed.load_more().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_product_details_fill_defaults() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/products/42");
        then.status(200).json_body(json!({
            "id": 42,
            "title": "Velvet Blush",
            "price": 18.0,
            "thumbnail": "https://cdn.example/42.png",
            "images": [],
        }));
    });

    let client = CatalogClient::new(CatalogClientConfig::new(server.base_url())).unwrap();
    let product = client.get_product(ProductId(42)).await.unwrap();

    assert_eq!(product.brand, "Premium Beauty");
    assert_eq!(product.images, vec!["https://cdn.example/42.png".to_string()]);
    assert!((4.0..5.0).contains(&product.rating));
    assert!((10..=59).contains(&product.stock));

    // Defaults are stable for the same product.
    let again = client.get_product(ProductId(42)).await.unwrap();
    assert_eq!(again, product);
}
