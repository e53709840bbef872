// HTTP-level client tests against a local mock of the Hacker News API.

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use shared::{ClientError, HackerNewsClient};

const TOP_IDS: [i64; 5] = [20324021, 20325395, 20325925, 20328871, 20329699];

async fn mock_api() -> (HackerNewsClient, MockServer) {
    let server = MockServer::start().await;
    let client = HackerNewsClient::with_base_url(&server.uri(), 5).unwrap();
    (client, server)
}

#[tokio::test]
async fn fetch_top_ids_truncates_to_amount() {
    let (client, server) = mock_api().await;

    Mock::given(method("GET"))
        .and(path("/topstories.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(TOP_IDS)))
        .mount(&server)
        .await;

    let ids = client.fetch_top_ids(3).await.unwrap();
    assert_eq!(ids, &TOP_IDS[..3]);
}

#[tokio::test]
async fn fetch_top_ids_returns_short_lists_in_full() {
    let (client, server) = mock_api().await;

    Mock::given(method("GET"))
        .and(path("/topstories.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(TOP_IDS)))
        .mount(&server)
        .await;

    // asking for more than upstream has is not an error
    let ids = client.fetch_top_ids(500).await.unwrap();
    assert_eq!(ids, TOP_IDS);
}

#[tokio::test]
async fn fetch_top_ids_rejects_out_of_range_without_calling_upstream() {
    let (client, server) = mock_api().await;

    // no mocks mounted: any request would come back 404 and fail differently
    for amount in [0, 501] {
        assert!(matches!(
            client.fetch_top_ids(amount).await,
            Err(ClientError::AmountOutOfRange { .. })
        ));
    }

    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn fetch_item_decodes_a_story() {
    let (client, server) = mock_api().await;

    Mock::given(method("GET"))
        .and(path("/item/20324021.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 20324021,
            "type": "story",
            "by": "moks",
            "time": 1562238224,
            "url": "http://natpryce.com/articles/000819.html",
            "score": 110,
            "title": "Mistakes we made adopting event sourcing and how we recovered",
            "kids": [20324843, 20324387],
            "descendants": 14
        })))
        .mount(&server)
        .await;

    let item = client.fetch_item(20324021).await.unwrap();
    assert_eq!(item.id, 20324021);
    assert_eq!(item.item_type, "story");
    assert_eq!(item.by, "moks");
    assert_eq!(item.score, 110);
    assert_eq!(item.descendants, 14);
    assert_eq!(item.kids, vec![20324843, 20324387]);
    // fields the API omitted come back as zero values
    assert_eq!(item.text, "");
    assert!(!item.dead);
}

#[tokio::test]
async fn fetch_item_maps_null_to_not_found() {
    let (client, server) = mock_api().await;

    // the API answers `null` for ids that never existed
    Mock::given(method("GET"))
        .and(path("/item/999.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("null"))
        .mount(&server)
        .await;

    assert!(matches!(
        client.fetch_item(999).await,
        Err(ClientError::NotFound(999))
    ));
}

#[tokio::test]
async fn fetch_item_surfaces_decode_failures() {
    let (client, server) = mock_api().await;

    Mock::given(method("GET"))
        .and(path("/item/1.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    assert!(matches!(
        client.fetch_item(1).await,
        Err(ClientError::Http(_))
    ));
}

#[tokio::test]
async fn fetch_item_surfaces_http_errors() {
    let (client, server) = mock_api().await;

    Mock::given(method("GET"))
        .and(path("/item/1.json"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    assert!(matches!(
        client.fetch_item(1).await,
        Err(ClientError::Http(_))
    ));
}
