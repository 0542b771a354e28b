use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{body_string, body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use btce_api_client::auth::{Credentials, StaticCredentials, sign_request};
use btce_api_client::error::{BtceError, ErrorKind};
use btce_api_client::rest::BtceRestClient;
use btce_api_client::rest::private::{TradeHistoryRequest, TradeRequest, TransHistoryRequest};
use btce_api_client::types::{Direction, Pair};
use rust_decimal::Decimal;

fn build_client(server: &MockServer, seed: u64) -> BtceRestClient {
    let credentials = Arc::new(StaticCredentials::new("test_key", "test_secret"));
    BtceRestClient::builder()
        .base_url(server.uri())
        .credentials(credentials)
        .nonce_seed(seed)
        .build()
}

fn dec(value: &str) -> Decimal {
    value.parse().unwrap()
}

#[tokio::test]
async fn test_request_is_signed() {
    let server = MockServer::start().await;
    let body = "method=getInfo&nonce=1234";
    let signature = sign_request(&Credentials::new("test_key", "test_secret"), body).unwrap();

    Mock::given(method("POST"))
        .and(path("/tapi/"))
        .and(header("Key", "test_key"))
        .and(header("Sign", signature.as_str()))
        .and(header("Content-Type", "application/x-www-form-urlencoded"))
        .and(body_string(body))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": 1, "return": {}})))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server, 1233);
    let response = client.get_info().await.unwrap();
    assert_eq!(response["success"], 1);
}

#[tokio::test]
async fn test_place_order() {
    let server = MockServer::start().await;
    let response = json!({
        "success": 1,
        "return": {
            "received": 0.1,
            "remains": 0,
            "order_id": 0,
            "funds": {"usd": 325, "btc": 2.498}
        }
    });

    Mock::given(method("POST"))
        .and(path("/tapi/"))
        .and(body_string("pair=btc_usd&type=buy&rate=100.5&amount=0.1&method=Trade&nonce=11"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_client(&server, 10);
    let request = TradeRequest::new(Pair::BtcUsd, Direction::Buy, dec("100.5"), dec("0.1"));
    let result = client.place_order(&request).await.unwrap();

    assert_eq!(result.received, dec("0.1"));
    assert_eq!(result.order_id, 0);
    assert_eq!(result.funds["btc"], dec("2.498"));
}

#[tokio::test]
async fn test_invalid_direction_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": 1, "return": {}})))
        .expect(0)
        .mount(&server)
        .await;

    let err = TradeRequest::parse(Pair::BtcUsd, "hold", dec("1"), dec("1")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidParameter);

    let received = server.received_requests().await.unwrap();
    assert!(received.is_empty());
}

#[tokio::test]
async fn test_get_account_info() {
    let server = MockServer::start().await;
    let response = json!({
        "success": 1,
        "return": {
            "funds": {"usd": 325, "btc": 23.998, "ltc": 0},
            "rights": {"info": 1, "trade": 1, "withdraw": 0},
            "transaction_count": 80,
            "open_orders": 1,
            "server_time": 1342123547
        }
    });

    Mock::given(method("POST"))
        .and(path("/tapi/"))
        .and(body_string_contains("method=getInfo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_client(&server, 1);
    let info = client.get_account_info().await.unwrap();

    assert_eq!(info.funds.len(), 3);
    assert_eq!(info.funds["usd"], dec("325"));
    assert!(info.rights.trade);
    assert!(!info.rights.withdraw);
    assert_eq!(info.transaction_count, 80);
    assert_eq!(info.open_orders, 1);
    assert_eq!(info.server_time.unix_timestamp(), 1342123547);
}

#[tokio::test]
async fn test_get_account_info_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/tapi/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": 0, "error": "msg"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server, 1);
    let err = client.get_account_info().await.unwrap_err();

    match err {
        BtceError::Failure(message) => assert_eq!(message, "msg"),
        other => panic!("expected failure, got {other:?}"),
    }
}

#[tokio::test]
async fn test_get_info_api_error_keeps_response() {
    let server = MockServer::start().await;
    let response = json!({"success": 0, "error": "api key dont have trade permission"});
    Mock::given(method("POST"))
        .and(path("/tapi/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response.clone()))
        .mount(&server)
        .await;

    let client = build_client(&server, 1);
    let err = client.get_info().await.unwrap_err();

    let api_error = err.as_api_error().unwrap();
    assert_eq!(api_error.message, "api key dont have trade permission");
    assert_eq!(api_error.response, response);
}

#[tokio::test]
async fn test_transaction_history_omits_unset_parameters() {
    let server = MockServer::start().await;
    let response = json!({
        "success": 1,
        "return": {
            "1081672": {
                "type": 1,
                "amount": 1.0,
                "currency": "BTC",
                "desc": "BTC Payment",
                "status": 2,
                "timestamp": 1342448420
            }
        }
    });

    Mock::given(method("POST"))
        .and(path("/tapi/"))
        .and(body_string(
            "from=0&count=1000&from_id=0&order=DESC&since=0&method=TransHistory&nonce=6",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server, 5);
    let history = client
        .get_transaction_history(&TransHistoryRequest::default())
        .await
        .unwrap();

    assert_eq!(history.len(), 1);
    assert_eq!(history["1081672"].currency, "BTC");

    let received = server.received_requests().await.unwrap();
    let body = String::from_utf8(received[0].body.clone()).unwrap();
    assert!(!body.contains("end_id"));
    assert!(!body.contains("end="));
}

#[tokio::test]
async fn test_trade_history_for_pair() {
    let server = MockServer::start().await;
    let response = json!({
        "success": 1,
        "return": {
            "166830": {
                "pair": "btc_usd",
                "type": "sell",
                "amount": 1,
                "rate": 1,
                "order_id": 343148,
                "is_your_order": 1,
                "timestamp": 1342445793
            }
        }
    });

    Mock::given(method("POST"))
        .and(path("/tapi/"))
        .and(body_string_contains("count=50"))
        .and(body_string_contains("pair=btc_usd&method=TradeHistory"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server, 1);
    let request = TradeHistoryRequest {
        count: 50,
        ..TradeHistoryRequest::default()
    }
    .pair(Pair::BtcUsd);
    let trades = client.get_trade_history(&request).await.unwrap();

    let trade = &trades["166830"];
    assert_eq!(trade.direction, Direction::Sell);
    assert!(trade.is_your_order);
}

#[tokio::test]
async fn test_get_active_orders() {
    let server = MockServer::start().await;
    let response = json!({
        "success": 1,
        "return": {
            "343152": {
                "pair": "btc_usd",
                "type": "sell",
                "amount": 1.0,
                "rate": 3.0,
                "timestamp_created": 1342448420,
                "status": 0
            }
        }
    });

    Mock::given(method("POST"))
        .and(path("/tapi/"))
        .and(body_string("method=ActiveOrders&nonce=2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server, 1);
    let orders = client.get_active_orders(None).await.unwrap();

    assert_eq!(orders["343152"].rate, dec("3"));
    assert_eq!(orders["343152"].status, 0);
}

#[tokio::test]
async fn test_cancel_order() {
    let server = MockServer::start().await;
    let response = json!({
        "success": 1,
        "return": {"order_id": 343154, "funds": {"usd": 325, "btc": 24.998}}
    });

    Mock::given(method("POST"))
        .and(path("/tapi/"))
        .and(body_string("order_id=343154&method=CancelOrder&nonce=2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server, 1);
    let result = client.cancel_order(343154).await.unwrap();
    assert_eq!(result.order_id, 343154);
}

#[tokio::test]
async fn test_get_past_order() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/tapi/"))
        .and(body_string("from_id=77&to_id=77&active=0&method=OrderList&nonce=2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": 1,
            "return": {"77": {"pair": "ltc_usd", "type": "buy", "amount": 1, "rate": 2,
                               "timestamp_created": 1342448420, "status": 1}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server, 1);
    let response = client.get_past_order(77).await.unwrap();
    assert_eq!(response["return"]["77"]["pair"], "ltc_usd");
}

#[tokio::test]
async fn test_get_past_order_unsuccessful() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/tapi/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": 0})))
        .mount(&server)
        .await;

    let client = build_client(&server, 1);
    let err = client.get_past_order(77).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Api);
}

#[tokio::test]
async fn test_invalid_json_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/tapi/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let client = build_client(&server, 1);
    let err = client.get_info().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidResponse);
}

#[tokio::test]
async fn test_empty_object_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/tapi/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let client = build_client(&server, 1);
    let err = client.get_info().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidResponse);
}

#[tokio::test]
async fn test_empty_error_status_is_transport_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/tapi/"))
        .respond_with(ResponseTemplate::new(502))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server, 1);
    let err = client.get_info().await.unwrap_err();
    assert!(matches!(err, BtceError::HttpStatus { status: 502 }));
    assert_eq!(err.kind(), ErrorKind::Transport);
}
