use std::time::Duration;

use aleo_connection::http::endpoint::{BlockByHeight, LatestHeight};
use aleo_connection::http::{ErrorKind, HttpError, NodeClient, Origin, TransitionInput, TransitionOutput};
use serde_json::{Value, json};
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TX_ID: &str = "at1r9wercd6fsjm58klkqt8jrug55w4sgpj6tmcg0myk5n3nh5h5cyq589zfu";

fn execute_tx() -> Value {
    json!({
        "type": "execute",
        "id": TX_ID,
        "execution": {
            "edition": 0,
            "transitions": [{
                "id": "as1transition",
                "program": "credits.aleo",
                "function": "transfer_private",
                "inputs": [
                    { "type": "record", "id": "in0", "tag": "tag0", "origin": { "commitment": "cm0" } },
                    { "type": "private", "id": "in1", "value": "ciphertext1" }
                ],
                "outputs": [
                    { "type": "record", "id": "out0", "checksum": "chk0", "value": "record0" },
                    { "type": "external_record", "id": "out1" }
                ],
                "finalize": ["1u64"],
                "proof": "proof1",
                "tpk": "tpk1",
                "tcm": "tcm1",
                "fee": 0
            }]
        }
    })
}

fn deploy_tx() -> Value {
    json!({
        "type": "deploy",
        "id": "at1deploy",
        "deployment": {
            "edition": 0,
            "program": "program hello.aleo;\n\nfunction main:\n",
            "verifying_keys": { "main": ["verifier1", "certificate1"] }
        }
    })
}

fn block(height: u32) -> Value {
    json!({
        "block_hash": format!("ab1hash{height}"),
        "previous_hash": "ab1previous",
        "header": {
            "previous_state_root": "ar1state",
            "transactions_root": "ar1txs",
            "metadata": {
                "network": 3,
                "round": 10,
                "height": height,
                "coinbase_target": 18446744073709551615u64,
                "proof_target": 1,
                "timestamp": 1663718400
            }
        },
        "transactions": [deploy_tx(), execute_tx()],
        "signature": "sign1"
    })
}

async fn mock_get(server: &MockServer, route: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}

fn client_for(server: &MockServer) -> NodeClient {
    NodeClient::new(Url::parse(&server.uri()).unwrap()).unwrap()
}

#[tokio::test]
async fn test_get_block() {
    let server = MockServer::start().await;
    mock_get(&server, "/testnet3/block/0", ResponseTemplate::new(200).set_body_json(block(0))).await;

    let block = client_for(&server).get_block(0).await.unwrap();

    assert_eq!(block.block_hash, "ab1hash0");
    assert_eq!(block.header.metadata.height, 0);
    assert_eq!(block.header.metadata.coinbase_target, u64::MAX);
    assert_eq!(block.transactions.len(), 2);
    assert!(block.transactions[0].deployment().is_some());
    assert!(block.transactions[1].execution().is_some());
}

#[tokio::test]
async fn test_get_latest_block() {
    let server = MockServer::start().await;
    mock_get(&server, "/testnet3/latest/block", ResponseTemplate::new(200).set_body_json(block(99))).await;

    let block = client_for(&server).get_latest_block().await.unwrap();

    assert_eq!(block.header.metadata.height, 99);
}

#[tokio::test]
async fn test_get_latest_hash_and_height() {
    let server = MockServer::start().await;
    mock_get(&server, "/testnet3/latest/hash", ResponseTemplate::new(200).set_body_json("ab1latest")).await;
    mock_get(&server, "/testnet3/latest/height", ResponseTemplate::new(200).set_body_json(12345)).await;

    let client = client_for(&server);

    assert_eq!(client.get_latest_hash().await.unwrap(), "ab1latest");
    assert_eq!(client.get_latest_height().await.unwrap(), 12345);
}

#[tokio::test]
async fn test_get_transaction() {
    let server = MockServer::start().await;
    let route = format!("/testnet3/transaction/{TX_ID}");
    mock_get(&server, &route, ResponseTemplate::new(200).set_body_json(execute_tx())).await;

    let tx = client_for(&server).get_transaction(TX_ID).await.unwrap();

    assert_eq!(tx.id(), TX_ID);
    assert!(tx.deployment().is_none());
    let transition = &tx.execution().unwrap().transitions[0];
    assert_eq!(transition.program.to_string(), "credits.aleo");
    assert_eq!(transition.finalize, Some(vec!["1u64".to_string()]));
    assert!(matches!(
        &transition.inputs[0],
        TransitionInput::Record { origin: Origin::Commitment(cm), .. } if cm == "cm0"
    ));
    assert!(matches!(&transition.outputs[1], TransitionOutput::ExternalRecord { id } if id == "out1"));
}

#[tokio::test]
async fn test_get_transactions_empty_block() {
    let server = MockServer::start().await;
    mock_get(&server, "/testnet3/transactions/0", ResponseTemplate::new(200).set_body_json(json!([]))).await;

    let txs = client_for(&server).get_transactions(0).await.unwrap();

    assert!(txs.is_empty());
}

#[tokio::test]
async fn test_get_transactions_keeps_order() {
    let server = MockServer::start().await;
    mock_get(
        &server,
        "/testnet3/transactions/5",
        ResponseTemplate::new(200).set_body_json(json!([deploy_tx(), execute_tx()])),
    )
    .await;

    let txs = client_for(&server).get_transactions(5).await.unwrap();

    let ids: Vec<&str> = txs.iter().map(|tx| tx.id()).collect();
    assert_eq!(ids, vec!["at1deploy", TX_ID]);
}

#[tokio::test]
async fn test_generic_get_uses_endpoint_response_type() {
    let server = MockServer::start().await;
    mock_get(&server, "/testnet3/block/7", ResponseTemplate::new(200).set_body_json(block(7))).await;
    mock_get(&server, "/testnet3/latest/height", ResponseTemplate::new(200).set_body_json(7)).await;

    let client = client_for(&server);
    let height: u32 = client.get(LatestHeight).await.unwrap();
    let block = client.get(BlockByHeight(height)).await.unwrap();

    assert_eq!(block.header.metadata.height, 7);
}

#[tokio::test]
async fn test_unknown_block_is_method_not_allowed() {
    let server = MockServer::start().await;
    mock_get(&server, "/testnet3/block/100000000", ResponseTemplate::new(404)).await;

    let err = client_for(&server).get_block(100_000_000).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::MethodNotAllowed);
}

#[tokio::test]
async fn test_malformed_transaction_is_unknown() {
    let server = MockServer::start().await;
    mock_get(
        &server,
        "/testnet3/transaction/at1bad",
        ResponseTemplate::new(200).set_body_json(json!({ "type": "execute", "id": "at1bad" })),
    )
    .await;

    let err = client_for(&server).get_transaction("at1bad").await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Unknown);
    assert!(matches!(err, HttpError::Decode { .. }));
}

#[tokio::test]
async fn test_client_keeps_only_origin() {
    let server = MockServer::start().await;
    mock_get(&server, "/testnet3/latest/height", ResponseTemplate::new(200).set_body_json(1)).await;

    let base_url = Url::parse(&format!("{}/ignored-path?x=1", server.uri())).unwrap();
    let client = NodeClient::new(base_url).unwrap();

    assert_eq!(client.origin(), server.uri());
    assert_eq!(client.get_latest_height().await.unwrap(), 1);
}

#[tokio::test]
async fn test_concurrent_calls_are_independent() {
    let server = MockServer::start().await;
    mock_get(&server, "/testnet3/latest/hash", ResponseTemplate::new(200).set_body_json("ab1latest")).await;
    mock_get(&server, "/testnet3/latest/height", ResponseTemplate::new(500)).await;

    let client = client_for(&server);
    let (hash, height) = tokio::join!(client.get_latest_hash(), client.get_latest_height());

    assert_eq!(hash.unwrap(), "ab1latest");
    assert_eq!(height.unwrap_err().kind(), ErrorKind::MethodNotAllowed);
}

#[tokio::test]
async fn test_is_online() {
    let server = MockServer::start().await;
    mock_get(&server, "/testnet3/latest/height", ResponseTemplate::new(200).set_body_json(3)).await;
    assert!(client_for(&server).is_online().await);

    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    let offline = NodeClient::new(Url::parse(&format!("http://127.0.0.1:{port}")).unwrap()).unwrap();
    assert!(!offline.is_online().await);
}

#[tokio::test]
async fn test_unreachable_node_is_network_unavailable() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let client = NodeClient::new(Url::parse(&format!("http://127.0.0.1:{port}")).unwrap()).unwrap();
    let err = client.get_latest_block().await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::NetworkUnavailable);
}

#[tokio::test]
async fn test_unresolvable_host_is_network_unavailable() {
    let client = NodeClient::new(Url::parse("http://no-such-host.invalid:4180").unwrap()).unwrap();
    let err = client.get_latest_height().await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::NetworkUnavailable);
}

#[tokio::test]
async fn test_timeout_keeps_original_error_as_unknown() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/testnet3/latest/height"))
        .respond_with(ResponseTemplate::new(200).set_body_json(1).set_delay(Duration::from_secs(2)))
        .mount(&server)
        .await;

    let http = reqwest::Client::builder().timeout(Duration::from_millis(100)).build().unwrap();
    let client = NodeClient::with_client(Url::parse(&server.uri()).unwrap(), http).unwrap();
    let err = client.get_latest_height().await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Unknown);
    assert!(matches!(err, HttpError::RequestFailed(ref e) if e.is_timeout()));
}
