use crate::client_for;
use banano_rpc_client::{Amount, Decimal, Unit, UnitAmount};
use serde_json::json;
use test_helpers::{StubNode, StubReply};

#[tokio::test]
async fn account_count() {
    let node = StubNode::with_actions([("frontier_count", json!({"count": "1920"}))])
        .await
        .unwrap();
    let client = client_for(&node);

    assert_eq!(client.node().account_count().await.unwrap(), 1920);
}

#[tokio::test]
async fn block_count() {
    let node = StubNode::with_actions([(
        "block_count",
        json!({"count": "1000", "unchecked": "10", "cemented": "900"}),
    )])
    .await
    .unwrap();
    let client = client_for(&node);

    let count = client.node().block_count().await.unwrap();

    assert_eq!(count.count, 1000);
    assert_eq!(count.unchecked, 10);
    assert_eq!(count.cemented, Some(900));
}

#[tokio::test]
async fn bootstrap_sends_port_as_string() {
    let node = StubNode::with_actions([("bootstrap", json!({"success": ""}))])
        .await
        .unwrap();
    let client = client_for(&node);

    client.node().bootstrap("::ffff:127.0.0.1", 7071).await.unwrap();

    assert_eq!(
        node.last_request().unwrap().body,
        json!({"action": "bootstrap", "address": "::ffff:127.0.0.1", "port": "7071"})
    );
}

#[tokio::test]
async fn representatives_in_ban() {
    let node = StubNode::with_actions([(
        "representatives",
        json!({"representatives": {
            "ban_1rep": "150000000000000000000000000000",
            "ban_3rep": "0"
        }}),
    )])
    .await
    .unwrap();
    let client = client_for(&node);

    let reps = client.node().representatives(Unit::Ban).await.unwrap();

    assert_eq!(
        reps,
        vec![
            (
                "ban_1rep".to_string(),
                UnitAmount::Ban("1.5".parse::<Decimal>().unwrap())
            ),
            ("ban_3rep".to_string(), UnitAmount::Ban(Decimal::zero())),
        ]
    );
}

#[tokio::test]
async fn representatives_online_as_list_or_object() {
    let list = StubNode::with_actions([(
        "representatives_online",
        json!({"representatives": ["ban_1a", "ban_1b"]}),
    )])
    .await
    .unwrap();
    let object = StubNode::with_actions([(
        "representatives_online",
        json!({"representatives": {"ban_1a": "", "ban_1b": ""}}),
    )])
    .await
    .unwrap();

    let from_list = client_for(&list).node().representatives_online().await.unwrap();
    let from_object = client_for(&object)
        .node()
        .representatives_online()
        .await
        .unwrap();

    assert_eq!(from_list, vec!["ban_1a", "ban_1b"]);
    assert_eq!(from_object, from_list);
}

#[tokio::test]
async fn version() {
    let node = StubNode::with_actions([(
        "version",
        json!({
            "rpc_version": "1",
            "store_version": "21",
            "protocol_version": "19",
            "node_vendor": "Banano V27.0",
            "network": "live"
        }),
    )])
    .await
    .unwrap();
    let client = client_for(&node);

    let version = client.node().version().await.unwrap();

    assert_eq!(version.node_vendor, "Banano V27.0");
    assert_eq!(version.network.as_deref(), Some("live"));
    assert_eq!(version.build_info, None);
}

#[tokio::test]
async fn available_supply_in_raw() {
    let node = StubNode::with_actions([(
        "available_supply",
        json!({"available": "340282366920938463463374607431768211455"}),
    )])
    .await
    .unwrap();
    let client = client_for(&node);

    let supply = client.node().available_supply(Unit::Raw).await.unwrap();

    assert_eq!(supply, UnitAmount::Raw(Amount::MAX));
}

#[tokio::test]
async fn node_error_becomes_error() {
    let node = StubNode::replying(StubReply::node_error("RPC control is disabled"))
        .await
        .unwrap();
    let client = client_for(&node);

    let error = client.node().stop().await.unwrap_err();

    assert_eq!(
        error.to_string(),
        "node returned error: \"RPC control is disabled\""
    );
}

#[tokio::test]
async fn unchecked_empty() {
    let node = StubNode::with_actions([("unchecked", json!({"blocks": ""}))])
        .await
        .unwrap();
    let client = client_for(&node);

    assert!(client.node().unchecked(10).await.unwrap().is_empty());
    assert_eq!(node.last_request().unwrap().body["json_block"], "true");
}
