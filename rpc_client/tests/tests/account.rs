use crate::client_for;
use banano_rpc_client::{Amount, Decimal, Unit, UnitAmount};
use serde_json::json;
use test_helpers::{StubNode, StubReply};

const ACCOUNT: &str = "ban_1ka1ium4pfue3uxtntqsrib8mumxgazsjf58gidh1xeo5te3whsq8z476goo";

fn ban(value: &str) -> UnitAmount {
    UnitAmount::Ban(value.parse::<Decimal>().unwrap())
}

#[tokio::test]
async fn balance_in_ban() {
    let node = StubNode::with_actions([(
        "account_balance",
        json!({
            "balance": "100000000000000000000000000000000",
            "pending": "1"
        }),
    )])
    .await
    .unwrap();
    let client = client_for(&node);

    let balance = client.account(ACCOUNT).balance(Unit::Ban).await.unwrap();

    assert_eq!(balance.balance, ban("1000"));
    assert_eq!(balance.pending, ban("0.00000000000000000000000000001"));
    assert_eq!(
        node.last_request().unwrap().body,
        json!({"action": "account_balance", "account": ACCOUNT})
    );
}

#[tokio::test]
async fn balance_in_raw_with_receivable() {
    let node = StubNode::with_actions([(
        "account_balance",
        json!({"balance": "1000", "receivable": "0"}),
    )])
    .await
    .unwrap();
    let client = client_for(&node);

    let balance = client.account(ACCOUNT).balance(Unit::Raw).await.unwrap();

    assert_eq!(balance.balance, UnitAmount::Raw(Amount::raw(1000)));
    assert_eq!(balance.pending, UnitAmount::Raw(Amount::zero()));
}

#[tokio::test]
async fn malformed_raw_amount() {
    let node = StubNode::with_actions([(
        "account_balance",
        json!({"balance": "lots", "pending": "0"}),
    )])
    .await
    .unwrap();
    let client = client_for(&node);

    assert!(client.account(ACCOUNT).balance(Unit::Raw).await.is_err());
}

#[tokio::test]
async fn history() {
    let node = StubNode::with_actions([(
        "account_history",
        json!({
            "account": ACCOUNT,
            "history": [{
                "type": "send",
                "account": "ban_3dest",
                "amount": "200000000000000000000000000000",
                "local_timestamp": "1551532723",
                "height": "60",
                "hash": "80392607E85E73CC3E94B4126F24488EBDFEB174944B890C97E8F36D89591DC5"
            }],
            "previous": "8D3AB98B301224253750D448B4BD997132400CEDD0A8432F775724F2D9821C72"
        }),
    )])
    .await
    .unwrap();
    let client = client_for(&node);

    let history = client.account(ACCOUNT).history(1, Unit::Ban).await.unwrap();

    assert_eq!(history.len(), 1);
    assert_eq!(history[0].kind, "send");
    assert_eq!(history[0].amount, ban("2"));
    assert_eq!(history[0].height, Some(60));
    assert_eq!(node.last_request().unwrap().body["count"], "1");
}

#[tokio::test]
async fn empty_history() {
    let node = StubNode::with_actions([(
        "account_history",
        json!({"account": ACCOUNT, "history": ""}),
    )])
    .await
    .unwrap();
    let client = client_for(&node);

    let history = client.account(ACCOUNT).history(10, Unit::Raw).await.unwrap();

    assert!(history.is_empty());
}

#[tokio::test]
async fn info() {
    let node = StubNode::with_actions([(
        "account_info",
        json!({
            "frontier": "FF84533A571D953A596EA401FD41743AC85D04F406E76FDE4408EAED50B473C5",
            "open_block": "991CF190094C00F0B68E2E5F75F6BEE95A2E0BD93CEAA4A6734DB9F19B728948",
            "representative_block": "991CF190094C00F0B68E2E5F75F6BEE95A2E0BD93CEAA4A6734DB9F19B728948",
            "balance": "235580100176034320859259343606608761791",
            "modified_timestamp": "1501793775",
            "block_count": "33",
            "representative": "ban_1rep",
            "weight": "1105577030935649664609129644855132177",
            "pending": "2309370929000000000000000000000000"
        }),
    )])
    .await
    .unwrap();
    let client = client_for(&node);

    let info = client.account(ACCOUNT).info(Unit::Raw).await.unwrap();

    assert_eq!(info.block_count, 33);
    assert_eq!(info.representative.as_deref(), Some("ban_1rep"));
    assert_eq!(
        info.pending,
        Some(UnitAmount::Raw(Amount::raw(2309370929000000000000000000000000)))
    );
    let request = node.last_request().unwrap().body;
    assert_eq!(request["representative"], "true");
    assert_eq!(request["weight"], "true");
}

#[tokio::test]
async fn pending_with_threshold_in_ban() {
    let node = StubNode::with_actions([(
        "pending",
        json!({"blocks": {
            "000D1BAEC8EC208142C99059B393051BAC8380F9B5A2E6B2489A277D81789F3F": {
                "amount": "600000000000000000000000000000",
                "source": "ban_1sender"
            }
        }}),
    )])
    .await
    .unwrap();
    let client = client_for(&node);

    let blocks = client
        .account(ACCOUNT)
        .pending(5, Some(ban("1")), Unit::Ban)
        .await
        .unwrap();

    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].amount, Some(ban("6")));
    assert_eq!(blocks[0].source.as_deref(), Some("ban_1sender"));
    let request = node.last_request().unwrap().body;
    assert_eq!(request["threshold"], "100000000000000000000000000000");
    assert_eq!(request["count"], "5");
}

#[tokio::test]
async fn pending_as_hash_list() {
    let node = StubNode::with_actions([("pending", json!({"blocks": ["A1", "B2"]}))])
        .await
        .unwrap();
    let client = client_for(&node);

    let blocks = client
        .account(ACCOUNT)
        .pending(2, None, Unit::Raw)
        .await
        .unwrap();

    let hashes: Vec<_> = blocks.iter().map(|b| b.hash.as_str()).collect();
    assert_eq!(hashes, vec!["A1", "B2"]);
    assert!(blocks.iter().all(|b| b.amount.is_none()));
}

#[tokio::test]
async fn exists() {
    let opened = StubNode::with_actions([("account_info", json!({"open_block": "991C"}))])
        .await
        .unwrap();
    let unopened = StubNode::replying(StubReply::node_error("Account not found"))
        .await
        .unwrap();

    assert!(client_for(&opened).account(ACCOUNT).exists().await.unwrap());
    assert!(!client_for(&unopened).account(ACCOUNT).exists().await.unwrap());
}
