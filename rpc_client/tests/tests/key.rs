use crate::client_for;
use serde_json::json;
use test_helpers::StubNode;

fn key_pair() -> serde_json::Value {
    json!({
        "private": "9F0E444C69F77A49BD0BE89DB92C38FE713E0963165CCA12FAF5712D7657120F",
        "public": "C008B814A7D269A1FA3C6528B19201A24D797912DB9996FF02A1FF356E45552B",
        "account": "ban_3i1aq1cchnmbn9x5rsbap8b15akfh7wj7pwskuzi7ahz8oq6cobd99d4r3b7"
    })
}

#[tokio::test]
async fn random_key() {
    let node = StubNode::with_actions([("key_create", key_pair())])
        .await
        .unwrap();
    let client = client_for(&node);

    let key = client.key().generate(None, 0).await.unwrap();

    assert!(key.account.starts_with("ban_"));
    assert_eq!(node.last_request().unwrap().body, json!({"action": "key_create"}));
}

#[tokio::test]
async fn deterministic_key() {
    let node = StubNode::with_actions([("deterministic_key", key_pair())])
        .await
        .unwrap();
    let client = client_for(&node);
    let seed = "0000000000000000000000000000000000000000000000000000000000000000";

    let key = client.key().generate(Some(seed), 3).await.unwrap();

    assert_eq!(
        key.public,
        "C008B814A7D269A1FA3C6528B19201A24D797912DB9996FF02A1FF356E45552B"
    );
    assert_eq!(
        node.last_request().unwrap().body,
        json!({"action": "deterministic_key", "seed": seed, "index": "3"})
    );
}

#[tokio::test]
async fn expand() {
    let node = StubNode::with_actions([("key_expand", key_pair())])
        .await
        .unwrap();
    let client = client_for(&node);

    let key = client
        .key()
        .expand("9F0E444C69F77A49BD0BE89DB92C38FE713E0963165CCA12FAF5712D7657120F")
        .await
        .unwrap();

    assert_eq!(
        key.account,
        "ban_3i1aq1cchnmbn9x5rsbap8b15akfh7wj7pwskuzi7ahz8oq6cobd99d4r3b7"
    );
}
