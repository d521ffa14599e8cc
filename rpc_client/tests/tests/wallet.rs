use crate::client_for;
use banano_rpc_client::{Amount, Decimal, Unit, UnitAmount};
use serde_json::json;
use test_helpers::StubNode;

const WALLET: &str = "000D1BAEC8EC208142C99059B393051BAC8380F9B5A2E6B2489A277D81789F3F";
const ACCOUNT: &str = "ban_3e3j5tkog48pnny9dmfzj1r16pg8t1e76dz5tmac6iq689wyjfpiij4txtdo";
const DESTINATION: &str = "ban_1hbmwtnwq8c7pkuekd1chzohjcdgqnaspwmtwpg8i8ytdcf1znsh4xn7rb6g";

#[tokio::test]
async fn create_wallet_and_account() {
    let node = StubNode::with_actions([
        ("wallet_create", json!({"wallet": WALLET})),
        ("account_create", json!({"account": ACCOUNT})),
    ])
    .await
    .unwrap();
    let client = client_for(&node);

    let wallet = client.create_wallet(None).await.unwrap();
    let account = wallet.create_account().await.unwrap();

    assert_eq!(wallet.id(), WALLET);
    assert_eq!(account.address(), ACCOUNT);
    assert_eq!(account.wallet(), WALLET);
}

#[tokio::test]
async fn send_ban_amount_as_raw() {
    let node = StubNode::with_actions([(
        "send",
        json!({"block": "000D1BAEC8EC208142C99059B393051BAC8380F9B5A2E6B2489A277D81789F3F"}),
    )])
    .await
    .unwrap();
    let client = client_for(&node);
    let account = client.wallet_account(WALLET, ACCOUNT);

    let hash = account
        .send(DESTINATION, "1.01".parse::<Decimal>().unwrap(), Some("tx-1"))
        .await
        .unwrap();

    assert_eq!(hash.len(), 64);
    assert_eq!(
        node.last_request().unwrap().body,
        json!({
            "action": "send",
            "wallet": WALLET,
            "source": ACCOUNT,
            "destination": DESTINATION,
            "amount": "101000000000000000000000000000",
            "id": "tx-1"
        })
    );
}

#[tokio::test]
async fn send_raw_amount() {
    let node = StubNode::with_actions([("send", json!({"block": "AB"}))])
        .await
        .unwrap();
    let client = client_for(&node);

    client
        .wallet_account(WALLET, ACCOUNT)
        .send(DESTINATION, Amount::raw(7), None)
        .await
        .unwrap();

    let request = node.last_request().unwrap().body;
    assert_eq!(request["amount"], "7");
    assert!(request.get("id").is_none());
}

#[tokio::test]
async fn zero_amount_is_not_sent() {
    let node = StubNode::with_actions([("send", json!({"block": "AB"}))])
        .await
        .unwrap();
    let client = client_for(&node);
    let account = client.wallet_account(WALLET, ACCOUNT);

    assert!(account.send(DESTINATION, Amount::zero(), None).await.is_err());
    assert!(account
        .send(DESTINATION, "0.000000000000000000000000000001".parse::<Decimal>().unwrap(), None)
        .await
        .is_err());
    assert!(node.received().is_empty());
}

#[tokio::test]
async fn balances_per_account() {
    let node = StubNode::with_actions([(
        "wallet_balances",
        json!({"balances": {
            ACCOUNT: {
                "balance": "1000000000000000000000000000000",
                "pending": "0"
            }
        }}),
    )])
    .await
    .unwrap();
    let client = client_for(&node);

    let balances = client.wallet(WALLET).balance(Unit::Ban).await.unwrap();

    assert_eq!(balances.len(), 1);
    assert_eq!(balances[0].0, ACCOUNT);
    assert_eq!(balances[0].1.balance, UnitAmount::Ban(Decimal::from(10)));
    assert_eq!(balances[0].1.pending, UnitAmount::Ban(Decimal::zero()));
}

#[tokio::test]
async fn pending_per_account() {
    let node = StubNode::with_actions([(
        "wallet_pending",
        json!({"blocks": {
            ACCOUNT: {
                "142A538F36833D1CC78B94E11C766F75818F8B940771335C6C1B8AB880C5BB1D": {
                    "amount": "6000000000000000000000000000000",
                    "source": DESTINATION
                }
            }
        }}),
    )])
    .await
    .unwrap();
    let client = client_for(&node);

    let pending = client.wallet(WALLET).pending(1, Unit::Raw).await.unwrap();

    assert_eq!(pending[0].0, ACCOUNT);
    assert_eq!(
        pending[0].1[0].amount,
        Some(UnitAmount::Raw(Amount::raw(6000000000000000000000000000000)))
    );
    assert_eq!(pending[0].1[0].source.as_deref(), Some(DESTINATION));
}

#[tokio::test]
async fn passwords_and_locking() {
    let node = StubNode::with_actions([
        ("password_enter", json!({"valid": "0"})),
        ("password_change", json!({"changed": "1"})),
        ("wallet_locked", json!({"locked": "0"})),
        ("wallet_lock", json!({"locked": "1"})),
    ])
    .await
    .unwrap();
    let client = client_for(&node);
    let wallet = client.wallet(WALLET);

    assert!(!wallet.enter_password("wrong").await.unwrap());
    assert!(wallet.change_password("secret").await.unwrap());
    assert!(!wallet.locked().await.unwrap());
    assert!(wallet.lock().await.unwrap());
    assert!(wallet.exists().await.unwrap());
}

#[tokio::test]
async fn info() {
    let node = StubNode::with_actions([(
        "wallet_info",
        json!({
            "balance": "10000",
            "pending": "1",
            "accounts_count": "3",
            "adhoc_count": "1",
            "deterministic_count": "2",
            "deterministic_index": "2"
        }),
    )])
    .await
    .unwrap();
    let client = client_for(&node);

    let info = client.wallet(WALLET).info(Unit::Raw).await.unwrap();

    assert_eq!(info.balance, UnitAmount::Raw(Amount::raw(10000)));
    assert_eq!(info.accounts_count, 3);
    assert_eq!(info.deterministic_index, 2);
}

#[tokio::test]
async fn frontiers_and_work() {
    let node = StubNode::with_actions([
        ("wallet_frontiers", json!({"frontiers": {ACCOUNT: "ABCD"}})),
        ("wallet_work_get", json!({"works": {ACCOUNT: "432e5cf728c90f4f"}})),
    ])
    .await
    .unwrap();
    let client = client_for(&node);
    let wallet = client.wallet(WALLET);

    assert_eq!(
        wallet.frontiers().await.unwrap(),
        vec![(ACCOUNT.to_string(), "ABCD".to_string())]
    );
    assert_eq!(
        wallet.work().await.unwrap(),
        vec![(ACCOUNT.to_string(), "432e5cf728c90f4f".to_string())]
    );
}

#[tokio::test]
async fn wallet_account_commands() {
    let node = StubNode::with_actions([
        ("receive", json!({"block": "EE5286AB32F580AB65FD84A69E107C69FBEB571DEC4D99297E19E3FA5529547B"})),
        ("account_representative_set", json!({"block": "AB"})),
        ("account_remove", json!({"removed": "1"})),
        ("work_set", json!({"success": ""})),
    ])
    .await
    .unwrap();
    let client = client_for(&node);
    let account = client.wallet(WALLET).account(ACCOUNT);

    account.receive("53EAA25CE28FA0E6D55EA9704B32604A736966255948594D55CBB05267CECD48").await.unwrap();
    assert_eq!(account.change_representative(DESTINATION).await.unwrap(), "AB");
    account.set_work("432e5cf728c90f4f").await.unwrap();
    assert!(account.remove().await.unwrap());

    let actions: Vec<_> = node
        .received()
        .iter()
        .filter_map(|r| r.action().map(str::to_owned))
        .collect();
    assert_eq!(
        actions,
        vec!["receive", "account_representative_set", "work_set", "account_remove"]
    );
}
