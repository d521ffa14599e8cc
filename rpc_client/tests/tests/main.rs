mod account;
mod key;
mod node;
mod wallet;

use banano_rpc_client::{BananoClient, RpcClientConfig};
use test_helpers::StubNode;

fn client_for(node: &StubNode) -> BananoClient {
    let config = RpcClientConfig::new(node.url().parse().unwrap());
    BananoClient::new(config).unwrap()
}
