use chainsetup_rpc::{CandidateSource, RegistryClient};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> RegistryClient {
    RegistryClient::new(format!("{}/chains/eip155-{{id}}.json", server.uri())).unwrap()
}

#[test]
fn test_chain_url_substitution() {
    let client = RegistryClient::new("https://registry.example/eip155-{id}.json").unwrap();
    assert_eq!(client.chain_url("137"), "https://registry.example/eip155-137.json");
}

/// Candidates come from the `rpc` key, in registry order
#[tokio::test]
async fn test_fetch_candidates() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/chains/eip155-1.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "Ethereum Mainnet",
            "chainId": 1,
            "rpc": ["http://a.example", "http://b.example"],
            "nativeCurrency": { "name": "Ether", "symbol": "ETH", "decimals": 18 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let candidates = client(&server).fetch_candidates("1").await;
    assert_eq!(
        candidates,
        Some(vec!["http://a.example".to_string(), "http://b.example".to_string()])
    );
}

/// Missing `rpc` key means no candidates
#[tokio::test]
async fn test_fetch_without_rpc_key() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/chains/eip155-10.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "name": "OP Mainnet" })))
        .mount(&server)
        .await;

    assert_eq!(client(&server).fetch_candidates("10").await, None);
}

/// Non-2xx and unparsable documents collapse to None
#[tokio::test]
async fn test_fetch_failures_return_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/chains/eip155-5000.json"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/chains/eip155-56.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = client(&server);
    assert_eq!(client.fetch_candidates("5000").await, None);
    assert_eq!(client.fetch_candidates("56").await, None);
}

/// Transport failures collapse to None
#[tokio::test]
async fn test_fetch_unreachable_registry() {
    let client = RegistryClient::new("http://127.0.0.1:9/eip155-{id}.json").unwrap();
    assert_eq!(client.fetch_candidates("1").await, None);
}
