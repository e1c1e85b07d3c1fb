use std::sync::Arc;
use std::time::Duration;

use proxylist_common::collection::Users;
use proxylist_common::config::RefreshPolicy;
use proxylist_core::loader::{LoadOutcome, Loader};
use proxylist_core::sink::MemoryList;

use crate::support::{MockGateway, Reply, USERS, wait_for_hits};

const SLOW_OLD: &str = r#"[{"id": 1, "username": "old", "email": "old@x.com"}]"#;
const FAST_NEW: &str = r#"[
    {"id": 1, "username": "new", "email": "new@x.com"},
    {"id": 2, "username": "newer", "email": "newer@x.com"}
]"#;

/// Fires two loads; the first request is answered after the second one.
async fn double_load(policy: RefreshPolicy) -> (LoadOutcome, LoadOutcome, MemoryList) {
    let gateway = MockGateway::start().await.unwrap();
    gateway.route(USERS, Reply::json(SLOW_OLD).after(Duration::from_millis(300)));
    gateway.route(USERS, Reply::json(FAST_NEW));

    let list = MemoryList::new();
    let loader: Loader<Users> =
        Loader::new(Arc::new(gateway.client()), Arc::new(list.clone()), policy);

    let first = tokio::spawn({
        let loader = loader.clone();
        async move { loader.load().await }
    });
    wait_for_hits(&gateway, 1).await;
    let second = tokio::spawn({
        let loader = loader.clone();
        async move { loader.load().await }
    });

    let (first, second) = (first.await.unwrap(), second.await.unwrap());
    (first, second, list)
}

#[tokio::test]
async fn last_response_wins_without_mixing() {
    let (first, second, list) = double_load(RefreshPolicy::LastResponseWins).await;

    assert_eq!(first, LoadOutcome::Rendered(1));
    assert_eq!(second, LoadOutcome::Rendered(2));
    assert_eq!(list.texts(), vec!["ID: 1, Username: old, Email: old@x.com"]);
}

#[tokio::test]
async fn latest_request_wins_drops_the_slow_answer() {
    let (first, second, list) = double_load(RefreshPolicy::LatestRequestWins).await;

    assert_eq!(first, LoadOutcome::Superseded);
    assert_eq!(second, LoadOutcome::Rendered(2));
    assert_eq!(
        list.texts(),
        vec![
            "ID: 1, Username: new, Email: new@x.com",
            "ID: 2, Username: newer, Email: newer@x.com",
        ]
    );
}
