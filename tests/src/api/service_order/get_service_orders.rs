use crate::data::{DUMMY_DESCRIPTION, DUMMY_OTHER_DESCRIPTION};
use crate::fixtures::server::IsolatedServer;
use crate::fixtures::*;
use crate::setup::*;
use corpore_common::api::{ServiceOrderRestApi, NO_DATA_FOUND};
use rstest::rstest;

#[rstest]
#[tokio::test]
pub async fn returns_no_results_for_empty_database(isolated_server: IsolatedServer) {
    let client = isolated_server.client;

    let envelope = client.get_service_orders().await.unwrap();

    assert!(envelope.success);
    assert_eq!(envelope.message, NO_DATA_FOUND);
    assert!(envelope.data.unwrap().is_empty());
}

#[rstest]
#[tokio::test]
pub async fn returns_no_results_for_database_with_only_workers(
    isolated_server: IsolatedServer,
) {
    let client = isolated_server.client;

    setup_multiple_workers(&client).await;

    let envelope = client.get_service_orders().await.unwrap();

    assert_eq!(envelope.message, NO_DATA_FOUND);
}

#[rstest]
#[tokio::test]
pub async fn attaches_assigned_workers(isolated_server: IsolatedServer) {
    let client = isolated_server.client;

    let (worker, other, _) = setup_multiple_service_orders(&client).await;

    let orders = client.get_service_orders().await.unwrap().data.unwrap();

    let descriptions = orders
        .iter()
        .map(|o| o.description.as_str())
        .collect::<Vec<_>>();
    assert_eq!(
        descriptions,
        [DUMMY_DESCRIPTION, DUMMY_OTHER_DESCRIPTION, DUMMY_DESCRIPTION]
    );
    assert_eq!(orders[0].worker.as_ref(), Some(&worker));
    assert_eq!(orders[1].worker.as_ref(), Some(&worker));
    assert_eq!(orders[2].worker.as_ref(), Some(&other));
}
