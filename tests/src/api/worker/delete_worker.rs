use crate::data::DUMMY_OTHER_WORKER;
use crate::fixtures::server::IsolatedServer;
use crate::fixtures::*;
use crate::setup::*;
use corpore_common::api::{ServiceOrderRestApi, WorkerRestApi, NO_DATA_FOUND};
use rstest::rstest;

#[rstest]
#[tokio::test]
pub async fn returns_remaining_workers(isolated_server: IsolatedServer) {
    let client = isolated_server.client;
    let (worker, _) = setup_multiple_workers(&client).await;

    let envelope = client.delete_worker(worker.id).await.unwrap();

    assert!(envelope.success);
    let workers = envelope.data.unwrap();
    assert_eq!(workers.len(), 1);
    assert_eq!(workers[0].name, DUMMY_OTHER_WORKER);
}

#[rstest]
#[tokio::test]
pub async fn removes_their_service_orders(isolated_server: IsolatedServer) {
    let client = isolated_server.client;
    let (worker, other, _) = setup_multiple_service_orders(&client).await;

    client.delete_worker(worker.id).await.unwrap();

    let orders = client.get_service_orders().await.unwrap().data.unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].worker_id, other.id);

    client.delete_worker(other.id).await.unwrap();

    let envelope = client.get_service_orders().await.unwrap();
    assert_eq!(envelope.message, NO_DATA_FOUND);
}

#[rstest]
#[tokio::test]
pub async fn fails_for_nonexistent_id(isolated_server: IsolatedServer) {
    let client = isolated_server.client;
    setup_single_worker(&client).await;

    let result = client.delete_worker(7).await;

    let err = result.unwrap_err().to_string();
    assert!(err.contains("500"), "{err}");
    assert!(err.contains("worker not found"), "{err}");
    let workers = client.get_workers().await.unwrap().data.unwrap();
    assert_eq!(workers.len(), 1);
}
