use crate::fixtures::server::IsolatedServer;
use crate::fixtures::*;
use crate::setup::*;
use corpore_common::api::WorkerRestApi;
use rstest::rstest;

#[rstest]
#[tokio::test]
pub async fn only_touches_active_flag(isolated_server: IsolatedServer) {
    let client = isolated_server.client;
    let worker = setup_single_worker(&client).await;

    let envelope = client.deactivate_worker(worker.id).await.unwrap();

    assert!(envelope.success);
    let deactivated = envelope.data.unwrap().pop().unwrap();
    assert!(!deactivated.active);
    assert_eq!(deactivated.name, worker.name);
    assert_eq!(deactivated.shift, worker.shift);
    assert_eq!(deactivated.role, worker.role);
    assert_eq!(deactivated.created_at, worker.created_at);
    assert!(deactivated.updated_at >= worker.updated_at);
}

#[rstest]
#[tokio::test]
pub async fn leaves_other_workers_alone(isolated_server: IsolatedServer) {
    let client = isolated_server.client;
    let (worker, other) = setup_multiple_workers(&client).await;

    let workers = client
        .deactivate_worker(other.id)
        .await
        .unwrap()
        .data
        .unwrap();

    assert_eq!(workers[0], worker);
    assert!(!workers[1].active);
}

#[rstest]
#[tokio::test]
pub async fn fails_for_nonexistent_id(isolated_server: IsolatedServer) {
    let client = isolated_server.client;
    let worker = setup_single_worker(&client).await;

    let result = client.deactivate_worker(worker.id + 1).await;

    let err = result.unwrap_err().to_string();
    assert!(err.contains("500"), "{err}");
    assert!(err.contains("worker not found"), "{err}");

    let unchanged = client.get_worker(worker.id).await.unwrap().data.unwrap();
    assert_eq!(unchanged, worker);
}
