use crate::data::{other_worker_request, worker_request, DUMMY_OTHER_WORKER, DUMMY_WORKER};
use crate::fixtures::server::IsolatedServer;
use crate::fixtures::*;
use crate::setup::*;
use corpore_common::api::{read_envelope, Role, Shift, Worker, WorkerRestApi};
use rstest::rstest;
use std::borrow::Cow;

#[rstest]
#[tokio::test]
pub async fn overwrites_fields_and_keeps_creation_time(isolated_server: IsolatedServer) {
    let client = isolated_server.client;
    let worker = setup_single_worker(&client).await;

    let envelope = client
        .update_worker(worker.id, other_worker_request())
        .await
        .unwrap();

    assert!(envelope.success);
    let updated = envelope.data.unwrap().pop().unwrap();
    assert_eq!(updated.id, worker.id);
    assert_eq!(updated.name, DUMMY_OTHER_WORKER);
    assert_eq!(updated.shift, Shift::Night);
    assert_eq!(updated.role, Role::LineOperator3);
    assert_eq!(updated.created_at, worker.created_at);
    assert!(updated.updated_at >= worker.updated_at);
}

#[rstest]
#[tokio::test]
pub async fn uses_id_from_path(isolated_server: IsolatedServer) {
    let client = isolated_server.client;
    let (worker, other) = setup_multiple_workers(&client).await;

    let mut request = worker_request();
    request.id = Some(worker.id);
    request.name = "Carla".to_string();
    let workers = client
        .update_worker(other.id, request)
        .await
        .unwrap()
        .data
        .unwrap();

    let names = workers.into_iter().map(|w| w.name).collect::<Vec<_>>();
    assert_eq!(names, [DUMMY_WORKER, "Carla"]);
}

#[rstest]
#[tokio::test]
pub async fn fails_for_nonexistent_id(isolated_server: IsolatedServer) {
    let client = isolated_server.client;
    setup_single_worker(&client).await;

    let result = client.update_worker(42, other_worker_request()).await;

    let err = result.unwrap_err().to_string();
    assert!(err.contains("500"), "{err}");

    let workers = client.get_workers().await.unwrap().data.unwrap();
    assert_eq!(workers.len(), 1);
    assert_eq!(workers[0].name, DUMMY_WORKER);
}

#[rstest]
#[tokio::test]
pub async fn rejects_out_of_range_id_with_envelope(isolated_server: IsolatedServer) {
    let client = isolated_server.client;
    setup_single_worker(&client).await;

    let response = client
        .put(Cow::Borrowed("worker/99999999999"))
        .json(&other_worker_request())
        .send()
        .await
        .unwrap();
    let err = read_envelope::<Vec<Worker>>(response)
        .await
        .unwrap_err()
        .to_string();

    assert!(err.contains("500"), "{err}");
    assert!(err.contains("99999999999"), "{err}");

    let workers = client.get_workers().await.unwrap().data.unwrap();
    assert_eq!(workers[0].name, DUMMY_WORKER);
}
