use crate::data::DUMMY_WORKER;
use crate::fixtures::server::IsolatedServer;
use crate::fixtures::*;
use crate::setup::*;
use corpore_common::api::{Envelope, Role, Shift, Worker, WorkerRestApi};
use rstest::rstest;
use std::borrow::Cow;

#[rstest]
#[tokio::test]
pub async fn returns_no_results_for_empty_database(isolated_server: IsolatedServer) {
    let result = isolated_server.client.get_worker(1).await;

    let err = result.unwrap_err().to_string();
    assert!(err.contains("500"), "{err}");
    assert!(err.contains("worker not found"), "{err}");
}

#[rstest]
#[tokio::test]
pub async fn returns_result_for_existing_id(isolated_server: IsolatedServer) {
    let worker = setup_single_worker(&isolated_server.client).await;

    let envelope = isolated_server.client.get_worker(worker.id).await.unwrap();

    assert!(envelope.success);
    let result = envelope.data.unwrap();
    assert_eq!(result, worker);
    assert_eq!(result.name, DUMMY_WORKER);
    assert_eq!(result.shift, Shift::Morning);
    assert_eq!(result.role, Role::LineOperator1);
}

#[rstest]
#[tokio::test]
pub async fn returns_no_result_for_nonexistent_id(isolated_server: IsolatedServer) {
    setup_single_worker(&isolated_server.client).await;

    let result = isolated_server.client.get_worker(99999).await;

    assert!(result.is_err())
}

#[rstest]
#[tokio::test]
pub async fn rejects_non_numeric_id_with_envelope(isolated_server: IsolatedServer) {
    let response = isolated_server
        .client
        .get(Cow::Borrowed("worker/abc"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 500);
    let envelope = response.json::<Envelope<Worker>>().await.unwrap();
    assert!(!envelope.success);
    assert!(envelope.message.contains("abc"), "{}", envelope.message);
    assert_eq!(envelope.data, None);
}
