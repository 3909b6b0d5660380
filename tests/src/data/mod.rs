use corpore_common::api::{Machine, Role, ServiceOrderRequest, Shift, WorkerRequest};

pub const DUMMY_WORKER: &str = "Ana";
pub const DUMMY_OTHER_WORKER: &str = "Bruno";
pub const DUMMY_DESCRIPTION: &str = "seal";
pub const DUMMY_OTHER_DESCRIPTION: &str = "oil leak";

pub fn worker_request() -> WorkerRequest {
    WorkerRequest {
        id: None,
        name: DUMMY_WORKER.to_string(),
        shift: Shift::Morning,
        active: true,
        role: Role::LineOperator1,
    }
}

pub fn other_worker_request() -> WorkerRequest {
    WorkerRequest {
        id: None,
        name: DUMMY_OTHER_WORKER.to_string(),
        shift: Shift::Night,
        active: true,
        role: Role::LineOperator3,
    }
}

pub fn service_order_request(worker_id: i32) -> ServiceOrderRequest {
    ServiceOrderRequest {
        id: None,
        machine: Machine::GasketMachine1.to_string(),
        completion_time: None,
        worker_id,
        description: DUMMY_DESCRIPTION.to_string(),
    }
}

pub fn other_service_order_request(worker_id: i32) -> ServiceOrderRequest {
    ServiceOrderRequest {
        id: None,
        machine: Machine::GasketMachine5.to_string(),
        completion_time: None,
        worker_id,
        description: DUMMY_OTHER_DESCRIPTION.to_string(),
    }
}
