pub mod service_order;
pub mod worker;

pub use self::service_order::{NewServiceOrder, ServiceOrderRow, ServiceOrderUpdate};
pub use self::worker::{NewWorker, WorkerRow, WorkerUpdate};
