pub mod service_order;
pub mod worker;
