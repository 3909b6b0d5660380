use crate::api::models::Worker;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// The machines a service order is usually opened for.
///
/// Orders store the machine as free text, this list is only used to hint at typos.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
    Serialize,
    Deserialize,
)]
pub enum Machine {
    #[strum(serialize = "Gasket-Machine-1")]
    #[serde(rename = "Gasket-Machine-1")]
    GasketMachine1,
    #[strum(serialize = "Gasket-Machine-2")]
    #[serde(rename = "Gasket-Machine-2")]
    GasketMachine2,
    #[strum(serialize = "Gasket-Machine-3")]
    #[serde(rename = "Gasket-Machine-3")]
    GasketMachine3,
    #[strum(serialize = "Gasket-Machine-4")]
    #[serde(rename = "Gasket-Machine-4")]
    GasketMachine4,
    #[strum(serialize = "Gasket-Machine-5")]
    #[serde(rename = "Gasket-Machine-5")]
    GasketMachine5,
    #[strum(serialize = "Gasket-Machine-6")]
    #[serde(rename = "Gasket-Machine-6")]
    GasketMachine6,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceOrder {
    pub id: i32,
    pub machine: String,
    pub start_time: NaiveDateTime,
    pub completion_time: Option<NaiveDateTime>,
    pub worker_id: i32,
    pub description: String,
    pub worker: Option<Worker>,
}

/// Body of `POST /service-order` and `PUT /service-order/{id}`.
///
/// `completion_time` is only honored on creation, an update always completes the order
/// at the time the daemon processes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceOrderRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    pub machine: String,
    #[serde(default)]
    pub completion_time: Option<NaiveDateTime>,
    pub worker_id: i32,
    pub description: String,
}
