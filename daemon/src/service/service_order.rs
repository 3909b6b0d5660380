use crate::models::{NewServiceOrder, ServiceOrderRow, ServiceOrderUpdate};
use crate::service::CrudService;
use chrono::NaiveDateTime;
use corpore_common::api::{ServiceOrder, ServiceOrderRequest, SERVICE_ORDER_NOT_FOUND};
use corpore_common::errors::*;
use diesel::SqliteConnection;

pub struct ServiceOrders;

impl CrudService for ServiceOrders {
    type Record = ServiceOrder;
    type Request = ServiceOrderRequest;

    const NOT_FOUND: &'static str = SERVICE_ORDER_NOT_FOUND;

    fn list(connection: &mut SqliteConnection) -> Result<Vec<ServiceOrder>> {
        let orders = ServiceOrderRow::list(connection)?;
        Ok(orders
            .into_iter()
            .map(|(order, worker)| order.into_api(worker))
            .collect())
    }

    fn find(id: i32, connection: &mut SqliteConnection) -> Result<Option<ServiceOrder>> {
        let order = ServiceOrderRow::get_id(id, connection)?;
        Ok(order.map(|(order, worker)| order.into_api(worker)))
    }

    fn insert(
        request: ServiceOrderRequest,
        now: NaiveDateTime,
        connection: &mut SqliteConnection,
    ) -> Result<()> {
        NewServiceOrder {
            machine: request.machine,
            start_time: now,
            completion_time: request.completion_time,
            worker_id: request.worker_id,
            description: request.description,
        }
        .insert(connection)
    }

    /// Editing an order closes it, whatever completion time the client sent is replaced.
    fn update(
        id: i32,
        request: ServiceOrderRequest,
        now: NaiveDateTime,
        connection: &mut SqliteConnection,
    ) -> Result<()> {
        if let Some(body_id) = request.id {
            if body_id != id {
                warn!(
                    "Ignoring service order id {} from request body, updating service order {} from path",
                    body_id, id
                );
            }
        }
        if request.completion_time.is_some() {
            debug!("Discarding completion time from request body for service order {}", id);
        }

        ServiceOrderUpdate {
            machine: request.machine,
            completion_time: Some(now),
            worker_id: request.worker_id,
            description: request.description,
        }
        .apply(id, connection)
    }

    fn delete(id: i32, connection: &mut SqliteConnection) -> Result<()> {
        ServiceOrderRow::delete(id, connection)
    }
}
