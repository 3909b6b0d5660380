use chrono::NaiveDateTime;
#[cfg(feature = "diesel")]
use diesel::{AsExpression, FromSqlRow};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, AsRefStr, Serialize, Deserialize,
)]
#[cfg_attr(feature = "diesel", derive(FromSqlRow, AsExpression))]
#[cfg_attr(feature = "diesel", diesel(sql_type = diesel::sql_types::Text))]
pub enum Shift {
    Morning,
    Afternoon,
    Night,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, AsRefStr, Serialize, Deserialize,
)]
#[cfg_attr(feature = "diesel", derive(FromSqlRow, AsExpression))]
#[cfg_attr(feature = "diesel", diesel(sql_type = diesel::sql_types::Text))]
pub enum Role {
    #[strum(serialize = "Line-Operator-1")]
    #[serde(rename = "Line-Operator-1")]
    LineOperator1,
    #[strum(serialize = "Line-Operator-2")]
    #[serde(rename = "Line-Operator-2")]
    LineOperator2,
    #[strum(serialize = "Line-Operator-3")]
    #[serde(rename = "Line-Operator-3")]
    LineOperator3,
}

#[cfg(feature = "diesel")]
super::text_column!(Shift);
#[cfg(feature = "diesel")]
super::text_column!(Role);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Worker {
    pub id: i32,
    pub name: String,
    pub shift: Shift,
    pub active: bool,
    pub role: Role,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

/// Body of `POST /worker` and `PUT /worker/{id}`.
///
/// The `id` is accepted for compatibility with clients that send the full record back, the
/// daemon always uses the id from the path. `active` is also accepted under its legacy name
/// `status` and defaults to `true`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkerRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    pub name: String,
    pub shift: Shift,
    #[serde(default = "default_active", alias = "status")]
    pub active: bool,
    pub role: Role,
}

fn default_active() -> bool {
    true
}
