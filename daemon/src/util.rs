use chrono::{Local, NaiveDateTime};

/// Wall-clock time of the host, this is what every timestamp in the database is recorded in.
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}
