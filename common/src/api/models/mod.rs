/// Maps a string-backed enum onto a sqlite TEXT column using the same names it has on the wire.
#[cfg(feature = "diesel")]
macro_rules! text_column {
    ($ty:ty) => {
        impl diesel::deserialize::FromSql<diesel::sql_types::Text, diesel::sqlite::Sqlite> for $ty {
            fn from_sql(
                bytes: diesel::sqlite::SqliteValue<'_, '_, '_>,
            ) -> diesel::deserialize::Result<Self> {
                let value = <String as diesel::deserialize::FromSql<
                    diesel::sql_types::Text,
                    diesel::sqlite::Sqlite,
                >>::from_sql(bytes)?;
                Ok(value.parse::<$ty>()?)
            }
        }

        impl diesel::serialize::ToSql<diesel::sql_types::Text, diesel::sqlite::Sqlite> for $ty {
            fn to_sql<'b>(
                &'b self,
                out: &mut diesel::serialize::Output<'b, '_, diesel::sqlite::Sqlite>,
            ) -> diesel::serialize::Result {
                out.set_value(AsRef::<str>::as_ref(self));
                Ok(diesel::serialize::IsNull::No)
            }
        }
    };
}

#[cfg(feature = "diesel")]
pub(crate) use text_column;

mod envelope;
mod service_order;
mod worker;

pub use envelope::*;
pub use service_order::*;
pub use worker::*;
