pub use anyhow::{anyhow, bail, format_err, Context, Error};
pub use log::{debug, error, info, trace, warn};
pub type Result<T> = ::std::result::Result<T, Error>;
