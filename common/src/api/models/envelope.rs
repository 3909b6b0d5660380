use serde::{Deserialize, Serialize};

pub const NO_DATA_FOUND: &str = "no data found";
pub const MUST_PROVIDE_DATA: &str = "must provide data";
pub const WORKER_NOT_FOUND: &str = "worker not found";
pub const SERVICE_ORDER_NOT_FOUND: &str = "service order not found";

/// Uniform wrapper around every response the daemon sends.
///
/// A failed operation carries `success = false` and a human readable `message`, the
/// payload is `None` in that case. A successful operation may still carry an informational
/// message, e.g. when a listing came back empty.
/// ```
/// use corpore_common::api::models::Envelope;
///
/// let envelope = Envelope::<Vec<i32>>::default();
/// assert!(envelope.success);
/// assert!(envelope.message.is_empty());
/// assert_eq!(envelope.data, None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    #[serde(default)]
    pub message: String,
    #[serde(default = "default_success")]
    pub success: bool,
}

fn default_success() -> bool {
    true
}

impl<T> Default for Envelope<T> {
    fn default() -> Self {
        Envelope {
            data: None,
            message: String::new(),
            success: true,
        }
    }
}

impl<T> Envelope<T> {
    pub fn success(data: T) -> Self {
        Envelope {
            data: Some(data),
            ..Default::default()
        }
    }

    pub fn failure<I: Into<String>>(message: I) -> Self {
        Envelope {
            data: None,
            message: message.into(),
            success: false,
        }
    }

    pub fn with_message<I: Into<String>>(mut self, message: I) -> Self {
        self.message = message.into();
        self
    }
}
