//! Order validation result type.
//!
//! The validation logic lives in `application::validation`.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::error::OrderValidationError;

/// Outcome of validating an order form.
///
/// Rejections carry exactly one reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    /// The order may be signed and submitted.
    Accepted,

    /// The order must not be submitted.
    Rejected(OrderValidationError),
}

impl ValidationResult {
    /// Return `true` if the order is accepted.
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }

    /// Whether the submit control should be disabled.
    #[must_use]
    pub const fn disables_submit(&self) -> bool {
        !self.is_accepted()
    }

    /// Return the rejection reason, `None` if accepted.
    #[must_use]
    pub const fn rejection(&self) -> Option<&OrderValidationError> {
        match self {
            Self::Rejected(e) => Some(e),
            Self::Accepted => None,
        }
    }
}

/// Serializes as `{"ok":true}` or `{"ok":false,"reason":CODE,"message":...}`.
impl Serialize for ValidationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Accepted => {
                let mut state = serializer.serialize_struct("ValidationResult", 1)?;
                state.serialize_field("ok", &true)?;
                state.end()
            }
            Self::Rejected(reason) => {
                let mut state = serializer.serialize_struct("ValidationResult", 3)?;
                state.serialize_field("ok", &false)?;
                state.serialize_field("reason", reason.code())?;
                state.serialize_field("message", &reason.to_string())?;
                state.end()
            }
        }
    }
}
