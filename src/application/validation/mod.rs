//! Pre-submission order validation.

mod validator;

pub use validator::{validate_order, OrderContext, OrderValidator};
