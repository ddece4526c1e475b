//! Form domain layer
//!
//! Type-safe field definitions and the car price form state.

mod field;
mod form_state;

pub use field::{FieldKind, FieldName};
pub use form_state::{CarPriceForm, Form, FormData};
