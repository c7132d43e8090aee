//! Payload formatting and validation for QR content types.
//!
//! Maps typed form input (URL, free text, Wi-Fi credentials, email, SMS)
//! to the canonical string a QR renderer encodes. Pure functions, no I/O.

pub mod fields;
pub mod form;
pub mod format;
pub mod kind;
pub mod validate;

pub use fields::{FieldSet, WifiSecurity};
pub use form::{FormError, FormState};
pub use format::{encode, try_encode};
pub use kind::InputKind;
pub use validate::{ErrorKind, FieldError, ValidationReport, validate};
