//! Request middleware.
//!
//! - [`method_override::method_override`] -- Lets HTML forms reach `PATCH`,
//!   `PUT` and `DELETE` routes through a `_method` field.

pub mod method_override;
