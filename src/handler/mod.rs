//! Request handler module
//!
//! Dispatches the single `POST /calculate` route and turns the calculation
//! outcome into an HTTP response.

pub mod calculate;
mod error;
pub mod router;

pub use error::HandlerError;
pub use router::handle_request;
