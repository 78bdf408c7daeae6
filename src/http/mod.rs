//! HTTP protocol layer module
//!
//! Response builders shared by the request handler, decoupled from the
//! calculation itself.

pub mod response;

pub use response::{
    build_404_response, build_405_response, build_413_response, build_internal_error_response,
    build_json_response, build_missing_body_response,
};
