//! Calculate endpoint
//!
//! Empty body is answered with 501. Every other failure, from UTF-8 decoding
//! to the covariance itself, collapses into a single 500 with no detail.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

use super::HandlerError;
use crate::calc;
use crate::http;
use crate::logger;

pub fn respond(body: &[u8]) -> Response<Full<Bytes>> {
    if body.is_empty() {
        logger::log_warning("Rejected request with an empty body");
        return http::build_missing_body_response();
    }

    match compute(body) {
        Ok(json) => http::build_json_response(json),
        Err(e) => {
            logger::log_error(&e.to_string());
            http::build_internal_error_response()
        }
    }
}

/// Decode, calculate and serialize as compact JSON
pub fn compute(body: &[u8]) -> Result<String, HandlerError> {
    let text = std::str::from_utf8(body)?;
    let calculation = calc::calculate(text)?;

    if calculation.dropped > 0 {
        logger::log_debug(&format!(
            "Dropped {} non-numeric coordinate(s), kept {}",
            calculation.dropped, calculation.samples
        ));
    }

    Ok(serde_json::to_string(&calculation.covariance)?)
}
