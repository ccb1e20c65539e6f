//! `x-request-id` correlation.

use std::fmt::{Display, Formatter, Result as FmtResult};

use salvo::{
    http::{HeaderMap, header::HeaderValue},
    prelude::Response,
};
use uuid::Uuid;

pub(super) const HEADER: &str = "x-request-id";

/// Identifier shared by a request's span, its log lines and its response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct RequestId(String);

impl RequestId {
    /// The caller's id when it sent a non-blank one, otherwise a new UUIDv7.
    pub(super) fn from_headers(headers: &HeaderMap) -> Self {
        let supplied = headers
            .get(HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty());

        match supplied {
            Some(value) => Self(value.to_owned()),
            None => Self(Uuid::now_v7().to_string()),
        }
    }

    pub(super) fn echo(&self, res: &mut Response) {
        if let Ok(value) = HeaderValue::from_str(&self.0) {
            res.headers_mut().insert(HEADER, value);
        }
    }
}

impl Display for RequestId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}
