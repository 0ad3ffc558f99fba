// error.rs
use rocket::http::Status;
use rocket::response::{self, Responder, Response};
use rocket::Request;
use thiserror::Error;

/// Request-scoped failures. Both render as a plain-text body.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Patient not found")]
    NotFound,
    #[error("{0}")]
    BadRequest(&'static str),
}

pub const INVALID_BODY: &str = "Invalid request body";
pub const MISSING_FIELDS: &str = "Name, date of birth, and email are required";

impl ApiError {
    pub fn status(&self) -> Status {
        match self {
            ApiError::NotFound => Status::NotFound,
            ApiError::BadRequest(_) => Status::BadRequest,
        }
    }
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, req: &'r Request<'_>) -> response::Result<'static> {
        let status = self.status();
        Response::build_from(self.to_string().respond_to(req)?)
            .status(status)
            .ok()
    }
}
