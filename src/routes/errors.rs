use log::error;
use rocket::http::{Method, Status};
use rocket::response::{self, Responder};
use rocket::serde::json::Json;
use rocket::{catch, Request};
use crate::handlers::{ApiError, ErrorBody, SERVER_ERROR};

pub const MALFORMED_BODY: &str = "Malformed request body";
pub const MALFORMED_REQUEST: &str = "Malformed request";
pub const ROUTE_NOT_FOUND: &str = "Not found";

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        let status = match &self {
            ApiError::Validation(_) => Status::BadRequest,
            ApiError::NotFound(_) => Status::NotFound,
            ApiError::Store(e) => {
                error!("{} {} failed: {e}", request.method(), request.uri());
                Status::InternalServerError
            },
        };
        (status, Json(ErrorBody::from(&self))).respond_to(request)
    }
}

#[catch(400)]
pub fn bad_request() -> Json<ErrorBody> {
    Json(ErrorBody::new(MALFORMED_BODY))
}

#[catch(404)]
pub fn not_found() -> Json<ErrorBody> {
    Json(ErrorBody::new(ROUTE_NOT_FOUND))
}

// a POST body of the wrong shape, or an id segment that is not an integer
#[catch(422)]
pub fn unprocessable_entity(request: &Request<'_>) -> Json<ErrorBody> {
    Json(ErrorBody::new(
        if request.method() == Method::Post {
            MALFORMED_BODY
        } else {
            MALFORMED_REQUEST
        }
    ))
}

#[catch(500)]
pub fn internal_error() -> Json<ErrorBody> {
    Json(ErrorBody::new(SERVER_ERROR))
}

#[catch(default)]
pub fn default_catcher(status: Status, _request: &Request<'_>) -> (Status, Json<ErrorBody>) {
    (status, Json(ErrorBody::new(status.reason_lossy())))
}
