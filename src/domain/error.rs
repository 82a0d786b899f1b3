use actix_web::{
    HttpResponse, ResponseError,
    http::{StatusCode, header::ContentType},
    web::Json,
};

use actix_web::error::JsonPayloadError;

use validator::{ValidationError, ValidationErrors, ValidationErrorsKind};

use serde::Serialize;
use utoipa::ToSchema;

use serde_json::{Map, Value, to_string};

use crate::domain::form::FormError;
use crate::domain::repositories::repository::RepositoryError;

pub type AppResult<T> = core::result::Result<T, AppError>;

macro_rules! static_error {
    ($name:ident, $status:expr) => {
        #[allow(non_snake_case, missing_docs)]
        pub fn $name(message: impl ToString) -> AppError {
            AppError {
                message: message.to_string(),
                code: $status.as_u16(),
                trace: None,
            }
        }
    };

    ($name:ident, $status:expr, $default:expr) => {
        #[allow(non_snake_case, missing_docs)]
        pub fn $name() -> AppError {
            AppError {
                message: $default.to_string(),
                code: $status.as_u16(),
                trace: None,
            }
        }
    };
}

#[derive(Debug, PartialEq, Eq, Serialize, ToSchema)]
pub struct AppError {
    pub message: String,
    pub code: u16,
    #[serde(skip)]
    pub trace: Option<String>,
}

#[rustfmt::skip]
pub mod message {
    pub static CONFLICT: &str = "Conflict with the current state of the resource";
    pub static NOT_FOUND: &str = "The server cannot find the requested resource";
    pub static REQUEST_FAILED: &str = "Request failed";
    pub static UNAUTHORIZED: &str = "The request was not successful because it lacks valid authentication credentials";
    pub static UNPROCESSABLE_ENTITY: &str = "The server was unable to process the request because it contains invalid data";
    pub static BAD_REQUEST: &str = "The server would not process the request due to something the server considered to be a client error";
    pub static INTERNAL_ERROR: &str = "The server encountered an unexpected condition that prevented it from fulfilling the request";
    pub static SERVICE_UNAVAILABLE: &str = "The server is not ready to handle the request";
}

#[rustfmt::skip]
impl AppError {
    // 1. Errors with Custom Message
    static_error!(Conflict, StatusCode::CONFLICT);
    static_error!(BadRequest, StatusCode::BAD_REQUEST);
    static_error!(UnprocessableEntity, StatusCode::UNPROCESSABLE_ENTITY);
    static_error!(NotFound, StatusCode::NOT_FOUND);
    static_error!(BadGateway, StatusCode::BAD_GATEWAY);

    // 2. Errors with Default Message
    static_error!(Unauthorized, StatusCode::UNAUTHORIZED, message::UNAUTHORIZED);
    static_error!(InternalError, StatusCode::INTERNAL_SERVER_ERROR, message::INTERNAL_ERROR);
    static_error!(ServiceUnavailable, StatusCode::SERVICE_UNAVAILABLE, message::SERVICE_UNAVAILABLE);

    /// Relays a status received from the upstream backend. Only client errors
    /// pass through; everything else collapses into a bad gateway.
    pub fn relay(code: u16, message: impl ToString) -> AppError {
        let code = match StatusCode::from_u16(code) {
            Ok(status) if status.is_client_error() => code,
            _ => StatusCode::BAD_GATEWAY.as_u16(),
        };

        AppError {
            message: message.to_string(),
            code,
            trace: None,
        }
    }

    pub fn trace(self, message: &str) -> AppError {
        AppError {
            code: self.code,
            message: self.message,
            trace: Some(message.to_owned()),
        }
    }

    pub fn example_503() -> AppError {
        AppError::ServiceUnavailable()
    }

    pub fn example_401() -> AppError {
        AppError::Unauthorized()
    }

    pub fn example_422() -> AppError {
        AppError::UnprocessableEntity(message::UNPROCESSABLE_ENTITY)
    }

    pub fn example_400() -> AppError {
        AppError::BadRequest(message::BAD_REQUEST)
    }

    pub fn example_409() -> AppError {
        AppError::Conflict(message::CONFLICT)
    }

    pub fn example_404() -> AppError {
        AppError::NotFound(message::NOT_FOUND)
    }

    pub fn example_502() -> AppError {
        AppError::BadGateway(message::REQUEST_FAILED)
    }
}

impl std::error::Error for AppError {}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {}: {}", self.code, self.message)
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        if let Some(trace) = &self.trace {
            tracing::error!(code = self.code, trace = %trace, "{}", self.message);
        }

        HttpResponse::build(self.status_code())
            .content_type(ContentType::json())
            .json(Json(self))
    }

    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.code).unwrap()
    }
}

impl From<RepositoryError> for AppError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::Rejected { status, message } => AppError::relay(status, message),
            RepositoryError::Unavailable(reason) => AppError::ServiceUnavailable().trace(&reason),
            RepositoryError::Decode(reason) => {
                AppError::BadGateway(message::REQUEST_FAILED).trace(&reason)
            }
        }
    }
}

impl From<FormError> for AppError {
    fn from(error: FormError) -> Self {
        match error {
            FormError::Busy => AppError::Conflict(error),
            FormError::NotEditable(_) | FormError::NotTerminal => AppError::BadRequest(error),
            FormError::Blocked(message) => AppError::UnprocessableEntity(message),
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut map = Map::new();

        for (_, field, error) in flatten_errors(&errors, None, None) {
            map.insert(field, Value::String(error.to_string()));
        }

        AppError::UnprocessableEntity(to_string(&map).unwrap())
    }
}

fn flatten_errors(
    errors: &ValidationErrors,
    path: Option<String>,
    indent: Option<u16>,
) -> Vec<(u16, String, &ValidationError)> {
    errors
        .errors()
        .iter()
        .flat_map(|(field, err)| {
            let indent = indent.unwrap_or(0);
            let actual_path = path
                .as_ref()
                .map(|path| [path.as_str(), field].join("."))
                .unwrap_or_else(|| field.to_string());
            match err {
                // Struct-level rules name the field they belong to.
                ValidationErrorsKind::Field(field_errors) => field_errors
                    .iter()
                    .map(|error| match error.params.get("field").and_then(Value::as_str) {
                        Some(name) if field == "__all__" => (indent, name.to_string(), error),
                        _ => (indent, actual_path.clone(), error),
                    })
                    .collect::<Vec<_>>(),
                ValidationErrorsKind::List(list_error) => list_error
                    .iter()
                    .flat_map(|(index, errors)| {
                        let actual_path = format!("{}[{}]", actual_path.as_str(), index);
                        flatten_errors(errors, Some(actual_path), Some(indent + 1))
                    })
                    .collect::<Vec<_>>(),
                ValidationErrorsKind::Struct(struct_errors) => {
                    flatten_errors(struct_errors, Some(actual_path), Some(indent + 1))
                }
            }
        })
        .collect::<Vec<_>>()
}

impl From<JsonPayloadError> for AppError {
    fn from(error: JsonPayloadError) -> Self {
        AppError::BadRequest(error.to_string())
    }
}
