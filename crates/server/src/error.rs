use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::{
    DbErr,
    models::{empresa::EmpresaError, tarefa::TarefaError},
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Empresa(#[from] EmpresaError),
    #[error(transparent)]
    Tarefa(#[from] TarefaError),
    #[error(transparent)]
    Database(#[from] DbErr),
    #[error("{0}")]
    BadRequest(String),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status_code, error_type) = match &self {
            ApiError::Empresa(err) => match err {
                EmpresaError::NotFound => (StatusCode::NOT_FOUND, "EmpresaError"),
                EmpresaError::DuplicateNome => (StatusCode::CONFLICT, "EmpresaError"),
                EmpresaError::Database(_) => (StatusCode::INTERNAL_SERVER_ERROR, "EmpresaError"),
            },
            ApiError::Tarefa(err) => match err {
                TarefaError::NotFound => (StatusCode::NOT_FOUND, "TarefaError"),
                TarefaError::Database(_) => (StatusCode::INTERNAL_SERVER_ERROR, "TarefaError"),
            },
            ApiError::Database(db_err) => match db_err {
                DbErr::RecordNotFound(_) => (StatusCode::NOT_FOUND, "DatabaseError"),
                _ => (StatusCode::INTERNAL_SERVER_ERROR, "DatabaseError"),
            },
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BadRequest"),
        };

        if status_code.is_server_error() {
            tracing::error!(
                status = %status_code,
                error_type,
                error = %self,
                "API request failed"
            );
        }

        let body = ErrorBody {
            message: self.to_string(),
        };
        (status_code, Json(body)).into_response()
    }
}
