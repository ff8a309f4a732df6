use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::Json as ResponseJson,
    routing::get,
};
use db::TransactionTrait;
use db::models::empresa::{CreateEmpresa, Empresa, EmpresaError, UpdateEmpresa};

use crate::{AppState, error::ApiError};

pub async fn get_empresas(
    State(state): State<AppState>,
) -> Result<ResponseJson<Vec<Empresa>>, ApiError> {
    let empresas = Empresa::find_all(state.db()).await?;
    Ok(ResponseJson(empresas))
}

pub async fn create_empresa(
    State(state): State<AppState>,
    Json(payload): Json<CreateEmpresa>,
) -> Result<(StatusCode, ResponseJson<Empresa>), ApiError> {
    tracing::debug!("Creating empresa '{}'", payload.nome);

    let empresa = Empresa::create(state.db(), &payload).await?;
    Ok((StatusCode::CREATED, ResponseJson(empresa)))
}

pub async fn get_empresa(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<ResponseJson<Empresa>, ApiError> {
    let empresa = Empresa::find_by_id(state.db(), id)
        .await?
        .ok_or(EmpresaError::NotFound)?;
    Ok(ResponseJson(empresa))
}

pub async fn update_empresa(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateEmpresa>,
) -> Result<ResponseJson<Empresa>, ApiError> {
    let empresa = Empresa::update(state.db(), id, &payload).await?;
    Ok(ResponseJson(empresa))
}

/// The empresa row and its tarefas go in one transaction so a partial
/// cascade can never be observed.
pub async fn delete_empresa(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let tx = state.db().begin().await?;
    let rows_affected = Empresa::delete(&tx, id).await?;
    tx.commit().await?;

    if rows_affected == 0 {
        return Err(EmpresaError::NotFound.into());
    }

    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/empresas", get(get_empresas).post(create_empresa))
        .route(
            "/empresas/{id}",
            get(get_empresa).put(update_empresa).delete(delete_empresa),
        )
}
