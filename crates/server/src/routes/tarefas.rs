use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json as ResponseJson,
    routing::{get, patch},
};
use db::models::tarefa::{CreateTarefa, Tarefa, TarefaError, TarefaFilter, UpdateTarefa};
use db::types::TarefaStatus;
use serde::Deserialize;

use crate::{AppState, error::ApiError};

const MAX_PAGE_SIZE: u64 = 200;

fn default_page() -> u64 {
    1
}

fn default_page_size() -> u64 {
    20
}

#[derive(Debug, Deserialize)]
pub struct TarefaQuery {
    pub status: Option<TarefaStatus>,
    pub empresa_id: Option<i64>,
    pub q: Option<String>,
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_page_size")]
    pub page_size: u64,
}

#[derive(Debug, Deserialize)]
pub struct TarefaStatusUpdate {
    pub status: TarefaStatus,
}

pub async fn get_tarefas(
    State(state): State<AppState>,
    Query(query): Query<TarefaQuery>,
) -> Result<ResponseJson<Vec<Tarefa>>, ApiError> {
    if query.page < 1 {
        return Err(ApiError::BadRequest("page must be >= 1".to_string()));
    }
    if query.page_size < 1 || query.page_size > MAX_PAGE_SIZE {
        return Err(ApiError::BadRequest(format!(
            "page_size must be between 1 and {MAX_PAGE_SIZE}"
        )));
    }

    let filter = TarefaFilter {
        status: query.status,
        empresa_id: query.empresa_id,
        q: query.q,
    };
    let tarefas = Tarefa::find_filtered(state.db(), &filter, query.page, query.page_size).await?;
    Ok(ResponseJson(tarefas))
}

pub async fn create_tarefa(
    State(state): State<AppState>,
    Json(payload): Json<CreateTarefa>,
) -> Result<(StatusCode, ResponseJson<Tarefa>), ApiError> {
    tracing::debug!("Creating tarefa '{}'", payload.titulo);

    let tarefa = Tarefa::create(state.db(), &payload).await?;
    Ok((StatusCode::CREATED, ResponseJson(tarefa)))
}

pub async fn get_tarefa(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<ResponseJson<Tarefa>, ApiError> {
    let tarefa = Tarefa::find_by_id(state.db(), id)
        .await?
        .ok_or(TarefaError::NotFound)?;
    Ok(ResponseJson(tarefa))
}

pub async fn update_tarefa(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateTarefa>,
) -> Result<ResponseJson<Tarefa>, ApiError> {
    let tarefa = Tarefa::update(state.db(), id, &payload).await?;
    Ok(ResponseJson(tarefa))
}

pub async fn update_tarefa_status(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<TarefaStatusUpdate>,
) -> Result<ResponseJson<Tarefa>, ApiError> {
    tracing::debug!(tarefa_id = id, status = %payload.status, "Updating tarefa status");

    let tarefa = Tarefa::update_status(state.db(), id, payload.status).await?;
    Ok(ResponseJson(tarefa))
}

pub async fn delete_tarefa(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let rows_affected = Tarefa::delete(state.db(), id).await?;
    if rows_affected == 0 {
        return Err(TarefaError::NotFound.into());
    }
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/tarefas", get(get_tarefas).post(create_tarefa))
        .route(
            "/tarefas/{id}",
            get(get_tarefa).put(update_tarefa).delete(delete_tarefa),
        )
        .route("/tarefas/{id}/status", patch(update_tarefa_status))
}
