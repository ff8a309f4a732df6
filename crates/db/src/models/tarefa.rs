use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::entities::tarefa;
pub use crate::types::TarefaStatus;

use super::double_option;

#[derive(Debug, Error)]
pub enum TarefaError {
    #[error(transparent)]
    Database(#[from] DbErr),
    #[error("Tarefa não encontrada")]
    NotFound,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tarefa {
    pub id: i64,
    pub titulo: String,
    pub descricao: Option<String>,
    pub status: TarefaStatus,
    pub vencimento: Option<NaiveDate>,
    pub empresa_id: Option<i64>,
    pub criado_em: DateTime<Utc>,
    pub atualizado_em: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateTarefa {
    pub titulo: String,
    pub descricao: Option<String>,
    pub status: Option<TarefaStatus>,
    pub vencimento: Option<NaiveDate>,
    pub empresa_id: Option<i64>,
}

/// Partial update: a field left out of the payload is untouched. The
/// nullable columns use the double-`Option` pattern so an explicit `null`
/// clears the value instead of being indistinguishable from "omitted".
#[derive(Debug, Default, Deserialize)]
pub struct UpdateTarefa {
    #[serde(default)]
    pub titulo: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub descricao: Option<Option<String>>,
    #[serde(default)]
    pub status: Option<TarefaStatus>,
    #[serde(default, deserialize_with = "double_option")]
    pub vencimento: Option<Option<NaiveDate>>,
    #[serde(default, deserialize_with = "double_option")]
    pub empresa_id: Option<Option<i64>>,
}

/// AND-combined list filters; each is independently optional.
#[derive(Debug, Default, Clone)]
pub struct TarefaFilter {
    pub status: Option<TarefaStatus>,
    pub empresa_id: Option<i64>,
    pub q: Option<String>,
}

impl Tarefa {
    fn from_model(model: tarefa::Model) -> Self {
        Self {
            id: model.id,
            titulo: model.titulo,
            descricao: model.descricao,
            status: model.status,
            vencimento: model.vencimento,
            empresa_id: model.empresa_id,
            criado_em: model.criado_em,
            atualizado_em: model.atualizado_em,
        }
    }

    pub async fn find_by_id<C: ConnectionTrait>(db: &C, id: i64) -> Result<Option<Self>, DbErr> {
        let record = tarefa::Entity::find_by_id(id).one(db).await?;
        Ok(record.map(Self::from_model))
    }

    /// Filtered, paginated listing ordered by id descending. `page` is
    /// 1-based; the caller validates the range. No total count is computed,
    /// so a short page is the only end-of-results signal.
    pub async fn find_filtered<C: ConnectionTrait>(
        db: &C,
        filter: &TarefaFilter,
        page: u64,
        page_size: u64,
    ) -> Result<Vec<Self>, DbErr> {
        let mut query = tarefa::Entity::find();

        if let Some(status) = filter.status.clone() {
            query = query.filter(tarefa::Column::Status.eq(status));
        }
        if let Some(empresa_id) = filter.empresa_id {
            query = query.filter(tarefa::Column::EmpresaId.eq(empresa_id));
        }
        if let Some(q) = filter.q.as_deref().filter(|q| !q.is_empty()) {
            // LIKE is case-insensitive for ASCII on sqlite, matching the
            // original ilike contract.
            query = query.filter(
                Condition::any()
                    .add(tarefa::Column::Titulo.contains(q))
                    .add(tarefa::Column::Descricao.contains(q)),
            );
        }

        let records = query
            .order_by_desc(tarefa::Column::Id)
            .offset(page.saturating_sub(1).saturating_mul(page_size))
            .limit(page_size)
            .all(db)
            .await?;
        Ok(records.into_iter().map(Self::from_model).collect())
    }

    pub async fn create<C: ConnectionTrait>(db: &C, data: &CreateTarefa) -> Result<Self, DbErr> {
        let now = Utc::now();
        let active = tarefa::ActiveModel {
            titulo: Set(data.titulo.clone()),
            descricao: Set(data.descricao.clone()),
            status: Set(data.status.clone().unwrap_or_default()),
            vencimento: Set(data.vencimento),
            empresa_id: Set(data.empresa_id),
            criado_em: Set(now),
            atualizado_em: Set(now),
            ..Default::default()
        };

        let model = active.insert(db).await?;
        Ok(Self::from_model(model))
    }

    pub async fn update<C: ConnectionTrait>(
        db: &C,
        id: i64,
        payload: &UpdateTarefa,
    ) -> Result<Self, TarefaError> {
        let record = tarefa::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or(TarefaError::NotFound)?;

        let mut active: tarefa::ActiveModel = record.into();
        if let Some(titulo) = payload.titulo.clone() {
            active.titulo = Set(titulo);
        }
        if let Some(descricao) = payload.descricao.clone() {
            active.descricao = Set(descricao);
        }
        if let Some(status) = payload.status.clone() {
            active.status = Set(status);
        }
        if let Some(vencimento) = payload.vencimento {
            active.vencimento = Set(vencimento);
        }
        if let Some(empresa_id) = payload.empresa_id {
            active.empresa_id = Set(empresa_id);
        }
        active.atualizado_em = Set(Utc::now());

        let updated = active.update(db).await?;
        Ok(Self::from_model(updated))
    }

    pub async fn update_status<C: ConnectionTrait>(
        db: &C,
        id: i64,
        status: TarefaStatus,
    ) -> Result<Self, TarefaError> {
        let record = tarefa::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or(TarefaError::NotFound)?;

        let mut active: tarefa::ActiveModel = record.into();
        active.status = Set(status);
        active.atualizado_em = Set(Utc::now());

        let updated = active.update(db).await?;
        Ok(Self::from_model(updated))
    }

    pub async fn delete<C: ConnectionTrait>(db: &C, id: i64) -> Result<u64, DbErr> {
        let result = tarefa::Entity::delete_many()
            .filter(tarefa::Column::Id.eq(id))
            .exec(db)
            .await?;
        Ok(result.rows_affected)
    }
}
