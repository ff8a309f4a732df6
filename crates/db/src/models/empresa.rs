use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
    Set,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::entities::{empresa, tarefa};

#[derive(Debug, Error)]
pub enum EmpresaError {
    #[error(transparent)]
    Database(#[from] DbErr),
    #[error("Empresa não encontrada")]
    NotFound,
    #[error("Empresa já existe")]
    DuplicateNome,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Empresa {
    pub id: i64,
    pub nome: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateEmpresa {
    pub nome: String,
}

/// Full replace: `nome` is required, mirroring the create payload.
#[derive(Debug, Deserialize)]
pub struct UpdateEmpresa {
    pub nome: String,
}

impl Empresa {
    fn from_model(model: empresa::Model) -> Self {
        Self {
            id: model.id,
            nome: model.nome,
        }
    }

    pub async fn find_all<C: ConnectionTrait>(db: &C) -> Result<Vec<Self>, DbErr> {
        let records = empresa::Entity::find()
            .order_by_desc(empresa::Column::Id)
            .all(db)
            .await?;
        Ok(records.into_iter().map(Self::from_model).collect())
    }

    pub async fn find_by_id<C: ConnectionTrait>(db: &C, id: i64) -> Result<Option<Self>, DbErr> {
        let record = empresa::Entity::find_by_id(id).one(db).await?;
        Ok(record.map(Self::from_model))
    }

    pub async fn create<C: ConnectionTrait>(
        db: &C,
        data: &CreateEmpresa,
    ) -> Result<Self, EmpresaError> {
        let existing = empresa::Entity::find()
            .filter(empresa::Column::Nome.eq(data.nome.clone()))
            .one(db)
            .await?;
        if existing.is_some() {
            return Err(EmpresaError::DuplicateNome);
        }

        let active = empresa::ActiveModel {
            nome: Set(data.nome.clone()),
            ..Default::default()
        };
        let model = active.insert(db).await?;
        Ok(Self::from_model(model))
    }

    pub async fn update<C: ConnectionTrait>(
        db: &C,
        id: i64,
        data: &UpdateEmpresa,
    ) -> Result<Self, EmpresaError> {
        let record = empresa::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or(EmpresaError::NotFound)?;

        let mut active: empresa::ActiveModel = record.into();
        active.nome = Set(data.nome.clone());
        let updated = active.update(db).await?;
        Ok(Self::from_model(updated))
    }

    /// Deletes the empresa and every tarefa it owns. Returns the number of
    /// empresa rows removed (0 when the id does not exist). Callers wanting
    /// atomicity wrap this in a transaction.
    pub async fn delete<C: ConnectionTrait>(db: &C, id: i64) -> Result<u64, DbErr> {
        let record = empresa::Entity::find_by_id(id).one(db).await?;
        if record.is_none() {
            return Ok(0);
        }

        tarefa::Entity::delete_many()
            .filter(tarefa::Column::EmpresaId.eq(id))
            .exec(db)
            .await?;

        let result = empresa::Entity::delete_many()
            .filter(empresa::Column::Id.eq(id))
            .exec(db)
            .await?;
        Ok(result.rows_affected)
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::Database;
    use sea_orm_migration::MigratorTrait;

    use super::*;
    use crate::models::tarefa::{CreateTarefa, Tarefa};

    async fn setup_db() -> sea_orm::DatabaseConnection {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        db_migration::Migrator::up(&db, None).await.unwrap();
        db
    }

    fn create_payload(nome: &str) -> CreateEmpresa {
        CreateEmpresa {
            nome: nome.to_string(),
        }
    }

    #[tokio::test]
    async fn create_assigns_monotonic_ids() {
        let db = setup_db().await;

        let first = Empresa::create(&db, &create_payload("Acme")).await.unwrap();
        let second = Empresa::create(&db, &create_payload("Globex"))
            .await
            .unwrap();

        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn duplicate_nome_is_rejected_without_inserting() {
        let db = setup_db().await;

        Empresa::create(&db, &create_payload("Acme")).await.unwrap();
        let err = Empresa::create(&db, &create_payload("Acme"))
            .await
            .unwrap_err();
        assert!(matches!(err, EmpresaError::DuplicateNome));

        assert_eq!(Empresa::find_all(&db).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn find_all_orders_by_id_descending() {
        let db = setup_db().await;

        Empresa::create(&db, &create_payload("Acme")).await.unwrap();
        Empresa::create(&db, &create_payload("Globex"))
            .await
            .unwrap();
        Empresa::create(&db, &create_payload("Initech"))
            .await
            .unwrap();

        let empresas = Empresa::find_all(&db).await.unwrap();
        let ids: Vec<i64> = empresas.iter().map(|e| e.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(ids, sorted);
        assert_eq!(empresas[0].nome, "Initech");
    }

    #[tokio::test]
    async fn update_replaces_nome_and_missing_id_is_not_found() {
        let db = setup_db().await;

        let empresa = Empresa::create(&db, &create_payload("Acme")).await.unwrap();
        let updated = Empresa::update(
            &db,
            empresa.id,
            &UpdateEmpresa {
                nome: "Acme Corp".to_string(),
            },
        )
        .await
        .unwrap();
        assert_eq!(updated.id, empresa.id);
        assert_eq!(updated.nome, "Acme Corp");

        let err = Empresa::update(
            &db,
            9999,
            &UpdateEmpresa {
                nome: "Ghost".to_string(),
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, EmpresaError::NotFound));
    }

    // Update intentionally performs no duplicate check; the unique index on
    // nome is the only guard, so the failure surfaces as a database error.
    #[tokio::test]
    async fn update_to_duplicate_nome_hits_unique_index() {
        let db = setup_db().await;

        Empresa::create(&db, &create_payload("Acme")).await.unwrap();
        let other = Empresa::create(&db, &create_payload("Globex"))
            .await
            .unwrap();

        let err = Empresa::update(
            &db,
            other.id,
            &UpdateEmpresa {
                nome: "Acme".to_string(),
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, EmpresaError::Database(_)));
    }

    #[tokio::test]
    async fn delete_cascades_to_owned_tarefas() {
        let db = setup_db().await;

        let empresa = Empresa::create(&db, &create_payload("Acme")).await.unwrap();
        let other = Empresa::create(&db, &create_payload("Globex"))
            .await
            .unwrap();

        let owned = Tarefa::create(
            &db,
            &CreateTarefa {
                titulo: "Pagar conta".to_string(),
                descricao: None,
                status: None,
                vencimento: None,
                empresa_id: Some(empresa.id),
            },
        )
        .await
        .unwrap();
        let unowned = Tarefa::create(
            &db,
            &CreateTarefa {
                titulo: "Renovar contrato".to_string(),
                descricao: None,
                status: None,
                vencimento: None,
                empresa_id: Some(other.id),
            },
        )
        .await
        .unwrap();

        let rows = Empresa::delete(&db, empresa.id).await.unwrap();
        assert_eq!(rows, 1);

        assert!(Tarefa::find_by_id(&db, owned.id).await.unwrap().is_none());
        assert!(Tarefa::find_by_id(&db, unowned.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn delete_missing_id_affects_no_rows() {
        let db = setup_db().await;
        assert_eq!(Empresa::delete(&db, 42).await.unwrap(), 0);
    }
}
