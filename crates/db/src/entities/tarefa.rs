use sea_orm::entity::prelude::*;

use crate::types::TarefaStatus;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tarefas")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub titulo: String,
    pub descricao: Option<String>,
    pub status: TarefaStatus,
    pub vencimento: Option<Date>,
    pub empresa_id: Option<i64>,
    pub criado_em: DateTimeUtc,
    pub atualizado_em: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
