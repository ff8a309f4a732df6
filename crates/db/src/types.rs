use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

#[derive(
    Clone,
    Debug,
    PartialEq,
    Eq,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
    EnumString,
    Display,
    Default,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TarefaStatus {
    #[default]
    #[sea_orm(string_value = "pendente")]
    Pendente,
    #[sea_orm(string_value = "em_andamento")]
    EmAndamento,
    #[sea_orm(string_value = "concluida")]
    Concluida,
    #[sea_orm(string_value = "cancelada")]
    Cancelada,
}
