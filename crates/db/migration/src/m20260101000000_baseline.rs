use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::DatabaseBackend;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create().if_not_exists()
                    .table(Empresas::Table)
                    .col(pk_id_col(manager, Empresas::Id))
                    .col(ColumnDef::new(Empresas::Nome).string_len(200).not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create().if_not_exists()
                    .name("idx_empresas_nome")
                    .table(Empresas::Table)
                    .col(Empresas::Nome)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create().if_not_exists()
                    .table(Tarefas::Table)
                    .col(pk_id_col(manager, Tarefas::Id))
                    .col(ColumnDef::new(Tarefas::Titulo).string_len(200).not_null())
                    .col(ColumnDef::new(Tarefas::Descricao).text())
                    .col(
                        ColumnDef::new(Tarefas::Status)
                            .string_len(32)
                            .not_null()
                            .default(Expr::val("pendente")),
                    )
                    .col(ColumnDef::new(Tarefas::Vencimento).date())
                    .col(fk_id_nullable_col(manager, Tarefas::EmpresaId))
                    .col(timestamp_col(Tarefas::CriadoEm))
                    .col(timestamp_col(Tarefas::AtualizadoEm))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tarefas_empresa_id")
                            .from(Tarefas::Table, Tarefas::EmpresaId)
                            .to(Empresas::Table, Empresas::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create().if_not_exists()
                    .name("idx_tarefas_titulo")
                    .table(Tarefas::Table)
                    .col(Tarefas::Titulo)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create().if_not_exists()
                    .name("idx_tarefas_status")
                    .table(Tarefas::Table)
                    .col(Tarefas::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create().if_not_exists()
                    .name("idx_tarefas_empresa_id")
                    .table(Tarefas::Table)
                    .col(Tarefas::EmpresaId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Tarefas::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Empresas::Table).to_owned())
            .await
    }
}

fn pk_id_col<T: Iden>(manager: &SchemaManager, col: T) -> ColumnDef {
    let mut col = ColumnDef::new(col);
    match manager.get_database_backend() {
        DatabaseBackend::Sqlite => {
            col.integer();
        }
        _ => {
            col.big_integer();
        }
    }
    col.not_null().auto_increment().primary_key().to_owned()
}

fn fk_id_nullable_col<T: Iden>(manager: &SchemaManager, col: T) -> ColumnDef {
    let mut col = ColumnDef::new(col);
    match manager.get_database_backend() {
        DatabaseBackend::Sqlite => {
            col.integer();
        }
        _ => {
            col.big_integer();
        }
    }
    col.to_owned()
}

fn timestamp_col<T: Iden>(col: T) -> ColumnDef {
    ColumnDef::new(col)
        .timestamp()
        .not_null()
        .default(Expr::current_timestamp())
        .to_owned()
}

#[derive(Iden)]
enum Empresas {
    Table,
    Id,
    Nome,
}

#[derive(Iden)]
enum Tarefas {
    Table,
    Id,
    Titulo,
    Descricao,
    Status,
    Vencimento,
    EmpresaId,
    CriadoEm,
    AtualizadoEm,
}
