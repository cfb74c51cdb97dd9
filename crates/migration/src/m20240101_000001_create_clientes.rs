//! Create `clientes` table.
//!
//! `id` is a serial key assigned by the database; `fecha_registro` is stamped
//! by the service on insert.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Clientes::Table)
                    .if_not_exists()
                    .col(pk_auto(Clientes::Id))
                    .col(string_len(Clientes::Nombre, 100).not_null())
                    .col(string_len(Clientes::Email, 100).not_null())
                    .col(string_len(Clientes::Telefono, 20).not_null().default(""))
                    .col(timestamp_with_time_zone(Clientes::FechaRegistro).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Clientes::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Clientes { Table, Id, Nombre, Email, Telefono, FechaRegistro }
