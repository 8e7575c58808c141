//! Migration: Users, products, orders and the order/product join table.

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_fleet_tables::Missioni;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Utente::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Utente::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Utente::Nome).string_len(100).not_null())
                    .col(
                        ColumnDef::new(Utente::Mail)
                            .string_len(255)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Utente::Password).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Utente::Ruolo)
                            .string_len(20)
                            .not_null()
                            .default("cliente"),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Prodotto::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Prodotto::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Prodotto::Nome).string_len(100).not_null())
                    .col(ColumnDef::new(Prodotto::Categoria).string_len(50).not_null())
                    .col(ColumnDef::new(Prodotto::Peso).double().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_prodotto_categoria")
                    .table(Prodotto::Table)
                    .col(Prodotto::Categoria)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Ordine::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Ordine::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Ordine::IdUtente).integer().not_null())
                    .col(ColumnDef::new(Ordine::IdMissione).integer().not_null())
                    .col(ColumnDef::new(Ordine::Orario).date_time().not_null())
                    .col(ColumnDef::new(Ordine::Tipo).string_len(50).not_null())
                    .col(ColumnDef::new(Ordine::PesoTotale).double().not_null())
                    .col(
                        ColumnDef::new(Ordine::IndirizzoDestinazione)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Ordine::DataConsegna).date().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ordine_utente")
                            .from(Ordine::Table, Ordine::IdUtente)
                            .to(Utente::Table, Utente::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ordine_missione")
                            .from(Ordine::Table, Ordine::IdMissione)
                            .to(Missioni::Table, Missioni::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Contiene::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Contiene::IdOrdine).integer().not_null())
                    .col(ColumnDef::new(Contiene::IdProdotto).integer().not_null())
                    .col(
                        ColumnDef::new(Contiene::Quantita)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .primary_key(
                        Index::create()
                            .col(Contiene::IdOrdine)
                            .col(Contiene::IdProdotto),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_contiene_ordine")
                            .from(Contiene::Table, Contiene::IdOrdine)
                            .to(Ordine::Table, Ordine::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_contiene_prodotto")
                            .from(Contiene::Table, Contiene::IdProdotto)
                            .to(Prodotto::Table, Prodotto::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Contiene::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Ordine::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Prodotto::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Utente::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Utente {
    #[iden = "Utente"]
    Table,
    #[iden = "ID"]
    Id,
    #[iden = "Nome"]
    Nome,
    #[iden = "Mail"]
    Mail,
    #[iden = "Password"]
    Password,
    #[iden = "Ruolo"]
    Ruolo,
}

#[derive(Iden)]
enum Prodotto {
    #[iden = "Prodotto"]
    Table,
    #[iden = "ID"]
    Id,
    #[iden = "nome"]
    Nome,
    #[iden = "categoria"]
    Categoria,
    #[iden = "peso"]
    Peso,
}

#[derive(Iden)]
enum Ordine {
    #[iden = "Ordine"]
    Table,
    #[iden = "ID"]
    Id,
    #[iden = "ID_Utente"]
    IdUtente,
    #[iden = "ID_Missione"]
    IdMissione,
    #[iden = "Orario"]
    Orario,
    #[iden = "Tipo"]
    Tipo,
    #[iden = "PesoTotale"]
    PesoTotale,
    #[iden = "IndirizzoDestinazione"]
    IndirizzoDestinazione,
    #[iden = "DataConsegna"]
    DataConsegna,
}

#[derive(Iden)]
enum Contiene {
    #[iden = "Contiene"]
    Table,
    #[iden = "ID_Ordine"]
    IdOrdine,
    #[iden = "ID_Prodotto"]
    IdProdotto,
    #[iden = "Quantita"]
    Quantita,
}
