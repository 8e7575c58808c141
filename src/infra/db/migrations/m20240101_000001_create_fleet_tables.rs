//! Migration: Drones, pilots, missions and flight traces.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Drone::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Drone::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Drone::Modello).string_len(100).not_null())
                    .col(ColumnDef::new(Drone::Capacita).double().not_null())
                    .col(ColumnDef::new(Drone::Batteria).integer().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Pilota::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Pilota::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Pilota::Nome).string_len(100).not_null())
                    .col(ColumnDef::new(Pilota::Cognome).string_len(100).not_null())
                    .col(ColumnDef::new(Pilota::Email).string_len(255).not_null())
                    .col(ColumnDef::new(Pilota::NumeroLicenza).string_len(50).not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Missioni::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Missioni::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Missioni::IdDrone).integer().not_null())
                    .col(ColumnDef::new(Missioni::IdPilota).integer().not_null())
                    .col(ColumnDef::new(Missioni::DataMissione).date().not_null())
                    .col(ColumnDef::new(Missioni::Ora).time().not_null())
                    .col(
                        ColumnDef::new(Missioni::Stato)
                            .string_len(20)
                            .not_null()
                            .default("programmata"),
                    )
                    .col(ColumnDef::new(Missioni::Valutazione).integer().null())
                    .col(ColumnDef::new(Missioni::Commento).text().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_missioni_drone")
                            .from(Missioni::Table, Missioni::IdDrone)
                            .to(Drone::Table, Drone::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_missioni_pilota")
                            .from(Missioni::Table, Missioni::IdPilota)
                            .to(Pilota::Table, Pilota::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_missioni_stato")
                    .table(Missioni::Table)
                    .col(Missioni::Stato)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Traccia::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Traccia::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Traccia::IdMissione).integer().not_null())
                    .col(ColumnDef::new(Traccia::Timestamp).date_time().not_null())
                    .col(ColumnDef::new(Traccia::Latitudine).double().not_null())
                    .col(ColumnDef::new(Traccia::Longitudine).double().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_traccia_missione")
                            .from(Traccia::Table, Traccia::IdMissione)
                            .to(Missioni::Table, Missioni::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_traccia_missione_timestamp")
                    .table(Traccia::Table)
                    .col(Traccia::IdMissione)
                    .col(Traccia::Timestamp)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Traccia::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Missioni::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Pilota::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Drone::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Drone {
    #[iden = "Drone"]
    Table,
    #[iden = "ID"]
    Id,
    #[iden = "Modello"]
    Modello,
    #[iden = "Capacita"]
    Capacita,
    #[iden = "Batteria"]
    Batteria,
}

#[derive(Iden)]
enum Pilota {
    #[iden = "Pilota"]
    Table,
    #[iden = "ID"]
    Id,
    #[iden = "Nome"]
    Nome,
    #[iden = "Cognome"]
    Cognome,
    #[iden = "Email"]
    Email,
    #[iden = "NumeroLicenza"]
    NumeroLicenza,
}

#[derive(Iden)]
pub(super) enum Missioni {
    #[iden = "Missioni"]
    Table,
    #[iden = "ID"]
    Id,
    #[iden = "IdDrone"]
    IdDrone,
    #[iden = "IdPilota"]
    IdPilota,
    #[iden = "DataMissione"]
    DataMissione,
    #[iden = "Ora"]
    Ora,
    #[iden = "Stato"]
    Stato,
    #[iden = "Valutazione"]
    Valutazione,
    #[iden = "Commento"]
    Commento,
}

#[derive(Iden)]
enum Traccia {
    #[iden = "Traccia"]
    Table,
    #[iden = "ID"]
    Id,
    #[iden = "ID_Missione"]
    IdMissione,
    #[iden = "Timestamp"]
    Timestamp,
    #[iden = "Latitudine"]
    Latitudine,
    #[iden = "Longitudine"]
    Longitudine,
}
