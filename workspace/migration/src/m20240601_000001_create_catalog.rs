use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Identifier columns referring to other tables are plain strings:
        // the catalog does not enforce referential integrity.

        // Create owners table
        manager
            .create_table(
                Table::create()
                    .table(Owners::Table)
                    .if_not_exists()
                    .col(string(Owners::Id).primary_key())
                    .col(string(Owners::Name))
                    .col(string(Owners::Address))
                    .col(string(Owners::Photo))
                    .col(date(Owners::Birthday))
                    .to_owned(),
            )
            .await?;

        // Create properties table
        manager
            .create_table(
                Table::create()
                    .table(Properties::Table)
                    .if_not_exists()
                    .col(string(Properties::Id).primary_key())
                    .col(string(Properties::OwnerId))
                    .col(string(Properties::Name))
                    .col(string(Properties::Address))
                    .col(decimal(Properties::Price).decimal_len(16, 2))
                    .col(string(Properties::CodeInternal))
                    .col(integer(Properties::Year))
                    .col(string(Properties::Image))
                    .to_owned(),
            )
            .await?;

        // Create property_images table
        manager
            .create_table(
                Table::create()
                    .table(PropertyImages::Table)
                    .if_not_exists()
                    .col(string(PropertyImages::Id).primary_key())
                    .col(string(PropertyImages::PropertyId))
                    .col(string(PropertyImages::File))
                    .col(boolean(PropertyImages::Enabled).default(true))
                    .to_owned(),
            )
            .await?;

        // Create property_traces table
        manager
            .create_table(
                Table::create()
                    .table(PropertyTraces::Table)
                    .if_not_exists()
                    .col(string(PropertyTraces::Id).primary_key())
                    .col(string(PropertyTraces::PropertyId))
                    .col(timestamp_with_time_zone(PropertyTraces::DateSale))
                    .col(string(PropertyTraces::Name))
                    .col(decimal(PropertyTraces::Value).decimal_len(16, 2))
                    .col(decimal(PropertyTraces::Tax).decimal_len(16, 2))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PropertyTraces::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(PropertyImages::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Properties::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Owners::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Owners {
    Table,
    Id,
    Name,
    Address,
    Photo,
    Birthday,
}

#[derive(DeriveIden)]
enum Properties {
    Table,
    Id,
    OwnerId,
    Name,
    Address,
    Price,
    CodeInternal,
    Year,
    Image,
}

#[derive(DeriveIden)]
enum PropertyImages {
    Table,
    Id,
    PropertyId,
    File,
    Enabled,
}

#[derive(DeriveIden)]
enum PropertyTraces {
    Table,
    Id,
    PropertyId,
    DateSale,
    Name,
    Value,
    Tax,
}
