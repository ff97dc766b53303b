use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Identifiers for the `classes` table and its columns.
#[derive(DeriveIden)]
enum Classes {
    Table,
    Id,
    Title,
    Subtitle,
    Category,
    Level,
    Description,
    ImageUrl,
    Location,
    Duration,
    Price,
    PriceDisplay,
    Capacity,
    Curriculum,
    Policy,
    BankInfo,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Classes::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Classes::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Classes::Title).string().not_null())
                    .col(ColumnDef::new(Classes::Subtitle).string())
                    .col(ColumnDef::new(Classes::Category).string())
                    .col(ColumnDef::new(Classes::Level).string())
                    .col(ColumnDef::new(Classes::Description).text().not_null())
                    .col(ColumnDef::new(Classes::ImageUrl).string().not_null())
                    .col(ColumnDef::new(Classes::Location).string().not_null())
                    .col(ColumnDef::new(Classes::Duration).string().not_null())
                    .col(ColumnDef::new(Classes::Price).big_integer().not_null())
                    .col(ColumnDef::new(Classes::PriceDisplay).string())
                    .col(ColumnDef::new(Classes::Capacity).string())
                    .col(ColumnDef::new(Classes::Curriculum).json_binary())
                    .col(ColumnDef::new(Classes::Policy).json_binary())
                    .col(ColumnDef::new(Classes::BankInfo).json_binary())
                    .col(
                        ColumnDef::new(Classes::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Classes::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Classes::UpdatedAt).timestamp_with_time_zone())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Classes::Table).to_owned())
            .await
    }
}
