use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Identifiers for the `class_schedules` table and its columns.
///
/// `class_id` is deliberately not a foreign key: classes are deletable
/// unconditionally and orders keep their own schedule snapshot.
#[derive(DeriveIden)]
enum ClassSchedules {
    Table,
    Id,
    ClassId,
    ScheduleDate,
    ScheduleDisplay,
    TotalSeats,
    AvailableSeats,
    IsAvailable,
    CreatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ClassSchedules::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ClassSchedules::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ClassSchedules::ClassId).uuid().not_null())
                    .col(
                        ColumnDef::new(ClassSchedules::ScheduleDate)
                            .date()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ClassSchedules::ScheduleDisplay)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ClassSchedules::TotalSeats)
                            .integer()
                            .not_null()
                            .default(6),
                    )
                    .col(
                        ColumnDef::new(ClassSchedules::AvailableSeats)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ClassSchedules::IsAvailable)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(ClassSchedules::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_class_schedules_class_id")
                    .table(ClassSchedules::Table)
                    .col(ClassSchedules::ClassId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ClassSchedules::Table).to_owned())
            .await
    }
}
