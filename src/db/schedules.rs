use sea_orm::*;
use uuid::Uuid;

use crate::models::schedules::{self, CreateSchedule, DEFAULT_TOTAL_SEATS};

/// Insert a new schedule for a class. Seats default to 6, all available.
pub async fn insert_schedule(
    db: &DatabaseConnection,
    class_id: Uuid,
    input: CreateSchedule,
) -> Result<schedules::Model, DbErr> {
    let total_seats = input.total_seats.unwrap_or(DEFAULT_TOTAL_SEATS);

    let new_schedule = schedules::ActiveModel {
        id: Set(Uuid::new_v4()),
        class_id: Set(class_id),
        schedule_date: Set(input.schedule_date),
        schedule_display: Set(input.schedule_display),
        total_seats: Set(total_seats),
        available_seats: Set(total_seats),
        is_available: Set(input.is_available.unwrap_or(true)),
        created_at: Set(chrono::Utc::now()),
    };

    new_schedule.insert(db).await
}

/// Fetch all schedules for a class, earliest date first.
pub async fn get_schedules_for_class(
    db: &DatabaseConnection,
    class_id: Uuid,
) -> Result<Vec<schedules::Model>, DbErr> {
    schedules::Entity::find()
        .filter(schedules::Column::ClassId.eq(class_id))
        .order_by_asc(schedules::Column::ScheduleDate)
        .all(db)
        .await
}

/// Fetch a single schedule by ID.
pub async fn get_schedule_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<schedules::Model>, DbErr> {
    schedules::Entity::find_by_id(id).one(db).await
}

/// Take one seat off a schedule, stopping at zero. Called after order
/// creation as an independent write; the two are not a transaction.
pub async fn decrement_available_seats(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<schedules::Model, DbErr> {
    let schedule = schedules::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(DbErr::RecordNotFound("Schedule not found".to_string()))?;

    let remaining = Ord::max(schedule.available_seats - 1, 0);

    let mut active: schedules::ActiveModel = schedule.into();
    active.available_seats = Set(remaining);

    active.update(db).await
}

/// Delete a schedule by ID.
pub async fn delete_schedule(db: &DatabaseConnection, id: Uuid) -> Result<DeleteResult, DbErr> {
    schedules::Entity::delete_by_id(id).exec(db).await
}
