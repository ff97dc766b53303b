use sea_orm::*;
use uuid::Uuid;

use crate::models::orders::{self, CreateOrder, Status};

/// Insert a new order. Status always starts at Pending, whatever the client
/// sent. No check that the referenced class or schedule exists.
pub async fn insert_order(
    db: &DatabaseConnection,
    input: CreateOrder,
) -> Result<orders::Model, DbErr> {
    let new_order = orders::ActiveModel {
        id: Set(Uuid::new_v4()),
        class_id: Set(input.class_id),
        schedule_id: Set(input.schedule_id),
        name: Set(input.name),
        phone: Set(input.phone),
        email: Set(input.email),
        schedule_display: Set(input.schedule_display),
        status: Set(Status::Pending),
        notes: Set(None),
        created_at: Set(chrono::Utc::now()),
        updated_at: Set(None),
    };

    new_order.insert(db).await
}

/// Fetch a page of orders, newest first, optionally filtered by status.
pub async fn get_orders_paginated(
    db: &DatabaseConnection,
    status: Option<Status>,
    page: u64,
    limit: u64,
) -> Result<Vec<orders::Model>, DbErr> {
    let mut query = orders::Entity::find();
    if let Some(status) = status {
        query = query.filter(orders::Column::Status.eq(status));
    }
    query
        .order_by_desc(orders::Column::CreatedAt)
        .offset((page - 1) * limit)
        .limit(limit)
        .all(db)
        .await
}

/// Fetch a single order by ID.
pub async fn get_order_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<orders::Model>, DbErr> {
    orders::Entity::find_by_id(id).one(db).await
}

/// Update the status and notes of an order. Transition legality is checked
/// by the handler against the current record before this is called.
pub async fn update_order_status(
    db: &DatabaseConnection,
    id: Uuid,
    status: Status,
    notes: Option<String>,
) -> Result<orders::Model, DbErr> {
    let order = orders::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(DbErr::RecordNotFound("Order not found".to_string()))?;

    let mut active: orders::ActiveModel = order.into();
    active.status = Set(status);
    if let Some(notes) = notes {
        active.notes = Set(Some(notes));
    }
    active.updated_at = Set(Some(chrono::Utc::now()));

    active.update(db).await
}

/// Delete an order by ID (explicit admin action only).
pub async fn delete_order(db: &DatabaseConnection, id: Uuid) -> Result<DeleteResult, DbErr> {
    orders::Entity::delete_by_id(id).exec(db).await
}
