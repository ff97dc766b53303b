use sea_orm::*;
use uuid::Uuid;

use crate::models::classes::{self, CreateClass, UpdateClass};

fn to_json<T: serde::Serialize>(value: &T) -> Result<serde_json::Value, DbErr> {
    serde_json::to_value(value).map_err(|e| DbErr::Custom(format!("JSON encode failed: {e}")))
}

/// Insert a new class. Visibility defaults to active.
pub async fn insert_class(
    db: &DatabaseConnection,
    input: CreateClass,
) -> Result<classes::Model, DbErr> {
    let curriculum = input.curriculum.as_ref().map(to_json).transpose()?;
    let policy = input.policy.as_ref().map(to_json).transpose()?;
    let bank_info = input.bank_info.as_ref().map(to_json).transpose()?;

    let new_class = classes::ActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set(input.title),
        subtitle: Set(input.subtitle),
        category: Set(input.category),
        level: Set(input.level),
        description: Set(input.description),
        image_url: Set(input.image_url),
        location: Set(input.location),
        duration: Set(input.duration),
        price: Set(input.price),
        price_display: Set(input.price_display),
        capacity: Set(input.capacity),
        curriculum: Set(curriculum),
        policy: Set(policy),
        bank_info: Set(bank_info),
        is_active: Set(input.is_active.unwrap_or(true)),
        created_at: Set(chrono::Utc::now()),
        updated_at: Set(None),
    };

    new_class.insert(db).await
}

/// Fetch classes, newest first. `is_active` filters visibility; `None`
/// returns everything (admin view).
pub async fn get_classes(
    db: &DatabaseConnection,
    is_active: Option<bool>,
) -> Result<Vec<classes::Model>, DbErr> {
    let mut query = classes::Entity::find();
    if let Some(active) = is_active {
        query = query.filter(classes::Column::IsActive.eq(active));
    }
    query
        .order_by_desc(classes::Column::CreatedAt)
        .all(db)
        .await
}

/// Fetch a single class by ID.
pub async fn get_class_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<classes::Model>, DbErr> {
    classes::Entity::find_by_id(id).one(db).await
}

/// Update an existing class (partial).
pub async fn update_class(
    db: &DatabaseConnection,
    id: Uuid,
    input: UpdateClass,
) -> Result<classes::Model, DbErr> {
    let class = classes::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(DbErr::RecordNotFound("Class not found".to_string()))?;

    let mut active: classes::ActiveModel = class.into();

    if let Some(title) = input.title {
        active.title = Set(title);
    }
    if let Some(subtitle) = input.subtitle {
        active.subtitle = Set(Some(subtitle));
    }
    if let Some(category) = input.category {
        active.category = Set(Some(category));
    }
    if let Some(level) = input.level {
        active.level = Set(Some(level));
    }
    if let Some(description) = input.description {
        active.description = Set(description);
    }
    if let Some(image_url) = input.image_url {
        active.image_url = Set(image_url);
    }
    if let Some(location) = input.location {
        active.location = Set(location);
    }
    if let Some(duration) = input.duration {
        active.duration = Set(duration);
    }
    if let Some(price) = input.price {
        active.price = Set(price);
    }
    if let Some(price_display) = input.price_display {
        active.price_display = Set(Some(price_display));
    }
    if let Some(capacity) = input.capacity {
        active.capacity = Set(Some(capacity));
    }
    if let Some(curriculum) = input.curriculum {
        active.curriculum = Set(Some(to_json(&curriculum)?));
    }
    if let Some(policy) = input.policy {
        active.policy = Set(Some(to_json(&policy)?));
    }
    if let Some(bank_info) = input.bank_info {
        active.bank_info = Set(Some(to_json(&bank_info)?));
    }
    if let Some(is_active) = input.is_active {
        active.is_active = Set(is_active);
    }

    active.updated_at = Set(Some(chrono::Utc::now()));

    active.update(db).await
}

/// Delete a class by ID. Unconditional: schedules and orders referencing it
/// are left in place (orders carry their own schedule snapshot).
pub async fn delete_class(db: &DatabaseConnection, id: Uuid) -> Result<DeleteResult, DbErr> {
    classes::Entity::delete_by_id(id).exec(db).await
}
