use sea_orm::*;
use uuid::Uuid;

use crate::models::portfolios::{self, Category, CreatePortfolio, UpdatePortfolio, normalize_images};

/// Insert a new portfolio item. Image fields are normalized so `image_url`
/// is always the first entry of `image_urls`.
pub async fn insert_portfolio(
    db: &DatabaseConnection,
    input: CreatePortfolio,
) -> Result<portfolios::Model, DbErr> {
    let (image_url, image_urls) = normalize_images(input.image_url, input.image_urls);

    let new_item = portfolios::ActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set(input.title),
        category: Set(input.category),
        image_url: Set(image_url),
        image_urls: Set(image_urls.map(|u| serde_json::json!(u))),
        description: Set(input.description),
        display_order: Set(input.display_order.unwrap_or(0)),
        created_at: Set(chrono::Utc::now()),
        updated_at: Set(None),
    };

    new_item.insert(db).await
}

/// Fetch a page of portfolio items with the total row count for the filter.
/// Ordered by display_order, then most recent first.
pub async fn get_portfolios_paginated(
    db: &DatabaseConnection,
    category: Option<Category>,
    limit: u64,
    offset: u64,
) -> Result<(Vec<portfolios::Model>, u64), DbErr> {
    let mut query = portfolios::Entity::find();
    if let Some(category) = category {
        query = query.filter(portfolios::Column::Category.eq(category));
    }

    let total = query.clone().count(db).await?;

    let items = query
        .order_by_asc(portfolios::Column::DisplayOrder)
        .order_by_desc(portfolios::Column::CreatedAt)
        .offset(offset)
        .limit(limit)
        .all(db)
        .await?;

    Ok((items, total))
}

/// Fetch a single portfolio item by ID.
pub async fn get_portfolio_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<portfolios::Model>, DbErr> {
    portfolios::Entity::find_by_id(id).one(db).await
}

/// Update an existing portfolio item, re-normalizing the image fields.
pub async fn update_portfolio(
    db: &DatabaseConnection,
    id: Uuid,
    input: UpdatePortfolio,
) -> Result<portfolios::Model, DbErr> {
    let item = portfolios::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(DbErr::RecordNotFound("Portfolio not found".to_string()))?;

    let current_url = item.image_url.clone();
    let current_urls: Option<Vec<String>> = item
        .image_urls
        .clone()
        .and_then(|v| serde_json::from_value(v).ok());

    let mut active: portfolios::ActiveModel = item.into();

    if let Some(title) = input.title {
        active.title = Set(title);
    }
    if let Some(category) = input.category {
        active.category = Set(category);
    }
    if let Some(description) = input.description {
        active.description = Set(Some(description));
    }
    if let Some(display_order) = input.display_order {
        active.display_order = Set(display_order);
    }

    if input.image_url.is_some() || input.image_urls.is_some() {
        let (image_url, image_urls) = normalize_images(
            input.image_url.unwrap_or(current_url),
            input.image_urls.or(current_urls),
        );
        active.image_url = Set(image_url);
        active.image_urls = Set(image_urls.map(|u| serde_json::json!(u)));
    }

    active.updated_at = Set(Some(chrono::Utc::now()));

    active.update(db).await
}

/// Delete a portfolio item by ID.
pub async fn delete_portfolio(db: &DatabaseConnection, id: Uuid) -> Result<DeleteResult, DbErr> {
    portfolios::Entity::delete_by_id(id).exec(db).await
}
