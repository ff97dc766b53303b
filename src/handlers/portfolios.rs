use actix_web::{HttpResponse, Responder, web};
use sea_orm::{DatabaseConnection, DbErr};
use uuid::Uuid;

use crate::auth::middleware::AdminUser;
use crate::db::portfolios as portfolio_db;
use crate::models::portfolios::{
    CreatePortfolio, PortfolioListQuery, UpdatePortfolio, blank_update_fields,
};

/// GET /api/portfolios?category=&limit=&offset= — public gallery listing.
pub async fn get_portfolios(
    db: web::Data<DatabaseConnection>,
    query: web::Query<PortfolioListQuery>,
) -> impl Responder {
    match portfolio_db::get_portfolios_paginated(
        db.get_ref(),
        query.category,
        query.limit(),
        query.offset(),
    )
    .await
    {
        Ok((items, total)) => HttpResponse::Ok().json(serde_json::json!({
            "data": items,
            "total": total,
        })),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to fetch portfolios: {e}"),
        })),
    }
}

/// GET /api/portfolios/{id} — get a single portfolio item.
pub async fn get_portfolio(
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let id = path.into_inner();
    match portfolio_db::get_portfolio_by_id(db.get_ref(), id).await {
        Ok(Some(item)) => HttpResponse::Ok().json(item),
        Ok(None) => HttpResponse::NotFound().json(serde_json::json!({
            "error": format!("Portfolio item {id} not found"),
        })),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Database error: {e}"),
        })),
    }
}

/// POST /api/portfolios — create a portfolio item (admin only).
pub async fn create_portfolio(
    _admin: AdminUser,
    db: web::Data<DatabaseConnection>,
    body: web::Json<CreatePortfolio>,
) -> impl Responder {
    let input = body.into_inner();

    let mut missing = Vec::new();
    if input.title.trim().is_empty() {
        missing.push("title");
    }
    if input.image_url.trim().is_empty() {
        missing.push("image_url");
    }
    if !missing.is_empty() {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "error": format!("Missing required fields: {}", missing.join(", ")),
        }));
    }

    match portfolio_db::insert_portfolio(db.get_ref(), input).await {
        Ok(item) => HttpResponse::Created().json(item),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to create portfolio item: {e}"),
        })),
    }
}

/// PUT /api/portfolios/{id} — update a portfolio item (admin only).
/// Required fields may be omitted but not blanked out.
pub async fn update_portfolio(
    _admin: AdminUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
    body: web::Json<UpdatePortfolio>,
) -> impl Responder {
    let id = path.into_inner();
    let input = body.into_inner();

    let blank = blank_update_fields(&input);
    if !blank.is_empty() {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "error": format!("Required fields cannot be blank: {}", blank.join(", ")),
        }));
    }

    match portfolio_db::update_portfolio(db.get_ref(), id, input).await {
        Ok(updated) => HttpResponse::Ok().json(updated),
        Err(DbErr::RecordNotFound(_)) => HttpResponse::NotFound().json(serde_json::json!({
            "error": format!("Portfolio item {id} not found"),
        })),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to update portfolio item: {e}"),
        })),
    }
}

/// DELETE /api/portfolios/{id} — delete a portfolio item (admin only).
pub async fn delete_portfolio(
    _admin: AdminUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let id = path.into_inner();
    match portfolio_db::delete_portfolio(db.get_ref(), id).await {
        Ok(result) if result.rows_affected > 0 => HttpResponse::Ok().json(serde_json::json!({
            "message": format!("Portfolio item {id} deleted"),
        })),
        Ok(_) => HttpResponse::NotFound().json(serde_json::json!({
            "error": format!("Portfolio item {id} not found"),
        })),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to delete portfolio item: {e}"),
        })),
    }
}
