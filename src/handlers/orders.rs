use actix_web::{HttpResponse, Responder, web};
use sea_orm::DatabaseConnection;
use tracing::warn;
use uuid::Uuid;

use crate::auth::middleware::AdminUser;
use crate::db::orders as order_db;
use crate::db::schedules as schedule_db;
use crate::models::orders::{CreateOrder, OrderListQuery, UpdateOrder, missing_create_fields};

/// POST /api/orders — submit a class application. The only anonymous write
/// in the API; status always starts at `pending`.
pub async fn create_order(
    db: web::Data<DatabaseConnection>,
    body: web::Json<CreateOrder>,
) -> impl Responder {
    let input = body.into_inner();

    let missing = missing_create_fields(&input);
    if !missing.is_empty() {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "error": format!("Missing required fields: {}", missing.join(", ")),
        }));
    }

    let schedule_id = input.schedule_id;

    let order = match order_db::insert_order(db.get_ref(), input).await {
        Ok(order) => order,
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Failed to create order: {e}"),
            }));
        }
    };

    // Second, independent write — not a transaction with the insert above.
    // If it fails the order stands and the seat count is reconciled by hand.
    if let Some(schedule_id) = schedule_id {
        if let Err(e) = schedule_db::decrement_available_seats(db.get_ref(), schedule_id).await {
            warn!(
                "Order {} created but seat decrement on schedule {} failed: {}",
                order.id, schedule_id, e
            );
        }
    }

    HttpResponse::Created().json(order)
}

/// GET /api/orders?status=&page=&limit= — list applications (admin only).
pub async fn get_orders(
    _admin: AdminUser,
    db: web::Data<DatabaseConnection>,
    query: web::Query<OrderListQuery>,
) -> impl Responder {
    match order_db::get_orders_paginated(db.get_ref(), query.status, query.page(), query.limit())
        .await
    {
        Ok(orders) => HttpResponse::Ok().json(serde_json::json!({ "data": orders })),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to fetch orders: {e}"),
        })),
    }
}

/// GET /api/orders/{id} — get a single application (admin only).
pub async fn get_order(
    _admin: AdminUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let id = path.into_inner();
    match order_db::get_order_by_id(db.get_ref(), id).await {
        Ok(Some(order)) => HttpResponse::Ok().json(order),
        Ok(None) => HttpResponse::NotFound().json(serde_json::json!({
            "error": format!("Order {id} not found"),
        })),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Database error: {e}"),
        })),
    }
}

/// PATCH /api/orders/{id} — update status and notes (admin only).
///
/// A status string outside the four known values never reaches this handler:
/// JSON deserialization of the enum fails first with a 400. Transition
/// legality is checked against the stored record here.
pub async fn update_order(
    _admin: AdminUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateOrder>,
) -> impl Responder {
    let id = path.into_inner();
    let input = body.into_inner();

    let order = match order_db::get_order_by_id(db.get_ref(), id).await {
        Ok(Some(order)) => order,
        Ok(None) => {
            return HttpResponse::NotFound().json(serde_json::json!({
                "error": format!("Order {id} not found"),
            }));
        }
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {e}"),
            }));
        }
    };

    if !order.status.can_transition_to(input.status) {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "error": format!(
                "Cannot change order status from {:?} to {:?}",
                order.status, input.status
            ),
        }));
    }

    match order_db::update_order_status(db.get_ref(), id, input.status, input.notes).await {
        Ok(updated) => HttpResponse::Ok().json(updated),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to update order: {e}"),
        })),
    }
}

/// DELETE /api/orders/{id} — delete an application (admin only).
pub async fn delete_order(
    _admin: AdminUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let id = path.into_inner();
    match order_db::delete_order(db.get_ref(), id).await {
        Ok(result) if result.rows_affected > 0 => HttpResponse::Ok().json(serde_json::json!({
            "message": format!("Order {id} deleted"),
        })),
        Ok(_) => HttpResponse::NotFound().json(serde_json::json!({
            "error": format!("Order {id} not found"),
        })),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to delete order: {e}"),
        })),
    }
}
