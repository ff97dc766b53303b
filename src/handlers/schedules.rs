use actix_web::{HttpResponse, Responder, web};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::auth::middleware::AdminUser;
use crate::db::schedules as schedule_db;
use crate::models::schedules::{CreateSchedule, DeleteScheduleQuery};

/// GET /api/classes/{id}/schedules — list schedules for a class,
/// earliest date first.
pub async fn get_schedules(
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let class_id = path.into_inner();
    match schedule_db::get_schedules_for_class(db.get_ref(), class_id).await {
        Ok(schedules) => HttpResponse::Ok().json(serde_json::json!({ "data": schedules })),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to fetch schedules: {e}"),
        })),
    }
}

/// POST /api/classes/{id}/schedules — open a new class date (admin only).
pub async fn create_schedule(
    _admin: AdminUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
    body: web::Json<CreateSchedule>,
) -> impl Responder {
    let class_id = path.into_inner();
    let input = body.into_inner();

    if input.schedule_display.trim().is_empty() {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "error": "Missing required fields: schedule_display",
        }));
    }

    match schedule_db::insert_schedule(db.get_ref(), class_id, input).await {
        Ok(schedule) => HttpResponse::Created().json(schedule),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to create schedule: {e}"),
        })),
    }
}

/// DELETE /api/classes/{id}/schedules?schedule_id= — delete a schedule
/// (admin only). Refused while anyone is enrolled; the admin must clear the
/// orders first.
pub async fn delete_schedule(
    _admin: AdminUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
    query: web::Query<DeleteScheduleQuery>,
) -> impl Responder {
    let class_id = path.into_inner();
    let schedule_id = query.schedule_id;

    let schedule = match schedule_db::get_schedule_by_id(db.get_ref(), schedule_id).await {
        Ok(Some(schedule)) if schedule.class_id == class_id => schedule,
        Ok(_) => {
            return HttpResponse::NotFound().json(serde_json::json!({
                "error": format!("Schedule {schedule_id} not found for class {class_id}"),
            }));
        }
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {e}"),
            }));
        }
    };

    if schedule.enrolled() > 0 {
        return HttpResponse::Conflict().json(serde_json::json!({
            "error": format!(
                "Schedule {schedule_id} has {} enrolled applicant(s) and cannot be deleted",
                schedule.enrolled()
            ),
        }));
    }

    match schedule_db::delete_schedule(db.get_ref(), schedule_id).await {
        Ok(_) => HttpResponse::Ok().json(serde_json::json!({
            "message": format!("Schedule {schedule_id} deleted"),
        })),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to delete schedule: {e}"),
        })),
    }
}
