use actix_web::{HttpResponse, Responder, web};
use sea_orm::{DatabaseConnection, DbErr};
use uuid::Uuid;

use crate::auth::middleware::{AdminUser, MaybeAdmin};
use crate::db::classes as class_db;
use crate::db::schedules as schedule_db;
use crate::models::classes::{
    ClassListQuery, ClassWithSchedules, CreateClass, UpdateClass, blank_update_fields,
    missing_create_fields,
};

/// GET /api/classes — list classes with their schedules embedded.
///
/// Anonymous callers only ever see active classes; authenticated callers see
/// everything unless they pass an explicit `is_active` filter.
pub async fn get_classes(
    caller: MaybeAdmin,
    db: web::Data<DatabaseConnection>,
    query: web::Query<ClassListQuery>,
) -> impl Responder {
    let is_active = if caller.0.is_some() {
        query.is_active
    } else {
        Some(true)
    };

    let classes = match class_db::get_classes(db.get_ref(), is_active).await {
        Ok(classes) => classes,
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Failed to fetch classes: {e}"),
            }));
        }
    };

    let mut data = Vec::with_capacity(classes.len());
    for class in classes {
        match schedule_db::get_schedules_for_class(db.get_ref(), class.id).await {
            Ok(schedules) => data.push(ClassWithSchedules { class, schedules }),
            Err(e) => {
                return HttpResponse::InternalServerError().json(serde_json::json!({
                    "error": format!("Failed to fetch schedules: {e}"),
                }));
            }
        }
    }

    HttpResponse::Ok().json(serde_json::json!({ "data": data }))
}

/// GET /api/classes/{id} — get a single class with its schedules.
pub async fn get_class(db: web::Data<DatabaseConnection>, path: web::Path<Uuid>) -> impl Responder {
    let id = path.into_inner();
    let class = match class_db::get_class_by_id(db.get_ref(), id).await {
        Ok(Some(class)) => class,
        Ok(None) => {
            return HttpResponse::NotFound().json(serde_json::json!({
                "error": format!("Class {id} not found"),
            }));
        }
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {e}"),
            }));
        }
    };

    match schedule_db::get_schedules_for_class(db.get_ref(), id).await {
        Ok(schedules) => HttpResponse::Ok().json(ClassWithSchedules { class, schedules }),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to fetch schedules: {e}"),
        })),
    }
}

/// POST /api/classes — create a class (admin only).
pub async fn create_class(
    _admin: AdminUser,
    db: web::Data<DatabaseConnection>,
    body: web::Json<CreateClass>,
) -> impl Responder {
    let input = body.into_inner();

    let missing = missing_create_fields(&input);
    if !missing.is_empty() {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "error": format!("Missing required fields: {}", missing.join(", ")),
        }));
    }

    match class_db::insert_class(db.get_ref(), input).await {
        Ok(class) => HttpResponse::Created().json(class),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to create class: {e}"),
        })),
    }
}

/// PUT /api/classes/{id} — update a class (admin only). Required fields may
/// be omitted but not blanked out.
pub async fn update_class(
    _admin: AdminUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateClass>,
) -> impl Responder {
    let id = path.into_inner();
    let input = body.into_inner();

    let blank = blank_update_fields(&input);
    if !blank.is_empty() {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "error": format!("Required fields cannot be blank: {}", blank.join(", ")),
        }));
    }

    match class_db::update_class(db.get_ref(), id, input).await {
        Ok(updated) => HttpResponse::Ok().json(updated),
        Err(DbErr::RecordNotFound(_)) => HttpResponse::NotFound().json(serde_json::json!({
            "error": format!("Class {id} not found"),
        })),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to update class: {e}"),
        })),
    }
}

/// DELETE /api/classes/{id} — delete a class (admin only). Unconditional:
/// orders referencing the class keep their denormalized snapshot.
pub async fn delete_class(
    _admin: AdminUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let id = path.into_inner();
    match class_db::delete_class(db.get_ref(), id).await {
        Ok(result) if result.rows_affected > 0 => HttpResponse::Ok().json(serde_json::json!({
            "message": format!("Class {id} deleted"),
        })),
        Ok(_) => HttpResponse::NotFound().json(serde_json::json!({
            "error": format!("Class {id} not found"),
        })),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to delete class: {e}"),
        })),
    }
}
