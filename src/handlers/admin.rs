use actix_web::{HttpResponse, Responder, web};
use serde::Deserialize;

use crate::auth::middleware::AdminPassword;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

/// POST /api/admin/login — legacy admin form login.
///
/// Superseded by the platform session tokens used by every other protected
/// route; kept for the old admin form, with the password check done here
/// against configuration instead of shipped to the client.
pub async fn login(
    password: web::Data<AdminPassword>,
    body: web::Json<LoginRequest>,
) -> impl Responder {
    if body.password == password.0 {
        HttpResponse::Ok().json(serde_json::json!({ "success": true }))
    } else {
        HttpResponse::Unauthorized().json(serde_json::json!({
            "error": "Invalid password",
        }))
    }
}
