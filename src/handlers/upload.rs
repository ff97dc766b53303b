use actix_multipart::Multipart;
use actix_web::{HttpResponse, Responder, web};
use futures_util::StreamExt;
use serde::Deserialize;
use uuid::Uuid;

use crate::auth::middleware::AdminUser;
use crate::storage::{ALLOWED_CONTENT_TYPES, MAX_UPLOAD_BYTES, StorageError, SupabaseStorage};

fn extension_for(content_type: &str) -> &'static str {
    match content_type {
        "image/jpeg" => "jpg",
        "image/png" => "png",
        _ => "webp",
    }
}

/// POST /api/upload — upload one image (admin only). Multipart `file` field,
/// JPEG/PNG/WebP, at most 5 MB. Returns the public URL and the storage path
/// used for later deletion.
pub async fn upload_file(
    _admin: AdminUser,
    storage: web::Data<SupabaseStorage>,
    mut payload: Multipart,
) -> impl Responder {
    while let Some(item) = payload.next().await {
        let mut field = match item {
            Ok(field) => field,
            Err(e) => {
                return HttpResponse::BadRequest().json(serde_json::json!({
                    "error": format!("Malformed multipart body: {e}"),
                }));
            }
        };

        let is_file_field = field
            .content_disposition()
            .and_then(|cd| cd.get_name())
            .map(|name| name == "file")
            .unwrap_or(false);
        if !is_file_field {
            continue;
        }

        let content_type = match field.content_type() {
            Some(mime) => mime.essence_str().to_string(),
            None => {
                return HttpResponse::BadRequest().json(serde_json::json!({
                    "error": "File field has no content type",
                }));
            }
        };

        if !ALLOWED_CONTENT_TYPES.contains(&content_type.as_str()) {
            return HttpResponse::BadRequest().json(serde_json::json!({
                "error": format!("Unsupported file type {content_type}: only JPEG, PNG, and WebP are accepted"),
            }));
        }

        let mut bytes: Vec<u8> = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk = match chunk {
                Ok(chunk) => chunk,
                Err(e) => {
                    return HttpResponse::BadRequest().json(serde_json::json!({
                        "error": format!("Failed to read upload: {e}"),
                    }));
                }
            };
            if bytes.len() + chunk.len() > MAX_UPLOAD_BYTES {
                return HttpResponse::BadRequest().json(serde_json::json!({
                    "error": "File exceeds the 5MB upload limit",
                }));
            }
            bytes.extend_from_slice(&chunk);
        }

        let path = format!(
            "uploads/{}.{}",
            Uuid::new_v4(),
            extension_for(&content_type)
        );

        return match storage.upload(&path, &content_type, bytes).await {
            Ok(stored) => HttpResponse::Ok().json(stored),
            Err(e @ StorageError::Upstream { .. }) => {
                HttpResponse::BadGateway().json(serde_json::json!({
                    "error": format!("Storage upload failed: {e}"),
                }))
            }
            Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Storage upload failed: {e}"),
            })),
        };
    }

    HttpResponse::BadRequest().json(serde_json::json!({
        "error": "No 'file' field in multipart body",
    }))
}

#[derive(Debug, Deserialize)]
pub struct DeleteUploadQuery {
    pub path: String,
}

/// DELETE /api/upload?path= — remove a stored image by path (admin only).
pub async fn delete_file(
    _admin: AdminUser,
    storage: web::Data<SupabaseStorage>,
    query: web::Query<DeleteUploadQuery>,
) -> impl Responder {
    match storage.delete(&query.path).await {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({
            "message": format!("Deleted {}", query.path),
        })),
        Err(e @ StorageError::Upstream { .. }) => {
            HttpResponse::BadGateway().json(serde_json::json!({
                "error": format!("Storage delete failed: {e}"),
            }))
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Storage delete failed: {e}"),
        })),
    }
}
