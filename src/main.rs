use actix_cors::Cors;
use actix_web::{App, HttpServer, web};
use dotenv::dotenv;
use florist_backend::auth::jwks::JwksCache;
use florist_backend::auth::middleware::AdminPassword;
use florist_backend::create_pool;
use florist_backend::handlers;
use florist_backend::storage::SupabaseStorage;
use migration::{Migrator, MigratorTrait};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let db = create_pool().await;
    Migrator::up(&db, None)
        .await
        .expect("Failed to run database migrations");
    let db_data = web::Data::new(db);

    let supabase_url = std::env::var("SUPABASE_URL").expect("SUPABASE_URL must be set");
    let project_ref = supabase_url
        .strip_prefix("https://")
        .and_then(|s| s.strip_suffix(".supabase.co"))
        .expect("Invalid SUPABASE_URL format. Expected: https://PROJECT.supabase.co");

    let supabase_anon_key =
        std::env::var("SUPABASE_ANON_KEY").expect("SUPABASE_ANON_KEY must be set");
    let legacy_jwt_secret = std::env::var("SUPABASE_JWT_SECRET").ok();
    let jwks_cache = web::Data::new(Arc::new(JwksCache::new(
        project_ref,
        &supabase_anon_key,
        legacy_jwt_secret,
    )));

    let service_key =
        std::env::var("SUPABASE_SERVICE_ROLE_KEY").expect("SUPABASE_SERVICE_ROLE_KEY must be set");
    let bucket =
        std::env::var("SUPABASE_STORAGE_BUCKET").unwrap_or_else(|_| "images".to_string());
    let storage = web::Data::new(SupabaseStorage::new(&supabase_url, &bucket, &service_key));

    let admin_password = web::Data::new(AdminPassword(
        std::env::var("ADMIN_PASSWORD").expect("ADMIN_PASSWORD must be set"),
    ));

    let port = std::env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let bind_addr = format!("0.0.0.0:{port}");
    tracing::info!("Server running at http://{bind_addr}");

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST", "PUT", "PATCH", "DELETE", "OPTIONS"])
            .allowed_headers(vec![
                actix_web::http::header::AUTHORIZATION,
                actix_web::http::header::CONTENT_TYPE,
                actix_web::http::header::ACCEPT,
            ])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .app_data(db_data.clone())
            .app_data(jwks_cache.clone())
            .app_data(storage.clone())
            .app_data(admin_password.clone())
            .service(web::scope("/api").configure(handlers::init_routes))
    })
    .bind(&bind_addr)?
    .run()
    .await
}
