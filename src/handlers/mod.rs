pub mod admin;
pub mod classes;
pub mod orders;
pub mod portfolios;
pub mod schedules;
pub mod upload;

use actix_web::web;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // ── Class routes (reads public, writes admin-only) ──
    cfg.service(
        web::scope("/classes")
            .route("", web::get().to(classes::get_classes))
            .route("", web::post().to(classes::create_class))
            .route("/{id}", web::get().to(classes::get_class))
            .route("/{id}", web::put().to(classes::update_class))
            .route("/{id}", web::delete().to(classes::delete_class))
            .route("/{id}/schedules", web::get().to(schedules::get_schedules))
            .route("/{id}/schedules", web::post().to(schedules::create_schedule))
            .route("/{id}/schedules", web::delete().to(schedules::delete_schedule)),
    );

    // ── Portfolio routes (reads public, writes admin-only) ──
    cfg.service(
        web::resource("/portfolios")
            .route(web::get().to(portfolios::get_portfolios))
            .route(web::post().to(portfolios::create_portfolio)),
    );
    cfg.service(
        web::resource("/portfolios/{id}")
            .route(web::get().to(portfolios::get_portfolio))
            .route(web::put().to(portfolios::update_portfolio))
            .route(web::delete().to(portfolios::delete_portfolio)),
    );

    // ── Order routes (creation is the one public write; the rest is admin) ──
    cfg.service(
        web::scope("/orders")
            .route("", web::post().to(orders::create_order))
            .route("", web::get().to(orders::get_orders))
            .route("/{id}", web::get().to(orders::get_order))
            .route("/{id}", web::patch().to(orders::update_order))
            .route("/{id}", web::delete().to(orders::delete_order)),
    );

    // ── Image upload (admin only) ──
    cfg.service(
        web::resource("/upload")
            .route(web::post().to(upload::upload_file))
            .route(web::delete().to(upload::delete_file)),
    );

    // ── Legacy admin form login ──
    cfg.service(web::resource("/admin/login").route(web::post().to(admin::login)));
}
