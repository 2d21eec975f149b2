// Route exports
pub mod quiz;

use actix_web::web;

pub use quiz::AppState;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(quiz::configure),
    );
}
