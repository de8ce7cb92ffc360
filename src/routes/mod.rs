// Route exports
pub mod specialists;

use actix_web::web;

pub use specialists::AppState;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(specialists::configure),
    );
}
