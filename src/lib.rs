//! Shipment order board.
//!
//! Lists open shipment orders from a remote order-query API as cards, with
//! keyword search, origin/destination filtering and numbered pagination.

#[cfg(feature = "data")]
pub mod controller;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod pagination;
#[cfg(feature = "data")]
pub mod shell;
#[cfg(feature = "data")]
pub mod source;

#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "server")]
pub mod models;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;

#[cfg(feature = "server")]
pub use server::run;

#[cfg(feature = "server")]
mod server {
    use actix_cors::Cors;
    use actix_files::Files;
    use actix_session::{SessionMiddleware, storage::CookieSessionStore};
    use actix_web::cookie::Key;
    use actix_web::{App, HttpServer, middleware, web};
    use tera::Tera;

    use crate::models::config::ServerConfig;
    use crate::routes;
    use crate::source::HttpOrderSource;

    /// Builds and runs the Actix-Web HTTP server using the provided configuration.
    pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
        let source = HttpOrderSource::new(&server_config.orders_api_url)
            .map_err(|e| std::io::Error::other(format!("Invalid orders API url: {e}")))?;
        log::info!("Querying orders from {}", source.endpoint());

        // Cookie signing key for the board session.
        let secret_key = Key::try_from(server_config.secret.as_bytes())
            .map_err(|e| std::io::Error::other(format!("Invalid session secret: {e}")))?;

        let tera = Tera::new(&server_config.templates_dir)
            .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

        let bind_address = (server_config.address.clone(), server_config.port);

        HttpServer::new(move || {
            App::new()
                .wrap(Cors::permissive())
                .wrap(
                    SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                        .cookie_secure(false) // set to true in prod
                        .build(),
                )
                .wrap(middleware::Compress::default())
                .wrap(middleware::Logger::default())
                .service(Files::new("/assets", "./assets"))
                .configure(routes::configure)
                .app_data(web::Data::new(tera.clone()))
                .app_data(web::Data::new(source.clone()))
        })
        .bind(bind_address)?
        .run()
        .await
    }
}
