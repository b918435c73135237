// Products REST API server
//
// Serves the write endpoint consumed by the browser form plus the rest
// of the CRUD surface, with CORS opened for the Vite dev origin.

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use product_catalog::server::routes;
use product_catalog::server::store::ProductStore;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_thread_ids(false)
        .with_max_level(tracing::Level::INFO)
        .init();

    let store = web::Data::new(ProductStore::new());

    tracing::info!("Products API escuchando en http://127.0.0.1:8000");

    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin("http://localhost:5173")
            .allow_any_method()
            .allow_any_header()
            .supports_credentials();

        App::new()
            .wrap(cors)
            .app_data(store.clone())
            .configure(routes::configure)
    })
    .bind(("127.0.0.1", 8000))?
    .run()
    .await
}
