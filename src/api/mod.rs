// src/api/mod.rs
use std::path::PathBuf;

use actix_cors::Cors;
use actix_files::Files;
use actix_web::{middleware, web, App, HttpServer};
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

pub mod handlers;
pub mod routes;
pub mod types;

// This will hold our API documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Generator endpoints
        crate::api::handlers::generator::generate_password,
        crate::api::handlers::generator::analyze_strength,

        // System endpoints
        crate::api::handlers::system::health,
    ),
    components(
        schemas(
            crate::api::types::PasswordGenerationRequest,
            crate::api::types::PasswordGenerationResponse,
            crate::api::types::StrengthAnalysisRequest,
            crate::api::types::StrengthAnalysisResponse,
            crate::api::types::HealthResponse,
            crate::models::CharacterClasses,
            crate::generators::StrengthBand,
        )
    ),
    tags(
        (name = "Generator", description = "Password generation and strength scoring"),
        (name = "System", description = "Service health")
    ),
    info(
        title = "PassForge API",
        description = "Random password generation with a strength indicator"
    )
)]
struct ApiDoc;

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub bind_address: String,
    pub port: u16,
    pub static_dir: PathBuf,
}

pub async fn start_server(settings: ServerSettings) -> std::io::Result<()> {
    let openapi = ApiDoc::openapi();
    let static_dir = settings.static_dir.clone();

    log::info!(
        "Starting API server on {}:{} (static assets from {})",
        settings.bind_address,
        settings.port,
        static_dir.display()
    );

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .service(web::scope("/api").configure(routes::configure_routes))
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
            .service(Redoc::with_url("/redoc", openapi.clone()))
            // UI assets; everything the scopes above did not claim
            .service(
                Files::new("/", static_dir.clone())
                    .index_file("index.html")
                    .prefer_utf8(true),
            )
    })
    .bind((settings.bind_address.as_str(), settings.port))?
    .run()
    .await
}
