use actix_cors::Cors;
use actix_web::{web, App, HttpServer, middleware};
use fit_advisor::config::Settings;
use fit_advisor::core::Recommender;
use fit_advisor::routes::{self, fitting::AppState};
use fit_advisor::services::KnowledgeBase;
use std::sync::Arc;
use tracing::{info, error};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Load configuration
    let settings = match Settings::load().and_then(|s| s.validate().map(|_| s)) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
        }
    };

    // Initialize logging, RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if settings.logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }

    info!("Starting fit advisor service...");

    // Missing knowledge base degrades to an empty corpus; a corrupt one is fatal
    let knowledge_base = KnowledgeBase::load_or_empty(&settings.knowledge_base.path)
        .await
        .map_err(|e| {
            error!("Failed to load knowledge base: {}", e);
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })?;

    let recommender = Recommender::new(knowledge_base)
        .with_similarity_threshold(settings.matching.similarity_threshold);

    info!(
        "Recommender initialized with {} entries, similarity threshold {}",
        recommender.knowledge_base().len(),
        recommender.similarity_threshold()
    );

    let app_state = AppState {
        recommender: Arc::new(recommender),
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(routes::handle_json_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
