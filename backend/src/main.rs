mod catalog;
mod classifier;
mod contact;
mod content;
mod locations;
mod narrative;
mod routes;
mod session;
mod storage;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use aws_config::BehaviorVersion;
use aws_sdk_s3::Client as S3Client;
use classifier::config::ClassifierConfig;
use classifier::model::Model;
use contact::ContactClient;
use locations::earth911::Earth911Client;
use narrative::gemini::GeminiClient;
use routes::configure_routes;
use session::SessionStore;
use std::env;
use storage::feedback::FeedbackStore;
use storage::s3_service::S3Service;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    if let Ok(current_dir) = env::current_dir() {
        log::info!("Current working directory: {}", current_dir.display());
    } else {
        log::error!("Failed to get the current working directory.");
    }

    dotenv::dotenv().ok();

    let static_dir = env::var("STATIC_DIR").unwrap_or_else(|_| {
        if let Ok(manifest_dir) = env::var("CARGO_MANIFEST_DIR") {
            format!("{}/../static", manifest_dir)
        } else {
            "/usr/src/app/static".to_string()
        }
    });

    let classifier_config = match ClassifierConfig::load() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load classifier config: {:?}", e);
            return Err(std::io::Error::new(
                std::io::ErrorKind::Other,
                format!("Classifier config loading failed: {:?}", e),
            ));
        }
    };

    let model_path =
        env::var("MODEL_PATH").unwrap_or_else(|_| "model/trash_classifier.pt".to_string());
    let model = match Model::load(&model_path, classifier_config) {
        Ok(model) => model,
        Err(e) => {
            log::error!("Failed to preload model at startup: {:?}", e);
            return Err(std::io::Error::new(
                std::io::ErrorKind::Other,
                format!("Model loading failed: {:?}", e),
            ));
        }
    };

    // Initialize AWS configuration for the feedback bucket
    let aws_config = aws_config::defaults(BehaviorVersion::latest()).load().await;
    let s3_client = S3Client::new(&aws_config);
    let s3_bucket = env::var("S3_BUCKET_NAME").unwrap();
    let s3_service = S3Service::new(s3_client, s3_bucket);

    // External service credentials
    let earth911_api_key = env::var("EARTH911_API_KEY").unwrap();
    let gemini_api_key = env::var("GEMINI_API_KEY").unwrap();
    let webhook_url = env::var("WEBHOOK_URL").unwrap();

    let model = web::Data::new(model);
    let sessions = web::Data::new(SessionStore::new());
    let earth911 = web::Data::new(Earth911Client::new(earth911_api_key));
    let gemini = web::Data::new(GeminiClient::new(gemini_api_key));
    let contact_client = web::Data::new(ContactClient::new(webhook_url));
    let feedback_store = web::Data::new(FeedbackStore::new(s3_service));

    let port = env::var("PORT").unwrap_or_else(|_| "8081".to_string());
    let bind_address = format!("0.0.0.0:{}", port);

    log::info!("Starting server on {}", bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allowed_methods(vec!["GET", "POST", "OPTIONS"])
                    .allowed_headers(vec![
                        actix_web::http::header::AUTHORIZATION,
                        actix_web::http::header::ACCEPT,
                        actix_web::http::header::CONTENT_TYPE,
                    ])
                    .max_age(3600),
            )
            .app_data(model.clone())
            .app_data(sessions.clone())
            .app_data(earth911.clone())
            .app_data(gemini.clone())
            .app_data(contact_client.clone())
            .app_data(feedback_store.clone())
            .configure(|cfg| configure_routes(cfg, static_dir.clone()))
    })
    .bind(&bind_address)?
    .run()
    .await
}
