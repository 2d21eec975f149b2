use actix_cors::Cors;
use actix_web::{error, http::StatusCode, middleware, web, App, HttpResponse, HttpServer};
use persona_quiz::config::{LoggingSettings, Settings};
use persona_quiz::core::{Catalog, Matcher, Scorer};
use persona_quiz::routes::{self, AppState};
use persona_quiz::services::{CollegeDataset, PostgresClient};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// JSON error response for rejected payloads
#[derive(Debug, serde::Serialize)]
pub struct JsonError {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for JsonError {}

impl error::ResponseError for JsonError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_REQUEST)
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self)
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    JsonError {
        error: "invalid_json".to_string(),
        message: format!("Invalid JSON: {}", err),
        status_code: 400,
    }
    .into()
}

/// Handle query payload errors
pub fn handle_query_payload_error(err: error::QueryPayloadError, _req: &actix_web::HttpRequest) -> actix_web::Error {
    JsonError {
        error: "invalid_query".to_string(),
        message: format!("Invalid query: {}", err),
        status_code: 400,
    }
    .into()
}

/// LOG_LEVEL and LOG_FORMAT override the configured values
fn init_logging(logging: &LoggingSettings) {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| logging.level.clone());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| logging.format.clone());

    let filter = EnvFilter::try_new(&log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.json().init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = Settings::load();
    let logging = settings
        .as_ref()
        .map(|s| s.logging.clone())
        .unwrap_or_default();
    init_logging(&logging);

    info!("Starting persona quiz service...");

    let settings = settings.map_err(|e| {
        error!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    info!("Configuration loaded successfully");

    // Catalog is compiled in; the dataset may be missing, in which case every
    // match request comes back empty
    let catalog = Arc::new(Catalog::new());
    let scorer = Scorer::new(Arc::clone(&catalog));

    let fetch_timeout = Duration::from_secs(settings.dataset.fetch_timeout_secs.unwrap_or(10));
    let dataset = match CollegeDataset::load(&settings.dataset.source, fetch_timeout).await {
        Ok(dataset) => {
            info!("Loaded {} colleges from {}", dataset.len(), settings.dataset.source);
            dataset
        }
        Err(e) => {
            error!("Failed to load college dataset from {}: {}", settings.dataset.source, e);
            CollegeDataset::empty()
        }
    };

    let matcher = Matcher::new(settings.matching.min_results, settings.matching.max_results);
    let (min_results, max_results) = matcher.limits();

    info!(
        "Scorer initialized with {} personas, matcher returns {}-{} colleges",
        catalog.persona_count(),
        min_results,
        max_results
    );

    // Submissions are only persisted when a database is configured
    let postgres = match settings.database.url.as_deref() {
        Some(url) => match PostgresClient::from_settings(
            url,
            settings.database.max_connections,
            settings.database.min_connections,
            settings.database.acquire_timeout_secs,
        )
        .await
        {
            Ok(client) => {
                info!("PostgreSQL client initialized");
                Some(Arc::new(client))
            }
            Err(e) => {
                error!("Failed to connect to PostgreSQL ({}), running without persistence", e);
                None
            }
        },
        None => {
            warn!("No database configured, submissions will not be persisted");
            None
        }
    };

    let app_state = AppState {
        scorer,
        matcher,
        dataset: Arc::new(dataset),
        postgres,
    };

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
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
