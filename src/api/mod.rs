// src/api/mod.rs
use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

use crate::analyzer::PasswordAnalyzer;
use crate::breach::HibpClient;
use crate::core::config::Config;

pub mod handlers;
pub mod routes;
pub mod types;

/// Concrete analyzer served by the API.
pub type Analyzer = PasswordAnalyzer<HibpClient>;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::handlers::analyzer::service_info,
        crate::api::handlers::analyzer::analyze_password,
        crate::api::handlers::generator::generate_password,
    ),
    components(
        schemas(
            crate::api::types::GenerateRequest,
            crate::api::types::GenerateResponse,
            crate::api::types::AnalyzeRequest,
            crate::api::types::ServiceInfo,
            crate::models::AnalysisReport,
            crate::models::PasswordAnalysis,
            crate::models::StrengthLabel,
        )
    ),
    tags(
        (name = "Analyzer", description = "Password strength analysis endpoints"),
        (name = "Generator", description = "Password generation endpoints"),
        (name = "System", description = "Service status")
    ),
    info(
        title = "Passguard API",
        version = "0.1.0",
        description = "Password strength analysis and generation API"
    )
)]
struct ApiDoc;

pub async fn start_server(analyzer: Analyzer, config: Config) -> std::io::Result<()> {
    log::info!(
        "Starting Passguard API server on {}:{}",
        config.web_address,
        config.web_port
    );

    let analyzer_data = web::Data::new(analyzer);
    let config_data = web::Data::new(config.clone());

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec!["Content-Type", "Accept"])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .app_data(analyzer_data.clone())
            .app_data(config_data.clone())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
            .service(Redoc::with_url("/redoc", ApiDoc::openapi()))
            .configure(routes::configure_routes)
    })
    .bind((config.web_address.as_str(), config.web_port))?
    .run()
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use serde_json::{json, Value};
    use std::sync::Arc;
    use std::time::Duration;

    use crate::wordlist::CommonPasswordSet;

    // Breach lookups point at a closed local port, so they are refused
    // immediately and the fail-open path reports "not breached".
    fn test_analyzer() -> Analyzer {
        let breach = HibpClient::new("http://127.0.0.1:1", Duration::from_secs(1)).unwrap();
        PasswordAnalyzer::new(Arc::new(CommonPasswordSet::builtin()), breach)
    }

    macro_rules! test_app {
        () => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(test_analyzer()))
                    .app_data(web::Data::new(Config::default()))
                    .configure(routes::configure_routes),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn generate_returns_password_of_default_length() {
        let app = test_app!();
        let req = test::TestRequest::post()
            .uri("/generate")
            .set_json(json!({}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let password = body["password"].as_str().unwrap();
        assert_eq!(password.chars().count(), 12);
    }

    #[actix_web::test]
    async fn generate_clamps_length_to_bounds() {
        let app = test_app!();
        let req = test::TestRequest::post()
            .uri("/generate")
            .set_json(json!({"length": 1000}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["password"].as_str().unwrap().chars().count(), 64);

        let req = test::TestRequest::post()
            .uri("/generate")
            .set_json(json!({"length": 2}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["password"].as_str().unwrap().chars().count(), 8);
    }

    #[actix_web::test]
    async fn generate_with_no_classes_returns_empty_password() {
        let app = test_app!();
        let req = test::TestRequest::post()
            .uri("/generate")
            .set_json(json!({
                "upper": false, "lower": false, "number": false, "symbol": false
            }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["password"].as_str().unwrap(), "");
    }

    #[actix_web::test]
    async fn analyze_missing_password_defaults_to_empty() {
        let app = test_app!();
        let req = test::TestRequest::post()
            .uri("/analyze")
            .set_json(json!({}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["strength_score"], 0);
        assert_eq!(body["strength_label"], "Very Weak");
        assert_eq!(body["analysis"]["not_common"], true);
        assert_eq!(body["analysis"]["sequential"], true);
    }

    #[actix_web::test]
    async fn analyze_reports_shape_and_fail_open_breach() {
        let app = test_app!();
        let req = test::TestRequest::post()
            .uri("/analyze")
            .set_json(json!({"password": "Tr!mzv_Qw83p"}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        // Unreachable breach backend resolves to not breached.
        assert_eq!(body["analysis"]["pwned"], false);
        assert_eq!(body["analysis"]["pwned_message"], "");
        assert_eq!(body["strength_score"], 100);
        assert_eq!(body["strength_label"], "Very Strong");
    }
}
