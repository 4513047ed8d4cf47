// src/api/handlers/analyzer.rs
use actix_web::{web, HttpResponse, Responder};

use crate::api::types::{AnalyzeRequest, ServiceInfo};
use crate::api::Analyzer;

/// Analyze password strength
///
/// Runs the full set of checks (length, character classes, common-password
/// lookup, sequential runs, breach corpus) and returns the scored report.
/// A missing password field is treated as the empty string.
#[utoipa::path(
    post,
    path = "/analyze",
    tag = "Analyzer",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "Analysis result", body = crate::models::AnalysisReport)
    )
)]
pub async fn analyze_password(
    analyzer: web::Data<Analyzer>,
    req: web::Json<AnalyzeRequest>,
) -> impl Responder {
    let password = req.into_inner().password.unwrap_or_default();
    let report = analyzer.analyze(&password).await;
    HttpResponse::Ok().json(report)
}

/// Service info
///
/// Name and version of the running service.
#[utoipa::path(
    get,
    path = "/",
    tag = "System",
    responses(
        (status = 200, description = "Service info", body = ServiceInfo)
    )
)]
pub async fn service_info() -> impl Responder {
    HttpResponse::Ok().json(ServiceInfo {
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
