// src/api/handlers/generator.rs
use actix_web::{web, HttpResponse, Responder};

use crate::api::types::{GenerateRequest, GenerateResponse};
use crate::core::config::Config;
use crate::generators;
use crate::models::PasswordGenerationOptions;

/// Generate a random password
///
/// Builds a password from the requested character classes. Every selected
/// class is represented at least once. Missing fields take their defaults;
/// the length is clamped server-side.
#[utoipa::path(
    post,
    path = "/generate",
    tag = "Generator",
    request_body = GenerateRequest,
    responses(
        (status = 200, description = "Generated password", body = GenerateResponse)
    )
)]
pub async fn generate_password(
    config: web::Data<Config>,
    req: web::Json<GenerateRequest>,
) -> impl Responder {
    let length = req
        .length
        .unwrap_or(config.default_password_length)
        .clamp(config.min_password_length, config.max_password_length);

    let options = PasswordGenerationOptions {
        length,
        include_uppercase: req.upper.unwrap_or(true),
        include_lowercase: req.lower.unwrap_or(true),
        include_numbers: req.number.unwrap_or(true),
        include_symbols: req.symbol.unwrap_or(true),
    };

    let password = generators::generate_password(&options);
    if password.is_empty() {
        log::debug!("Generation request with no character classes selected");
    }

    HttpResponse::Ok().json(GenerateResponse { password })
}
