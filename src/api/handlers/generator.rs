// src/api/handlers/generator.rs
use actix_web::{web, HttpResponse};
use log::warn;

use crate::api::types::{
    PasswordGenerationRequest, PasswordGenerationResponse, StrengthAnalysisRequest,
    StrengthAnalysisResponse,
};
use crate::generators::{
    calculate_strength, generate_password as generate, strength_color, strength_description,
};
use crate::models::{CharacterClasses, PasswordGenerationOptions};

/// Shortest and longest password the API will produce. The core itself has
/// no bounds; this is the UI range.
const MIN_LENGTH: usize = 4;
const MAX_LENGTH: usize = 64;

/// Generate a password
///
/// Generates a random password from the selected character classes and
/// scores its strength.
#[utoipa::path(
    post,
    path = "/api/generator/password",
    tag = "Generator",
    request_body = PasswordGenerationRequest,
    responses(
        (status = 200, description = "Generated password", body = PasswordGenerationResponse),
        (status = 400, description = "Invalid options", body = PasswordGenerationResponse)
    )
)]
pub async fn generate_password(
    generation_req: web::Json<PasswordGenerationRequest>,
) -> HttpResponse {
    let options = PasswordGenerationOptions {
        length: generation_req.length.unwrap_or(16),
        classes: CharacterClasses {
            uppercase: generation_req.include_uppercase.unwrap_or(true),
            lowercase: generation_req.include_lowercase.unwrap_or(true),
            numbers: generation_req.include_numbers.unwrap_or(true),
            symbols: generation_req.include_symbols.unwrap_or(true),
        },
    };

    if options.length < MIN_LENGTH {
        return HttpResponse::BadRequest().json(PasswordGenerationResponse::failure(format!(
            "Password length must be at least {} characters",
            MIN_LENGTH
        )));
    }

    if options.length > MAX_LENGTH {
        return HttpResponse::BadRequest().json(PasswordGenerationResponse::failure(format!(
            "Password length must be at most {} characters",
            MAX_LENGTH
        )));
    }

    let password = match generate(&options) {
        Ok(password) => password,
        Err(e) => {
            warn!("Password generation rejected: {}", e);
            return HttpResponse::BadRequest()
                .json(PasswordGenerationResponse::failure(e.to_string()));
        }
    };

    let strength = calculate_strength(&password, &options.classes);

    HttpResponse::Ok().json(PasswordGenerationResponse {
        success: true,
        password: Some(password),
        strength: Some(strength),
        description: Some(strength_description(strength).to_string()),
        color: Some(strength_color(strength).to_string()),
        error: None,
    })
}

/// Score a password
///
/// Scores an arbitrary password against the character classes it was meant
/// to include. Total over all inputs, so this never fails.
#[utoipa::path(
    post,
    path = "/api/generator/strength",
    tag = "Generator",
    request_body = StrengthAnalysisRequest,
    responses(
        (status = 200, description = "Strength score", body = StrengthAnalysisResponse)
    )
)]
pub async fn analyze_strength(analysis_req: web::Json<StrengthAnalysisRequest>) -> HttpResponse {
    let requested = CharacterClasses {
        uppercase: analysis_req.include_uppercase.unwrap_or(false),
        lowercase: analysis_req.include_lowercase.unwrap_or(false),
        numbers: analysis_req.include_numbers.unwrap_or(false),
        symbols: analysis_req.include_symbols.unwrap_or(false),
    };

    let strength = calculate_strength(&analysis_req.password, &requested);

    HttpResponse::Ok().json(StrengthAnalysisResponse {
        success: true,
        strength,
        description: strength_description(strength).to_string(),
        color: strength_color(strength).to_string(),
    })
}

#[cfg(test)]
mod tests {
    use actix_web::{test, web, App};
    use serde_json::json;

    use crate::api::routes::configure_routes;
    use crate::api::types::{PasswordGenerationResponse, StrengthAnalysisResponse};
    use crate::generators::password::{NUMBER_CHARS, SYMBOL_CHARS};

    macro_rules! test_app {
        () => {
            test::init_service(
                App::new().service(web::scope("/api").configure(configure_routes)),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn generate_defaults_to_sixteen_chars() {
        let app = test_app!();
        let req = test::TestRequest::post()
            .uri("/api/generator/password")
            .set_json(json!({}))
            .to_request();
        let body: PasswordGenerationResponse = test::call_and_read_body_json(&app, req).await;
        assert!(body.success);
        assert_eq!(body.password.unwrap().len(), 16);
        assert!(body.strength.is_some());
        assert!(body.description.is_some());
        assert!(body.color.is_some());
    }

    #[actix_web::test]
    async fn generate_respects_selected_classes() {
        let app = test_app!();
        let req = test::TestRequest::post()
            .uri("/api/generator/password")
            .set_json(json!({
                "length": 32,
                "include_uppercase": false,
                "include_lowercase": false,
                "include_numbers": true,
                "include_symbols": true
            }))
            .to_request();
        let body: PasswordGenerationResponse = test::call_and_read_body_json(&app, req).await;
        assert!(body.success);
        let password = body.password.unwrap();
        assert_eq!(password.len(), 32);
        for c in password.bytes() {
            assert!(NUMBER_CHARS.contains(&c) || SYMBOL_CHARS.contains(&c));
        }
    }

    #[actix_web::test]
    async fn generate_rejects_empty_selection() {
        let app = test_app!();
        let req = test::TestRequest::post()
            .uri("/api/generator/password")
            .set_json(json!({
                "include_uppercase": false,
                "include_lowercase": false,
                "include_numbers": false,
                "include_symbols": false
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
        let body: PasswordGenerationResponse = test::read_body_json(resp).await;
        assert!(!body.success);
        assert!(body.error.unwrap().contains("character class"));
    }

    #[actix_web::test]
    async fn generate_rejects_out_of_range_length() {
        let app = test_app!();
        for length in [0, 3, 65, 500] {
            let req = test::TestRequest::post()
                .uri("/api/generator/password")
                .set_json(json!({ "length": length }))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(
                resp.status(),
                actix_web::http::StatusCode::BAD_REQUEST,
                "length {}",
                length
            );
        }
    }

    #[actix_web::test]
    async fn strength_endpoint_scores_known_password() {
        let app = test_app!();
        let req = test::TestRequest::post()
            .uri("/api/generator/strength")
            .set_json(json!({
                "password": "aaaaaaaaaa",
                "include_lowercase": true
            }))
            .to_request();
        let body: StrengthAnalysisResponse = test::call_and_read_body_json(&app, req).await;
        assert!(body.success);
        assert_eq!(body.strength, 25);
        assert_eq!(body.description, "Weak");
        assert_eq!(body.color, "#f44336");
    }

    #[actix_web::test]
    async fn strength_endpoint_accepts_empty_password() {
        let app = test_app!();
        let req = test::TestRequest::post()
            .uri("/api/generator/strength")
            .set_json(json!({ "password": "" }))
            .to_request();
        let body: StrengthAnalysisResponse = test::call_and_read_body_json(&app, req).await;
        assert!(body.success);
        assert_eq!(body.strength, 0);
        assert_eq!(body.description, "Weak");
    }
}
