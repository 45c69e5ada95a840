//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /api/plans` - Subscription plan table
/// - `POST /api/payments` - Submit a manual payment with proof
/// - `GET /api/payments/me` - Caller's payment history
/// - `GET /api/payments/pending` - Pending payments awaiting review (admin)
/// - `POST /api/payments/{id}/decide` - Approve or reject a payment (admin)
/// - `GET /api/entitlement/me` - Caller's credit balance
/// - `POST /api/admin/entitlements/{user_id}` - Adjust a user's entitlement (admin)
/// - `GET /api/profiles` - List profiles, full or redacted per viewer
/// - `GET /api/profiles/{id}` - One profile, full or redacted per viewer
/// - `POST /api/profiles/{id}/unlock` - Spend a credit to unlock a profile
///
/// The OpenAPI specification is served at `/api/docs/openapi.json` and Swagger UI at
/// `/api/docs`.
///
/// # Example
/// ```ignore
/// let app_state = AppState { db, media, admin, photo_url_ttl };
/// let router = routes().with_state(app_state);
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Rishta", description = "Rishta subscription and profile API"), tags(
        (name = controller::entitlement::ENTITLEMENT_TAG, description = "Credit balance and admin adjustments"),
        (name = controller::payment::PAYMENT_TAG, description = "Plans and manual payment review"),
        (name = controller::profile::PROFILE_TAG, description = "Gated profile reads and unlocks"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::payment::get_plans))
        .routes(routes!(controller::payment::submit_payment))
        .routes(routes!(controller::payment::get_my_payments))
        .routes(routes!(controller::payment::get_pending_payments))
        .routes(routes!(controller::payment::decide_payment))
        .routes(routes!(controller::entitlement::get_my_entitlement))
        .routes(routes!(controller::entitlement::adjust_entitlement))
        .routes(routes!(controller::profile::get_profiles))
        .routes(routes!(controller::profile::get_profile))
        .routes(routes!(controller::profile::unlock_profile))
        .split_for_parts();

    let routes = routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api));

    routes
}
