use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};

use crate::handlers::{auth, availability, bookings, reviews, services, vendors};
use crate::middleware::auth::auth_middleware;
use crate::middleware::rate_limit::create_public_governor;
use crate::AppState;

pub fn create_router(state: AppState) -> Router {
    // IP-based governor for the public token endpoints
    let public_governor = create_public_governor();

    // Token issuance and refresh (public)
    let token_routes = Router::new()
        .route("/token", post(auth::obtain_token))
        .route("/token/refresh", post(auth::refresh_token))
        .layer(public_governor);

    // Resource endpoints (require a valid bearer access token)
    let api_routes = Router::new()
        // Vendors
        .route("/vendors", get(vendors::list_vendors))
        .route("/vendors", post(vendors::create_vendor))
        .route("/vendors/{id}", get(vendors::get_vendor))
        .route("/vendors/{id}", put(vendors::update_vendor))
        .route("/vendors/{id}", delete(vendors::delete_vendor))
        // Services
        .route("/services", get(services::list_services))
        .route("/services", post(services::create_service))
        .route("/services/{id}", get(services::get_service))
        .route("/services/{id}", put(services::update_service))
        .route("/services/{id}", delete(services::delete_service))
        // Availability
        .route("/availability", get(availability::list_availability))
        .route("/availability", post(availability::create_availability))
        .route("/availability/{id}", get(availability::get_availability))
        .route("/availability/{id}", put(availability::update_availability))
        .route("/availability/{id}", delete(availability::delete_availability))
        // Bookings
        .route("/bookings", get(bookings::list_bookings))
        .route("/bookings", post(bookings::create_booking))
        .route("/bookings/{id}", get(bookings::get_booking))
        .route("/bookings/{id}", put(bookings::update_booking))
        .route("/bookings/{id}", delete(bookings::delete_booking))
        // Reviews
        .route("/reviews", get(reviews::list_reviews))
        .route("/reviews", post(reviews::create_review))
        .route("/reviews/{id}", get(reviews::get_review))
        .route("/reviews/{id}", put(reviews::update_review))
        .route("/reviews/{id}", delete(reviews::delete_review))
        .layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    Router::new()
        .nest("/api", token_routes)
        .nest("/api", api_routes)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use sea_orm::{DatabaseBackend, MockDatabase};
    use tower::ServiceExt;

    use crate::Config;

    fn test_state() -> AppState {
        AppState {
            db: MockDatabase::new(DatabaseBackend::Postgres).into_connection(),
            config: Config {
                database_url: String::new(),
                jwt_secret: "test-secret".to_string(),
                access_token_minutes: 60,
                refresh_token_hours: 24,
                server_host: String::new(),
                server_port: 0,
            },
        }
    }

    #[tokio::test]
    async fn request_without_token_is_unauthorized() {
        let app = create_router(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/vendors")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn request_with_garbage_token_is_unauthorized() {
        let app = create_router(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/bookings")
                    .header("Authorization", "Bearer not-a-token")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
