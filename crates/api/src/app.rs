use axum::{
    middleware,
    routing::{get, patch, post},
    Router,
};
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::Config;
use crate::middleware::{
    metrics_handler, metrics_middleware, security_headers_middleware, trace_id,
};
use crate::routes::{
    classes, companies, courses, dashboard, departments, enrollments, frontend, health,
    internships, payments, students,
};

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<Config>,
}

fn cors_layer(config: &Config) -> CorsLayer {
    if config.security.cors_origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<_> = config
        .security
        .cors_origins
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/v1/departments",
            get(departments::list_departments).post(departments::create_department),
        )
        .route(
            "/api/v1/departments/:id",
            get(departments::get_department)
                .put(departments::update_department)
                .delete(departments::delete_department),
        )
        .route(
            "/api/v1/courses",
            get(courses::list_courses).post(courses::create_course),
        )
        .route(
            "/api/v1/courses/:id",
            get(courses::get_course)
                .put(courses::update_course)
                .delete(courses::delete_course),
        )
        .route(
            "/api/v1/classes",
            get(classes::list_classes).post(classes::create_class),
        )
        .route(
            "/api/v1/classes/:id",
            get(classes::get_class)
                .put(classes::update_class)
                .delete(classes::delete_class),
        )
        .route(
            "/api/v1/students",
            get(students::list_students).post(students::create_student),
        )
        .route(
            "/api/v1/students/:id",
            get(students::get_student)
                .put(students::update_student)
                .delete(students::delete_student),
        )
        .route(
            "/api/v1/enrollments",
            get(enrollments::list_enrollments).post(enrollments::create_enrollment),
        )
        .route(
            "/api/v1/enrollments/:id",
            get(enrollments::get_enrollment)
                .put(enrollments::update_enrollment)
                .delete(enrollments::delete_enrollment),
        )
        .route(
            "/api/v1/payments",
            get(payments::list_payments).post(payments::create_payment),
        )
        .route(
            "/api/v1/payments/:id",
            get(payments::get_payment)
                .put(payments::update_payment)
                .delete(payments::delete_payment),
        )
        .route(
            "/api/v1/companies",
            get(companies::list_companies).post(companies::create_company),
        )
        .route(
            "/api/v1/companies/:id",
            get(companies::get_company)
                .put(companies::update_company)
                .delete(companies::delete_company),
        )
        .route(
            "/api/v1/internships",
            get(internships::list_internships).post(internships::create_internship),
        )
        .route(
            "/api/v1/internships/:id",
            get(internships::get_internship)
                .put(internships::update_internship)
                .delete(internships::delete_internship),
        )
        .route(
            "/api/v1/internships/:id/hours",
            patch(internships::update_internship_hours),
        )
        .route(
            "/api/v1/internships/:id/finish",
            post(internships::finish_internship),
        )
        .route(
            "/api/v1/dashboard/students/status",
            get(dashboard::student_status),
        )
        .route(
            "/api/v1/dashboard/payments/last-month",
            get(dashboard::payments_last_month),
        )
        .route("/api/v1/dashboard/statistics", get(dashboard::statistics))
}

pub fn create_app(config: Config, pool: PgPool) -> Router {
    let config = Arc::new(config);
    let state = AppState {
        pool,
        config: config.clone(),
    };

    let public_routes = Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/health/ready", get(health::ready))
        .route("/api/health/live", get(health::live))
        .route("/metrics", get(metrics_handler));

    let frontend_routes = Router::new()
        .route("/", get(frontend::dashboard))
        .route("/panel", get(frontend::panel))
        .route("/dashboard.html", get(frontend::redirect_dashboard))
        .route("/index.html", get(frontend::redirect_panel))
        .fallback(frontend::fallback);

    Router::new()
        .merge(api_routes())
        .merge(public_routes)
        .merge(frontend_routes)
        // Bottom layers run first.
        .layer(middleware::from_fn_with_state(
            state.clone(),
            security_headers_middleware,
        ))
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(trace_id))
        .layer(cors_layer(&config))
        .with_state(state)
}
