use axum::{
    routing::{get, post},
    Router,
};
use quiz_backend::{
    config::{get_config, init_config},
    database::pool::create_pool,
    middleware::rate_limit::{rps_middleware, RateLimiter},
    routes, AppState,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    init_config()?;
    let config = get_config();

    let pool = create_pool().await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    let app_state = AppState::new(pool);

    let base_routes = Router::new().route("/health", get(routes::health::health));

    let authoring_api = Router::new()
        .route(
            "/api/v1/quizzes",
            get(routes::quizzes::list_quizzes).post(routes::quizzes::create_quiz),
        )
        .route(
            "/api/v1/quizzes/:id",
            get(routes::quizzes::get_quiz)
                .patch(routes::quizzes::update_quiz)
                .put(routes::quizzes::update_quiz)
                .delete(routes::quizzes::delete_quiz),
        )
        .route(
            "/api/v1/quizzes/:quiz_id/questions",
            post(routes::questions::create_question),
        )
        .route(
            "/api/v1/quizzes/:quiz_id/questions/:id",
            axum::routing::patch(routes::questions::update_question)
                .put(routes::questions::update_question)
                .delete(routes::questions::delete_question),
        )
        .layer(axum::middleware::from_fn_with_state(
            RateLimiter::new("authoring", config.admin_rps),
            rps_middleware,
        ));

    let submission_api = Router::new()
        .route(
            "/api/v1/attempts",
            get(routes::attempts::list_attempts).post(routes::attempts::create_attempt),
        )
        .route("/api/v1/attempts/:id", get(routes::attempts::get_attempt))
        .layer(axum::middleware::from_fn_with_state(
            RateLimiter::new("submission", config.public_rps),
            rps_middleware,
        ));

    let app = base_routes
        .merge(authoring_api)
        .merge(submission_api)
        .with_state(app_state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
