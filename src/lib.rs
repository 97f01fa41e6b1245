//! # hello-world-api
//!
//! A minimal [axum](https://crates.io/crates/axum) service with request-scoped
//! [Sea-ORM](https://crates.io/crates/sea-orm) database sessions.
//!
//! ## Routes
//!
//! | Route     | Method | Response                               |
//! |-----------|--------|----------------------------------------|
//! | `/`       | GET    | `200 {"message": "Hello World"}`       |
//! | `/health` | GET    | `200 {"status": "healthy"}`            |
//!
//! Unknown paths answer `404`, other methods on known paths `405`.
//!
//! ## Features
//!
//! - Configuration read once from the environment (and an optional `.env` file)
//! - Swappable [`SessionFactory`] instead of a global dependency registry
//! - Scoped session acquisition that closes the connection on every exit path
//! - `DbSession` axum extractor for handlers that need the database
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use hello_world_api::{routes, AppState, Config, SeaOrmSessionFactory, SessionFactory};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Resolve DATABASE_URL and BIND_ADDR
//! let config = Arc::new(Config::from_env()?);
//!
//! // One single-connection session per acquisition
//! let sessions: Arc<dyn SessionFactory> = Arc::new(SeaOrmSessionFactory::from_config(&config));
//!
//! let app = routes::router(AppState::new(config.clone(), sessions));
//! let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Using a session in a handler
//!
//! ```no_run
//! use axum::http::StatusCode;
//! use hello_world_api::DbSession;
//! use sea_orm::ConnectionTrait;
//!
//! async fn ping_database(session: DbSession) -> StatusCode {
//!     match session.execute_unprepared("SELECT 1").await {
//!         Ok(_) => StatusCode::NO_CONTENT,
//!         Err(_) => StatusCode::SERVICE_UNAVAILABLE,
//!     }
//!     // `session` is released here
//! }
//! ```

pub mod config;
pub mod error;
pub mod routes;
pub mod session;

pub use config::Config;
pub use error::{Error, Result};
pub use routes::AppState;

/// Session acquisition types.
///
/// See [`with_session`] for the scoped acquisition pattern.
pub use session::{with_session, DbSession, SeaOrmSessionFactory, SessionFactory, SessionStats};
