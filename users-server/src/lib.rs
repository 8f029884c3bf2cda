//! Example user API that answers every request with a JSend envelope.
//!
//! # Routes
//! - `GET /users` lists users.
//! - `GET /users/{id}` returns one user or a 404 `error` envelope.
//! - `POST /users` takes a form with `id` and `email` and returns the new
//!   user, or a 400 `fail` envelope keyed by field name.
//! - `DELETE /users/{id}` returns `"data":null` or a 404 `error` envelope.

use axum::{
    extract::{rejection::FormRejection, Path, State},
    routing::get,
    Form, Router,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod reply;
pub mod store;

pub use config::Config;
pub use error::{ApiError, FieldErrors};
pub use reply::Success;
pub use store::{CreateUser, User, UserStore};

/// Router over the seeded store.
pub fn app() -> Router {
    app_with(UserStore::seeded())
}

pub fn app_with(store: UserStore) -> Router {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/{id}", get(get_user).delete(delete_user))
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}

pub async fn run(listener: TcpListener, store: UserStore) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(store)).await
}

async fn list_users(State(store): State<UserStore>) -> Success<Vec<User>> {
    Success(store.list().await)
}

async fn get_user(
    State(store): State<UserStore>,
    Path(id): Path<String>,
) -> Result<Success<User>, ApiError> {
    store.find(&id).await.map(Success).ok_or(ApiError::NotFound)
}

async fn create_user(
    State(store): State<UserStore>,
    form: Result<Form<CreateUser>, FormRejection>,
) -> Result<Success<User>, ApiError> {
    let Form(input) = form.map_err(|rejection| ApiError::Internal(rejection.body_text()))?;
    store.create(input).await.map(Success)
}

async fn delete_user(
    State(store): State<UserStore>,
    Path(id): Path<String>,
) -> Result<Success<()>, ApiError> {
    store.delete(&id).await?;
    Ok(Success(()))
}
