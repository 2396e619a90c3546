//! Registration service for Oru Kozhikkodan Date
//!
//! Serves the landing page and the registration form, validates submitted
//! profiles and keeps them in a single SQLite table.

#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

mod endpoints;
pub mod error;
pub mod intake;
pub mod models;
pub mod store;
pub mod templates;
pub mod validation;

use crate::store::UserStore;
use crate::templates::Templates;
use crate::validation::MAX_PHOTO_SIZE;
use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::{Extension, Router};
use std::sync::Arc;

/// Room for the text fields on top of a maximum-size photo
pub const BODY_LIMIT: usize = MAX_PHOTO_SIZE + 1024 * 1024;

#[derive(Clone)]
pub struct RegisterService {
    pub store: Arc<dyn UserStore>,
    pub templates: Arc<Templates>,
}

impl RegisterService {
    #[must_use]
    pub fn new(store: Arc<dyn UserStore>, templates: Templates) -> Self {
        Self {
            store,
            templates: Arc::new(templates),
        }
    }
}

/// All routes of the service
pub fn router(service: RegisterService) -> Router {
    Router::new()
        .route("/", get(endpoints::landing))
        .route(
            "/register",
            get(endpoints::register_form).post(endpoints::register),
        )
        .route("/users/{id}/photo", get(endpoints::user_photo))
        .layer(DefaultBodyLimit::max(BODY_LIMIT))
        .layer(Extension(service))
}
