use crate::RegisterService;
use crate::error::{Field, FieldErrors};
use crate::intake::read_submission;
use crate::models::submission::FormValues;
use crate::validation::validate;
use axum::Extension;
use axum::extract::Multipart;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use okd_core::status::ErrorCode;
use tracing::{Instrument, info_span, warn};

/// Where a successful registration lands
const SUCCESS_LOCATION: &str = "/";

pub async fn register_form(
    Extension(service): Extension<RegisterService>,
) -> Result<Response, StatusCode> {
    service.render_form(StatusCode::OK, &FormValues::default(), &FieldErrors::default())
}

/// Validate and store a registration
///
/// Success redirects to the landing page. Anything else re-renders the form
/// with the submitted values and the reasons it was refused.
pub async fn register(
    Extension(service): Extension<RegisterService>,
    mut multipart: Multipart,
) -> Result<Response, StatusCode> {
    let submission = read_submission(&mut multipart).await.map_err(|err| {
        warn!(%err, "malformed registration form");
        StatusCode::BAD_REQUEST
    })?;
    let values = submission.values.clone();

    let user = match validate(submission) {
        Ok(user) => user,
        Err(rejection) => {
            let codes = rejection
                .errors
                .iter()
                .map(|err| format!("{}:{}", err.field, err.code))
                .collect::<Vec<_>>();
            warn!(?codes, "registration rejected");

            return service.render_form(
                rejection.errors.status_code(),
                &rejection.values,
                &rejection.errors,
            );
        }
    };

    let result = service
        .store
        .insert(&user)
        .instrument(info_span!("storing user", photo_size = user.photo.bytes.len()))
        .await;

    match result {
        Ok(_) => Ok(Redirect::to(SUCCESS_LOCATION).into_response()),
        Err(err) => {
            warn!(%err, "registration failed");
            let errors =
                FieldErrors::single(Field::Form, err.code(), "Failed to add user to the database.");
            service.render_form(errors.status_code(), &values, &errors)
        }
    }
}

impl RegisterService {
    fn render_form(
        &self,
        status: StatusCode,
        values: &FormValues,
        errors: &FieldErrors,
    ) -> Result<Response, StatusCode> {
        let html = self.templates.register(values, errors).map_err(|err| {
            warn!(%err, code = %ErrorCode::Internal, "rendering registration form failed");
            ErrorCode::Internal.status_code()
        })?;

        Ok((status, Html(html)).into_response())
    }
}
