use crate::RegisterService;
use axum::Extension;
use axum::http::StatusCode;
use axum::response::Html;
use okd_core::status::ErrorCode;
use tracing::warn;

pub async fn landing(
    Extension(service): Extension<RegisterService>,
) -> Result<Html<String>, StatusCode> {
    service.templates.landing().map(Html).map_err(|err| {
        warn!(%err, code = %ErrorCode::Internal, "rendering landing page failed");
        ErrorCode::Internal.status_code()
    })
}
