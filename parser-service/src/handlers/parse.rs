use crate::error::{ApiError, ApiResult};
use axum::extract::Multipart;
use axum::Json;
use common::ParseResponse;

/// Resume parse endpoint
///
/// Accepts a multipart form with a single `file` field. The upload is drained
/// and discarded: the document-understanding backend is not wired in yet, so
/// every response is the fixed placeholder.
pub async fn parse_resume_handler(mut multipart: Multipart) -> ApiResult<Json<ParseResponse>> {
    let mut file_seen = false;

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field.file_name().unwrap_or("unnamed").to_string();

        // Drain the upload; the contents are not inspected
        let data = field.bytes().await?;

        tracing::info!(
            file_name = %file_name,
            size = data.len(),
            "Resume upload received"
        );

        file_seen = true;
    }

    if !file_seen {
        return Err(ApiError::MissingFile);
    }

    // TODO: hand the upload to the document AI backend once its contract is settled
    Ok(Json(ParseResponse::placeholder()))
}
