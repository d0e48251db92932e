//! Upload-and-parse handlers. Each multipart file part is decoded and
//! parsed independently: a bad document lands in `errors` and never aborts
//! the rest of the batch.

use axum::{
    extract::{Multipart, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::{debug, warn};

use crate::errors::AppError;
use crate::extract::extract_text;
use crate::models::resume::ResumeRecord;
use crate::parser::parse_resume;
use crate::routes::export::{flatten_record, to_csv};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ParsedResume {
    pub file_name: String,
    pub record: ResumeRecord,
}

#[derive(Debug, Serialize)]
pub struct ParseFailure {
    pub file_name: String,
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct ParseBatchResponse {
    pub results: Vec<ParsedResume>,
    pub errors: Vec<ParseFailure>,
}

/// POST /api/v1/resumes/parse
pub async fn handle_parse(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ParseBatchResponse>, AppError> {
    let batch = parse_upload(&state, multipart).await?;
    Ok(Json(batch))
}

/// POST /api/v1/resumes/parse/csv
/// Same upload contract, but the response is one flat CSV row per
/// successfully parsed document.
pub async fn handle_parse_csv(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Response, AppError> {
    let batch = parse_upload(&state, multipart).await?;
    let rows: Vec<_> = batch
        .results
        .iter()
        .map(|r| flatten_record(&r.file_name, &r.record))
        .collect();
    let csv = to_csv(&rows)?;
    Ok(([(header::CONTENT_TYPE, "text/csv")], csv).into_response())
}

async fn parse_upload(
    state: &AppState,
    mut multipart: Multipart,
) -> Result<ParseBatchResponse, AppError> {
    let mut results = Vec::new();
    let mut errors = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Upload(e.to_string()))?
    {
        let Some(file_name) = field.file_name().map(ToString::to_string) else {
            continue; // non-file form fields are ignored
        };
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Upload(format!("failed to read '{file_name}': {e}")))?;

        match extract_text(&file_name, &data) {
            Ok(text) => {
                let record = parse_resume(&text, state.ner.as_ref(), &state.vocabulary);
                debug!(
                    %file_name,
                    skills = record.skills.len(),
                    education = record.education.len(),
                    experience = record.experience.len(),
                    "parsed resume"
                );
                results.push(ParsedResume { file_name, record });
            }
            Err(e) => {
                warn!(%file_name, error = %e, "skipping document");
                errors.push(ParseFailure {
                    file_name,
                    error: e.to_string(),
                });
            }
        }
    }

    if results.is_empty() && errors.is_empty() {
        return Err(AppError::Validation(
            "upload contained no file parts".to_string(),
        ));
    }

    Ok(ParseBatchResponse { results, errors })
}
