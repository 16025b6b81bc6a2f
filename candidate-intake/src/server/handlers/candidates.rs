use axum::{
    Json,
    extract::{Multipart, Path, State},
    http::StatusCode,
};
use serde::Serialize;

use crate::candidates::{Candidate, CreateCandidate};
use crate::server::{
    error::{ApiError, Result},
    state::AppState,
};

const ALLOWED_CONTENT_TYPES: &[&str] = &[
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    "application/vnd.ms-excel",
];
const ALLOWED_EXTENSIONS: &[&str] = &[".xlsx", ".xls"];
const MIN_NAME_CHARS: usize = 2;

/// Uploaded workbook as received from the form
#[derive(Debug)]
pub struct UploadedFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub data: Vec<u8>,
}

/// Raw multipart form for `POST /candidates`
#[derive(Debug, Default)]
pub struct CreateCandidateForm {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub excel_file: Option<UploadedFile>,
}

impl CreateCandidateForm {
    async fn from_multipart(mut multipart: Multipart) -> Result<Self> {
        let mut form = CreateCandidateForm::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| ApiError::bad_request(format!("Invalid form data: {}", e)))?
        {
            let field_name = field.name().unwrap_or("").to_string();
            match field_name.as_str() {
                "name" | "surname" => {
                    let value = field
                        .text()
                        .await
                        .map_err(|e| ApiError::bad_request(format!("Invalid form data: {}", e)))?;
                    if field_name == "name" {
                        form.name = Some(value);
                    } else {
                        form.surname = Some(value);
                    }
                }
                "excelFile" => {
                    let file_name = field.file_name().unwrap_or("").to_string();
                    let content_type = field.content_type().map(|c| c.to_string());
                    let data = field
                        .bytes()
                        .await
                        .map_err(|e| ApiError::bad_request(format!("Invalid file: {}", e)))?;
                    form.excel_file = Some(UploadedFile {
                        file_name,
                        content_type,
                        data: data.to_vec(),
                    });
                }
                other => {
                    return Err(ApiError::bad_request(format!(
                        "property {} should not exist",
                        other
                    )));
                }
            }
        }

        Ok(form)
    }

    /// Check the form and turn it into a service request
    ///
    /// Name problems are reported together; file problems separately.
    pub fn validate(self, max_upload_bytes: usize) -> Result<CreateCandidate> {
        let mut problems = Vec::new();
        let name = check_text_field(self.name.as_deref(), "name", &mut problems);
        let surname = check_text_field(self.surname.as_deref(), "surname", &mut problems);
        if !problems.is_empty() {
            return Err(ApiError::bad_request(problems.join("; ")));
        }

        let file = self
            .excel_file
            .ok_or_else(|| ApiError::bad_request("Invalid file: excelFile is required"))?;
        check_file(&file, max_upload_bytes)?;

        Ok(CreateCandidate {
            name,
            surname,
            document: file.data,
        })
    }
}

fn check_text_field(value: Option<&str>, field: &str, problems: &mut Vec<String>) -> String {
    let value = value.map(str::trim).unwrap_or("");
    if value.is_empty() {
        problems.push(format!("{} should not be empty", field));
    } else if value.chars().count() < MIN_NAME_CHARS {
        problems.push(format!(
            "{} must be at least {} characters long",
            field, MIN_NAME_CHARS
        ));
    }
    value.to_string()
}

fn check_file(file: &UploadedFile, max_upload_bytes: usize) -> Result<()> {
    if file.data.is_empty() {
        return Err(ApiError::bad_request("Invalid file: file is empty"));
    }

    if file.data.len() > max_upload_bytes {
        return Err(ApiError::bad_request(format!(
            "Invalid file: file exceeds the maximum size of {} bytes",
            max_upload_bytes
        )));
    }

    let type_ok = file
        .content_type
        .as_deref()
        .is_some_and(|ct| ALLOWED_CONTENT_TYPES.contains(&ct));
    let lower_name = file.file_name.to_lowercase();
    let extension_ok = ALLOWED_EXTENSIONS.iter().any(|ext| lower_name.ends_with(ext));

    if !type_ok && !extension_ok {
        return Err(ApiError::bad_request(
            "Invalid file: only Excel files (.xlsx, .xls) are accepted",
        ));
    }
    Ok(())
}

#[derive(Serialize)]
pub struct DeleteResponse {
    pub message: String,
}

pub async fn create(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<Candidate>)> {
    let form = CreateCandidateForm::from_multipart(multipart).await?;
    let request = form.validate(state.max_upload_bytes)?;
    let candidate = state.candidates.create(request).await?;
    Ok((StatusCode::CREATED, Json(candidate)))
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Candidate>>> {
    Ok(Json(state.candidates.list().await?))
}

pub async fn get(State(state): State<AppState>, Path(id): Path<i64>) -> Result<Json<Candidate>> {
    Ok(Json(state.candidates.get(id).await?))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteResponse>> {
    state.candidates.delete(id).await?;
    Ok(Json(DeleteResponse {
        message: format!("Candidate with ID {} deleted successfully", id),
    }))
}
