use anyhow::{Context, Result};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    routing::get,
};
use tower_http::cors::CorsLayer;

use super::handlers::{candidates, probes};
use super::state::AppState;
use crate::config::Config;

/// Room for the text fields and multipart framing around the file
const FORM_OVERHEAD_BYTES: usize = 64 * 1024;

pub fn build_routes(state: AppState, config: &Config) -> Result<Router> {
    let app = Router::new()
        .route("/", get(probes::home))
        .route("/health", get(probes::health))
        .route(
            "/candidates",
            get(candidates::list).post(candidates::create),
        )
        .route(
            "/candidates/{id}",
            get(candidates::get).delete(candidates::delete),
        )
        .layer(DefaultBodyLimit::max(
            config.max_upload_bytes + FORM_OVERHEAD_BYTES,
        ))
        .layer(cors_layer(&config.cors_origins)?)
        .with_state(state);

    Ok(app)
}

fn cors_layer(origins: &[String]) -> Result<CorsLayer> {
    let origins = origins
        .iter()
        .map(|o| {
            HeaderValue::from_str(o).with_context(|| format!("Invalid CORS origin: {}", o))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::HEAD,
            Method::PUT,
            Method::PATCH,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_credentials(true))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::connect_in_memory;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use rust_xlsxwriter::Workbook;
    use serde_json::Value;
    use tower::ServiceExt;

    const BOUNDARY: &str = "candidate-test-boundary";
    const XLSX_TYPE: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

    async fn app() -> Router {
        let config = Config::default();
        let pool = connect_in_memory().await.unwrap();
        build_routes(AppState::new(&config, pool), &config).unwrap()
    }

    fn workbook(rows: &[(&str, f64, bool)]) -> Vec<u8> {
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.write_string(0, 0, "Seniority").unwrap();
        sheet.write_string(0, 1, "Years of experience").unwrap();
        sheet.write_string(0, 2, "Availability").unwrap();
        for (i, (seniority, years, available)) in rows.iter().enumerate() {
            let row = i as u32 + 1;
            sheet.write_string(row, 0, *seniority).unwrap();
            sheet.write_number(row, 1, *years).unwrap();
            sheet.write_boolean(row, 2, *available).unwrap();
        }
        workbook.save_to_buffer().unwrap()
    }

    fn multipart_body(fields: &[(&str, &str)], file: Option<(&str, &[u8])>) -> Vec<u8> {
        let mut body = Vec::new();
        for (name, value) in fields {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
                )
                .as_bytes(),
            );
        }
        if let Some((file_name, bytes)) = file {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"excelFile\"; filename=\"{file_name}\"\r\nContent-Type: {XLSX_TYPE}\r\n\r\n"
                )
                .as_bytes(),
            );
            body.extend_from_slice(bytes);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        body
    }

    fn post_candidate(body: Vec<u8>) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/candidates")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn test_list_is_empty_initially() {
        let app = app().await;
        let (status, body) = send(&app, get("/candidates")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, Value::Array(vec![]));
    }

    #[tokio::test]
    async fn test_create_then_get_and_delete() {
        let app = app().await;
        let excel = workbook(&[("junior", 3.0, true), ("senior", 10.0, false)]);

        let (status, created) = send(
            &app,
            post_candidate(multipart_body(
                &[("name", "Juan"), ("surname", "Perez")],
                Some(("test.xlsx", excel.as_slice())),
            )),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["name"], "Juan");
        assert_eq!(created["surname"], "Perez");
        assert_eq!(created["seniority"], "junior");
        assert_eq!(created["yearsOfExperience"], 3);
        assert_eq!(created["availability"], true);
        assert!(created["createdAt"].is_string());

        let id = created["id"].as_i64().unwrap();
        let (status, fetched) = send(&app, get(&format!("/candidates/{id}"))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched["id"], id);

        let delete = Request::builder()
            .method("DELETE")
            .uri(format!("/candidates/{id}"))
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(&app, delete).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["message"],
            format!("Candidate with ID {id} deleted successfully")
        );

        let (status, body) = send(&app, get(&format!("/candidates/{id}"))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["statusCode"], 404);
    }

    #[tokio::test]
    async fn test_delete_unknown_is_not_found() {
        let app = app().await;
        let delete = Request::builder()
            .method("DELETE")
            .uri("/candidates/999")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(&app, delete).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Candidate with ID 999 not found");
    }

    #[tokio::test]
    async fn test_create_rejects_bad_requests() {
        let app = app().await;
        let excel = workbook(&[("junior", 3.0, true)]);

        let (status, body) = send(
            &app,
            post_candidate(multipart_body(&[("surname", "Perez")], Some(("test.xlsx", excel.as_slice())))),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["message"].as_str().unwrap().contains("name should not be empty"));

        let (status, body) = send(
            &app,
            post_candidate(multipart_body(&[("name", "Juan"), ("surname", "Perez")], None)),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["message"].as_str().unwrap().contains("Invalid file"));

        let (status, body) = send(
            &app,
            post_candidate(multipart_body(
                &[("name", "Juan"), ("surname", "Perez")],
                Some(("test.xlsx", &b"not really excel"[..])),
            )),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["message"].as_str().unwrap().starts_with("document unreadable"));

        let (_, list) = send(&app, get("/candidates")).await;
        assert_eq!(list, Value::Array(vec![]));
    }

    #[tokio::test]
    async fn test_create_rejects_empty_workbook() {
        let app = app().await;
        let excel = workbook(&[]);

        let (status, body) = send(
            &app,
            post_candidate(multipart_body(
                &[("name", "Juan"), ("surname", "Perez")],
                Some(("test.xlsx", excel.as_slice())),
            )),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["message"].as_str().unwrap().contains("empty"));
    }

    #[tokio::test]
    async fn test_health() {
        let app = app().await;
        let (status, body) = send(&app, get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "OK");
        assert_eq!(body["service"], "Candidate Management API");
    }
}
