//! The clerk UI, embedded at build time.
//!
//! `index.html` gets two rewrites on the way out: asset links carry the
//! server's boot time so a restart invalidates cached scripts, and the sheet
//! limits are published as `window.__SHELFRIG` for the script to read.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
};
use include_dir::{Dir, include_dir};
use std::sync::Arc;

use crate::layout::COLUMNS;
use crate::overrides::MAX_OVERRIDE_CHARS;
use crate::queue::CAPACITY;

use super::state::AppState;

static FRONTEND: Dir = include_dir!("$CARGO_MANIFEST_DIR/frontend");

/// Handle GET /
pub async fn index(State(state): State<Arc<AppState>>) -> Response {
    match FRONTEND.get_file("index.html") {
        Some(file) => {
            let page = String::from_utf8_lossy(file.contents());
            Html(prepare_index(&page, state.boot_time)).into_response()
        }
        None => (StatusCode::NOT_FOUND, "UI not bundled").into_response(),
    }
}

/// Handle GET /assets/*path
pub async fn asset(Path(path): Path<String>) -> Response {
    let name = path.split('?').next().unwrap_or(&path);
    let Some(file) = FRONTEND.get_file(format!("assets/{}", name)) else {
        return (StatusCode::NOT_FOUND, "no such asset").into_response();
    };
    let mime = mime_guess::from_path(name).first_or_octet_stream();
    (
        [
            (header::CONTENT_TYPE, mime.to_string()),
            (header::CACHE_CONTROL, "public, max-age=31536000".to_string()),
        ],
        file.contents(),
    )
        .into_response()
}

fn prepare_index(page: &str, version: u64) -> String {
    let limits = format!(
        "<script>window.__SHELFRIG={{\"capacity\":{},\"columns\":{},\"maxOverride\":{}}}</script></head>",
        CAPACITY, COLUMNS, MAX_OVERRIDE_CHARS
    );
    page.replace(".js\"", &format!(".js?v={}\"", version))
        .replace(".css\"", &format!(".css?v={}\"", version))
        .replacen("</head>", &limits, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepare_index() {
        let page = r#"<head><link href="/assets/style.css"></head><script src="/assets/app.js"></script>"#;
        let out = prepare_index(page, 42);
        assert!(out.contains(r#"/assets/style.css?v=42""#));
        assert!(out.contains(r#"/assets/app.js?v=42""#));
        assert!(out.contains(r#""capacity":32"#));
        assert!(out.contains(r#""maxOverride":30"#));
        assert_eq!(out.matches("</head>").count(), 1);
    }

    #[test]
    fn test_bundle_has_ui() {
        assert!(FRONTEND.get_file("index.html").is_some());
        assert!(FRONTEND.get_file("assets/app.js").is_some());
    }
}
