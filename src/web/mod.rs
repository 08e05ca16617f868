//! Web 表单服务
//!
//! - GET  /                    表单
//! - POST /                    生成 Word，返回带下载链接的表单
//! - GET  /download/:filename  下载生成的文件
//! - GET  /health              健康检查

pub mod page;

use crate::config::Config;
use crate::error::BidAttachError;
use crate::export::{self, GeneratedFile};
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Form, Router,
};
use bid_attach_common::Staffing;
use page::{IndexView, ResultView};
use std::net::SocketAddr;
use std::sync::Arc;
use thiserror::Error;
use tower_http::trace::TraceLayer;

const DOCX_MIME: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

#[derive(Debug)]
pub struct AppState {
    pub config: Config,
}

#[derive(Debug, Error)]
pub enum WebError {
    #[error("{message}")]
    BadRequest { message: String, staffing: Staffing },

    #[error("文件不存在: {0}")]
    NotFound(String),

    #[error("内部错误: {0}")]
    Internal(String),
}

impl WebError {
    fn from_generation(err: BidAttachError, staffing: Staffing) -> Self {
        match err {
            BidAttachError::InvalidName(_) => WebError::BadRequest {
                message: err.to_string(),
                staffing,
            },
            other => WebError::Internal(other.to_string()),
        }
    }
}

/// 与表单无关的错误（下载等）
impl From<BidAttachError> for WebError {
    fn from(err: BidAttachError) -> Self {
        match err {
            BidAttachError::FileNotFound(name) => WebError::NotFound(name),
            BidAttachError::InvalidFileName(_) | BidAttachError::InvalidName(_) => {
                WebError::BadRequest {
                    message: err.to_string(),
                    staffing: Staffing::default(),
                }
            }
            other => WebError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status, view) = match self {
            WebError::BadRequest { message, staffing } => (
                StatusCode::BAD_REQUEST,
                IndexView {
                    staffing,
                    error: Some(message),
                    ..Default::default()
                },
            ),
            WebError::NotFound(name) => {
                let message = format!("文件不存在: {}", name);
                return (StatusCode::NOT_FOUND, message).into_response();
            }
            WebError::Internal(e) => {
                tracing::error!("Internal error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    IndexView {
                        error: Some("生成失败，请联系管理员".to_string()),
                        ..Default::default()
                    },
                )
            }
        };

        (status, Html(page::render_index(&view))).into_response()
    }
}

pub fn router(config: Config) -> Router {
    let state = Arc::new(AppState { config });

    Router::new()
        .route("/", get(index).post(generate))
        .route("/download/:filename", get(download))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// 启动服务（启动前创建输出目录）
pub async fn serve(config: Config) -> anyhow::Result<()> {
    config.ensure_output_dir()?;

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!(
        person_docs = %config.person_docs_dir.display(),
        output = %config.output_dir.display(),
        "Starting bid-attach on http://{}",
        addr
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router(config)).await?;

    Ok(())
}

async fn health() -> &'static str {
    "OK"
}

async fn index() -> Html<String> {
    Html(page::render_index(&IndexView::default()))
}

async fn generate(
    State(state): State<Arc<AppState>>,
    Form(staffing): Form<Staffing>,
) -> Result<Html<String>, WebError> {
    let normalized = staffing
        .normalized()
        .map_err(|e| WebError::from_generation(e.into(), staffing.clone()))?;

    let task_state = Arc::clone(&state);
    let task_staffing = normalized.clone();
    let generated: GeneratedFile = tokio::task::spawn_blocking(move || {
        export::generate(&task_state.config, &task_staffing)
    })
    .await
    .map_err(|e| WebError::Internal(e.to_string()))?
    .map_err(|e| WebError::from_generation(e, staffing.clone()))?;

    let view = IndexView {
        staffing: normalized,
        result: Some(ResultView {
            link: page::download_link(&generated.file_name),
            file_name: generated.file_name,
            page_count: generated.page_count,
            expired_count: generated.expired_count,
        }),
        error: None,
    };

    Ok(Html(page::render_index(&view)))
}

async fn download(
    State(state): State<Arc<AppState>>,
    Path(filename): Path<String>,
) -> Result<Response, WebError> {
    let bytes = read_output_file(&state.config, &filename).await?;

    let disposition = format!(
        "attachment; filename=\"attachment.docx\"; filename*=UTF-8''{}",
        urlencoding::encode(&filename)
    );

    Ok((
        [
            (header::CONTENT_TYPE, DOCX_MIME.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    )
        .into_response())
}

/// 输出目录直下的生成文件
async fn read_output_file(config: &Config, filename: &str) -> crate::error::Result<Vec<u8>> {
    if !export::is_safe_file_name(filename) {
        return Err(BidAttachError::InvalidFileName(filename.to_string()));
    }

    let path = config.output_dir.join(filename);
    tokio::fs::read(&path).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            BidAttachError::FileNotFound(filename.to_string())
        } else {
            e.into()
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_in(dir: &std::path::Path) -> Config {
        Config {
            output_dir: dir.to_path_buf(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_read_missing_output_is_file_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_output_file(&config_in(dir.path()), "标书人员附件_x.docx").await;

        assert!(matches!(result, Err(BidAttachError::FileNotFound(ref name)) if name == "标书人员附件_x.docx"));
        assert!(matches!(WebError::from(result.unwrap_err()), WebError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_read_unsafe_name_is_bad_request() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_output_file(&config_in(dir.path()), "../secret.docx").await;

        assert!(matches!(result, Err(BidAttachError::InvalidFileName(_))));
        assert!(matches!(WebError::from(result.unwrap_err()), WebError::BadRequest { .. }));
    }

    #[tokio::test]
    async fn test_read_existing_output() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.docx"), b"PK").unwrap();

        let bytes = read_output_file(&config_in(dir.path()), "a.docx").await.unwrap();
        assert_eq!(bytes, b"PK");
    }
}
