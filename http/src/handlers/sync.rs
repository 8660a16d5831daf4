use std::path::Path;

use axum::extract::multipart::MultipartError;
use axum::extract::{Multipart, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

use lyricsync_application::SyncLyricsRequest;

use crate::error::{error_mapper, HttpError};
use crate::AppState;

const DEFAULT_AUDIO_EXTENSION: &str = "mp3";

pub async fn sync_lyrics(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response, HttpError> {
    let mut audio: Option<(Vec<u8>, String)> = None;
    let mut text: Option<String> = None;
    let mut language: Option<String> = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("audio") => {
                let extension = audio_extension(field.file_name());
                let bytes = field.bytes().await.map_err(multipart_error)?;
                audio = Some((bytes.to_vec(), extension));
            }
            Some("text") => {
                text = Some(field.text().await.map_err(multipart_error)?);
            }
            Some("lang") => {
                language = Some(field.text().await.map_err(multipart_error)?);
            }
            _ => {}
        }
    }

    let (audio, audio_extension) = audio.ok_or_else(|| missing_field("audio"))?;
    let text = text.ok_or_else(|| missing_field("text"))?;

    tracing::info!(
        audio_bytes = audio.len(),
        text_chars = text.chars().count(),
        language = language.as_deref().unwrap_or("default"),
        "received sync request"
    );

    let command_result = state
        .usecase
        .sync_lyrics(SyncLyricsRequest {
            audio,
            audio_extension,
            text,
            language,
        })
        .await;

    match command_result {
        Ok(result) => {
            tracing::info!(
                job_id = %result.job_id,
                lyrics_bytes = result.lyrics.len(),
                "sync request completed"
            );
            Ok((
                StatusCode::OK,
                [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                result.lyrics,
            )
                .into_response())
        }
        Err(error) => {
            tracing::error!(error = %error, "sync request failed");
            Err(error_mapper(error))
        }
    }
}

// The extension lands in a filesystem path inside the job workspace;
// anything but plain alphanumerics falls back to the default.
fn audio_extension(file_name: Option<&str>) -> String {
    file_name
        .and_then(|name| Path::new(name).extension())
        .and_then(|extension| extension.to_str())
        .filter(|extension| {
            !extension.is_empty() && extension.chars().all(|c| c.is_ascii_alphanumeric())
        })
        .map(str::to_ascii_lowercase)
        .unwrap_or_else(|| DEFAULT_AUDIO_EXTENSION.to_string())
}

fn missing_field(name: &str) -> HttpError {
    HttpError::Validation {
        message: format!("missing required field `{name}`"),
    }
}

fn multipart_error(error: MultipartError) -> HttpError {
    HttpError::Validation {
        message: format!("malformed multipart body: {error}"),
    }
}
