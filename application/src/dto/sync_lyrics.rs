use serde::Serialize;

#[derive(Debug, Clone)]
pub struct SyncLyricsRequest {
    pub audio: Vec<u8>,
    pub audio_extension: String,
    pub text: String,
    pub language: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SyncLyricsResponse {
    pub job_id: String,
    pub lyrics: String,
}
