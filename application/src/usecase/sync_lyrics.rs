use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use lyricsync_domain::{AlignmentJob, ForcedAlignmentPort};

use crate::{ApplicationError, SyncLyricsRequest, SyncLyricsResponse};

#[async_trait]
pub trait SyncLyricsUseCase: Send + Sync {
    async fn sync_lyrics(
        &self,
        request: SyncLyricsRequest,
    ) -> Result<SyncLyricsResponse, ApplicationError>;
}

pub struct SyncLyricsUseCaseImpl {
    aligner: Arc<dyn ForcedAlignmentPort>,
    default_language: String,
}

impl SyncLyricsUseCaseImpl {
    pub fn new(aligner: Arc<dyn ForcedAlignmentPort>, default_language: impl Into<String>) -> Self {
        Self {
            aligner,
            default_language: default_language.into(),
        }
    }
}

#[async_trait]
impl SyncLyricsUseCase for SyncLyricsUseCaseImpl {
    async fn sync_lyrics(
        &self,
        request: SyncLyricsRequest,
    ) -> Result<SyncLyricsResponse, ApplicationError> {
        let job_id = Uuid::new_v4().to_string();
        let language = request
            .language
            .unwrap_or_else(|| self.default_language.clone());

        tracing::debug!(
            job_id = %job_id,
            audio_bytes = request.audio.len(),
            text_chars = request.text.chars().count(),
            language = %language,
            "starting lyrics synchronization"
        );

        let lyrics = self
            .aligner
            .align(AlignmentJob {
                audio: request.audio,
                audio_extension: request.audio_extension,
                transcript: request.text,
                language,
            })
            .await?
            .content;

        tracing::debug!(
            job_id = %job_id,
            lyrics_bytes = lyrics.len(),
            "lyrics synchronization completed"
        );

        Ok(SyncLyricsResponse { job_id, lyrics })
    }
}
