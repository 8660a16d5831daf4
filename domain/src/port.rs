use async_trait::async_trait;

use crate::{AlignmentJob, DomainError, SyncedLyrics};

#[async_trait]
pub trait ForcedAlignmentPort: Send + Sync {
    async fn align(&self, job: AlignmentJob) -> Result<SyncedLyrics, DomainError>;
}
