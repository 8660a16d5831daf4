#[derive(Debug, Clone)]
pub struct AlignmentJob {
    pub audio: Vec<u8>,
    pub audio_extension: String,
    pub transcript: String,
    pub language: String,
}

#[derive(Debug, Clone)]
pub struct SyncedLyrics {
    pub content: String,
}
