pub mod sync_lyrics;

pub use sync_lyrics::{SyncLyricsUseCase, SyncLyricsUseCaseImpl};
