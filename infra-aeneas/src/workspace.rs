use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use lyricsync_domain::DomainError;

/// Parent directory for per-job workspaces, created once at startup.
#[derive(Debug, Clone)]
pub struct WorkspaceRoot {
    root: PathBuf,
}

impl WorkspaceRoot {
    pub fn init(root: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let root = root.into();
        std::fs::create_dir_all(&root).map_err(|err| {
            DomainError::infrastructure(format!(
                "failed to create workspace root {}: {err}",
                root.display()
            ))
        })?;
        Ok(Self { root })
    }

    pub fn create_job(&self) -> Result<JobWorkspace, DomainError> {
        let dir = self.root.join(Uuid::new_v4().to_string());
        std::fs::create_dir(&dir).map_err(|err| {
            DomainError::infrastructure(format!(
                "failed to create job workspace {}: {err}",
                dir.display()
            ))
        })?;
        Ok(JobWorkspace { dir })
    }

    pub fn path(&self) -> &Path {
        &self.root
    }
}

/// Per-job staging directory. Removed in `Drop`, so every exit path out of
/// an alignment run releases it exactly once; a failed removal must never
/// override the primary result.
#[derive(Debug)]
pub struct JobWorkspace {
    dir: PathBuf,
}

impl JobWorkspace {
    pub fn audio_path(&self, extension: &str) -> PathBuf {
        self.dir.join(format!("audio.{extension}"))
    }

    pub fn lyrics_path(&self) -> PathBuf {
        self.dir.join("lyrics.txt")
    }

    pub fn output_path(&self) -> PathBuf {
        self.dir.join("output.lrc")
    }

    pub fn path(&self) -> &Path {
        &self.dir
    }
}

impl Drop for JobWorkspace {
    fn drop(&mut self) {
        if let Err(err) = std::fs::remove_dir_all(&self.dir) {
            if err.kind() != ErrorKind::NotFound {
                tracing::warn!(
                    dir = %self.dir.display(),
                    error = %err,
                    "failed to remove job workspace"
                );
            }
        }
    }
}
