use std::path::Path;

use async_trait::async_trait;
use tokio::process::Command;

use lyricsync_domain::{AlignmentJob, DomainError, ForcedAlignmentPort, SyncedLyrics};

pub mod workspace;

pub use workspace::{JobWorkspace, WorkspaceRoot};

#[derive(Debug, Clone)]
pub struct AeneasAdapterConfig {
    pub command: String,
    pub args: Vec<String>,
    pub workspace_root: String,
}

/// Adapter over the aeneas command-line tool. Each alignment stages its
/// inputs in a fresh job workspace, runs one child process to completion and
/// reads the LRC file the tool leaves behind.
pub struct AeneasForcedAligner {
    command: String,
    args: Vec<String>,
    workspace: WorkspaceRoot,
}

impl AeneasForcedAligner {
    pub fn new(adapter_cfg: &AeneasAdapterConfig) -> Result<Self, DomainError> {
        let workspace = WorkspaceRoot::init(&adapter_cfg.workspace_root)?;
        Ok(Self {
            command: adapter_cfg.command.clone(),
            args: adapter_cfg.args.clone(),
            workspace,
        })
    }

    pub fn workspace_root(&self) -> &Path {
        self.workspace.path()
    }

    // Third positional argument of the tool. The language goes through
    // verbatim; interpreting it is the tool's job.
    fn task_configuration(language: &str) -> String {
        format!("task_language={language}|is_text_type=plain|os_task_file_format=lrc")
    }

    async fn stage_inputs(
        job: &AlignmentJob,
        audio_path: &Path,
        lyrics_path: &Path,
    ) -> Result<(), DomainError> {
        tokio::fs::write(audio_path, &job.audio)
            .await
            .map_err(|err| {
                DomainError::staging(format!("writing {}: {err}", audio_path.display()))
            })?;
        tokio::fs::write(lyrics_path, job.transcript.as_bytes())
            .await
            .map_err(|err| {
                DomainError::staging(format!("writing {}: {err}", lyrics_path.display()))
            })?;
        Ok(())
    }
}

#[async_trait]
impl ForcedAlignmentPort for AeneasForcedAligner {
    async fn align(&self, job: AlignmentJob) -> Result<SyncedLyrics, DomainError> {
        let workspace = self.workspace.create_job()?;
        let audio_path = workspace.audio_path(&job.audio_extension);
        let lyrics_path = workspace.lyrics_path();
        let output_path = workspace.output_path();

        Self::stage_inputs(&job, &audio_path, &lyrics_path).await?;

        tracing::debug!(
            workspace = %workspace.path().display(),
            language = %job.language,
            "invoking aeneas"
        );

        // TODO: nothing kills a hung aeneas process when the client
        // disconnects; the invocation runs to the tool's own exit.
        let output = Command::new(&self.command)
            .args(&self.args)
            .arg(&audio_path)
            .arg(&lyrics_path)
            .arg(Self::task_configuration(&job.language))
            .arg(&output_path)
            .output()
            .await
            .map_err(|err| {
                DomainError::infrastructure(format!("failed to spawn {}: {err}", self.command))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            tracing::error!(
                exit_code = output.status.code().unwrap_or(-1),
                "aeneas exited with failure"
            );
            return Err(DomainError::tool_failure(stderr));
        }

        match tokio::fs::read_to_string(&output_path).await {
            Ok(content) => Ok(SyncedLyrics { content }),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                Err(DomainError::OutputMissing)
            }
            Err(err) => Err(DomainError::infrastructure(format!(
                "reading {}: {err}",
                output_path.display()
            ))),
        }
        // `workspace` drops here, removing the job directory on every path.
    }
}
