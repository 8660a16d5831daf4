use std::path::{Path, PathBuf};

use lyricsync_configuration::AppConfig;
use lyricsync_http_server::create_app_routes;
use lyricsync_setup::Application;

pub struct TestFixture {
    pub workspace_root: PathBuf,
    _tmp: tempfile::TempDir,
}

// Boots the full application against a stub aligner script and serves it on
// an ephemeral port. The stub receives the real four-argument invocation:
// audio path, lyrics path, task configuration, output path.
pub async fn setup_test_server(
    stub_body: &str,
) -> Result<(TestFixture, String, reqwest::Client), Box<dyn std::error::Error>> {
    let tmp = tempfile::tempdir()?;
    let stub = write_stub(tmp.path(), stub_body)?;
    let workspace_root = tmp.path().join("sync");

    let mut config = AppConfig::default();
    config.aligner.command = stub.to_string_lossy().into_owned();
    config.aligner.args = Vec::new();
    config.aligner.workspace_root = workspace_root.to_string_lossy().into_owned();

    let app = Application::new(config).await?;
    let router = create_app_routes(app.state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let base_url = format!("http://{}", listener.local_addr()?);
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("test server");
    });

    let fixture = TestFixture {
        workspace_root,
        _tmp: tmp,
    };
    Ok((fixture, base_url, reqwest::Client::new()))
}

pub fn leftover_jobs(root: &Path) -> usize {
    std::fs::read_dir(root)
        .map(|entries| entries.count())
        .unwrap_or(0)
}

fn write_stub(dir: &Path, body: &str) -> std::io::Result<PathBuf> {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("stub-aligner.sh");
    std::fs::write(&path, format!("#!/bin/sh\n{body}\n"))?;
    let mut perms = std::fs::metadata(&path)?.permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&path, perms)?;
    Ok(path)
}
