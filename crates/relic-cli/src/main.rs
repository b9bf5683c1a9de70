//! Demo: drive the save/clean pipeline end to end against the in-memory
//! store, deploying past the retention cap so the clean pass has work to do.

use std::error::Error;
use std::sync::Arc;

use chrono::Utc;
use relic_core::app::{Deployer, JobContext};
use relic_core::domain::{DeployJob, RepositoryConfig};
use relic_core::impls::{InMemoryArtifactStore, TracingSink};
use relic_core::ports::ArtifactStore;
use tracing_subscriber::EnvFilter;

const PROJECT: &str = "demo-org/demo-app";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // (A) a throwaway job workspace: the build output plus its descriptor
    let workspace = tempfile::tempdir()?;
    std::fs::write(workspace.path().join("build.zip"), b"PK\x03\x04 demo bytes")?;
    std::fs::write(
        workspace.path().join("package.json"),
        r#"{"name": "demo-app", "version": "1.2.3"}"#,
    )?;

    // (B) wiring: in-memory store, tracing sinks, explicit deployer
    let sink = Arc::new(TracingSink);
    let ctx = JobContext::new(
        workspace.path(),
        "relic",
        sink.clone(),
        sink.clone(),
        sink,
    );
    let store = Arc::new(InMemoryArtifactStore::new());
    let deployer = Deployer::new(store.clone());
    let config = RepositoryConfig::new("build.zip").with_max_builds(3);

    // (C) deploy five builds against a cap of three
    for build in 1..=5 {
        let job = DeployJob::new(PROJECT, format!("job-{build}"), Utc::now());
        let completion = deployer.deploy(&ctx, &config, &job).await?;
        match completion.error {
            None => tracing::info!(build, "deploy completed"),
            Some(err) => tracing::error!(build, %err, "deploy failed"),
        }
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    }

    // (D) what the history endpoint would serve
    let history = store.find_recent(PROJECT).await?;
    println!(
        "retained {} artifacts (cap {}):",
        history.len(),
        config.max_builds
    );
    for meta in &history {
        println!("  {} v{} from {} at {}", meta.id, meta.version, meta.job, meta.date);
    }

    if let Some(latest) = store.find_latest(PROJECT).await? {
        let full = store
            .fetch(PROJECT, latest.id)
            .await?
            .ok_or("latest artifact vanished from the store")?;
        println!(
            "latest: {} ({} bytes) -> {}",
            full.payload.name,
            full.payload.data.len(),
            serde_json::to_string(&latest)?
        );
    }

    Ok(())
}
