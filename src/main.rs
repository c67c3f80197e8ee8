//! Cat Facts skill host.
//!
//! Reads one request envelope per line (newline-delimited JSON) from stdin
//! and writes one response envelope per line to stdout. Logs go to stderr.

use std::io::{self, IsTerminal};
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use cat_facts_skill::adapters::alexa::{EnvelopeError, RequestEnvelope, ResponseEnvelope};
use cat_facts_skill::adapters::storage::{
    FileStateStorage, InMemorySessionStorage, InMemoryStateStorage,
};
use cat_facts_skill::application::{DispatchTable, SkillHandler};
use cat_facts_skill::config::{AppConfig, LogFormat, LoggingConfig, PersistenceBackend};
use cat_facts_skill::domain::skill::{SkillRequest, Speech};
use cat_facts_skill::ports::PersistentStateStore;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;

    init_tracing(&config.logging)?;

    let speech = Speech::new(config.skill.name.clone());
    let persistent = persistent_store(&config)?;
    let handler = SkillHandler::new(
        DispatchTable::standard(),
        speech.clone(),
        persistent,
        Arc::new(InMemorySessionStorage::new()),
    );

    info!(skill = %config.skill.name, "Cat Facts skill ready, reading envelopes from stdin");
    serve(&handler, &speech).await?;
    info!("stdin closed, shutting down");
    Ok(())
}

fn init_tracing(logging: &LoggingConfig) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&logging.level)?,
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal());

    match logging.format {
        LogFormat::Json => builder.json().flatten_event(true).init(),
        LogFormat::Pretty => builder.init(),
    }
    Ok(())
}

fn persistent_store(config: &AppConfig) -> Result<Arc<dyn PersistentStateStore>> {
    match config.persistence.backend {
        PersistenceBackend::Memory => {
            info!("Using in-memory persistence; state is lost on exit");
            Ok(Arc::new(InMemoryStateStorage::new()))
        }
        PersistenceBackend::File => {
            let table_dir = config
                .persistence
                .table_dir()
                .context("persistence.table is required for the file backend")?;
            info!(table_dir = %table_dir.display(), "Using file persistence");
            Ok(Arc::new(FileStateStorage::new(table_dir)))
        }
    }
}

async fn serve(handler: &SkillHandler, speech: &Speech) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let envelope = match parse_request(&line) {
            Ok(request) => ResponseEnvelope::from(&handler.handle(&request).await),
            Err(e) => {
                error!("Rejected request envelope: {}", e);
                ResponseEnvelope::new(&speech.clarify(), None)
            }
        };

        let mut json = envelope.to_json()?;
        json.push('\n');
        stdout.write_all(json.as_bytes()).await?;
        stdout.flush().await?;
    }
    Ok(())
}

fn parse_request(line: &str) -> Result<SkillRequest, EnvelopeError> {
    SkillRequest::try_from(RequestEnvelope::from_json(line)?)
}
