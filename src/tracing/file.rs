use std::fmt;
use std::path::Path;
use std::sync::Arc;

use tracing::Event;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_appender::rolling::Rotation;
use tracing_subscriber::Layer;
use tracing_subscriber::fmt::FmtContext;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::FormatFields;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::LookupSpan;

use super::filter::LevelRangeFilter;
use crate::config::LoggingConfig;
use crate::error::Context;
use crate::error::Result;

/// `LEVEL timestamp::engine::file::line::message`, shared by every layer.
#[derive(Clone)]
struct LineFormat {
    engine: Arc<str>,
}

impl LineFormat {
    fn header(
        &self,
        level: &Level,
        timestamp: impl fmt::Display,
        file: &str,
        line: u32,
    ) -> String {
        format!("{} {}::{}::{}::{}::", level, timestamp, self.engine, file, line)
    }
}

impl<S, N> FormatEvent<S, N> for LineFormat
where
    S: tracing::Subscriber + for<'lookup> LookupSpan<'lookup>,
    N: for<'writer> FormatFields<'writer> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let metadata = event.metadata();
        // log shims from dependencies carry no source location
        let Some(file) = metadata.file().or(cfg!(feature = "deep-trace").then_some("unknown")) else {
            return Ok(());
        };

        let timestamp = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S");
        writer.write_str(&self.header(metadata.level(), timestamp, file, metadata.line().unwrap_or(0)))?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Keeps the non-blocking file writers alive; drop it on shutdown to flush.
#[must_use = "dropping the guards stops file logging"]
pub struct LogGuards {
    _guards: Vec<WorkerGuard>,
}

fn file_layer<S>(
    dir: &Path,
    engine_name: &str,
    format: &LineFormat,
    filter: LevelRangeFilter,
    guards: &mut Vec<WorkerGuard>,
) -> Result<Box<dyn Layer<S> + Send + Sync>>
where
    S: tracing::Subscriber + for<'lookup> tracing_subscriber::registry::LookupSpan<'lookup>,
{
    std::fs::create_dir_all(dir).with_context(|| format!("Failed to create logs directory: {}", dir.display()))?;

    let appender = RollingFileAppender::new(Rotation::DAILY, dir, format!("{}.log", engine_name));
    let (writer, guard) = tracing_appender::non_blocking(appender);
    guards.push(guard);

    Ok(tracing_subscriber::fmt::Layer::default()
        .with_ansi(false)
        .event_format(format.clone())
        .with_writer(writer)
        .with_filter(filter)
        .boxed())
}

#[cfg(feature = "dev")]
fn terminal_filter() -> LevelRangeFilter {
    LevelRangeFilter::between(Level::INFO, Level::ERROR)
}

#[cfg(not(feature = "dev"))]
fn terminal_filter() -> LevelRangeFilter {
    LevelRangeFilter::only(Level::ERROR)
}

/// Terminal output (info and above with `dev`, errors otherwise), plus daily
/// rolling `debug/` and `error/` files under the configured directory.
pub fn setup_tracing(
    engine_name: &str,
    logging: &LoggingConfig,
) -> Result<LogGuards> {
    let format = LineFormat { engine: Arc::from(engine_name) };
    let mut guards = Vec::new();
    let mut layers = Vec::new();

    layers.push(
        tracing_subscriber::fmt::Layer::default()
            .with_ansi(true)
            .with_writer(std::io::stderr)
            .event_format(format.clone())
            .with_filter(terminal_filter())
            .boxed(),
    );

    if let Some(directory) = logging.directory.as_deref() {
        let base = Path::new(directory);
        #[cfg(feature = "dev")]
        layers.push(file_layer(
            base,
            engine_name,
            &format,
            LevelRangeFilter::between(Level::INFO, Level::ERROR),
            &mut guards,
        )?);
        layers.push(file_layer(
            &base.join("debug"),
            engine_name,
            &format,
            LevelRangeFilter::only(Level::DEBUG),
            &mut guards,
        )?);
        layers.push(file_layer(
            &base.join("error"),
            engine_name,
            &format,
            LevelRangeFilter::between(Level::WARN, Level::ERROR),
            &mut guards,
        )?);
    }

    tracing_subscriber::registry()
        .with(layers)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    tracing::info!("{}_logging_started::directory::{:?}", engine_name, logging.directory);

    Ok(LogGuards { _guards: guards })
}
