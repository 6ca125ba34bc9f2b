use std::fmt::{self as stdfmt, Write as _};
use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::format::DefaultFields;
use tracing_subscriber::fmt::time::{FormatTime, SystemTime};
use tracing_subscriber::fmt::{self, FmtContext, FormatEvent};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};
use wl_config::{LogFormat, LoggingConfig};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Keeps file-layer span fields apart from the stderr layer's cache.
#[derive(Default)]
struct FileFields(DefaultFields);

impl<'writer> fmt::FormatFields<'writer> for FileFields {
    fn format_fields<R: tracing_subscriber::field::RecordFields>(
        &self,
        writer: fmt::format::Writer<'writer>,
        fields: R,
    ) -> stdfmt::Result {
        self.0.format_fields(writer, fields)
    }
}

/// Plain formatter that lifts the `domain` field into a `[domain]` prefix:
///
/// ```text
/// 2026-03-02T10:04:11Z  INFO [scen] scenario generated blocks=3 events=57
/// ```
struct DomainFormat {
    timer: SystemTime,
}

impl<S, N> FormatEvent<S, N> for DomainFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'writer> fmt::FormatFields<'writer> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: fmt::format::Writer<'_>,
        event: &Event<'_>,
    ) -> stdfmt::Result {
        let ansi = writer.has_ansi_escapes();

        if self.timer.format_time(&mut writer).is_err() {
            write!(writer, "<unknown time>")?;
        }

        let level = *event.metadata().level();
        if ansi {
            let color = match level {
                Level::ERROR => "31",
                Level::WARN => "33",
                Level::INFO => "32",
                Level::DEBUG => "34",
                Level::TRACE => "35",
            };
            write!(writer, " \x1b[{color}m{level:>5}\x1b[0m ")?;
        } else {
            write!(writer, " {level:>5} ")?;
        }

        let mut fields = DomainFields::default();
        event.record(&mut fields);
        if let Some(domain) = &fields.domain {
            if ansi {
                write!(writer, "\x1b[1;36m[{domain}]\x1b[0m ")?;
            } else {
                write!(writer, "[{domain}] ")?;
            }
        }

        write!(writer, "{}", fields.message)?;
        if !fields.rest.is_empty() {
            write!(writer, " {}", fields.rest)?;
        }
        writeln!(writer)
    }
}

/// Splits `domain` and `message` out of an event's fields.
#[derive(Default)]
struct DomainFields {
    domain: Option<String>,
    message: String,
    rest: String,
}

impl DomainFields {
    fn push(&mut self, name: &str, value: impl stdfmt::Display) {
        if !self.rest.is_empty() {
            self.rest.push(' ');
        }
        write!(&mut self.rest, "{name}={value}").ok();
    }
}

impl Visit for DomainFields {
    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "domain" => self.domain = Some(value.to_string()),
            "message" => self.message = value.to_string(),
            name => self.push(name, format_args!("{value:?}")),
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn stdfmt::Debug) {
        match field.name() {
            "domain" => self.domain = Some(format!("{value:?}").trim_matches('"').to_string()),
            "message" => {
                write!(&mut self.message, "{value:?}").ok();
            }
            name => self.push(name, format_args!("{value:?}")),
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.push(field.name(), value);
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.push(field.name(), value);
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        self.push(field.name(), value);
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.push(field.name(), value);
    }
}

/// `RUST_LOG` if set, otherwise `level` plus the per-module overrides.
fn build_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    if std::env::var("RUST_LOG").is_ok() {
        return Ok(EnvFilter::from_default_env());
    }
    let directives = filter_directives(config);
    EnvFilter::try_new(&directives)
        .map_err(|e| anyhow::anyhow!("invalid log filter '{directives}': {e}"))
}

fn filter_directives(config: &LoggingConfig) -> String {
    let mut modules: Vec<_> = config.modules.iter().collect();
    modules.sort();
    let mut directives = config.level.clone();
    for (module, level) in modules {
        directives.push_str(&format!(",{module}={level}"));
    }
    directives
}

fn resolve_log_path(file: &Path, base_dir: &Path) -> PathBuf {
    if file.is_relative() {
        base_dir.join(file)
    } else {
        file.to_path_buf()
    }
}

fn stderr_layer(format: LogFormat, filter: EnvFilter) -> BoxedLayer {
    match format {
        LogFormat::Json => fmt::layer()
            .json()
            .with_target(false)
            .with_writer(std::io::stderr)
            .with_filter(filter)
            .boxed(),
        LogFormat::Plain => fmt::layer()
            .event_format(DomainFormat { timer: SystemTime })
            .with_writer(std::io::stderr)
            .with_filter(filter)
            .boxed(),
    }
}

fn file_layer(format: LogFormat, path: &Path) -> Result<(BoxedLayer, WorkerGuard)> {
    let dir = path
        .parent()
        .ok_or_else(|| anyhow::anyhow!("log file path has no parent directory"))?;
    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow::anyhow!("log file path has no file name"))?
        .to_os_string();
    std::fs::create_dir_all(dir)?;

    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));
    let layer = match format {
        LogFormat::Json => fmt::layer()
            .json()
            .fmt_fields(FileFields::default())
            .with_target(false)
            .with_ansi(false)
            .with_writer(writer)
            .boxed(),
        LogFormat::Plain => fmt::layer()
            .event_format(DomainFormat { timer: SystemTime })
            .fmt_fields(FileFields::default())
            .with_ansi(false)
            .with_writer(writer)
            .boxed(),
    };
    Ok((layer, guard))
}

/// Install the global subscriber described by `config`.
///
/// Logs go to stderr so `wlgen show` output stays clean on stdout. A relative
/// `file` is resolved against `base_dir` (the scenario file's directory). The
/// returned guard flushes the file writer when dropped and must be held until
/// the command exits.
pub fn init_tracing(config: &LoggingConfig, base_dir: &Path) -> Result<Option<WorkerGuard>> {
    let filter = build_filter(config)?;
    let mut layers = vec![stderr_layer(config.format, filter)];

    let mut guard = None;
    if let Some(file) = &config.file {
        let (layer, file_guard) = file_layer(config.format, &resolve_log_path(file, base_dir))?;
        layers.push(layer);
        guard = Some(file_guard);
    }

    tracing_subscriber::registry().with(layers).try_init()?;
    Ok(guard)
}
