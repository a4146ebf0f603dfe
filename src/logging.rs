//! Logger initialisation and GPU diagnostic reporting.
//!
//! Diagnostics coming from the graphics backend are logged and never change
//! control flow. A handful of known-noisy backend messages are dropped before
//! they reach the log.

use std::sync::Once;

/// Backend log targets whose output is capped at `warn` unless `RUST_LOG`
/// says otherwise. Records from these targets also go through the noise list.
pub const NOISY_TARGETS: &[&str] = &["wgpu_core", "wgpu_hal", "naga", "imgui_wgpu"];

/// Driver message fragments that are never worth printing.
///
/// Buffer placement hints, shader recompilation notices and the like. They
/// arrive through the GL debug callback as `wgpu_hal` records.
const NOISY_MESSAGES: &[&str] = &[
    "will use VIDEO memory as the source for buffer object operations",
    "is being recompiled based on GL state",
    "Program/shader state performance warning",
    "Buffer performance warning",
];

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// `env_logger` filter syntax. Falls back to `RUST_LOG`, then `info`.
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

static INIT: Once = Once::new();

/// `env_logger` with backend noise removed.
struct NoiseFilter {
    inner: env_logger::Logger,
}

impl log::Log for NoiseFilter {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        self.inner.enabled(metadata)
    }

    fn log(&self, record: &log::Record<'_>) {
        if self.inner.matches(record) && !is_noisy_record(record) {
            self.inner.log(record);
        }
    }

    fn flush(&self) {
        self.inner.flush();
    }
}

/// Initializes the global logger. Subsequent calls are ignored.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();
        builder.filter_level(log::LevelFilter::Info);
        for target in NOISY_TARGETS {
            builder.filter_module(target, log::LevelFilter::Warn);
        }

        if let Some(filter) = config.env_filter {
            builder.parse_filters(&filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        }

        builder.write_style(config.write_style);
        let inner = builder.build();
        let max_level = inner.filter();
        if let Err(err) = log::set_boxed_logger(Box::new(NoiseFilter { inner })) {
            eprintln!("logger already installed: {err}");
            return;
        }
        log::set_max_level(max_level);

        log::debug!("logging initialized");
    });
}

fn is_backend_target(target: &str) -> bool {
    NOISY_TARGETS.iter().any(|noisy| {
        target
            .strip_prefix(noisy)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with("::"))
    })
}

/// True for backend records whose message is on the fixed ignore list.
pub fn is_noisy_record(record: &log::Record<'_>) -> bool {
    if !is_backend_target(record.target()) {
        return false;
    }
    match record.args().as_str() {
        Some(message) => is_noisy(message),
        None => is_noisy(&record.args().to_string()),
    }
}

/// True for diagnostic messages on the fixed ignore list.
pub fn is_noisy(message: &str) -> bool {
    NOISY_MESSAGES.iter().any(|noise| message.contains(noise))
}

/// Where a GPU diagnostic originated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticSource {
    Validation,
    OutOfMemory,
    Internal,
}

/// A classified GPU diagnostic.
#[derive(Debug, Clone, PartialEq)]
pub struct GpuDiagnostic {
    pub source: DiagnosticSource,
    pub level: log::Level,
    pub message: String,
}

impl GpuDiagnostic {
    pub fn from_error(error: &wgpu::Error) -> Self {
        let (source, level) = match error {
            wgpu::Error::Validation { .. } => (DiagnosticSource::Validation, log::Level::Error),
            wgpu::Error::OutOfMemory { .. } => (DiagnosticSource::OutOfMemory, log::Level::Error),
            #[allow(unreachable_patterns)]
            _ => (DiagnosticSource::Internal, log::Level::Warn),
        };
        Self {
            source,
            level,
            message: error.to_string(),
        }
    }

    pub fn report(&self) {
        log::log!(
            target: "glint::gpu",
            self.level,
            "gpu diagnostic ({:?}): {}",
            self.source,
            self.message
        );
    }
}

/// Replaces wgpu's default uncaptured-error handler, which panics, with one
/// that only logs.
pub fn install_gpu_diagnostics(device: &wgpu::Device) {
    device.on_uncaptured_error(Box::new(|error| {
        GpuDiagnostic::from_error(&error).report();
    }));
}
