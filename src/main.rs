//! # Glint
//!
//! Opens the viewer with default settings. Assets are read from `./assets`
//! unless `GLINT_ASSET_DIR` points elsewhere; logging follows `RUST_LOG`.

use std::process::ExitCode;

use glint::{
    app::Viewer,
    config::ViewerConfig,
    logging::{init_logging, LoggingConfig},
};

fn main() -> ExitCode {
    init_logging(LoggingConfig::default());

    let config = ViewerConfig::from_env();
    log::info!("asset root: {}", config.asset_root.display());

    ExitCode::from(exit_status(Viewer::new(config).run()))
}

/// Logs a startup failure with its full cause chain. The error is reported
/// here only, not again by the runtime.
fn exit_status(result: anyhow::Result<()>) -> u8 {
    match result {
        Ok(()) => 0,
        Err(err) => {
            log::error!("{err:#}");
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failures_map_to_a_failing_exit_code() {
        assert_eq!(exit_status(Ok(())), 0);
        assert_eq!(
            exit_status(Err(anyhow::anyhow!("no compatible graphics adapter"))),
            1
        );
    }
}
