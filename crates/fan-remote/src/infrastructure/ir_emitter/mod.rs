//! IR emitter backends.
//!
//! The LIRC backend is selected at compile time via `#[cfg(target_os = "linux")]`;
//! the mock backend is always compiled.

pub mod mock;

#[cfg(target_os = "linux")]
pub mod lirc;

use std::sync::Arc;

use tracing::info;

use crate::application::send_command::{EmitterError, IrEmitter};
use crate::infrastructure::storage::config::{EmitterBackend, EmitterConfig};

/// Builds the emitter selected by `config`.
///
/// # Errors
///
/// Returns [`EmitterError::Platform`] if the backend is not available on this
/// platform.
pub fn from_config(config: &EmitterConfig) -> Result<Arc<dyn IrEmitter>, EmitterError> {
    match config.backend {
        EmitterBackend::DryRun => {
            info!("using dry-run IR emitter; nothing will be transmitted");
            Ok(Arc::new(mock::MockIrEmitter::new()))
        }
        EmitterBackend::Lirc => lirc_emitter(config),
    }
}

#[cfg(target_os = "linux")]
fn lirc_emitter(config: &EmitterConfig) -> Result<Arc<dyn IrEmitter>, EmitterError> {
    info!("using LIRC IR emitter at {}", config.device.display());
    Ok(Arc::new(lirc::LircEmitter::new(config.device.clone())))
}

#[cfg(not(target_os = "linux"))]
fn lirc_emitter(_config: &EmitterConfig) -> Result<Arc<dyn IrEmitter>, EmitterError> {
    Err(EmitterError::Platform(
        "the LIRC backend is only available on Linux".to_string(),
    ))
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dry_run_backend_reports_capability() {
        let config = EmitterConfig {
            backend: EmitterBackend::DryRun,
            ..EmitterConfig::default()
        };

        let emitter = from_config(&config).unwrap();

        assert!(emitter.has_ir_emitter());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_lirc_backend_with_missing_device_has_no_capability() {
        let config = EmitterConfig {
            backend: EmitterBackend::Lirc,
            device: "/nonexistent/lirc9".into(),
        };

        let emitter = from_config(&config).unwrap();

        assert!(!emitter.has_ir_emitter());
    }

    #[cfg(not(target_os = "linux"))]
    #[test]
    fn test_lirc_backend_is_rejected_off_linux() {
        let config = EmitterConfig {
            backend: EmitterBackend::Lirc,
            ..EmitterConfig::default()
        };
        assert!(matches!(from_config(&config), Err(EmitterError::Platform(_))));
    }
}
