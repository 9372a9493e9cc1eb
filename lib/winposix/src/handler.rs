use winposix_types::Errno;

use crate::config::PosixConfig;

/// Receives the failures the facade cannot express through return values
/// alone.
pub trait PosixHandler: Send + Sync {
    /// A native call failed. `context` names the path or paths involved.
    fn error(&self, errno: Errno, context: &str);

    /// `operation` has no native equivalent on this host.
    fn unimplemented_error(&self, operation: &str);

    fn is_verbose(&self) -> bool {
        false
    }
}

/// Reports through `tracing`.
#[derive(Clone, Debug, Default)]
pub struct TracingHandler {
    config: PosixConfig,
}

impl TracingHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &PosixConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }
}

impl PosixHandler for TracingHandler {
    fn error(&self, errno: Errno, context: &str) {
        tracing::warn!(errno = errno.name(), code = errno.code(), "{context}: {errno}");
    }

    fn unimplemented_error(&self, operation: &str) {
        if self.config.warn_unimplemented {
            tracing::warn!(operation, "not implemented on this host");
        } else {
            tracing::debug!(operation, "not implemented on this host");
        }
    }

    fn is_verbose(&self) -> bool {
        self.config.verbose
    }
}
