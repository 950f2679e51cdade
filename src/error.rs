//! Error types for platform identity resolution.
//!
//! Almost nothing here can fail: unrecognized OS or CPU strings classify to
//! their `Unknown` terminal values, and a library that cannot be found on
//! disk degrades to a mapped-name fallback. The one genuine failure is an
//! address width that cannot be determined, because every later computation
//! assumes a 32- or 64-bit process.

use thiserror::Error;

/// Platform identity errors.
#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("cannot determine native address size (cpu '{0}' is not recognized and no 32/64 hint was supplied)")]
    UnknownAddressSize(String),
}

/// Result type for platform identity operations.
pub type PlatformResult<T> = Result<T, PlatformError>;
