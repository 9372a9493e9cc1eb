//! A POSIX system-call facade for Windows.
//!
//! Callers written against POSIX get POSIX answers: errors arrive as
//! [`Errno`] values through a [`PosixHandler`], calls that Windows cannot
//! express are reported as unimplemented instead of faked, and the few that
//! have a safe fixed answer (uid 0, a no-op `chown`) return it.
//!
//! ```no_run
//! # #[cfg(windows)] {
//! use winposix::{Posix, PosixConfig, WindowsPosix};
//!
//! let posix = WindowsPosix::from_config(&PosixConfig::default());
//! assert_eq!(posix.mkdir(r"C:\data\new", 0o755), 0);
//! # }
//! ```

pub mod config;
pub mod handler;
pub mod host;
pub mod identity;
pub mod ops;
pub mod path;
pub mod posix;
pub mod stat;
pub mod time;
mod windows_posix;

pub use winposix_types::{Errno, NativeErrorCode, translate};

pub use config::{ConfigError, PosixConfig};
pub use handler::{PosixHandler, TracingHandler};
pub use host::{NativeHandle, NativeHost};
pub use identity::{EnvIdentity, Group, IdentityLookup, Passwd};
pub use ops::{Operation, Strategy, Stub};
pub use path::{WidePath, to_native_path};
pub use posix::Posix;
pub use stat::{FileStatus, NativeAttributes};
pub use time::{FileTime, from_native_time, to_native_time};
pub use windows_posix::WindowsPosix;

#[cfg(windows)]
pub use host::WindowsHost;
