//! Error vocabulary shared by the winposix facade.
//!
//! [`Errno`] is what POSIX-style callers see, [`NativeErrorCode`] is what
//! Windows reports, and [`translate`] maps one to the other.

pub mod errno;
pub mod last_error;
pub mod translate;

pub use errno::Errno;
pub use last_error::NativeErrorCode;
pub use translate::{ErrorTranslationTable, translate};
