//! The native call layer the facade is built on.
//!
//! Every primitive returns the failing call's [`NativeErrorCode`] as its
//! error, read before any other native call can overwrite it.

use winposix_types::NativeErrorCode;

use crate::path::WidePath;
use crate::stat::NativeAttributes;
use crate::time::FileTime;

cfg_if::cfg_if! {
    if #[cfg(windows)] {
        mod windows;
        pub use self::windows::WindowsHost;
    }
}

pub type NativeResult<T> = Result<T, NativeErrorCode>;

/// `GetFileType` results.
pub const FILE_TYPE_DISK: u32 = 0x0001;
pub const FILE_TYPE_CHAR: u32 = 0x0002;

/// An open native handle, stored as its integer value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NativeHandle(pub isize);

/// Win32 file, directory and handle primitives.
pub trait NativeHost: Send + Sync {
    fn create_directory(&self, path: &WidePath) -> NativeResult<()>;

    /// Applies the POSIX `mode` as far as the host can: the read-only
    /// attribute is set iff the owner-write bit is clear.
    fn set_permissions(&self, path: &WidePath, mode: u32) -> NativeResult<()>;

    /// Creates `new` as a hard link to `existing`.
    fn create_hard_link(&self, new: &WidePath, existing: &WidePath) -> NativeResult<()>;

    /// Opens an existing file or directory for writing, sharing read and
    /// write access.
    fn open_for_write(&self, path: &WidePath) -> NativeResult<NativeHandle>;

    fn set_file_time(
        &self,
        handle: NativeHandle,
        access: FileTime,
        write: FileTime,
    ) -> NativeResult<()>;

    fn close_handle(&self, handle: NativeHandle);

    /// The native handle behind a C runtime descriptor, if there is one.
    fn handle_for_descriptor(&self, fd: i32) -> Option<NativeHandle>;

    fn file_type(&self, handle: NativeHandle) -> u32;

    fn query_attributes(&self, path: &WidePath) -> NativeResult<NativeAttributes>;
}

/// Closes its handle when dropped.
pub struct HandleGuard<'a, H: NativeHost + ?Sized> {
    host: &'a H,
    handle: NativeHandle,
}

impl<'a, H: NativeHost + ?Sized> HandleGuard<'a, H> {
    pub fn new(host: &'a H, handle: NativeHandle) -> Self {
        Self { host, handle }
    }

    pub fn handle(&self) -> NativeHandle {
        self.handle
    }
}

impl<H: NativeHost + ?Sized> Drop for HandleGuard<'_, H> {
    fn drop(&mut self) {
        self.host.close_handle(self.handle);
    }
}
