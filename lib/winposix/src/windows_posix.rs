use std::sync::Arc;

use winposix_types::{Errno, NativeErrorCode, translate};

use crate::handler::PosixHandler;
use crate::host::{FILE_TYPE_CHAR, HandleGuard, NativeHost, NativeResult};
use crate::identity::{EnvIdentity, Group, IdentityLookup, Passwd};
use crate::ops::{Operation, Strategy, Stub};
use crate::path::to_native_path;
use crate::posix::Posix;
use crate::stat::FileStatus;
use crate::time::{to_native_time, unix_now};

/// [`Posix`] on top of a Windows [`NativeHost`].
pub struct WindowsPosix<H> {
    host: H,
    handler: Arc<dyn PosixHandler>,
    identity: Arc<dyn IdentityLookup>,
}

impl<H: NativeHost> WindowsPosix<H> {
    pub fn new(host: H, handler: Arc<dyn PosixHandler>) -> Self {
        Self {
            host,
            handler,
            identity: Arc::new(EnvIdentity),
        }
    }

    pub fn with_identity(mut self, identity: Arc<dyn IdentityLookup>) -> Self {
        self.identity = identity;
        self
    }

    /// Answers an operation that never reaches the host.
    fn stand_in(&self, op: Operation) -> i32 {
        let strategy = op.strategy();
        debug_assert!(
            matches!(
                strategy,
                Strategy::Stub(Stub::Fixed(_) | Stub::Vacuous | Stub::Unsupported)
            ),
            "{op} is not answered by a stand-in"
        );
        match strategy {
            Strategy::Stub(Stub::Fixed(value)) => value,
            Strategy::Stub(Stub::Vacuous) => 0,
            Strategy::Stub(Stub::Unsupported) => {
                self.handler.unimplemented_error(op.name());
                -1
            }
            Strategy::Stub(Stub::Empty) | Strategy::Native | Strategy::Delegated => -1,
        }
    }

    /// Answers an entry lookup that never reaches the host.
    fn no_entry<T>(&self, op: Operation) -> Option<T> {
        if op.is_unsupported() {
            self.handler.unimplemented_error(op.name());
        }
        None
    }

    /// Translates a native failure and hands it to the handler, once.
    fn report(&self, code: NativeErrorCode, context: &str) -> Errno {
        let errno = translate(code);
        tracing::trace!(native = code.raw(), errno = errno.name(), "{context}");
        self.handler.error(errno, context);
        errno
    }

    /// Maps a native result to the C convention.
    fn complete(&self, op: Operation, context: &str, result: NativeResult<()>) -> i32 {
        match result {
            Ok(()) => {
                if self.handler.is_verbose() {
                    tracing::debug!(operation = op.name(), "{context}");
                }
                0
            }
            Err(code) => {
                self.report(code, context);
                -1
            }
        }
    }
}

#[cfg(windows)]
impl WindowsPosix<crate::host::WindowsHost> {
    /// The facade over the real Win32 layer, reporting through `tracing`.
    pub fn from_config(config: &crate::config::PosixConfig) -> Self {
        Self::new(
            crate::host::WindowsHost,
            Arc::new(crate::handler::TracingHandler::from_config(config)),
        )
    }
}

impl<H: NativeHost> Posix for WindowsPosix<H> {
    fn allocate_stat(&self) -> FileStatus {
        FileStatus::allocate()
    }

    #[tracing::instrument(level = "trace", skip(self), ret)]
    fn stat(&self, path: &str) -> Option<FileStatus> {
        let wide = to_native_path(path);
        match self.host.query_attributes(&wide) {
            Ok(native) => {
                let mut status = self.allocate_stat();
                status.populate(path, native);
                Some(status)
            }
            Err(code) => {
                self.report(code, path);
                None
            }
        }
    }

    /// Windows has no separate link metadata call here; identical to `stat`.
    fn lstat(&self, path: &str) -> Option<FileStatus> {
        self.stat(path)
    }

    #[tracing::instrument(level = "trace", skip(self), ret)]
    fn chmod(&self, path: &str, mode: u32) -> i32 {
        let wide = to_native_path(path);
        let result = self.host.set_permissions(&wide, mode);
        self.complete(Operation::Chmod, path, result)
    }

    fn lchmod(&self, _path: &str, _mode: u32) -> i32 {
        self.stand_in(Operation::Lchmod)
    }

    fn chown(&self, _path: &str, _user: i32, _group: i32) -> i32 {
        self.stand_in(Operation::Chown)
    }

    fn lchown(&self, _path: &str, _user: i32, _group: i32) -> i32 {
        self.stand_in(Operation::Lchown)
    }

    #[tracing::instrument(level = "trace", skip(self), ret)]
    fn mkdir(&self, path: &str, mode: u32) -> i32 {
        let wide = to_native_path(path);
        let result = self
            .host
            .create_directory(&wide)
            .and_then(|()| self.host.set_permissions(&wide, mode));
        self.complete(Operation::Mkdir, path, result)
    }

    #[tracing::instrument(level = "trace", skip(self), ret)]
    fn link(&self, oldpath: &str, newpath: &str) -> i32 {
        let old = to_native_path(oldpath);
        let new = to_native_path(newpath);
        match self.host.create_hard_link(&new, &old) {
            Ok(()) => self.complete(Operation::Link, newpath, Ok(())),
            Err(code) => {
                self.report(code, &format!("{oldpath} or {newpath}"));
                match code.raw() {
                    0 => -1,
                    raw => raw as i32,
                }
            }
        }
    }

    fn readlink(&self, _path: &str) -> Option<String> {
        self.no_entry(Operation::Readlink)
    }

    #[tracing::instrument(level = "trace", skip(self), ret)]
    fn utimes(&self, path: &str, atime: Option<i64>, mtime: Option<i64>) -> i32 {
        let (atime, mtime) = match (atime, mtime) {
            (Some(atime), Some(mtime)) => (atime, mtime),
            (atime, mtime) => {
                let now = unix_now();
                (atime.unwrap_or(now), mtime.unwrap_or(now))
            }
        };
        let wide = to_native_path(path);
        let result = self.host.open_for_write(&wide).and_then(|handle| {
            let guard = HandleGuard::new(&self.host, handle);
            self.host
                .set_file_time(guard.handle(), to_native_time(atime), to_native_time(mtime))
        });
        self.complete(Operation::Utimes, path, result)
    }

    #[tracing::instrument(level = "trace", skip(self), ret)]
    fn isatty(&self, fd: i32) -> bool {
        self.host
            .handle_for_descriptor(fd)
            .is_some_and(|handle| self.host.file_type(handle) == FILE_TYPE_CHAR)
    }

    fn kill(&self, _pid: i32, _signal: i32) -> i32 {
        self.stand_in(Operation::Kill)
    }

    fn wait(&self, _status: &mut i32) -> i32 {
        self.stand_in(Operation::Wait)
    }

    fn waitpid(&self, _pid: i32, _status: &mut i32, _flags: i32) -> i32 {
        self.stand_in(Operation::Waitpid)
    }

    fn getuid(&self) -> i32 {
        self.stand_in(Operation::Getuid)
    }

    fn geteuid(&self) -> i32 {
        self.stand_in(Operation::Geteuid)
    }

    fn setuid(&self, _uid: i32) -> i32 {
        self.stand_in(Operation::Setuid)
    }

    fn seteuid(&self, _euid: i32) -> i32 {
        self.stand_in(Operation::Seteuid)
    }

    fn getgid(&self) -> i32 {
        self.stand_in(Operation::Getgid)
    }

    fn getegid(&self) -> i32 {
        self.stand_in(Operation::Getegid)
    }

    fn setgid(&self, _gid: i32) -> i32 {
        self.stand_in(Operation::Setgid)
    }

    fn setegid(&self, _egid: i32) -> i32 {
        self.stand_in(Operation::Setegid)
    }

    fn getppid(&self) -> i32 {
        self.stand_in(Operation::Getppid)
    }

    fn getpgid(&self, _pid: i32) -> i32 {
        self.stand_in(Operation::Getpgid)
    }

    fn getpgrp(&self) -> i32 {
        self.stand_in(Operation::Getpgrp)
    }

    fn setpgid(&self, _pid: i32, _pgid: i32) -> i32 {
        self.stand_in(Operation::Setpgid)
    }

    fn getpriority(&self, _which: i32, _who: i32) -> i32 {
        self.stand_in(Operation::Getpriority)
    }

    fn setpriority(&self, _which: i32, _who: i32, _prio: i32) -> i32 {
        self.stand_in(Operation::Setpriority)
    }

    fn getlogin(&self) -> Option<String> {
        self.identity.getlogin()
    }

    fn getpwent(&self) -> Option<Passwd> {
        self.no_entry(Operation::Getpwent)
    }

    fn getpwnam(&self, _name: &str) -> Option<Passwd> {
        self.no_entry(Operation::Getpwnam)
    }

    fn getpwuid(&self, _uid: i32) -> Option<Passwd> {
        self.no_entry(Operation::Getpwuid)
    }

    fn setpwent(&self) -> i32 {
        self.identity.setpwent()
    }

    fn endpwent(&self) -> i32 {
        self.identity.endpwent()
    }

    fn getgrent(&self) -> Option<Group> {
        self.no_entry(Operation::Getgrent)
    }

    fn getgrgid(&self, _gid: i32) -> Option<Group> {
        self.no_entry(Operation::Getgrgid)
    }

    fn getgrnam(&self, _name: &str) -> Option<Group> {
        self.no_entry(Operation::Getgrnam)
    }

    fn setgrent(&self) -> i32 {
        self.stand_in(Operation::Setgrent)
    }

    fn endgrent(&self) -> i32 {
        self.stand_in(Operation::Endgrent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::TracingHandler;
    use crate::host::{NativeHandle, NativeResult};
    use crate::path::WidePath;
    use crate::stat::NativeAttributes;
    use crate::time::FileTime;
    use winposix_types::last_error::ERROR_FILE_NOT_FOUND;

    /// A host on which every call fails.
    struct Unreachable;

    impl NativeHost for Unreachable {
        fn create_directory(&self, _path: &WidePath) -> NativeResult<()> {
            Err(ERROR_FILE_NOT_FOUND)
        }

        fn set_permissions(&self, _path: &WidePath, _mode: u32) -> NativeResult<()> {
            Err(ERROR_FILE_NOT_FOUND)
        }

        fn create_hard_link(&self, _new: &WidePath, _existing: &WidePath) -> NativeResult<()> {
            Err(ERROR_FILE_NOT_FOUND)
        }

        fn open_for_write(&self, _path: &WidePath) -> NativeResult<NativeHandle> {
            Err(ERROR_FILE_NOT_FOUND)
        }

        fn set_file_time(
            &self,
            _handle: NativeHandle,
            _access: FileTime,
            _write: FileTime,
        ) -> NativeResult<()> {
            Err(ERROR_FILE_NOT_FOUND)
        }

        fn close_handle(&self, _handle: NativeHandle) {}

        fn handle_for_descriptor(&self, _fd: i32) -> Option<NativeHandle> {
            None
        }

        fn file_type(&self, _handle: NativeHandle) -> u32 {
            0
        }

        fn query_attributes(&self, _path: &WidePath) -> NativeResult<NativeAttributes> {
            Err(ERROR_FILE_NOT_FOUND)
        }
    }

    fn posix() -> WindowsPosix<Unreachable> {
        WindowsPosix::new(Unreachable, Arc::new(TracingHandler::new()))
    }

    #[test]
    fn stand_ins_answer_every_stub() {
        let posix = posix();
        for op in Operation::ALL.iter().copied() {
            match op.strategy() {
                Strategy::Stub(Stub::Fixed(value)) => assert_eq!(posix.stand_in(op), value),
                Strategy::Stub(Stub::Vacuous) => assert_eq!(posix.stand_in(op), 0),
                Strategy::Stub(Stub::Unsupported) => assert_eq!(posix.stand_in(op), -1),
                _ => {}
            }
        }
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "chmod is not answered by a stand-in")]
    fn native_operation_is_not_a_stand_in() {
        posix().stand_in(Operation::Chmod);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "getpwnam is not answered by a stand-in")]
    fn entry_lookup_is_not_a_stand_in() {
        posix().stand_in(Operation::Getpwnam);
    }
}
