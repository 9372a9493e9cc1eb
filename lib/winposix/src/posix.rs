use crate::identity::{Group, Passwd};
use crate::stat::FileStatus;

/// The POSIX system-call surface.
///
/// Integer-returning calls follow the C convention: 0 (or a value) on
/// success, -1 on failure with the error delivered to the handler. The one
/// exception is [`Posix::link`], documented there.
pub trait Posix: Send + Sync {
    /// A fresh, unpopulated stat record in this host's layout.
    fn allocate_stat(&self) -> FileStatus;

    fn stat(&self, path: &str) -> Option<FileStatus>;
    fn lstat(&self, path: &str) -> Option<FileStatus>;

    fn chmod(&self, path: &str, mode: u32) -> i32;
    fn lchmod(&self, path: &str, mode: u32) -> i32;
    fn chown(&self, path: &str, user: i32, group: i32) -> i32;
    fn lchown(&self, path: &str, user: i32, group: i32) -> i32;
    fn mkdir(&self, path: &str, mode: u32) -> i32;

    /// Creates `newpath` as a hard link to `oldpath`.
    ///
    /// Returns 0 on success. On failure it returns the raw native error code
    /// rather than -1, or -1 if the host supplied no code.
    fn link(&self, oldpath: &str, newpath: &str) -> i32;

    fn readlink(&self, path: &str) -> Option<String>;

    /// Sets access and modification times, in POSIX seconds. A missing time
    /// means "now".
    fn utimes(&self, path: &str, atime: Option<i64>, mtime: Option<i64>) -> i32;

    fn isatty(&self, fd: i32) -> bool;

    fn kill(&self, pid: i32, signal: i32) -> i32;
    fn wait(&self, status: &mut i32) -> i32;
    fn waitpid(&self, pid: i32, status: &mut i32, flags: i32) -> i32;

    fn getuid(&self) -> i32;
    fn geteuid(&self) -> i32;
    fn setuid(&self, uid: i32) -> i32;
    fn seteuid(&self, euid: i32) -> i32;
    fn getgid(&self) -> i32;
    fn getegid(&self) -> i32;
    fn setgid(&self, gid: i32) -> i32;
    fn setegid(&self, egid: i32) -> i32;

    fn getppid(&self) -> i32;
    fn getpgid(&self, pid: i32) -> i32;
    fn getpgrp(&self) -> i32;
    fn setpgid(&self, pid: i32, pgid: i32) -> i32;
    fn getpriority(&self, which: i32, who: i32) -> i32;
    fn setpriority(&self, which: i32, who: i32, prio: i32) -> i32;

    fn getlogin(&self) -> Option<String>;
    fn getpwent(&self) -> Option<Passwd>;
    fn getpwnam(&self, name: &str) -> Option<Passwd>;
    fn getpwuid(&self, uid: i32) -> Option<Passwd>;
    fn setpwent(&self) -> i32;
    fn endpwent(&self) -> i32;
    fn getgrent(&self) -> Option<Group>;
    fn getgrgid(&self, gid: i32) -> Option<Group>;
    fn getgrnam(&self, name: &str) -> Option<Group>;
    fn setgrent(&self) -> i32;
    fn endgrent(&self) -> i32;
}
