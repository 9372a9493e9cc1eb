use thiserror::Error;

/// Error codes surfaced to POSIX-style callers.
///
/// Discriminants follow the conventional POSIX numbering so that callers
/// reading `errno` as an integer see the values they expect. `Unknown` is the
/// sentinel for native failures that have no documented translation.
#[repr(i32)]
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Errno {
    /// Operation not permitted.
    #[error("operation not permitted")]
    Perm = 1,
    /// No such file or directory.
    #[error("no such file or directory")]
    Noent = 2,
    /// No such process.
    #[error("no such process")]
    Srch = 3,
    /// Interrupted function.
    #[error("interrupted system call")]
    Intr = 4,
    /// I/O error.
    #[error("input/output error")]
    Io = 5,
    /// No such device or address.
    #[error("no such device or address")]
    Nxio = 6,
    /// Argument list too long.
    #[error("argument list too long")]
    Toobig = 7,
    /// Executable file format error.
    #[error("exec format error")]
    Noexec = 8,
    /// Bad file descriptor.
    #[error("bad file descriptor")]
    Badf = 9,
    /// No child processes.
    #[error("no child processes")]
    Child = 10,
    /// Resource unavailable, try again.
    #[error("resource temporarily unavailable")]
    Again = 11,
    /// Not enough space.
    #[error("cannot allocate memory")]
    Nomem = 12,
    /// Permission denied.
    #[error("permission denied")]
    Access = 13,
    /// Bad address.
    #[error("bad address")]
    Fault = 14,
    /// Device or resource busy.
    #[error("device or resource busy")]
    Busy = 16,
    /// File exists.
    #[error("file exists")]
    Exist = 17,
    /// Cross-device link.
    #[error("invalid cross-device link")]
    Xdev = 18,
    /// No such device.
    #[error("no such device")]
    Nodev = 19,
    /// Not a directory.
    #[error("not a directory")]
    Notdir = 20,
    /// Is a directory.
    #[error("is a directory")]
    Isdir = 21,
    /// Invalid argument.
    #[error("invalid argument")]
    Inval = 22,
    /// Too many files open in system.
    #[error("too many open files in system")]
    Nfile = 23,
    /// File descriptor value too large.
    #[error("too many open files")]
    Mfile = 24,
    /// Inappropriate I/O control operation.
    #[error("inappropriate ioctl for device")]
    Notty = 25,
    /// File too large.
    #[error("file too large")]
    Fbig = 27,
    /// No space left on device.
    #[error("no space left on device")]
    Nospc = 28,
    /// Invalid seek.
    #[error("illegal seek")]
    Spipe = 29,
    /// Read-only file system.
    #[error("read-only file system")]
    Rofs = 30,
    /// Too many links.
    #[error("too many links")]
    Mlink = 31,
    /// Broken pipe.
    #[error("broken pipe")]
    Pipe = 32,
    /// Result too large.
    #[error("numerical result out of range")]
    Range = 34,
    /// Filename too long.
    #[error("file name too long")]
    Nametoolong = 36,
    /// Function not supported.
    #[error("function not implemented")]
    Nosys = 38,
    /// Directory not empty.
    #[error("directory not empty")]
    Notempty = 39,
    /// Too many levels of symbolic links.
    #[error("too many levels of symbolic links")]
    Loop = 40,
    /// Not supported, or operation not supported on socket.
    #[error("operation not supported")]
    Notsup = 95,
    /// The native failure has no documented POSIX meaning.
    #[error("unknown error")]
    Unknown = -1,
}

impl Errno {
    /// Every variant, `Unknown` last.
    pub const ALL: &'static [Errno] = &[
        Errno::Perm,
        Errno::Noent,
        Errno::Srch,
        Errno::Intr,
        Errno::Io,
        Errno::Nxio,
        Errno::Toobig,
        Errno::Noexec,
        Errno::Badf,
        Errno::Child,
        Errno::Again,
        Errno::Nomem,
        Errno::Access,
        Errno::Fault,
        Errno::Busy,
        Errno::Exist,
        Errno::Xdev,
        Errno::Nodev,
        Errno::Notdir,
        Errno::Isdir,
        Errno::Inval,
        Errno::Nfile,
        Errno::Mfile,
        Errno::Notty,
        Errno::Fbig,
        Errno::Nospc,
        Errno::Spipe,
        Errno::Rofs,
        Errno::Mlink,
        Errno::Pipe,
        Errno::Range,
        Errno::Nametoolong,
        Errno::Nosys,
        Errno::Notempty,
        Errno::Loop,
        Errno::Notsup,
        Errno::Unknown,
    ];

    /// The integer a C caller would find in `errno`.
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Looks up a variant by its integer value.
    pub fn from_code(code: i32) -> Option<Errno> {
        Self::ALL.iter().copied().find(|errno| errno.code() == code)
    }

    /// The symbolic C name, e.g. `"ENOENT"`.
    pub const fn name(self) -> &'static str {
        match self {
            Errno::Perm => "EPERM",
            Errno::Noent => "ENOENT",
            Errno::Srch => "ESRCH",
            Errno::Intr => "EINTR",
            Errno::Io => "EIO",
            Errno::Nxio => "ENXIO",
            Errno::Toobig => "E2BIG",
            Errno::Noexec => "ENOEXEC",
            Errno::Badf => "EBADF",
            Errno::Child => "ECHILD",
            Errno::Again => "EAGAIN",
            Errno::Nomem => "ENOMEM",
            Errno::Access => "EACCES",
            Errno::Fault => "EFAULT",
            Errno::Busy => "EBUSY",
            Errno::Exist => "EEXIST",
            Errno::Xdev => "EXDEV",
            Errno::Nodev => "ENODEV",
            Errno::Notdir => "ENOTDIR",
            Errno::Isdir => "EISDIR",
            Errno::Inval => "EINVAL",
            Errno::Nfile => "ENFILE",
            Errno::Mfile => "EMFILE",
            Errno::Notty => "ENOTTY",
            Errno::Fbig => "EFBIG",
            Errno::Nospc => "ENOSPC",
            Errno::Spipe => "ESPIPE",
            Errno::Rofs => "EROFS",
            Errno::Mlink => "EMLINK",
            Errno::Pipe => "EPIPE",
            Errno::Range => "ERANGE",
            Errno::Nametoolong => "ENAMETOOLONG",
            Errno::Nosys => "ENOSYS",
            Errno::Notempty => "ENOTEMPTY",
            Errno::Loop => "ELOOP",
            Errno::Notsup => "ENOTSUP",
            Errno::Unknown => "EUNKNOWN",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_unique() {
        for (i, a) in Errno::ALL.iter().enumerate() {
            for b in &Errno::ALL[i + 1..] {
                assert_ne!(a.code(), b.code(), "{} and {} share a code", a.name(), b.name());
            }
        }
    }

    #[test]
    fn from_code_inverts_code() {
        for errno in Errno::ALL {
            assert_eq!(Errno::from_code(errno.code()), Some(*errno));
        }
        assert_eq!(Errno::from_code(15), None);
    }

    #[test]
    fn display_is_the_strerror_text() {
        assert_eq!(Errno::Noent.to_string(), "no such file or directory");
        assert_eq!(Errno::Access.name(), "EACCES");
        assert_eq!(Errno::Unknown.code(), -1);
    }
}
