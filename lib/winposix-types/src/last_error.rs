//! Windows system error codes, as returned by `GetLastError` and
//! `WSAGetLastError`.
//!
//! Only the codes the translation table knows about are named here; any
//! other value can still be carried in a [`NativeErrorCode`].

use std::fmt;
use std::io;

/// The value of the calling thread's last-error slot after a native call
/// failed.
///
/// The slot is overwritten by the next native call on the same thread, so
/// the value has to be captured immediately after the failing call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct NativeErrorCode(pub u32);

impl NativeErrorCode {
    /// Reads the last-error slot of the calling thread.
    pub fn last_os_error() -> Self {
        Self::from(&io::Error::last_os_error())
    }

    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<&io::Error> for NativeErrorCode {
    fn from(err: &io::Error) -> Self {
        Self(err.raw_os_error().unwrap_or_default() as u32)
    }
}

impl From<u32> for NativeErrorCode {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl fmt::Display for NativeErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "native error {}", self.0)
    }
}

macro_rules! native_codes {
    ($($name:ident = $value:expr;)*) => {
        $(pub const $name: NativeErrorCode = NativeErrorCode($value);)*
    };
}

native_codes! {
    ERROR_INVALID_FUNCTION = 1;
    ERROR_FILE_NOT_FOUND = 2;
    ERROR_PATH_NOT_FOUND = 3;
    ERROR_TOO_MANY_OPEN_FILES = 4;
    ERROR_ACCESS_DENIED = 5;
    ERROR_INVALID_HANDLE = 6;
    ERROR_ARENA_TRASHED = 7;
    ERROR_NOT_ENOUGH_MEMORY = 8;
    ERROR_INVALID_BLOCK = 9;
    ERROR_BAD_ENVIRONMENT = 10;
    ERROR_BAD_FORMAT = 11;
    ERROR_INVALID_ACCESS = 12;
    ERROR_INVALID_DATA = 13;
    ERROR_INVALID_DRIVE = 15;
    ERROR_CURRENT_DIRECTORY = 16;
    ERROR_NOT_SAME_DEVICE = 17;
    ERROR_NO_MORE_FILES = 18;
    ERROR_WRITE_PROTECT = 19;
    ERROR_BAD_UNIT = 20;
    ERROR_NOT_READY = 21;
    ERROR_BAD_COMMAND = 22;
    ERROR_CRC = 23;
    ERROR_BAD_LENGTH = 24;
    ERROR_SEEK = 25;
    ERROR_NOT_DOS_DISK = 26;
    ERROR_SECTOR_NOT_FOUND = 27;
    ERROR_OUT_OF_PAPER = 28;
    ERROR_WRITE_FAULT = 29;
    ERROR_READ_FAULT = 30;
    ERROR_GEN_FAILURE = 31;
    ERROR_SHARING_VIOLATION = 32;
    ERROR_LOCK_VIOLATION = 33;
    ERROR_WRONG_DISK = 34;
    ERROR_SHARING_BUFFER_EXCEEDED = 36;
    ERROR_BAD_NETPATH = 53;
    ERROR_NETWORK_ACCESS_DENIED = 65;
    ERROR_BAD_NET_NAME = 67;
    ERROR_FILE_EXISTS = 80;
    ERROR_CANNOT_MAKE = 82;
    ERROR_FAIL_I24 = 83;
    ERROR_INVALID_PARAMETER = 87;
    ERROR_NO_PROC_SLOTS = 89;
    ERROR_DRIVE_LOCKED = 108;
    ERROR_BROKEN_PIPE = 109;
    ERROR_DISK_FULL = 112;
    ERROR_INVALID_TARGET_HANDLE = 114;
    ERROR_MOD_NOT_FOUND = 126;
    ERROR_WAIT_NO_CHILDREN = 128;
    ERROR_CHILD_NOT_COMPLETE = 129;
    ERROR_DIRECT_ACCESS_HANDLE = 130;
    ERROR_NEGATIVE_SEEK = 131;
    ERROR_SEEK_ON_DEVICE = 132;
    ERROR_DIR_NOT_EMPTY = 145;
    ERROR_NOT_LOCKED = 158;
    ERROR_BAD_PATHNAME = 161;
    ERROR_MAX_THRDS_REACHED = 164;
    ERROR_LOCK_FAILED = 167;
    ERROR_ALREADY_EXISTS = 183;
    ERROR_INVALID_STARTING_CODESEG = 188;
    ERROR_INVALID_STACKSEG = 189;
    ERROR_INVALID_MODULETYPE = 190;
    ERROR_INVALID_EXE_SIGNATURE = 191;
    ERROR_EXE_MARKED_INVALID = 192;
    ERROR_BAD_EXE_FORMAT = 193;
    ERROR_ITERATED_DATA_EXCEEDS_64K = 194;
    ERROR_INVALID_MINALLOCSIZE = 195;
    ERROR_DYNLINK_FROM_INVALID_RING = 196;
    ERROR_IOPL_NOT_ENABLED = 197;
    ERROR_INVALID_SEGDPL = 198;
    ERROR_AUTODATASEG_EXCEEDS_64K = 199;
    ERROR_RING2SEG_MUST_BE_MOVABLE = 200;
    ERROR_RELOC_CHAIN_XEEDS_SEGLIM = 201;
    ERROR_INFLOOP_IN_RELOC_CHAIN = 202;
    ERROR_FILENAME_EXCED_RANGE = 206;
    ERROR_NESTING_NOT_ALLOWED = 215;
    ERROR_PIPE_LOCAL = 229;
    ERROR_BAD_PIPE = 230;
    ERROR_PIPE_BUSY = 231;
    ERROR_NO_DATA = 232;
    ERROR_PIPE_NOT_CONNECTED = 233;
    ERROR_DIRECTORY = 267;
    ERROR_OPERATION_ABORTED = 995;
    ERROR_NOT_ENOUGH_QUOTA = 1816;
    WSAEINTR = 10004;
    WSAEBADF = 10009;
    WSAEACCES = 10013;
    WSAEFAULT = 10014;
    WSAEINVAL = 10022;
    WSAEMFILE = 10024;
    WSAENAMETOOLONG = 10063;
    WSAENOTEMPTY = 10066;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_raw_os_error() {
        let err = io::Error::from_raw_os_error(ERROR_ACCESS_DENIED.raw() as i32);
        assert_eq!(NativeErrorCode::from(&err), ERROR_ACCESS_DENIED);
    }

    #[test]
    fn synthetic_io_errors_carry_no_code() {
        let err = io::Error::new(io::ErrorKind::Other, "not from the OS");
        assert_eq!(NativeErrorCode::from(&err), NativeErrorCode(0));
    }
}
