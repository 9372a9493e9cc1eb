//! Native error → errno translation.
//!
//! Windows reports failures as `GetLastError` codes; everything above the
//! host layer speaks [`Errno`]. The table below is built once per process
//! and is read-only afterwards.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::errno::Errno;
use crate::last_error::*;

/// The authored translation, in declaration order.
///
/// A code may appear more than once when Windows documents several meanings
/// for it; the table keeps the last declaration. `ERROR_INVALID_HANDLE` is
/// declared as `Badf` and again as `Inval`, so it translates to `Inval`.
const ENTRIES: &[(NativeErrorCode, Errno)] = &[
    (ERROR_INVALID_FUNCTION, Errno::Inval),
    (ERROR_FILE_NOT_FOUND, Errno::Noent),
    (ERROR_PATH_NOT_FOUND, Errno::Noent),
    (ERROR_TOO_MANY_OPEN_FILES, Errno::Mfile),
    (ERROR_ACCESS_DENIED, Errno::Access),
    (ERROR_INVALID_HANDLE, Errno::Badf),
    (ERROR_ARENA_TRASHED, Errno::Nomem),
    (ERROR_NOT_ENOUGH_MEMORY, Errno::Nomem),
    (ERROR_INVALID_BLOCK, Errno::Nomem),
    (ERROR_BAD_ENVIRONMENT, Errno::Toobig),
    (ERROR_BAD_FORMAT, Errno::Noexec),
    (ERROR_INVALID_ACCESS, Errno::Inval),
    (ERROR_INVALID_DATA, Errno::Inval),
    (ERROR_INVALID_DRIVE, Errno::Noent),
    (ERROR_CURRENT_DIRECTORY, Errno::Access),
    (ERROR_NOT_SAME_DEVICE, Errno::Xdev),
    (ERROR_NO_MORE_FILES, Errno::Noent),
    (ERROR_WRITE_PROTECT, Errno::Rofs),
    (ERROR_BAD_UNIT, Errno::Nodev),
    (ERROR_NOT_READY, Errno::Nxio),
    (ERROR_BAD_COMMAND, Errno::Access),
    (ERROR_CRC, Errno::Access),
    (ERROR_BAD_LENGTH, Errno::Access),
    (ERROR_SEEK, Errno::Io),
    (ERROR_NOT_DOS_DISK, Errno::Access),
    (ERROR_SECTOR_NOT_FOUND, Errno::Access),
    (ERROR_OUT_OF_PAPER, Errno::Access),
    (ERROR_WRITE_FAULT, Errno::Io),
    (ERROR_READ_FAULT, Errno::Io),
    (ERROR_GEN_FAILURE, Errno::Access),
    (ERROR_LOCK_VIOLATION, Errno::Access),
    (ERROR_SHARING_VIOLATION, Errno::Access),
    (ERROR_WRONG_DISK, Errno::Access),
    (ERROR_SHARING_BUFFER_EXCEEDED, Errno::Access),
    (ERROR_BAD_NETPATH, Errno::Noent),
    (ERROR_NETWORK_ACCESS_DENIED, Errno::Access),
    (ERROR_BAD_NET_NAME, Errno::Noent),
    (ERROR_FILE_EXISTS, Errno::Exist),
    (ERROR_CANNOT_MAKE, Errno::Access),
    (ERROR_FAIL_I24, Errno::Access),
    (ERROR_INVALID_PARAMETER, Errno::Inval),
    (ERROR_NO_PROC_SLOTS, Errno::Again),
    (ERROR_DRIVE_LOCKED, Errno::Access),
    (ERROR_BROKEN_PIPE, Errno::Pipe),
    (ERROR_DISK_FULL, Errno::Nospc),
    (ERROR_INVALID_TARGET_HANDLE, Errno::Badf),
    (ERROR_INVALID_HANDLE, Errno::Inval),
    (ERROR_WAIT_NO_CHILDREN, Errno::Child),
    (ERROR_CHILD_NOT_COMPLETE, Errno::Child),
    (ERROR_DIRECT_ACCESS_HANDLE, Errno::Badf),
    (ERROR_NEGATIVE_SEEK, Errno::Inval),
    (ERROR_SEEK_ON_DEVICE, Errno::Access),
    (ERROR_DIR_NOT_EMPTY, Errno::Notempty),
    (ERROR_DIRECTORY, Errno::Notdir),
    (ERROR_NOT_LOCKED, Errno::Access),
    (ERROR_BAD_PATHNAME, Errno::Noent),
    (ERROR_MAX_THRDS_REACHED, Errno::Again),
    (ERROR_LOCK_FAILED, Errno::Access),
    (ERROR_ALREADY_EXISTS, Errno::Exist),
    (ERROR_INVALID_STARTING_CODESEG, Errno::Noexec),
    (ERROR_INVALID_STACKSEG, Errno::Noexec),
    (ERROR_INVALID_MODULETYPE, Errno::Noexec),
    (ERROR_INVALID_EXE_SIGNATURE, Errno::Noexec),
    (ERROR_EXE_MARKED_INVALID, Errno::Noexec),
    (ERROR_BAD_EXE_FORMAT, Errno::Noexec),
    (ERROR_ITERATED_DATA_EXCEEDS_64K, Errno::Noexec),
    (ERROR_INVALID_MINALLOCSIZE, Errno::Noexec),
    (ERROR_DYNLINK_FROM_INVALID_RING, Errno::Noexec),
    (ERROR_IOPL_NOT_ENABLED, Errno::Noexec),
    (ERROR_INVALID_SEGDPL, Errno::Noexec),
    (ERROR_AUTODATASEG_EXCEEDS_64K, Errno::Noexec),
    (ERROR_RING2SEG_MUST_BE_MOVABLE, Errno::Noexec),
    (ERROR_RELOC_CHAIN_XEEDS_SEGLIM, Errno::Noexec),
    (ERROR_INFLOOP_IN_RELOC_CHAIN, Errno::Noexec),
    (ERROR_FILENAME_EXCED_RANGE, Errno::Noent),
    (ERROR_NESTING_NOT_ALLOWED, Errno::Again),
    (ERROR_PIPE_LOCAL, Errno::Pipe),
    (ERROR_BAD_PIPE, Errno::Pipe),
    (ERROR_PIPE_BUSY, Errno::Again),
    (ERROR_NO_DATA, Errno::Pipe),
    (ERROR_PIPE_NOT_CONNECTED, Errno::Pipe),
    (ERROR_OPERATION_ABORTED, Errno::Intr),
    (ERROR_NOT_ENOUGH_QUOTA, Errno::Nomem),
    (ERROR_MOD_NOT_FOUND, Errno::Noent),
    (WSAENAMETOOLONG, Errno::Nametoolong),
    (WSAENOTEMPTY, Errno::Notempty),
    (WSAEINTR, Errno::Intr),
    (WSAEBADF, Errno::Badf),
    (WSAEACCES, Errno::Access),
    (WSAEFAULT, Errno::Fault),
    (WSAEINVAL, Errno::Inval),
    (WSAEMFILE, Errno::Mfile),
];

static TABLE: Lazy<ErrorTranslationTable> =
    Lazy::new(|| ErrorTranslationTable::from_entries(ENTRIES));

/// Immutable native-code → errno mapping.
#[derive(Debug, Clone)]
pub struct ErrorTranslationTable {
    map: HashMap<NativeErrorCode, Errno>,
}

impl ErrorTranslationTable {
    /// Builds a table from `(code, errno)` pairs. When a code repeats, the
    /// later pair wins.
    pub fn from_entries(entries: &[(NativeErrorCode, Errno)]) -> Self {
        let mut map = HashMap::with_capacity(entries.len());
        for &(code, errno) in entries {
            if let Some(previous) = map.insert(code, errno) {
                if previous != errno {
                    tracing::debug!(
                        code = code.raw(),
                        previous = previous.name(),
                        errno = errno.name(),
                        "native error code redeclared, keeping the later translation"
                    );
                }
            }
        }
        Self { map }
    }

    /// The process-wide table built from the authored entries.
    pub fn global() -> &'static ErrorTranslationTable {
        &TABLE
    }

    /// The authored `(code, errno)` pairs, duplicates included.
    pub fn entries() -> &'static [(NativeErrorCode, Errno)] {
        ENTRIES
    }

    pub fn translate(&self, code: NativeErrorCode) -> Errno {
        self.map.get(&code).copied().unwrap_or(Errno::Unknown)
    }

    pub fn contains(&self, code: NativeErrorCode) -> bool {
        self.map.contains_key(&code)
    }

    /// Number of distinct native codes.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Translates a native error code through the process-wide table.
pub fn translate(code: NativeErrorCode) -> Errno {
    TABLE.translate(code)
}
