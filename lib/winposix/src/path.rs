//! POSIX-style path strings → NUL-terminated UTF-16 paths for the `W`
//! family of Win32 calls.

use std::fmt;

/// Prefix that lifts the `MAX_PATH` limit on absolute paths.
pub const EXTENDED_LENGTH_PREFIX: &str = r"\\?\";

const EXTENDED_UNC_PREFIX: &str = r"\\?\UNC\";

/// A NUL-terminated UTF-16 path, ready to hand to a native call.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct WidePath {
    units: Vec<u16>,
}

impl WidePath {
    /// Pointer to the first code unit. Valid for as long as `self` is.
    pub fn as_ptr(&self) -> *const u16 {
        self.units.as_ptr()
    }

    /// All code units, terminating NUL included.
    pub fn units(&self) -> &[u16] {
        &self.units
    }

    /// The UTF-16LE byte encoding, terminating NUL included.
    pub fn to_le_bytes(&self) -> Vec<u8> {
        self.units.iter().flat_map(|unit| unit.to_le_bytes()).collect()
    }

    pub fn is_extended_length(&self) -> bool {
        self.without_nul()
            .starts_with(&EXTENDED_LENGTH_PREFIX.encode_utf16().collect::<Vec<_>>())
    }

    fn without_nul(&self) -> &[u16] {
        &self.units[..self.units.len() - 1]
    }
}

impl fmt::Display for WidePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf16_lossy(self.without_nul()))
    }
}

impl fmt::Debug for WidePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("WidePath").field(&self.to_string()).finish()
    }
}

/// Whether `path` is absolute by Windows rules: `C:\...`, `C:/...` or a
/// UNC path. A rooted path without a drive (`\foo`) is relative to the
/// current drive and is not absolute. Device paths (`\\.\COM1`) name a
/// device rather than a file and are not absolute either.
pub fn is_absolute(path: &str) -> bool {
    if is_device_path(path) {
        return false;
    }
    let bytes = path.as_bytes();
    match bytes {
        [drive, b':', sep, ..] if drive.is_ascii_alphabetic() && is_separator(*sep) => true,
        [a, b, ..] if is_separator(*a) && is_separator(*b) => true,
        _ => false,
    }
}

/// Encodes `path` for a native call.
///
/// Absolute paths get the extended-length prefix and have their forward
/// slashes turned into backslashes, since the prefix switches off the native
/// normalisation that would otherwise do it. UNC paths use the `UNC` form of
/// the prefix. Paths that already carry the prefix (in either slash style)
/// and device paths keep their form with backslashes. Relative paths are
/// encoded verbatim.
pub fn to_native_path(path: &str) -> WidePath {
    let normalized = path.replace('/', "\\");
    let text = if normalized.starts_with(EXTENDED_LENGTH_PREFIX) || is_device_path(path) {
        normalized
    } else if !is_absolute(path) {
        path.to_owned()
    } else {
        match normalized.strip_prefix(r"\\") {
            Some(share) => format!("{EXTENDED_UNC_PREFIX}{share}"),
            None => format!("{EXTENDED_LENGTH_PREFIX}{normalized}"),
        }
    };
    let mut units: Vec<u16> = text.encode_utf16().collect();
    units.push(0);
    WidePath { units }
}

fn is_device_path(path: &str) -> bool {
    matches!(
        path.as_bytes(),
        [a, b, b'.', c, ..] if is_separator(*a) && is_separator(*b) && is_separator(*c)
    )
}

fn is_separator(byte: u8) -> bool {
    byte == b'\\' || byte == b'/'
}
