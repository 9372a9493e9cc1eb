use crate::time::{FileTime, from_native_time};

pub const S_IFMT: u32 = 0o170000;
pub const S_IFDIR: u32 = 0o040000;
pub const S_IFREG: u32 = 0o100000;

pub const FILE_ATTRIBUTE_READONLY: u32 = 0x0000_0001;
pub const FILE_ATTRIBUTE_DIRECTORY: u32 = 0x0000_0010;

const EXECUTABLE_EXTENSIONS: &[&str] = &["exe", "com", "bat", "cmd"];

/// What the native attribute query reports for a path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NativeAttributes {
    pub attributes: u32,
    pub size: u64,
    pub creation_time: FileTime,
    pub last_access_time: FileTime,
    pub last_write_time: FileTime,
}

/// A stat record for a Windows file.
///
/// Records start out empty; [`FileStatus::populate`] fills them from a native
/// query. Accessors on an empty record return zeroes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FileStatus {
    native: Option<NativeAttributes>,
    executable: bool,
}

impl FileStatus {
    /// An empty record, not yet backed by any native query.
    pub fn allocate() -> Self {
        Self::default()
    }

    pub fn populate(&mut self, path: &str, native: NativeAttributes) {
        self.executable = has_executable_extension(path);
        self.native = Some(native);
    }

    pub fn is_populated(&self) -> bool {
        self.native.is_some()
    }

    pub fn attributes(&self) -> u32 {
        self.native.map(|n| n.attributes).unwrap_or_default()
    }

    pub fn is_directory(&self) -> bool {
        self.is_populated() && self.attributes() & FILE_ATTRIBUTE_DIRECTORY != 0
    }

    pub fn is_file(&self) -> bool {
        self.is_populated() && !self.is_directory()
    }

    pub fn is_readonly(&self) -> bool {
        self.attributes() & FILE_ATTRIBUTE_READONLY != 0
    }

    /// `st_mode`: type bits plus the permission bits Windows can express.
    pub fn mode(&self) -> u32 {
        if !self.is_populated() {
            return 0;
        }
        let mut mode = if self.is_directory() { S_IFDIR } else { S_IFREG };
        mode |= 0o444;
        if !self.is_readonly() {
            mode |= 0o222;
        }
        if self.is_directory() || self.executable {
            mode |= 0o111;
        }
        mode
    }

    pub fn size(&self) -> u64 {
        if self.is_directory() {
            return 0;
        }
        self.native.map(|n| n.size).unwrap_or_default()
    }

    pub fn atime(&self) -> i64 {
        self.time(|n| n.last_access_time)
    }

    pub fn mtime(&self) -> i64 {
        self.time(|n| n.last_write_time)
    }

    /// Windows has no change time; like the CRT, this reports creation time.
    pub fn ctime(&self) -> i64 {
        self.time(|n| n.creation_time)
    }

    pub fn nlink(&self) -> u64 {
        u64::from(self.is_populated())
    }

    pub fn uid(&self) -> u32 {
        0
    }

    pub fn gid(&self) -> u32 {
        0
    }

    fn time(&self, pick: impl FnOnce(&NativeAttributes) -> FileTime) -> i64 {
        self.native.as_ref().map(|n| from_native_time(pick(n))).unwrap_or_default()
    }
}

fn has_executable_extension(path: &str) -> bool {
    let name = path.rsplit(['\\', '/']).next().unwrap_or(path);
    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => EXECUTABLE_EXTENSIONS
            .iter()
            .any(|candidate| ext.eq_ignore_ascii_case(candidate)),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::to_native_time;

    fn attrs(attributes: u32) -> NativeAttributes {
        NativeAttributes {
            attributes,
            size: 1234,
            creation_time: to_native_time(1_000),
            last_access_time: to_native_time(3_000),
            last_write_time: to_native_time(2_000),
        }
    }

    #[test]
    fn allocated_record_is_empty() {
        let status = FileStatus::allocate();
        assert!(!status.is_populated());
        assert_eq!(status.mode(), 0);
        assert_eq!(status.size(), 0);
        assert_eq!(status.mtime(), 0);
        assert_eq!(status.nlink(), 0);
    }

    #[test]
    fn regular_file() {
        let mut status = FileStatus::allocate();
        status.populate(r"C:\notes.txt", attrs(0x20));
        assert!(status.is_file());
        assert_eq!(status.mode(), S_IFREG | 0o666);
        assert_eq!(status.size(), 1234);
        assert_eq!(status.atime(), 3_000);
        assert_eq!(status.mtime(), 2_000);
        assert_eq!(status.ctime(), 1_000);
        assert_eq!(status.nlink(), 1);
    }

    #[test]
    fn readonly_directory() {
        let mut status = FileStatus::allocate();
        status.populate(r"C:\dir", attrs(FILE_ATTRIBUTE_DIRECTORY | FILE_ATTRIBUTE_READONLY));
        assert!(status.is_directory());
        assert_eq!(status.mode() & S_IFMT, S_IFDIR);
        assert_eq!(status.mode() & 0o777, 0o555);
        assert_eq!(status.size(), 0);
    }

    #[test]
    fn executables_by_extension() {
        let mut status = FileStatus::allocate();
        status.populate(r"C:\tools\RUN.Exe", attrs(0));
        assert_eq!(status.mode() & 0o111, 0o111);

        status.populate(r"C:\tools.exe\readme", attrs(0));
        assert_eq!(status.mode() & 0o111, 0);

        status.populate(r"C:\tools\.bat", attrs(0));
        assert_eq!(status.mode() & 0o111, 0);
    }
}
