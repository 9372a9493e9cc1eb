#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use parking_lot::Mutex;
use winposix::host::{FILE_TYPE_CHAR, FILE_TYPE_DISK, NativeResult};
use winposix::{
    Errno, FileTime, NativeAttributes, NativeErrorCode, NativeHandle, NativeHost, PosixHandler,
    WidePath, WindowsPosix,
};
use winposix_types::last_error::{ERROR_FILE_EXISTS, ERROR_FILE_NOT_FOUND, ERROR_PATH_NOT_FOUND};

/// A native call as the host saw it, paths decoded back to text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NativeCall {
    CreateDirectory(String),
    SetPermissions(String, u32),
    CreateHardLink { new: String, existing: String },
    OpenForWrite(String),
    SetFileTime { handle: isize, access: FileTime, write: FileTime },
    CloseHandle(isize),
    HandleForDescriptor(i32),
    FileType(isize),
    QueryAttributes(String),
}

#[derive(Default)]
struct HostState {
    calls: Vec<NativeCall>,
    files: HashSet<String>,
    dirs: HashSet<String>,
    ttys: HashSet<i32>,
    descriptors: HashMap<i32, isize>,
    fail_next: HashMap<&'static str, NativeErrorCode>,
    next_handle: isize,
}

/// An in-memory host that records every call.
///
/// Paths are stored in their encoded form (`\\?\C:\...`).
#[derive(Clone, Default)]
pub struct RecordingHost {
    state: Arc<Mutex<HostState>>,
}

fn parent(path: &str) -> Option<&str> {
    path.rsplit_once('\\').map(|(parent, _)| parent)
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dir(self, path: &str) -> Self {
        self.state
            .lock()
            .dirs
            .insert(winposix::to_native_path(path).to_string());
        self
    }

    pub fn with_file(self, path: &str) -> Self {
        self.state
            .lock()
            .files
            .insert(winposix::to_native_path(path).to_string());
        self
    }

    /// Maps `fd` to a fresh handle; `tty` selects its file type.
    pub fn with_descriptor(self, fd: i32, tty: bool) -> Self {
        {
            let mut state = self.state.lock();
            state.next_handle += 1;
            let handle = 0x100 + state.next_handle;
            state.descriptors.insert(fd, handle);
            if tty {
                state.ttys.insert(handle as i32);
            }
        }
        self
    }

    /// Makes the next call to `primitive` fail with `code`.
    pub fn fail_next(&self, primitive: &'static str, code: NativeErrorCode) {
        self.state.lock().fail_next.insert(primitive, code);
    }

    pub fn calls(&self) -> Vec<NativeCall> {
        self.state.lock().calls.clone()
    }

    pub fn exists(&self, path: &str) -> bool {
        let key = winposix::to_native_path(path).to_string();
        let state = self.state.lock();
        state.files.contains(&key) || state.dirs.contains(&key)
    }

    fn record(&self, call: NativeCall) {
        self.state.lock().calls.push(call);
    }

    fn injected(&self, primitive: &'static str) -> NativeResult<()> {
        match self.state.lock().fail_next.remove(primitive) {
            Some(code) => Err(code),
            None => Ok(()),
        }
    }
}

impl NativeHost for RecordingHost {
    fn create_directory(&self, path: &WidePath) -> NativeResult<()> {
        let path = path.to_string();
        self.record(NativeCall::CreateDirectory(path.clone()));
        self.injected("create_directory")?;
        let mut state = self.state.lock();
        if state.dirs.contains(&path) || state.files.contains(&path) {
            return Err(ERROR_FILE_EXISTS);
        }
        match parent(&path) {
            Some(parent) if !state.dirs.contains(parent) => Err(ERROR_PATH_NOT_FOUND),
            _ => {
                state.dirs.insert(path);
                Ok(())
            }
        }
    }

    fn set_permissions(&self, path: &WidePath, mode: u32) -> NativeResult<()> {
        let path = path.to_string();
        self.record(NativeCall::SetPermissions(path.clone(), mode));
        self.injected("set_permissions")?;
        let state = self.state.lock();
        if state.dirs.contains(&path) || state.files.contains(&path) {
            Ok(())
        } else {
            Err(ERROR_FILE_NOT_FOUND)
        }
    }

    fn create_hard_link(&self, new: &WidePath, existing: &WidePath) -> NativeResult<()> {
        let (new, existing) = (new.to_string(), existing.to_string());
        self.record(NativeCall::CreateHardLink {
            new: new.clone(),
            existing: existing.clone(),
        });
        self.injected("create_hard_link")?;
        let mut state = self.state.lock();
        if !state.files.contains(&existing) {
            return Err(ERROR_FILE_NOT_FOUND);
        }
        if state.files.contains(&new) || state.dirs.contains(&new) {
            return Err(winposix_types::last_error::ERROR_ALREADY_EXISTS);
        }
        state.files.insert(new);
        Ok(())
    }

    fn open_for_write(&self, path: &WidePath) -> NativeResult<NativeHandle> {
        let path = path.to_string();
        self.record(NativeCall::OpenForWrite(path.clone()));
        self.injected("open_for_write")?;
        let mut state = self.state.lock();
        if !state.files.contains(&path) && !state.dirs.contains(&path) {
            return Err(ERROR_FILE_NOT_FOUND);
        }
        state.next_handle += 1;
        Ok(NativeHandle(state.next_handle))
    }

    fn set_file_time(
        &self,
        handle: NativeHandle,
        access: FileTime,
        write: FileTime,
    ) -> NativeResult<()> {
        self.record(NativeCall::SetFileTime {
            handle: handle.0,
            access,
            write,
        });
        self.injected("set_file_time")
    }

    fn close_handle(&self, handle: NativeHandle) {
        self.record(NativeCall::CloseHandle(handle.0));
    }

    fn handle_for_descriptor(&self, fd: i32) -> Option<NativeHandle> {
        self.record(NativeCall::HandleForDescriptor(fd));
        self.state.lock().descriptors.get(&fd).copied().map(NativeHandle)
    }

    fn file_type(&self, handle: NativeHandle) -> u32 {
        self.record(NativeCall::FileType(handle.0));
        if self.state.lock().ttys.contains(&(handle.0 as i32)) {
            FILE_TYPE_CHAR
        } else {
            FILE_TYPE_DISK
        }
    }

    fn query_attributes(&self, path: &WidePath) -> NativeResult<NativeAttributes> {
        let path = path.to_string();
        self.record(NativeCall::QueryAttributes(path.clone()));
        self.injected("query_attributes")?;
        let state = self.state.lock();
        let attributes = if state.dirs.contains(&path) {
            winposix::stat::FILE_ATTRIBUTE_DIRECTORY
        } else if state.files.contains(&path) {
            0x20
        } else {
            return Err(ERROR_FILE_NOT_FOUND);
        };
        Ok(NativeAttributes {
            attributes,
            size: 42,
            creation_time: winposix::to_native_time(1_000),
            last_access_time: winposix::to_native_time(2_000),
            last_write_time: winposix::to_native_time(3_000),
        })
    }
}

/// Something the facade told its handler.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Report {
    Error(Errno, String),
    Unimplemented(String),
}

#[derive(Clone, Default)]
pub struct RecordingHandler {
    reports: Arc<Mutex<Vec<Report>>>,
}

impl RecordingHandler {
    pub fn reports(&self) -> Vec<Report> {
        self.reports.lock().clone()
    }
}

impl PosixHandler for RecordingHandler {
    fn error(&self, errno: Errno, context: &str) {
        self.reports
            .lock()
            .push(Report::Error(errno, context.to_owned()));
    }

    fn unimplemented_error(&self, operation: &str) {
        self.reports
            .lock()
            .push(Report::Unimplemented(operation.to_owned()));
    }
}

pub fn facade(host: &RecordingHost) -> (WindowsPosix<RecordingHost>, RecordingHandler) {
    let handler = RecordingHandler::default();
    let posix = WindowsPosix::new(host.clone(), Arc::new(handler.clone()));
    (posix, handler)
}
