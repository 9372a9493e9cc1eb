use std::ffi::c_void;
use std::mem::MaybeUninit;
use std::ptr;

use windows_sys::Win32::Foundation::{
    CloseHandle, FILETIME, GENERIC_WRITE, HANDLE, INVALID_HANDLE_VALUE,
};
use windows_sys::Win32::Storage::FileSystem::{
    CreateDirectoryW, CreateFileW, CreateHardLinkW, FILE_ATTRIBUTE_READONLY,
    FILE_FLAG_BACKUP_SEMANTICS, FILE_SHARE_READ, FILE_SHARE_WRITE, GetFileAttributesExW,
    GetFileAttributesW, GetFileExInfoStandard, GetFileType, INVALID_FILE_ATTRIBUTES,
    OPEN_EXISTING, SetFileAttributesW, SetFileTime, WIN32_FILE_ATTRIBUTE_DATA,
};
use winposix_types::NativeErrorCode;

use super::{NativeHandle, NativeHost, NativeResult};
use crate::path::WidePath;
use crate::stat::NativeAttributes;
use crate::time::FileTime;

/// The real Win32 layer.
#[derive(Clone, Copy, Debug, Default)]
pub struct WindowsHost;

fn check(ok: i32) -> NativeResult<()> {
    if ok == 0 {
        return Err(NativeErrorCode::last_os_error());
    }
    Ok(())
}

fn to_filetime(time: FileTime) -> FILETIME {
    FILETIME {
        dwLowDateTime: time.low,
        dwHighDateTime: time.high,
    }
}

fn from_filetime(time: &FILETIME) -> FileTime {
    FileTime {
        low: time.dwLowDateTime,
        high: time.dwHighDateTime,
    }
}

fn as_raw(handle: NativeHandle) -> HANDLE {
    handle.0 as HANDLE
}

impl NativeHost for WindowsHost {
    fn create_directory(&self, path: &WidePath) -> NativeResult<()> {
        check(unsafe { CreateDirectoryW(path.as_ptr(), ptr::null()) })
    }

    fn set_permissions(&self, path: &WidePath, mode: u32) -> NativeResult<()> {
        let current = unsafe { GetFileAttributesW(path.as_ptr()) };
        if current == INVALID_FILE_ATTRIBUTES {
            return Err(NativeErrorCode::last_os_error());
        }
        let updated = if mode & 0o200 == 0 {
            current | FILE_ATTRIBUTE_READONLY
        } else {
            current & !FILE_ATTRIBUTE_READONLY
        };
        if updated == current {
            return Ok(());
        }
        check(unsafe { SetFileAttributesW(path.as_ptr(), updated) })
    }

    fn create_hard_link(&self, new: &WidePath, existing: &WidePath) -> NativeResult<()> {
        check(unsafe { CreateHardLinkW(new.as_ptr(), existing.as_ptr(), ptr::null()) })
    }

    fn open_for_write(&self, path: &WidePath) -> NativeResult<NativeHandle> {
        let handle = unsafe {
            CreateFileW(
                path.as_ptr(),
                GENERIC_WRITE,
                FILE_SHARE_READ | FILE_SHARE_WRITE,
                ptr::null(),
                OPEN_EXISTING,
                FILE_FLAG_BACKUP_SEMANTICS,
                ptr::null_mut(),
            )
        };
        if handle == INVALID_HANDLE_VALUE {
            return Err(NativeErrorCode::last_os_error());
        }
        Ok(NativeHandle(handle as isize))
    }

    fn set_file_time(
        &self,
        handle: NativeHandle,
        access: FileTime,
        write: FileTime,
    ) -> NativeResult<()> {
        let access = to_filetime(access);
        let write = to_filetime(write);
        check(unsafe { SetFileTime(as_raw(handle), ptr::null(), &access, &write) })
    }

    fn close_handle(&self, handle: NativeHandle) {
        if unsafe { CloseHandle(as_raw(handle)) } == 0 {
            tracing::debug!(
                handle = handle.0,
                error = NativeErrorCode::last_os_error().raw(),
                "CloseHandle failed"
            );
        }
    }

    fn handle_for_descriptor(&self, fd: i32) -> Option<NativeHandle> {
        let raw = unsafe { libc::get_osfhandle(fd) };
        if raw == -1 || raw == -2 {
            return None;
        }
        Some(NativeHandle(raw as isize))
    }

    fn file_type(&self, handle: NativeHandle) -> u32 {
        unsafe { GetFileType(as_raw(handle)) }
    }

    fn query_attributes(&self, path: &WidePath) -> NativeResult<NativeAttributes> {
        let mut data = MaybeUninit::<WIN32_FILE_ATTRIBUTE_DATA>::zeroed();
        check(unsafe {
            GetFileAttributesExW(
                path.as_ptr(),
                GetFileExInfoStandard,
                data.as_mut_ptr() as *mut c_void,
            )
        })?;
        let data = unsafe { data.assume_init() };
        Ok(NativeAttributes {
            attributes: data.dwFileAttributes,
            size: (u64::from(data.nFileSizeHigh) << 32) | u64::from(data.nFileSizeLow),
            creation_time: from_filetime(&data.ftCreationTime),
            last_access_time: from_filetime(&data.ftLastAccessTime),
            last_write_time: from_filetime(&data.ftLastWriteTime),
        })
    }
}
