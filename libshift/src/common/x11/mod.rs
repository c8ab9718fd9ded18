extern crate x11;

use std::ffi::*;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::ptr;
use x11::xlib;

use crate::common::error::*;

pub mod atoms;
pub mod window;


pub const XLIB_NONE: u64 = 0;
/// Prefix of diagnostics emitted for asynchronous X errors
pub const LIBRARY_NAME: &str = "shiftwin";
const ERROR_TEXT_BUFSIZE: usize = 256;


/// Asynchronous protocol error as delivered to the global Xlib error handler
#[derive(Clone,PartialEq,Eq,Debug)]
pub struct ProtocolError {
    pub error_code: u8,
    pub request_code: u8,
    pub minor_code: u8,
    pub serial: u64,
    pub resource: u64,
    pub description: String,
}

/// Scoped connection to the X server, closed when dropped
pub struct XDisplay {
    display: *mut xlib::Display,
    root: xlib::Window,
}


impl ProtocolError {
    /// # Safety
    ///
    /// `display` must be the connection the error was reported on.
    unsafe fn from_xlib(display: *mut xlib::Display, error: &xlib::XErrorEvent) -> ProtocolError {
        let mut buf = vec![0u8; ERROR_TEXT_BUFSIZE];
        xlib::XGetErrorText(display, error.error_code.into(), buf.as_mut_ptr() as *mut c_char,
                            (ERROR_TEXT_BUFSIZE - 1) as c_int);
        let description = CStr::from_ptr(buf.as_ptr() as *const c_char)
            .to_string_lossy()
            .into_owned();

        return ProtocolError {
            error_code: error.error_code,
            request_code: error.request_code,
            minor_code: error.minor_code,
            serial: error.serial,
            resource: error.resourceid,
            description,
        };
    }
}

impl Display for ProtocolError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        return write!(f, "{}: X11Error: {} (code: {})", LIBRARY_NAME, self.description, self.request_code);
    }
}

impl XDisplay {
    /// Connect to the display `name` or to `$DISPLAY` if no name is given
    pub fn open(name: Option<&CStr>) -> Result<XDisplay> {
        let name_ptr = name.map(|n| n.as_ptr()).unwrap_or(ptr::null());
        let display = unsafe { xlib::XOpenDisplay(name_ptr) };
        if display.is_null() {
            tracing::debug!(display = ?name, "XOpenDisplay failed");
            return Err(ErrorCode::Connection);
        }

        install_error_handler();
        let root = unsafe { xlib::XDefaultRootWindow(display) };
        tracing::trace!(root, "opened X display");
        return Ok(XDisplay { display, root });
    }

    pub fn raw(&self) -> *mut xlib::Display {
        return self.display;
    }

    pub fn root(&self) -> xlib::Window {
        return self.root;
    }

    /// Block until the server has processed every request sent so far
    pub fn sync(&self) -> Result<()> {
        // errors of the flushed requests are reported to the error handler, not here
        if unsafe { xlib::XSync(self.display, xlib::False) } == 0 {
            return Err(ErrorCode::Sync);
        }
        return Ok(());
    }
}

impl Drop for XDisplay {
    fn drop(&mut self) {
        unsafe {
            xlib::XCloseDisplay(self.display);
        }
        tracing::trace!("closed X display");
    }
}


/// Route X errors to the log instead of aborting the process.
///
/// Xlib keeps a single handler per process. Installing it again is a no-op, so every new
/// connection calls this.
pub fn install_error_handler() {
    unsafe {
        xlib::XSetErrorHandler(Some(on_error));
    }
}

pub fn report_protocol_error(error: &ProtocolError) {
    tracing::warn!(
        error_code = error.error_code,
        request_code = error.request_code,
        minor_code = error.minor_code,
        serial = error.serial,
        resource = error.resource,
        "{}", error
    );
}

extern "C" fn on_error(display: *mut xlib::Display, error: *mut xlib::XErrorEvent) -> c_int {
    if error.is_null() {
        return 0;
    }

    let event = unsafe { ProtocolError::from_xlib(display, &*error) };
    report_protocol_error(&event);
    return 0;
}
