extern crate x11;

use std::ffi::CStr;
use std::fmt::{Display, Formatter, Result};
use x11::xlib;


#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum X11Atom {
    // EWMH
    NetActiveWindow,
}

impl Display for X11Atom {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        return write!(f, "{}", self.name().to_string_lossy());
    }
}

impl X11Atom {
    pub fn name(&self) -> &'static CStr {
        return match self {
            X11Atom::NetActiveWindow => c"_NET_ACTIVE_WINDOW",
        };
    }

    pub fn to_xlib_atom(&self, display: *mut xlib::Display) -> xlib::Atom {
        unsafe {
            return xlib::XInternAtom(display, self.name().as_ptr(), xlib::False);
        }
    }
}
