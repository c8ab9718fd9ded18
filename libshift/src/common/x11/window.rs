extern crate x11;

use std::mem::MaybeUninit;
use std::os::raw::c_void;
use std::ptr::{self, NonNull};
use x11::xlib;

use crate::common::*;
use crate::common::error::*;
use crate::common::x11::XLIB_NONE;
use crate::common::x11::atoms::X11Atom;


/// Window id owned in memory allocated by Xlib.
///
/// The memory is released with `XFree` when the reference is dropped, which does not need an open
/// display connection.
#[derive(Debug)]
pub struct XWindowRef {
    data: NonNull<xlib::Window>,
}

pub trait X11Window {
    fn x11_attributes(&self, display: *mut xlib::Display) -> Result<RawAttributes>;
    fn x11_geometry(&self, display: *mut xlib::Display) -> Result<Geometry>;
    fn x11_move(&self, display: *mut xlib::Display, x: i32, y: i32) -> Result<()>;
    fn x11_read_property_window(&self, display: *mut xlib::Display, property: X11Atom) -> Result<Option<XWindowRef>>;
    fn x11_resize(&self, display: *mut xlib::Display, width: u32, height: u32) -> Result<()>;
    fn x11_translate_to(&self, display: *mut xlib::Display, dest: xlib::Window, x: i32, y: i32) -> Result<(i32, i32)>;
}


impl XWindowRef {
    /// # Safety
    ///
    /// `data` must point to a window id allocated by Xlib that is not freed elsewhere.
    unsafe fn from_raw(data: NonNull<xlib::Window>) -> XWindowRef {
        return XWindowRef { data };
    }

    pub fn window(&self) -> xlib::Window {
        return unsafe { *self.data.as_ptr() };
    }
}

impl Drop for XWindowRef {
    fn drop(&mut self) {
        unsafe {
            xlib::XFree(self.data.as_ptr() as *mut c_void);
        }
    }
}

impl X11Window for xlib::Window {
    fn x11_attributes(&self, display: *mut xlib::Display) -> Result<RawAttributes> {
        unsafe {
            let mut attributes: MaybeUninit<xlib::XWindowAttributes> = MaybeUninit::uninit();
            if xlib::XGetWindowAttributes(display, *self, attributes.as_mut_ptr()) == 0 {
                tracing::debug!(window = *self, "XGetWindowAttributes failed");
                return Err(ErrorCode::AttributeQuery);
            }
            let attributes = attributes.assume_init();
            return Ok(RawAttributes {
                x: attributes.x,
                y: attributes.y,
                width: attributes.width.try_into().unwrap_or(0),
                height: attributes.height.try_into().unwrap_or(0),
                border_width: attributes.border_width.try_into().unwrap_or(0),
            });
        }
    }

    fn x11_geometry(&self, display: *mut xlib::Display) -> Result<Geometry> {
        unsafe {
            let mut root: xlib::Window = 0;
            let mut x: i32 = 0;
            let mut y: i32 = 0;
            let mut w: u32 = 0;
            let mut h: u32 = 0;
            let mut bw: u32 = 0;
            let mut depth: u32 = 0;
            if xlib::XGetGeometry(display, *self, &mut root, &mut x, &mut y, &mut w, &mut h, &mut bw, &mut depth) == 0 {
                tracing::debug!(window = *self, "XGetGeometry failed");
                return Err(ErrorCode::GeometryQuery);
            }
            return Ok(Geometry::new(x, y, w, h));
        }
    }

    fn x11_move(&self, display: *mut xlib::Display, x: i32, y: i32) -> Result<()> {
        if unsafe { xlib::XMoveWindow(display, *self, x, y) } == 0 {
            tracing::debug!(window = *self, x, y, "XMoveWindow failed");
            return Err(ErrorCode::GeometryChange);
        }
        return Ok(());
    }

    fn x11_read_property_window(&self, display: *mut xlib::Display, property: X11Atom) -> Result<Option<XWindowRef>> {
        let mut actual_type = 0;
        let mut actual_format = 0;
        let mut nitems = 0;
        let mut remaining_bytes = 0;
        let mut data_ptr: *mut u8 = ptr::null_mut();

        let status = unsafe {
            xlib::XGetWindowProperty(display, *self, property.to_xlib_atom(display),
                0, 1, xlib::False,
                xlib::XA_WINDOW, &mut actual_type,
                &mut actual_format,
                &mut nitems, &mut remaining_bytes,
                &mut data_ptr)
        };
        if status != xlib::Success.into() {
            tracing::debug!(%property, status, "XGetWindowProperty failed");
            return Err(ErrorCode::PropertyQuery);
        }

        let data = match NonNull::new(data_ptr as *mut xlib::Window) {
            Some(data) => unsafe { XWindowRef::from_raw(data) },
            None => return Ok(None),
        };

        if actual_type != xlib::XA_WINDOW || actual_format != 32 || nitems == 0 || data.window() == XLIB_NONE {
            return Ok(None);
        }
        return Ok(Some(data));
    }

    fn x11_resize(&self, display: *mut xlib::Display, width: u32, height: u32) -> Result<()> {
        if unsafe { xlib::XResizeWindow(display, *self, width, height) } == 0 {
            tracing::debug!(window = *self, width, height, "XResizeWindow failed");
            return Err(ErrorCode::GeometryChange);
        }
        return Ok(());
    }

    fn x11_translate_to(&self, display: *mut xlib::Display, dest: xlib::Window, x: i32, y: i32) -> Result<(i32, i32)> {
        let mut dest_x = 0;
        let mut dest_y = 0;
        let mut child: xlib::Window = XLIB_NONE;
        let status = unsafe {
            xlib::XTranslateCoordinates(display, *self, dest, x, y, &mut dest_x, &mut dest_y, &mut child)
        };
        if status == 0 {
            tracing::debug!(window = *self, dest, "XTranslateCoordinates failed");
            return Err(ErrorCode::CoordinateTranslation);
        }
        return Ok((dest_x, dest_y));
    }
}
