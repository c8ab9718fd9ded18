use std::ffi::CString;

use crate::common::error::*;
use crate::common::x11::XDisplay;
use crate::common::x11::atoms::X11Atom::*;
use crate::common::x11::window::{X11Window, XWindowRef};
use crate::service::*;


/// Opens Xlib connections to a fixed display
#[derive(Clone,Debug,Default)]
pub struct X11Connector {
    display_name: Option<CString>,
}

pub struct X11Connection {
    display: XDisplay,
}


impl X11Connector {
    /// Connector for the display named in `$DISPLAY`
    pub fn new() -> X11Connector {
        return X11Connector { display_name: None };
    }

    /// Connector for an explicitly named display like `:1`
    pub fn with_display(name: &str) -> Result<X11Connector> {
        let display_name = CString::new(name)
            .map_err(|_| ErrorCode::Connection)?;
        return Ok(X11Connector { display_name: Some(display_name) });
    }

    pub fn from_option(name: Option<&str>) -> Result<X11Connector> {
        return match name {
            Some(name) => Self::with_display(name),
            None => Ok(Self::new()),
        };
    }
}

impl Connector for X11Connector {
    type Connection = X11Connection;

    fn connect(&self) -> Result<X11Connection> {
        let display = XDisplay::open(self.display_name.as_deref())?;
        return Ok(X11Connection { display });
    }
}

impl Connection for X11Connection {
    type Window = XWindowRef;

    fn active_window(&self) -> Result<Option<XWindowRef>> {
        return self.display.root().x11_read_property_window(self.display.raw(), NetActiveWindow);
    }

    fn attributes(&self, window: WindowId) -> Result<RawAttributes> {
        return window.x11_attributes(self.display.raw());
    }

    fn move_window(&self, window: WindowId, x: i32, y: i32) -> Result<()> {
        return window.x11_move(self.display.raw(), x, y);
    }

    fn resize_window(&self, window: WindowId, width: u32, height: u32) -> Result<()> {
        return window.x11_resize(self.display.raw(), width, height);
    }

    fn root_geometry(&self) -> Result<Geometry> {
        return self.display.root().x11_geometry(self.display.raw());
    }

    fn sync(&self) -> Result<()> {
        return self.display.sync();
    }

    fn translate_to_root(&self, window: WindowId, x: i32, y: i32) -> Result<(i32, i32)> {
        return window.x11_translate_to(self.display.raw(), self.display.root(), x, y);
    }
}

impl WindowRef for XWindowRef {
    fn window_id(&self) -> WindowId {
        return self.window();
    }
}


/// Geometry service talking to `$DISPLAY` (or `display`, if given) through Xlib
pub fn x11_service(display: Option<&str>) -> Result<GeometryService<X11Connector>> {
    return X11Connector::from_option(display).map(GeometryService::new);
}
