//! The window geometry service and the display connection seam it runs on.
//!
//! Every operation opens its own connection, performs its requests and closes the connection again
//! before returning, on success as well as on failure. Nothing is cached between calls.

use crate::common::*;
use crate::common::error::*;

pub mod x11;
#[cfg(test)]
mod mock;


pub type WindowId = u64;

/// Handle type produced by the connections of connector `C`
pub type WindowHandle<C> = <<C as Connector>::Connection as Connection>::Window;

/// Owned reference to a window on the display server
pub trait WindowRef {
    fn window_id(&self) -> WindowId;
}

/// Single open connection to the display server.
///
/// The connection is closed when it is dropped.
/// Each method maps a failure of its request to exactly one [ErrorCode].
pub trait Connection {
    type Window: WindowRef;

    /// Window designated as active by `_NET_ACTIVE_WINDOW`, if any
    fn active_window(&self) -> Result<Option<Self::Window>>;

    /// Raw attributes of the client area
    fn attributes(&self, window: WindowId) -> Result<RawAttributes>;

    /// Move a window so its outer top left corner is at `(x, y)`
    fn move_window(&self, window: WindowId, x: i32, y: i32) -> Result<()>;

    /// Resize the client area of a window
    fn resize_window(&self, window: WindowId, width: u32, height: u32) -> Result<()>;

    /// Geometry of the root window
    fn root_geometry(&self) -> Result<Geometry>;

    /// Block until all requests have been processed by the server
    fn sync(&self) -> Result<()>;

    /// Translate a window local position into root window coordinates
    fn translate_to_root(&self, window: WindowId, x: i32, y: i32) -> Result<(i32, i32)>;
}

pub trait Connector {
    type Connection: Connection;

    fn connect(&self) -> Result<Self::Connection>;
}

/// Moves, resizes and inspects windows in decoration-inclusive coordinates
pub struct GeometryService<C: Connector> {
    connector: C,
}


impl<C: Connector> GeometryService<C> {
    pub fn new(connector: C) -> GeometryService<C> {
        return GeometryService { connector };
    }

    /// Query the currently active window.
    ///
    /// Fails with [ErrorCode::NoActiveWindow] if no window is designated as active.
    pub fn get_active_window(&self) -> Result<WindowHandle<C>> {
        let connection = self.connector.connect()?;
        let window = connection.active_window()?
            .filter(|w| w.window_id() != 0)
            .ok_or(ErrorCode::NoActiveWindow)?;
        tracing::debug!(window = window.window_id(), "active window");
        return Ok(window);
    }

    /// Full extent of a window including its decoration, in root window coordinates
    pub fn get_window_geometry(&self, window: &WindowHandle<C>) -> Result<Geometry> {
        let connection = self.connector.connect()?;
        let id = window.window_id();

        let attributes = connection.attributes(id)?;
        let border = i32::try_from(attributes.border_width).unwrap_or(i32::MAX);
        let root_pos = connection.translate_to_root(id, -border, -border)?;

        let geometry = Geometry::from_attributes(&attributes, root_pos);
        tracing::debug!(window = id, ?attributes, ?geometry, "window geometry");
        return Ok(geometry);
    }

    /// Move the outer top left corner of a window to `(x, y)`
    pub fn set_window_position(&self, window: &WindowHandle<C>, x: i32, y: i32) -> Result<()> {
        let connection = self.connector.connect()?;
        let id = window.window_id();
        tracing::debug!(window = id, x, y, "moving window");

        // move requests already address the outer frame
        connection.move_window(id, x, y)?;
        return connection.sync();
    }

    /// Resize a window so its full extent including decoration is `width` x `height`
    pub fn set_window_size(&self, window: &WindowHandle<C>, width: u32, height: u32) -> Result<()> {
        let connection = self.connector.connect()?;
        let id = window.window_id();

        let attributes = connection.attributes(id)?;
        let (content_width, content_height) = attributes.content_size_for(width, height);
        tracing::debug!(window = id, width, height, content_width, content_height, "resizing window");

        connection.resize_window(id, content_width, content_height)?;
        return connection.sync();
    }

    /// Move and resize a window, stopping at the first failure
    pub fn set_window_geometry(&self, window: &WindowHandle<C>, geometry: Geometry) -> Result<()> {
        self.set_window_position(window, geometry.x, geometry.y)?;
        return self.set_window_size(window, geometry.width, geometry.height);
    }

    /// Extent of the root window
    pub fn get_screen_geometry(&self) -> Result<Geometry> {
        let connection = self.connector.connect()?;
        return connection.root_geometry();
    }
}


/// Give up ownership of a window handle and free the memory behind it
pub fn release_window_handle<W: WindowRef>(window: W) {
    tracing::trace!(window = window.window_id(), "releasing window handle");
    drop(window);
}
