//! Geometry service for moving and resizing X11 windows.
//!
//! Callers reason about windows as the full visible box including window manager decorations,
//! while the X server reports the client area and the decoration offsets separately.
//! This crate converts between both views and wraps the few Xlib requests needed for
//! querying the active window and changing its position and size.

#[macro_use]
mod macros;

pub mod common;
pub mod service;
#[cfg(feature = "configuration")]
pub mod utils;

pub use common::Geometry;
pub use common::error::{describe_error, ErrorCode};
pub use common::x11::install_error_handler;
pub use service::{release_window_handle, GeometryService, WindowRef};
pub use service::x11::{x11_service, X11Connector};
