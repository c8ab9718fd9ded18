use core::result::Result as CoreResult;
use std::fmt::{Display, Formatter, Result as FmtResult};


pub type Result<T> = CoreResult<T, ErrorCode>;

enum_with_values! {
    /// Failures reported by the geometry service.
    ///
    /// Every variant carries a stable negative code (0 is reserved for success) and a fixed message.
    #[derive(thiserror::Error,Debug,Copy,Clone,PartialEq,Eq,Hash)]
    #[repr(i32)]
    vis pub enum ErrorCode {
        Connection = -1,
        PropertyQuery = -2,
        NoActiveWindow = -3,
        AttributeQuery = -4,
        CoordinateTranslation = -5,
        GeometryChange = -6,
        Sync = -7,
        GeometryQuery = -8
    }
}


impl ErrorCode {
    /// Raw negative code of this error
    pub fn code(&self) -> i32 {
        return *self as i32;
    }

    /// Static human readable description
    pub fn message(&self) -> &'static str {
        return match self {
            Self::Connection => "X11Error: Unable to connect to X11 display",
            Self::PropertyQuery => "X11Error: Unable to get active window (XGetWindowProperty)",
            Self::NoActiveWindow => "X11Error: No X11 active window found",
            Self::AttributeQuery => "X11Error: Unable to get window attributes (XGetWindowAttributes)",
            Self::CoordinateTranslation => "X11Error: Unable to translate coordinates (XTranslateCoordinates)",
            Self::GeometryChange => "X11Error: Unable to change window geometry (XMoveWindow/XResizeWindow)",
            Self::Sync => "X11Error: Unable to sync X11 (XSync)",
            Self::GeometryQuery => "X11Error: Unable to get geometry (XGetGeometry)",
        };
    }
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        return write!(f, "{}", self.message());
    }
}

impl TryFrom<i32> for ErrorCode {
    type Error = i32;

    fn try_from(code: i32) -> CoreResult<Self, Self::Error> {
        return Self::VALUES.iter()
            .find(|e| e.code() == code)
            .copied()
            .ok_or(code);
    }
}

impl From<ErrorCode> for i32 {
    fn from(value: ErrorCode) -> Self {
        return value.code();
    }
}

impl From<ErrorCode> for String {
    fn from(value: ErrorCode) -> Self {
        return value.to_string();
    }
}


/// Look up the message for a raw error code.
///
/// # Panics
///
/// `code` must be one of the negative codes of [ErrorCode].
pub fn describe_error(code: i32) -> &'static str {
    assert!(code < 0 && code >= -(ErrorCode::SIZE as i32), "invalid error code {}", code);
    return match ErrorCode::try_from(code) {
        Ok(error) => error.message(),
        Err(code) => unreachable!("error code {} is in range but unknown", code),
    };
}
