pub mod error;
pub mod x11;


/// Full extent of a window including its window manager decorations
#[derive(Copy,Clone,PartialEq,Eq,Debug,Default)]
pub struct Geometry {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

/// Window attributes as reported by the X server.
///
/// `x` and `y` are the offset of the client area inside its parent. For windows managed by a
/// reparenting window manager this is the thickness of the decoration on the left and on top.
/// `width` and `height` only cover the client area.
#[derive(Copy,Clone,PartialEq,Eq,Debug,Default)]
pub struct RawAttributes {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    pub border_width: u32,
}


impl Geometry {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Geometry {
        return Geometry { x, y, width, height };
    }

    pub fn as_tuple(&self) -> (i32, i32, u32, u32) {
        return (self.x, self.y, self.width, self.height);
    }

    /// Outer geometry of a window from its attributes and the root coordinates of its border corner.
    ///
    /// The decoration offset is moved out of the origin and added to the size, so the result can
    /// be passed straight back into a move and a resize.
    pub fn from_attributes(attributes: &RawAttributes, root_pos: (i32, i32)) -> Geometry {
        return Geometry {
            x: root_pos.0 - attributes.x,
            y: root_pos.1 - attributes.y,
            width: add_offset(attributes.width, attributes.x),
            height: add_offset(attributes.height, attributes.y),
        };
    }
}

impl RawAttributes {
    /// Client area size that makes the full window extent equal to `width` x `height`.
    ///
    /// X rejects empty windows, so the result is never smaller than 1x1.
    pub fn content_size_for(&self, width: u32, height: u32) -> (u32, u32) {
        let width = sub_offset(width, self.x).max(1);
        let height = sub_offset(height, self.y).max(1);
        return (width, height);
    }
}


fn add_offset(size: u32, offset: i32) -> u32 {
    return size.saturating_add_signed(offset);
}

fn sub_offset(size: u32, offset: i32) -> u32 {
    return match offset.checked_neg() {
        Some(neg) => size.saturating_add_signed(neg),
        None => size.saturating_add(1 << 31),
    };
}
