//! In-memory display server modelling a reparenting window manager.
//! This module and its contents are only available when testing.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use crate::common::error::*;
use crate::service::*;


/// Request that can be told to fail
#[derive(Clone,Copy,PartialEq,Eq,Hash,Debug)]
pub enum Step {
    Connect,
    ActiveWindow,
    Attributes,
    Translate,
    RootGeometry,
    Move,
    Resize,
    Sync,
}

/// Client window wrapped in a frame by the window manager
#[derive(Clone,Copy,PartialEq,Eq,Debug)]
pub struct MockWindow {
    /// root position of the frame
    pub frame: (i32, i32),
    /// position of the client inside the frame
    pub decoration: (i32, i32),
    /// size of the client area
    pub size: (u32, u32),
    pub border_width: u32,
}

#[derive(Default,Debug)]
struct State {
    windows: HashMap<WindowId, MockWindow>,
    active: Option<WindowId>,
    root: Geometry,
    failures: HashSet<Step>,
    live_connections: usize,
    connections_opened: usize,
    live_handles: usize,
    attribute_reads: usize,
    syncs: usize,
}

#[derive(Clone,Default)]
pub struct MockServer {
    state: Rc<RefCell<State>>,
}

pub struct MockConnector {
    state: Rc<RefCell<State>>,
}

pub struct MockConnection {
    state: Rc<RefCell<State>>,
    pending: RefCell<Vec<(WindowId, Request)>>,
}

#[derive(Debug)]
pub struct MockHandle {
    id: WindowId,
    state: Rc<RefCell<State>>,
}

#[derive(Clone,Copy,Debug)]
enum Request {
    Move(i32, i32),
    Resize(u32, u32),
}


impl MockWindow {
    pub fn new(frame: (i32, i32), decoration: (i32, i32), size: (u32, u32)) -> MockWindow {
        return MockWindow { frame, decoration, size, border_width: 0 };
    }

    pub fn with_border(mut self, border_width: u32) -> MockWindow {
        self.border_width = border_width;
        return self;
    }
}

impl MockServer {
    pub fn connector(&self) -> MockConnector {
        return MockConnector { state: self.state.clone() };
    }

    pub fn add_window(&self, id: WindowId, window: MockWindow) {
        self.state.borrow_mut().windows.insert(id, window);
    }

    pub fn update_window(&self, id: WindowId, f: impl FnOnce(&mut MockWindow)) {
        if let Some(window) = self.state.borrow_mut().windows.get_mut(&id) {
            f(window);
        }
    }

    pub fn window(&self, id: WindowId) -> MockWindow {
        return self.state.borrow().windows[&id];
    }

    pub fn set_active(&self, id: Option<WindowId>) {
        self.state.borrow_mut().active = id;
    }

    pub fn set_root(&self, root: Geometry) {
        self.state.borrow_mut().root = root;
    }

    pub fn fail_at(&self, step: Step) {
        self.state.borrow_mut().failures.insert(step);
    }

    pub fn clear_failures(&self) {
        self.state.borrow_mut().failures.clear();
    }

    pub fn live_connections(&self) -> usize {
        return self.state.borrow().live_connections;
    }

    pub fn connections_opened(&self) -> usize {
        return self.state.borrow().connections_opened;
    }

    pub fn live_handles(&self) -> usize {
        return self.state.borrow().live_handles;
    }

    pub fn attribute_reads(&self) -> usize {
        return self.state.borrow().attribute_reads;
    }

    pub fn syncs(&self) -> usize {
        return self.state.borrow().syncs;
    }
}

impl State {
    fn check(&self, step: Step, error: ErrorCode) -> Result<()> {
        if self.failures.contains(&step) {
            return Err(error);
        }
        return Ok(());
    }

    fn window(&self, id: WindowId, error: ErrorCode) -> Result<MockWindow> {
        return self.windows.get(&id).copied().ok_or(error);
    }

    fn apply(&mut self, id: WindowId, request: Request) {
        if let Some(window) = self.windows.get_mut(&id) {
            match request {
                Request::Move(x, y) => window.frame = (x, y),
                Request::Resize(w, h) => window.size = (w, h),
            }
        }
    }
}

impl Connector for MockConnector {
    type Connection = MockConnection;

    fn connect(&self) -> Result<MockConnection> {
        let mut state = self.state.borrow_mut();
        state.check(Step::Connect, ErrorCode::Connection)?;
        state.live_connections += 1;
        state.connections_opened += 1;
        return Ok(MockConnection { state: self.state.clone(), pending: RefCell::new(Vec::new()) });
    }
}

impl MockConnection {
    fn flush(&self) {
        let mut state = self.state.borrow_mut();
        for (id, request) in self.pending.borrow_mut().drain(..) {
            state.apply(id, request);
        }
    }
}

impl Drop for MockConnection {
    fn drop(&mut self) {
        // closing a display flushes the output buffer
        self.flush();
        self.state.borrow_mut().live_connections -= 1;
    }
}

impl Connection for MockConnection {
    type Window = MockHandle;

    fn active_window(&self) -> Result<Option<MockHandle>> {
        let mut state = self.state.borrow_mut();
        state.check(Step::ActiveWindow, ErrorCode::PropertyQuery)?;
        return match state.active {
            Some(id) => {
                state.live_handles += 1;
                Ok(Some(MockHandle { id, state: self.state.clone() }))
            },
            _ => Ok(None),
        };
    }

    fn attributes(&self, window: WindowId) -> Result<RawAttributes> {
        let mut state = self.state.borrow_mut();
        state.check(Step::Attributes, ErrorCode::AttributeQuery)?;
        state.attribute_reads += 1;
        let w = state.window(window, ErrorCode::AttributeQuery)?;
        return Ok(RawAttributes {
            x: w.decoration.0,
            y: w.decoration.1,
            width: w.size.0,
            height: w.size.1,
            border_width: w.border_width,
        });
    }

    fn move_window(&self, window: WindowId, x: i32, y: i32) -> Result<()> {
        self.state.borrow().check(Step::Move, ErrorCode::GeometryChange)?;
        self.pending.borrow_mut().push((window, Request::Move(x, y)));
        return Ok(());
    }

    fn resize_window(&self, window: WindowId, width: u32, height: u32) -> Result<()> {
        self.state.borrow().check(Step::Resize, ErrorCode::GeometryChange)?;
        self.pending.borrow_mut().push((window, Request::Resize(width, height)));
        return Ok(());
    }

    fn root_geometry(&self) -> Result<Geometry> {
        let state = self.state.borrow();
        state.check(Step::RootGeometry, ErrorCode::GeometryQuery)?;
        return Ok(state.root);
    }

    fn sync(&self) -> Result<()> {
        self.state.borrow().check(Step::Sync, ErrorCode::Sync)?;
        self.flush();
        self.state.borrow_mut().syncs += 1;
        return Ok(());
    }

    fn translate_to_root(&self, window: WindowId, x: i32, y: i32) -> Result<(i32, i32)> {
        let state = self.state.borrow();
        state.check(Step::Translate, ErrorCode::CoordinateTranslation)?;
        let w = state.window(window, ErrorCode::CoordinateTranslation)?;
        let border = w.border_width as i32;
        let origin_x = w.frame.0 + w.decoration.0 + border;
        let origin_y = w.frame.1 + w.decoration.1 + border;
        return Ok((origin_x + x, origin_y + y));
    }
}

impl WindowRef for MockHandle {
    fn window_id(&self) -> WindowId {
        return self.id;
    }
}

impl Drop for MockHandle {
    fn drop(&mut self) {
        self.state.borrow_mut().live_handles -= 1;
    }
}
