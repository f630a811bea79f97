//! In-memory collaborators
//!
//! A no-GPU backend: toplevels that keep their state in memory, a seat that
//! records what it was told, and a renderer that records what it would draw.
//! Tests drive the compositor through these.

use std::cell::{Ref, RefCell};
use std::collections::HashSet;
use std::rc::Rc;

use crate::error::RenderError;
use crate::math::{Area, Point};
use crate::output::{OutputInfo, RenderBox, Renderer};
use crate::seat::{AxisEvent, ButtonState, KeyState, Modifiers, Seat};
use crate::view::{SubSurface, SurfaceHit, SurfaceId, Toplevel};

/// Client-side state of a [`HeadlessToplevel`]
#[derive(Clone, Debug, Default)]
pub struct ToplevelState {
    /// Committed window geometry
    pub geometry: Area,
    /// Committed root buffer extent
    pub buffer: Area,
    pub activated: bool,
    /// Whether the client adopts requested sizes immediately
    pub ack_resizes: bool,
    /// Every size the compositor asked for
    pub size_requests: Vec<Area>,
    pub frames_done: u32,
    /// Child surfaces, bottom to top
    pub children: Vec<SubSurface>,
}

/// Toplevel whose client lives in memory
///
/// Clones share state, so a test can keep one handle while the stage owns
/// the view built from another.
#[derive(Clone, Debug)]
pub struct HeadlessToplevel {
    surface: SurfaceId,
    state: Rc<RefCell<ToplevelState>>,
}

impl HeadlessToplevel {
    /// A cooperative client that adopts every requested size
    pub fn new(surface: SurfaceId, area: Area) -> Self {
        Self::with_ack(surface, area, true)
    }

    pub fn with_ack(surface: SurfaceId, area: Area, ack_resizes: bool) -> Self {
        let state = ToplevelState {
            geometry: area,
            buffer: area,
            ack_resizes,
            ..ToplevelState::default()
        };
        Self {
            surface,
            state: Rc::new(RefCell::new(state)),
        }
    }

    pub fn state(&self) -> Ref<'_, ToplevelState> {
        self.state.borrow()
    }

    /// Simulate the client committing a size of its own choosing
    pub fn resize_client(&self, area: Area) {
        let mut state = self.state.borrow_mut();
        state.geometry = area;
        state.buffer = area;
    }

    /// Attach a child surface at `offset` from the toplevel origin
    pub fn add_child(&self, surface: SurfaceId, offset: Point, area: Area) {
        self.state.borrow_mut().children.push(SubSurface {
            surface,
            offset,
            area,
        });
    }

    fn sub_surfaces(&self) -> Vec<SubSurface> {
        let state = self.state.borrow();
        let root = SubSurface {
            surface: self.surface,
            offset: Point::ZERO,
            area: state.buffer,
        };
        std::iter::once(root)
            .chain(state.children.iter().copied())
            .collect()
    }
}

impl Toplevel for HeadlessToplevel {
    fn surface(&self) -> SurfaceId {
        self.surface
    }

    fn geometry(&self) -> Area {
        self.state.borrow().geometry
    }

    fn surface_area(&self) -> Area {
        self.state.borrow().buffer
    }

    fn set_size(&mut self, area: Area) {
        let mut state = self.state.borrow_mut();
        state.size_requests.push(area);
        if state.ack_resizes {
            state.geometry = area;
            state.buffer = area;
        }
    }

    fn set_activated(&mut self, activated: bool) {
        self.state.borrow_mut().activated = activated;
    }

    fn for_each_sub_surface(&self, f: &mut dyn FnMut(&SubSurface)) {
        for sub in self.sub_surfaces() {
            f(&sub);
        }
    }

    fn surface_at(&self, local: Point) -> Option<SurfaceHit> {
        self.sub_surfaces().into_iter().rev().find_map(|sub| {
            let relative = local - sub.offset;
            sub.area.contains(relative).then_some(SurfaceHit {
                surface: sub.surface,
                local: relative,
            })
        })
    }

    fn send_frame_done(&self, _surface: SurfaceId) {
        self.state.borrow_mut().frames_done += 1;
    }
}

/// Everything a [`RecordingSeat`] was asked to deliver
#[derive(Clone, Debug, PartialEq)]
pub enum SeatEvent {
    PointerEnter { surface: SurfaceId, local: Point },
    PointerMotion { local: Point },
    PointerButton { button: u32, state: ButtonState },
    PointerAxis(AxisEvent),
    PointerFrame,
    ClearPointerFocus,
    KeyboardEnter(SurfaceId),
    Key { keycode: u32, state: KeyState },
    Modifiers(Modifiers),
    DefaultCursor,
    ConfigureKeyboard { rate: i32, delay: i32 },
}

/// Seat that tracks focus and logs deliveries
#[derive(Clone, Debug, Default)]
pub struct RecordingSeat {
    pub keyboard_focus: Option<SurfaceId>,
    pub pointer_focus: Option<SurfaceId>,
    pub events: Vec<SeatEvent>,
}

impl RecordingSeat {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of logged events matching `pred`
    pub fn count(&self, pred: impl Fn(&SeatEvent) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }
}

impl Seat for RecordingSeat {
    fn keyboard_focus(&self) -> Option<SurfaceId> {
        self.keyboard_focus
    }

    fn pointer_focus(&self) -> Option<SurfaceId> {
        self.pointer_focus
    }

    fn notify_pointer_enter(&mut self, surface: SurfaceId, local: Point) {
        self.pointer_focus = Some(surface);
        self.events.push(SeatEvent::PointerEnter { surface, local });
    }

    fn notify_pointer_motion(&mut self, _time_ms: u32, local: Point) {
        self.events.push(SeatEvent::PointerMotion { local });
    }

    fn notify_pointer_button(&mut self, _time_ms: u32, button: u32, state: ButtonState) {
        self.events.push(SeatEvent::PointerButton { button, state });
    }

    fn notify_pointer_axis(&mut self, event: AxisEvent) {
        self.events.push(SeatEvent::PointerAxis(event));
    }

    fn notify_pointer_frame(&mut self) {
        self.events.push(SeatEvent::PointerFrame);
    }

    fn clear_pointer_focus(&mut self) {
        self.pointer_focus = None;
        self.events.push(SeatEvent::ClearPointerFocus);
    }

    fn notify_keyboard_enter(&mut self, surface: SurfaceId) {
        self.keyboard_focus = Some(surface);
        self.events.push(SeatEvent::KeyboardEnter(surface));
    }

    fn notify_key(&mut self, _time_ms: u32, keycode: u32, state: KeyState) {
        self.events.push(SeatEvent::Key { keycode, state });
    }

    fn notify_modifiers(&mut self, modifiers: Modifiers) {
        self.events.push(SeatEvent::Modifiers(modifiers));
    }

    fn set_default_cursor(&mut self) {
        self.events.push(SeatEvent::DefaultCursor);
    }

    fn configure_keyboard(&mut self, repeat_rate: i32, repeat_delay: i32) {
        self.events.push(SeatEvent::ConfigureKeyboard {
            rate: repeat_rate,
            delay: repeat_delay,
        });
    }
}

/// Renderer that records draw calls
#[derive(Clone, Debug, Default)]
pub struct RecordingRenderer {
    /// Make every `begin` fail
    pub fail_begin: bool,
    /// Surfaces without a texture
    pub missing: HashSet<SurfaceId>,
    pub frames: u32,
    pub clears: Vec<[f32; 4]>,
    pub draws: Vec<(SurfaceId, RenderBox)>,
    /// Outputs that presented an empty frame
    pub empty_commits: Vec<String>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Renderer for RecordingRenderer {
    fn begin(&mut self, output: &OutputInfo) -> Result<(), RenderError> {
        if self.fail_begin {
            return Err(RenderError::NoRenderTarget {
                output: output.name.clone(),
                reason: "headless target disabled".to_string(),
            });
        }
        Ok(())
    }

    fn clear(&mut self, color: [f32; 4]) {
        self.clears.push(color);
    }

    fn render_surface(&mut self, surface: SurfaceId, render_box: RenderBox) -> bool {
        if self.missing.contains(&surface) {
            return false;
        }
        self.draws.push((surface, render_box));
        true
    }

    fn end(&mut self) {
        self.frames += 1;
    }

    fn commit_empty(&mut self, output: &OutputInfo) {
        self.empty_commits.push(output.name.clone());
    }
}
