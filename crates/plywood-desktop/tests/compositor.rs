//! Integration tests for the compositor event handlers
//!
//! Uses the headless collaborators to check:
//! - View lifecycle and the focus path
//! - Pointer routing in each cursor mode
//! - Keyboard navigation
//! - Output hot-plug
//! - The frame driver

use std::time::{Duration, Instant};

use plywood_desktop::headless::{HeadlessToplevel, RecordingRenderer, RecordingSeat, SeatEvent};
use plywood_desktop::{
    Area, AxisEvent, ButtonState, Compositor, CursorMode, Edges, InputResult, KeyEvent, KeyState,
    Keysym, Modifiers, OutputInfo, Point, Settings, SurfaceId, ViewId, XdgView,
};

const BTN_LEFT: u32 = 0x110;

fn compositor() -> Compositor<RecordingSeat> {
    let mut compositor = Compositor::new(Settings::default(), RecordingSeat::new());
    compositor.handle_new_output(OutputInfo::new("DP-1", Area::new(1920, 1080)));
    compositor
}

fn map(compositor: &mut Compositor<RecordingSeat>, surface: u64, width: i32) -> (ViewId, HeadlessToplevel) {
    let toplevel = HeadlessToplevel::new(SurfaceId(surface), Area::new(width, 600));
    let id = compositor.handle_new_toplevel(Box::new(XdgView::new(toplevel.clone())));
    assert!(compositor.is_pending(id));
    assert!(compositor.handle_map(id));
    (id, toplevel)
}

fn key(keysym: Keysym, state: KeyState) -> KeyEvent {
    KeyEvent {
        time_ms: 0,
        keycode: 30,
        keysym,
        state,
    }
}

// =============================================================================
// Lifecycle and focus
// =============================================================================

#[test]
fn test_map_inserts_and_focuses() {
    let mut compositor = compositor();
    let (id, toplevel) = map(&mut compositor, 1, 800);

    assert!(!compositor.is_pending(id));
    assert!(compositor.stage.contains(id));
    assert_eq!(compositor.seat.keyboard_focus, Some(SurfaceId(1)));
    assert_eq!(compositor.focused_view(), Some(id));
    assert!(toplevel.state().activated);
    // sized for the 1080 cross axis
    assert_eq!(toplevel.state().geometry, Area::new(800, 972));
}

#[test]
fn test_new_focus_deactivates_previous() {
    let mut compositor = compositor();
    let (_, first) = map(&mut compositor, 1, 800);
    let (second_id, second) = map(&mut compositor, 2, 800);

    assert!(!first.state().activated);
    assert!(second.state().activated);
    assert_eq!(compositor.focused_view(), Some(second_id));
    assert_eq!(compositor.stage.column_offset().index, 1);
}

#[test]
fn test_focus_twice_is_noop() {
    let mut compositor = compositor();
    let (id, _) = map(&mut compositor, 1, 800);
    let enters = compositor
        .seat
        .count(|e| matches!(e, SeatEvent::KeyboardEnter(_)));

    assert!(!compositor.focus_view(id));
    let after = compositor
        .seat
        .count(|e| matches!(e, SeatEvent::KeyboardEnter(_)));
    assert_eq!(enters, after);
}

#[test]
fn test_unmap_passes_focus_to_neighbour() {
    let mut compositor = compositor();
    let (first_id, first) = map(&mut compositor, 1, 800);
    let (second_id, _) = map(&mut compositor, 2, 800);

    assert!(compositor.handle_unmap(second_id));
    assert!(compositor.is_pending(second_id));
    assert_eq!(compositor.focused_view(), Some(first_id));
    assert!(first.state().activated);

    // remapping goes back to the end of the row
    assert!(compositor.handle_map(second_id));
    assert_eq!(compositor.stage.row_views(), vec![first_id, second_id]);
}

#[test]
fn test_destroy_pending_and_mapped() {
    let mut compositor = compositor();
    let pending = compositor.handle_new_toplevel(Box::new(XdgView::new(HeadlessToplevel::new(
        SurfaceId(9),
        Area::new(100, 100),
    ))));
    let (mapped, _) = map(&mut compositor, 1, 800);

    assert!(compositor.handle_destroy(pending));
    assert!(compositor.handle_destroy(mapped));
    assert!(compositor.stage.is_empty());
    assert_eq!(compositor.pending_count(), 0);
    assert!(!compositor.handle_destroy(mapped));
}

#[test]
fn test_map_unknown_view() {
    let mut compositor = compositor();
    assert!(!compositor.handle_map(42));
}

#[test]
fn test_commit_with_new_width_reflows() {
    let mut compositor = compositor();
    let (first_id, first) = map(&mut compositor, 1, 800);
    let (second_id, _) = map(&mut compositor, 2, 400);
    assert!((compositor.stage.target_x(second_id).unwrap() - 880.0).abs() < 0.001);

    first.resize_client(Area::new(600, 972));
    assert!(compositor.handle_commit(first_id));
    assert!((compositor.stage.target_x(second_id).unwrap() - 680.0).abs() < 0.001);

    // nothing changed since
    assert!(!compositor.handle_commit(first_id));
}

#[test]
fn test_destroy_before_focus_keeps_focused_view_on_screen() {
    let mut compositor = Compositor::new(Settings::default(), RecordingSeat::new());
    compositor.handle_new_output(OutputInfo::new("DP-1", Area::new(800, 600)));
    let (first_id, _) = map(&mut compositor, 1, 400);
    map(&mut compositor, 2, 400);
    let (third_id, _) = map(&mut compositor, 3, 400);
    assert_eq!(compositor.focused_view(), Some(third_id));
    assert!((compositor.stage.column_offset().target_scroll - 848.0).abs() < 0.001);

    assert!(compositor.handle_destroy(first_id));
    assert_eq!(compositor.focused_view(), Some(third_id));
    assert_eq!(compositor.stage.focused_view(), Some(third_id));

    let mut renderer = RecordingRenderer::new();
    let start = Instant::now();
    compositor.handle_frame("DP-1", &mut renderer, start);
    compositor.handle_frame("DP-1", &mut renderer, start + Duration::from_secs(1));

    let hit = compositor.stage.find_view(Point::new(400.0, 300.0)).unwrap();
    assert_eq!(hit.view, third_id);
    let x = compositor.stage.view(third_id).unwrap().position().x;
    assert!((x - compositor.stage.column_offset().scroll_x - 56.0).abs() < 0.001);
}

// =============================================================================
// Pointer
// =============================================================================

#[test]
fn test_passthrough_enter_then_motion() {
    let mut compositor = compositor();
    map(&mut compositor, 1, 800);

    let result = compositor.handle_pointer_motion(1, Point::new(500.0, 300.0));
    assert!(result.is_forward());
    assert_eq!(
        compositor.seat.events.last(),
        Some(&SeatEvent::PointerEnter {
            surface: SurfaceId(1),
            local: Point::new(444.0, 246.0),
        })
    );

    compositor.handle_pointer_motion(2, Point::new(10.0, 0.0));
    assert_eq!(
        compositor.seat.events.last(),
        Some(&SeatEvent::PointerMotion {
            local: Point::new(454.0, 246.0),
        })
    );
}

#[test]
fn test_passthrough_miss_clears_pointer_focus_only() {
    let mut compositor = compositor();
    map(&mut compositor, 1, 800);
    compositor.handle_pointer_motion(1, Point::new(500.0, 300.0));

    let result = compositor.handle_pointer_motion(2, Point::new(-480.0, 0.0));
    assert_eq!(result, InputResult::Unhandled);
    assert_eq!(compositor.seat.pointer_focus, None);
    assert_eq!(compositor.seat.keyboard_focus, Some(SurfaceId(1)));
    assert_eq!(compositor.seat.count(|e| *e == SeatEvent::DefaultCursor), 1);
}

#[test]
fn test_click_focuses_view() {
    let mut compositor = compositor();
    let (first_id, _) = map(&mut compositor, 1, 800);
    map(&mut compositor, 2, 800);

    compositor.handle_pointer_motion(1, Point::new(500.0, 300.0));
    let result = compositor.handle_pointer_button(2, BTN_LEFT, ButtonState::Pressed);
    assert!(result.is_forward());
    assert_eq!(compositor.focused_view(), Some(first_id));

    compositor.handle_pointer_button(3, BTN_LEFT, ButtonState::Released);
    assert!(compositor.cursor.mode().is_passthrough());
}

#[test]
fn test_absolute_motion() {
    let mut compositor = compositor();
    map(&mut compositor, 1, 800);

    let result = compositor.handle_pointer_motion_absolute(1, Point::new(0.25, 0.5));
    assert!(result.is_forward());
    assert_eq!(compositor.cursor.position(), Point::new(480.0, 540.0));
}

#[test]
fn test_resize_gesture() {
    let mut compositor = compositor();
    let (id, toplevel) = map(&mut compositor, 1, 800);
    compositor.handle_pointer_motion(1, Point::new(850.0, 300.0));

    assert!(compositor.handle_resize_request(id, Edges::RIGHT));
    assert!(matches!(compositor.cursor.mode(), CursorMode::Resize { .. }));

    let result = compositor.handle_pointer_motion(2, Point::new(100.0, 0.0));
    assert_eq!(result, InputResult::Handled);
    assert_eq!(toplevel.state().geometry, Area::new(900, 972));

    // axis events still reach the client mid-gesture
    let axis = AxisEvent {
        time_ms: 3,
        orientation: plywood_desktop::seat::AxisOrientation::Vertical,
        source: plywood_desktop::seat::AxisSource::Wheel,
        delta: 15.0,
        delta_discrete: 1,
    };
    compositor.handle_pointer_axis(axis);
    assert_eq!(compositor.seat.events.last(), Some(&SeatEvent::PointerAxis(axis)));

    compositor.handle_pointer_button(4, BTN_LEFT, ButtonState::Released);
    assert!(compositor.cursor.mode().is_passthrough());
}

#[test]
fn test_gesture_from_unfocused_view_ignored() {
    let mut compositor = compositor();
    let (first_id, _) = map(&mut compositor, 1, 800);
    map(&mut compositor, 2, 800);

    assert!(!compositor.handle_resize_request(first_id, Edges::LEFT));
    assert!(!compositor.handle_move_request(first_id));
    assert!(compositor.cursor.mode().is_passthrough());
}

#[test]
fn test_move_gesture_does_not_move() {
    let mut compositor = compositor();
    let (id, _) = map(&mut compositor, 1, 800);
    let before = compositor.stage.view(id).unwrap().position();

    assert!(compositor.handle_move_request(id));
    let result = compositor.handle_pointer_motion(1, Point::new(200.0, 200.0));
    assert_eq!(result, InputResult::Handled);
    assert_eq!(compositor.stage.view(id).unwrap().position(), before);
}

// =============================================================================
// Keyboard
// =============================================================================

#[test]
fn test_new_keyboard_uses_settings() {
    let mut compositor = compositor();
    compositor.handle_new_keyboard();
    assert_eq!(
        compositor.seat.events.last(),
        Some(&SeatEvent::ConfigureKeyboard { rate: 25, delay: 600 })
    );
}

#[test]
fn test_logo_right_moves_focus() {
    let mut compositor = compositor();
    let (first_id, _) = map(&mut compositor, 1, 1200);
    let (second_id, _) = map(&mut compositor, 2, 1200);
    compositor.focus_view(first_id);

    compositor.handle_modifiers(Modifiers::LOGO);
    let result = compositor.handle_key(key(Keysym::Right, KeyState::Pressed));
    assert_eq!(result, InputResult::Handled);
    assert_eq!(compositor.focused_view(), Some(second_id));
    assert!((compositor.stage.column_offset().target_scroll - 1224.0).abs() < 0.001);

    // past the last column: focus stays
    compositor.handle_key(key(Keysym::Char('d'), KeyState::Pressed));
    assert_eq!(compositor.focused_view(), Some(second_id));
    assert_eq!(compositor.stage.column_offset().index, 1);
}

#[test]
fn test_unbound_key_is_forwarded() {
    let mut compositor = compositor();
    map(&mut compositor, 1, 800);

    let result = compositor.handle_key(key(Keysym::Char('a'), KeyState::Pressed));
    assert_eq!(result, InputResult::Unhandled);
    assert_eq!(
        compositor.seat.events.last(),
        Some(&SeatEvent::Key {
            keycode: 30,
            state: KeyState::Pressed,
        })
    );

    let result = compositor.handle_key(key(Keysym::Left, KeyState::Released));
    assert_eq!(result, InputResult::Unhandled);
}

// =============================================================================
// Outputs
// =============================================================================

#[test]
fn test_output_hotplug_recenters() {
    let mut compositor = compositor();
    let (_, toplevel) = map(&mut compositor, 1, 800);

    compositor.handle_new_output(OutputInfo::new("DP-2", Area::new(1280, 720)));
    assert_eq!(compositor.stage.cross_axis(), 720);
    assert_eq!(toplevel.state().geometry.height, 648);

    assert!(compositor.handle_output_removed("DP-2").is_some());
    assert_eq!(compositor.stage.cross_axis(), 1080);
    assert_eq!(toplevel.state().geometry.height, 972);

    assert!(compositor.handle_output_mode("DP-1", Area::new(2560, 1440)));
    assert_eq!(compositor.stage.viewport(), Area::new(2560, 1440));
    assert!(!compositor.handle_output_mode("DP-9", Area::new(640, 480)));
}

// =============================================================================
// Frames
// =============================================================================

#[test]
fn test_frame_renders_visible_views() {
    let mut compositor = compositor();
    map(&mut compositor, 1, 800);
    map(&mut compositor, 2, 800);
    map(&mut compositor, 3, 800);

    let mut renderer = RecordingRenderer::new();
    assert!(compositor.handle_frame("DP-1", &mut renderer, Instant::now()));

    assert_eq!(renderer.clears, vec![[0.3, 0.3, 0.3, 1.0]]);
    assert_eq!(renderer.frames, 1);
    // scroll has not moved yet on the first tick
    assert_eq!(renderer.draws.len(), 3);
}

#[test]
fn test_frame_advances_animations() {
    let mut compositor = compositor();
    let (first_id, _) = map(&mut compositor, 1, 1200);
    let (second_id, _) = map(&mut compositor, 2, 1200);
    let (third_id, _) = map(&mut compositor, 3, 1200);
    compositor.focus_view(first_id);
    compositor.handle_unmap(second_id);

    let mut renderer = RecordingRenderer::new();
    let start = Instant::now();
    compositor.handle_frame("DP-1", &mut renderer, start);
    compositor.handle_frame("DP-1", &mut renderer, start + Duration::from_secs(1));

    let x = compositor.stage.view(third_id).unwrap().position().x;
    assert!((x - 1280.0).abs() < 0.001);
    assert!(compositor.scheduler.is_empty());
}

#[test]
fn test_failed_frame_commits_empty() {
    let mut compositor = compositor();
    map(&mut compositor, 1, 800);

    let mut renderer = RecordingRenderer::new();
    renderer.fail_begin = true;
    assert!(!compositor.handle_frame("DP-1", &mut renderer, Instant::now()));
    assert_eq!(renderer.empty_commits, vec!["DP-1".to_string()]);
    assert!(renderer.draws.is_empty());
    assert_eq!(renderer.frames, 0);
}

#[test]
fn test_frame_for_unknown_output() {
    let mut compositor = compositor();
    let mut renderer = RecordingRenderer::new();
    assert!(!compositor.handle_frame("HDMI-A-1", &mut renderer, Instant::now()));
    assert!(renderer.empty_commits.is_empty());
}

#[test]
fn test_snapshot_after_lifecycle() {
    let mut compositor = compositor();
    map(&mut compositor, 1, 800);
    map(&mut compositor, 2, 400);

    let snapshot = compositor.stage.snapshot();
    let json = snapshot.to_json().unwrap();
    assert!(json.contains("\"cross_axis\": 1080"));
    assert_eq!(snapshot.rows[0].views.len(), 2);
}
