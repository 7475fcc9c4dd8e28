use plot_zoom::PlotSurface;
use plot_zoom::core::{Axis, AxisSelector, KeyModifiers, KeyPress, ScreenRect};
use plot_zoom::interaction::{
    CursorIcon, HeadlessPlot, HeadlessWindow, PointerButton, ToolEvent, ToolId, ToolState,
};
use plot_zoom::{ZoomInputConfig, ZoomTool, ZoomToolConfig};

fn build_plot() -> HeadlessPlot {
    HeadlessPlot::linear(
        ScreenRect::new(0.0, 0.0, 100.0, 100.0),
        (0.0, 100.0),
        (0.0, 100.0),
    )
    .expect("plot")
}

fn press(tool: &mut ZoomTool, plot: &mut HeadlessPlot, window: &mut HeadlessWindow, key: &str) {
    let mut event = ToolEvent::key(KeyPress::new(key));
    tool.handle_event(plot, window, &mut event);
}

#[test]
fn press_is_ignored_until_enter_key_arms_the_tool() {
    let mut plot = build_plot();
    let mut window = HeadlessWindow::default();
    let mut tool = ZoomTool::attach(&plot, ZoomToolConfig::boxed(), ZoomInputConfig::default())
        .expect("attach");

    let mut down = ToolEvent::button_down(PointerButton::Left, 10.0, 10.0);
    tool.handle_event(&mut plot, &mut window, &mut down);
    assert!(!down.handled);
    assert_eq!(tool.state(), ToolState::Normal);

    press(&mut tool, &mut plot, &mut window, "z");
    assert!(tool.is_armed());
    assert_eq!(window.cursor, CursorIcon::Magnifier);
    assert_eq!(plot.active_tool(), Some(tool.id()));

    let mut down = ToolEvent::button_down(PointerButton::Left, 10.0, 10.0);
    tool.handle_event(&mut plot, &mut window, &mut down);
    assert!(down.handled);
    assert_eq!(tool.state(), ToolState::Selecting);
}

#[test]
fn completed_zoom_disarms_and_releases_slot() {
    let mut plot = build_plot();
    let mut window = HeadlessWindow::default();
    let mut tool = ZoomTool::attach(&plot, ZoomToolConfig::boxed(), ZoomInputConfig::default())
        .expect("attach");

    press(&mut tool, &mut plot, &mut window, "z");
    let mut down = ToolEvent::button_down(PointerButton::Left, 10.0, 10.0);
    tool.handle_event(&mut plot, &mut window, &mut down);
    let mut up = ToolEvent::button_up(PointerButton::Left, 60.0, 60.0);
    tool.handle_event(&mut plot, &mut window, &mut up);

    assert_eq!(plot.bounds(Axis::X), (10.0, 60.0));
    assert!(!tool.is_armed());
    assert_eq!(plot.active_tool(), None);
    assert_eq!(window.cursor, CursorIcon::Arrow);
    assert_eq!(window.capture, None);
}

#[test]
fn exit_key_disarms_and_frees_slot() {
    let mut plot = build_plot();
    let mut window = HeadlessWindow::default();
    let mut tool = ZoomTool::attach(&plot, ZoomToolConfig::boxed(), ZoomInputConfig::default())
        .expect("attach");

    press(&mut tool, &mut plot, &mut window, "z");
    assert!(tool.is_armed());
    press(&mut tool, &mut plot, &mut window, "Z");
    assert!(!tool.is_armed());
    assert_eq!(plot.active_tool(), None);
    assert_eq!(window.cursor, CursorIcon::Arrow);
}

#[test]
fn enter_key_fails_while_another_tool_holds_slot() {
    let mut plot = build_plot();
    let mut window = HeadlessWindow::default();
    let mut tool = ZoomTool::attach(&plot, ZoomToolConfig::boxed(), ZoomInputConfig::default())
        .expect("attach");
    let other = ToolId::new(999);
    assert!(plot.active_tool_slot().claim(other));

    press(&mut tool, &mut plot, &mut window, "z");
    assert!(!tool.is_armed());
    assert_eq!(plot.active_tool(), Some(other));
    assert_eq!(window.cursor, CursorIcon::Arrow);
}

#[test]
fn always_on_press_does_not_start_while_slot_is_busy() {
    let mut plot = build_plot();
    let mut window = HeadlessWindow::default();
    let mut tool = ZoomTool::attach(&plot, ZoomToolConfig::boxed(), ZoomInputConfig::always_on())
        .expect("attach");
    let other = ToolId::new(999);
    assert!(plot.active_tool_slot().claim(other));

    let mut down = ToolEvent::button_down(PointerButton::Left, 10.0, 10.0);
    tool.handle_event(&mut plot, &mut window, &mut down);

    assert!(!down.handled);
    assert_eq!(tool.state(), ToolState::Normal);
    assert_eq!(window.capture, None);

    assert!(plot.active_tool_slot().release(other));
    let mut down = ToolEvent::button_down(PointerButton::Left, 10.0, 10.0);
    tool.handle_event(&mut plot, &mut window, &mut down);
    assert_eq!(tool.state(), ToolState::Selecting);
}

#[test]
fn cancel_key_aborts_selection_without_zooming() {
    let mut plot = build_plot();
    let mut window = HeadlessWindow::default();
    let mut tool = ZoomTool::attach(&plot, ZoomToolConfig::boxed(), ZoomInputConfig::always_on())
        .expect("attach");

    let mut down = ToolEvent::button_down(PointerButton::Left, 10.0, 10.0);
    tool.handle_event(&mut plot, &mut window, &mut down);
    let mut moved = ToolEvent::pointer_move(70.0, 70.0);
    tool.handle_event(&mut plot, &mut window, &mut moved);

    let mut cancel = ToolEvent::key(KeyPress::new("Esc"));
    tool.handle_event(&mut plot, &mut window, &mut cancel);
    assert!(cancel.handled);
    assert_eq!(tool.state(), ToolState::Normal);
    assert_eq!(tool.session().start, None);
    assert_eq!(tool.session().end, None);

    let mut up = ToolEvent::button_up(PointerButton::Left, 70.0, 70.0);
    tool.handle_event(&mut plot, &mut window, &mut up);
    assert!(!up.handled);
    assert_eq!(plot.bounds(Axis::X), (0.0, 100.0));
    assert_eq!(tool.history().len(), 1);
}

#[test]
fn pointer_leave_aborts_selection() {
    let mut plot = build_plot();
    let mut window = HeadlessWindow::default();
    let mut tool = ZoomTool::attach(
        &plot,
        ZoomToolConfig::range(AxisSelector::Index),
        ZoomInputConfig::always_on(),
    )
    .expect("attach");

    let mut down = ToolEvent::button_down(PointerButton::Left, 10.0, 10.0);
    tool.handle_event(&mut plot, &mut window, &mut down);
    let mut leave = ToolEvent::pointer_leave();
    tool.handle_event(&mut plot, &mut window, &mut leave);

    assert_eq!(tool.state(), ToolState::Normal);
    assert_eq!(window.capture, None);
    assert_eq!(plot.bounds(Axis::X), (0.0, 100.0));
}

#[test]
fn tool_stays_armed_when_not_disabling_on_complete() {
    let mut plot = build_plot();
    let mut window = HeadlessWindow::default();
    let config = ZoomToolConfig::boxed().with_disable_on_complete(false);
    let mut tool = ZoomTool::attach(&plot, config, ZoomInputConfig::default()).expect("attach");

    assert!(tool.enable(&mut plot, &mut window));
    for (from, to) in [((10.0, 10.0), (90.0, 90.0)), ((0.0, 0.0), (50.0, 50.0))] {
        let mut down = ToolEvent::button_down(PointerButton::Left, from.0, from.1);
        tool.handle_event(&mut plot, &mut window, &mut down);
        let mut up = ToolEvent::button_up(PointerButton::Left, to.0, to.1);
        tool.handle_event(&mut plot, &mut window, &mut up);
        assert!(tool.is_armed());
        assert_eq!(tool.state(), ToolState::Normal);
    }

    assert_eq!(tool.history().len(), 3);
    assert_eq!(plot.bounds(Axis::X), (10.0, 50.0));
    assert_eq!(plot.active_tool(), Some(tool.id()));
    assert_eq!(window.cursor, CursorIcon::Magnifier);
}

#[test]
fn always_on_tool_releases_slot_after_each_gesture() {
    let mut plot = build_plot();
    let mut window = HeadlessWindow::default();
    let config = ZoomToolConfig::boxed().with_disable_on_complete(false);
    let mut tool = ZoomTool::attach(&plot, config, ZoomInputConfig::always_on()).expect("attach");

    let mut down = ToolEvent::button_down(PointerButton::Left, 10.0, 10.0);
    tool.handle_event(&mut plot, &mut window, &mut down);
    assert_eq!(plot.active_tool(), Some(tool.id()));
    let mut up = ToolEvent::button_up(PointerButton::Left, 60.0, 60.0);
    tool.handle_event(&mut plot, &mut window, &mut up);

    assert_eq!(plot.active_tool(), None);
    assert!(!tool.is_armed());
}

#[test]
fn deactivate_drops_selection_and_slot() {
    let mut plot = build_plot();
    let mut window = HeadlessWindow::default();
    let mut tool = ZoomTool::attach(&plot, ZoomToolConfig::boxed(), ZoomInputConfig::default())
        .expect("attach");

    assert!(tool.enable(&mut plot, &mut window));
    let mut down = ToolEvent::button_down(PointerButton::Left, 10.0, 10.0);
    tool.handle_event(&mut plot, &mut window, &mut down);
    assert_eq!(tool.state(), ToolState::Selecting);

    tool.deactivate(&mut plot, &mut window);
    assert_eq!(tool.state(), ToolState::Normal);
    assert!(!tool.is_armed());
    assert_eq!(plot.active_tool(), None);
    assert_eq!(window.cursor, CursorIcon::Arrow);
}

#[test]
fn selection_snapshot_follows_gesture() {
    let mut plot = build_plot();
    let mut window = HeadlessWindow::default();
    let mut tool = ZoomTool::attach(
        &plot,
        ZoomToolConfig::range(AxisSelector::Value),
        ZoomInputConfig::always_on(),
    )
    .expect("attach");

    assert!(!tool.selection_snapshot(&plot).selecting);
    let mut down = ToolEvent::button_down(PointerButton::Left, 5.0, 15.0);
    tool.handle_event(&mut plot, &mut window, &mut down);

    let snapshot = tool.selection_snapshot(&plot);
    assert!(snapshot.selecting);
    assert_eq!(snapshot.range_axis, Axis::Y);
    assert_eq!(snapshot.start.map(|p| (p.x, p.y)), Some((5.0, 15.0)));
    assert_eq!(snapshot.end.map(|p| (p.x, p.y)), Some((5.0, 15.0)));
}

#[test]
fn history_keys_work_while_disarmed() {
    let mut plot = build_plot();
    let mut window = HeadlessWindow::default();
    let mut tool = ZoomTool::attach(&plot, ZoomToolConfig::boxed(), ZoomInputConfig::default())
        .expect("attach");

    press(&mut tool, &mut plot, &mut window, "z");
    let mut down = ToolEvent::button_down(PointerButton::Left, 10.0, 10.0);
    tool.handle_event(&mut plot, &mut window, &mut down);
    let mut up = ToolEvent::button_up(PointerButton::Left, 60.0, 60.0);
    tool.handle_event(&mut plot, &mut window, &mut up);
    assert!(!tool.is_armed());
    assert_eq!(tool.history().index(), 1);

    let mut back = ToolEvent::key(KeyPress::new("Left").with_modifiers(KeyModifiers::CONTROL));
    tool.handle_event(&mut plot, &mut window, &mut back);
    assert!(back.handled);
    assert_eq!(tool.history().index(), 0);
    assert_eq!(plot.bounds(Axis::X), (0.0, 100.0));

    let mut forward = ToolEvent::key(KeyPress::new("Right").with_modifiers(KeyModifiers::CONTROL));
    tool.handle_event(&mut plot, &mut window, &mut forward);
    assert!(forward.handled);
    assert_eq!(plot.bounds(Axis::X), (10.0, 60.0));

    let mut reset = ToolEvent::key(KeyPress::new("Esc"));
    tool.handle_event(&mut plot, &mut window, &mut reset);
    assert!(reset.handled);
    assert_eq!(tool.history().len(), 1);
    assert_eq!(plot.bounds(Axis::X), (0.0, 100.0));
    assert!(!tool.is_armed());
    assert_eq!(plot.active_tool(), None);
}
