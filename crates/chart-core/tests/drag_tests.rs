use chart_core::generators::generate_grid;
use chart_core::*;

fn layout() -> LayoutState {
    LayoutState::new(generate_grid(4, 7, Orientation::Landscape))
}

#[test]
fn test_drag_moves_ten_millimetres() {
    let geometry = Orientation::Landscape.geometry();
    let rendered_width = 891.0;
    let mut layout = layout();
    let mut drag = DragController::new();

    let (x0, y0) = {
        let l = layout.get(3).unwrap();
        (l.x, l.y)
    };
    assert!(drag.pointer_down(&mut layout, 3, (400.0, 300.0)));
    assert_eq!(layout.selected(), Some(3));

    let px = rendered_width / geometry.width_mm * 10.0;
    let moved = drag
        .pointer_move(&mut layout, (400.0 + px, 300.0), rendered_width, geometry)
        .unwrap();

    assert_eq!(moved, (round_tenth(x0 + 10.0), round_tenth(y0)));
    let letter = layout.get(3).unwrap();
    assert_eq!((letter.x, letter.y), moved);
}

#[test]
fn test_drag_clamps_to_page() {
    let geometry = Orientation::Landscape.geometry();
    let mut layout = layout();
    let mut drag = DragController::new();

    drag.pointer_down(&mut layout, 0, (0.0, 0.0));
    let moved = drag
        .pointer_move(&mut layout, (-10_000.0, 10_000.0), 594.0, geometry)
        .unwrap();
    assert_eq!(moved, (0.0, 210.0));

    let moved = drag
        .pointer_move(&mut layout, (10_000.0, -10_000.0), 594.0, geometry)
        .unwrap();
    assert_eq!(moved, (297.0, 0.0));
}

#[test]
fn test_drag_rounds_to_one_decimal() {
    let geometry = Orientation::Landscape.geometry();
    let mut layout = LayoutState::new(vec![PositionedCharacter::new(0, 'A', 100.0, 100.0, 12.0)]);
    let mut drag = DragController::new();

    drag.pointer_down(&mut layout, 0, (0.0, 0.0));
    // 1 px = 0.5 mm at 594 px wide
    let moved = drag
        .pointer_move(&mut layout, (0.13, 0.27), 594.0, geometry)
        .unwrap();
    assert_eq!(moved, (100.1, 100.1));
}

#[test]
fn test_drag_moves_are_relative_to_start() {
    let geometry = Orientation::Landscape.geometry();
    let mut layout = LayoutState::new(vec![PositionedCharacter::new(0, 'A', 100.0, 100.0, 12.0)]);
    let mut drag = DragController::new();

    drag.pointer_down(&mut layout, 0, (50.0, 50.0));
    drag.pointer_move(&mut layout, (70.0, 50.0), 594.0, geometry);
    let moved = drag
        .pointer_move(&mut layout, (60.0, 50.0), 594.0, geometry)
        .unwrap();
    assert_eq!(moved, (105.0, 100.0));
}

#[test]
fn test_move_ignored_when_idle_or_unrendered() {
    let geometry = Orientation::Landscape.geometry();
    let mut layout = layout();
    let before = layout.clone();
    let mut drag = DragController::new();

    assert!(drag.pointer_move(&mut layout, (10.0, 10.0), 594.0, geometry).is_none());

    drag.pointer_down(&mut layout, 1, (0.0, 0.0));
    assert!(drag.pointer_move(&mut layout, (10.0, 10.0), 0.0, geometry).is_none());
    assert_eq!(layout.letters(), before.letters());

    drag.pointer_up();
    assert_eq!(drag.state(), DragState::Idle);
    assert!(drag.pointer_move(&mut layout, (10.0, 10.0), 594.0, geometry).is_none());
}

#[test]
fn test_pointer_down_on_unknown_id() {
    let mut layout = layout();
    let mut drag = DragController::new();
    assert!(!drag.pointer_down(&mut layout, 999, (0.0, 0.0)));
    assert!(!drag.is_dragging());
    assert_eq!(layout.selected(), None);
}
