// ui_canvas.rs
use egui::{Vec2, Pos2, Color32, Stroke, Response, Ui, Rect};
use pose_editor::config::EditorConfig;
use pose_editor::editor::PoseEditor;
use pose_editor::landmark::Point;
use pose_editor::scene::Marker;
use pose_editor::view::ViewTransform;

#[derive(Default)]
pub struct CanvasState {
    pub view: ViewTransform,
}

fn pos(p: Point) -> Pos2 { Pos2::new(p.x, p.y) }
fn point(p: Pos2) -> Point { Point::new(p.x, p.y) }
fn color32([r, g, b]: [u8; 3]) -> Color32 { Color32::from_rgb(r, g, b) }

pub fn draw_pose_canvas(
    ui: &mut Ui, editor: &mut PoseEditor, canvas_state: &mut CanvasState, cfg: &EditorConfig,
    available_size: Vec2, status_message: &str, status_timer: f32,
) -> Response {
    let (response, painter) = ui.allocate_painter(available_size, egui::Sense::click_and_drag());
    let rect = response.rect;

    painter.rect_filled(rect, 0.0, color32(cfg.background_color));

    let view = ViewTransform::fit(cfg.view_width, cfg.view_height, point(rect.min), Point::new(rect.width(), rect.height()));
    canvas_state.view = view;
    let to_screen = |p: Point| pos(view.to_screen(p));

    // Diagram bounds
    painter.rect_stroke(
        Rect::from_min_max(to_screen(Point::ZERO), to_screen(Point::new(cfg.view_width, cfg.view_height))),
        0.0, Stroke::new(1.0, Color32::from_gray(40)), egui::StrokeKind::Inside,
    );

    // Capture on raw press so small landmarks are not missed behind the drag threshold.
    let just_pressed = response.hovered() && ui.input(|i| i.pointer.primary_pressed());
    if just_pressed {
        if let Some(p) = ui.input(|i| i.pointer.interact_pos()) {
            editor.pointer_down_at(view.to_local(point(p)), cfg.hit_radius);
        }
    }
    if response.dragged() {
        if let Some(p) = response.interact_pointer_pos() {
            if rect.contains(p) {
                editor.pointer_move(point(p), view.screen_to_local());
            } else {
                editor.pointer_leave();
            }
        }
    }
    if response.drag_stopped() || ui.input(|i| i.pointer.primary_released()) { editor.pointer_up(); }

    let scene = editor.scene(cfg);
    let sw = cfg.stroke_width * view.scale;
    for seg in &scene.segments {
        painter.line_segment([to_screen(seg.from), to_screen(seg.to)], Stroke::new(sw, color32(cfg.line_color)));
    }
    for marker in &scene.markers {
        draw_joint_handle(&painter, to_screen(marker.center), marker, view.scale, cfg);
    }
    for label in &scene.labels {
        painter.text(to_screen(label.anchor), egui::Align2::LEFT_BOTTOM, &label.text,
            egui::FontId::proportional(10.0), Color32::from_rgb(240, 240, 255));
    }
    if let Some(active) = editor.active() {
        let p = to_screen(editor.skeleton().get(active));
        draw_name_tag(&painter, p, &active.label());
    }

    if !status_message.is_empty() && status_timer > 0.0 {
        draw_status_bar(&painter, rect, status_message, status_timer, cfg);
    }

    response
}

/// Strip along the bottom edge of the canvas with an accent bar on the left.
/// Fades out over the last 0.3 s of `timer`.
fn draw_status_bar(painter: &egui::Painter, rect: Rect, msg: &str, timer: f32, cfg: &EditorConfig) {
    let fade = (timer / 0.3).clamp(0.0, 1.0);
    let accent = if msg.starts_with("Error") { Color32::from_rgb(230, 90, 70) } else { color32(cfg.active_color) };
    let galley = painter.layout_no_wrap(msg.to_string(), egui::FontId::monospace(12.0),
        Color32::from_gray(230).gamma_multiply(fade));

    let height = galley.size().y + 10.0;
    let width = (galley.size().x + 28.0).min(rect.width());
    let bar = Rect::from_min_size(Pos2::new(rect.center().x - width / 2.0, rect.max.y - height - 10.0), Vec2::new(width, height));

    painter.rect_filled(bar, 3.0, Color32::from_black_alpha(200).gamma_multiply(fade));
    painter.rect_filled(Rect::from_min_size(bar.min, Vec2::new(4.0, height)), 0.0, accent.gamma_multiply(fade));
    painter.galley(bar.min + Vec2::new(16.0, 5.0), galley, Color32::PLACEHOLDER);
}

fn draw_joint_handle(painter: &egui::Painter, p: Pos2, marker: &Marker, scale: f32, cfg: &EditorConfig) {
    let r = (marker.radius * scale).max(3.0);
    let fill = color32(if marker.active { cfg.active_color } else { cfg.marker_color });
    let stroke_col = if marker.active { Color32::WHITE } else {
        Color32::from_rgb(
            (fill.r() as u16 + 60).min(255) as u8,
            (fill.g() as u16 + 60).min(255) as u8,
            (fill.b() as u16 + 60).min(255) as u8,
        )
    };

    painter.circle_filled(p + Vec2::new(1.0, 1.0), r + 2.0,
        Color32::from_rgba_premultiplied(fill.r() / 2, fill.g() / 2, fill.b() / 2, 80));
    painter.circle_filled(p, r, fill);
    painter.circle_stroke(p, r, Stroke::new(1.5, stroke_col));
}

fn draw_name_tag(painter: &egui::Painter, p: Pos2, text: &str) {
    let col = Color32::from_rgb(240, 240, 255);
    let galley = painter.layout_no_wrap(text.to_string(), egui::FontId::proportional(11.0), col);
    let tp = p + Vec2::new(12.0, -8.0);
    let bg = Rect::from_min_size(tp - Vec2::new(2.0, 1.0), galley.size() + Vec2::new(6.0, 3.0));
    painter.rect_filled(bg, 3.0, Color32::from_rgba_premultiplied(20, 30, 50, 200));
    painter.rect_stroke(bg, 3.0, Stroke::new(1.0, Color32::from_rgb(100, 140, 200)), egui::StrokeKind::Inside);
    painter.galley(tp + Vec2::new(2.0, 1.0), galley, col);
}
