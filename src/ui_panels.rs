// ui_panels.rs
use egui::{Ui, CollapsingHeader, Grid, RichText};
use pose_editor::drag::DragState;
use crate::app::PoseEditorApp;

pub fn render_controls(app: &mut PoseEditorApp, ui: &mut Ui) {
    ui.add_space(4.0);
    ui.horizontal(|ui| {
        if ui.button("📐 Compute angles").clicked() { app.editor.compute_angles(); }
        if ui.button("↺ Reset pose").clicked() {
            app.editor.reset();
            app.set_status("Pose reset", 2.0);
        }
    });
    ui.horizontal(|ui| {
        if ui.button("💾 Export JSON").clicked() { app.export_json(); }
        if ui.button("🖼 Export SVG").clicked() { app.export_svg(); }
    });
    ui.checkbox(&mut app.config.show_labels, "Show landmark names");
    ui.separator();

    CollapsingHeader::new(RichText::new("Joint angles").strong()).default_open(true).show(ui, |ui| {
        render_angle_table(app, ui);
    });
    ui.separator();

    CollapsingHeader::new(RichText::new("Interaction").strong()).default_open(false).show(ui, |ui| {
        Grid::new("interaction").num_columns(2).spacing([8.0, 4.0]).show(ui, |ui| {
            ui.label("State:");
            ui.label(match app.editor.drag_state() {
                DragState::Idle => "Idle".to_string(),
                DragState::Dragging(l) => format!("Dragging {}", l.label()),
            });
            ui.end_row();
            ui.label("Zoom:");
            ui.label(format!("{:.0}%", app.canvas_state.view.scale * 100.0));
            ui.end_row();
        });
    });
}

fn render_angle_table(app: &PoseEditorApp, ui: &mut Ui) {
    let Some(angles) = app.editor.angles() else {
        ui.label(RichText::new("Press \"Compute angles\" to measure the current pose.").weak());
        return;
    };
    Grid::new("angles").num_columns(2).striped(true).spacing([12.0, 4.0]).show(ui, |ui| {
        for (angle, deg) in angles.iter() {
            ui.label(angle.vertex().label());
            ui.label(RichText::new(format!("{deg:.2}°")).monospace());
            ui.end_row();
        }
    });
}
