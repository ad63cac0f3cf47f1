use egui::{Context, CentralPanel, SidePanel, TopBottomPanel, RichText, Key};
use std::path::PathBuf;
use pose_editor::config::EditorConfig;
use pose_editor::editor::PoseEditor;
use crate::ui_canvas::{draw_pose_canvas, CanvasState};

pub struct PoseEditorApp {
    pub editor:         PoseEditor,
    pub config:         EditorConfig,
    pub canvas_state:   CanvasState,
    pub status_message: String,
    pub status_timer:   f32,
}

impl PoseEditorApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, editor: PoseEditor, config: EditorConfig) -> Self {
        Self {
            editor,
            config,
            canvas_state: CanvasState::default(),
            status_message: String::new(),
            status_timer: 0.0,
        }
    }

    pub fn set_status(&mut self, msg: &str, dur: f32) {
        self.status_message = msg.to_string(); self.status_timer = dur;
    }

    fn write_export(&mut self, file_name: &str, contents: &str) {
        let dir = &self.config.export_dir;
        let path: PathBuf = dir.join(file_name);
        let result = std::fs::create_dir_all(dir).and_then(|_| std::fs::write(&path, contents));
        match result {
            Ok(()) => {
                tracing::info!(path = %path.display(), "export written");
                self.set_status(&format!("Saved {}", path.display()), 3.0);
            }
            Err(e) => {
                tracing::error!(path = %path.display(), "export failed: {e}");
                self.set_status(&format!("Error: {e}"), 4.0);
            }
        }
    }

    pub fn export_json(&mut self) {
        match self.editor.export_json() {
            Ok(json) => self.write_export("pose.json", &json),
            Err(e) => {
                tracing::error!("export failed: {e}");
                self.set_status(&format!("Error: {e}"), 4.0);
            }
        }
    }

    pub fn export_svg(&mut self) {
        let svg = self.editor.export_svg(&self.config);
        self.write_export("pose.svg", &svg);
    }
}

impl eframe::App for PoseEditorApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.key_pressed(Key::Enter)) { self.editor.compute_angles(); }
        if ctx.input(|i| i.modifiers.command && i.key_pressed(Key::R)) {
            self.editor.reset();
            self.set_status("Pose reset", 2.0);
        }

        TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new("Pose Editor").strong().size(16.0));
                ui.separator();
                ui.label(RichText::new("Drag a landmark · Enter computes angles · Ctrl+R resets").weak());
            });
        });

        SidePanel::left("controls").min_width(260.0).max_width(360.0).show(ctx, |ui| {
            crate::ui_panels::render_controls(self, ui);
        });

        CentralPanel::default().show(ctx, |ui| {
            let size = ui.available_size();
            draw_pose_canvas(ui, &mut self.editor, &mut self.canvas_state, &self.config,
                size, &self.status_message, self.status_timer);
        });

        if self.status_timer > 0.0 {
            self.status_timer -= ctx.input(|i| i.stable_dt);
            if self.status_timer <= 0.0 { self.status_message.clear(); }
            ctx.request_repaint();
        }
    }
}
