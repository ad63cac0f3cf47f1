// main.rs
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod ui_canvas;
mod ui_panels;

use clap::Parser;
use eframe::egui;
use std::path::PathBuf;
use pose_editor::config::EditorConfig;
use pose_editor::editor::PoseEditor;

#[derive(Parser)]
#[command(about = "Drag anatomical landmarks under reach constraints and measure joint angles")]
struct Opts {
    /// JSON file with editor settings.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().init();

    let opts = Opts::parse();
    let config = EditorConfig::load_or_default(opts.config.as_deref());
    let editor = PoseEditor::new()?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 860.0])
            .with_min_inner_size([700.0, 560.0]),
        centered: true,
        ..Default::default()
    };

    eframe::run_native(
        "Pose Editor",
        options,
        Box::new(move |cc| Ok(Box::new(app::PoseEditorApp::new(cc, editor, config)))),
    )?;
    Ok(())
}
