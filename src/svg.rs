// svg.rs — standalone SVG document for a scene.
use std::fmt::Write;
use crate::config::EditorConfig;
use crate::scene::Scene;

fn rgb([r, g, b]: [u8; 3]) -> String { format!("#{r:02x}{g:02x}{b:02x}") }

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn to_svg(scene: &Scene, cfg: &EditorConfig) -> String {
    let (w, h) = (cfg.view_width, cfg.view_height);
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" width="{w}" height="{h}" preserveAspectRatio="xMidYMid meet">"#);
    let _ = writeln!(out, r#"  <rect width="{w}" height="{h}" fill="{}"/>"#, rgb(cfg.background_color));

    let _ = writeln!(out, r#"  <g stroke="{}" stroke-width="{}" stroke-linecap="round">"#,
        rgb(cfg.line_color), cfg.stroke_width);
    for s in &scene.segments {
        let _ = writeln!(out, r#"    <line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" data-from="{}" data-to="{}"/>"#,
            s.from.x, s.from.y, s.to.x, s.to.y, s.ends.0, s.ends.1);
    }
    let _ = writeln!(out, "  </g>");

    let _ = writeln!(out, "  <g>");
    for m in &scene.markers {
        let fill = if m.active { cfg.active_color } else { cfg.marker_color };
        let _ = writeln!(out, r#"    <circle id="{}" cx="{:.2}" cy="{:.2}" r="{:.2}" fill="{}"/>"#,
            m.landmark, m.center.x, m.center.y, m.radius, rgb(fill));
    }
    let _ = writeln!(out, "  </g>");

    if !scene.labels.is_empty() {
        let _ = writeln!(out, r#"  <g font-family="sans-serif" font-size="8" fill="{}">"#, rgb(cfg.line_color));
        for l in &scene.labels {
            let _ = writeln!(out, r#"    <text x="{:.2}" y="{:.2}">{}</text>"#, l.anchor.x, l.anchor.y, escape(&l.text));
        }
        let _ = writeln!(out, "  </g>");
    }

    out.push_str("</svg>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landmark::{Landmark, Point};
    use crate::scene::Label;
    use crate::skeleton::initialize;

    #[test]
    fn document_shape() {
        let (sk, topo) = initialize().unwrap();
        let cfg = EditorConfig::default();
        let svg = to_svg(&Scene::build(&sk, &topo, &cfg, None), &cfg);
        assert!(svg.starts_with("<svg "));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains(r#"viewBox="0 0 400 600""#));
        assert_eq!(svg.matches("<line ").count(), topo.connections().len());
        assert_eq!(svg.matches("<circle ").count(), 33);
        assert!(!svg.contains("<text"));
    }

    #[test]
    fn markers_carry_landmark_ids_and_positions() {
        let (sk, topo) = initialize().unwrap();
        let cfg = EditorConfig::default();
        let svg = to_svg(&Scene::build(&sk, &topo, &cfg, Some(Landmark::LeftWrist)), &cfg);
        assert!(svg.contains(r##"<circle id="left_wrist" cx="145.00" cy="270.00" r="6.25" fill="#ff32b4"/>"##));
    }

    #[test]
    fn labels_emit_text() {
        let (sk, topo) = initialize().unwrap();
        let cfg = EditorConfig { show_labels: true, ..EditorConfig::default() };
        let svg = to_svg(&Scene::build(&sk, &topo, &cfg, None), &cfg);
        assert_eq!(svg.matches("<text ").count(), 33);
    }

    #[test]
    fn label_text_is_escaped() {
        let scene = Scene {
            labels: vec![Label { text: "hip <L> & \"knee\"".into(), anchor: Point::new(1.0, 2.0) }],
            ..Scene::default()
        };
        let svg = to_svg(&scene, &EditorConfig::default());
        assert!(svg.contains(">hip &lt;L&gt; &amp; &quot;knee&quot;</text>"));
        assert!(!svg.contains("<L>"));
    }
}
