//! Server-side rendering of the dashboard page.
//!
//! The page is assembled as a string. Every piece of upstream or user
//! text goes through [`escape_html`]; the scene JSON is embedded in a
//! `<script type="application/json">` block with `<` escaped, so structure
//! text can never close the element early.

use pdbscope_core::config::ViewerConfig;
use pdbscope_core::summary::Metric;
use pdbscope_core::{DashboardView, ProteinSummary, Report, SceneDescription, SceneOutcome};

/// Page title.
pub const TITLE: &str = "Protein analysis dashboard";

/// Shown instead of a report when no identifier was entered.
pub const PROMPT: &str = "👆 Please enter a valid PDB ID in the sidebar.";

/// Legend shown beside the viewer.
pub const AXIS_LEGEND: [&str; 3] = ["🔴 X axis - red", "🟢 Y axis - green", "🔵 Z axis - blue"];

/// Viewer hints shown beside the legend.
pub const VIEWER_HINTS: [&str; 2] = ["📏 Grid: 5Å per division", "🔍 Use the mouse to rotate and zoom"];

/// Caption under the viewer.
pub const CAPTION: &str = "The grid shows 5Å divisions. The X (red), Y (green) and Z (blue) axes have marks every 10Å.";

const STYLE: &str = r#"
body { margin: 0; font-family: "Source Sans Pro", -apple-system, "Segoe UI", sans-serif; color: #0f1116; display: flex; min-height: 100vh; }
.sidebar { width: 18rem; background: #f0f2f6; padding: 2rem 1.5rem; box-sizing: border-box; }
.sidebar input { width: 100%; padding: 0.5rem; font-size: 1rem; box-sizing: border-box; margin: 0.5rem 0; }
.sidebar button { padding: 0.4rem 1rem; font-size: 1rem; }
.main { flex: 1; padding: 2rem; }
.columns { display: flex; gap: 2rem; }
.column { flex: 1; }
.metric-container { background-color: #ffffff; padding: 20px; border-radius: 10px; box-shadow: 0 2px 4px rgba(0,0,0,0.1); margin: 10px 0; }
.metric-label { color: #2c3e50; font-size: 16px; margin-bottom: 8px; }
.metric-value { color: #0066cc; font-size: 24px; font-weight: bold; }
.banner { padding: 1rem; border-radius: 0.5rem; margin: 1rem 0; }
.banner.info { background: #e8f1fb; color: #0b4f8a; }
.banner.warning { background: #fff8e1; color: #7a5b00; }
.banner.error { background: #fdecea; color: #8a1c12; }
.viewer { position: relative; border: 1px solid #e0e0e0; margin: 1rem 0; }
.caption { color: #6b7280; font-size: 0.9rem; }
"#;

const VIEWER_SCRIPT: &str = r#"
(function () {
  var scene = JSON.parse(document.getElementById("pdbscope-scene").textContent);
  var viewer = $3Dmol.createViewer(document.getElementById("pdbscope-viewer"), { backgroundColor: "white" });
  viewer.addModel(scene.model.data, scene.model.format);
  viewer.setStyle({}, scene.style);
  if (scene.show_unit_cell) { viewer.addUnitCell(); }
  scene.annotations.lines.forEach(function (line) {
    var spec = { start: line.start, end: line.end, color: line.color };
    if (line.opacity !== undefined) { spec.opacity = line.opacity; }
    viewer.addLine(spec);
  });
  if (scene.zoom_to) { viewer.zoomTo(); }
  scene.annotations.labels.forEach(function (label) {
    viewer.addLabel(label.text, { position: label.position, fontColor: label.color, fontSize: label.fontSize });
  });
  viewer.render();
})();
"#;

/// Render the whole page.
///
/// `input` is what the side-panel field should show (the raw query value,
/// or the configured default on first load).
pub fn dashboard_page(view: &DashboardView, input: &str, viewer: &ViewerConfig) -> String {
    let mut html = String::with_capacity(8 * 1024);
    html.push_str(&format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{TITLE}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n"
    ));
    sidebar(&mut html, input);

    html.push_str(&format!("<main class=\"main\">\n<h1>🔬 {TITLE}</h1>\n"));
    match view {
        DashboardView::Prompt => banner(&mut html, "info", PROMPT),
        DashboardView::Report(report) => report_body(&mut html, report, viewer),
    }
    html.push_str("</main>\n</body>\n</html>\n");
    html
}

fn sidebar(html: &mut String, input: &str) {
    html.push_str(&format!(
        "<aside class=\"sidebar\">\n<h2>🔍 Find a protein</h2>\n\
         <form method=\"get\" action=\"/\">\n\
         <label for=\"pdb_id\">Enter the protein ID (PDB):</label>\n\
         <input id=\"pdb_id\" name=\"pdb_id\" type=\"text\" value=\"{}\" autocomplete=\"off\">\n\
         <button type=\"submit\">Search</button>\n</form>\n</aside>\n",
        escape_html(input)
    ));
}

fn report_body(html: &mut String, report: &Report, viewer: &ViewerConfig) {
    match &report.summary {
        Ok(summary) => summary_section(html, summary),
        Err(e) => banner(
            html,
            "error",
            &format!("Error fetching protein information: {e}"),
        ),
    }

    match &report.scene {
        SceneOutcome::Ready(scene) => scene_section(html, scene, viewer),
        SceneOutcome::Unavailable { status } => banner(
            html,
            "warning",
            &format!(
                "No structure file available for {} (HTTP {status}).",
                report.pdb_id
            ),
        ),
        SceneOutcome::Failed(e) => banner(
            html,
            "error",
            &format!("Error loading the 3D visualization: {e}"),
        ),
    }
}

fn summary_section(html: &mut String, summary: &ProteinSummary) {
    html.push_str("<h2>🧬 Protein details</h2>\n<div class=\"columns\">\n");
    for column in summary.metric_columns() {
        html.push_str("<div class=\"column\">\n");
        for metric in &column {
            metric_card(html, metric);
        }
        html.push_str("</div>\n");
    }
    html.push_str("</div>\n<h2>3D protein visualization</h2>\n");
}

fn metric_card(html: &mut String, metric: &Metric) {
    html.push_str(&format!(
        "<div class=\"metric-container\"><div class=\"metric-label\">{}</div>\
         <div class=\"metric-value\">{}</div></div>\n",
        escape_html(metric.label),
        escape_html(&metric.value)
    ));
}

fn scene_section(html: &mut String, scene: &SceneDescription, viewer: &ViewerConfig) {
    html.push_str("<div class=\"columns\">\n<div class=\"column\">\n");
    for line in AXIS_LEGEND {
        html.push_str(&format!("<p>{line}</p>\n"));
    }
    html.push_str("</div>\n<div class=\"column\">\n");
    for line in VIEWER_HINTS {
        html.push_str(&format!("<p>{line}</p>\n"));
    }
    html.push_str("</div>\n</div>\n");

    html.push_str(&format!(
        "<div id=\"pdbscope-viewer\" class=\"viewer\" style=\"width: {}px; height: {}px;\"></div>\n",
        scene.viewport.width, scene.viewport.height
    ));
    html.push_str(&format!("<p class=\"caption\">{CAPTION}</p>\n"));

    html.push_str(&format!(
        "<script src=\"{}\"></script>\n\
         <script type=\"application/json\" id=\"pdbscope-scene\">{}</script>\n\
         <script>{VIEWER_SCRIPT}</script>\n",
        escape_html(&viewer.script_url),
        scene_json(scene)
    ));
}

fn banner(html: &mut String, kind: &str, message: &str) {
    html.push_str(&format!(
        "<div class=\"banner {kind}\" role=\"alert\">{}</div>\n",
        escape_html(message)
    ));
}

/// Serialize a scene for embedding inside a `<script>` element.
pub fn scene_json(scene: &SceneDescription) -> String {
    // `<` only ever occurs inside JSON strings, where `\u003c` is equivalent.
    serde_json::to_string(scene)
        .unwrap_or_else(|_| "null".to_string())
        .replace('<', "\\u003c")
}

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pdbscope_core::{Error, PdbId, Viewport};

    fn summary() -> ProteinSummary {
        ProteinSummary {
            name: "UBIQUITIN".to_string(),
            molecular_weight: "8.56 Da".to_string(),
            chain_count: "1".to_string(),
            resolution: "1.8 Å".to_string(),
            experimental_method: "X-RAY DIFFRACTION".to_string(),
            organism: "Homo sapiens".to_string(),
        }
    }

    fn report(summary: pdbscope_core::Result<ProteinSummary>, scene: SceneOutcome) -> DashboardView {
        DashboardView::Report(Report {
            pdb_id: PdbId::parse("1ubq").unwrap(),
            summary,
            scene,
        })
    }

    #[test]
    fn test_prompt_page() {
        let html = dashboard_page(&DashboardView::Prompt, "", &ViewerConfig::default());
        assert!(html.contains(PROMPT));
        assert!(html.contains("banner info"));
        assert!(!html.contains("pdbscope-viewer"));
        assert!(!html.contains("Protein details"));
    }

    #[test]
    fn test_full_report_page() {
        let scene = SceneDescription::from_pdb("ATOM\nEND\n", Viewport::default());
        let view = report(Ok(summary()), SceneOutcome::Ready(scene));
        let html = dashboard_page(&view, "1ubq", &ViewerConfig::default());

        for label in ["Molecular weight", "Chain count", "Resolution", "Experimental method"] {
            assert!(html.contains(label), "missing metric {label}");
        }
        assert!(html.contains("8.56 Da"));
        assert!(html.contains("1.8 Å"));
        assert!(html.contains("3D protein visualization"));
        assert!(html.contains("width: 800px; height: 500px;"));
        assert!(html.contains(CAPTION));
        assert!(html.contains("https://3Dmol.org/build/3Dmol-min.js"));
        for line in AXIS_LEGEND {
            assert!(html.contains(line));
        }
        assert!(html.contains("value=\"1ubq\""));
        assert!(!html.contains("role=\"alert\""));
    }

    #[test]
    fn test_summary_error_still_shows_scene() {
        let scene = SceneDescription::from_pdb("END\n", Viewport::default());
        let view = report(
            Err(Error::status("entry", 404)),
            SceneOutcome::Ready(scene),
        );
        let html = dashboard_page(&view, "1ubq", &ViewerConfig::default());
        assert!(html.contains("Error fetching protein information: entry returned HTTP 404"));
        assert!(!html.contains("Protein details"));
        assert!(html.contains("pdbscope-viewer"));
    }

    #[test]
    fn test_scene_failures() {
        let view = report(Ok(summary()), SceneOutcome::Unavailable { status: 404 });
        let html = dashboard_page(&view, "1ubq", &ViewerConfig::default());
        assert!(html.contains("No structure file available for 1ubq (HTTP 404)."));
        assert!(!html.contains("pdbscope-viewer"));

        let view = report(Ok(summary()), SceneOutcome::Failed(Error::upstream("reset")));
        let html = dashboard_page(&view, "1ubq", &ViewerConfig::default());
        assert!(html.contains("Error loading the 3D visualization: Upstream error: reset"));
    }

    #[test]
    fn test_input_is_escaped() {
        let html = dashboard_page(
            &DashboardView::Prompt,
            "\"><script>alert(1)</script>",
            &ViewerConfig::default(),
        );
        assert!(!html.contains("<script>alert(1)"));
        assert!(html.contains("&quot;&gt;&lt;script&gt;"));
    }

    #[test]
    fn test_scene_json_cannot_close_script() {
        let scene = SceneDescription::from_pdb("REMARK </script><b>x</b>\n", Viewport::default());
        let json = scene_json(&scene);
        assert!(!json.contains("</script"));
        let back: SceneDescription = serde_json::from_str(&json).unwrap();
        assert_eq!(back.model.data, "REMARK </script><b>x</b>\n");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a & b <c> \"d\" 'e'"), "a &amp; b &lt;c&gt; &quot;d&quot; &#39;e&#39;");
        assert_eq!(escape_html("10Å"), "10Å");
    }
}
