mod common;

use chartify_tools::tools::RenderOutput;
use chartify_tools::{Artifact, ArtifactStore, ToolError, ToolStatus};
use common::{sales_params, small_tools, Session};
use serde_json::Value;

#[test]
fn load_returns_tracked_metadata() {
    let mut session = Session::new();
    let tools = small_tools();
    let rendered = tools.render(&sales_params(), "scatter", "charts", Some(&mut session.ctx()));
    let Some(RenderOutput::Artifact { artifact_name, .. }) = rendered.data else {
        panic!("expected artifact output: {}", rendered.message);
    };

    let response = tools.load_chart(&artifact_name, Some(&session.ctx()));
    assert_eq!(response.status, ToolStatus::Success);
    assert_eq!(
        response.message,
        format!("Chart '{}' loaded successfully", artifact_name)
    );

    let loaded = response.data.expect("loaded chart");
    assert_eq!(loaded.chart_filename, artifact_name);
    assert_eq!(loaded.mime_type, "image/png");
    let info = loaded.chart_info.expect("tracked record");
    assert_eq!(info.filename, artifact_name);
    assert_eq!(info.chart_type, "scatter");
}

#[test]
fn load_of_unknown_chart_is_not_found() {
    let mut session = Session::new();
    let tools = small_tools();

    let response = tools.load_chart("line_y_vs_x_20240101_000000.png", Some(&session.ctx()));
    assert_eq!(response.status, ToolStatus::Error);
    assert_eq!(
        response.error,
        Some(ToolError::NotFound("line_y_vs_x_20240101_000000.png".into()))
    );
    assert_eq!(
        response.message,
        "Chart 'line_y_vs_x_20240101_000000.png' not found in artifacts"
    );
    assert!(response.data.is_none());
}

#[test]
fn untracked_artifact_loads_with_null_metadata() {
    let mut session = Session::new();
    session
        .artifacts
        .save("manual.png", Artifact::new(vec![1, 2, 3], "image/png"))
        .expect("save");

    let response = small_tools().load_chart("manual.png", Some(&session.ctx()));
    assert!(response.is_success(), "{}", response.message);
    assert_eq!(response.to_value()["chart_info"], Value::Null);
}

#[test]
fn mime_type_defaults_to_png() {
    let mut session = Session::new();
    session
        .artifacts
        .save(
            "bare.png",
            Artifact {
                data: vec![0],
                mime_type: None,
            },
        )
        .expect("save");

    let loaded = small_tools()
        .load_chart("bare.png", Some(&session.ctx()))
        .data
        .expect("loaded chart");
    assert_eq!(loaded.mime_type, "image/png");
}

#[test]
fn load_requires_context() {
    let response = small_tools().load_chart("any.png", None);
    assert_eq!(
        response.error,
        Some(ToolError::ContextRequired("artifact access"))
    );
}
