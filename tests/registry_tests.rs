mod common;

use chartify_tools::ToolRegistry;
use common::{small_tools, temp_dir, Session};
use serde_json::json;

#[test]
fn registry_declares_the_four_chart_tools() {
    let registry = ToolRegistry::with_chart_tools(small_tools());
    let names: Vec<String> = registry
        .get_definitions()
        .into_iter()
        .map(|d| d.name)
        .collect();
    assert_eq!(
        names,
        vec![
            "delete_chart_tool",
            "list_charts_tool",
            "load_chart_tool",
            "plot_tool"
        ]
    );

    let plot = registry
        .get_definitions()
        .into_iter()
        .find(|d| d.name == "plot_tool")
        .expect("plot tool");
    assert_eq!(plot.parameters["required"], json!(["params"]));
}

#[test]
fn session_round_trip_through_the_registry() {
    let mut session = Session::new();
    let registry = ToolRegistry::with_chart_tools(small_tools());

    // params given as an object rather than a JSON string
    let rendered = registry.execute(
        "plot_tool",
        &json!({
            "params": {
                "df": {"day": [1, 2, 3], "visits": [10, 30, 20]},
                "x_col": "day",
                "y_col": "visits"
            },
            "chart_type": "area"
        }),
        Some(&mut session.ctx()),
    );
    assert_eq!(rendered["status"], "success", "{}", rendered);
    assert_eq!(rendered["chart_type"], "area");
    let name = rendered["artifact_name"].as_str().expect("artifact name").to_string();

    let listed = registry.execute("list_charts_tool", &json!({}), Some(&mut session.ctx()));
    assert_eq!(listed["total_charts"], 1);
    assert_eq!(listed["chart_artifacts"], json!([name.clone()]));
    assert_eq!(listed["charts_history"][0]["filename"], name.as_str());

    let loaded = registry.execute(
        "load_chart_tool",
        &json!({"chart_filename": name.clone()}),
        Some(&mut session.ctx()),
    );
    assert_eq!(loaded["status"], "success");
    assert_eq!(loaded["mime_type"], "image/png");

    let deleted = registry.execute(
        "delete_chart_tool",
        &json!({"chart_filename": name.clone()}),
        Some(&mut session.ctx()),
    );
    assert_eq!(deleted["status"], "success");

    let again = registry.execute(
        "delete_chart_tool",
        &json!({"chart_filename": name}),
        Some(&mut session.ctx()),
    );
    assert_eq!(again["status"], "warning");
}

#[test]
fn plot_tool_defaults_to_line_and_writes_to_save_folder() {
    let dir = temp_dir("registry");
    let registry = ToolRegistry::with_chart_tools(small_tools());

    let params = json!({"df": {"a": [1, 2], "b": [3, 4]}, "x_col": "a", "y_col": "b"}).to_string();
    let result = registry.execute(
        "plot_tool",
        &json!({"params": params, "save_folder": dir.to_string_lossy()}),
        None,
    );

    assert_eq!(result["status"], "success", "{}", result);
    assert_eq!(result["chart_type"], "line");
    let filepath = result["filepath"].as_str().expect("filepath");
    assert!(std::path::Path::new(filepath).is_file());

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn missing_arguments_and_unknown_tools_are_errors() {
    let registry = ToolRegistry::with_chart_tools(small_tools());

    let no_params = registry.execute("plot_tool", &json!({}), None);
    assert_eq!(
        no_params,
        json!({"status": "error", "message": "Missing required argument 'params'"})
    );

    let no_name = registry.execute("load_chart_tool", &json!({}), None);
    assert_eq!(no_name["status"], "error");

    let unknown = registry.execute("pie_tool", &json!({}), None);
    assert_eq!(
        unknown,
        json!({"status": "error", "message": "Tool 'pie_tool' not found"})
    );
}

#[test]
fn session_tools_without_context_report_context_required() {
    let registry = ToolRegistry::with_chart_tools(small_tools());

    for (tool, args) in [
        ("list_charts_tool", json!({})),
        ("load_chart_tool", json!({"chart_filename": "a.png"})),
        ("delete_chart_tool", json!({"chart_filename": "a.png"})),
    ] {
        let result = registry.execute(tool, &args, None);
        assert_eq!(result["status"], "error", "{}", tool);
        assert!(result["message"]
            .as_str()
            .expect("message")
            .starts_with("ToolContext required"));
    }
}
