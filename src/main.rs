//! Chartify Tools - command line front end
//!
//! Renders a chart to a local folder (no agent session) or prints the tool
//! declarations an agent host would advertise.

use anyhow::{anyhow, Context, Result};
use chartify_tools::{telemetry, ChartConfig, ChartTools, ToolRegistry};
use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

enum Command {
    Render {
        params: String,
        chart_type: String,
        out: Option<PathBuf>,
    },
    Tools,
}

struct Args {
    command: Command,
    config: Option<PathBuf>,
}

const USAGE: &str = "Usage: chartify-tools <COMMAND> [OPTIONS]

Commands:
  render   Render a chart to a PNG file
  tools    Print the tool declarations as JSON

Render options:
  -p, --params <JSON|@FILE>  JSON with 'df', 'x_col' and 'y_col' (required)
  -t, --type <TYPE>          line, bar, scatter or area (default: line)
  -o, --out <DIR>            Output folder (default: from config, 'charts')

Global options:
  -c, --config <PATH>        Path to a JSON config file
  -h, --help                 Display this help message

Examples:
  chartify-tools render -p '{\"df\": {\"x\": [1, 2, 3], \"y\": [2, 4, 8]}, \"x_col\": \"x\", \"y_col\": \"y\"}' -t bar
  chartify-tools render -p @sales.json -o out/";

fn parse_args() -> Result<Args> {
    let mut args = env::args().skip(1);
    let mut command: Option<String> = None;
    let mut params: Option<String> = None;
    let mut chart_type = "line".to_string();
    let mut out: Option<PathBuf> = None;
    let mut config: Option<PathBuf> = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-p" | "--params" => params = args.next(),
            "-t" | "--type" => {
                if let Some(t) = args.next() {
                    chart_type = t;
                }
            }
            "-o" | "--out" => out = args.next().map(PathBuf::from),
            "-c" | "--config" => config = args.next().map(PathBuf::from),
            "-h" | "--help" => {
                println!("{}", USAGE);
                std::process::exit(0);
            }
            other if command.is_none() && !other.starts_with('-') => {
                command = Some(other.to_string());
            }
            other => return Err(anyhow!("Unknown argument: {}. Use --help for usage.", other)),
        }
    }

    let command = match command.as_deref() {
        Some("render") => {
            let params = params.ok_or_else(|| anyhow!("render requires --params"))?;
            let params = match params.strip_prefix('@') {
                Some(path) => fs::read_to_string(path)
                    .with_context(|| format!("Failed to read params file {}", path))?,
                None => params,
            };
            Command::Render {
                params,
                chart_type,
                out,
            }
        }
        Some("tools") => Command::Tools,
        Some(other) => return Err(anyhow!("Unknown command: {}. Use --help for usage.", other)),
        None => return Err(anyhow!("Missing command. Use --help for usage.")),
    };

    Ok(Args { command, config })
}

fn run() -> Result<bool> {
    let args = parse_args()?;

    let config = match &args.config {
        Some(path) => ChartConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ChartConfig::default().with_env_overrides(),
    };
    let tools = ChartTools::new(config);

    match args.command {
        Command::Render {
            params,
            chart_type,
            out,
        } => {
            let out = out.unwrap_or_else(|| tools.config().save_folder.clone());
            let response = tools.render(&params, &chart_type, out, None);
            println!("{}", serde_json::to_string_pretty(&response.to_value())?);
            Ok(response.is_success())
        }
        Command::Tools => {
            let registry = ToolRegistry::with_chart_tools(tools);
            println!(
                "{}",
                serde_json::to_string_pretty(&registry.get_definitions())?
            );
            Ok(true)
        }
    }
}

fn main() -> ExitCode {
    let _ = telemetry::init_default_tracing();

    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
