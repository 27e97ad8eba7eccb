use std::fs;
use std::path::PathBuf;

use table_chart::api::{ChartConfigBuilder, TableChartSettings, TooltipFormat};
use table_chart::core::{TableElement, TableParser};
use table_chart::telemetry::init_default_tracing;

const USAGE: &str = "usage: table_chart_tool <build|parse|tooltip> --input <path> [--output <path>] [--contract] | tooltip <mode> <value>";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CommandKind {
    Build,
    Parse,
    Tooltip,
}

#[derive(Debug)]
struct CliArgs {
    command: CommandKind,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    contract: bool,
    positional: Vec<String>,
}

fn main() {
    let _ = init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    match args.command {
        CommandKind::Build => {
            let table = read_table(&args)?;
            let settings = TableChartSettings::from_table(&table).map_err(|e| e.to_string())?;
            let parsed = TableParser::parse(&table, settings.kind).map_err(|e| e.to_string())?;
            let configuration = ChartConfigBuilder::default()
                .build(&parsed, settings.kind, &settings.build_options())
                .map_err(|e| e.to_string())?;
            let payload = if args.contract {
                configuration.to_json_contract_v1_pretty()
            } else {
                configuration.to_json_pretty()
            }
            .map_err(|e| e.to_string())?;
            emit(&args, &payload)
        }
        CommandKind::Parse => {
            let table = read_table(&args)?;
            let settings = TableChartSettings::from_table(&table).map_err(|e| e.to_string())?;
            let parsed = TableParser::parse(&table, settings.kind).map_err(|e| e.to_string())?;
            let payload = serde_json::to_string_pretty(&parsed)
                .map_err(|err| format!("failed to serialize json: {err}"))?;
            emit(&args, &payload)
        }
        CommandKind::Tooltip => {
            let [mode, value] = args.positional.as_slice() else {
                return Err(USAGE.to_owned());
            };
            let raw: f64 = value
                .parse()
                .map_err(|err| format!("invalid value `{value}`: {err}"))?;
            println!("{}", TooltipFormat::from_mode(mode).format(raw));
            Ok(())
        }
    }
}

fn read_table(args: &CliArgs) -> Result<TableElement, String> {
    let input = args
        .input
        .as_ref()
        .ok_or_else(|| "missing --input".to_owned())?;
    let raw = fs::read_to_string(input)
        .map_err(|err| format!("failed to read `{}`: {err}", input.display()))?;
    TableElement::from_json_str(&raw).map_err(|e| e.to_string())
}

fn emit(args: &CliArgs, payload: &str) -> Result<(), String> {
    match &args.output {
        Some(path) => fs::write(path, payload)
            .map_err(|err| format!("failed to write `{}`: {err}", path.display())),
        None => {
            println!("{payload}");
            Ok(())
        }
    }
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let command = match args.next().as_deref() {
        Some("build") => CommandKind::Build,
        Some("parse") => CommandKind::Parse,
        Some("tooltip") => CommandKind::Tooltip,
        _ => return Err(USAGE.to_owned()),
    };

    let mut parsed = CliArgs {
        command,
        input: None,
        output: None,
        contract: false,
        positional: Vec::new(),
    };

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--input" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --input".to_owned())?;
                parsed.input = Some(PathBuf::from(value));
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                parsed.output = Some(PathBuf::from(value));
            }
            "--contract" => parsed.contract = true,
            "--help" | "-h" => return Err(USAGE.to_owned()),
            _ if !flag.starts_with("--") => parsed.positional.push(flag),
            other => return Err(format!("unknown flag `{other}`\n{USAGE}")),
        }
    }

    Ok(parsed)
}
