mod report;

use chrono::NaiveDateTime;
use posologia::{Context, DeriveOptions, Options, Reminder, derive, extract_with};
use std::io::{self, IsTerminal, Read};

const DEFAULT_REFERENCE: &str = "2025-06-01T08:00:00";

fn main() {
    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let ctx = Context { reference_time: config.reference_time };
    let opts = Options::default();
    let res = extract_with(&config.input, &opts);

    let derive_opts = DeriveOptions { skip_days: config.skip_days, ..DeriveOptions::default() };
    let reminders: Vec<Reminder> = res
        .medications
        .iter()
        .map(|med| Reminder { rule: derive(med, &derive_opts, &ctx), medication: med.clone() })
        .collect();

    report::print_run(&res, &reminders, config.reference_time, config.color);
}

struct CliConfig {
    input: String,
    reference_time: NaiveDateTime,
    skip_days: u32,
    color: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut input: Option<String> = None;
    let mut reference_time = parse_reference(DEFAULT_REFERENCE)?;
    let mut skip_days = 0u32;
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1).peekable();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("posologia {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--reference" => {
                let value = args.next().ok_or_else(|| "error: --reference expects a value".to_string())?;
                reference_time = parse_reference(&value)?;
            }
            "--skip" => {
                let value = args.next().ok_or_else(|| "error: --skip expects a value".to_string())?;
                skip_days = parse_skip(&value)?;
            }
            "--input" | "-i" => {
                let value = args.next().ok_or_else(|| "error: --input expects a value".to_string())?;
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(value);
            }
            "--" => {
                let rest = args.collect::<Vec<_>>().join(" ");
                if !rest.trim().is_empty() {
                    if input.is_some() {
                        return Err("error: input provided multiple times".to_string());
                    }
                    input = Some(rest);
                }
                break;
            }
            _ if arg.starts_with("--reference=") => {
                let value = arg.trim_start_matches("--reference=");
                reference_time = parse_reference(value)?;
            }
            _ if arg.starts_with("--skip=") => {
                let value = arg.trim_start_matches("--skip=");
                skip_days = parse_skip(value)?;
            }
            _ if arg.starts_with("--input=") => {
                let value = arg.trim_start_matches("--input=");
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(value.to_string());
            }
            _ if arg.starts_with('-') => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                let rest = std::iter::once(arg).chain(args).collect::<Vec<_>>().join(" ");
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(rest);
                break;
            }
        }
    }

    let input = match input {
        Some(value) => value,
        None => read_stdin_input()?,
    };

    if input.trim().is_empty() {
        return Err(format!("error: no input provided\n\n{}", help_text()));
    }

    Ok(CliConfig { input, reference_time, skip_days, color })
}

fn read_stdin_input() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    Ok(buffer)
}

fn parse_reference(value: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .map_err(|_| format!("error: invalid --reference '{value}' (expected YYYY-MM-DDTHH:MM:SS)"))
}

fn parse_skip(value: &str) -> Result<u32, String> {
    value.parse::<u32>().map_err(|_| format!("error: invalid --skip '{value}' (expected a day count)"))
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "posologia {version}

Prescription medication extraction and schedule derivation CLI.

Usage:
  posologia [OPTIONS] [--] <text...>
  posologia [OPTIONS] --input <text>

Options:
  -i, --input <text>         Prescription text to process. If omitted, reads
                             remaining args or stdin when no args are provided.
  --reference <timestamp>    Reference time in YYYY-MM-DDTHH:MM:SS; schedules
                             start on this date. Default: {default_reference}
  --skip <days>              Skip interval between active days (0 = every day).
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Exit codes:
  0  Success.
  1  Internal error.
  2  Invalid arguments or missing input.
",
        version = env!("CARGO_PKG_VERSION"),
        default_reference = DEFAULT_REFERENCE
    )
}
