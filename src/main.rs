use std::process::ExitCode;
use std::str::FromStr as _;
use strum::IntoEnumIterator as _;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

use color_picker::config::{self, ColorFormatKind, Preferences};
use color_picker::{parse_color_graceful, ColorValue};

#[derive(Debug, Default)]
struct Options {
    json: bool,
    format: Option<ColorFormatKind>,
    legacy: bool,
    uppercase: bool,
    print_config: bool,
    input: Option<String>,
}

fn usage() -> String {
    let kinds = ColorFormatKind::iter()
        .map(|kind| kind.to_string())
        .collect::<Vec<_>>()
        .join("|");

    format!(
        "Usage: color-picker [--json] [--format <{kinds}>] [--legacy] [--uppercase] <color | random>\n       color-picker --config"
    )
}

fn parse_args(args: impl Iterator<Item = String>) -> Result<Options, String> {
    let mut options = Options::default();
    let mut args = args.peekable();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--json" => options.json = true,
            "--legacy" => options.legacy = true,
            "--uppercase" => options.uppercase = true,
            "--config" => options.print_config = true,
            "--format" | "-f" => {
                let value = args.next().ok_or("--format needs a value")?;
                let kind = ColorFormatKind::from_str(&value)
                    .map_err(|_| format!("Unknown format: {value}"))?;

                options.format = Some(kind);
            },
            "-h" | "--help" => return Err(usage()),
            _ if options.input.is_none() => {
                // Unquoted CSS arrives split on whitespace
                let mut input = arg;
                while let Some(rest) = args.next_if(|next| !next.starts_with("--")) {
                    input.push(' ');
                    input.push_str(&rest);
                }

                options.input = Some(input);
            },
            _ => return Err(format!("Unexpected argument: {arg}")),
        }
    }

    Ok(options)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let options = match parse_args(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::FAILURE;
        },
    };

    let mut preferences = config::read_config().unwrap_or_else(|err| {
        warn!(%err, "Failed to read configuration, using defaults");
        Preferences::default()
    });

    preferences.legacy_syntax |= options.legacy;
    preferences.uppercase_hex |= options.uppercase;

    if options.print_config {
        return match preferences.to_toml() {
            Ok(toml) => {
                print!("{toml}");
                ExitCode::SUCCESS
            },
            Err(err) => {
                error!(%err, "Failed to serialize configuration");
                ExitCode::FAILURE
            },
        };
    }

    let Some(input) = options.input else {
        eprintln!("{}", usage());
        return ExitCode::FAILURE;
    };

    let color = if input.eq_ignore_ascii_case("random") {
        ColorValue::random_avoiding_black_and_white()
    } else if let Some(color) = parse_color_graceful(&input) {
        color
    } else {
        error!(input = %input, "Not a color");
        eprintln!("Not a color: {input}");
        return ExitCode::FAILURE;
    };

    if options.json {
        return match serde_json::to_string_pretty(&color.all_formats()) {
            Ok(json) => {
                println!("{json}");
                ExitCode::SUCCESS
            },
            Err(err) => {
                error!(%err, "Failed to serialize color");
                ExitCode::FAILURE
            },
        };
    }

    match options.format {
        Some(kind) => println!("{}", color.format(preferences.color_format(kind))),
        None => {
            for kind in &preferences.shown_formats {
                println!("{}: {}", kind.title(), color.format(preferences.color_format(*kind)));
            }
        },
    }

    ExitCode::SUCCESS
}
