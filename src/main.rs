//! Linecalc - A line-by-line calculator

mod config;
mod logger;
mod render;

use anyhow::{Context, Result, bail};
use linecalc_core::{Document, Line};
use std::env;
use std::io::{self, Read};
use std::path::PathBuf;

fn print_usage() {
    eprintln!("Usage: linecalc [OPTIONS] [FILE]");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  [FILE]                    Calculator document, one expression per line");
    eprintln!("                            (reads stdin when omitted)");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -c, --command <LINE>      Evaluate LINE and print only results (can be repeated)");
    eprintln!("  --vars                    Print variables after the last line");
    eprintln!("  --json                    Print lines with results as JSON");
    eprintln!("  --config <FILE>           Load settings from TOML file");
    eprintln!("  -v                        More logging (-v debug, -vv trace)");
    eprintln!("  -h, --help                Print help");
}

#[derive(Debug, Default)]
struct Options {
    file_path: Option<PathBuf>,
    commands: Vec<String>,
    show_vars: bool,
    json: bool,
    config_file: Option<PathBuf>,
    verbosity: u8,
}

/// Returns `None` when help was requested.
fn parse_args(args: &[String]) -> Result<Option<Options>> {
    let mut opts = Options::default();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => return Ok(None),
            "-c" | "--command" => {
                i += 1;
                let Some(line) = args.get(i) else {
                    bail!("--command requires a value");
                };
                opts.commands.push(line.clone());
            }
            "--vars" => opts.show_vars = true,
            "--json" => opts.json = true,
            "--config" => {
                i += 1;
                let Some(path) = args.get(i) else {
                    bail!("--config requires a file path");
                };
                opts.config_file = Some(PathBuf::from(path));
            }
            "-v" | "--verbose" => opts.verbosity = opts.verbosity.saturating_add(1),
            "-vv" => opts.verbosity = opts.verbosity.saturating_add(2),
            arg if arg.starts_with('-') && arg != "-" => bail!("Unknown option: {}", arg),
            arg => {
                if opts.file_path.is_some() {
                    bail!("Unexpected argument: {}", arg);
                }
                opts.file_path = Some(PathBuf::from(arg));
            }
        }
        i += 1;
    }

    if opts.file_path.is_some() && !opts.commands.is_empty() {
        bail!("--command cannot be combined with a FILE");
    }
    if opts.json && opts.show_vars {
        bail!("--json cannot be combined with --vars");
    }
    Ok(Some(opts))
}

fn run(opts: Options) -> Result<()> {
    let (config, mut warnings) = config::load_config(opts.config_file.as_deref());
    let (level, level_warning) = logger::level_for(opts.verbosity, config.log_level.as_deref());
    warnings.extend(level_warning);
    logger::init(level);
    for warning in warnings {
        eprintln!("Warning: {}", warning);
    }

    let command_mode = !opts.commands.is_empty();
    let mut doc = if command_mode {
        let lines = opts
            .commands
            .iter()
            .enumerate()
            .map(|(i, command)| Line::new(i as i64, command))
            .collect();
        Document::from_lines(lines)?
    } else {
        match opts.file_path.as_deref() {
            Some(path) if path.as_os_str() != "-" => {
                let mut doc = Document::new();
                doc.load_file(path)
                    .with_context(|| format!("failed to read {}", path.display()))?;
                doc
            }
            _ => {
                let mut content = String::new();
                io::stdin()
                    .read_to_string(&mut content)
                    .context("failed to read stdin")?;
                Document::from_text(&content)
            }
        }
    };

    doc.recalculate();

    if opts.json {
        let json = serde_json::to_string_pretty(doc.lines()).context("failed to encode JSON")?;
        println!("{}", json);
    } else if command_mode {
        print!("{}", render::render_results(doc.lines()));
    } else {
        print!("{}", render::render_lines(doc.lines(), &config));
    }
    if opts.show_vars {
        print!("{}", render::render_variables(doc.variables()));
    }
    Ok(())
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    let opts = match parse_args(&args) {
        Ok(Some(opts)) => opts,
        Ok(None) => {
            print_usage();
            return;
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            print_usage();
            std::process::exit(1);
        }
    };

    if let Err(e) = run(opts) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_args_commands_and_flags() {
        let opts = parse_args(&args(&["-c", "a = 1", "--command", "a + 1", "--vars", "-v"]))
            .unwrap()
            .unwrap();
        assert_eq!(opts.commands, vec!["a = 1", "a + 1"]);
        assert!(opts.show_vars);
        assert_eq!(opts.verbosity, 1);
        assert!(opts.file_path.is_none());
    }

    #[test]
    fn test_parse_args_file() {
        let opts = parse_args(&args(&["budget.calc", "--config", "c.toml"]))
            .unwrap()
            .unwrap();
        assert_eq!(opts.file_path, Some(PathBuf::from("budget.calc")));
        assert_eq!(opts.config_file, Some(PathBuf::from("c.toml")));
    }

    #[test]
    fn test_parse_args_help() {
        assert!(parse_args(&args(&["-h"])).unwrap().is_none());
    }

    #[test]
    fn test_parse_args_errors() {
        assert!(parse_args(&args(&["-c"])).is_err());
        assert!(parse_args(&args(&["--bogus"])).is_err());
        assert!(parse_args(&args(&["a.calc", "b.calc"])).is_err());
        assert!(parse_args(&args(&["a.calc", "-c", "1"])).is_err());
        assert!(parse_args(&args(&["--json", "--vars"])).is_err());
    }
}
