//! DocuMind: frontend configuration bootstrap.
//!
//! Startup sequence:
//!   1. Parse CLI args
//!   2. Layer `.env` files for the selected mode under the process environment
//!   3. Init logger (CLI `-v` flags > `VITE_ENABLE_DEBUG_MODE` > info)
//!   4. Validate required and numeric settings, fail fast
//!   5. Resolve the configuration and report it (skipped with `--check`)

use std::path::PathBuf;

use documind::config::{self, keys, ResolvedConfig};
use documind::error::AppError;
use documind::logger;
use tracing::info;

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let args = parse_cli_args();

    let env = config::env_files::source(&args.dir, &args.mode)?;

    let log = logger::select(args.log_level, config::flag(&env, keys::ENABLE_DEBUG_MODE))?;
    logger::init(&log)?;

    if args.check_only {
        config::validate(&env)?;
        info!(mode = %args.mode, "configuration valid");
        println!("✓ configuration valid (mode={})", args.mode);
        return Ok(());
    }

    let cfg = config::load_from(&env)?;
    report(&cfg, &args)?;

    Ok(())
}

fn report(cfg: &ResolvedConfig, args: &CliArgs) -> Result<(), AppError> {
    info!(
        mode = %args.mode,
        api_root = %cfg.api.api_root(),
        rate_limit = cfg.api.rate_limit,
        rate_limit_interval_ms = cfg.api.rate_limit_interval,
        token_key = %cfg.auth.token_key,
        dark_mode = cfg.features.dark_mode,
        debug_mode = cfg.features.debug_mode,
        "config resolved"
    );

    if args.json {
        println!("{}", cfg.to_json_pretty()?);
    } else {
        println!("✓ DocuMind configured: api={}", cfg.api.api_root());
    }
    Ok(())
}

struct CliArgs {
    log_level: Option<&'static str>,
    mode: String,
    dir: PathBuf,
    check_only: bool,
    json: bool,
}

fn parse_cli_args() -> CliArgs {
    let mut verbosity = 0u8;
    let mut mode = "development".to_string();
    let mut dir = PathBuf::from(".");
    let mut check_only = false;
    let mut json = false;

    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        if arg == "--" {
            break;
        }

        match arg.as_str() {
            "-h" | "--help" => {
                println!("Usage: documind [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -h, --help                 Print help");
                println!("  -m, --mode <MODE>          Env file mode (default: development)");
                println!("  -d, --dir <PATH>           Directory holding .env files (default: .)");
                println!("      --check                Validate settings and exit");
                println!("      --json                 Print the resolved configuration as JSON");
                println!("  -v, -vv, -vvv, -vvvv       Increase logging verbosity");
                std::process::exit(0);
            }
            "-m" | "--mode" => mode = required_value(&mut iter, "-m/--mode", "a mode name"),
            "-d" | "--dir" => dir = PathBuf::from(required_value(&mut iter, "-d/--dir", "a path")),
            "--check" => check_only = true,
            "--json" => json = true,
            "--verbose" => verbosity = verbosity.saturating_add(1),
            a if a.starts_with('-') && a.len() > 1 && a.chars().skip(1).all(|c| c == 'v') => {
                verbosity = verbosity.saturating_add((a.len() - 1) as u8);
            }
            _ => {}
        }
    }

    let log_level = match verbosity {
        0 => None,
        1 => Some("warn"),
        2 => Some("info"),
        3 => Some("debug"),
        _ => Some("trace"),
    };

    CliArgs { log_level, mode, dir, check_only, json }
}

fn required_value(iter: &mut impl Iterator<Item = String>, flag: &str, what: &str) -> String {
    match iter.next() {
        Some(value) => value,
        None => {
            eprintln!("error: {flag} requires {what}");
            std::process::exit(1);
        }
    }
}
