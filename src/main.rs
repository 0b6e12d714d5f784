use exosphere_config::{DeploymentConfig, render};
use std::{env, fs, process::ExitCode};
use tracing::{Level, error, info};
use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_CONFIG_PATH: &str = "configs/config.yaml";
const CONFIG_PATH_ENV: &str = "EXOSPHERE_CONFIG";

/// Command-line options.
#[derive(Debug, Default, PartialEq)]
struct Options {
    config_path: Option<String>,
    render_path: Option<String>,
    print: bool,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Options, String> {
    let mut options = Options::default();

    for arg in args {
        if let Some(path) = arg.strip_prefix("--config=") {
            options.config_path = Some(path.to_string());
        } else if let Some(path) = arg.strip_prefix("--render=") {
            options.render_path = Some(path.to_string());
        } else if arg == "--print" {
            options.print = true;
        } else {
            return Err(format!("unknown argument: {}", arg));
        }
    }

    Ok(options)
}

/// `--config=` wins over the environment, which wins over the default.
fn resolve_config_path(flag: Option<String>, from_env: Option<String>) -> String {
    flag.or(from_env.filter(|p| !p.is_empty()))
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string())
}

fn init_tracing(level: Level) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(options: Options) -> Result<(), Box<dyn std::error::Error>> {
    let config_path = resolve_config_path(options.config_path, env::var(CONFIG_PATH_ENV).ok());
    let config = DeploymentConfig::load(&config_path)?;

    info!(
        config = %config_path,
        url_path_prefix = %config.url_path_prefix,
        debug_msgs = config.show_debug_msgs,
        "Deployment config is valid"
    );

    if options.print {
        println!("{}", serde_json::to_string_pretty(&config)?);
    }

    if let Some(out) = options.render_path {
        fs::write(&out, render::to_config_js(&config)?)?;
        info!(path = %out, "Rendered config.js");
    }

    Ok(())
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let options = match parse_args(env::args().skip(1)) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("usage: exosphere-config [--config=PATH] [--render=OUT] [--print]");
            return ExitCode::FAILURE;
        }
    };

    init_tracing(Level::INFO);

    match run(options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Refusing to start with an invalid deployment config");
            eprintln!("Failed to load deployment config: {}", e);
            ExitCode::FAILURE
        }
    }
}
