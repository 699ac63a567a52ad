use clap::Parser;
use pipeline_io::config::{Command, LogFormat};
use pipeline_io::utils::{logger, validation::Validate};
use pipeline_io::{CliConfig, ConfigTree, FileError};
use std::path::Path;

fn main() {
    let config = CliConfig::parse();

    match config.log_format {
        LogFormat::Compact => logger::init_cli_logger(config.verbose),
        LogFormat::Json => logger::init_json_logger(config.verbose),
    }

    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate().and_then(|_| run(config.command)) {
        tracing::error!("command failed: {:?} (Category: {:?})", e, e.category());
        eprintln!("❌ {}", e);
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.category().exit_code());
    }
}

fn run(command: Command) -> Result<(), FileError> {
    match command {
        Command::Show {
            path,
            key,
            expand_env,
        } => {
            let tree = if expand_env {
                pipeline_io::read_structured_config_with_env(&path)?
            } else {
                pipeline_io::read_structured_config(&path)?
            };
            let shown = match key {
                Some(key) => tree.section(&key)?,
                None => tree,
            };
            println!("{}", serde_json::to_string_pretty(&shown)?);
        }
        Command::Convert { input, output } => {
            let tree = read_any(&input)?;
            pipeline_io::save_structured_data(&output, &tree)?;
            println!("📁 Output saved to: {}", output.display());
        }
        Command::Mkdirs { paths, quiet } => {
            pipeline_io::create_directories(&paths, !quiet)?;
        }
        Command::Size { path } => {
            println!("{}", pipeline_io::get_file_size_label(&path)?);
        }
        Command::Encode { path, output } => {
            let encoded = pipeline_io::encode_image_to_base64(&path)?;
            match output {
                Some(output) => std::fs::write(output, encoded)?,
                None => println!("{}", encoded),
            }
        }
        Command::Decode { input, output } => {
            let text = std::fs::read_to_string(&input)?;
            pipeline_io::decode_image_and_save(&text, &output)?;
            println!("📁 Output saved to: {}", output.display());
        }
    }
    Ok(())
}

// The extension was already checked by `CliConfig::validate`.
fn read_any(path: &Path) -> Result<ConfigTree, FileError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "toml" => pipeline_io::read_toml_config(path),
        "json" => pipeline_io::load_structured_data(path),
        _ => pipeline_io::read_structured_config(path),
    }
}
