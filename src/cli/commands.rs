//! CLI commands implementation

use crate::codegen::GenerationOptions;
use crate::config::{Config, ConfigError, CONFIG_FILE};
use crate::export::{preview_text, render_download, PREVIEW_PLACEHOLDER};
use crate::form::{
    apply_preset, derive_parent_flags, sync_setting_flags, FormState, GenerationError, Preset,
};
use chrono::Utc;
use clap::{Parser, Subcommand};
use miette::Diagnostic;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Default name of the form snapshot file
pub const SNAPSHOT_FILE: &str = "autoexec.json";

/// Config script generator CLI
#[derive(Parser, Debug)]
#[command(name = "autoexec")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a default form snapshot and config file
    Init {
        /// Directory to initialize
        #[arg(default_value = ".")]
        path: PathBuf,
        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },

    /// Validate a form snapshot
    Check {
        /// Path to the form snapshot
        #[arg(default_value = SNAPSHOT_FILE)]
        snapshot: PathBuf,
    },

    /// Print the generated script without writing it
    Preview {
        /// Path to the form snapshot
        #[arg(default_value = SNAPSHOT_FILE)]
        snapshot: PathBuf,
    },

    /// Write the generated script to disk
    Generate {
        /// Path to the form snapshot
        #[arg(default_value = SNAPSHOT_FILE)]
        snapshot: PathBuf,
        /// Output directory (overrides config setting)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Leave out the generation timestamp
        #[arg(long)]
        no_timestamp: bool,
    },

    /// Apply a quick selection preset to a snapshot
    Preset {
        /// Preset to apply
        #[arg(value_enum)]
        preset: Preset,
        /// Path to the form snapshot
        #[arg(default_value = SNAPSHOT_FILE)]
        snapshot: PathBuf,
    },

    /// Recompute parent and per-key flags of a snapshot
    Derive {
        /// Path to the form snapshot
        #[arg(default_value = SNAPSHOT_FILE)]
        snapshot: PathBuf,
    },
}

/// Run the CLI with the given arguments
///
/// # Errors
///
/// Returns an error if the command fails.
pub fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Init { path, force } => cmd_init(&path, force),
        Commands::Check { snapshot } => cmd_check(&snapshot),
        Commands::Preview { snapshot } => cmd_preview(&snapshot),
        Commands::Generate {
            snapshot,
            output,
            no_timestamp,
        } => cmd_generate(&snapshot, output.as_deref(), no_timestamp).map(|_| ()),
        Commands::Preset { preset, snapshot } => cmd_preset(&snapshot, preset),
        Commands::Derive { snapshot } => cmd_derive(&snapshot),
    }
}

fn cmd_init(dir: &Path, force: bool) -> Result<(), CliError> {
    let snapshot_path = dir.join(SNAPSHOT_FILE);
    let config_path = dir.join(CONFIG_FILE);

    if !force {
        if let Some(existing) = [&snapshot_path, &config_path].into_iter().find(|p| p.exists()) {
            return Err(CliError::AlreadyExists(existing.clone()));
        }
    }

    fs::create_dir_all(dir).map_err(|e| CliError::Io {
        path: dir.to_path_buf(),
        source: e,
    })?;

    write_snapshot(&snapshot_path, &FormState::with_defaults())?;
    Config::default().save(&config_path)?;

    tracing::info!(dir = %dir.display(), "initialized");
    println!("Created:");
    println!("  {}", snapshot_path.display());
    println!("  {}", config_path.display());
    println!("\nTo get started:");
    println!("  autoexec preset select-all");
    println!("  autoexec generate");

    Ok(())
}

fn cmd_check(snapshot: &Path) -> Result<(), CliError> {
    let state = load_state(snapshot)?;

    let sections = state.include_sections.values().filter(|on| **on).count();
    let commands = state.include_commands.values().filter(|on| **on).count();
    println!("Checking {}...", snapshot.display());
    println!("  {sections} section(s) enabled");
    println!("  {commands} command(s) included");
    println!("  {} custom bind(s)", state.custom_binds.len());
    println!("\nNo errors found.");

    Ok(())
}

fn cmd_preview(snapshot: &Path) -> Result<(), CliError> {
    let (config, _) = Config::discover(parent_dir(snapshot))?;
    let options = GenerationOptions::preview().with_layout(config.format);

    let content = read_file(snapshot)?;
    let text = match serde_json::from_str::<Value>(&content) {
        Ok(value) => preview_text(&value, &options),
        Err(e) => {
            tracing::warn!(error = %e, "snapshot is not valid JSON");
            PREVIEW_PLACEHOLDER.to_string()
        }
    };
    println!("{text}");

    Ok(())
}

fn cmd_generate(
    snapshot: &Path,
    output: Option<&Path>,
    no_timestamp: bool,
) -> Result<PathBuf, CliError> {
    let (config, root) = Config::discover(parent_dir(snapshot))?;

    let mut options = config.generation_options(Utc::now());
    if no_timestamp {
        options.timestamp = None;
    }

    let value = read_json(snapshot)?;
    let download = render_download(&value, &options).map_err(|e| CliError::Invalid {
        path: snapshot.to_path_buf(),
        source: e,
    })?;

    let output_dir = output.map_or_else(|| root.join(&config.output.dir), Path::to_path_buf);
    fs::create_dir_all(&output_dir).map_err(|e| CliError::Io {
        path: output_dir.clone(),
        source: e,
    })?;

    let output_file = output_dir.join(&config.output.file);
    let mut contents = download.contents;
    contents.push('\n');
    fs::write(&output_file, contents).map_err(|e| CliError::Io {
        path: output_file.clone(),
        source: e,
    })?;

    tracing::info!(file = %output_file.display(), mime = download.mime, "generated");
    println!("  Generated: {}", output_file.display());

    Ok(output_file)
}

fn cmd_preset(snapshot: &Path, preset: Preset) -> Result<(), CliError> {
    let state = apply_preset(load_state(snapshot)?, preset);
    write_snapshot(snapshot, &state)?;

    tracing::info!(?preset, "applied preset");
    println!("  Updated: {}", snapshot.display());

    Ok(())
}

fn cmd_derive(snapshot: &Path) -> Result<(), CliError> {
    let state = sync_setting_flags(derive_parent_flags(load_state(snapshot)?));
    write_snapshot(snapshot, &state)?;

    println!("  Updated: {}", snapshot.display());

    Ok(())
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

fn read_file(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|e| CliError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

fn read_json(path: &Path) -> Result<Value, CliError> {
    let content = read_file(path)?;
    serde_json::from_str(&content).map_err(|e| CliError::Json {
        path: path.to_path_buf(),
        source: e,
    })
}

fn load_state(path: &Path) -> Result<FormState, CliError> {
    let value = read_json(path)?;
    FormState::from_json(&value).map_err(|e| CliError::Invalid {
        path: path.to_path_buf(),
        source: e,
    })
}

fn write_snapshot(path: &Path, state: &FormState) -> Result<(), CliError> {
    let mut content = serde_json::to_string_pretty(state).map_err(|e| CliError::Json {
        path: path.to_path_buf(),
        source: e,
    })?;
    content.push('\n');

    fs::write(path, content).map_err(|e| CliError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

/// CLI errors
#[derive(Debug)]
pub enum CliError {
    /// IO error
    Io {
        /// Path that caused the error
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },
    /// Snapshot is not valid JSON
    Json {
        /// Path that caused the error
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },
    /// Snapshot does not match the form schema
    Invalid {
        /// Snapshot path
        path: PathBuf,
        /// Validation error
        source: GenerationError,
    },
    /// Config error
    Config(ConfigError),
    /// File would be overwritten
    AlreadyExists(PathBuf),
}

impl CliError {
    /// Help text for the error, when there is any
    #[must_use]
    pub fn help(&self) -> Option<String> {
        match self {
            CliError::Invalid { source, .. } => source.help().map(|h| h.to_string()),
            CliError::Config(e) => e.help().map(|h| h.to_string()),
            CliError::AlreadyExists(_) => Some("pass --force to overwrite".to_string()),
            CliError::Io { .. } | CliError::Json { .. } => None,
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        CliError::Config(e)
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Io { path, source } => {
                write!(f, "IO error at {}: {}", path.display(), source)
            }
            CliError::Json { path, source } => {
                write!(f, "Invalid JSON in {}: {}", path.display(), source)
            }
            CliError::Invalid { path, source } => {
                write!(f, "Invalid form snapshot {}: {}", path.display(), source)
            }
            CliError::Config(e) => write!(f, "Config error: {e}"),
            CliError::AlreadyExists(path) => {
                write!(f, "{} already exists", path.display())
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io { source, .. } => Some(source),
            CliError::Json { source, .. } => Some(source),
            CliError::Invalid { source, .. } => Some(source),
            CliError::Config(e) => Some(e),
            CliError::AlreadyExists(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::Section;
    use serde_json::json;
    use tempfile::TempDir;

    fn write_json(dir: &TempDir, value: &Value) -> PathBuf {
        let path = dir.path().join(SNAPSHOT_FILE);
        fs::write(&path, serde_json::to_string(value).unwrap()).unwrap();
        path
    }

    #[test]
    fn test_init_creates_files() {
        let dir = TempDir::new().unwrap();
        cmd_init(dir.path(), false).unwrap();

        let snapshot = dir.path().join(SNAPSHOT_FILE);
        assert!(snapshot.exists());
        assert!(dir.path().join(CONFIG_FILE).exists());
        assert_eq!(load_state(&snapshot).unwrap(), FormState::with_defaults());

        let err = cmd_init(dir.path(), false).unwrap_err();
        assert!(matches!(err, CliError::AlreadyExists(_)));
        assert!(err.help().is_some());
        cmd_init(dir.path(), true).unwrap();
    }

    #[test]
    fn test_check_reports_field() {
        let dir = TempDir::new().unwrap();
        let snapshot = write_json(&dir, &json!({ "customBinds": "F6" }));

        let err = cmd_check(&snapshot).unwrap_err();
        let CliError::Invalid { source, .. } = &err else {
            panic!("expected an invalid snapshot error, got {err:?}");
        };
        assert_eq!(source.field(), Some("customBinds"));
        assert!(err.to_string().contains("customBinds"));
    }

    #[test]
    fn test_check_rejects_bad_json() {
        let dir = TempDir::new().unwrap();
        let snapshot = dir.path().join(SNAPSHOT_FILE);
        fs::write(&snapshot, "{ not json").unwrap();

        assert!(matches!(cmd_check(&snapshot), Err(CliError::Json { .. })));
    }

    #[test]
    fn test_preview_never_fails_on_invalid_snapshot() {
        let dir = TempDir::new().unwrap();
        let snapshot = write_json(&dir, &json!({ "additionalCommands": 1 }));
        cmd_preview(&snapshot).unwrap();

        fs::write(&snapshot, "{ not json").unwrap();
        cmd_preview(&snapshot).unwrap();
    }

    #[test]
    fn test_generate_writes_file() {
        let dir = TempDir::new().unwrap();
        let snapshot = write_json(&dir, &json!({ "includeConfigSave": true }));

        let file = cmd_generate(&snapshot, None, false).unwrap();
        assert_eq!(file, dir.path().join(".").join("autoexec.cfg"));

        let contents = fs::read_to_string(&file).unwrap();
        assert!(contents.starts_with("log_color \"Console\""));
        assert!(contents.contains("// Generated: "));
        assert!(contents.contains("host_writeconfig;"));
        assert!(contents.ends_with('\n'));
    }

    #[test]
    fn test_generate_honours_config() {
        let dir = TempDir::new().unwrap();
        let snapshot = write_json(&dir, &json!({}));
        fs::write(
            dir.path().join(CONFIG_FILE),
            "[output]\ndir = \"cfg\"\nfile = \"practice.cfg\"\ntimestamp = false\n",
        )
        .unwrap();

        let file = cmd_generate(&snapshot, None, false).unwrap();
        assert_eq!(file, dir.path().join("cfg").join("practice.cfg"));
        assert!(!fs::read_to_string(&file).unwrap().contains("// Generated:"));
    }

    #[test]
    fn test_generate_no_timestamp_and_output_override() {
        let dir = TempDir::new().unwrap();
        let snapshot = write_json(&dir, &json!({}));
        let out = dir.path().join("out");

        let file = cmd_generate(&snapshot, Some(&out), true).unwrap();
        assert_eq!(file, out.join("autoexec.cfg"));
        assert!(!fs::read_to_string(&file).unwrap().contains("// Generated:"));
    }

    #[test]
    fn test_generate_aborts_without_file() {
        let dir = TempDir::new().unwrap();
        let snapshot = write_json(
            &dir,
            &json!({ "additionalCommands": 5, "includeSections": { "additional": true } }),
        );

        let err = cmd_generate(&snapshot, None, false).unwrap_err();
        assert!(matches!(err, CliError::Invalid { .. }));
        assert!(!dir.path().join("autoexec.cfg").exists());
    }

    #[test]
    fn test_preset_rewrites_snapshot() {
        let dir = TempDir::new().unwrap();
        let snapshot = write_json(&dir, &json!({}));

        cmd_preset(&snapshot, Preset::OnlySettings).unwrap();
        let state = load_state(&snapshot).unwrap();
        assert!(state.section_enabled(Section::Settings));
        assert!(!state.section_enabled(Section::Binds));
    }

    #[test]
    fn test_derive_rewrites_snapshot() {
        let dir = TempDir::new().unwrap();
        let snapshot = write_json(&dir, &json!({ "includeSections": { "hud": true } }));

        cmd_derive(&snapshot).unwrap();
        let state = load_state(&snapshot).unwrap();
        assert!(state.section_enabled(Section::Settings));
        assert!(state.command_included("cl_hud_color"));
    }
}
