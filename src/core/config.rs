use crate::config::Config;
use crate::config::migrate::{migrate_config_file, missing_fields};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    /// Print the effective configuration (after `--db` overrides).
    pub fn print(cfg: &Config) -> AppResult<()> {
        let yaml = serde_yaml::to_string(cfg).map_err(|e| AppError::Config(e.to_string()))?;
        println!("📄 Current configuration:\n");
        println!("{}", yaml);
        Ok(())
    }

    /// Report keys missing from the file at `path`.
    pub fn check(path: &Path) -> AppResult<Vec<String>> {
        if !path.exists() {
            warning(format!("No configuration file at {}", path.display()));
            return Ok(Vec::new());
        }

        let missing = missing_fields(path)?;
        if missing.is_empty() {
            success("Configuration file is complete.");
        } else {
            warning(format!("Missing fields: {}", missing.join(", ")));
        }
        Ok(missing)
    }

    pub fn migrate(path: &Path) -> AppResult<bool> {
        if !path.exists() {
            warning(format!("No configuration file at {}", path.display()));
            return Ok(false);
        }

        let changed = migrate_config_file(path)?;
        if changed {
            success("Configuration file updated with default values.");
        } else {
            info("Configuration file already up to date.");
        }
        Ok(changed)
    }

    /// Open `path` in the requested editor, falling back to $EDITOR/$VISUAL
    /// or the platform default.
    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<()> {
        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });

        let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

        match Command::new(&editor_to_use).arg(path).status() {
            Ok(s) if s.success() => {
                success(format!(
                    "Configuration file edited successfully using '{}'",
                    editor_to_use
                ));
                return Ok(());
            }
            _ => warning(format!(
                "Editor '{}' not available, falling back to '{}'",
                editor_to_use, default_editor
            )),
        }

        match Command::new(&default_editor).arg(path).status() {
            Ok(s) if s.success() => {
                success(format!(
                    "Configuration file edited successfully using fallback '{}'",
                    default_editor
                ));
                Ok(())
            }
            _ => Err(AppError::Config(format!(
                "Failed to edit configuration file using fallback '{}'",
                default_editor
            ))),
        }
    }
}
