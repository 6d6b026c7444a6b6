//! Centralized camera and interaction options with TOML preset support.
//!
//! Options serialize to/from TOML so presets can be kept next to an
//! application (e.g. `assets/presets/`).

mod camera;
mod interaction;

use std::path::Path;

pub use camera::CameraOptions;
pub use interaction::InteractionOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::TerraError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[interaction]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera projection, orbit-control, and initial-view parameters.
    pub camera: CameraOptions,
    /// Hover transition timings and tolerances.
    pub interaction: InteractionOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, TerraError> {
        let content = std::fs::read_to_string(path).map_err(TerraError::Io)?;
        let options: Self = toml::from_str(&content)
            .map_err(|e| TerraError::OptionsParse(e.to_string()))?;
        log::info!("Loaded options from '{}'", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), TerraError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| TerraError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(TerraError::Io)?;
        }
        std::fs::write(path, content).map_err(TerraError::Io)?;
        log::info!("Saved options to '{}'", path.display());
        Ok(())
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::util::easing::EasingFunction;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[interaction]
settle_delay_ms = 350
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.interaction.settle_delay(), Duration::from_millis(350));
        // Everything else should be default
        assert_eq!(opts.interaction.hover_damping, 0.05);
        assert_eq!(opts.interaction.resume_easing, EasingFunction::CubicInOut);
        assert_eq!(opts.camera.damping_factor, 0.1);
    }

    #[test]
    fn default_timings() {
        let interaction = InteractionOptions::default();
        assert_eq!(interaction.settle_delay(), Duration::from_millis(200));
        assert_eq!(interaction.resume_duration(), Duration::from_millis(1000));
        assert_eq!(interaction.lock_cooldown(), Duration::from_millis(50));
        assert_eq!(interaction.show_delay(), Duration::from_millis(150));
        assert_eq!(interaction.hide_delay(), Duration::from_millis(250));
    }

    #[test]
    fn easing_is_configurable_from_toml() {
        let toml_str = r#"
[interaction]
resume_easing = "linear"
"#;
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.interaction.resume_easing, EasingFunction::Linear);
    }

    #[test]
    fn save_then_load_preset() {
        let dir = std::env::temp_dir()
            .join(format!("terra-presets-{}", std::process::id()));
        let path = dir.join("calm.toml");

        let mut opts = Options::default();
        opts.camera.auto_rotate_speed = 0.25;
        opts.save(&path).unwrap();

        let loaded = Options::load(&path).unwrap();
        assert_eq!(loaded, opts);
        assert_eq!(Options::list_presets(&dir), vec!["calm".to_owned()]);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn load_reports_parse_errors() {
        let dir = std::env::temp_dir()
            .join(format!("terra-bad-preset-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("broken.toml");
        std::fs::write(&path, "[camera\nfovy = ").unwrap();

        let err = Options::load(&path).unwrap_err();
        assert!(matches!(err, TerraError::OptionsParse(_)));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();
        assert!(props.contains_key("camera"));
        assert!(props.contains_key("interaction"));

        let interaction = &props["interaction"]["properties"];
        assert!(interaction.get("settle_delay_ms").is_some());
        assert!(interaction.get("hover_damping").is_some());
        assert!(interaction.get("stabilize_tolerance").is_none());
        assert!(interaction.get("resume_easing").is_none());
    }
}
