//! Command execution over the settings store.
//!
//! Every command builds the same pipeline a dashboard shell would: file
//! adapter, store, hydration, then the requested operation.

use std::sync::Arc;

use tracing::info;

use tradelog_core::{Settings, SettingsKey, SettingsValue};
use tradelog_dashboard::DashboardView;
use tradelog_persistence::JsonFileAdapter;
use tradelog_settings::SettingsStore;

use crate::cli::Command;
use crate::config::AppConfig;
use crate::error::AppResult;

/// Main application.
pub struct App {
    adapter: Arc<JsonFileAdapter>,
    store: Arc<SettingsStore>,
}

impl App {
    /// Create an application over the configured settings file.
    pub fn new(config: &AppConfig) -> Self {
        let adapter = Arc::new(JsonFileAdapter::new(config.settings_file()));
        let store = Arc::new(SettingsStore::new(adapter.clone()));
        info!(path = %adapter.path().display(), "Using settings file");
        Self { adapter, store }
    }

    /// The settings store behind the CLI.
    pub fn store(&self) -> &SettingsStore {
        &self.store
    }

    /// Execute one command.
    pub fn run(&self, command: Command) -> AppResult<()> {
        match command {
            Command::Show => self.show(),
            Command::Get { key } => self.get(&key),
            Command::Set { key, value } => self.set(&key, &value),
            Command::Reset => self.reset(),
            Command::Keys => self.keys(),
            Command::Path => self.path(),
        }
    }

    fn show(&self) -> AppResult<()> {
        self.store.initialize();
        let settings = self.store.get();
        println!("{}", serde_json::to_string_pretty(&settings)?);

        let view = DashboardView::from_settings(&settings);
        let panels: Vec<&str> = view.panels.iter().map(|p| p.label()).collect();
        println!();
        println!("{}", view.greeting);
        println!("coach:    {}", view.coach);
        println!("layout:   {}", view.layout.as_str());
        println!("heatmaps: {}", view.heatmap_style.as_str());
        println!("panels:   {}", panels.join(", "));
        Ok(())
    }

    fn get(&self, key: &str) -> AppResult<()> {
        self.store.initialize();
        let key: SettingsKey = key.parse()?;
        println!("{}", self.store.get().value_of(key));
        Ok(())
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        self.store.initialize();
        let parsed_key: SettingsKey = key.parse()?;
        let parsed_value = SettingsValue::parse_for_key(parsed_key, value)?;
        let snapshot = self.store.update(parsed_key, parsed_value)?;
        println!("{parsed_key} = {}", snapshot.value_of(parsed_key));
        Ok(())
    }

    fn reset(&self) -> AppResult<()> {
        self.store.initialize();
        self.store.reset();
        println!("Settings reset to defaults");
        Ok(())
    }

    fn keys(&self) -> AppResult<()> {
        let defaults = Settings::default();
        for key in SettingsKey::ALL {
            println!(
                "{:<22} {:<12} default: {}",
                key.as_str(),
                key.kind().as_str(),
                defaults.value_of(key)
            );
        }
        Ok(())
    }

    fn path(&self) -> AppResult<()> {
        println!("{}", self.adapter.path().display());
        match self.adapter.try_load() {
            Ok(Some(_)) => println!("status: present"),
            Ok(None) => println!("status: not created yet"),
            Err(e) => println!("status: unreadable ({e})"),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use tempfile::TempDir;
    use tradelog_core::CoreError;

    fn temp_config(temp_dir: &TempDir) -> AppConfig {
        AppConfig {
            settings_path: Some(temp_dir.path().join("settings.json")),
        }
    }

    #[test]
    fn test_set_roundtrips_through_file() {
        let temp_dir = TempDir::new().unwrap();
        let config = temp_config(&temp_dir);

        let app = App::new(&config);
        app.run(Command::Set {
            key: "compactMode".to_string(),
            value: "true".to_string(),
        })
        .unwrap();

        // Fresh pipeline over the same file sees the change.
        let app = App::new(&config);
        app.store().initialize();
        assert!(app.store().get().compact_mode);
    }

    #[test]
    fn test_set_unknown_key_fails_and_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let config = temp_config(&temp_dir);

        let app = App::new(&config);
        let err = app
            .run(Command::Set {
                key: "legacyWidget".to_string(),
                value: "true".to_string(),
            })
            .unwrap_err();

        assert!(matches!(err, AppError::Settings(CoreError::UnknownKey(_))));
        assert!(!temp_dir.path().join("settings.json").exists());
    }

    #[test]
    fn test_set_rejects_bad_toggle_spelling() {
        let temp_dir = TempDir::new().unwrap();
        let app = App::new(&temp_config(&temp_dir));

        let err = app
            .run(Command::Set {
                key: "compactMode".to_string(),
                value: "maybe".to_string(),
            })
            .unwrap_err();

        assert!(matches!(err, AppError::Settings(CoreError::InvalidToggle(_))));
    }

    #[test]
    fn test_set_personality_by_name() {
        let temp_dir = TempDir::new().unwrap();
        let config = temp_config(&temp_dir);

        let app = App::new(&config);
        app.run(Command::Set {
            key: "aiPersonality".to_string(),
            value: "aggressive".to_string(),
        })
        .unwrap();

        let app = App::new(&config);
        app.store().initialize();
        assert_eq!(
            app.store().get().ai_personality,
            tradelog_core::AiPersonality::Aggressive
        );
    }

    #[test]
    fn test_reset_restores_defaults_on_disk() {
        let temp_dir = TempDir::new().unwrap();
        let config = temp_config(&temp_dir);

        let app = App::new(&config);
        app.run(Command::Set {
            key: "playerName".to_string(),
            value: "Kaede".to_string(),
        })
        .unwrap();
        app.run(Command::Reset).unwrap();

        let app = App::new(&config);
        app.store().initialize();
        assert_eq!(app.store().get(), Settings::default());
    }

    #[test]
    fn test_read_only_commands_succeed_without_file() {
        let temp_dir = TempDir::new().unwrap();
        let app = App::new(&temp_config(&temp_dir));

        app.run(Command::Show).unwrap();
        app.run(Command::Keys).unwrap();
        app.run(Command::Path).unwrap();
        app.run(Command::Get {
            key: "playerName".to_string(),
        })
        .unwrap();
    }
}
