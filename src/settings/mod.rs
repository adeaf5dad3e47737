mod plugin_settings;

pub use plugin_settings::{PluginSettings, SettingsError, get_settings_file_path};
