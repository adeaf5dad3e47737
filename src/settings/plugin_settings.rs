use std::borrow::Cow;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use compio::fs;
use hashlink::LinkedHashMap;
use saphyr::{LoadableYamlNode, Scalar, Yaml, YamlEmitter};
use snafu::prelude::*;
use tracing::{debug, info};

use crate::toc::SortKey;

const SETTINGS_FILE_NAME: &str = ".tocnote.yaml";
const MY_SETTING_KEY: &str = "mySetting";
const SORT_KEY_KEY: &str = "sortKey";
const DEFAULT_MY_SETTING: &str = "default";

pub fn get_settings_file_path(vault_root: &Path) -> PathBuf {
    vault_root.join(SETTINGS_FILE_NAME)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginSettings {
    /// Free-text setting kept for the user. It does not affect the TOC.
    pub my_setting: String,
    pub sort_key: SortKey,
}

impl Default for PluginSettings {
    fn default() -> Self {
        Self {
            my_setting: DEFAULT_MY_SETTING.to_string(),
            sort_key: SortKey::default(),
        }
    }
}

impl PluginSettings {
    /// Loads the settings stored in the vault, falling back to the defaults
    /// when no settings file exists yet.
    pub async fn read(vault_root: &Path) -> Result<Self, SettingsError> {
        Self::from_path(get_settings_file_path(vault_root)).await
    }

    pub async fn from_path(path: PathBuf) -> Result<Self, SettingsError> {
        debug!("Reading settings file: {}", path.display());
        let bytes = match fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!("No settings file found, using defaults");
                return Ok(Self::default());
            }
            Err(err) => {
                return Err(err).context(ReadSnafu {
                    file_path: path.clone(),
                });
            }
        };
        debug!("Successfully read settings file: {} bytes", bytes.len());

        let contents = String::from_utf8(bytes).context(EncodingSnafu {
            file_path: path.clone(),
        })?;
        contents.as_str().try_into()
    }

    pub async fn write(&self, vault_root: &Path) -> Result<(), SettingsError> {
        let path = get_settings_file_path(vault_root);
        let contents = self.to_yaml_string()?;

        debug!("Writing settings file: {}", path.display());
        let res = fs::write(&path, contents.into_bytes()).await;
        res.0.context(WriteSnafu { file_path: path })?;
        Ok(())
    }

    pub fn to_yaml_string(&self) -> Result<String, SettingsError> {
        let mut mapping = LinkedHashMap::new();
        mapping.insert(string_node(MY_SETTING_KEY), string_node(&self.my_setting));
        mapping.insert(string_node(SORT_KEY_KEY), string_node(&self.sort_key.to_string()));

        let mut out = String::new();
        YamlEmitter::new(&mut out)
            .dump(&Yaml::Mapping(mapping))
            .context(EmitSnafu)?;
        out.push('\n');
        Ok(out)
    }

    fn apply_yaml(
        &mut self,
        top_level: &LinkedHashMap<Yaml, Yaml>,
    ) -> Result<(), SettingsError> {
        if let Some(value) = top_level.get(&string_node(MY_SETTING_KEY)) {
            self.my_setting = scalar_string(value).context(InvalidValueSnafu {
                key: MY_SETTING_KEY,
            })?;
        }

        if let Some(value) = top_level.get(&string_node(SORT_KEY_KEY)) {
            self.sort_key = value
                .as_str()
                .and_then(SortKey::from_name)
                .context(InvalidValueSnafu { key: SORT_KEY_KEY })?;
        }

        Ok(())
    }
}

impl TryFrom<&str> for PluginSettings {
    type Error = SettingsError;

    fn try_from(contents: &str) -> Result<Self, Self::Error> {
        let documents = Yaml::load_from_str(contents).context(ParseSnafu)?;
        let mut settings = Self::default();

        let Some(document) = documents.first() else {
            return Ok(settings);
        };
        if matches!(document, Yaml::Value(Scalar::Null)) {
            return Ok(settings);
        }

        let top_level = document.as_mapping().context(TopLevelNotMapSnafu)?;
        settings.apply_yaml(top_level)?;
        Ok(settings)
    }
}

fn string_node(value: &str) -> Yaml<'static> {
    Yaml::Value(Scalar::String(Cow::Owned(value.to_string())))
}

/// The free-text setting also accepts numbers and booleans, as typed.
fn scalar_string(value: &Yaml) -> Option<String> {
    match value {
        Yaml::Value(Scalar::String(s)) => Some(s.to_string()),
        Yaml::Value(Scalar::Integer(i)) => Some(i.to_string()),
        Yaml::Value(Scalar::FloatingPoint(f)) => Some(f.to_string()),
        Yaml::Value(Scalar::Boolean(b)) => Some(b.to_string()),
        _ => None,
    }
}

#[derive(Debug, Snafu)]
pub enum SettingsError {
    #[snafu(display("Failed to read the settings file: {}", file_path.display()))]
    ReadError {
        file_path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("Settings file {} is not valid UTF-8", file_path.display()))]
    EncodingError {
        file_path: PathBuf,
        source: std::string::FromUtf8Error,
    },
    #[snafu(display("Failed to parse the settings file"))]
    ParseError { source: saphyr::ScanError },
    #[snafu(display("Top level of the settings file should be a map"))]
    TopLevelNotMap,
    #[snafu(display("Invalid value for setting '{}'", key))]
    InvalidValue { key: &'static str },
    #[snafu(display("Failed to serialize the settings"))]
    EmitError { source: saphyr::EmitError },
    #[snafu(display("Failed to write the settings file: {}", file_path.display()))]
    WriteError {
        file_path: PathBuf,
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tempfile::TempDir;

    #[compio::test]
    async fn test_missing_settings_file_yields_defaults() {
        let vault = TempDir::new().expect("Failed to create temp directory");

        let settings = PluginSettings::read(vault.path()).await;

        assert_eq!(settings.unwrap(), PluginSettings::default());
    }

    #[compio::test]
    async fn test_settings_survive_write_and_read() {
        let vault = TempDir::new().expect("Failed to create temp directory");
        let settings = PluginSettings {
            my_setting: "a secret: with \"quotes\"".to_string(),
            sort_key: SortKey::ModifiedAt,
        };

        settings
            .write(vault.path())
            .await
            .expect("Failed to write settings");
        let read_back = PluginSettings::read(vault.path())
            .await
            .expect("Failed to read settings");

        assert_eq!(read_back, settings);
    }

    #[compio::test]
    async fn test_settings_file_that_is_a_directory_is_an_error() {
        let vault = TempDir::new().expect("Failed to create temp directory");
        std::fs::create_dir(get_settings_file_path(vault.path())).expect("Failed to create dir");

        let result = PluginSettings::read(vault.path()).await;

        assert!(matches!(result, Err(SettingsError::ReadError { .. })));
    }

    #[compio::test]
    async fn test_non_utf8_settings_file_is_an_error() {
        let vault = TempDir::new().expect("Failed to create temp directory");
        std::fs::write(get_settings_file_path(vault.path()), [0xff, 0xfe, 0x00])
            .expect("Failed to write file");

        let result = PluginSettings::read(vault.path()).await;

        assert!(matches!(result, Err(SettingsError::EncodingError { .. })));
    }

    #[rstest]
    #[case("")]
    #[case("~")]
    #[case("{}")]
    #[case("unrelated: value")]
    fn test_contents_without_settings_yield_defaults(#[case] contents: &str) {
        let settings: Result<PluginSettings, _> = contents.try_into();

        assert_eq!(settings.unwrap(), PluginSettings::default());
    }

    #[test]
    fn test_partial_settings_keep_remaining_defaults() {
        let settings: PluginSettings = "sortKey: modified".try_into().expect("Failed to parse");

        assert_eq!(settings.sort_key, SortKey::ModifiedAt);
        assert_eq!(settings.my_setting, DEFAULT_MY_SETTING);
    }

    #[rstest]
    #[case("mySetting: hello", "hello")]
    #[case("mySetting: 42", "42")]
    #[case("mySetting: true", "true")]
    #[case("mySetting: \"秘密\"", "秘密")]
    fn test_free_text_setting_accepts_scalars(#[case] contents: &str, #[case] expected: &str) {
        let settings: PluginSettings = contents.try_into().expect("Failed to parse");

        assert_eq!(settings.my_setting, expected);
    }

    #[test]
    fn test_invalid_yaml_is_a_parse_error() {
        let result: Result<PluginSettings, _> = "mySetting: [unclosed".try_into();

        assert!(matches!(result, Err(SettingsError::ParseError { .. })));
    }

    #[rstest]
    #[case("- created\n- modified")]
    #[case("just a string")]
    fn test_top_level_must_be_a_map(#[case] contents: &str) {
        let result: Result<PluginSettings, _> = contents.try_into();

        assert!(matches!(result, Err(SettingsError::TopLevelNotMap)));
    }

    #[rstest]
    #[case("sortKey: newest", SORT_KEY_KEY)]
    #[case("sortKey: [created]", SORT_KEY_KEY)]
    #[case("mySetting: {nested: map}", MY_SETTING_KEY)]
    #[case("mySetting: ~", MY_SETTING_KEY)]
    fn test_invalid_values_name_the_setting(#[case] contents: &str, #[case] expected_key: &str) {
        let result: Result<PluginSettings, _> = contents.try_into();

        match result {
            Err(SettingsError::InvalidValue { key }) => assert_eq!(key, expected_key),
            other => panic!("Expected InvalidValue, got {other:?}"),
        }
    }

    #[test]
    fn test_yaml_output_lists_both_settings() {
        let yaml = PluginSettings::default()
            .to_yaml_string()
            .expect("Failed to serialize");

        assert!(yaml.contains("mySetting: default"));
        assert!(yaml.contains("sortKey: created"));
    }
}
