use std::path::PathBuf;

use compio::fs;
use snafu::Snafu;
use snafu::prelude::*;
use tracing::{debug, info};

use crate::application::RuntimeConfig;
use crate::host::{
    COMMAND_ID, CommandOutcome, CreateTocCommand, CursorPosition, TextDocument, VaultPathResolver,
};
use crate::settings::{PluginSettings, SettingsError};
use crate::toc::{TocBuilder, TocOptions};

pub struct Application;

impl Application {
    pub async fn run(
        app_config: impl Into<RuntimeConfig>,
    ) -> Result<CommandOutcome, ApplicationError> {
        let app_config: RuntimeConfig = app_config.into();
        let mut settings = PluginSettings::read(&app_config.vault)
            .await
            .context(SettingsLoadSnafu)?;
        debug!("Loaded settings: {:?}", settings);

        if let Some(value) = &app_config.set_setting {
            settings.my_setting = value.clone();
            settings
                .write(&app_config.vault)
                .await
                .context(SettingsSaveSnafu)?;
            info!("Saved settings");
        }

        let sort_key = app_config.sort_key.unwrap_or(settings.sort_key);
        let command = CreateTocCommand::new(
            TocBuilder::new(TocOptions { sort_key }),
            VaultPathResolver::new(&app_config.vault),
        );
        debug!("Running command '{}' sorted by {}", COMMAND_ID, sort_key);

        match app_config.cursor {
            Some(cursor) => Self::insert_into_document(&command, &app_config, cursor).await,
            None => Ok(Self::print_toc(&command, &app_config)),
        }
    }

    async fn insert_into_document(
        command: &CreateTocCommand<VaultPathResolver>,
        app_config: &RuntimeConfig,
        cursor: CursorPosition,
    ) -> Result<CommandOutcome, ApplicationError> {
        let path = app_config.vault.join(&app_config.document);
        let bytes = fs::read(&path).await.context(DocumentReadSnafu {
            path: path.clone(),
        })?;
        let text = String::from_utf8(bytes).context(DocumentEncodingSnafu {
            path: path.clone(),
        })?;

        let mut document = TextDocument::new(text, cursor);
        let outcome = command.run(&app_config.document, &mut document);

        if let CommandOutcome::Inserted { .. } = outcome {
            let res = fs::write(&path, document.into_text().into_bytes()).await;
            res.0.context(DocumentWriteSnafu { path: path.clone() })?;
            info!("Updated {}", path.display());
        }
        Ok(outcome)
    }

    fn print_toc(
        command: &CreateTocCommand<VaultPathResolver>,
        app_config: &RuntimeConfig,
    ) -> CommandOutcome {
        let mut document = TextDocument::default();
        let outcome = command.run(&app_config.document, &mut document);
        print!("{}", document.text());
        outcome
    }
}

#[derive(Debug, Snafu)]
pub enum ApplicationError {
    #[snafu(display("Critical failure encountered while loading settings"))]
    SettingsLoadError { source: SettingsError },
    #[snafu(display("Critical failure encountered while saving settings"))]
    SettingsSaveError { source: SettingsError },
    #[snafu(display("Failed to read document {}", path.display()))]
    DocumentReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("Document {} is not valid UTF-8", path.display()))]
    DocumentEncodingError {
        path: PathBuf,
        source: std::string::FromUtf8Error,
    },
    #[snafu(display("Failed to write document {}", path.display()))]
    DocumentWriteError {
        path: PathBuf,
        source: std::io::Error,
    },
}
