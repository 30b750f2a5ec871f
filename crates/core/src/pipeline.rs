use crate::config::AppConfig;
use crate::models::{AutotagStatus, EntryOutcome, ImportSummary, PerformerStatus};
use crate::scanner::{self, Blacklist};
use crate::ImportError;
use stash_api::StashClient;
use std::path::Path;
use tracing::{debug, info};

/// Asks whether a performer should be added.
pub trait ConfirmPrompt {
    fn confirm(&self, name: &str) -> anyhow::Result<bool>;
}

/// Confirms everything. Used when confirmation is switched off.
#[derive(Debug, Default)]
pub struct AssumeYes;

impl ConfirmPrompt for AssumeYes {
    fn confirm(&self, _name: &str) -> anyhow::Result<bool> {
        Ok(true)
    }
}

pub struct Importer {
    client: StashClient,
    blacklist: Blacklist,
    skip_confirmation: bool,
    autotag: bool,
}

impl Importer {
    pub fn new(config: &AppConfig, client: StashClient) -> Self {
        Self {
            client,
            blacklist: Blacklist::new(&config.performers.blacklist),
            skip_confirmation: config.import.skip_confirmation,
            autotag: config.import.autotag,
        }
    }

    /// HTTP-backed importer for the configured endpoint.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config, StashClient::http(&config.stash.endpoint))
    }

    /// Processes each name in order, handing every outcome to `on_outcome` as soon as it is known.
    pub async fn run<P, F>(
        &self,
        names: &[String],
        prompt: &P,
        mut on_outcome: F,
    ) -> anyhow::Result<ImportSummary>
    where
        P: ConfirmPrompt + ?Sized,
        F: FnMut(&EntryOutcome),
    {
        let mut summary = ImportSummary {
            discovered: names.len(),
            ..ImportSummary::default()
        };
        for name in names {
            let outcome = self.process(name, prompt).await?;
            summary.record(&outcome);
            on_outcome(&outcome);
        }
        info!(
            created = summary.created,
            existing = summary.existing,
            failed = summary.create_failed,
            "import finished"
        );
        Ok(summary)
    }

    pub async fn process<P>(&self, name: &str, prompt: &P) -> anyhow::Result<EntryOutcome>
    where
        P: ConfirmPrompt + ?Sized,
    {
        if self.blacklist.matches(name) {
            debug!(performer = name, "blacklisted");
            return Ok(EntryOutcome::Blacklisted {
                name: name.to_string(),
            });
        }

        if !self.skip_confirmation {
            let accepted = prompt
                .confirm(name)
                .map_err(|e| ImportError::Prompt(format!("{name}: {e:#}")))?;
            if !accepted {
                return Ok(EntryOutcome::Declined {
                    name: name.to_string(),
                });
            }
        }

        let performer = self.ensure_performer(name).await;
        let autotag = if self.autotag {
            Some(self.start_autotag(name, &performer).await)
        } else {
            None
        };

        Ok(EntryOutcome::Processed {
            name: name.to_string(),
            performer,
            autotag,
        })
    }

    async fn ensure_performer(&self, name: &str) -> PerformerStatus {
        if let Some(id) = self.client.find_performer(name).await {
            debug!(performer = name, %id, "performer already exists");
            return PerformerStatus::Existing(id);
        }
        match self.client.create_performer(name).await {
            Some(id) => {
                info!(performer = name, %id, "created performer");
                PerformerStatus::Created(id)
            }
            None => PerformerStatus::CreateFailed,
        }
    }

    async fn start_autotag(&self, name: &str, performer: &PerformerStatus) -> AutotagStatus {
        let Some(id) = performer.id() else {
            debug!(performer = name, "no performer id, not autotagging");
            return AutotagStatus::Skipped;
        };
        if self.client.autotag_performer(id).await {
            AutotagStatus::Started
        } else {
            AutotagStatus::Failed
        }
    }
}

/// Lists the root and runs every folder through the importer.
pub async fn run_from_root<P, F>(
    importer: &Importer,
    root: &Path,
    prompt: &P,
    on_outcome: F,
) -> anyhow::Result<ImportSummary>
where
    P: ConfirmPrompt + ?Sized,
    F: FnMut(&EntryOutcome),
{
    let names = scanner::list_subdirectories(root)?;
    info!(root = %root.display(), folders = names.len(), "scanned performer root");
    importer.run(&names, prompt, on_outcome).await
}
