use serde::Serialize;
use stash_api::PerformerId;

/// What happened to one performer folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryOutcome {
    Blacklisted {
        name: String,
    },
    Declined {
        name: String,
    },
    Processed {
        name: String,
        performer: PerformerStatus,
        /// `None` when autotagging is disabled.
        autotag: Option<AutotagStatus>,
    },
}

impl EntryOutcome {
    pub fn name(&self) -> &str {
        match self {
            EntryOutcome::Blacklisted { name }
            | EntryOutcome::Declined { name }
            | EntryOutcome::Processed { name, .. } => name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PerformerStatus {
    Existing(PerformerId),
    Created(PerformerId),
    CreateFailed,
}

impl PerformerStatus {
    pub fn id(&self) -> Option<&PerformerId> {
        match self {
            PerformerStatus::Existing(id) | PerformerStatus::Created(id) => Some(id),
            PerformerStatus::CreateFailed => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutotagStatus {
    Started,
    Failed,
    /// No identifier was available to tag.
    Skipped,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    pub discovered: usize,
    pub blacklisted: usize,
    pub declined: usize,
    pub existing: usize,
    pub created: usize,
    pub create_failed: usize,
    pub autotag_started: usize,
    pub autotag_failed: usize,
    pub autotag_skipped: usize,
}

impl ImportSummary {
    pub fn record(&mut self, outcome: &EntryOutcome) {
        match outcome {
            EntryOutcome::Blacklisted { .. } => self.blacklisted += 1,
            EntryOutcome::Declined { .. } => self.declined += 1,
            EntryOutcome::Processed {
                performer, autotag, ..
            } => {
                match performer {
                    PerformerStatus::Existing(_) => self.existing += 1,
                    PerformerStatus::Created(_) => self.created += 1,
                    PerformerStatus::CreateFailed => self.create_failed += 1,
                }
                match autotag {
                    Some(AutotagStatus::Started) => self.autotag_started += 1,
                    Some(AutotagStatus::Failed) => self.autotag_failed += 1,
                    Some(AutotagStatus::Skipped) => self.autotag_skipped += 1,
                    None => {}
                }
            }
        }
    }
}
