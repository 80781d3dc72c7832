//! Form controller: owns the profile being edited, tracks the active section, and
//! persists the whole profile to the draft slot after every change.

use tracing::{info, warn};

use crate::form::draft_store::{DraftStore, DraftStoreError};
use crate::profile::completeness::{self, ProgressReport, SectionStatus};
use crate::profile::{ApplicationProfile, SectionId, SectionUpdate};

pub struct FormController<S: DraftStore> {
    store: S,
    profile: ApplicationProfile,
    current: SectionId,
}

impl<S: DraftStore> FormController<S> {
    /// Starts an empty session. Call `load_draft` to pick up a saved draft.
    pub fn new(store: S) -> Self {
        Self {
            store,
            profile: ApplicationProfile::default(),
            current: SectionId::Personal,
        }
    }

    /// Starts a session from the saved draft, if any.
    pub fn resume(store: S) -> Self {
        let mut controller = Self::new(store);
        controller.load_draft();
        controller
    }

    pub fn profile(&self) -> &ApplicationProfile {
        &self.profile
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Reads the saved draft into memory.
    ///
    /// An absent, unreadable, or corrupt draft leaves the empty default in place.
    /// Failures are logged and never surfaced.
    pub fn load_draft(&mut self) -> &ApplicationProfile {
        self.profile = match self.store.load() {
            Ok(Some(text)) => match serde_json::from_str::<ApplicationProfile>(&text) {
                Ok(profile) => {
                    info!("Loaded saved draft");
                    profile
                }
                Err(e) => {
                    warn!("Discarding corrupt draft: {e}");
                    ApplicationProfile::default()
                }
            },
            Ok(None) => ApplicationProfile::default(),
            Err(e) => {
                warn!("Could not read draft, starting empty: {e}");
                ApplicationProfile::default()
            }
        };
        &self.profile
    }

    /// Replaces one section wholesale and persists the full profile.
    ///
    /// The in-memory profile is updated even if persisting fails.
    pub fn update_section(&mut self, update: SectionUpdate) -> Result<(), DraftStoreError> {
        update.apply_to(&mut self.profile);
        self.save_draft()
    }

    /// Persists the current profile, overwriting the slot.
    pub fn save_draft(&self) -> Result<(), DraftStoreError> {
        let text = serde_json::to_string(&self.profile)?;
        self.store.save(&text)
    }

    /// Clears the slot and restores the empty profile.
    pub fn reset_draft(&mut self) -> Result<(), DraftStoreError> {
        self.profile = ApplicationProfile::default();
        self.current = SectionId::Personal;
        self.store.clear()
    }

    pub fn current_section(&self) -> SectionId {
        self.current
    }

    /// Moves to any section. Navigation is never gated on completeness.
    pub fn go_to(&mut self, section: SectionId) {
        self.current = section;
    }

    /// Advances one section; stays put on the last one.
    pub fn next(&mut self) -> SectionId {
        if let Some(next) = self.current.next() {
            self.current = next;
        }
        self.current
    }

    /// Goes back one section; stays put on the first one.
    pub fn previous(&mut self) -> SectionId {
        if let Some(previous) = self.current.previous() {
            self.current = previous;
        }
        self.current
    }

    pub fn completion_percentage(&self) -> u8 {
        completeness::completion_percentage(&self.profile)
    }

    pub fn section_statuses(&self) -> Vec<SectionStatus> {
        completeness::section_statuses(&self.profile)
    }

    pub fn progress(&self) -> ProgressReport {
        completeness::progress_report(&self.profile)
    }
}
