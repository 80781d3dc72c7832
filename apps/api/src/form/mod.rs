// Form-state management for the multi-step editor: section navigation, progress,
// and single-slot draft persistence.

pub mod controller;
pub mod draft_store;

pub use controller::FormController;
pub use draft_store::{DraftStore, DraftStoreError, FileDraftStore, MemoryDraftStore};
