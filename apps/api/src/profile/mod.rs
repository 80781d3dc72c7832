// Application profile: the typed form model, its section updates, and the advisory
// completeness rules used for progress display.

pub mod completeness;
pub mod models;
pub mod ordered_set;
pub mod sections;
pub mod validation;

pub use models::ApplicationProfile;
pub use ordered_set::OrderedSet;
pub use sections::{SectionId, SectionUpdate};
