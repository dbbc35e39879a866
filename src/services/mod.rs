//! Services module
//!
//! Business logic on top of the core: text classification and the
//! suspicious-word moderation workflow.

pub mod filter;
pub mod moderation;

pub use filter::ObscenityFilterService;
pub use moderation::ModerationService;
