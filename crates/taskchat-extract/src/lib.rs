//! Task extraction: the model-facing prompt, the date normalizer, and the
//! post-processing applied to what the model returns.

pub mod assignee;
pub mod dates;
pub mod draft;
pub mod prompt;
pub mod reconcile;

pub use assignee::infer_assignee;
pub use dates::{manila_today, normalize_date, translate_weekdays};
pub use draft::TaskDraft;
pub use prompt::build_messages;
pub use reconcile::reconcile_dates;
