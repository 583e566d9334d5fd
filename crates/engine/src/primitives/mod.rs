//! Entity stores
//!
//! One stateless facade per entity type, each holding only an
//! `Arc<Database>`:
//! - [`UserStore`]: idempotent user creation and lookup
//! - [`ThreadStore`]: implicit create-on-update, listing, joined fetch
//! - [`StepStore`]: create-once steps with shallow-merge updates
//! - [`ElementStore`]: whole-record upsert of attachments
//! - [`FeedbackStore`]: feedback keyed by (thread, step)
//!
//! Clone is cheap (just an Arc clone); clones share the same data.

pub mod elements;
pub mod feedback;
pub mod steps;
pub mod threads;
pub mod users;

pub use elements::ElementStore;
pub use feedback::FeedbackStore;
pub use steps::StepStore;
pub use threads::ThreadStore;
pub use users::UserStore;
