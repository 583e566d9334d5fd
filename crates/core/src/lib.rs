//! Core types for the chatstore data layer
//!
//! This crate defines the records the store keeps and the errors it raises:
//! - Records: [`User`], [`Thread`], [`Step`], [`Element`], [`Feedback`]
//! - Listing inputs and output: [`ThreadFilter`], [`Pagination`], [`Page`]
//! - [`Fields`]: open-ended JSON fields carried by steps, elements and metadata
//! - [`StoreError`]: the unified error type

#![warn(missing_docs)]
#![warn(clippy::all)]

mod de;
pub mod element;
pub mod error;
pub mod feedback;
pub mod fields;
pub mod query;
pub mod step;
pub mod thread;
pub mod timestamp;
pub mod user;

pub use element::Element;
pub use error::{EntityRef, StoreError, StoreResult};
pub use feedback::Feedback;
pub use fields::Fields;
pub use query::{FeedbackPresence, Page, PageInfo, Pagination, ThreadFilter};
pub use step::Step;
pub use thread::{Thread, ThreadUpdate, ThreadView};
pub use timestamp::Timestamp;
pub use user::{NewUser, User};
