//! Output enum: the result of executing a [`Command`](crate::Command).

use chatstore_core::{Element, Page, Step, Thread, ThreadView, User};
use chatstore_engine::{DatabaseInfo, StoreConfig};
use serde::{Deserialize, Serialize};

/// Successful command result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Output {
    /// No value.
    Unit,
    /// Boolean result (deletes, step create).
    Bool(bool),
    /// Plain string (feedback id, debug URL).
    Text(String),
    /// Optional string (thread author).
    MaybeText(Option<String>),
    /// A user record.
    User(User),
    /// Optional user record.
    MaybeUser(Option<User>),
    /// A thread record.
    Thread(Thread),
    /// Optional thread with steps and elements.
    MaybeThreadView(Option<ThreadView>),
    /// One page of threads.
    ThreadPage(Page<Thread>),
    /// A step record.
    Step(Step),
    /// Optional element record.
    MaybeElement(Option<Element>),
    /// Entry counts.
    Info(DatabaseInfo),
    /// Configuration snapshot.
    Config(StoreConfig),
}

impl Output {
    /// Variant name, for error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Output::Unit => "Unit",
            Output::Bool(_) => "Bool",
            Output::Text(_) => "Text",
            Output::MaybeText(_) => "MaybeText",
            Output::User(_) => "User",
            Output::MaybeUser(_) => "MaybeUser",
            Output::Thread(_) => "Thread",
            Output::MaybeThreadView(_) => "MaybeThreadView",
            Output::ThreadPage(_) => "ThreadPage",
            Output::Step(_) => "Step",
            Output::MaybeElement(_) => "MaybeElement",
            Output::Info(_) => "Info",
            Output::Config(_) => "Config",
        }
    }
}
