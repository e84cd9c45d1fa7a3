//! Endpoint discovery and selection workflow
//!
//! The [`Orchestrator`] walks every known network of a class, asks the
//! registry for candidate endpoints, probes each one, lets the operator pick
//! through a [`Prompter`] and records the result in the persisted connection
//! file. Networks already present in the file are never touched.

pub mod orchestrator;
pub mod presenter;
pub mod prompt;

pub use orchestrator::{Orchestrator, RunSummary};
pub use presenter::{shuffle_candidates, validate_endpoint_url, Selection, SelectionPresenter, CUSTOM_CHOICE, SKIP_CHOICE};
pub use prompt::{Prompter, TerminalPrompter};
