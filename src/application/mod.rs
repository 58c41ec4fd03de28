//! Application layer: the payment step and the workflow that orchestrates it.
//!
//! `SubmissionWorkflow` is the entry point. It owns the draft and the workflow
//! state, and talks to the outside world only through the ports in
//! `crate::domain::ports`.

pub mod payment;
pub mod workflow;
