pub mod draft;
pub mod payment;
pub mod ports;
pub mod submission;
pub mod workflow;
