//! Use-case services over the repositories.
//!
//! # Responsibility
//! - Compose repositories, the clock and the query layer into use cases.
//! - Keep callers decoupled from storage details.

pub mod contact_service;
pub mod dashboard_service;
pub mod lookup_service;
pub mod task_service;
