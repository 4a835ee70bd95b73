//! Types shared between the dashboard frontend and any service that feeds it.

pub mod enums;
pub mod system;
