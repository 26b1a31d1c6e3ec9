//! Luach-Live Shared Contract
//!
//! Record shapes, insert/update payloads, and input validation for the REST
//! API. Both the server and the WASM client depend on this crate, so the wire
//! format (camelCase JSON) is defined exactly once.

pub mod item;
pub mod progress;
pub mod validate;

pub use item::{DashboardItem, NewDashboardItem, UpdateDashboardItem};
pub use progress::{NewProgressGroup, ProgressGroup, UpdateProgressGroup};
pub use validate::ValidationError;
