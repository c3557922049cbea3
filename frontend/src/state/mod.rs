//! Application-owned state the navbar reads from and dispatches to.

pub mod auth;
pub mod theme;

pub use auth::{AuthError, AuthSnapshot, AuthState};
pub use theme::{Theme, ThemeState};
