//! Input backends for `singletouch`.
//!
//! Implementations of [`InputSource`](crate::source::InputSource).
//!
//! # Feature flags
//! - **`win32`** — enables the polled Win32 mouse source (default; Windows only).
//!
//! [`virtual_input`] is always available and needs no hardware.

pub mod virtual_input;

#[cfg(all(feature = "win32", target_os = "windows"))]
#[cfg_attr(docsrs, doc(cfg(all(feature = "win32", target_os = "windows"))))]
pub mod windows;
