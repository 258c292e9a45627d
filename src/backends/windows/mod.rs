#![cfg(target_os = "windows")]

//! Windows input backend.
//!
//! - **Pointer**: [`Win32Pointer`] samples the system cursor and mouse buttons through
//!   `GetCursorPos` / `GetAsyncKeyState`.
//!
//! Windows touch input arrives through `WM_POINTER` messages owned by the host's message
//! loop; hosts that need touch mode should adapt those messages into their own
//! [`InputSource`](crate::source::InputSource).

pub mod pointer;

pub use pointer::Win32Pointer;
