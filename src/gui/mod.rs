//! # Windows GUI Module
//!
//! Native Win32 shell built on the windows-rs crate.
//!
//! ## Architecture Overview
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                        Win32 shell                        │
//! │  ┌───────────────┐   ┌──────────────┐   ┌──────────────┐  │
//! │  │  window_proc  │──▶│  Dispatcher  │──▶│  Controller  │  │
//! │  │  (WM_* → Raw) │   │  (decode)    │   │  (drag/paint)│  │
//! │  └───────────────┘   └──────────────┘   └──────┬───────┘  │
//! │          ▲                                      │          │
//! │  Win32Platform (HWND services)      Direct2D backend       │
//! └───────────────────────────────────────────────────────────┘
//! ```

pub mod renderer;
pub mod window;

pub use renderer::Direct2D;
pub use window::run_gui;
