//! UI components built with Leptos.
//!
//! - [`Page`] - Page layout (main entry point)
//! - [`nav`] - Header with the mode switch
//! - [`share`] - Drop area, upload progress and file links
//! - [`paste`] - Paste editor and link
//! - [`faq`] - Help content
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod faq;
pub mod icons;
pub mod nav;
mod page;
pub mod paste;
pub mod share;

pub use page::Page;
