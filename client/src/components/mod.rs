//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and the comment board from the shared
//! `RwSignal<Portfolio>` context and route user input through the
//! `PageController` context.

pub mod comment_form;
pub mod comment_list;
pub mod info_panels;
pub mod location_map;
pub mod session_banner;
pub mod tab_bar;
