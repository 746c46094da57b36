//! Tab management
//!
//! - `page`: `TabPage` wrapper that hides inactive tabs
//! - `registry`: maps tab.key to its page view
//! - `tab_labels`: titles for every known tab key

pub mod page;
pub mod registry;
pub mod tab_labels;

pub use page::TabPage;
pub use tab_labels::tab_label_for_key;
