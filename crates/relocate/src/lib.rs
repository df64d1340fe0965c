// ABOUTME: Main library entry point for slotfill content relocation.
// ABOUTME: Re-exports the public API: Relocator, RelocatorBuilder, Options, DocumentTree, reports and errors.

//! Slotfill - moves pre-rendered markup fragments into their placeholder slots.
//!
//! Fragments are elements of a designated tag (`<content>` by default) keyed
//! by an attribute (`cid`). Each fragment's children replace the children of
//! the element whose id is `"content-" + cid`. Anything that cannot be
//! matched is skipped silently.
//!
//! # Example
//!
//! ```
//! let html = r#"<body><div id="content-a">loading</div><content cid="a">Hello</content></body>"#;
//! let out = slotfill_relocate::relocate_html(html);
//! assert!(out.contains(r#"<div id="content-a">Hello</div>"#));
//! ```

pub mod compiled;
pub mod error;
pub mod options;
pub mod registry;
pub mod relocator;
pub mod report;
pub mod tree;

pub use crate::error::{ErrorCode, RelocateError, Result};
pub use crate::options::{Options, RelocatorBuilder};
pub use crate::registry::Registry;
pub use crate::relocator::{Relocated, Relocator};
pub use crate::report::{Relocation, RelocationReport, Skip, SkipReason};
pub use crate::tree::DocumentTree;

/// Runs one relocation pass over `tree` with the default markup contract.
pub fn init<T: DocumentTree>(tree: &mut T) -> RelocationReport {
    Relocator::default().run(tree)
}

/// Relocates an HTML document with the default markup contract.
pub fn relocate_html(html: &str) -> String {
    Relocator::default().relocate_html(html).html
}
