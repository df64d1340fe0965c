// ABOUTME: The content relocator: indexes fragments by key and moves their children into slots.
// ABOUTME: Every "not found" case is skipped and reported, never raised.

//! Content relocation.
//!
//! A run has two steps:
//! 1. Index every fragment element by its key attribute. Later fragments with
//!    the same key replace earlier ones.
//! 2. For each key in first-insertion order, find the element whose id is
//!    `slot_prefix + key`, drop its children, and move the fragment's
//!    children into it one at a time, in order.
//!
//! Lookups are live: each slot lookup sees the tree as left by the previous
//! relocations of the same run. A fragment detached by an earlier relocation
//! still moves its children. An empty fragment still clears its slot.

use std::fs;
use std::path::Path;

use dom_query::Document;

use crate::error::{RelocateError, Result};
use crate::options::{Options, RelocatorBuilder};
use crate::registry::Registry;
use crate::report::{Relocation, RelocationReport, Skip, SkipReason};
use crate::tree::DocumentTree;

/// Relocated HTML plus what happened to produce it.
#[derive(Debug, Clone)]
pub struct Relocated {
    pub html: String,
    pub report: RelocationReport,
}

/// Moves fragment children into their slots according to [`Options`].
#[derive(Debug, Clone, Default)]
pub struct Relocator {
    opts: Options,
}

impl Relocator {
    /// Create a relocator from already validated options.
    pub fn new(opts: Options) -> Self {
        Self { opts }
    }

    pub fn builder() -> RelocatorBuilder {
        RelocatorBuilder::new()
    }

    pub fn options(&self) -> &Options {
        &self.opts
    }

    /// Runs one relocation pass over `tree`.
    pub fn run<T: DocumentTree>(&self, tree: &mut T) -> RelocationReport {
        let registry = Registry::index(&*tree, &self.opts.fragment_tag, &self.opts.key_attribute);
        let mut report = RelocationReport {
            indexed: registry.len(),
            ..Default::default()
        };

        for (cid, fragment) in registry.iter() {
            match self.relocate_one(tree, cid, fragment) {
                Ok(relocation) => {
                    tracing::debug!(
                        cid = %relocation.cid,
                        slot = %relocation.slot_id,
                        moved = relocation.moved,
                        replaced = relocation.replaced,
                        "relocated fragment"
                    );
                    report.relocated.push(relocation);
                }
                Err(skip) => {
                    tracing::debug!(cid = ?skip.cid, reason = %skip.reason, "skipped fragment");
                    report.skipped.push(skip);
                }
            }
        }

        tracing::info!(
            indexed = report.indexed,
            relocated = report.relocated.len(),
            skipped = report.skipped.len(),
            "relocation pass finished"
        );
        report
    }

    fn relocate_one<T: DocumentTree>(
        &self,
        tree: &mut T,
        cid: Option<&str>,
        fragment: T::Handle,
    ) -> std::result::Result<Relocation, Skip> {
        let skip = |slot_id: Option<String>, reason: SkipReason| Skip {
            cid: cid.map(str::to_string),
            slot_id,
            reason,
        };

        let Some(cid) = cid else {
            return Err(skip(None, SkipReason::MissingKey));
        };
        let slot_id = self.opts.slot_id(cid);

        let Some(slot) = tree.element_by_id(&slot_id) else {
            return Err(skip(Some(slot_id), SkipReason::MissingSlot));
        };
        if !tree.contains(fragment) {
            return Err(skip(Some(slot_id), SkipReason::MissingFragment));
        }
        if tree.is_inclusive_ancestor(fragment, slot) {
            return Err(skip(Some(slot_id), SkipReason::SlotInsideFragment));
        }

        let children = tree.children(fragment);
        let replaced = tree.clear_children(slot);
        for child in &children {
            tree.move_child(slot, *child);
        }

        Ok(Relocation {
            cid: cid.to_string(),
            slot_id,
            moved: children.len(),
            replaced,
        })
    }

    /// Parses `html`, relocates, and serializes the whole document.
    pub fn relocate_html(&self, html: &str) -> Relocated {
        let mut doc = Document::from(html);
        let report = self.run(&mut doc);
        Relocated {
            html: doc.html().to_string(),
            report,
        }
    }

    /// Relocates the HTML file at `input` and writes the result to `output`.
    ///
    /// `input` and `output` may be the same path.
    pub fn relocate_file(&self, input: &Path, output: &Path) -> Result<RelocationReport> {
        let html = fs::read_to_string(input).map_err(|e| RelocateError::io("read", input, e))?;
        let relocated = self.relocate_html(&html);
        fs::write(output, relocated.html).map_err(|e| RelocateError::io("write", output, e))?;
        Ok(relocated.report)
    }
}
