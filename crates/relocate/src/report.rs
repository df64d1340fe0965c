// ABOUTME: Serializable outcome of one relocation run.
// ABOUTME: Records what moved and why each unmatched registry entry was skipped.

use std::fmt;

use serde::Serialize;

/// Why a registry entry was left alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Fragments without a key attribute cannot address a slot.
    MissingKey,
    /// No element carries the composed slot id.
    MissingSlot,
    /// The fragment handle no longer resolves in the tree.
    MissingFragment,
    /// The slot is the fragment or sits inside it.
    SlotInsideFragment,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SkipReason::MissingKey => "missing key",
            SkipReason::MissingSlot => "missing slot",
            SkipReason::MissingFragment => "missing fragment",
            SkipReason::SlotInsideFragment => "slot inside fragment",
        };
        write!(f, "{}", s)
    }
}

/// A fragment whose children were moved into its slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Relocation {
    pub cid: String,
    pub slot_id: String,
    /// Nodes moved from the fragment into the slot.
    pub moved: usize,
    /// Placeholder nodes dropped from the slot.
    pub replaced: usize,
}

/// A registry entry that was skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Skip {
    pub cid: Option<String>,
    pub slot_id: Option<String>,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RelocationReport {
    /// Distinct keys found among fragment elements.
    pub indexed: usize,
    pub relocated: Vec<Relocation>,
    pub skipped: Vec<Skip>,
}

impl RelocationReport {
    pub fn moved_nodes(&self) -> usize {
        self.relocated.iter().map(|r| r.moved).sum()
    }

    /// True if no node moved during the run.
    pub fn is_noop(&self) -> bool {
        self.moved_nodes() == 0
    }

    /// Skips recorded for a given reason.
    pub fn skipped_for(&self, reason: SkipReason) -> impl Iterator<Item = &Skip> {
        self.skipped.iter().filter(move |s| s.reason == reason)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
