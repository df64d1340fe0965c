// ABOUTME: Configuration options for the relocator and the RelocatorBuilder fluent API.
// ABOUTME: Defaults match the `<content cid="..">` / `id="content-.."` markup contract.

use crate::error::{RelocateError, Result};
use crate::relocator::Relocator;

pub const DEFAULT_FRAGMENT_TAG: &str = "content";
pub const DEFAULT_KEY_ATTRIBUTE: &str = "cid";
pub const DEFAULT_SLOT_PREFIX: &str = "content-";

/// Markup contract for one relocation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Tag of the source fragment elements.
    pub fragment_tag: String,
    /// Attribute holding the fragment key.
    pub key_attribute: String,
    /// Prepended to the key to form the slot's `id`.
    pub slot_prefix: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            fragment_tag: DEFAULT_FRAGMENT_TAG.to_string(),
            key_attribute: DEFAULT_KEY_ATTRIBUTE.to_string(),
            slot_prefix: DEFAULT_SLOT_PREFIX.to_string(),
        }
    }
}

impl Options {
    /// The slot id addressed by a fragment key.
    pub fn slot_id(&self, cid: &str) -> String {
        format!("{}{}", self.slot_prefix, cid)
    }

    /// Checks that the fragment tag and key attribute are usable.
    ///
    /// The slot prefix may be empty, in which case the key is the slot id.
    pub fn validate(&self) -> Result<()> {
        if self.fragment_tag.trim().is_empty() {
            return Err(RelocateError::invalid_options(
                "validate",
                "fragment tag is empty",
            ));
        }
        if !self
            .fragment_tag
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(RelocateError::invalid_options(
                "validate",
                format!("fragment tag {:?} is not an element name", self.fragment_tag),
            ));
        }
        if self.key_attribute.trim().is_empty() {
            return Err(RelocateError::invalid_options(
                "validate",
                "key attribute is empty",
            ));
        }
        Ok(())
    }
}

/// Builder for constructing a Relocator with custom options.
#[derive(Debug, Clone, Default)]
pub struct RelocatorBuilder {
    opts: Options,
}

impl RelocatorBuilder {
    /// Create a new RelocatorBuilder with default options.
    pub fn new() -> Self {
        Self {
            opts: Options::default(),
        }
    }

    /// Set the tag of source fragment elements.
    pub fn fragment_tag(mut self, tag: impl Into<String>) -> Self {
        self.opts.fragment_tag = tag.into();
        self
    }

    /// Set the attribute holding each fragment's key.
    pub fn key_attribute(mut self, attr: impl Into<String>) -> Self {
        self.opts.key_attribute = attr.into();
        self
    }

    /// Set the prefix that turns a key into a slot id.
    pub fn slot_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.opts.slot_prefix = prefix.into();
        self
    }

    /// Validate the options and build the Relocator.
    pub fn build(self) -> Result<Relocator> {
        self.opts.validate()?;
        Ok(Relocator::new(self.opts))
    }
}
