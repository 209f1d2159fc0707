use crate::{formats::DEFAULT_PADDING, Level};
use std::collections::BTreeMap;

// The process-wide book-keeping behind the configuration facade:
// the known logger names with their optional threshold overrides,
// and the padding width for the logger-name field.
#[derive(Debug)]
pub(crate) struct Registry {
    // name -> threshold override; None for names that are only registered
    // for padding purposes
    entries: BTreeMap<String, Option<Level>>,
    padding: usize,
    grow_padding: bool,
}

impl Registry {
    pub(crate) fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            padding: DEFAULT_PADDING,
            grow_padding: false,
        }
    }

    // Makes a logger name known without touching an existing override.
    pub(crate) fn register(&mut self, name: &str) {
        self.entries.entry(name.to_string()).or_insert(None);
    }

    // Sets the threshold of exactly the given name; siblings and ancestors
    // are not affected.
    pub(crate) fn set_level(&mut self, name: &str, level: Level) {
        self.entries.insert(name.to_string(), Some(level));
    }

    // The threshold override for exactly the given name, if any.
    pub(crate) fn threshold(&self, name: &str) -> Option<Level> {
        self.entries.get(name).copied().flatten()
    }

    pub(crate) fn padding(&self) -> usize {
        self.padding
    }

    pub(crate) fn grow_padding(&self) -> bool {
        self.grow_padding
    }

    pub(crate) fn enable_padding_growth(&mut self) {
        self.grow_padding = true;
    }

    // Raises the padding width to the longest registered logger name.
    // Returns the new width if it did grow.
    pub(crate) fn widen_padding(&mut self) -> Option<usize> {
        let longest = self.entries.keys().map(String::len).max().unwrap_or(0);
        if longest > self.padding {
            self.padding = longest;
            Some(longest)
        } else {
            None
        }
    }
}
