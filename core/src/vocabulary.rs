//! The immutable fragment registry.
//!
//! A [`Vocabulary`] is built once, usually at startup, and then only read.
//! It holds no interior mutability, so a shared reference (or an `Arc`) can
//! be handed to any number of threads without locking.
//!
//! # Examples
//!
//! ```
//! use sql_vocab_core::{FragmentCategory, Vocabulary, VocabError};
//!
//! let vocab = Vocabulary::builtin();
//! assert_eq!(vocab.fragment("where").unwrap(), " WHERE ");
//! assert_eq!(vocab.fragment("TTTMisc").unwrap(), "TTTMisc");
//! assert!(matches!(vocab.fragment("wher"), Err(VocabError::UnknownFragment(_))));
//!
//! let custom = Vocabulary::builder()
//!     .with_builtins()
//!     .table("Users")
//!     .column("Email")
//!     .build()
//!     .unwrap();
//! assert!(custom.contains(FragmentCategory::TableName, "Users"));
//! ```

use std::collections::BTreeMap;
use std::sync::OnceLock;

use crate::error::{Result, VocabError};
use crate::fragment::{Fragment, FragmentCategory, builtin_fragments};

/// Read-only table of named SQL fragments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    entries: BTreeMap<FragmentCategory, BTreeMap<String, Fragment>>,
}

impl Vocabulary {
    /// Returns a builder starting from an empty vocabulary.
    pub fn builder() -> VocabularyBuilder {
        VocabularyBuilder::default()
    }

    /// The built-in keywords, operators, suffixes, tables and columns.
    ///
    /// Returns an owned copy of [`shared`](Self::shared).
    pub fn builtin() -> Self {
        Self::shared().clone()
    }

    /// The built-in vocabulary, built on first use and kept for the life of
    /// the process.
    pub fn shared() -> &'static Vocabulary {
        static BUILTIN: OnceLock<Vocabulary> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            let mut entries: BTreeMap<FragmentCategory, BTreeMap<String, Fragment>> =
                BTreeMap::new();
            for fragment in builtin_fragments() {
                entries
                    .entry(fragment.category)
                    .or_default()
                    .insert(fragment.name.clone(), fragment);
            }
            Vocabulary { entries }
        })
    }

    /// Resolves a fragment by name across all categories.
    ///
    /// Categories are searched in [`FragmentCategory::ALL`] order, so a
    /// keyword shadows a column of the same name.
    ///
    /// # Errors
    ///
    /// Returns [`VocabError::UnknownFragment`] if no category registers `name`.
    pub fn fragment(&self, name: &str) -> Result<&str> {
        FragmentCategory::ALL
            .iter()
            .find_map(|category| self.get(*category, name))
            .map(|fragment| fragment.value.as_str())
            .ok_or_else(|| VocabError::UnknownFragment(name.to_string()))
    }

    /// Resolves a fragment by name within one category.
    ///
    /// # Errors
    ///
    /// Returns [`VocabError::UnknownFragment`] if `category` has no such name.
    pub fn fragment_in(&self, category: FragmentCategory, name: &str) -> Result<&str> {
        self.get(category, name)
            .map(|fragment| fragment.value.as_str())
            .ok_or_else(|| VocabError::UnknownFragment(format!("{category} {name}")))
    }

    /// Returns the full fragment record, if registered.
    pub fn get(&self, category: FragmentCategory, name: &str) -> Option<&Fragment> {
        self.entries.get(&category)?.get(name)
    }

    /// Returns `true` if `category` registers `name`.
    pub fn contains(&self, category: FragmentCategory, name: &str) -> bool {
        self.get(category, name).is_some()
    }

    /// Fragments of one category, ordered by name.
    pub fn fragments(&self, category: FragmentCategory) -> impl Iterator<Item = &Fragment> {
        self.entries
            .get(&category)
            .into_iter()
            .flat_map(|by_name| by_name.values())
    }

    /// Every fragment, grouped by category in lookup order.
    pub fn iter(&self) -> impl Iterator<Item = &Fragment> {
        self.entries.values().flat_map(|by_name| by_name.values())
    }

    pub fn len(&self) -> usize {
        self.entries.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Collects fragments and checks them for clashes before freezing them into
/// a [`Vocabulary`].
#[derive(Debug, Clone, Default)]
pub struct VocabularyBuilder {
    pending: Vec<Fragment>,
}

impl VocabularyBuilder {
    /// Queues every built-in fragment.
    pub fn with_builtins(mut self) -> Self {
        self.pending.extend(builtin_fragments());
        self
    }

    pub fn fragment(
        mut self,
        category: FragmentCategory,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.pending.push(Fragment::new(category, name, value));
        self
    }

    /// Queues a table identifier.
    pub fn table(mut self, name: impl Into<String>) -> Self {
        self.pending
            .push(Fragment::identifier(FragmentCategory::TableName, name));
        self
    }

    /// Queues a column identifier.
    pub fn column(mut self, name: impl Into<String>) -> Self {
        self.pending
            .push(Fragment::identifier(FragmentCategory::ColumnName, name));
        self
    }

    /// Freezes the queued fragments.
    ///
    /// Re-registering an identical fragment is a no-op, so the same column
    /// can be declared by several tables.
    ///
    /// # Errors
    ///
    /// Returns [`VocabError::DuplicateFragment`] if a name is queued twice in
    /// one category with different values, and
    /// [`VocabError::MalformedSchema`] for an empty name.
    pub fn build(self) -> Result<Vocabulary> {
        let mut entries: BTreeMap<FragmentCategory, BTreeMap<String, Fragment>> = BTreeMap::new();
        for fragment in self.pending {
            if fragment.name.is_empty() {
                return Err(VocabError::MalformedSchema(format!(
                    "{} fragment name cannot be empty",
                    fragment.category
                )));
            }
            let by_name = entries.entry(fragment.category).or_default();
            match by_name.get(&fragment.name) {
                Some(existing) if existing.value == fragment.value => {}
                Some(_) => {
                    return Err(VocabError::DuplicateFragment {
                        category: fragment.category,
                        name: fragment.name,
                    });
                }
                None => {
                    by_name.insert(fragment.name.clone(), fragment);
                }
            }
        }
        Ok(Vocabulary { entries })
    }
}
