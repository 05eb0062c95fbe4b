use std::collections::HashMap;

use log::{debug, warn};
use regex::Regex;

use crate::profile::{Profile, Schema};
use crate::table::Table;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceEntry {
    pub id: String,
    pub profile: Profile,
}

/// Reference profiles in first-seen order.
///
/// Entries live in a `Vec` so that scan order is insertion order; `index` maps an
/// identifier to its slot. Re-inserting an identifier replaces the profile but
/// keeps the original slot.
#[derive(Debug, Clone, Default)]
pub struct ReferenceCatalog {
    entries: Vec<ReferenceEntry>,
    index: HashMap<String, usize>,
    duplicate_ids: usize,
}

/// Identifiers sharing one reference profile, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ambiguity {
    pub profile: Profile,
    pub ids: Vec<String>,
}

impl Ambiguity {
    /// The one identifier of the group a sample can receive. An all-sentinel
    /// profile always classifies as no change, so then none of them can.
    pub fn assignable(&self) -> Option<&str> {
        if self.profile.is_unchanged() {
            None
        } else {
            self.ids.first().map(String::as_str)
        }
    }
}

impl ReferenceCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the profile that was replaced when `id` was already present.
    pub fn insert(&mut self, id: &str, profile: Profile) -> Option<Profile> {
        match self.index.get(id) {
            Some(&slot) => {
                self.duplicate_ids += 1;
                warn!("Reference {} appears more than once; later row overwrites earlier profile", id);
                Some(std::mem::replace(&mut self.entries[slot].profile, profile))
            }
            None => {
                self.index.insert(id.to_string(), self.entries.len());
                self.entries.push(ReferenceEntry {
                    id: id.to_string(),
                    profile,
                });
                None
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&Profile> {
        self.index.get(id).map(|&slot| &self.entries[slot].profile)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ReferenceEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn duplicate_ids(&self) -> usize {
        self.duplicate_ids
    }

    /// Groups of references whose profiles are identical. Only the first id of each
    /// group can ever be assigned.
    pub fn ambiguities(&self) -> Vec<Ambiguity> {
        let mut groups: Vec<Ambiguity> = Vec::new();
        let mut seen: HashMap<&Profile, usize> = HashMap::new();
        for entry in &self.entries {
            match seen.get(&entry.profile) {
                Some(&g) => groups[g].ids.push(entry.id.clone()),
                None => {
                    seen.insert(&entry.profile, groups.len());
                    groups.push(Ambiguity {
                        profile: entry.profile.clone(),
                        ids: vec![entry.id.clone()],
                    });
                }
            }
        }
        groups.retain(|g| g.ids.len() > 1);
        groups
    }
}

impl<'a> IntoIterator for &'a ReferenceCatalog {
    type Item = &'a ReferenceEntry;
    type IntoIter = std::slice::Iter<'a, ReferenceEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// 遍历表中的参考行（ID 匹配 `reference`），按出现顺序建立参考目录
pub fn build_catalog(table: &Table, schema: &Schema, id_column: usize, reference: &Regex) -> ReferenceCatalog {
    let mut catalog = ReferenceCatalog::new();
    for row in &table.rows {
        let id = row.get(id_column).map(String::as_str).unwrap_or("");
        if !reference.is_match(id) {
            continue;
        }
        let profile = schema.profile(row);
        debug!("{}: {}", id, schema.render(&profile));
        catalog.insert(id, profile);
    }

    for group in catalog.ambiguities() {
        match group.assignable() {
            Some(first) => warn!(
                "References {} share profile [{}]; only {} can be assigned",
                group.ids.join(", "),
                schema.render(&group.profile),
                first
            ),
            None => warn!(
                "References {} share the all-missing profile [{}]; samples with it are labeled no change, so none of them can be assigned",
                group.ids.join(", "),
                schema.render(&group.profile)
            ),
        }
    }
    catalog
}
