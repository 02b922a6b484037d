//! Recursive structure inference over delimited column names
//!
//! Column names are partitioned into groups of names sharing a split
//! candidate (e.g. `user_address_city` and `user_address_zip` group under
//! `user_address`), then each group's suffixes are partitioned again until no
//! further 2+-member split exists.

use indexmap::IndexMap;
use std::collections::HashSet;

use crate::nest::splitter::{candidates, is_valid_prefix, suffix_after};
use crate::nest::types::SchemaNode;

/// Infer the nested schema tree for an ordered set of column names.
///
/// The root is always a `Group`. Every input column name ends up as exactly
/// one leaf, keyed by the suffix chain that led to it. Duplicate input names
/// are unsupported and collapse last-write-wins.
pub fn build(names: &[String]) -> SchemaNode {
    let seed: IndexMap<String, SchemaNode> = names
        .iter()
        .map(|name| (name.clone(), SchemaNode::Leaf(name.clone())))
        .collect();
    SchemaNode::Group(build_entries(&seed))
}

/// One grouping pass over `(name, content)` entries.
///
/// The first call receives one entry per raw column name, each mapped to its
/// own leaf; recursive calls receive derived suffix keys mapped to the
/// content already computed for them. Entries are processed in reverse input
/// order at every level. That ordering is a deliberate tie-break: it decides
/// which names get first refusal on ambiguous groupings, and it also fixes
/// the emission order of group keys.
fn build_entries(entries: &IndexMap<String, SchemaNode>) -> IndexMap<String, SchemaNode> {
    let names: HashSet<&str> = entries.keys().map(String::as_str).collect();
    let mut visited: HashSet<&str> = HashSet::new();
    let mut out: IndexMap<String, SchemaNode> = IndexMap::new();

    for (name, content) in entries.iter().rev() {
        if visited.contains(name.as_str()) {
            continue;
        }
        for split in candidates(name) {
            // A split that is itself a real name in this set cannot double
            // as a nesting key.
            if names.contains(split.as_str()) {
                continue;
            }

            let mut group: IndexMap<String, SchemaNode> = IndexMap::new();
            let mut owners: IndexMap<String, &str> = IndexMap::new();
            for (other, other_content) in entries.iter().rev() {
                if !visited.contains(other.as_str()) && is_valid_prefix(&split, other) {
                    let key = suffix_after(&split, other);
                    group.insert(key.clone(), other_content.clone());
                    owners.insert(key, other.as_str());
                }
            }

            // A split only earns a group when it gathers at least two
            // members; otherwise it is discarded without marking anything
            // visited so the lone member can still land elsewhere.
            if group.len() >= 2 {
                out.insert(split, SchemaNode::Group(build_entries(&group)));
                // Only the name whose entry survives per suffix key is
                // placed; a name shadowed by a duplicate suffix stays
                // unvisited so it can still land elsewhere.
                visited.extend(owners.values().copied());
                break;
            }
        }
        if !visited.contains(name.as_str()) {
            visited.insert(name.as_str());
            out.insert(name.clone(), content.clone());
        }
    }

    out
}
