//! Leaf path indexing over an inferred schema tree

use indexmap::IndexMap;

use crate::nest::types::SchemaNode;

/// Mapping from original column name to the key path of its leaf,
/// root-to-leaf
pub type LeafIndex = IndexMap<String, Vec<String>>;

/// Walk `tree` depth-first and record the key path to every leaf under that
/// leaf's column name.
///
/// The index is constructed fresh on every call and returned by value, so
/// independent inference runs can never see each other's entries. If two
/// leaves carry the same column name (duplicate input names, unsupported)
/// the later-visited path silently wins.
pub fn leaf_index(tree: &SchemaNode) -> LeafIndex {
    let mut index = LeafIndex::new();
    let mut path = Vec::new();
    collect(tree, &mut path, &mut index);
    index
}

fn collect(node: &SchemaNode, path: &mut Vec<String>, index: &mut LeafIndex) {
    match node {
        SchemaNode::Leaf(column) => {
            index.insert(column.clone(), path.clone());
        }
        SchemaNode::Group(children) => {
            for (key, child) in children {
                path.push(key.clone());
                collect(child, path, index);
                path.pop();
            }
        }
    }
}
