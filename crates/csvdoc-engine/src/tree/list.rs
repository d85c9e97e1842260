//! List grouping: a contiguous run of `ul`/`ol` rows folded into nested
//! lists keyed by row depth.
//!
//! Lists are accumulated in a small arena of owned list builders; a
//! nested list is attached to its parent item by arena handle, so no
//! level ever holds a reference into another. Levels are only ever
//! created or replaced, never re-parented: after returning to a
//! shallower depth, a later row at the old depth targets the level that
//! is still tracked there.

use crate::rows::{Attrs, DocRow, tag};
use crate::tree::types::{Node, NodeChild, NodeContent};

/// An in-progress list: its element tag, level attributes, and items in
/// order. `items` never holds attributes; list rows only attribute the
/// list element itself.
struct ListAccum {
    tag: String,
    attrs: Attrs,
    items: Vec<Item>,
}

#[derive(Default)]
struct Item {
    text: String,
    /// Arena handles of sub-lists nested under this item.
    subs: Vec<usize>,
}

/// The list currently open at one depth, with the tag identity that
/// opened it (family breaks compare against this).
#[derive(Clone)]
struct Level {
    handle: usize,
    tag: String,
}

/// Consumes the list run starting at `start`; returns the root list node
/// and the number of rows consumed.
pub(super) fn group(rows: &[DocRow], start: usize) -> (Node, usize) {
    let first = match &rows[start] {
        DocRow::Row(row) => row,
        DocRow::Blank => return (Node::branch("ul", vec![], Attrs::new()), 1),
    };

    let mut arena = vec![ListAccum {
        tag: first.tag.clone(),
        attrs: first.attrs.clone(),
        items: Vec::new(),
    }];
    let mut levels: Vec<Option<Level>> = vec![Some(Level {
        handle: 0,
        tag: first.tag.clone(),
    })];

    let mut i = start;
    while i < rows.len() {
        let DocRow::Row(row) = &rows[i] else { break };
        if !tag::is_list_tag(&row.tag) {
            break;
        }

        // A different list family at depth 0 ends the whole list; the
        // outer dispatcher starts a sibling list from this row.
        let root_tag = levels[0].as_ref().map(|l| l.tag.clone()).unwrap_or_default();
        if row.depth == 0 && i > start && row.tag != root_tag {
            break;
        }

        while levels.len() <= row.depth {
            levels.push(None);
        }

        for d in 0..=row.depth {
            match levels[d].clone() {
                None => {
                    // Synthesize the missing level: hang a new sub-list
                    // off the last item one level up, creating a
                    // placeholder item to host it if necessary. Only the
                    // row's own depth receives its attributes.
                    let attrs = if d == row.depth {
                        row.attrs.clone()
                    } else {
                        Attrs::new()
                    };
                    let handle = open_sublist(&mut arena, &levels, d, row.tag.clone(), attrs);
                    levels[d] = Some(Level {
                        handle,
                        tag: row.tag.clone(),
                    });
                }
                Some(level) if d == row.depth => {
                    if level.tag != row.tag {
                        // Family break below the root: open a sibling
                        // list on the same parent item.
                        let handle =
                            open_sublist(&mut arena, &levels, d, row.tag.clone(), row.attrs.clone());
                        levels[d] = Some(Level {
                            handle,
                            tag: row.tag.clone(),
                        });
                    } else {
                        // Same family at the same depth refreshes the
                        // level's attributes.
                        for (key, value) in &row.attrs {
                            arena[level.handle].attrs.insert(key.clone(), value.clone());
                        }
                    }
                }
                Some(_) => {}
            }
        }

        // One leaf item per consumed row, at the row's own depth.
        if let Some(level) = &levels[row.depth] {
            arena[level.handle].items.push(Item {
                text: row.value.clone().unwrap_or_default(),
                subs: Vec::new(),
            });
        }
        i += 1;
    }

    (materialize(&arena, 0), i - start)
}

/// Creates a new list in the arena and attaches it to the last item of
/// the level above `depth` (adding a placeholder item if that level has
/// none yet). Returns the new list's handle.
fn open_sublist(
    arena: &mut Vec<ListAccum>,
    levels: &[Option<Level>],
    depth: usize,
    tag: String,
    attrs: Attrs,
) -> usize {
    let handle = arena.len();
    arena.push(ListAccum {
        tag,
        attrs,
        items: Vec::new(),
    });

    let parent_handle = depth
        .checked_sub(1)
        .and_then(|d| levels[d].as_ref())
        .map(|level| level.handle);
    if let Some(parent_handle) = parent_handle {
        let parent = &mut arena[parent_handle];
        if parent.items.is_empty() {
            parent.items.push(Item::default());
        }
        if let Some(item) = parent.items.last_mut() {
            item.subs.push(handle);
        }
    }
    handle
}

/// Turns an accumulated list (and everything nested under it) into
/// owned nodes.
fn materialize(arena: &[ListAccum], handle: usize) -> Node {
    let accum = &arena[handle];
    let children = accum
        .items
        .iter()
        .map(|item| {
            let content = if item.subs.is_empty() {
                NodeContent::Text(item.text.clone())
            } else {
                let mut kids = vec![NodeChild::Text(item.text.clone())];
                kids.extend(
                    item.subs
                        .iter()
                        .map(|&sub| NodeChild::Node(materialize(arena, sub))),
                );
                NodeContent::Children(kids)
            };
            NodeChild::Node(Node {
                tag: "li".to_string(),
                content,
                attrs: Attrs::new(),
            })
        })
        .collect();
    Node {
        tag: accum.tag.clone(),
        content: NodeContent::Children(children),
        attrs: accum.attrs.clone(),
    }
}
