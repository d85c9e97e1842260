//! Blockquote grouping: a contiguous run of quote rows nested by depth
//! over an explicit stack of owned frames.

use crate::rows::{Attrs, DocRow};
use crate::tree::types::{Node, NodeChild, NodeContent};

/// A quote element still being filled. Frames own their children; a
/// nested quote is attached to its parent only when it closes.
struct Frame {
    attrs: Attrs,
    children: Vec<NodeChild>,
}

/// Consumes the quote run starting at `start`; returns the root
/// blockquote node and the number of rows consumed.
pub(super) fn group(rows: &[DocRow], start: usize) -> (Node, usize) {
    let first = match &rows[start] {
        DocRow::Row(row) => row,
        DocRow::Blank => return (Node::branch("blockquote", vec![], Attrs::new()), 1),
    };

    let mut stack = vec![Frame {
        attrs: first.attrs.clone(),
        children: Vec::new(),
    }];
    let mut current_depth = first.depth;

    let mut i = start;
    while i < rows.len() {
        let DocRow::Row(row) = &rows[i] else { break };
        if row.tag != "blockquote" {
            break;
        }

        // Entering a deeper level opens exactly one nested quote,
        // attributed from this row, regardless of how far the depth
        // jumped.
        if row.depth > current_depth {
            stack.push(Frame {
                attrs: row.attrs.clone(),
                children: Vec::new(),
            });
            current_depth = row.depth;
        }

        // Returning shallower closes nested quotes one level at a time,
        // clamped at the root.
        while row.depth < current_depth && stack.len() > 1 {
            close_top(&mut stack);
            current_depth -= 1;
        }

        // Only a row whose depth matches the (possibly adjusted) top
        // contributes a paragraph; a clamped pop leaves the row's value
        // unplaced.
        if row.depth == current_depth
            && let Some(top) = stack.last_mut()
        {
            top.children.push(NodeChild::Node(Node::leaf(
                "p",
                row.value.clone().unwrap_or_default(),
                Attrs::new(),
            )));
        }
        i += 1;
    }

    while stack.len() > 1 {
        close_top(&mut stack);
    }
    let root = stack.remove(0);
    (
        Node {
            tag: "blockquote".to_string(),
            content: NodeContent::Children(root.children),
            attrs: root.attrs,
        },
        i - start,
    )
}

/// Pops the top frame and attaches it to the new top as a finished
/// nested blockquote.
fn close_top(stack: &mut Vec<Frame>) {
    if let Some(frame) = stack.pop()
        && let Some(parent) = stack.last_mut()
    {
        parent.children.push(NodeChild::Node(Node {
            tag: "blockquote".to_string(),
            content: NodeContent::Children(frame.children),
            attrs: frame.attrs,
        }));
    }
}

#[cfg(test)]
mod tests {
    use crate::render::render;
    use crate::rows::{FileType, parse_document};
    use crate::tree::build;
    use pretty_assertions::assert_eq;

    fn html(input: &str) -> String {
        render(&build(&parse_document(input, FileType::Csv).unwrap()))
    }

    #[test]
    fn rows_at_the_same_depth_share_one_quote() {
        assert_eq!(
            html("blockquote,first\nblockquote,second"),
            "<blockquote><p>first</p><p>second</p></blockquote>"
        );
    }

    #[test]
    fn deeper_rows_nest_and_shallow_rows_return() {
        assert_eq!(
            html("blockquote,outer\n_blockquote,inner\nblockquote,back"),
            "<blockquote><p>outer</p><blockquote><p>inner</p></blockquote><p>back</p></blockquote>"
        );
    }

    #[test]
    fn deep_then_shallow_appends_to_the_root() {
        // depths 0,1,2,0
        assert_eq!(
            html("blockquote,a\n_blockquote,b\n__blockquote,c\nblockquote,d"),
            "<blockquote><p>a</p><blockquote><p>b</p><blockquote><p>c</p></blockquote></blockquote><p>d</p></blockquote>"
        );
    }

    #[test]
    fn depth_skip_opens_a_single_nested_quote() {
        // jumping 0 -> 2 still opens only one level
        assert_eq!(
            html("blockquote,first\n___blockquote,third"),
            "<blockquote><p>first</p><blockquote><p>third</p></blockquote></blockquote>"
        );
    }

    #[test]
    fn alternating_depths_open_fresh_nested_quotes() {
        assert_eq!(
            html("blockquote,l1\n_blockquote,l2\nblockquote,back\n_blockquote,l2 again\n__blockquote,l3\nblockquote,end"),
            "<blockquote><p>l1</p><blockquote><p>l2</p></blockquote><p>back</p><blockquote><p>l2 again</p><blockquote><p>l3</p></blockquote></blockquote><p>end</p></blockquote>"
        );
    }

    #[test]
    fn attributes_apply_per_level() {
        assert_eq!(
            html("blockquote,quoted,class=quote;id=main-quote\n_blockquote,nested,class=nested-quote"),
            "<blockquote class=\"quote\" id=\"main-quote\"><p>quoted</p><blockquote class=\"nested-quote\"><p>nested</p></blockquote></blockquote>"
        );
    }

    #[test]
    fn empty_values_become_empty_paragraphs() {
        assert_eq!(
            html("blockquote,\nblockquote,"),
            "<blockquote><p></p><p></p></blockquote>"
        );
    }

    #[test]
    fn run_ends_at_other_tags() {
        assert_eq!(
            html("blockquote,quoted\np,plain"),
            "<blockquote><p>quoted</p></blockquote>\n<p>plain</p>"
        );
    }
}
