// brix-block/src/render.rs

use brix_dom::tree::DomNode;
use brix_dom::{AttrValue, VNode};

use crate::edit::Edit;

/// Render a vnode tree into a materialized template plus the ordered edit
/// list. Static attributes and children are materialized verbatim; every
/// hole becomes an edit instead of content.
///
/// Edits come out in depth-first pre-order. Paths number only materialized
/// children (a hole does not consume a path segment), so every recorded
/// path resolves against the pristine template before any edit has been
/// applied. Child-edit slot indices keep the authored sibling position,
/// which restores the authored order when edits are applied in sequence.
pub fn render_template(vnode: &VNode) -> (DomNode, Vec<Edit>) {
    let mut edits = Vec::new();
    let mut path = Vec::new();
    let root = render_node(vnode, &mut path, &mut edits);
    (root, edits)
}

fn render_node(vnode: &VNode, path: &mut Vec<usize>, edits: &mut Vec<Edit>) -> DomNode {
    match vnode {
        VNode::Text(t) => DomNode::text(t.clone()),
        VNode::Hole(_) => {
            // A hole is only legal as an attribute value or a child slot;
            // the child loop below intercepts it before recursing.
            debug_assert!(false, "hole rendered outside a child position");
            DomNode::text("")
        }
        VNode::Element {
            tag,
            props,
            children,
        } => {
            let el = DomNode::element(tag.clone());
            for (name, value) in props.iter() {
                match value {
                    AttrValue::Hole(prop) => edits.push(Edit::Attribute {
                        path: path.clone(),
                        name: name.to_string(),
                        prop: prop.clone(),
                    }),
                    AttrValue::Static(v) => el.set_attr(name, v),
                }
            }
            let mut slot = 0usize;
            for (index, child) in children.iter().enumerate() {
                match child {
                    VNode::Hole(prop) => edits.push(Edit::Child {
                        path: path.clone(),
                        index,
                        prop: prop.clone(),
                    }),
                    _ => {
                        path.push(slot);
                        let node = render_node(child, path, edits);
                        path.pop();
                        el.append_child(node);
                        slot += 1;
                    }
                }
            }
            el
        }
    }
}

/// Follow a path of child indices down from `root`. An empty path is the
/// root itself. The path must have been produced by `render_template`
/// against this tree's own shape; anything else is an integrity violation
/// of the renderer/factory pairing, not a recoverable error.
pub fn resolve(root: &DomNode, path: &[usize]) -> DomNode {
    let mut node = root.clone();
    for &i in path {
        node = node
            .child(i)
            .expect("edit path escapes the rendered template");
    }
    node
}
