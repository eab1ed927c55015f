// brix-dom/src/tree.rs
//
// The live tree the renderer materializes into. Nodes are shared handles
// (`Rc<RefCell<..>>`), so a caller can hold a reference to a node deep in a
// mounted tree and mutate it later without re-walking from the root.

use std::cell::RefCell;
use std::rc::Rc;

/// Handle to a live tree node. Cloning the handle aliases the same node.
#[derive(Clone)]
pub struct DomNode(Rc<RefCell<NodeData>>);

#[derive(Debug)]
enum NodeData {
    Element {
        tag: String,
        attrs: Vec<(String, String)>,
        children: Vec<DomNode>,
    },
    Text(String),
    Fragment {
        children: Vec<DomNode>,
    },
}

impl DomNode {
    /// Create an element node with the given tag and no attributes.
    pub fn element(tag: impl Into<String>) -> Self {
        stats::bump_created();
        DomNode(Rc::new(RefCell::new(NodeData::Element {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        })))
    }

    /// Create a text node.
    pub fn text(content: impl Into<String>) -> Self {
        stats::bump_created();
        DomNode(Rc::new(RefCell::new(NodeData::Text(content.into()))))
    }

    /// Create a detached fragment. A fragment is never inserted itself;
    /// its children are moved out with `take_children`.
    pub fn fragment() -> Self {
        stats::bump_created();
        DomNode(Rc::new(RefCell::new(NodeData::Fragment {
            children: Vec::new(),
        })))
    }

    /// Recursively copy this node and its subtree into fresh handles.
    pub fn deep_clone(&self) -> DomNode {
        match &*self.0.borrow() {
            NodeData::Element {
                tag,
                attrs,
                children,
            } => {
                let clone = DomNode::element(tag.clone());
                if let NodeData::Element { attrs: a, children: c, .. } = &mut *clone.0.borrow_mut()
                {
                    *a = attrs.clone();
                    *c = children.iter().map(DomNode::deep_clone).collect();
                }
                clone
            }
            NodeData::Text(t) => DomNode::text(t.clone()),
            NodeData::Fragment { children } => {
                let clone = DomNode::fragment();
                if let NodeData::Fragment { children: c } = &mut *clone.0.borrow_mut() {
                    *c = children.iter().map(DomNode::deep_clone).collect();
                }
                clone
            }
        }
    }

    /// Whether two handles point at the same live node.
    pub fn same_node(&self, other: &DomNode) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub fn tag(&self) -> Option<String> {
        match &*self.0.borrow() {
            NodeData::Element { tag, .. } => Some(tag.clone()),
            _ => None,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(&*self.0.borrow(), NodeData::Text(_))
    }

    /// Set (or replace) an attribute on an element. Ignored on non-elements.
    pub fn set_attr(&self, name: &str, value: &str) {
        if let NodeData::Element { attrs, .. } = &mut *self.0.borrow_mut() {
            stats::bump_attrs_set();
            if let Some(slot) = attrs.iter_mut().find(|(k, _)| k == name) {
                slot.1 = value.to_string();
            } else {
                attrs.push((name.to_string(), value.to_string()));
            }
        }
    }

    pub fn attr(&self, name: &str) -> Option<String> {
        match &*self.0.borrow() {
            NodeData::Element { attrs, .. } => attrs
                .iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.clone()),
            _ => None,
        }
    }

    /// Ordered child handles.
    pub fn children(&self) -> Vec<DomNode> {
        match &*self.0.borrow() {
            NodeData::Element { children, .. } | NodeData::Fragment { children } => {
                children.clone()
            }
            NodeData::Text(_) => Vec::new(),
        }
    }

    pub fn child(&self, index: usize) -> Option<DomNode> {
        match &*self.0.borrow() {
            NodeData::Element { children, .. } | NodeData::Fragment { children } => {
                children.get(index).cloned()
            }
            NodeData::Text(_) => None,
        }
    }

    pub fn child_count(&self) -> usize {
        match &*self.0.borrow() {
            NodeData::Element { children, .. } | NodeData::Fragment { children } => children.len(),
            NodeData::Text(_) => 0,
        }
    }

    /// Insert before the child currently at `index`; an index past the end
    /// appends. Ignored on text nodes.
    pub fn insert_child(&self, index: usize, node: DomNode) {
        match &mut *self.0.borrow_mut() {
            NodeData::Element { children, .. } | NodeData::Fragment { children } => {
                stats::bump_inserted();
                let at = index.min(children.len());
                children.insert(at, node);
            }
            NodeData::Text(_) => {}
        }
    }

    pub fn append_child(&self, node: DomNode) {
        let at = self.child_count();
        self.insert_child(at, node);
    }

    /// Detach and return the child at `index`, if any.
    pub fn remove_child(&self, index: usize) -> Option<DomNode> {
        match &mut *self.0.borrow_mut() {
            NodeData::Element { children, .. } | NodeData::Fragment { children } => {
                if index < children.len() {
                    stats::bump_removed();
                    Some(children.remove(index))
                } else {
                    None
                }
            }
            NodeData::Text(_) => None,
        }
    }

    /// Drop every child of a container.
    pub fn clear(&self) {
        match &mut *self.0.borrow_mut() {
            NodeData::Element { children, .. } | NodeData::Fragment { children } => {
                for _ in 0..children.len() {
                    stats::bump_removed();
                }
                children.clear();
            }
            NodeData::Text(_) => {}
        }
    }

    /// Move all children out, leaving the node empty. Used to splice a
    /// fragment's content into a parent.
    pub fn take_children(&self) -> Vec<DomNode> {
        match &mut *self.0.borrow_mut() {
            NodeData::Element { children, .. } | NodeData::Fragment { children } => {
                std::mem::take(children)
            }
            NodeData::Text(_) => Vec::new(),
        }
    }

    /// Replace the content of a text node. Ignored on non-text nodes.
    pub fn set_text(&self, content: &str) {
        if let NodeData::Text(t) = &mut *self.0.borrow_mut() {
            stats::bump_text_set();
            *t = content.to_string();
        }
    }

    /// Concatenated text of the subtree.
    pub fn text_content(&self) -> String {
        match &*self.0.borrow() {
            NodeData::Text(t) => t.clone(),
            NodeData::Element { children, .. } | NodeData::Fragment { children } => {
                children.iter().map(DomNode::text_content).collect()
            }
        }
    }

    /// HTML-ish rendering for tests and debug output, not an HTML encoder.
    pub fn to_html(&self) -> String {
        match &*self.0.borrow() {
            NodeData::Text(t) => t.clone(),
            NodeData::Fragment { children } => {
                children.iter().map(DomNode::to_html).collect()
            }
            NodeData::Element {
                tag,
                attrs,
                children,
            } => {
                let mut out = String::new();
                out.push('<');
                out.push_str(tag);
                for (k, v) in attrs {
                    out.push_str(&format!(" {}=\"{}\"", k, v));
                }
                out.push('>');
                for c in children {
                    out.push_str(&c.to_html());
                }
                out.push_str(&format!("</{}>", tag));
                out
            }
        }
    }
}

impl std::fmt::Debug for DomNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DomNode({})", self.to_html())
    }
}

/// Per-thread mutation counters. Tests reset before the operation under
/// observation and read a snapshot after; the engine itself never looks.
pub mod stats {
    use std::cell::Cell;

    thread_local! {
        static CREATED: Cell<u64> = Cell::new(0);
        static ATTRS_SET: Cell<u64> = Cell::new(0);
        static INSERTED: Cell<u64> = Cell::new(0);
        static REMOVED: Cell<u64> = Cell::new(0);
        static TEXT_SET: Cell<u64> = Cell::new(0);
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Snapshot {
        pub created: u64,
        pub attrs_set: u64,
        pub inserted: u64,
        pub removed: u64,
        pub text_set: u64,
    }

    impl Snapshot {
        /// Total mutations of any kind.
        pub fn total(&self) -> u64 {
            self.created + self.attrs_set + self.inserted + self.removed + self.text_set
        }
    }

    pub fn snapshot() -> Snapshot {
        Snapshot {
            created: CREATED.with(|c| c.get()),
            attrs_set: ATTRS_SET.with(|c| c.get()),
            inserted: INSERTED.with(|c| c.get()),
            removed: REMOVED.with(|c| c.get()),
            text_set: TEXT_SET.with(|c| c.get()),
        }
    }

    pub fn reset() {
        CREATED.with(|c| c.set(0));
        ATTRS_SET.with(|c| c.set(0));
        INSERTED.with(|c| c.set(0));
        REMOVED.with(|c| c.set(0));
        TEXT_SET.with(|c| c.set(0));
    }

    pub(super) fn bump_created() {
        CREATED.with(|c| c.set(c.get() + 1));
    }
    pub(super) fn bump_attrs_set() {
        ATTRS_SET.with(|c| c.set(c.get() + 1));
    }
    pub(super) fn bump_inserted() {
        INSERTED.with(|c| c.set(c.get() + 1));
    }
    pub(super) fn bump_removed() {
        REMOVED.with(|c| c.set(c.get() + 1));
    }
    pub(super) fn bump_text_set() {
        TEXT_SET.with(|c| c.set(c.get() + 1));
    }
}
