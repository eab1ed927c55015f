// brix-block/src/block.rs

use std::rc::Rc;

use brix_dom::tree::DomNode;
use brix_dom::VNode;
use thiserror::Error;

use crate::edit::Edit;
use crate::hole::{probe_template, Probe};
use crate::render::{render_template, resolve};
use crate::value::{PropMap, Value};

#[derive(Debug, Error)]
pub enum BlockError {
    #[error("block is not mounted; mount() must precede patch()")]
    NotMounted,
    #[error("block is already mounted into a container")]
    AlreadyMounted,
    #[error("blocks come from different template definitions ({left} vs {right} edits)")]
    TemplateMismatch { left: usize, right: usize },
}

/// The materialized template and its edit list, computed once per
/// definition and shared by every instance.
struct Template {
    root: DomNode,
    edits: Vec<Edit>,
}

/// Turn a template function into a reusable block definition. The
/// function is invoked exactly once, with the probe, and the resulting
/// vnode tree is rendered into the shared template.
pub fn define<F>(template: F) -> BlockDef
where
    F: Fn(&Probe) -> VNode,
{
    let vnode = probe_template(template);
    let (root, edits) = render_template(&vnode);
    log::debug!("block template defined: {} edits", edits.len());
    BlockDef {
        template: Rc::new(Template { root, edits }),
    }
}

/// A reusable block definition; call `instance` with concrete props to
/// get a mountable block.
#[derive(Clone)]
pub struct BlockDef {
    template: Rc<Template>,
}

impl BlockDef {
    pub fn instance(&self, props: PropMap) -> Block {
        Block {
            template: self.template.clone(),
            props,
            root: None,
            bindings: Vec::new(),
        }
    }

    pub fn edits(&self) -> &[Edit] {
        &self.template.edits
    }
}

/// How one binding reaches into the live tree.
enum BindTarget {
    Attribute { name: String },
    Child { index: usize },
}

/// One resolved binding: where it writes, the cached node handle, and the
/// last value applied there. `patch` compares against `last`, never
/// against the tree.
struct Binding {
    prop: String,
    target: BindTarget,
    node: DomNode,
    last: Value,
}

/// One instantiation of a template with concrete props.
///
/// `mount` runs once per instance and must precede `patch`; `props` is
/// immutable after construction. Repeated patches are issued against the
/// originally-mounted instance as the receiver.
pub struct Block {
    template: Rc<Template>,
    props: PropMap,
    root: Option<DomNode>,
    bindings: Vec<Binding>,
}

impl Block {
    pub fn props(&self) -> &PropMap {
        &self.props
    }

    pub fn edits(&self) -> &[Edit] {
        &self.template.edits
    }

    pub fn is_mounted(&self) -> bool {
        self.root.is_some()
    }

    /// Handle to this block's mounted root, once mounted.
    pub fn root(&self) -> Option<DomNode> {
        self.root.clone()
    }

    /// Clone the shared template into `container` (as its sole content),
    /// resolve every edit path against the pristine clone, then apply this
    /// instance's prop values in edit order.
    pub fn mount(&mut self, container: &DomNode) -> Result<(), BlockError> {
        if self.root.is_some() {
            return Err(BlockError::AlreadyMounted);
        }

        let root = self.template.root.deep_clone();
        container.clear();
        container.append_child(root.clone());

        // Resolve first: paths are only valid against the untouched clone.
        let mut targets = Vec::with_capacity(self.template.edits.len());
        for edit in &self.template.edits {
            targets.push(resolve(&root, edit.path()));
        }

        for (edit, node) in self.template.edits.iter().zip(targets) {
            let value = self.props.get(edit.prop());
            let target = match edit {
                Edit::Attribute { name, .. } => {
                    node.set_attr(name, &value.to_text());
                    BindTarget::Attribute { name: name.clone() }
                }
                Edit::Child { index, .. } => {
                    insert_at_slot(&node, *index, &value)?;
                    BindTarget::Child { index: *index }
                }
            };
            self.bindings.push(Binding {
                prop: edit.prop().to_string(),
                target,
                node,
                last: value,
            });
        }

        log::trace!("mounted block: {} bindings", self.bindings.len());
        self.root = Some(root);
        Ok(())
    }

    /// Apply the bindings whose value changed in `other`'s props, touching
    /// nothing else. `other` must come from the same definition.
    pub fn patch(&mut self, other: &Block) -> Result<(), BlockError> {
        if self.root.is_none() {
            return Err(BlockError::NotMounted);
        }
        if !Rc::ptr_eq(&self.template, &other.template)
            && self.template.edits != other.template.edits
        {
            return Err(BlockError::TemplateMismatch {
                left: self.template.edits.len(),
                right: other.template.edits.len(),
            });
        }

        let mut changed = 0usize;
        for binding in &mut self.bindings {
            let next = other.props.get(&binding.prop);
            if next == binding.last {
                continue;
            }
            changed += 1;
            match &binding.target {
                BindTarget::Attribute { name } => {
                    binding.node.set_attr(name, &next.to_text());
                    binding.last = next;
                }
                BindTarget::Child { index } => {
                    let live = binding.last.as_block().cloned();
                    let incoming = next.as_block().cloned();
                    match (live, incoming) {
                        (Some(live), Some(incoming)) => {
                            // Delegate; the nested subtree stays in place and
                            // only its own bindings are re-evaluated. The live
                            // block remains the comparison baseline.
                            live.borrow_mut().patch(&incoming.borrow())?;
                        }
                        (Some(_), None) => {
                            binding.node.remove_child(*index);
                            binding
                                .node
                                .insert_child(*index, DomNode::text(next.to_text()));
                            binding.last = next;
                        }
                        (None, Some(incoming)) => {
                            binding.node.remove_child(*index);
                            let frag = DomNode::fragment();
                            incoming.borrow_mut().mount(&frag)?;
                            for (k, child) in frag.take_children().into_iter().enumerate() {
                                binding.node.insert_child(index + k, child);
                            }
                            binding.last = next;
                        }
                        (None, None) => {
                            let slot = binding
                                .node
                                .child(*index)
                                .expect("child slot vanished from the live tree");
                            slot.set_text(&next.to_text());
                            binding.last = next;
                        }
                    }
                }
            }
        }
        log::trace!(
            "patched block: {} of {} bindings changed",
            changed,
            self.bindings.len()
        );
        Ok(())
    }
}

/// Materialize a child-edit value at its slot: a nested block is mounted
/// into a detached fragment whose content is spliced in before whatever
/// occupies the slot; a primitive becomes a text node there.
fn insert_at_slot(parent: &DomNode, index: usize, value: &Value) -> Result<(), BlockError> {
    match value.as_block() {
        Some(block) => {
            let frag = DomNode::fragment();
            block.borrow_mut().mount(&frag)?;
            for (k, child) in frag.take_children().into_iter().enumerate() {
                parent.insert_child(index + k, child);
            }
        }
        None => {
            parent.insert_child(index, DomNode::text(value.to_text()));
        }
    }
    Ok(())
}
