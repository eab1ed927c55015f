// brix-block/src/hole.rs

use brix_dom::{AttrValue, VNode};

/// Marker standing in for "the prop named `key` goes here". Holes exist
/// only between extraction and rendering; the renderer converts each one
/// into an edit, so no materialized tree ever holds a hole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hole {
    pub key: String,
}

/// The synthetic props handed to a template function during extraction.
/// Every key read yields a `Hole` carrying that key, however often and in
/// whatever order keys are read; nothing is validated against a schema.
#[derive(Debug, Default)]
pub struct Probe;

impl Probe {
    pub fn new() -> Self {
        Probe
    }

    pub fn get(&self, key: &str) -> Hole {
        Hole {
            key: key.to_string(),
        }
    }
}

impl From<Hole> for AttrValue {
    fn from(h: Hole) -> Self {
        AttrValue::Hole(h.key)
    }
}
impl From<Hole> for VNode {
    fn from(h: Hole) -> Self {
        VNode::Hole(h.key)
    }
}

/// Invoke a template function once with the probe, yielding the vnode tree
/// with holes at every dynamic position.
pub fn probe_template<F>(template: F) -> VNode
where
    F: Fn(&Probe) -> VNode,
{
    template(&Probe)
}

#[cfg(test)]
mod tests {
    use super::*;
    use brix_dom::{h, Props};

    #[test]
    fn every_key_read_yields_its_hole() {
        let p = Probe::new();
        assert_eq!(p.get("a"), Hole { key: "a".into() });
        assert_eq!(p.get("b").key, "b");
        // repeated reads are stable
        assert_eq!(p.get("a"), p.get("a"));
    }

    #[test]
    fn holes_land_in_the_vnode_tree() {
        let vnode = probe_template(|p| {
            h(
                "div",
                Props::new().set("class", p.get("theme")),
                vec![p.get("label").into()],
            )
        });
        match vnode {
            VNode::Element { props, children, .. } => {
                assert_eq!(props.get("class"), Some(&AttrValue::Hole("theme".into())));
                assert_eq!(children, vec![VNode::Hole("label".into())]);
            }
            _ => panic!("expected element"),
        }
    }
}
