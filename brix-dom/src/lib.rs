pub mod tree;

/// A virtual node: the declarative shape a template function returns.
///
/// `Hole` marks a dynamic child slot. It only ever appears while a template
/// is being extracted; the renderer converts every hole into an edit, so a
/// materialized tree never contains one.
#[derive(Debug, Clone, PartialEq)]
pub enum VNode {
    Element {
        tag: String,
        props: Props,
        children: Vec<VNode>,
    },
    Text(String),
    Hole(String),
}

/// An attribute value: a static string, or a hole naming the prop that
/// will be bound at this position.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Static(String),
    Hole(String),
}

impl From<&str> for AttrValue {
    fn from(v: &str) -> Self {
        AttrValue::Static(v.to_string())
    }
}
impl From<String> for AttrValue {
    fn from(v: String) -> Self {
        AttrValue::Static(v)
    }
}

/// Ordered attribute mapping. Insertion order is preserved and a repeated
/// `set` replaces in place, so a template always yields its attributes in
/// one reproducible order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Props {
    attrs: Vec<(String, AttrValue)>,
}

impl Props {
    pub fn new() -> Self {
        Self { attrs: Vec::new() }
    }

    pub fn set(mut self, k: impl Into<String>, v: impl Into<AttrValue>) -> Self {
        let k = k.into();
        let v = v.into();
        if let Some(slot) = self.attrs.iter_mut().find(|(name, _)| *name == k) {
            slot.1 = v;
        } else {
            self.attrs.push((k, v));
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.attrs.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }
}

// Allow concise props creation
impl From<()> for Props {
    fn from(_: ()) -> Self {
        Props::default()
    }
}
impl From<Vec<(&str, &str)>> for Props {
    fn from(v: Vec<(&str, &str)>) -> Self {
        let mut p = Props::new();
        for (k, v) in v {
            p = p.set(k, v);
        }
        p
    }
}

pub fn h(tag: impl Into<String>, props: impl Into<Props>, children: Vec<VNode>) -> VNode {
    VNode::Element {
        tag: tag.into(),
        props: props.into(),
        children,
    }
}
pub fn text(t: impl Into<String>) -> VNode {
    VNode::Text(t.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_tree() {
        let node = h(
            "div",
            vec![("class", "app")],
            vec![text("hello"), h("span", (), vec![text("world")])],
        );
        if let VNode::Element {
            tag,
            props,
            children,
        } = node
        {
            assert_eq!(tag, "div");
            assert_eq!(props.get("class"), Some(&AttrValue::Static("app".into())));
            assert_eq!(children.len(), 2);
        } else {
            panic!("expected element");
        }
    }

    #[test]
    fn props_keep_insertion_order_and_replace_in_place() {
        let p = Props::new()
            .set("id", "x")
            .set("class", "a")
            .set("id", "y");
        let keys: Vec<&str> = p.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["id", "class"]);
        assert_eq!(p.get("id"), Some(&AttrValue::Static("y".into())));
    }

    #[test]
    fn hole_attr_is_not_static() {
        let p = Props::new().set("class", AttrValue::Hole("theme".into()));
        assert_eq!(p.get("class"), Some(&AttrValue::Hole("theme".into())));
    }
}
