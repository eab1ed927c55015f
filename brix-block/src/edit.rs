/// A recorded binding between a position in the rendered template and a
/// prop key, discovered while the template was rendered.
///
/// `path` addresses a node as child indices from the template root,
/// counting only materialized children. A `Child` edit additionally fixes
/// the slot `index` among the authored siblings at extraction time; it is
/// never recomputed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    Attribute {
        path: Vec<usize>,
        name: String,
        prop: String,
    },
    Child {
        path: Vec<usize>,
        index: usize,
        prop: String,
    },
}

impl Edit {
    pub fn path(&self) -> &[usize] {
        match self {
            Edit::Attribute { path, .. } | Edit::Child { path, .. } => path,
        }
    }

    pub fn prop(&self) -> &str {
        match self {
            Edit::Attribute { prop, .. } | Edit::Child { prop, .. } => prop,
        }
    }
}
