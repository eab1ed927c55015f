use brix_block::{probe_template, render_template, resolve, Edit};
use brix_dom::{h, text, Props};

// Template with holes and static children interleaved at two depths:
//   div
//     [hole lead]
//     span class=[hole tone] "s"
//     [hole tail]
//     p [hole inner]
#[test]
fn edits_record_in_preorder_with_materialized_paths() {
    let vnode = probe_template(|p| {
        h(
            "div",
            (),
            vec![
                p.get("lead").into(),
                h(
                    "span",
                    Props::new().set("class", p.get("tone")),
                    vec![text("s")],
                ),
                p.get("tail").into(),
                h("p", (), vec![p.get("inner").into()]),
            ],
        )
    });
    let (root, edits) = render_template(&vnode);

    assert_eq!(
        edits,
        vec![
            Edit::Child {
                path: vec![],
                index: 0,
                prop: "lead".into(),
            },
            Edit::Attribute {
                path: vec![0],
                name: "class".into(),
                prop: "tone".into(),
            },
            Edit::Child {
                path: vec![],
                index: 2,
                prop: "tail".into(),
            },
            Edit::Child {
                path: vec![1],
                index: 0,
                prop: "inner".into(),
            },
        ]
    );

    // Holes materialized nothing; only the static shape is in the tree.
    assert_eq!(root.to_html(), "<div><span>s</span><p></p></div>");
}

// Every recorded path must land on a node in the pristine template, before
// any edit has been applied.
#[test]
fn every_edit_path_resolves_in_the_pristine_template() {
    let vnode = probe_template(|p| {
        h(
            "main",
            (),
            vec![
                p.get("a").into(),
                h(
                    "section",
                    (),
                    vec![
                        p.get("b").into(),
                        h("article", Props::new().set("id", p.get("c")), vec![]),
                        p.get("d").into(),
                    ],
                ),
                h("footer", (), vec![text("end")]),
            ],
        )
    });
    let (root, edits) = render_template(&vnode);
    assert_eq!(edits.len(), 4);
    for edit in &edits {
        // panics on out-of-bounds descent
        let _ = resolve(&root, edit.path());
    }
    assert_eq!(resolve(&root, &[0]).tag().as_deref(), Some("section"));
    assert_eq!(resolve(&root, &[0, 0]).tag().as_deref(), Some("article"));
    assert_eq!(resolve(&root, &[1]).tag().as_deref(), Some("footer"));
}

#[test]
fn resolve_empty_path_is_root() {
    let vnode = h("div", (), vec![]);
    let (root, _) = render_template(&vnode);
    assert!(resolve(&root, &[]).same_node(&root));
}

// Re-rendering the same template function twice yields equal edit lists:
// extraction order is a function of the template alone.
#[test]
fn render_is_reproducible_for_a_template() {
    let template = |p: &brix_block::Probe| {
        h(
            "div",
            Props::new().set("class", p.get("cls")),
            vec![text("x"), p.get("body").into()],
        )
    };
    let (_, edits_a) = render_template(&probe_template(template));
    let (_, edits_b) = render_template(&probe_template(template));
    assert_eq!(edits_a, edits_b);
}
