use anyhow::{Context, Result};
use brix_block::{define, BlockDef, Edit, PropMap};
use brix_dom::tree::{stats, DomNode};
use brix_dom::{h, text, Props};
use std::fmt::Write;

/// The sample template the CLI works with: one dynamic attribute, one
/// dynamic text slot, one static footer.
pub fn sample_def() -> BlockDef {
    define(|p| {
        h(
            "div",
            Props::new().set("class", p.get("theme")),
            vec![
                h("p", (), vec![text("Count: "), p.get("count").into()]),
                h("footer", (), vec![text("brix demo")]),
            ],
        )
    })
}

/// Mount the sample template, patch it `patches` times with a running
/// counter, and report the tree plus mutation counters at each step.
pub fn demo_cmd(patches: u32) -> Result<String> {
    let def = sample_def();
    let container = DomNode::element("body");

    let mut block = def.instance(PropMap::new().set("theme", "light").set("count", 0));
    block
        .mount(&container)
        .context("failed to mount the demo block")?;

    let mut out = String::new();
    writeln!(out, "mounted:  {}", container.to_html())?;

    for i in 1..=patches {
        stats::reset();
        let next = def.instance(
            PropMap::new()
                .set("theme", if i % 2 == 0 { "light" } else { "dark" })
                .set("count", i as i64),
        );
        block
            .patch(&next)
            .with_context(|| format!("patch {} failed", i))?;
        let s = stats::snapshot();
        writeln!(
            out,
            "patch {}:  {}  ({} mutations)",
            i,
            container.to_html(),
            s.total()
        )?;
    }

    Ok(out)
}

/// Print the sample template's edit list: the positions the extraction
/// pass discovered to be dynamic.
pub fn edits_cmd() -> String {
    let def = sample_def();
    let mut out = String::new();
    for (i, edit) in def.edits().iter().enumerate() {
        match edit {
            Edit::Attribute { path, name, prop } => {
                let _ = writeln!(out, "{}: attribute {:?} name={} prop={}", i, path, name, prop);
            }
            Edit::Child { path, index, prop } => {
                let _ = writeln!(out, "{}: child {:?} index={} prop={}", i, path, index, prop);
            }
        }
    }
    out
}
