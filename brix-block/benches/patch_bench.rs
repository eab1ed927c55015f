use brix_block::{define, BlockDef, PropMap};
use brix_dom::tree::DomNode;
use brix_dom::{h, text, Props};
use criterion::{criterion_group, criterion_main, Criterion};

fn wide_def() -> BlockDef {
    define(|p| {
        h(
            "div",
            Props::new().set("class", p.get("theme")),
            vec![
                h("h1", (), vec![p.get("title").into()]),
                h("p", (), vec![text("Count: "), p.get("count").into()]),
                h("p", (), vec![text("Status: "), p.get("status").into()]),
                h("footer", (), vec![text("static footer")]),
            ],
        )
    })
}

fn props(i: i64) -> PropMap {
    PropMap::new()
        .set("theme", if i % 2 == 0 { "light" } else { "dark" })
        .set("title", format!("title {i}"))
        .set("count", i)
        .set("status", "ok")
}

// The workload blocks exist for: one mount, then many prop updates.
fn bench_patch_vs_remount(c: &mut Criterion) {
    let def = wide_def();

    c.bench_function("patch_mounted_block", |b| {
        let container = DomNode::element("body");
        let mut block = def.instance(props(0));
        block.mount(&container).unwrap();
        let mut i = 0i64;
        b.iter(|| {
            i += 1;
            let next = def.instance(props(i));
            block.patch(&next).unwrap();
        });
    });

    c.bench_function("remount_fresh_block", |b| {
        let mut i = 0i64;
        b.iter(|| {
            i += 1;
            let container = DomNode::element("body");
            let mut block = def.instance(props(i));
            block.mount(&container).unwrap();
        });
    });
}

criterion_group!(benches, bench_patch_vs_remount);
criterion_main!(benches);
