#[test]
fn demo_reports_each_patch() {
    let out = brix_cli::demo_cmd(2).unwrap();
    assert!(out.contains("mounted:  <body><div class=\"light\"><p>Count: 0</p>"));
    assert!(out.contains("patch 1:"));
    assert!(out.contains("<div class=\"dark\"><p>Count: 1</p>"));
    assert!(out.contains("patch 2:"));
    assert!(out.contains("<div class=\"light\"><p>Count: 2</p>"));
}

#[test]
fn edits_lists_both_bindings() {
    let out = brix_cli::edits_cmd();
    assert!(out.contains("attribute"));
    assert!(out.contains("prop=theme"));
    assert!(out.contains("child"));
    assert!(out.contains("prop=count"));
}
