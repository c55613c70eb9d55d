use bplate::ignore::IgnoreRules;

#[test]
fn test_default_patterns_always_apply() {
    let rules = IgnoreRules::new(&["*.pyc"]).unwrap();

    assert!(rules.is_ignored(".git"));
    assert!(rules.is_ignored(".hg"));
    assert!(rules.is_ignored("pkg/__pycache__"));
    assert!(rules.is_ignored("pkg/module.pyc"));
    assert!(!rules.is_ignored("pkg/module.py"));
}

#[test]
fn test_blank_patterns_are_skipped() {
    let rules = IgnoreRules::new(&["", "  "]).unwrap();
    assert!(!rules.is_ignored("README.md"));
}
