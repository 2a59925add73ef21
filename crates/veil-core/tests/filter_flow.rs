use veil_core::{Normalizer, PatternIndex, Scanner, WordFilter};

#[test]
fn test_shared_index_across_scans() {
    let normalizer = Normalizer::new(['！', '@', '。'], [('輪', '轮')]);
    let index = PatternIndex::build(["法轮功", "admin"], &normalizer);

    // One immutable index, many scanner passes.
    let scanner = Scanner::new(&index, &normalizer);

    let first = scanner.scan("法轮功在这里", '*');
    assert_eq!(first.redacted, "***在这里");
    assert_eq!(first.matches, vec!["法轮功"]);

    let second = scanner.scan("login as ADMIN", '*');
    assert_eq!(second.redacted, "login as *****");
    assert_eq!(second.matches, vec!["ADMIN"]);

    let third = scanner.scan("nothing to see", '*');
    assert!(third.is_clean());
    assert_eq!(third.redacted, "nothing to see");
}

#[test]
fn test_evasion_forms_all_collapse_to_one_word() {
    let filter = WordFilter::new(
        ["法轮功"],
        ['！', '@', '。'],
        [('輪', '轮'), ('髮', '发')],
    );

    for evasion in ["法轮功", "法！@轮。。功", "法法轮轮功功", "法輪功"] {
        let outcome = filter.filter(evasion);
        assert_eq!(outcome.matches.len(), 1, "input: {evasion}");
    }
}

#[test]
fn test_redacted_output_aligns_with_input() {
    let filter = WordFilter::new(["法轮功", "bad"], ['！'], []);

    for text in ["法！轮！功 and bad words", "clean text", "bbbad！"] {
        let outcome = filter.filter(text);
        assert_eq!(
            outcome.redacted.chars().count(),
            text.chars().count(),
            "input: {text}"
        );
    }
}
