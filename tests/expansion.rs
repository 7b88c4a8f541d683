// tests/expansion.rs
use turtle_fractals::{FractalError, Grammar, Rules, expand};

fn dragon() -> Grammar {
    Grammar::new(4, "X")
        .unwrap()
        .with_rule('X', "X+YF+")
        .with_rule('Y', "-FX-Y")
}

#[test]
fn test_first_generation_is_axiom() {
    let grammar = dragon();
    assert_eq!(grammar.expand(1).unwrap(), "X");

    let plain = Grammar::new(6, "F[+F]-F").unwrap();
    assert_eq!(plain.expand(1).unwrap(), "F[+F]-F");
}

#[test]
fn test_dragon_generations() {
    let grammar = dragon();
    assert_eq!(grammar.expand(2).unwrap(), "X+YF+");
    assert_eq!(grammar.expand(3).unwrap(), "X+YF++-FX-YF+");
}

#[test]
fn test_length_never_shrinks_with_nonempty_rules() {
    let grammar = dragon();
    let mut previous = 0;
    for generation in 1..=10 {
        let len = grammar.expand(generation).unwrap().len();
        assert!(
            len >= previous,
            "generation {generation} shrank from {previous} to {len}"
        );
        previous = len;
    }
}

#[test]
fn test_unknown_symbols_pass_through() {
    let rules = Rules::from([('F', "F+F".to_owned())]);
    assert_eq!(expand("FQ", &rules, 2).unwrap(), "F+FQ");
    assert_eq!(expand("FQ", &rules, 3).unwrap(), "F+F+F+FQ");
}

#[test]
fn test_rejects_zero_and_negative_generations() {
    let grammar = dragon();
    for generations in [0, -1, i64::MIN] {
        match grammar.expand(generations) {
            Err(FractalError::InvalidGenerationCount(n)) => assert_eq!(n, generations),
            other => panic!("expected InvalidGenerationCount, got {other:?}"),
        }
    }
}

#[test]
fn test_grammar_is_reusable_across_threads() {
    let grammar = dragon();
    let expected = grammar.expand(8).unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4).map(|_| scope.spawn(|| grammar.expand(8).unwrap())).collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn test_builder_keeps_first_rule() {
    let grammar = Grammar::new(4, "F")
        .unwrap()
        .with_rule('F', "F+F")
        .with_rule('F', "F-F");

    assert_eq!(grammar.rule('F'), Some("F+F"));
    assert_eq!(grammar.expand(2).unwrap(), "F+F");
    assert_eq!(grammar, "4 2 F F+F F F-F F".parse::<Grammar>().unwrap());
}
