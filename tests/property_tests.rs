//! Property-based tests for the calculator engine.
//!
//! These tests use proptest to verify the engine's laws hold across
//! many randomly generated key sequences.

use chaincalc::format::{format_result, round_number};
use chaincalc::{Accumulator, Calculator, Key, Operator, Phase};
use proptest::prelude::*;

fn digit() -> impl Strategy<Value = char> {
    (0u8..10).prop_map(|d| (b'0' + d) as char)
}

fn operator() -> impl Strategy<Value = Operator> {
    prop::sample::select(Operator::ALL.to_vec())
}

fn key() -> impl Strategy<Value = Key> {
    prop_oneof![
        4 => digit().prop_map(Key::Digit),
        2 => operator().prop_map(Key::Operator),
        1 => Just(Key::Decimal),
        1 => Just(Key::Equal),
        1 => Just(Key::Clear),
    ]
}

/// Finite values from the whole f64 range, with extra weight on the plain
/// display band and on the extremes.
fn finite_f64() -> impl Strategy<Value = f64> {
    prop_oneof![
        any::<f64>().prop_filter("finite", |x| x.is_finite()),
        -1e12f64..1e12,
        1e300f64..=f64::MAX,
        f64::MIN..=-1e300f64,
    ]
}

fn enter(calc: &mut Calculator, number: &str) {
    for c in number.chars() {
        calc.on_digit(c);
    }
}

proptest! {
    #[test]
    fn digits_alone_concatenate(digits in prop::collection::vec(digit(), 1..20)) {
        let mut calc = Calculator::new();
        for d in &digits {
            calc.on_digit(*d);
        }

        let typed: String = digits.iter().collect();
        prop_assert_eq!(calc.display_value(), typed.as_str());
        prop_assert_eq!(calc.history_trace(), typed.as_str());
    }

    #[test]
    fn repeated_operator_is_ignored(
        digits in prop::collection::vec(digit(), 1..6),
        first in operator(),
        second in operator(),
    ) {
        let mut calc = Calculator::new();
        for d in &digits {
            calc.on_digit(*d);
        }
        calc.on_operator(first);
        let before = calc.snapshot();
        calc.on_operator(second);

        let typed: String = digits.iter().collect();
        prop_assert_eq!(calc.history_trace(), format!("{typed}{first}"));
        prop_assert_eq!(calc.snapshot(), before);
        let is_pending_with_first = matches!(
            calc.accumulator(),
            Accumulator::Pending { operator, .. } if *operator == first
        );
        prop_assert!(is_pending_with_first);
    }

    #[test]
    fn reset_restores_initial_state(keys in prop::collection::vec(key(), 0..40)) {
        let mut calc = Calculator::new();
        for key in keys {
            calc.press(key);
        }
        calc.reset();

        let fresh = Calculator::new();
        prop_assert_eq!(calc.display_value(), "0");
        prop_assert_eq!(calc.history_trace(), "Standard");
        prop_assert_eq!(calc.snapshot(), fresh.snapshot());
        prop_assert_eq!(calc.register(), None);
    }

    #[test]
    fn any_sequence_leaves_consistent_state(keys in prop::collection::vec(key(), 0..60)) {
        let mut calc = Calculator::new();
        for key in keys {
            calc.press(key);

            let snapshot = calc.snapshot();
            prop_assert!(!calc.display_value().is_empty());
            prop_assert_eq!(snapshot.phase, calc.accumulator().phase());
            if snapshot.chaining_result {
                prop_assert_eq!(snapshot.phase, Phase::Operand);
                prop_assert_eq!(calc.register(), None);
            }
        }
    }

    #[test]
    fn chained_result_is_the_next_left_operand(
        a in 0u32..1000,
        b in 0u32..1000,
        c in 0u32..1000,
        first in operator(),
        second in operator(),
    ) {
        let mut calc = Calculator::new();
        enter(&mut calc, &a.to_string());
        calc.on_operator(first);
        enter(&mut calc, &b.to_string());
        calc.on_equal();
        calc.on_operator(second);
        enter(&mut calc, &c.to_string());
        calc.on_equal();

        let expected = second.evaluate(first.evaluate(a as f64, b as f64), c as f64);
        prop_assert_eq!(calc.display_value(), format_result(expected));
    }

    #[test]
    fn rounding_is_idempotent(x in finite_f64()) {
        let once = round_number(x, 3);
        prop_assert_eq!(round_number(once, 3), once);
    }

    #[test]
    fn formatting_is_idempotent(x in finite_f64()) {
        let once = format_result(x);
        let reparsed: f64 = once.parse().unwrap();
        prop_assert_eq!(format_result(reparsed), once);
    }
}
