use std::cell::Cell;
use std::sync::Arc;

use kindred_core::{Either, Monad};
use kindred_weak::{Weak, WeakContext};
use proptest::prelude::*;

fn halve_even(x: i64) -> Weak<i64> {
    if x % 2 == 0 {
        Weak::new(x / 2)
    } else {
        Weak::empty()
    }
}

fn shift(x: i64) -> Weak<i64> {
    Weak::new(x.wrapping_add(11))
}

fn arb_weak() -> impl Strategy<Value = Option<i64>> {
    prop_oneof![Just(None), any::<i64>().prop_map(Some)]
}

fn weak_of(value: Option<i64>) -> Weak<i64> {
    value.map(Weak::new).unwrap_or_else(Weak::empty)
}

proptest! {
    #[test]
    fn left_identity(a in any::<i64>()) {
        let m = WeakContext;
        prop_assert_eq!(m.bind(m.pure(a), halve_even).observe(), halve_even(a).observe());
    }

    #[test]
    fn right_identity(value in arb_weak()) {
        let m = WeakContext;
        let w = weak_of(value);
        prop_assert_eq!(m.bind(w.clone(), |a| m.pure(a)).observe(), w.observe());
    }

    #[test]
    fn associativity(value in arb_weak()) {
        let m = WeakContext;
        let w = weak_of(value);
        let left = m.bind(m.bind(w.clone(), halve_even), shift);
        let right = m.bind(w, |a| m.bind(halve_even(a), shift));
        prop_assert_eq!(left.observe(), right.observe());
    }

    #[test]
    fn map_agrees_with_bind_then_pure(value in arb_weak()) {
        let m = WeakContext;
        let w = weak_of(value);
        let mapped = m.map(w.clone(), |x| x.wrapping_mul(3));
        let derived = m.bind(w, |x| m.pure(x.wrapping_mul(3)));
        prop_assert_eq!(mapped.observe(), derived.observe());
    }

    #[test]
    fn recursive_bind_matches_unrolled_chain(limit in 0u32..64) {
        let m = WeakContext;
        let step = |n: u32| m.pure(if n < limit { Either::Left(n + 1) } else { Either::Right(n) });

        let looped = m.recursive_bind(0u32, step);

        let mut unrolled = m.pure(0u32);
        for _ in 0..limit {
            unrolled = m.bind(unrolled, |n| m.pure(n + 1));
        }

        prop_assert_eq!(looped.observe(), unrolled.observe());
        prop_assert_eq!(looped.observe(), Some(limit));
    }
}

#[test]
fn short_circuit_never_invokes_step() {
    let m = WeakContext;
    let called = Cell::new(false);
    let result = m.bind(Weak::<i64>::empty(), |x| {
        called.set(true);
        Weak::new(x)
    });
    assert!(result.is_empty());
    assert!(!called.get());
}

#[test]
fn short_circuit_on_lost_referent() {
    let m = WeakContext;
    let owner = Arc::new(5);
    let w = Weak::downgrade(&owner);
    drop(owner);

    let called = Cell::new(false);
    let result = m.map(w, |x| {
        called.set(true);
        *x + 1
    });
    assert!(result.is_empty());
    assert!(!called.get());
}

#[test]
fn recursive_bind_survives_deep_iteration() {
    let m = WeakContext;
    let result = m.recursive_bind(0u64, |n| {
        m.pure(if n < 100_000 { Either::Left(n + 1) } else { Either::Right(n) })
    });
    assert_eq!(result.observe(), Some(100_000));
}

#[test]
fn recursive_bind_terminates_when_referent_is_lost() {
    let m = WeakContext;
    let owner = Arc::new(());
    let handle = Weak::downgrade(&owner);
    let mut owner = Some(owner);

    let result: Weak<u32> = m.recursive_bind(0u32, |n| {
        if n == 10 {
            owner.take();
        }
        m.map(handle.clone(), move |_| Either::Left(n + 1))
    });

    assert!(result.is_empty());
}

#[test]
fn liveness_is_monotonic() {
    let owner = Arc::new(String::from("referent"));
    let w = Weak::downgrade(&owner);
    let mut seen_absent = false;
    let mut owner = Some(owner);

    for round in 0..20 {
        if round == 7 {
            owner.take();
        }
        let present = w.non_empty();
        if seen_absent {
            assert!(!present, "absent handle reported present again at round {round}");
        }
        seen_absent |= !present;
    }
    assert!(seen_absent);
}
