//! Property tests for filter invariants.
//!
//! Uses proptest to verify:
//! 1. Filtering yields an order-preserving subsequence of exactly the matches
//! 2. AND equals filtering twice in sequence
//! 3. OR equals the ordered, duplicate-free union of both results
//! 4. NOT equals the complement
//! 5. Filtering is idempotent
//! 6. AND / OR are associative

use domain::{Color, Product, Size};
use pipeline::specs::*;
use pipeline::{Filter, ItemFilter, Specification, SpecificationExt};
use proptest::prelude::*;

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_color() -> impl Strategy<Value = Color> {
    prop::sample::select(Color::ALL.to_vec())
}

fn arb_size() -> impl Strategy<Value = Size> {
    prop::sample::select(Size::ALL.to_vec())
}

fn arb_items() -> impl Strategy<Value = Vec<Product>> {
    prop::collection::vec((arb_color(), arb_size()), 0..40).prop_map(|traits| {
        traits
            .into_iter()
            .enumerate()
            .map(|(idx, (color, size))| Product::new(format!("item-{idx}"), color, size))
            .collect()
    })
}

/// A small spec language so proptest can generate arbitrary trees.
#[derive(Debug, Clone)]
enum SpecTree {
    Color(Color),
    Size(Size),
    And(Box<SpecTree>, Box<SpecTree>),
    Or(Box<SpecTree>, Box<SpecTree>),
    Not(Box<SpecTree>),
}

impl SpecTree {
    fn build(&self) -> Box<dyn Specification<Product>> {
        match self {
            SpecTree::Color(c) => ColorSpecification::new(*c).boxed(),
            SpecTree::Size(s) => SizeSpecification::new(*s).boxed(),
            SpecTree::And(a, b) => a.build().and(b.build()).boxed(),
            SpecTree::Or(a, b) => a.build().or(b.build()).boxed(),
            SpecTree::Not(a) => a.build().not().boxed(),
        }
    }
}

fn arb_spec() -> impl Strategy<Value = SpecTree> {
    let leaf = prop_oneof![
        arb_color().prop_map(SpecTree::Color),
        arb_size().prop_map(SpecTree::Size),
    ];
    leaf.prop_recursive(4, 24, 2, |inner| {
        prop_oneof![
            (inner.clone(), inner.clone())
                .prop_map(|(a, b)| SpecTree::And(Box::new(a), Box::new(b))),
            (inner.clone(), inner.clone())
                .prop_map(|(a, b)| SpecTree::Or(Box::new(a), Box::new(b))),
            inner.prop_map(|a| SpecTree::Not(Box::new(a))),
        ]
    })
}

fn is_subsequence(sub: &[&Product], full: &[Product]) -> bool {
    let mut rest = full.iter();
    sub.iter()
        .all(|wanted| rest.any(|candidate| std::ptr::eq(*wanted, candidate)))
}

proptest! {
    #[test]
    fn filter_is_exact_ordered_subsequence(items in arb_items(), tree in arb_spec()) {
        let spec = tree.build();
        let result = ItemFilter.filter(&items, &spec);

        prop_assert!(is_subsequence(&result, &items));
        let expected: Vec<&Product> = items.iter().filter(|p| spec.is_satisfied(*p)).collect();
        prop_assert_eq!(result, expected);
    }

    #[test]
    fn and_equals_sequential_filtering(items in arb_items(), p1 in arb_spec(), p2 in arb_spec()) {
        let combined = p1.build().and(p2.build());
        let once = ItemFilter.filter(&items, &combined);
        let twice = ItemFilter.filter(ItemFilter.filter(&items, &p1.build()), &p2.build());

        prop_assert_eq!(once, twice);
    }

    #[test]
    fn or_equals_ordered_union(items in arb_items(), p1 in arb_spec(), p2 in arb_spec()) {
        let (s1, s2) = (p1.build(), p2.build());
        let left = ItemFilter.filter(&items, &s1);
        let right = ItemFilter.filter(&items, &s2);
        let union: Vec<&Product> = items
            .iter()
            .filter(|p| {
                left.iter().any(|l| std::ptr::eq(*l, *p)) || right.iter().any(|r| std::ptr::eq(*r, *p))
            })
            .collect();

        let result = ItemFilter.filter(&items, &s1.or(s2));
        prop_assert_eq!(result, union);
    }

    #[test]
    fn not_equals_complement(items in arb_items(), tree in arb_spec()) {
        let matched = ItemFilter.filter(&items, &tree.build());
        let complement: Vec<&Product> = items
            .iter()
            .filter(|p| !matched.iter().any(|m| std::ptr::eq(*m, *p)))
            .collect();

        let result = ItemFilter.filter(&items, &tree.build().not());
        prop_assert_eq!(result, complement);
    }

    #[test]
    fn filtering_is_idempotent(items in arb_items(), tree in arb_spec()) {
        let spec = tree.build();
        let once = ItemFilter.filter(&items, &spec);
        let twice = ItemFilter.filter(once.clone(), &spec);

        prop_assert_eq!(once, twice);
    }

    #[test]
    fn combinators_are_associative(
        items in arb_items(),
        a in arb_spec(),
        b in arb_spec(),
        c in arb_spec(),
    ) {
        let and_left = a.build().and(b.build()).and(c.build());
        let and_right = a.build().and(b.build().and(c.build()));
        prop_assert_eq!(
            ItemFilter.filter(&items, &and_left),
            ItemFilter.filter(&items, &and_right)
        );

        let or_left = a.build().or(b.build()).or(c.build());
        let or_right = a.build().or(b.build().or(c.build()));
        prop_assert_eq!(
            ItemFilter.filter(&items, &or_left),
            ItemFilter.filter(&items, &or_right)
        );
    }

    #[test]
    fn parallel_filter_matches_sequential(items in arb_items(), tree in arb_spec()) {
        let spec = tree.build();
        prop_assert_eq!(
            ItemFilter.par_filter(items.as_slice(), &spec),
            ItemFilter.filter(&items, &spec)
        );
    }

    #[test]
    fn all_and_any_fold_their_children(items in arb_items(), p1 in arb_spec(), p2 in arb_spec()) {
        let all: All<Product> = vec![p1.build(), p2.build()].into_iter().collect();
        let any: Any<Product> = vec![p1.build(), p2.build()].into_iter().collect();

        prop_assert_eq!(
            ItemFilter.filter(&items, &all),
            ItemFilter.filter(&items, &p1.build().and(p2.build()))
        );
        prop_assert_eq!(
            ItemFilter.filter(&items, &any),
            ItemFilter.filter(&items, &p1.build().or(p2.build()))
        );
    }
}
