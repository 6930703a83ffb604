mod strategies;

use proptest::prelude::*;
use ruletree::{
    and, field, not, or, pass, translate, Group, Node, TranslateError, Translator,
};
use strategies::{
    arb_any_condition, arb_combinator, arb_leaf, arb_number, arb_tree, parens_balanced,
    profile_fields, unescaped_quotes, PROFILE,
};

fn tr(node: &Node) -> Result<String, TranslateError> {
    translate(PROFILE, node, &profile_fields())
}

// ---------------------------------------------------------------------------
// Well-formed trees always translate, deterministically, to balanced text.
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn generated_trees_translate(tree in arb_tree(4)) {
        prop_assert!(tr(&tree).is_ok(), "tree {} failed: {:?}", tree, tr(&tree));
    }

    #[test]
    fn determinism(tree in arb_tree(4)) {
        let first = tr(&tree);
        for _ in 0..3 {
            prop_assert_eq!(&first, &tr(&tree));
        }
    }

    #[test]
    fn parentheses_balance(tree in arb_tree(4)) {
        let text = tr(&tree).unwrap();
        prop_assert!(parens_balanced(&text), "unbalanced: {}", text);
    }

    #[test]
    fn string_literals_are_closed(tree in arb_tree(4)) {
        let text = tr(&tree).unwrap();
        prop_assert_eq!(unescaped_quotes(&text) % 2, 0, "dangling quote in {}", text);
    }
}

// ---------------------------------------------------------------------------
// Group composition: each combinator joins its children's translations.
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn and_of_leaves_is_joined(leaves in prop::collection::vec(arb_leaf(), 1..6)) {
        let parts: Vec<String> = leaves.iter().map(|l| tr(l).unwrap()).collect();
        prop_assert_eq!(tr(&and(leaves)).unwrap(), parts.join("&&"));
    }

    #[test]
    fn or_at_root_is_bare(leaves in prop::collection::vec(arb_leaf(), 1..6)) {
        let parts: Vec<String> = leaves.iter().map(|l| tr(l).unwrap()).collect();
        prop_assert_eq!(tr(&or(leaves)).unwrap(), parts.join("||"));
    }

    #[test]
    fn nested_or_is_parenthesised(
        first in arb_leaf(),
        leaves in prop::collection::vec(arb_leaf(), 1..4),
    ) {
        let inner = tr(&or(leaves.clone())).unwrap();
        let outer = tr(&and([first.clone(), or(leaves)])).unwrap();
        prop_assert_eq!(outer, format!("{}&&({inner})", tr(&first).unwrap()));
    }

    #[test]
    fn not_wraps_the_conjunction(children in prop::collection::vec(arb_tree(2), 2..4)) {
        let conjunction = tr(&and(children.clone())).unwrap();
        prop_assert_eq!(tr(&not(children)).unwrap(), format!("!({conjunction})"));
    }

    #[test]
    fn not_result_is_wrapped(tree in arb_tree(3)) {
        let text = tr(&not([tree])).unwrap();
        prop_assert!(text.starts_with("!("), "{}", text);
        prop_assert!(text.ends_with(')'), "{}", text);
    }

    #[test]
    fn single_child_pass_through_is_transparent(tree in arb_tree(3)) {
        prop_assert_eq!(tr(&pass([tree.clone()])), tr(&tree));
    }

    #[test]
    fn translate_all_matches_pass_through_group(roots in prop::collection::vec(arb_tree(2), 1..4)) {
        let all = Translator::new().translate_all(PROFILE, &roots, &profile_fields());
        prop_assert_eq!(all, tr(&pass(roots)));
    }
}

// ---------------------------------------------------------------------------
// Failures and literals.
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn empty_group_anywhere_fails(tree in arb_tree(3), combinator in arb_combinator()) {
        let rule = and([tree, or([Group::new(combinator).into()])]);
        prop_assert_eq!(tr(&rule), Err(TranslateError::EmptyGroup { combinator }));
    }

    #[test]
    fn numbers_are_never_quoted(value in arb_number()) {
        prop_assert_eq!(
            tr(&field("age").gte(value.clone())).unwrap(),
            format!("profile.age>={value}")
        );
    }

    #[test]
    fn any_string_stays_one_literal(value in any::<String>()) {
        let text = tr(&field("status").eq(value)).unwrap();
        prop_assert!(text.starts_with("profile.status==\""), "{}", text);
        prop_assert!(text.ends_with('"'), "{}", text);
        prop_assert_eq!(unescaped_quotes(&text), 2, "{}", text);
        prop_assert!(!text.contains('\n'), "{}", text);
    }

    #[test]
    fn arbitrary_conditions_never_panic(conditions in prop::collection::vec(arb_any_condition(), 1..6)) {
        let _ = tr(&or(conditions));
    }
}
