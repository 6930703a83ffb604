#![allow(dead_code)]

use proptest::prelude::*;
use ruletree::{and, field, not, or, pass, Combinator, FieldCatalog, FieldType, Node, Operator};

// --- Fixed field schema ---
// profile.age     : Numeric
// profile.balance : Monetary
// profile.status  : String, one of {"active", "inactive", "suspended"}
// profile.banned  : Boolean
// profile.region  : String, one of {"us-east", "us-west", "eu", "ap"}
// profile.joined  : Date

pub const PROFILE: &str = "profile";

const STATUSES: &[&str] = &["active", "inactive", "suspended"];
const REGIONS: &[&str] = &["us-east", "us-west", "eu", "ap"];
const STRING_FIELDS: &[&str] = &["status", "region"];
const ALL_FIELDS: &[&str] = &["age", "balance", "status", "banned", "region", "joined"];

pub fn profile_fields() -> FieldCatalog {
    FieldCatalog::new()
        .field(PROFILE, "age", FieldType::Numeric)
        .field(PROFILE, "balance", FieldType::Monetary)
        .field(PROFILE, "status", FieldType::String)
        .field(PROFILE, "banned", FieldType::Boolean)
        .field(PROFILE, "region", FieldType::String)
        .field(PROFILE, "joined", FieldType::Date)
}

/// A literal the numeric grammar accepts.
pub fn arb_number() -> impl Strategy<Value = String> {
    "-?(0|[1-9][0-9]{0,5})(\\.[0-9]{1,3})?"
}

pub fn arb_date() -> impl Strategy<Value = String> {
    (1990_u32..=2040, 1_u32..=12, 1_u32..=28).prop_map(|(y, m, d)| format!("{y:04}-{m:02}-{d:02}"))
}

/// Generate a condition that always translates on the profile schema.
pub fn arb_leaf() -> impl Strategy<Value = Node> {
    prop_oneof![
        // numeric and monetary comparisons
        (
            prop::sample::select(&["age", "balance"][..]),
            prop::sample::select(&[0u8, 1, 2, 3, 4, 5][..]),
            arb_number(),
        )
            .prop_map(|(name, op, val)| {
                let f = field(name);
                match op {
                    0 => f.eq(val),
                    1 => f.neq(val),
                    2 => f.gt(val),
                    3 => f.gte(val),
                    4 => f.lt(val),
                    _ => f.lte(val),
                }
            }),
        // status comparisons, including the folded and method forms
        (
            prop::sample::select(STATUSES),
            prop::sample::select(&[0u8, 1, 2, 3][..]),
        )
            .prop_map(|(val, op)| {
                let f = field("status");
                match op {
                    0 => f.eq(val),
                    1 => f.neq(val),
                    2 => f.iequals(val),
                    _ => f.contains(val),
                }
            }),
        // region equality
        (prop::sample::select(REGIONS), any::<bool>()).prop_map(|(val, is_eq)| {
            if is_eq {
                field("region").eq(val)
            } else {
                field("region").neq(val)
            }
        }),
        any::<bool>().prop_map(|val| field("banned").eq(val.to_string())),
        arb_date().prop_map(|d| field("joined").lt(d)),
        (arb_number(), arb_number()).prop_map(|(lo, hi)| field("balance").between(&lo, &hi)),
        prop::sample::select(ALL_FIELDS).prop_map(|name| field(name).is_null()),
        (
            prop::sample::select(STRING_FIELDS),
            prop::sample::select(STRING_FIELDS),
        )
            .prop_map(|(a, b)| field(a).neq_field(b)),
    ]
}

/// Generate a rule tree of AND / OR / NOT / pass-through groups over leaves,
/// bounded depth, every group non-empty.
pub fn arb_tree(max_depth: u32) -> impl Strategy<Value = Node> {
    arb_leaf().prop_recursive(max_depth, 32, 4, |inner| {
        let children = prop::collection::vec(inner, 1..=4);
        prop_oneof![
            children.clone().prop_map(and),
            children.clone().prop_map(or),
            children.clone().prop_map(not),
            children.prop_map(pass),
        ]
    })
}

pub fn arb_combinator() -> impl Strategy<Value = Combinator> {
    prop::sample::select(
        &[
            Combinator::And,
            Combinator::Or,
            Combinator::Not,
            Combinator::None,
        ][..],
    )
}

/// Any operator on any schema field with an arbitrary value: most of these
/// do not translate.
pub fn arb_any_condition() -> impl Strategy<Value = Node> {
    (
        prop::sample::select(Operator::ALL.to_vec()),
        prop::sample::select(ALL_FIELDS),
        ".{0,24}",
    )
        .prop_map(|(operator, name, value)| field(name).op(operator, value))
}

/// Number of `"` in `text` that open or close a string literal, skipping
/// backslash escapes.
pub fn unescaped_quotes(text: &str) -> usize {
    let mut count = 0;
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                chars.next();
            }
            '"' => count += 1,
            _ => {}
        }
    }
    count
}

/// Whether every `(` has a matching `)` outside string literals.
pub fn parens_balanced(text: &str) -> bool {
    let mut depth = 0_i64;
    let mut in_string = false;
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        match (in_string, c) {
            (true, '\\') => {
                chars.next();
            }
            (_, '"') => in_string = !in_string,
            (false, '(') => depth += 1,
            (false, ')') => {
                depth -= 1;
                if depth < 0 {
                    return false;
                }
            }
            _ => {}
        }
    }
    depth == 0 && !in_string
}
