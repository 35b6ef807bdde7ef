//! Property-based tests for expressions and functions
//!
//! Random expression trees over four variables are checked against the algebraic laws
//! relating their different representations.

use boolfn::*;
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

fn leaf() -> impl Strategy<Value = Node> {
    prop_oneof![
        4 => prop::sample::select(vec!["A", "B", "C", "D"]).prop_map(|name| Node::var(name)),
        1 => any::<bool>().prop_map(Node::Const),
    ]
}

fn operator() -> impl Strategy<Value = Operator> {
    prop::sample::select(vec![
        Operator::And,
        Operator::Or,
        Operator::Xor,
        Operator::Imp,
        Operator::Eqv,
        Operator::Nand,
        Operator::Nor,
    ])
}

fn expression() -> impl Strategy<Value = Node> {
    leaf().prop_recursive(5, 32, 2, |inner| {
        prop_oneof![
            1 => inner.clone().prop_map(Node::negation),
            3 => (operator(), inner.clone(), inner).prop_map(|(op, l, r)| Node::operation(op, l, r)),
        ]
    })
}

/// Evaluate a formula on a row of the truth table of a function
fn eval_row(formula: &dyn Formula, variables: &[String], row: &TruthRow) -> bool {
    formula
        .eval_with(&|name| {
            variables
                .iter()
                .position(|v| v == name)
                .map(|p| row.inputs[p])
        })
        .unwrap()
}

// ============================================================================
// Parsing and rendering
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_canonical_rendering_parses_back(node in expression()) {
        let parsed: Node = node.to_string().parse().unwrap();
        prop_assert_eq!(&parsed, &node);

        let parsed: Node = node.canonical_string().parse().unwrap();
        prop_assert_eq!(&parsed, &node);
    }

    #[test]
    fn prop_symbolic_rendering_parses_back(node in expression()) {
        let text = SYMBOLIC_FMT_CFG.infix(&node).to_string();
        let parsed: Node = text.parse().unwrap();
        prop_assert_eq!(parsed, node);
    }

    #[test]
    fn prop_validate_accepts_rendering(node in expression()) {
        prop_assert_eq!(validate(&node.to_string()), (true, None));
    }
}

// ============================================================================
// Simplification
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_simplify_is_idempotent(node in expression()) {
        let once = node.simplify();
        prop_assert_eq!(once.simplify(), once);
    }

    #[test]
    fn prop_simplify_preserves_semantics(node in expression()) {
        let simplified = node.simplify();
        prop_assert!(equivalent(&node, &simplified).unwrap());
        prop_assert!(simplified.size() <= node.size() * 3);
    }
}

// ============================================================================
// Function views
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_truth_table_rows(node in expression()) {
        let f = BooleanFunction::new(&node.to_string()).unwrap();
        let table = f.truth_table().unwrap();
        prop_assert_eq!(table.len(), 1 << f.number_of_variables());

        let inputs: std::collections::HashSet<&Vec<bool>> = table.iter().map(|r| &r.inputs).collect();
        prop_assert_eq!(inputs.len(), table.len());

        for row in table {
            prop_assert_eq!(eval_row(&node, f.variables(), row), row.output);
        }
    }

    #[test]
    fn prop_polynomial_matches_truth_table(node in expression()) {
        let f = BooleanFunction::new(&node.to_string()).unwrap();
        let polynomial = f.polynomial().unwrap();
        for row in f.truth_table().unwrap() {
            prop_assert_eq!(polynomial.eval(&row.inputs), row.output);
        }
        prop_assert_eq!(f.is_linear().unwrap(), polynomial.degree() <= 1);
    }

    #[test]
    fn prop_minimized_is_equivalent(node in expression()) {
        let f = BooleanFunction::new(&node.to_string()).unwrap();
        let minimized = f.minimize().unwrap();

        let reparsed: Node = minimized.parse().unwrap();
        prop_assert!(equivalent(&f, &reparsed).unwrap(), "{}", minimized);

        let gates: Gate = minimized.parse().unwrap();
        prop_assert!(equivalent(&f, &gates).unwrap(), "{}", minimized);
    }

    #[test]
    fn prop_shannon_decomposition(node in expression()) {
        let f = BooleanFunction::new(&node.to_string()).unwrap();
        let variables = f.variables().to_vec();
        for (p, variable) in variables.iter().enumerate() {
            let (low, high) = f.decompose(variable).unwrap();
            prop_assert!(!low.variables().contains(variable));
            prop_assert!(!high.variables().contains(variable));
            for row in f.truth_table().unwrap() {
                let half = if row.inputs[p] { &high } else { &low };
                prop_assert_eq!(eval_row(half, &variables, row), row.output);
            }
        }
    }

    #[test]
    fn prop_preservation_matches_table(node in expression()) {
        let f = BooleanFunction::new(&node.to_string()).unwrap();
        let table = f.truth_table().unwrap();
        prop_assert_eq!(Some(f.preserves_zero().unwrap()), table.output(0).map(|v| !v));
        prop_assert_eq!(Some(f.preserves_one().unwrap()), table.output(table.len() - 1));
    }

    #[test]
    fn prop_monotonic_by_single_flips(node in expression()) {
        let f = BooleanFunction::new(&node.to_string()).unwrap();
        let n = f.number_of_variables();
        let table = f.truth_table().unwrap();
        let mut expected = true;
        for index in 0..table.len() {
            for bit in 0..n {
                let above = index | (1 << bit);
                if table.output(index) == Some(true) && table.output(above) == Some(false) {
                    expected = false;
                }
            }
        }
        prop_assert_eq!(f.is_monotonic().unwrap(), expected);
    }
}
