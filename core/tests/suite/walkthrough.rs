//! Nested navigation, heterogeneous equality and fallbacks in one chain

use std::cell::RefCell;
use std::cmp::Ordering;

use optio_core::{Comparable, Optional};

struct Leaf {
    text: String,
}

struct Branch {
    leaf: Option<Leaf>,
}

struct Root {
    branch: Option<Branch>,
}

impl Comparable<String> for Leaf {
    fn compare(&self, other: &String) -> Ordering {
        self.text.as_str().cmp(other.as_str())
    }
}

const RAW: &str = "00001234.43210000";

fn sample() -> Root {
    Root {
        branch: Some(Branch {
            leaf: Some(Leaf {
                text: RAW.to_string(),
            }),
        }),
    }
}

#[test]
fn nested_navigation_reaches_leaf() {
    let leaf = Optional::of(sample())
        .map_nilable(|root| root.branch)
        .map_nilable(|branch| branch.leaf);

    assert!(leaf.equals(&Optional::of(RAW.to_string())));
}

#[test]
fn missing_link_short_circuits() {
    let root = Root {
        branch: Some(Branch { leaf: None }),
    };
    let leaf = Optional::of(root)
        .map_nilable(|root| root.branch)
        .map_nilable(|branch| branch.leaf);

    assert!(leaf.is_absent());
    assert!(!leaf.equals(&Optional::of(RAW.to_string())));
}

#[test]
fn parsed_leaf_feeds_fallbacks() {
    let printed = RefCell::new(Vec::new());

    let number = Optional::of(sample())
        .map_nilable(|root| root.branch)
        .map_nilable(|branch| branch.leaf)
        .flat_map(|leaf| Optional::of_errorable(leaf.text.parse::<f64>()));

    number.if_present(|v| printed.borrow_mut().push(format!("Value is: {v:.6}")));

    number.filter(|v| *v < 1234.0).if_present_or_else(
        |_| printed.borrow_mut().push("unreachable".to_string()),
        || printed.borrow_mut().push("In runnable.".to_string()),
    );

    assert_eq!(
        *printed.borrow(),
        vec!["Value is: 1234.432100".to_string(), "In runnable.".to_string()]
    );

    let value = number.or_else_panic("parsed above");
    assert!((number.or_else(4321.001) - value).abs() < f64::EPSILON);
    assert!((Optional::empty().or_else(4321.001) - 4321.001_f64).abs() < f64::EPSILON);
    assert!((number.or_else_get(|| 4321.001) - value).abs() < f64::EPSILON);
}

#[test]
fn or_with_supplies_sum() {
    let total = Optional::<i32>::of_nilable(None)
        .or_with((12345, 54321), |(a, b)| Some(a + b))
        .or_else_panic("This will not panic");

    assert_eq!(total, 66666);
}
