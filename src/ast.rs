use crate::{
    error::SpecError,
    parameters::Parameters,
    predicates::{FunctionCall, Leaf},
};
use itertools::Itertools;
use log::{debug, trace};
use std::{
    fmt::{Display, Formatter},
    ops::{BitAnd, BitOr, Not},
};

/// A node of an expression tree.
///
/// Every node renders to a rule and exposes the parameters referenced by that rule, regardless of
/// whether it is a leaf or a composite.
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum Specification {
    Rule(Leaf),
    Call(FunctionCall),
    And(Children),
    Or(Children),
    Not(Box<Specification>),
}

#[derive(Debug, Hash, Clone, Copy, Eq, PartialEq)]
pub enum Connective {
    And,
    Or,
}

impl Display for Connective {
    fn fmt(&self, formatter: &mut Formatter) -> std::fmt::Result {
        match self {
            Self::And => write!(formatter, "AND"),
            Self::Or => write!(formatter, "OR"),
        }
    }
}

/// The ordered, non-empty children of a conjunction or a disjunction.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Children(Vec<Specification>);

impl Children {
    pub fn new<I>(connective: Connective, children: I) -> Result<Self, SpecError>
    where
        I: IntoIterator<Item = Specification>,
    {
        let children: Vec<_> = children.into_iter().collect();
        if children.is_empty() {
            debug!("rejected {connective} composite without children");
            return Err(SpecError::EmptyComposite(connective));
        }

        trace!("built {connective} composite with {} children", children.len());
        Ok(Self(children))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Specification> {
        self.0.iter()
    }

    fn write(&self, connective: Connective, formatter: &mut Formatter) -> std::fmt::Result {
        let separator = match connective {
            Connective::And => ") AND (",
            Connective::Or => ") OR (",
        };
        write!(formatter, "({})", self.0.iter().format(separator))
    }
}

impl<'a> IntoIterator for &'a Children {
    type Item = &'a Specification;
    type IntoIter = std::slice::Iter<'a, Specification>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Specification {
    pub fn and<I: IntoIterator<Item = Specification>>(children: I) -> Result<Self, SpecError> {
        Children::new(Connective::And, children).map(Self::And)
    }

    pub fn or<I: IntoIterator<Item = Specification>>(children: I) -> Result<Self, SpecError> {
        Children::new(Connective::Or, children).map(Self::Or)
    }

    #[inline]
    pub fn negate(self) -> Self {
        Self::Not(Box::new(self))
    }

    /// The rendered rule, fully parenthesized.
    #[inline]
    pub fn rule(&self) -> String {
        self.to_string()
    }

    /// The parameters of the whole tree, merged from left to right.
    ///
    /// When two nodes use the same parameter name, the right-most value wins.
    pub fn parameters(&self) -> Parameters {
        let mut parameters = Parameters::new();
        self.collect_parameters(&mut parameters);
        parameters
    }

    /// The direct children of this node.
    pub fn children(&self) -> std::slice::Iter<'_, Specification> {
        match self {
            Self::And(children) | Self::Or(children) => children.iter(),
            Self::Not(child) => std::slice::from_ref(child.as_ref()).iter(),
            Self::Rule(_) | Self::Call(_) => Default::default(),
        }
    }

    fn collect_parameters(&self, parameters: &mut Parameters) {
        match self {
            Self::Rule(leaf) => parameters.merge(leaf.parameters()),
            Self::Call(_) => {}
            Self::And(children) | Self::Or(children) => children
                .iter()
                .for_each(|child| child.collect_parameters(parameters)),
            Self::Not(child) => child.collect_parameters(parameters),
        }
    }
}

impl Display for Specification {
    fn fmt(&self, formatter: &mut Formatter) -> std::fmt::Result {
        match self {
            Self::Rule(leaf) => Display::fmt(leaf, formatter),
            Self::Call(call) => Display::fmt(call, formatter),
            Self::And(children) => children.write(Connective::And, formatter),
            Self::Or(children) => children.write(Connective::Or, formatter),
            Self::Not(child) => write!(formatter, "NOT ({child})"),
        }
    }
}

impl From<Leaf> for Specification {
    fn from(leaf: Leaf) -> Self {
        Self::Rule(leaf)
    }
}

impl From<FunctionCall> for Specification {
    fn from(call: FunctionCall) -> Self {
        Self::Call(call)
    }
}

impl Not for Specification {
    type Output = Self;

    fn not(self) -> Self::Output {
        self.negate()
    }
}

impl BitAnd for Specification {
    type Output = Self;

    fn bitand(self, other: Self) -> Self::Output {
        Self::And(Children(vec![self, other]))
    }
}

impl BitOr for Specification {
    type Output = Self;

    fn bitor(self, other: Self) -> Self::Output {
        Self::Or(Children(vec![self, other]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        literal::Literal,
        test_utils::ast::{and, call, leaf, not, or},
    };

    #[test]
    fn can_build_a_conjunction() {
        let expression = and!(
            leaf!("a", [("foo", "param a")]),
            leaf!("b", [("bar", "param b")])
        );

        assert_eq!("(a) AND (b)", expression.rule());
        assert_eq!(
            Parameters::from([("foo", "param a"), ("bar", "param b")]),
            expression.parameters()
        );
    }

    #[test]
    fn can_build_a_disjunction() {
        let expression = or!(
            leaf!("a", [("foo", "param a")]),
            leaf!("b", [("bar", "param b")])
        );

        assert_eq!("(a) OR (b)", expression.rule());
        assert_eq!(
            Parameters::from([("foo", "param a"), ("bar", "param b")]),
            expression.parameters()
        );
    }

    #[test]
    fn can_build_a_negation() {
        let expression = not!(leaf!("a", [("foo", "param a")]));

        assert_eq!("NOT (a)", expression.rule());
        assert_eq!(Parameters::from([("foo", "param a")]), expression.parameters());
    }

    #[test]
    fn wrap_every_child_even_when_already_parenthesized() {
        let expression = and!(or!(leaf!("a"), leaf!("b")), not!(leaf!("c")), leaf!("d"));

        assert_eq!("((a) OR (b)) AND (NOT (c)) AND (d)", expression.rule());
    }

    #[test]
    fn wrap_a_single_child() {
        let expression = or!(leaf!("a"));

        assert_eq!("(a)", expression.rule());
    }

    #[test]
    fn return_an_error_on_a_conjunction_without_children() {
        let result = Specification::and(vec![]);

        assert_eq!(Err(SpecError::EmptyComposite(Connective::And)), result);
    }

    #[test]
    fn return_an_error_on_a_disjunction_without_children() {
        let result = Specification::or(std::iter::empty());

        assert_eq!(Err(SpecError::EmptyComposite(Connective::Or)), result);
    }

    #[test]
    fn let_the_right_most_parameter_win_on_collision() {
        let expression = and!(
            leaf!("a", [("shared", 1), ("left", 2)]),
            not!(leaf!("b", [("shared", 3)]))
        );

        assert_eq!(
            Parameters::from([("shared", 3), ("left", 2)]),
            expression.parameters()
        );
    }

    #[test]
    fn collect_parameters_from_nested_composites() {
        let expression = or!(
            and!(leaf!("a", [("a", 1)]), call!("f", [Literal::from(":b")])),
            not!(or!(leaf!("c", [("c", 3)])))
        );

        assert_eq!(Parameters::from([("a", 1), ("c", 3)]), expression.parameters());
    }

    #[test]
    fn render_the_same_rule_every_time() {
        let expression = and!(leaf!("a"), not!(leaf!("b")));

        assert_eq!(expression.rule(), expression.rule());
    }

    #[test]
    fn can_combine_with_operators() {
        let expression = !(leaf!("a") & leaf!("b")) | leaf!("c");

        assert_eq!("(NOT ((a) AND (b))) OR (c)", expression.rule());
    }

    #[test]
    fn can_iterate_over_the_direct_children() {
        let a = leaf!("a");
        let b = leaf!("b");
        let expression = and!(a.clone(), b.clone());

        assert_eq!(vec![&a, &b], expression.children().collect::<Vec<_>>());
        assert_eq!(vec![&a], not!(a.clone()).children().collect::<Vec<_>>());
        assert_eq!(0, a.children().count());
    }

    #[test]
    fn can_be_shared_between_threads() {
        let expression = std::sync::Arc::new(and!(leaf!("a"), leaf!("b", [("b", 1)])));

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let expression = std::sync::Arc::clone(&expression);
                std::thread::spawn(move || (expression.rule(), expression.parameters()))
            })
            .collect();

        for handle in handles {
            let (rule, parameters) = handle.join().unwrap();
            assert_eq!("(a) AND (b)", rule);
            assert_eq!(Parameters::from([("b", 1)]), parameters);
        }
    }
}
