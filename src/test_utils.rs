pub mod ast {
    macro_rules! and {
        ($($child:expr),+ $(,)?) => {
            $crate::ast::Specification::and(vec![$($child),+]).unwrap()
        };
    }

    macro_rules! or {
        ($($child:expr),+ $(,)?) => {
            $crate::ast::Specification::or(vec![$($child),+]).unwrap()
        };
    }

    macro_rules! not {
        ($value:expr) => {
            $crate::ast::Specification::Not(Box::new($value))
        };
    }

    macro_rules! leaf {
        ($rule:expr) => {
            $crate::ast::Specification::Rule($crate::predicates::Leaf::new(
                $rule,
                $crate::parameters::Parameters::new(),
            ))
        };
        ($rule:expr, $parameters:expr) => {
            $crate::ast::Specification::Rule($crate::predicates::Leaf::new(
                $rule,
                $crate::parameters::Parameters::from($parameters),
            ))
        };
    }

    macro_rules! call {
        ($name:expr, $arguments:expr) => {
            $crate::ast::Specification::Call($crate::predicates::FunctionCall::new(
                $name,
                Vec::from($arguments),
            ))
        };
    }

    pub(crate) use and;
    pub(crate) use call;
    pub(crate) use leaf;
    pub(crate) use not;
    pub(crate) use or;
}
