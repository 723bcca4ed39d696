#[cfg(test)]
mod verify {
    use formula::language::*;
    use formula::parsing::{self, ParsingError};

    fn variables() -> Variables {
        let mut variables = Variables::new();
        variables.add_numeric("x", 1.0);
        variables.add_numeric_array("v", vec![1.0, 2.0, 3.0]);
        variables.add_discrete(
            "colour",
            vec!["red".to_string(), "green".to_string()],
        );
        variables.add_discrete_array("grid", 4, vec!["on".to_string(), "off".to_string()]);
        variables
    }

    fn x() -> Box<Function> {
        Box::new(Function::Variable {
            variable: 0,
            index: None,
        })
    }

    fn number(value: f64) -> Box<Function> {
        Box::new(Function::Constant(value))
    }

    #[test]
    fn comparison_and_negation() {
        let variables = variables();

        let decision = parsing::parse_decision("x < 3 and not True", &variables);
        assert_eq!(
            decision,
            Ok(Decision::Boolean(
                Operator::And,
                Box::new(Decision::Comparison(
                    Comparison::LessThan,
                    x(),
                    number(3.0)
                )),
                Box::new(Decision::Not(Box::new(Decision::Constant(true))))
            ))
        );
    }

    #[test]
    fn operators_group_to_the_left() {
        let variables = variables();

        let decision = parsing::parse_decision("x > 1 xor x > 2 xor x > 3", &variables);
        assert_eq!(
            decision,
            Ok(Decision::Boolean(
                Operator::Xor,
                Box::new(Decision::Boolean(
                    Operator::Xor,
                    Box::new(Decision::Comparison(
                        Comparison::GreaterThan,
                        x(),
                        number(1.0)
                    )),
                    Box::new(Decision::Comparison(
                        Comparison::GreaterThan,
                        x(),
                        number(2.0)
                    ))
                )),
                Box::new(Decision::Comparison(
                    Comparison::GreaterThan,
                    x(),
                    number(3.0)
                ))
            ))
        );
    }

    #[test]
    fn parentheses_override_precedence() {
        let variables = variables();

        let decision = parsing::parse_decision("(True or False) and x >= 2", &variables);
        assert_eq!(
            decision,
            Ok(Decision::Boolean(
                Operator::And,
                Box::new(Decision::Boolean(
                    Operator::Or,
                    Box::new(Decision::Constant(true)),
                    Box::new(Decision::Constant(false))
                )),
                Box::new(Decision::Comparison(
                    Comparison::GreaterEqual,
                    x(),
                    number(2.0)
                ))
            ))
        );
    }

    #[test]
    fn discrete_arrays() {
        let variables = variables();

        let decision = parsing::parse_decision("grid[2] = off", &variables);
        assert_eq!(
            decision,
            Ok(Decision::DiscreteEquality {
                variable: 3,
                index: Some(number(2.0)),
                value: 1
            })
        );

        let decision = parsing::parse_decision("v[x] is unknown", &variables);
        assert_eq!(
            decision,
            Ok(Decision::ValueUnknown {
                variable: 1,
                index: Some(x())
            })
        );
    }

    #[test]
    fn numeric_equality() {
        let variables = variables();

        let decision = parsing::parse_decision("x = v[1] + 1", &variables);
        assert_eq!(
            decision,
            Ok(Decision::Comparison(
                Comparison::Equal,
                x(),
                Box::new(Function::Summation(vec![
                    Function::Variable {
                        variable: 1,
                        index: Some(number(1.0))
                    },
                    Function::Constant(1.0)
                ]))
            ))
        );
    }

    #[test]
    fn arithmetic_before_equals_is_numeric() {
        let variables = variables();

        let element = |i: f64| Function::Variable {
            variable: 1,
            index: Some(number(i)),
        };

        let decision = parsing::parse_decision("x*v[1] = 3", &variables);
        assert_eq!(
            decision,
            Ok(Decision::Comparison(
                Comparison::Equal,
                Box::new(Function::Product(vec![*x(), element(1.0)])),
                number(3.0)
            ))
        );

        let decision = parsing::parse_decision("v[1]+v[2] = 3", &variables);
        assert_eq!(
            decision,
            Ok(Decision::Comparison(
                Comparison::Equal,
                Box::new(Function::Summation(vec![element(1.0), element(2.0)])),
                number(3.0)
            ))
        );

        // either side may hold the arithmetic
        let decision = parsing::parse_decision("3 = v[1]+v[2]", &variables);
        assert_eq!(
            decision,
            Ok(Decision::Comparison(
                Comparison::Equal,
                number(3.0),
                Box::new(Function::Summation(vec![element(1.0), element(2.0)]))
            ))
        );

        // arithmetic inside a subscript leaves the comparison discrete
        let decision = parsing::parse_decision("grid[x+1] = on", &variables);
        assert_eq!(
            decision,
            Ok(Decision::DiscreteEquality {
                variable: 3,
                index: Some(Box::new(Function::Summation(vec![
                    *x(),
                    Function::Constant(1.0)
                ]))),
                value: 0
            })
        );
    }

    #[test]
    fn invalid_decisions() {
        let variables = variables();

        assert_eq!(
            parsing::parse_decision("", &variables),
            Err(ParsingError::EmptyDecision(0))
        );
        assert_eq!(
            parsing::parse_decision("x", &variables),
            Err(ParsingError::InvalidDecision(0, "x"))
        );
        assert_eq!(
            parsing::parse_decision("x < q", &variables),
            Err(ParsingError::InvalidFunction(4, "q"))
        );
        assert_eq!(
            parsing::parse_decision("colour = purple", &variables),
            Err(ParsingError::NotPossibleValue(9, "purple", "colour"))
        );
    }
}
