#[cfg(test)]
mod verify {
    use formula::language::*;
    use formula::parsing;

    fn variables() -> Variables {
        let mut variables = Variables::new();
        variables.add_numeric("x", 1.0);
        variables.add_numeric("y", 2.0);
        variables.add_numeric_array("v", vec![1.0, 2.0, 3.0]);
        variables.add_discrete(
            "colour",
            vec!["red".to_string(), "green".to_string()],
        );
        variables.add_discrete_array("grid", 4, vec!["on".to_string(), "off".to_string()]);
        variables
    }

    fn x() -> Function {
        Function::Variable {
            variable: 0,
            index: None,
        }
    }

    fn y() -> Function {
        Function::Variable {
            variable: 1,
            index: None,
        }
    }

    fn number(value: f64) -> Function {
        Function::Constant(value)
    }

    #[test]
    fn operator_precedence() {
        let variables = variables();

        let function = parsing::parse_function("2+3*4^2", &variables, false);
        assert_eq!(
            function,
            Ok(Function::Summation(vec![
                number(2.0),
                Function::Product(vec![
                    number(3.0),
                    Function::Exponent(Box::new(number(4.0)), Box::new(number(2.0)))
                ])
            ]))
        );

        let function = parsing::parse_function("x - y - 2", &variables, false);
        assert_eq!(
            function,
            Ok(Function::Summation(vec![
                x(),
                Function::Negation(Box::new(y())),
                Function::Negation(Box::new(number(2.0)))
            ]))
        );
    }

    #[test]
    fn subtraction_becomes_negated_term() {
        let variables = variables();

        let function = parsing::parse_function("x - y + 1", &variables, false);
        assert_eq!(
            function,
            Ok(Function::Summation(vec![
                x(),
                Function::Negation(Box::new(y())),
                number(1.0)
            ]))
        );

        let function = parsing::parse_function("-x+y", &variables, false);
        assert_eq!(
            function,
            Ok(Function::Summation(vec![
                Function::Negation(Box::new(x())),
                y()
            ]))
        );

        let function = parsing::parse_function("+x", &variables, false);
        assert_eq!(function, Ok(x()));
    }

    #[test]
    fn redundant_parentheses() {
        let variables = variables();

        let plain = parsing::parse_function("x*y+1", &variables, false);
        let wrapped = parsing::parse_function("(( (x*y+1) ))", &variables, false);
        assert!(plain.is_ok());
        assert_eq!(plain, wrapped);

        let function = parsing::parse_function("(x+1)*(y)", &variables, false);
        assert_eq!(
            function,
            Ok(Function::Product(vec![
                Function::Summation(vec![x(), number(1.0)]),
                y()
            ]))
        );
    }

    #[test]
    fn numeric_literals() {
        let variables = variables();

        assert_eq!(
            parsing::parse_function("3.25", &variables, false),
            Ok(number(3.25))
        );
        assert_eq!(
            parsing::parse_function("1.5e-3", &variables, false),
            Ok(number(1.5e-3))
        );
        assert_eq!(
            parsing::parse_function("4E+2", &variables, false),
            Ok(number(400.0))
        );
        assert_eq!(
            parsing::parse_function("12.5%", &variables, false),
            Ok(number(0.125))
        );
    }

    #[test]
    fn built_in_functions() {
        let variables = variables();

        let function = parsing::parse_function("sqrt(x)", &variables, false);
        assert_eq!(
            function,
            Ok(Function::Standard {
                kind: Kind::SquareRoot,
                arguments: vec![x()]
            })
        );

        // square brackets are an alternative spelling
        let function = parsing::parse_function("Sqrt[x]", &variables, false);
        assert_eq!(
            function,
            Ok(Function::Standard {
                kind: Kind::SquareRoot,
                arguments: vec![x()]
            })
        );

        let function = parsing::parse_function("max(1, x, y+2)", &variables, false);
        assert_eq!(
            function,
            Ok(Function::Standard {
                kind: Kind::Max,
                arguments: vec![
                    number(1.0),
                    x(),
                    Function::Summation(vec![y(), number(2.0)])
                ]
            })
        );

        let function = parsing::parse_function("arctan2(y, x)", &variables, false);
        assert_eq!(
            function,
            Ok(Function::Standard {
                kind: Kind::ArcTangent2,
                arguments: vec![y(), x()]
            })
        );
    }

    #[test]
    fn logarithms_with_preset_base() {
        let variables = variables();

        let function = parsing::parse_function("log10(x)", &variables, false);
        assert_eq!(
            function,
            Ok(Function::Standard {
                kind: Kind::LogB,
                arguments: vec![number(10.0), x()]
            })
        );

        let function = parsing::parse_function("log2(x)", &variables, false);
        assert_eq!(
            function,
            Ok(Function::Standard {
                kind: Kind::LogB,
                arguments: vec![number(2.0), x()]
            })
        );

        let function = parsing::parse_function("ln(x)", &variables, false);
        assert_eq!(
            function,
            Ok(Function::Standard {
                kind: Kind::LogE,
                arguments: vec![x()]
            })
        );
    }

    #[test]
    fn variables_and_arrays() {
        let variables = variables();

        let function = parsing::parse_function("v[x+1]", &variables, false);
        assert_eq!(
            function,
            Ok(Function::Variable {
                variable: 2,
                index: Some(Box::new(Function::Summation(vec![x(), number(1.0)])))
            })
        );

        let function = parsing::parse_function("value(colour)", &variables, false);
        assert_eq!(
            function,
            Ok(Function::Discrete {
                kind: DiscreteKind::Value,
                variable: 3,
                index: None
            })
        );

        let function = parsing::parse_function("index(grid[2])", &variables, false);
        assert_eq!(
            function,
            Ok(Function::Discrete {
                kind: DiscreteKind::ValueIndex,
                variable: 4,
                index: Some(Box::new(number(2.0)))
            })
        );
    }

    #[test]
    fn named_constants() {
        let variables = variables();

        let function = parsing::parse_function("2*pi", &variables, false);
        assert_eq!(
            function,
            Ok(Function::Product(vec![
                number(2.0),
                Function::NamedConstant(Constant::Pi)
            ]))
        );

        assert_eq!(
            parsing::parse_function("j", &variables, false),
            Ok(Function::NamedConstant(Constant::I))
        );
    }

    #[test]
    fn placeholder_only_when_allowed() {
        let variables = variables();

        assert_eq!(
            parsing::parse_function("?", &variables, true),
            Ok(Function::UserInput)
        );
        assert_eq!(
            parsing::parse_function("x + ?", &variables, true),
            Ok(Function::Summation(vec![x(), Function::UserInput]))
        );
        assert!(parsing::parse_function("?", &variables, false).is_err());
    }

    #[test]
    fn owned_tree_outlives_input() {
        let variables = variables();

        let function = {
            let text = String::from("sqrt(x)*2");
            parsing::parse_function(&text, &variables, false).ok()
        };

        assert_eq!(
            function.map(|function| function.size()),
            Some(4)
        );
    }
}
