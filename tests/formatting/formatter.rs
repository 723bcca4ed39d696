#[cfg(test)]
mod verify {
    use formula::formatting::*;
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
        variables
    }

    #[test]
    fn canonical_spacing() {
        let variables = variables();

        let function = parsing::parse_function("x+y*2-( x-1 )", &variables, false).unwrap();
        assert_eq!(
            render_function(&Identity, &function, &variables),
            "x + y*2 - (x - 1)"
        );

        let function = parsing::parse_function("Max[1,Sqrt[x]]", &variables, false).unwrap();
        assert_eq!(
            render_function(&Identity, &function, &variables),
            "max(1, sqrt(x))"
        );

        let decision = parsing::parse_decision("colour=green and not (x<3)", &variables).unwrap();
        assert_eq!(
            render_decision(&Identity, &decision, &variables),
            "colour = green and not x < 3"
        );
    }

    #[test]
    fn formatted_output_parses_back() {
        let variables = variables();

        for expr in [
            "x+y*2",
            "-x+y",
            "x - (y - 2)",
            "-(x+y)",
            "x/y/2",
            "x/(y/2)",
            "(x+1)^2",
            "x^2^y",
            "(x^2)^y",
            "2*(x-1)",
            "2*(-x)",
            "sqrt(x)+Sqrt[y]",
            "log10(x)",
            "log2[x*y]",
            "max(1,x,y)",
            "value(colour)*2",
            "v[1]*x",
            "pi*e^(i*x)",
            "1.5e-3*x",
            "50%",
        ] {
            let first = parsing::parse_function(expr, &variables, false).unwrap();
            let text = render_function(&Identity, &first, &variables);
            let second = parsing::parse_function(&text, &variables, false)
                .unwrap_or_else(|e| panic!("{:?} formatted as {:?} failed: {:?}", expr, text, e));

            assert_eq!(first, second, "{:?} formatted as {:?}", expr, text);
        }
    }

    #[test]
    fn formatted_decisions_parse_back() {
        let variables = variables();

        for expr in [
            "x < 3 and not True",
            "True or False and x >= 1",
            "(True or False) and x >= 1",
            "not (x < 3 xor x > 5)",
            "colour = red or v[2] is unknown",
            "x <= y + 1",
        ] {
            let first = parsing::parse_decision(expr, &variables).unwrap();
            let text = render_decision(&Identity, &first, &variables);
            let second = parsing::parse_decision(&text, &variables)
                .unwrap_or_else(|e| panic!("{:?} formatted as {:?} failed: {:?}", expr, text, e));

            assert_eq!(first, second, "{:?} formatted as {:?}", expr, text);
        }
    }

    #[test]
    fn fragments_are_tagged() {
        let variables = variables();

        let function = parsing::parse_function("sqrt(x)+2", &variables, false).unwrap();
        let fragments = format_function(&function, &variables);

        assert_eq!(
            fragments,
            vec![
                (Syntax::Function, "sqrt".to_string()),
                (Syntax::Structure, "(".to_string()),
                (Syntax::Variable, "x".to_string()),
                (Syntax::Structure, ")".to_string()),
                (Syntax::Operator, " + ".to_string()),
                (Syntax::Numeric, "2".to_string()),
            ]
        );
    }
}
