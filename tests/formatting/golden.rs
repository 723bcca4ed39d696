#[cfg(test)]
mod examples {
    use std::path::Path;

    use formula::formatting::*;
    use formula::language::Variables;
    use formula::parsing;

    /// Golden test for the format command
    ///
    /// Each line of the files in tests/golden/ is an expression already in
    /// canonical form. Parsing it and formatting the result with the
    /// Identity renderer must give back the same line. If a line fails this
    /// test either the parser & formatter is wrong or the golden file needs
    /// updating after a deliberate style change.

    fn variables() -> Variables {
        let file = Path::new("tests/samples/variables.def");
        let content = parsing::load(file)
            .unwrap_or_else(|e| panic!("Failed to load file {:?}: {:?}", file, e));

        parsing::parse_definitions(&content)
            .unwrap_or_else(|e| panic!("Failed to read definitions {:?}: {:?}", file, e))
    }

    fn show_diff(original: &str, formatted: &str) {
        println!("- {}", original);
        println!("+ {}", formatted);
    }

    fn check_file(filename: &str, format: impl Fn(&str) -> Result<String, String>) {
        let file = Path::new(filename);

        assert!(file.exists(), "golden file {:?} missing", file);

        let content = parsing::load(file)
            .unwrap_or_else(|e| panic!("Failed to load file {:?}: {:?}", file, e));

        let mut failures = 0;

        for line in content
            .lines()
            .filter(|line| !line.is_empty())
        {
            match format(line) {
                Ok(result) if result == line => {}
                Ok(result) => {
                    show_diff(line, &result);
                    failures += 1;
                }
                Err(message) => {
                    println!("Failed to parse {:?}: {}", line, message);
                    failures += 1;
                }
            }
        }

        if failures > 0 {
            panic!("All golden expressions in {:?} must format unchanged", file);
        }
    }

    #[test]
    fn ensure_identical_formulas() {
        let variables = variables();

        check_file("tests/golden/formulas.txt", |line| {
            parsing::parse_function(line, &variables, true)
                .map(|function| render_function(&Identity, &function, &variables))
                .map_err(|e| e.to_string())
        });
    }

    #[test]
    fn ensure_identical_decisions() {
        let variables = variables();

        check_file("tests/golden/decisions.txt", |line| {
            parsing::parse_decision(line, &variables)
                .map(|decision| render_decision(&Identity, &decision, &variables))
                .map_err(|e| e.to_string())
        });
    }
}
