#[cfg(test)]
mod samples {
    use std::path::Path;

    use formula::language::Variables;
    use formula::parsing;

    fn variables() -> Variables {
        let file = Path::new("tests/samples/variables.def");

        assert!(file.exists(), "sample variables missing");

        let content = parsing::load(file)
            .unwrap_or_else(|e| panic!("Failed to load file {:?}: {:?}", file, e));

        parsing::parse_definitions(&content)
            .unwrap_or_else(|e| panic!("Failed to read definitions {:?}: {:?}", file, e))
    }

    fn lines(filename: &str) -> Vec<String> {
        let file = Path::new(filename);

        let content = parsing::load(file)
            .unwrap_or_else(|e| panic!("Failed to load file {:?}: {:?}", file, e));

        let lines: Vec<String> = content
            .lines()
            .filter(|line| !line.is_empty())
            .map(|line| line.to_string())
            .collect();

        assert!(!lines.is_empty(), "No expressions found in {:?}", file);
        lines
    }

    #[test]
    fn ensure_samples_parse() {
        let variables = variables();
        let mut failures = Vec::new();

        for line in lines("tests/samples/formulas.txt") {
            if let Err(e) = parsing::parse_function(&line, &variables, false) {
                println!("Formula {:?} failed to parse: {:?}", line, e);
                failures.push(line.clone());
            }
        }

        for line in lines("tests/samples/decisions.txt") {
            if let Err(e) = parsing::parse_decision(&line, &variables) {
                println!("Decision {:?} failed to parse: {:?}", line, e);
                failures.push(line.clone());
            }
        }

        if !failures.is_empty() {
            panic!(
                "Sample expressions should parse successfully, but {} failed",
                failures.len()
            );
        }
    }

    #[test]
    fn ensure_broken_fail() {
        let variables = variables();
        let mut unexpected_successes = Vec::new();

        for line in lines("tests/broken/formulas.txt") {
            if let Ok(function) = parsing::parse_function(&line, &variables, false) {
                println!("Formula {:?} unexpectedly parsed as {:?}", line, function);
                unexpected_successes.push(line.clone());
            }
        }

        for line in lines("tests/broken/decisions.txt") {
            if let Ok(decision) = parsing::parse_decision(&line, &variables) {
                println!("Decision {:?} unexpectedly parsed as {:?}", line, decision);
                unexpected_successes.push(line.clone());
            }
        }

        if !unexpected_successes.is_empty() {
            panic!(
                "Broken expressions should fail to parse, but {} succeeded",
                unexpected_successes.len()
            );
        }
    }
}
