use clap::{Arg, ArgAction, ArgMatches, Command};
use std::io::IsTerminal;
use std::path::Path;
use tracing::{debug, Level};

use formula::formatting::{self, Identity};
use formula::language::{Decision, Function, Variables};
use formula::parsing::{self, ParsingError};
use formula::rendering::Terminal;

mod problem;

/// Either kind of tree, depending on whether --decision was given.
#[derive(Debug, serde::Serialize)]
enum Parsed {
    Function(Function),
    Decision(Decision),
}

fn main() {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    let variables_arg = Arg::new("variables")
        .long("variables")
        .value_name("FILE")
        .help("Read the variables the expression may refer to from this file.");

    let decision_arg = Arg::new("decision")
        .long("decision")
        .action(ArgAction::SetTrue)
        .help("Parse the expression as a boolean condition rather than a formula.");

    let placeholder_arg = Arg::new("placeholder")
        .long("placeholder")
        .action(ArgAction::SetTrue)
        .help("Accept '?' as a placeholder for a value yet to be entered.");

    let expression_arg = Arg::new("expression")
        .required(true)
        .help("The formula to parse. Quote it so the shell passes it as one argument.");

    let matches = Command::new("formula")
        .version(VERSION)
        .propagate_version(true)
        .author("Andrew Cowie")
        .about("Parse algebraic formulas and boolean conditions.")
        .disable_help_subcommand(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log what the parser is doing to standard error."),
        )
        .subcommand(
            Command::new("check")
                .about("Check that the given expression parses")
                .arg(variables_arg.clone())
                .arg(decision_arg.clone())
                .arg(placeholder_arg.clone())
                .arg(expression_arg.clone()),
        )
        .subcommand(
            Command::new("format")
                .about("Print the given expression in canonical form")
                .arg(
                    Arg::new("raw-control-chars")
                        .short('R')
                        .long("raw-control-chars")
                        .action(ArgAction::SetTrue)
                        .help("Emit ANSI escape codes for syntax highlighting even if output is redirected to a pipe or file."),
                )
                .arg(variables_arg.clone())
                .arg(decision_arg.clone())
                .arg(placeholder_arg.clone())
                .arg(expression_arg.clone()),
        )
        .subcommand(
            Command::new("tree")
                .about("Show the tree the given expression parses to")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Output the tree as JSON."),
                )
                .arg(variables_arg)
                .arg(decision_arg)
                .arg(placeholder_arg)
                .arg(expression_arg),
        )
        .subcommand(
            Command::new("validate")
                .about("Check whether names are acceptable for new variables")
                .arg(
                    Arg::new("discrete")
                        .long("discrete")
                        .action(ArgAction::SetTrue)
                        .help("Validate the names as values of a discrete variable instead."),
                )
                .arg(
                    Arg::new("names")
                        .required(true)
                        .num_args(1..)
                        .help("The names to validate."),
                ),
        )
        .get_matches();

    let level = if matches.get_flag("verbose") {
        Level::DEBUG
    } else {
        Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match matches.subcommand() {
        Some(("check", submatches)) => {
            let expression = expression(submatches);
            let variables = variables(submatches);

            match parse(expression, &variables, submatches) {
                Ok(_) => debug!("Ok"),
                Err(error) => {
                    eprintln!(
                        "{}",
                        problem::full_parsing_error(&error, expression, &Terminal)
                    );
                    std::process::exit(1);
                }
            }
        }
        Some(("format", submatches)) => {
            let expression = expression(submatches);
            let variables = variables(submatches);

            let parsed = match parse(expression, &variables, submatches) {
                Ok(parsed) => parsed,
                Err(error) => {
                    eprintln!(
                        "{}",
                        problem::concise_parsing_error(&error, expression, &Terminal)
                    );
                    std::process::exit(1);
                }
            };

            let fragments = match &parsed {
                Parsed::Function(function) => formatting::format_function(function, &variables),
                Parsed::Decision(decision) => formatting::format_decision(decision, &variables),
            };

            let raw = submatches.get_flag("raw-control-chars");
            let result = if raw
                || std::io::stdout()
                    .is_terminal()
            {
                formatting::render(&Terminal, fragments)
            } else {
                formatting::render(&Identity, fragments)
            };

            println!("{}", result);
        }
        Some(("tree", submatches)) => {
            let expression = expression(submatches);
            let variables = variables(submatches);

            let parsed = match parse(expression, &variables, submatches) {
                Ok(parsed) => parsed,
                Err(error) => {
                    eprintln!(
                        "{}",
                        problem::concise_parsing_error(&error, expression, &Terminal)
                    );
                    std::process::exit(1);
                }
            };

            if submatches.get_flag("json") {
                match serde_json::to_string_pretty(&parsed) {
                    Ok(json) => println!("{}", json),
                    Err(error) => {
                        eprintln!("Unable to serialize tree: {}", error);
                        std::process::exit(1);
                    }
                }
            } else {
                println!("{:#?}", parsed);
            }
        }
        Some(("validate", submatches)) => {
            let discrete = submatches.get_flag("discrete");
            let mut failed = false;

            for name in submatches
                .get_many::<String>("names")
                .into_iter()
                .flatten()
            {
                if discrete {
                    if let Err(error) = parsing::validate_discrete_value(name) {
                        eprintln!("{}", problem::concise_value_error(name, &error));
                        failed = true;
                    }
                } else if let Err(error) = parsing::validate_name(name) {
                    eprintln!("{}", problem::concise_name_error(&error));
                    failed = true;
                }
            }

            if failed {
                std::process::exit(1);
            }
        }
        Some(_) => {
            println!("No valid subcommand was used")
        }
        None => {
            println!("usage: formula [COMMAND] ...");
            println!("Try '--help' for more information.");
        }
    }
}

fn expression(submatches: &ArgMatches) -> &str {
    submatches
        .get_one::<String>("expression")
        .map(|expression| expression.as_str())
        .unwrap_or("")
}

/// Load the variable definitions named on the command line, if any. Exits
/// the program if they cannot be read.
fn variables(submatches: &ArgMatches) -> Variables {
    let filename = match submatches.get_one::<String>("variables") {
        Some(filename) => Path::new(filename),
        None => return Variables::new(),
    };

    let content = match parsing::load(filename) {
        Ok(content) => content,
        Err(error) => {
            eprintln!("{}", problem::concise_loading_error(&error));
            std::process::exit(1);
        }
    };

    match parsing::parse_definitions(&content) {
        Ok(variables) => {
            debug!("Loaded {} variables from {:?}", variables.len(), filename);
            variables
        }
        Err(error) => {
            eprintln!("{}", problem::concise_definition_error(&error, filename));
            std::process::exit(1);
        }
    }
}

fn parse<'i>(
    expression: &'i str,
    variables: &Variables,
    submatches: &ArgMatches,
) -> Result<Parsed, ParsingError<'i>> {
    if submatches.get_flag("decision") {
        parsing::parse_decision(expression, variables).map(Parsed::Decision)
    } else {
        let allow_placeholder = submatches.get_flag("placeholder");
        parsing::parse_function(expression, variables, allow_placeholder).map(Parsed::Function)
    }
}
