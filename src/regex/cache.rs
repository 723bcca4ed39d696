// Compile a pattern once and keep it for the life of the program.
macro_rules! regex {
    ($pattern:expr) => {{
        use std::sync::OnceLock;
        static REGEX: OnceLock<::regex::Regex> = OnceLock::new();
        REGEX.get_or_init(|| ::regex::Regex::new($pattern).unwrap_or_else(|e| panic!("{}", e)))
    }};
}

pub(crate) use regex;
