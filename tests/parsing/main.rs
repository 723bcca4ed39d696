mod decision;
mod parser;
mod samples;
