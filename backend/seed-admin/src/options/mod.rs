pub mod arg_parser;
pub mod seed_options;
