pub mod param_parser;
