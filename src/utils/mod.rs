pub mod date_parse;
