pub mod parse_multi_status;
