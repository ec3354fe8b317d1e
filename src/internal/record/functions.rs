pub mod normalize_path;
pub mod parse_timestamp;
