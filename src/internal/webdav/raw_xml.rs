pub mod impl_to_record;
pub mod raw_entry;
