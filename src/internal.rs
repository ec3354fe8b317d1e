pub mod record;
pub mod webdav;
