pub mod webdav_record;
