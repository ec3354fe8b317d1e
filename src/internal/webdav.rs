pub mod functions;
pub mod raw_xml;
