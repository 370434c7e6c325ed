//! MARC metadata handling

pub mod xml;

pub use xml::author_from_marc_xml;
