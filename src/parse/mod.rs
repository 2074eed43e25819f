pub mod legacy;
pub mod list_parser;
pub mod list_serializer;

pub use list_parser::{ParseError, ParseWarning, parse_list};
pub use list_serializer::serialize_list;
