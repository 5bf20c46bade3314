pub mod ident;
pub mod line_parser;
pub mod line_serializer;

pub use ident::{IdToken, canonical_token, extract_id, generate_id};
pub use line_parser::{ParsedLine, is_task_line, parse_free_text, parse_line, split_checkbox};
pub use line_serializer::serialize_line;
