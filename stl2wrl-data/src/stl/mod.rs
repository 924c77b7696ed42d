//! ASCII STL loading and parsing

mod loader;
mod parser;

pub use loader::{parse_into, parse_stl, parse_stl_str};
pub use parser::StlParser;
