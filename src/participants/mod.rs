pub mod resolver;

pub use resolver::{Resolution, normalize_name, resolve, resolve_match, resolve_matches};
