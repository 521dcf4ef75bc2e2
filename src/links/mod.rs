mod error;
mod link_map;
mod normalize;
mod types;

pub use link_map::{LINK_MAP_JSON, load_groups};
pub use types::{GroupEntries, LinkGroup, LinkItem, Section};
