//! XML utilities for e-Gov law documents.

mod utils;

pub use utils::{collect_text, descendants_with_tag, first_descendant, get_attribute, get_tag_name, has_tag};
