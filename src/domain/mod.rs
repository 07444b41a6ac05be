//! Domain types - tags, release intervals and the items bucketed into them

pub mod item;
pub mod tag;

pub use item::{Item, Label, LineLabels, Milestone, User};
pub use tag::{build_section_mapping, sort_tags_newest_first, SectionTag, Tag, TagFilter, TagInterval};
