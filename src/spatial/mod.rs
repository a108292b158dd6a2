pub mod collision;

pub use collision::{any_overlap, first_overlap, overlapping, remove_overlapping};
