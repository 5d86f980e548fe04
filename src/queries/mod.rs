//! Read-only traversal helpers over the entity relationships.
//!
//! All helpers return rows ordered by ascending id; the store's default
//! iteration order is never relied upon. Distinct-set traversals collect
//! foreign keys first and materialize the target rows in a single query.

mod assignment;
mod course;
mod faculty;
mod program;
mod student;
