pub mod assignment;
pub mod content;
pub mod course;
pub mod faculty;
pub mod program;
pub mod student;
pub mod student_assignment;

use sea_orm::entity::prelude::*;

/// Base-record columns every table in the schema carries.
pub trait Record {
    fn id(&self) -> i32;
    fn created_at(&self) -> DateTimeUtc;
    fn updated_at(&self) -> DateTimeUtc;
}

macro_rules! impl_record {
    ($($entity:ident),* $(,)?) => {
        $(
            impl Record for $entity::Model {
                fn id(&self) -> i32 {
                    self.id
                }
                fn created_at(&self) -> DateTimeUtc {
                    self.created_at
                }
                fn updated_at(&self) -> DateTimeUtc {
                    self.updated_at
                }
            }
        )*
    };
}

impl_record!(
    assignment,
    content,
    course,
    faculty,
    program,
    student,
    student_assignment,
);
