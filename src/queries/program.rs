use sea_orm::*;

use crate::entity::{assignment, program, student};
use crate::error::SchemaError;

impl program::Model {
    /// Students enrolled in this program.
    pub async fn students<C: ConnectionTrait>(
        &self,
        db: &C,
    ) -> Result<Vec<student::Model>, SchemaError> {
        Ok(student::Entity::find()
            .filter(student::Column::ProgramId.eq(self.id))
            .order_by_asc(student::Column::Id)
            .all(db)
            .await?)
    }

    /// Assignments handed out in this program.
    pub async fn assignments<C: ConnectionTrait>(
        &self,
        db: &C,
    ) -> Result<Vec<assignment::Model>, SchemaError> {
        Ok(assignment::Entity::find()
            .filter(assignment::Column::ProgramId.eq(self.id))
            .order_by_asc(assignment::Column::Id)
            .all(db)
            .await?)
    }
}
