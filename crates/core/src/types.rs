/// All database primary keys are UUIDs, generated by the store.
pub type DbId = uuid::Uuid;
