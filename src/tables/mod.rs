/// Data-Access Tables Module
///
/// This module holds the generic table contract and the per-entity
/// data-access objects that implement it. Each table borrows one open
/// connection and turns CRUD calls into single prepared statements.
///
/// ## Error Handling
///
/// The contract deliberately reports failure through two shapes. Schema
/// changes and inserts return a plain `bool`: those fail in the normal
/// course of things (table already there, duplicate key) and the caller is
/// expected to inspect the flag. Lookups, deletes, and updates return a
/// `Result`: a failure there means something is wrong with the database
/// itself and propagates as [`crate::core::RosterError`].
pub mod students;

pub use students::StudentsTable;

use crate::core::Result;

/// Contract implemented by a data-access table for one entity type.
pub trait Table {
    /// The entity the table persists.
    type Entity;
    /// The primary-key type addressing a single row.
    type Key;

    /// Name of the backing table in the database.
    fn table_name(&self) -> &str;

    /// Creates the backing table. Returns `false`, swallowing the database
    /// error, if the table already exists or creation fails.
    fn create_table(&self) -> bool;

    /// Drops the backing table. Returns `false` if the table does not exist
    /// or the drop fails.
    fn drop_table(&self) -> bool;

    /// Looks up a single entity by primary key.
    fn find_by_primary_key(&self, key: Self::Key) -> Result<Option<Self::Entity>>;

    /// Returns all entities, preserving result-set order.
    fn find_all(&self) -> Result<Vec<Self::Entity>>;

    /// Inserts a new entity. Returns `false`, swallowing the database
    /// error, if the insert fails (e.g. duplicate primary key).
    fn save(&self, entity: &Self::Entity) -> bool;

    /// Deletes the row addressed by `key`. `Ok(true)` iff a row was removed.
    fn delete(&self, key: Self::Key) -> Result<bool>;

    /// Updates the row addressed by the entity's primary key. `Ok(true)` iff
    /// a row was modified.
    fn update(&self, entity: &Self::Entity) -> Result<bool>;
}
