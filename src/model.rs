//! Entity types persisted by the data-access layer
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A student record as stored in the `students` table.
///
/// Plain data holder: the table layer builds a fresh value from each row it
/// reads and never retains the values it is given to write. The name
/// columns are nullable in the schema, and `birthday` is a true optional —
/// an absent birthday is stored as SQL `NULL`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: i32,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub birthday: Option<NaiveDate>,
}

impl Student {
    pub fn new(
        id: i32,
        first_name: Option<String>,
        last_name: Option<String>,
        birthday: Option<NaiveDate>,
    ) -> Self {
        Self {
            id,
            first_name,
            last_name,
            birthday,
        }
    }
}
