//! Database model types for Diesel ORM.

use diesel::prelude::*;

use super::schema::persons;
use crate::domain::Record;

/// Database row for a person (queryable).
#[derive(Queryable, Selectable, Debug, Clone, PartialEq, Eq)]
#[diesel(table_name = persons)]
pub struct PersonRow {
    pub id: i32,
    pub name: String,
}

/// Database row for a person (insertable). The identity is store-assigned.
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = persons)]
pub struct NewPersonRow<'a> {
    pub name: &'a str,
}

impl From<PersonRow> for Record {
    fn from(row: PersonRow) -> Self {
        Record::Person {
            id: i64::from(row.id),
            name: row.name,
        }
    }
}
