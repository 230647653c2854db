/// Person identifiers are caller-supplied PostgreSQL `INTEGER` keys.
pub type DbId = i32;
