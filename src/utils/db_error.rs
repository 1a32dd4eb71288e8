/// Primary key constraint of the `links` table.
pub const LINKS_PRIMARY_KEY: &str = "links_pkey";

pub fn is_unique_violation_on_short(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    matches!(db_err.constraint(), Some(LINKS_PRIMARY_KEY) | None)
}
