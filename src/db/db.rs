use crate::db::migrations;
use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use rusqlite::Connection;

pub const DB_FILE_NAME: &str = "horizons.db";

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the application database and brings the schema up to date.
    pub fn new() -> Result<Db> {
        let db_file_path = DataStorage::new().get_path(DB_FILE_NAME)?;
        let mut conn = Connection::open(db_file_path)?;
        migrations::init_with_migrations(&mut conn)?;

        Ok(Db { conn })
    }

    /// Opens a raw connection without applying migrations.
    ///
    /// Used by the migration inspection command, which must be able to
    /// report the schema version of a database as-is.
    #[cfg(debug_assertions)]
    pub fn new_without_migrations() -> Result<Connection> {
        let db_file_path = DataStorage::new().get_path(DB_FILE_NAME)?;
        Ok(Connection::open(db_file_path)?)
    }
}
