#[cfg(test)]
mod tests {
    use horizons::db::db::Db;
    use horizons::db::migrations::{get_db_version, needs_migration, MigrationManager};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct MigrationTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for MigrationTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            MigrationTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migrations_run_automatically(_ctx: &mut MigrationTestContext) {
        // Opening the database applies every pending migration
        let db = Db::new().unwrap();

        let version = get_db_version(&db.conn).unwrap();
        assert!(version > 0);

        assert!(!needs_migration(&db.conn).unwrap());
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migration_history_is_ordered(_ctx: &mut MigrationTestContext) {
        let db = Db::new().unwrap();
        let manager = MigrationManager::new();

        let history = manager.get_migration_history(&db.conn).unwrap();
        assert!(!history.is_empty());

        let versions: Vec<u32> = history.iter().map(|(version, _, _)| *version).collect();
        let mut sorted = versions.clone();
        sorted.sort();
        assert_eq!(versions, sorted);
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_target_date_migration_applied(_ctx: &mut MigrationTestContext) {
        let db = Db::new().unwrap();
        let manager = MigrationManager::new();

        assert!(manager.is_migration_applied(&db.conn, 3).unwrap());

        // The column exists and accepts NULL for legacy rows
        db.conn
            .execute(
                "INSERT INTO boards (timeframe, view_date) VALUES ('daily', '2024-01-03')",
                [],
            )
            .unwrap();
        db.conn
            .execute(
                "INSERT INTO tasks (board_id, text, completed, position, target_date) VALUES (1, 'legacy', 0, 0, NULL)",
                [],
            )
            .unwrap();

        let target: Option<String> = db
            .conn
            .query_row("SELECT target_date FROM tasks WHERE text = 'legacy'", [], |row| row.get(0))
            .unwrap();
        assert!(target.is_none());
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_reopening_is_a_noop(_ctx: &mut MigrationTestContext) {
        let first = Db::new().unwrap();
        let version_before = get_db_version(&first.conn).unwrap();
        drop(first);

        let second = Db::new().unwrap();
        assert_eq!(get_db_version(&second.conn).unwrap(), version_before);
    }
}
