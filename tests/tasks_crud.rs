#[cfg(test)]
mod tests {
    use chrono::{Local, NaiveDate};
    use horizons::db::boards::Boards;
    use horizons::db::tasks::Tasks;
    use horizons::libs::board::Timeframe;
    use horizons::libs::task::{Task, TaskFilter};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct TaskTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for TaskTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            TaskTestContext { _temp_dir: temp_dir }
        }
    }

    fn daily_board_id() -> i64 {
        let today = Local::now().date_naive();
        Boards::new().unwrap().ensure(Timeframe::Daily, today).unwrap().id
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_task_create_and_fetch(_ctx: &mut TaskTestContext) {
        let board_id = daily_board_id();
        let mut tasks = Tasks::new().unwrap();

        let target = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        let id = tasks.create(&Task::new(board_id, "Water the plants", 0, Some(target))).unwrap();

        let fetched = tasks.get_by_id(id).unwrap().unwrap();
        assert_eq!(fetched.text, "Water the plants");
        assert_eq!(fetched.target_date, Some(target));
        assert!(!fetched.completed);
        assert!(fetched.completed_at.is_none());
        assert!(fetched.created_at.is_some());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_task_update(_ctx: &mut TaskTestContext) {
        let board_id = daily_board_id();
        let mut tasks = Tasks::new().unwrap();

        let id = tasks.create(&Task::new(board_id, "Original text", 0, None)).unwrap();
        let mut task = tasks.get_by_id(id).unwrap().unwrap();

        task.text = "Updated text".to_string();
        task.toggle_completion(Local::now().naive_local());
        tasks.update(&task).unwrap();

        let updated = tasks.get_by_id(id).unwrap().unwrap();
        assert_eq!(updated.text, "Updated text");
        assert!(updated.completed);
        assert!(updated.completed_at.is_some());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_toggle_back_clears_completed_at(_ctx: &mut TaskTestContext) {
        let board_id = daily_board_id();
        let mut tasks = Tasks::new().unwrap();

        let id = tasks.create(&Task::new(board_id, "Toggle twice", 0, None)).unwrap();
        let mut task = tasks.get_by_id(id).unwrap().unwrap();

        task.toggle_completion(Local::now().naive_local());
        tasks.update(&task).unwrap();
        task.toggle_completion(Local::now().naive_local());
        tasks.update(&task).unwrap();

        let stored = tasks.get_by_id(id).unwrap().unwrap();
        assert!(!stored.completed);
        assert!(stored.completed_at.is_none());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_task_delete(_ctx: &mut TaskTestContext) {
        let board_id = daily_board_id();
        let mut tasks = Tasks::new().unwrap();

        let id = tasks.create(&Task::new(board_id, "Delete me", 0, None)).unwrap();
        let deleted = tasks.delete(id).unwrap();
        assert_eq!(deleted, 1);

        assert!(tasks.get_by_id(id).unwrap().is_none());
        assert_eq!(tasks.fetch(TaskFilter::Board(board_id)).unwrap().len(), 0);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_fetch_by_ids(_ctx: &mut TaskTestContext) {
        let board_id = daily_board_id();
        let mut tasks = Tasks::new().unwrap();

        let mut ids = Vec::new();
        for i in 1..=5 {
            ids.push(tasks.create(&Task::new(board_id, &format!("Task {}", i), i, None)).unwrap());
        }

        let subset = tasks.fetch(TaskFilter::ByIds(ids[..3].to_vec())).unwrap();
        assert_eq!(subset.len(), 3);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_move_task_renumbers_contiguously(_ctx: &mut TaskTestContext) {
        let board_id = daily_board_id();
        let mut tasks = Tasks::new().unwrap();

        let _first = tasks.create(&Task::new(board_id, "first", 0, None)).unwrap();
        let _second = tasks.create(&Task::new(board_id, "second", 1, None)).unwrap();
        let third = tasks.create(&Task::new(board_id, "third", 2, None)).unwrap();

        // Move the last task to the top
        tasks.move_task(board_id, third, 0).unwrap();

        let ordered = tasks.fetch(TaskFilter::Board(board_id)).unwrap();
        let texts: Vec<&str> = ordered.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["third", "first", "second"]);

        let positions: Vec<i64> = ordered.iter().map(|t| t.position).collect();
        assert_eq!(positions, vec![0, 1, 2]);

        // Unknown task IDs are an error
        assert!(tasks.move_task(board_id, 9999, 0).is_err());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_count_for_board(_ctx: &mut TaskTestContext) {
        let board_id = daily_board_id();
        let mut tasks = Tasks::new().unwrap();

        assert_eq!(tasks.count_for_board(board_id).unwrap(), 0);
        tasks.create(&Task::new(board_id, "one", 0, None)).unwrap();
        tasks.create(&Task::new(board_id, "two", 1, None)).unwrap();
        assert_eq!(tasks.count_for_board(board_id).unwrap(), 2);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_replace_for_board_preserves_imported_timestamps(_ctx: &mut TaskTestContext) {
        let board_id = daily_board_id();
        let mut tasks = Tasks::new().unwrap();

        tasks.create(&Task::new(board_id, "local only", 0, None)).unwrap();

        let imported = Task {
            id: None,
            board_id,
            text: "from the cloud".to_string(),
            completed: true,
            position: 0,
            created_at: NaiveDate::from_ymd_opt(2023, 12, 1).unwrap().and_hms_opt(8, 0, 0),
            completed_at: NaiveDate::from_ymd_opt(2023, 12, 2).unwrap().and_hms_opt(18, 30, 0),
            target_date: NaiveDate::from_ymd_opt(2023, 12, 2),
        };
        tasks.replace_for_board(board_id, &[imported.clone()]).unwrap();

        let stored = tasks.fetch(TaskFilter::Board(board_id)).unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].text, "from the cloud");
        assert_eq!(stored[0].created_at, imported.created_at);
        assert_eq!(stored[0].completed_at, imported.completed_at);
        assert_eq!(stored[0].target_date, imported.target_date);
    }
}
