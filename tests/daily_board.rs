#[cfg(test)]
mod tests {
    use chrono::{Duration, Local};
    use horizons::db::boards::Boards;
    use horizons::db::tasks::Tasks;
    use horizons::libs::board::Timeframe;
    use horizons::libs::daily;
    use horizons::libs::task::{Task, TaskFilter};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct DailyBoardTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for DailyBoardTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            DailyBoardTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(DailyBoardTestContext)]
    #[test]
    fn test_today_view_through_storage(_ctx: &mut DailyBoardTestContext) {
        let today = Local::now().date_naive();
        let mut boards = Boards::new().unwrap();
        let board = boards.ensure(Timeframe::Daily, today).unwrap();
        let mut tasks = Tasks::new().unwrap();

        tasks.create(&Task::new(board.id, "backlog", 0, Some(today - Duration::days(1)))).unwrap();
        tasks.create(&Task::new(board.id, "for today", 1, Some(today))).unwrap();
        tasks.create(&Task::new(board.id, "for tomorrow", 2, Some(today + Duration::days(1)))).unwrap();
        tasks.create(&Task::new(board.id, "legacy", 3, None)).unwrap();

        let collection = tasks.fetch(TaskFilter::Board(board.id)).unwrap();
        let visible = daily::visible_tasks(&collection, today, today);

        let texts: Vec<&str> = visible.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["backlog", "for today", "legacy"]);
    }

    #[test_context(DailyBoardTestContext)]
    #[test]
    fn test_future_view_through_storage(_ctx: &mut DailyBoardTestContext) {
        let today = Local::now().date_naive();
        let viewing = today + Duration::days(2);
        let mut boards = Boards::new().unwrap();
        let board = boards.ensure(Timeframe::Daily, today).unwrap();
        let mut tasks = Tasks::new().unwrap();

        tasks.create(&Task::new(board.id, "planned", 0, Some(viewing))).unwrap();
        tasks.create(&Task::new(board.id, "legacy", 1, None)).unwrap();

        let collection = tasks.fetch(TaskFilter::Board(board.id)).unwrap();
        let visible = daily::visible_tasks(&collection, viewing, today);

        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].text, "planned");
    }

    #[test_context(DailyBoardTestContext)]
    #[test]
    fn test_past_view_through_storage(_ctx: &mut DailyBoardTestContext) {
        let today = Local::now().date_naive();
        let viewing = today - Duration::days(1);
        let mut boards = Boards::new().unwrap();
        let board = boards.ensure(Timeframe::Daily, today).unwrap();
        let mut tasks = Tasks::new().unwrap();

        let mut done_then = Task::new(board.id, "done on viewed day", 0, Some(viewing));
        done_then.toggle_completion(viewing.and_hms_opt(9, 15, 0).unwrap());
        tasks.create(&done_then).unwrap();

        let mut done_today = Task::new(board.id, "done today", 1, Some(viewing));
        done_today.toggle_completion(today.and_hms_opt(9, 15, 0).unwrap());
        tasks.create(&done_today).unwrap();

        tasks.create(&Task::new(board.id, "still open", 2, Some(viewing))).unwrap();

        let collection = tasks.fetch(TaskFilter::Board(board.id)).unwrap();
        let visible = daily::visible_tasks(&collection, viewing, today);

        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].text, "done on viewed day");
    }

    #[test_context(DailyBoardTestContext)]
    #[test]
    fn test_non_daily_tasks_carry_no_target_date(_ctx: &mut DailyBoardTestContext) {
        let today = Local::now().date_naive();
        let mut boards = Boards::new().unwrap();
        let board = boards.ensure(Timeframe::Yearly, today).unwrap();
        let mut tasks = Tasks::new().unwrap();

        let target = Timeframe::Yearly.requires_schedule().then_some(today);
        tasks.create(&Task::new(board.id, "learn woodworking", 0, target)).unwrap();

        let stored = tasks.fetch(TaskFilter::Board(board.id)).unwrap();
        assert_eq!(stored[0].target_date, None);
    }
}
