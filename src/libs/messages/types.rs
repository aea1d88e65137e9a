#[derive(Debug, Clone)]
pub enum Message {
    // === BOARD MESSAGES ===
    BoardsInitialized,
    BoardNotFound(String),
    BoardDateChanged(String, String), // timeframe, date
    BoardEmpty,
    NavigationNeedsTimeframe,
    UnknownTimeframe(String),

    // === TASK MESSAGES ===
    TaskCreated,
    TaskUpdated,
    TaskDeleted,
    TaskMoved(i64, i64), // id, position
    TaskNotFoundWithId(i64),
    NoTasksOnBoard(String), // timeframe
    NoChangesDetected,
    ConfirmDeleteTask,
    PromptTaskText,

    // === ROLLOVER MESSAGES ===
    RolloverCompleted(String),  // date
    RolloverNothingToDo,
    RolloverAlreadyRan(String), // date
    RolloverFailed(String),     // error

    // === SCHEDULER MESSAGES ===
    SchedulerStarted(String), // next fire time
    SchedulerStopped,
    WatchStarting,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigParseError,
    ConfigModuleCloud,
    PromptSelectModules,
    PromptCloudApiUrl,
    PromptCloudLogin,
    PromptCloudPassword,

    // === SYNC MESSAGES ===
    SyncPushed(usize), // board count
    SyncPulled(usize), // board count
    SyncCompleted,
    SyncFailed(String),   // status
    CloudConfigNotFound,

    // === AUTHENTICATION MESSAGES ===
    LoggedIn,
    LoggedOut,
    NotLoggedIn,
    WrongPassword(i32), // attempt count
    LoginFailed,
    SessionExpired,

    // === EXPORT MESSAGES ===
    ExportingData(String), // format
    ExportCompleted(String), // path
    ExportFailed(String),    // error

    // === DATABASE MESSAGES ===
    DbConnectionFailed,
    NoIdSet,

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),        // count
    RunningMigration(u32, String), // version, name
    MigrationCompleted(u32),       // version
    MigrationFailed(u32, String),  // version, error
    AllMigrationsCompleted,
    DatabaseVersion(u32),
    DatabaseUpToDate,
    DatabaseNeedsUpdate,
    MigrationHistory,
    NothingToRollback,
    RollingBack(u32, u32),  // from, to
    RollbackCompleted(u32), // version

    // === GENERAL MESSAGES ===
    OperationCancelled,
    InvalidDate(String),
}
