#[derive(Debug, Clone)]
pub enum Message {
    // === USER MESSAGES ===
    UserCreated(String),
    UserAlreadyExists(String),
    UserNotFound(String),
    NoUsersFound,
    NoActiveUser,
    ActiveUserSet(String),
    UserListHeader,

    // === CLIENT MESSAGES ===
    ClientCreated(String),
    ClientUpdated(String),
    ClientDeleted(String),
    ClientNotFound(String),
    NoClientsFound,
    ClientListHeader,

    // === PROJECT MESSAGES ===
    ProjectCreated(String),
    ProjectUpdated(String),
    ProjectDeleted(String),
    ProjectNotFound(String),
    NoProjectsFound,
    ProjectListHeader,

    // === TAG MESSAGES ===
    TagCreated(String),
    TagUpdated(String),
    TagDeleted(String),
    TagNotFound(String),
    TagAlreadyExists(String),
    NoTagsFound,
    TagListHeader,

    // === TIMER MESSAGES ===
    TimerStarted(String),       // description or "(no description)"
    TimerStopped(String),       // formatted duration
    TimerCreated(i64),          // id
    TimerUpdated(i64),          // id
    TimerDeleted(i64),          // id
    TimerDuplicated(i64),       // new id
    TimerNotFound(i64),         // id
    TimerAlreadyRunning(i64),   // id of the running timer
    NoRunningTimer,
    RunningTimerHeader,
    NoTimersFound,
    TimerListHeader,
    WeeklyHeader,
    ConfirmDeleteTimer(i64),

    // === REPORT MESSAGES ===
    ReportHeader(String), // formatted date range
    NoTimersForReport,
    ReportFilterSaved(String),   // filter name
    ReportFilterDeleted(String), // filter name
    ReportFilterNotFound(String),
    NoSavedFilters,
    SavedFiltersHeader,
    InvalidDateRange(String, String), // from, to

    // === EXPORT MESSAGES ===
    ExportingReport(String), // format
    ExportCompleted(String), // path

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigFileNotFound,
    ConfigParseError,
    PromptUserName,
    PromptUserEmail,
    PromptDefaultRate,
}
