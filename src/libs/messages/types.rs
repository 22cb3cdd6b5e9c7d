#[derive(Debug, Clone)]
pub enum Message {
    // === STUDENT MESSAGES ===
    StudentAdded(String),
    StudentRemoved(String),
    StudentIdExists(String),
    StudentNotFound(String),
    InvalidStudentInput(String),
    RosterEmpty,
    NoStudentsMatchFilter,
    NoClassesRegistered,
    ConfirmRemoveStudent(String),
    RemovalCancelled,
    PromptStudentId,
    PromptStudentName,
    PromptStudentClass,
    PromptStudentEmail,

    // === ATTENDANCE MESSAGES ===
    Marked { name: String, status: String },
    MarkedAllPresent(usize),
    RegisterHeader(String),

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    PromptStorageDir,
    PromptSeedRoster,

    // === EXPORT MESSAGES ===
    ExportingData(String, String), // data type, format
    ExportCompleted(String),       // output path
    SnapshotJsonOnly,

    // === ERROR MESSAGES ===
    PersistFailed(String),
    InvalidDate(String),
}
