//! Table definitions for the single-file store.
//!
//! Every statement is idempotent (`IF NOT EXISTS`) so the whole schema can be
//! applied on each startup. Foreign keys are declared for documentation but the
//! pool opens connections with enforcement off.

/// Catalog tables: subjects and the chapters that belong to them
pub const CATALOG_SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS subjects (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    icon TEXT NOT NULL,
    color TEXT NOT NULL,
    totalChapters INTEGER NOT NULL,
    progress INTEGER NOT NULL
);

CREATE TABLE IF NOT EXISTS chapters (
    id TEXT PRIMARY KEY,
    subjectId TEXT NOT NULL,
    title TEXT NOT NULL,
    description TEXT NOT NULL,
    thumbnail TEXT,
    isCompleted BOOLEAN DEFAULT 0,
    notes TEXT,
    videoUrl TEXT,
    FOREIGN KEY (subjectId) REFERENCES subjects(id)
);

CREATE INDEX IF NOT EXISTS idx_chapters_subject ON chapters(subjectId);
"#;

/// Quizzes keep their question list as a JSON-encoded TEXT column
pub const QUIZZES_SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS quizzes (
    id TEXT PRIMARY KEY,
    subjectId TEXT NOT NULL,
    title TEXT NOT NULL,
    level TEXT NOT NULL,
    questions TEXT NOT NULL,
    FOREIGN KEY (subjectId) REFERENCES subjects(id)
);
"#;

/// Timetable, users and the aggregate progress snapshot
pub const STUDY_SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS timetable (
    id TEXT PRIMARY KEY,
    title TEXT NOT NULL,
    day TEXT NOT NULL,
    time TEXT NOT NULL,
    type TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT,
    language TEXT,
    grade TEXT
);

CREATE TABLE IF NOT EXISTS progress_stats (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    totalHours REAL,
    lessonsCompleted INTEGER,
    quizzesTaken INTEGER,
    averageScore INTEGER,
    streakDays INTEGER
);
"#;

/// Projects and their sub-resources
pub const PROJECTS_SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS projects (
    id TEXT PRIMARY KEY,
    title TEXT NOT NULL,
    description TEXT NOT NULL,
    goal TEXT,
    status TEXT DEFAULT 'Open',
    budget_needed REAL,
    professor_id INTEGER,
    creator_id INTEGER NOT NULL,
    created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
    FOREIGN KEY (creator_id) REFERENCES users(id)
);

CREATE TABLE IF NOT EXISTS project_members (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    project_id TEXT NOT NULL,
    user_id INTEGER NOT NULL,
    role TEXT,
    status TEXT DEFAULT 'pending',
    FOREIGN KEY (project_id) REFERENCES projects(id),
    FOREIGN KEY (user_id) REFERENCES users(id)
);

-- Membership lookups by project and by (project, user) for join requests
CREATE INDEX IF NOT EXISTS idx_members_project_user ON project_members(project_id, user_id);
CREATE INDEX IF NOT EXISTS idx_members_user ON project_members(user_id);

CREATE TABLE IF NOT EXISTS project_tasks (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    project_id TEXT NOT NULL,
    title TEXT NOT NULL,
    assigned_to INTEGER,
    deadline DATE,
    status TEXT DEFAULT 'Pending',
    FOREIGN KEY (project_id) REFERENCES projects(id),
    FOREIGN KEY (assigned_to) REFERENCES users(id)
);

CREATE TABLE IF NOT EXISTS budget_requests (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    project_id TEXT NOT NULL,
    title TEXT NOT NULL,
    amount REAL NOT NULL,
    reason TEXT,
    status TEXT DEFAULT 'Pending',
    professor_note TEXT,
    created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
    FOREIGN KEY (project_id) REFERENCES projects(id)
);

CREATE TABLE IF NOT EXISTS discussion_posts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    project_id TEXT NOT NULL,
    user_id INTEGER NOT NULL,
    message TEXT NOT NULL,
    created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
    FOREIGN KEY (project_id) REFERENCES projects(id),
    FOREIGN KEY (user_id) REFERENCES users(id)
);

CREATE INDEX IF NOT EXISTS idx_discussion_project_created ON discussion_posts(project_id, created_at);
"#;

/// Notebook table
pub const NOTES_SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS notes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    content TEXT,
    created_at DATETIME DEFAULT CURRENT_TIMESTAMP
);
"#;

/// Full database schema with all tables
pub fn full_schema() -> String {
    format!(
        "{}\n\n{}\n\n{}\n\n{}\n\n{}",
        CATALOG_SCHEMA, QUIZZES_SCHEMA, STUDY_SCHEMA, PROJECTS_SCHEMA, NOTES_SCHEMA
    )
}
