use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// `CURRENT_TIMESTAMP` columns go over the wire as stored: `YYYY-MM-DD HH:MM:SS`
pub mod sqlite_timestamp {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&value.format(FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
    }
}

/// Subject shown on the home screen
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct Subject {
    pub id: String,
    pub name: String,
    /// Icon name, mapped to an asset by the client
    pub icon: String,
    pub color: String,
    pub total_chapters: i64,
    /// Progress percentage (0-100)
    pub progress: i64,
}

/// Lesson unit belonging to a subject
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct Chapter {
    pub id: String,
    pub subject_id: String,
    pub title: String,
    pub description: String,
    pub thumbnail: Option<String>,
    /// Stored as 0/1, always serialized as a JSON boolean
    pub is_completed: bool,
    pub notes: Option<String>,
    pub video_url: Option<String>,
}

/// Insert payload for a chapter
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewChapter {
    pub id: Option<String>,
    pub subject_id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub video_url: Option<String>,
    pub thumbnail: Option<String>,
    pub notes: Option<String>,
}

/// One multiple-choice question of a quiz
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub id: String,
    pub question: String,
    pub options: Vec<String>,
    /// Index into `options`
    pub correct_answer: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

/// Quiz row as stored, with the question list still encoded
#[derive(Debug, Clone, FromRow)]
#[sqlx(rename_all = "camelCase")]
pub struct QuizRow {
    pub id: String,
    pub subject_id: String,
    pub title: String,
    pub level: String,
    pub questions: String,
}

/// Quiz with its questions decoded
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub id: String,
    pub subject_id: String,
    pub title: String,
    /// Easy, Medium or Hard
    pub level: String,
    pub questions: Vec<QuizQuestion>,
}

impl TryFrom<QuizRow> for Quiz {
    type Error = serde_json::Error;

    fn try_from(row: QuizRow) -> Result<Self, Self::Error> {
        Ok(Self {
            questions: decode_questions(&row.questions)?,
            id: row.id,
            subject_id: row.subject_id,
            title: row.title,
            level: row.level,
        })
    }
}

/// Encode a question list for the `quizzes.questions` column
pub fn encode_questions(questions: &[QuizQuestion]) -> serde_json::Result<String> {
    serde_json::to_string(questions)
}

/// Decode the `quizzes.questions` column
pub fn decode_questions(encoded: &str) -> serde_json::Result<Vec<QuizQuestion>> {
    serde_json::from_str(encoded)
}

/// Insert payload for a quiz
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewQuiz {
    pub id: Option<String>,
    pub subject_id: Option<String>,
    pub title: Option<String>,
    pub level: Option<String>,
    pub questions: Option<Vec<QuizQuestion>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TimetableEntry {
    pub id: String,
    pub title: String,
    pub day: String,
    pub time: String,
    /// Class, Study or Quiz
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub name: Option<String>,
    pub language: Option<String>,
    pub grade: Option<String>,
}

/// Aggregate study snapshot (not user scoped)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct ProgressStats {
    pub id: i64,
    pub total_hours: Option<f64>,
    pub lessons_completed: Option<i64>,
    pub quizzes_taken: Option<i64>,
    pub average_score: Option<i64>,
    pub streak_days: Option<i64>,
}

/// Project row joined with its creator's name
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub goal: Option<String>,
    /// Open, Closed or Under Review
    pub status: String,
    pub budget_needed: Option<f64>,
    pub professor_id: Option<i64>,
    pub creator_id: i64,
    #[serde(with = "sqlite_timestamp")]
    pub created_at: NaiveDateTime,
    #[serde(rename = "creatorName")]
    #[sqlx(rename = "creatorName")]
    pub creator_name: Option<String>,
}

/// Project list entry
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProjectSummary {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub project: Project,
    /// Number of approved members
    #[serde(rename = "memberCount")]
    #[sqlx(rename = "memberCount")]
    pub member_count: i64,
}

/// Project with all of its sub-resources
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectDetails {
    #[serde(flatten)]
    pub project: Project,
    pub members: Vec<ProjectMember>,
    pub tasks: Vec<ProjectTask>,
    pub budget: Vec<BudgetRequest>,
}

/// Filters accepted by the project listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectFilter {
    /// Projects the user created or has any membership row in.
    ///
    /// The id is bound as given and compared under the integer column
    /// affinity, so a value that is not a number matches nothing.
    Mine(String),
    Open,
    Completed,
    UnderProfessor,
}

/// Insert payload for a project
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewProject {
    pub id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub goal: Option<String>,
    pub budget_needed: Option<f64>,
    pub professor_id: Option<i64>,
    pub creator_id: Option<i64>,
}

/// Membership row joined with the member's name and grade
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProjectMember {
    pub id: i64,
    pub project_id: String,
    pub user_id: i64,
    pub role: Option<String>,
    /// pending, approved or rejected
    pub status: String,
    pub name: Option<String>,
    pub grade: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProjectTask {
    pub id: i64,
    pub project_id: String,
    pub title: String,
    pub assigned_to: Option<i64>,
    pub deadline: Option<String>,
    /// Pending, In Progress or Done
    pub status: Option<String>,
}

/// Insert payload for a task
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewTask {
    pub title: Option<String>,
    pub assigned_to: Option<i64>,
    pub deadline: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BudgetRequest {
    pub id: i64,
    pub project_id: String,
    pub title: String,
    pub amount: f64,
    pub reason: Option<String>,
    /// Pending, Approved or Rejected
    pub status: String,
    pub professor_note: Option<String>,
    #[serde(with = "sqlite_timestamp")]
    pub created_at: NaiveDateTime,
}

/// Insert payload for a budget request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewBudgetRequest {
    pub title: Option<String>,
    pub amount: Option<f64>,
    pub reason: Option<String>,
}

/// Discussion message joined with the author's name
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DiscussionPost {
    pub id: i64,
    pub project_id: String,
    pub user_id: i64,
    pub message: String,
    #[serde(with = "sqlite_timestamp")]
    pub created_at: NaiveDateTime,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewDiscussionPost {
    pub user_id: Option<i64>,
    pub message: Option<String>,
}

/// Notebook entry, content is markdown
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub content: Option<String>,
    #[serde(with = "sqlite_timestamp")]
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewNote {
    pub title: Option<String>,
    pub content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiz_row_decodes_questions_in_order() {
        let row = QuizRow {
            id: "math-quiz-1".to_string(),
            subject_id: "math".to_string(),
            title: "Algebra Basics".to_string(),
            level: "Easy".to_string(),
            questions: r#"[
                {"id":"q1","question":"2x if x = 3?","options":["5","6"],"correctAnswer":1,"explanation":"2 * 3 = 6"},
                {"id":"q2","question":"3 squared?","options":["6","9"],"correctAnswer":1}
            ]"#
            .to_string(),
        };

        let quiz = Quiz::try_from(row).expect("valid questions");
        assert_eq!(quiz.questions.len(), 2);
        assert_eq!(quiz.questions[0].id, "q1");
        assert_eq!(quiz.questions[0].explanation.as_deref(), Some("2 * 3 = 6"));
        assert_eq!(quiz.questions[1].id, "q2");
        assert!(quiz.questions[1].explanation.is_none());
    }

    #[test]
    fn test_corrupt_questions_are_an_error() {
        assert!(decode_questions("not json").is_err());
        assert!(decode_questions(r#"[{"id":"q1"}]"#).is_err());
    }

    #[test]
    fn test_missing_explanation_is_not_serialized() {
        let question = QuizQuestion {
            id: "q1".to_string(),
            question: "Pick one".to_string(),
            options: vec!["a".to_string(), "b".to_string()],
            correct_answer: 0,
            explanation: None,
        };

        let encoded = encode_questions(std::slice::from_ref(&question)).expect("encode");
        assert_eq!(
            encoded,
            r#"[{"id":"q1","question":"Pick one","options":["a","b"],"correctAnswer":0}]"#
        );
    }

    #[test]
    fn test_created_at_keeps_sqlite_format() {
        let note = Note {
            id: 1,
            title: "Fractions".to_string(),
            content: None,
            created_at: NaiveDateTime::parse_from_str(
                "2026-10-19 12:55:08",
                sqlite_timestamp::FORMAT,
            )
            .expect("timestamp"),
        };

        let json = serde_json::to_value(&note).expect("serialize");
        assert_eq!(json["created_at"], "2026-10-19 12:55:08");

        let back: Note = serde_json::from_value(json).expect("deserialize");
        assert_eq!(back.created_at, note.created_at);
    }

    #[test]
    fn test_timetable_entry_uses_type_key() {
        let entry = TimetableEntry {
            id: "1".to_string(),
            title: "Math Class".to_string(),
            day: "Monday".to_string(),
            time: "09:00 AM".to_string(),
            kind: "Class".to_string(),
        };

        let json = serde_json::to_value(&entry).expect("serialize");
        assert_eq!(json["type"], "Class");
        assert!(json.get("kind").is_none());
    }
}
