//! Demo dataset for a fresh install.
//!
//! [`seed`] wipes the seeded tables and inserts the dataset again inside a
//! single transaction, so it can be run any number of times.

use anyhow::Context;
use sqlx::{Sqlite, SqlitePool, Transaction};

use crate::models::QuizQuestion;

struct SeedSubject {
    id: &'static str,
    name: &'static str,
    icon: &'static str,
    color: &'static str,
    total_chapters: i64,
    progress: i64,
}

struct SeedChapter {
    id: &'static str,
    subject_id: &'static str,
    title: &'static str,
    description: &'static str,
    thumbnail: &'static str,
    is_completed: bool,
    notes: &'static str,
}

struct SeedQuestion {
    id: &'static str,
    question: &'static str,
    options: [&'static str; 4],
    correct_answer: u32,
    explanation: &'static str,
}

struct SeedQuiz {
    id: &'static str,
    subject_id: &'static str,
    title: &'static str,
    level: &'static str,
    questions: &'static [SeedQuestion],
}

const SUBJECTS: &[SeedSubject] = &[
    SeedSubject {
        id: "math",
        name: "Mathematics",
        icon: "Calculator",
        color: "bg-blue-500",
        total_chapters: 12,
        progress: 45,
    },
    SeedSubject {
        id: "science",
        name: "Science",
        icon: "FlaskConical",
        color: "bg-green-500",
        total_chapters: 10,
        progress: 30,
    },
    SeedSubject {
        id: "english",
        name: "English",
        icon: "BookOpen",
        color: "bg-yellow-500",
        total_chapters: 8,
        progress: 60,
    },
    SeedSubject {
        id: "social",
        name: "Social Studies",
        icon: "Globe",
        color: "bg-orange-500",
        total_chapters: 15,
        progress: 20,
    },
    SeedSubject {
        id: "computer",
        name: "Computer Basics",
        icon: "Monitor",
        color: "bg-purple-500",
        total_chapters: 5,
        progress: 80,
    },
];

const CHAPTERS: &[SeedChapter] = &[
    SeedChapter {
        id: "math-1",
        subject_id: "math",
        title: "Introduction to Algebra",
        description: "Learn the basics of variables and equations.",
        thumbnail: "https://images.unsplash.com/photo-1635070041078-e363dbe005cb?auto=format&fit=crop&q=80&w=600",
        is_completed: true,
        notes: "Algebra is a branch of mathematics dealing with symbols and the rules for manipulating those symbols. Key concepts include:\n\n1. Variables: Letters like x, y, z representing unknown numbers.\n2. Expressions: Combinations of variables and numbers (e.g., 2x + 3).\n3. Equations: Mathematical sentences showing equality (e.g., 2x = 10).\n\nRemember: What you do to one side of an equation, you must do to the other!",
    },
    SeedChapter {
        id: "math-2",
        subject_id: "math",
        title: "Geometry Fundamentals",
        description: "Understanding shapes, angles, and dimensions.",
        thumbnail: "https://images.unsplash.com/photo-1509228468518-180dd4864904?auto=format&fit=crop&q=80&w=600",
        is_completed: false,
        notes: "Geometry explores shapes, sizes, and properties of space. \n\n- Point: A location in space.\n- Line: A straight path extending infinitely.\n- Angle: Formed by two rays sharing an endpoint.\n\nCommon shapes include Triangles (3 sides), Quadrilaterals (4 sides), and Circles.",
    },
    SeedChapter {
        id: "math-3",
        subject_id: "math",
        title: "Fractions and Decimals",
        description: "Mastering parts of a whole and decimal points.",
        thumbnail: "https://images.unsplash.com/photo-1518133910546-b6c2fb7d79e3?auto=format&fit=crop&q=80&w=600",
        is_completed: false,
        notes: "Fractions represent equal parts of a whole. \n\n- Numerator: The top number (how many parts).\n- Denominator: The bottom number (total parts).\n\nDecimals are another way to write fractions whose denominators are powers of 10. Example: 0.5 = 5/10 = 1/2.",
    },
    SeedChapter {
        id: "math-4",
        subject_id: "math",
        title: "Basic Trigonometry",
        description: "Introduction to sine, cosine, and tangent.",
        thumbnail: "https://images.unsplash.com/photo-1509228468518-180dd4864904?auto=format&fit=crop&q=80&w=600",
        is_completed: false,
        notes: "Trigonometry deals with the relationships between the sides and angles of triangles.\n\nSOH-CAH-TOA:\n- Sine = Opposite / Hypotenuse\n- Cosine = Adjacent / Hypotenuse\n- Tangent = Opposite / Adjacent",
    },
    SeedChapter {
        id: "science-1",
        subject_id: "science",
        title: "Photosynthesis",
        description: "How plants make their own food.",
        thumbnail: "https://images.unsplash.com/photo-1530836369250-ef72a3f5cda8?auto=format&fit=crop&q=80&w=600",
        is_completed: false,
        notes: "Photosynthesis is the process by which green plants and some other organisms use sunlight to synthesize foods with the help of chlorophyll.\n\nEquation:\n6CO2 + 6H2O + Light Energy -> C6H12O6 (Glucose) + 6O2 (Oxygen).\n\nIt occurs in the chloroplasts usually found in plant leaves.",
    },
    SeedChapter {
        id: "science-2",
        subject_id: "science",
        title: "The Solar System",
        description: "Explore the planets and stars in our galaxy.",
        thumbnail: "https://images.unsplash.com/photo-1451187580459-43490279c0fa?auto=format&fit=crop&q=80&w=600",
        is_completed: false,
        notes: "The Solar System consists of the Sun and everything bound to it by gravity: the planets Mercury, Venus, Earth, Mars, Jupiter, Saturn, Uranus, and Neptune; dwarf planets such as Pluto; dozens of moons; and millions of asteroids, comets, and meteoroids.",
    },
    SeedChapter {
        id: "science-3",
        subject_id: "science",
        title: "Human Body Systems",
        description: "Understanding how our body works.",
        thumbnail: "https://images.unsplash.com/photo-1576086213369-97a306d36557?auto=format&fit=crop&q=80&w=600",
        is_completed: false,
        notes: "The human body is a complex network of systems:\n\n1. Circulatory System: Moves blood, nutrients, oxygen.\n2. Digestive System: Breaks down food.\n3. Nervous System: Controls the body (brain, spinal cord).\n4. Respiratory System: Breathing (lungs).",
    },
    SeedChapter {
        id: "science-4",
        subject_id: "science",
        title: "States of Matter",
        description: "Solids, liquids, and gases.",
        thumbnail: "https://images.unsplash.com/photo-1480044965905-02098d419e96?auto=format&fit=crop&q=80&w=600",
        is_completed: false,
        notes: "Matter is anything that has mass and takes up space.\n\n- Solids: Definite shape and volume.\n- Liquids: Definite volume but take the shape of their container.\n- Gases: No definite shape or volume, expanding to fill space.",
    },
    SeedChapter {
        id: "english-1",
        subject_id: "english",
        title: "Parts of Speech",
        description: "Nouns, Verbs, Adjectives, and more.",
        thumbnail: "https://images.unsplash.com/photo-1456513080510-7bf3a84b82f8?auto=format&fit=crop&q=80&w=600",
        is_completed: true,
        notes: "Parts of speech are categories of words based on their function.",
    },
    SeedChapter {
        id: "english-2",
        subject_id: "english",
        title: "Creative Writing",
        description: "Learn how to write engaging stories.",
        thumbnail: "https://images.unsplash.com/photo-1455390582262-044cdead277a?auto=format&fit=crop&q=80&w=600",
        is_completed: false,
        notes: "Creative writing expresses thoughts and feelings in an imaginative way.",
    },
    SeedChapter {
        id: "english-3",
        subject_id: "english",
        title: "Reading Comprehension",
        description: "Improve your understanding of texts.",
        thumbnail: "https://images.unsplash.com/photo-1544716278-ca5e3f4abd8c?auto=format&fit=crop&q=80&w=600",
        is_completed: false,
        notes: "Reading comprehension is the ability to process text and understand its meaning.",
    },
    SeedChapter {
        id: "computer-1",
        subject_id: "computer",
        title: "Introduction to Computers",
        description: "Basics of hardware and software.",
        thumbnail: "https://images.unsplash.com/photo-1517694712202-14dd9538aa97?auto=format&fit=crop&q=80&w=600",
        is_completed: true,
        notes: "A computer is a machine that can be instructed to carry out sequences of arithmetic or logical operations.",
    },
    SeedChapter {
        id: "computer-2",
        subject_id: "computer",
        title: "Internet Safety",
        description: "Staying safe while browsing online.",
        thumbnail: "https://images.unsplash.com/photo-1563986768609-322da13575f3?auto=format&fit=crop&q=80&w=600",
        is_completed: false,
        notes: "Internet safety is the knowledge of maximizing the user's personal safety against security risks to private information and property associated with using the internet.",
    },
];

const QUIZZES: &[SeedQuiz] = &[
    SeedQuiz {
        id: "math-quiz-1",
        subject_id: "math",
        title: "Algebra Basics",
        level: "Easy",
        questions: &[
            SeedQuestion {
                id: "q1",
                question: "What is 2x if x = 3?",
                options: ["5", "6", "9", "4"],
                correct_answer: 1,
                explanation: "2x means 2 multiplied by x. So 2 * 3 = 6.",
            },
            SeedQuestion {
                id: "q2",
                question: "Solve for y: y + 5 = 10",
                options: ["2", "5", "15", "50"],
                correct_answer: 1,
                explanation: "Subtract 5 from both sides: y = 10 - 5 = 5.",
            },
            SeedQuestion {
                id: "q3",
                question: "What is 3 squared?",
                options: ["6", "9", "12", "33"],
                correct_answer: 1,
                explanation: "3 squared is 3 * 3 = 9.",
            },
        ],
    },
    SeedQuiz {
        id: "math-quiz-2",
        subject_id: "math",
        title: "Geometry Challenge",
        level: "Medium",
        questions: &[
            SeedQuestion {
                id: "q1",
                question: "How many sides does a hexagon have?",
                options: ["5", "6", "7", "8"],
                correct_answer: 1,
                explanation: "A hexagon is a polygon with 6 sides.",
            },
            SeedQuestion {
                id: "q2",
                question: "What is the sum of angles in a triangle?",
                options: ["180", "360", "90", "270"],
                correct_answer: 0,
                explanation: "The sum of angles in any triangle is always 180 degrees.",
            },
        ],
    },
    SeedQuiz {
        id: "science-quiz-1",
        subject_id: "science",
        title: "Photosynthesis Quiz",
        level: "Medium",
        questions: &[
            SeedQuestion {
                id: "q1",
                question: "What gas do plants absorb?",
                options: ["Oxygen", "Carbon Dioxide", "Nitrogen", "Helium"],
                correct_answer: 1,
                explanation: "Plants absorb Carbon Dioxide for photosynthesis.",
            },
            SeedQuestion {
                id: "q2",
                question: "What is the green pigment in plants?",
                options: ["Chlorophyll", "Melanin", "Hemoglobin", "Keratin"],
                correct_answer: 0,
                explanation: "Chlorophyll is the green pigment responsible for absorbing light.",
            },
        ],
    },
    SeedQuiz {
        id: "english-quiz-1",
        subject_id: "english",
        title: "Grammar Galaxy",
        level: "Easy",
        questions: &[
            SeedQuestion {
                id: "q1",
                question: "Identify the verb: \"She runs fast.\"",
                options: ["She", "Runs", "Fast", "None"],
                correct_answer: 1,
                explanation: "\"Runs\" is the action word.",
            },
            SeedQuestion {
                id: "q2",
                question: "What is the past tense of \"Go\"?",
                options: ["Goed", "Gone", "Went", "Going"],
                correct_answer: 2,
                explanation: "The past tense of \"Go\" is \"Went\".",
            },
        ],
    },
];

/// (id, title, day, time, type)
const TIMETABLE: &[(&str, &str, &str, &str, &str)] = &[
    ("1", "Math Class", "Monday", "09:00 AM", "Class"),
    ("2", "Science Revision", "Monday", "11:00 AM", "Study"),
    ("3", "English Quiz", "Tuesday", "10:00 AM", "Quiz"),
    ("4", "History Lesson", "Wednesday", "02:00 PM", "Class"),
    ("5", "Computer Lab", "Thursday", "11:00 AM", "Class"),
    ("6", "Weekly Revision", "Friday", "04:00 PM", "Study"),
    ("7", "Science Quiz", "Saturday", "10:00 AM", "Quiz"),
];

/// One student creator, one professor and one other student
const USERS: &[(i64, &str, &str, &str)] = &[
    (1, "Raju Student", "en", "10th"),
    (2, "Dr. Sharma (Prof)", "en", "PhD"),
    (3, "Meena Friend", "en", "10th"),
];

/// Number of rows each seeded table holds after [`seed`] completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub subjects: usize,
    pub chapters: usize,
    pub quizzes: usize,
    pub timetable: usize,
    pub users: usize,
    pub projects: usize,
}

/// Reset the seeded tables and insert the demo dataset.
///
/// Notes, discussion posts and budget requests are left untouched.
pub async fn seed(pool: &SqlitePool) -> anyhow::Result<SeedSummary> {
    let mut tx = pool.begin().await.context("failed to start seed transaction")?;

    seed_subjects(&mut tx).await.context("failed to seed subjects")?;
    seed_chapters(&mut tx).await.context("failed to seed chapters")?;
    seed_quizzes(&mut tx).await.context("failed to seed quizzes")?;
    seed_timetable(&mut tx).await.context("failed to seed timetable")?;
    seed_stats(&mut tx).await.context("failed to seed stats")?;
    seed_users(&mut tx).await.context("failed to seed users")?;
    let projects = seed_projects(&mut tx).await.context("failed to seed projects")?;

    tx.commit().await.context("failed to commit seed transaction")?;
    tracing::info!("Seeding complete");

    Ok(SeedSummary {
        subjects: SUBJECTS.len(),
        chapters: CHAPTERS.len(),
        quizzes: QUIZZES.len(),
        timetable: TIMETABLE.len(),
        users: USERS.len(),
        projects,
    })
}

async fn seed_subjects(tx: &mut Transaction<'_, Sqlite>) -> Result<(), sqlx::Error> {
    tracing::info!("Seeding subjects");
    sqlx::query("DELETE FROM subjects").execute(&mut **tx).await?;
    for s in SUBJECTS {
        sqlx::query(
            // language=SQLite
            r#"
                INSERT INTO subjects (id, name, icon, color, totalChapters, progress)
                VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(s.id)
        .bind(s.name)
        .bind(s.icon)
        .bind(s.color)
        .bind(s.total_chapters)
        .bind(s.progress)
        .execute(&mut **tx)
        .await?;
    }
    Ok(())
}

async fn seed_chapters(tx: &mut Transaction<'_, Sqlite>) -> Result<(), sqlx::Error> {
    tracing::info!("Seeding chapters");
    sqlx::query("DELETE FROM chapters").execute(&mut **tx).await?;
    for c in CHAPTERS {
        sqlx::query(
            // language=SQLite
            r#"
                INSERT INTO chapters (id, subjectId, title, description, thumbnail, isCompleted, notes)
                VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(c.id)
        .bind(c.subject_id)
        .bind(c.title)
        .bind(c.description)
        .bind(c.thumbnail)
        .bind(c.is_completed)
        .bind(c.notes)
        .execute(&mut **tx)
        .await?;
    }
    Ok(())
}

async fn seed_quizzes(tx: &mut Transaction<'_, Sqlite>) -> anyhow::Result<()> {
    tracing::info!("Seeding quizzes");
    sqlx::query("DELETE FROM quizzes").execute(&mut **tx).await?;
    for q in QUIZZES {
        let questions: Vec<QuizQuestion> = q
            .questions
            .iter()
            .map(|sq| QuizQuestion {
                id: sq.id.to_string(),
                question: sq.question.to_string(),
                options: sq.options.iter().map(ToString::to_string).collect(),
                correct_answer: sq.correct_answer,
                explanation: Some(sq.explanation.to_string()),
            })
            .collect();
        let encoded = crate::models::encode_questions(&questions)?;

        crate::repositories::quiz::create(
            &mut **tx,
            Some(q.id),
            Some(q.subject_id),
            Some(q.title),
            Some(q.level),
            Some(&encoded),
        )
        .await?;
    }
    Ok(())
}

async fn seed_timetable(tx: &mut Transaction<'_, Sqlite>) -> Result<(), sqlx::Error> {
    tracing::info!("Seeding timetable");
    sqlx::query("DELETE FROM timetable").execute(&mut **tx).await?;
    for &(id, title, day, time, kind) in TIMETABLE {
        sqlx::query(
            // language=SQLite
            r#"
                INSERT INTO timetable (id, title, day, time, type)
                VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(id)
        .bind(title)
        .bind(day)
        .bind(time)
        .bind(kind)
        .execute(&mut **tx)
        .await?;
    }
    Ok(())
}

async fn seed_stats(tx: &mut Transaction<'_, Sqlite>) -> Result<(), sqlx::Error> {
    tracing::info!("Seeding stats");
    sqlx::query("DELETE FROM progress_stats").execute(&mut **tx).await?;
    sqlx::query(
        // language=SQLite
        r#"
            INSERT INTO progress_stats (totalHours, lessonsCompleted, quizzesTaken, averageScore, streakDays)
            VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(24.5_f64)
    .bind(23_i64)
    .bind(12_i64)
    .bind(88_i64)
    .bind(5_i64)
    .execute(&mut **tx)
    .await?;
    Ok(())
}

async fn seed_users(tx: &mut Transaction<'_, Sqlite>) -> Result<(), sqlx::Error> {
    tracing::info!("Seeding users");
    sqlx::query("DELETE FROM users").execute(&mut **tx).await?;
    for &(id, name, language, grade) in USERS {
        sqlx::query(
            // language=SQLite
            r#"
                INSERT INTO users (id, name, language, grade)
                VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(language)
        .bind(grade)
        .execute(&mut **tx)
        .await?;
    }
    Ok(())
}

/// Seeds two projects, one extra member and one task. Returns the project count.
async fn seed_projects(tx: &mut Transaction<'_, Sqlite>) -> Result<usize, sqlx::Error> {
    tracing::info!("Seeding projects");
    sqlx::query("DELETE FROM projects").execute(&mut **tx).await?;

    // (id, title, description, goal, status, budget_needed, professor_id, creator_id)
    let projects: [(&str, &str, &str, &str, &str, f64, Option<i64>, i64); 2] = [
        (
            "proj-1",
            "Solar Water Pump",
            "Building a low-cost solar pump for irrigation.",
            "Help farmers reduce electricity costs.",
            "Open",
            5000.0,
            Some(2),
            1,
        ),
        (
            "proj-2",
            "Waste Management System",
            "Recycling organic waste in the village.",
            "Clean village streets.",
            "Under Review",
            2000.0,
            None,
            3,
        ),
    ];
    for (id, title, description, goal, status, budget_needed, professor_id, creator_id) in projects
    {
        sqlx::query(
            // language=SQLite
            r#"
                INSERT INTO projects (id, title, description, goal, status, budget_needed, professor_id, creator_id)
                VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(id)
        .bind(title)
        .bind(description)
        .bind(goal)
        .bind(status)
        .bind(budget_needed)
        .bind(professor_id)
        .bind(creator_id)
        .execute(&mut **tx)
        .await?;
    }

    tracing::info!("Seeding project members");
    sqlx::query("DELETE FROM project_members").execute(&mut **tx).await?;
    crate::repositories::member::create(
        &mut **tx,
        Some("proj-1"),
        Some(3),
        "Research Member",
        crate::repositories::member::STATUS_APPROVED,
    )
    .await?;

    tracing::info!("Seeding project tasks");
    sqlx::query("DELETE FROM project_tasks").execute(&mut **tx).await?;
    sqlx::query(
        // language=SQLite
        r#"
            INSERT INTO project_tasks (project_id, title, assigned_to, deadline, status)
            VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind("proj-1")
    .bind("Market Survey")
    .bind(3_i64)
    .bind("2025-12-20")
    .bind("In Progress")
    .execute(&mut **tx)
    .await?;

    Ok(projects.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn fresh_pool(dir: &tempfile::TempDir) -> SqlitePool {
        let url = format!("sqlite://{}", dir.path().join("seed.db").display());
        let pool = crate::create_pool(&url, 1).await.expect("pool");
        crate::ensure_schema(&pool).await.expect("schema");
        pool
    }

    async fn count(pool: &SqlitePool, table: &str) -> i64 {
        sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(pool)
            .await
            .expect("count")
    }

    #[tokio::test]
    async fn test_seed_twice_yields_same_counts() {
        let dir = tempfile::tempdir().expect("tempdir");
        let pool = fresh_pool(&dir).await;

        let first = seed(&pool).await.expect("first seed");
        let second = seed(&pool).await.expect("second seed");
        assert_eq!(first, second);

        assert_eq!(count(&pool, "subjects").await, 5);
        assert_eq!(count(&pool, "chapters").await, 13);
        assert_eq!(count(&pool, "quizzes").await, 4);
        assert_eq!(count(&pool, "timetable").await, 7);
        assert_eq!(count(&pool, "progress_stats").await, 1);
        assert_eq!(count(&pool, "users").await, 3);
        assert_eq!(count(&pool, "projects").await, 2);
        assert_eq!(count(&pool, "project_members").await, 1);
        assert_eq!(count(&pool, "project_tasks").await, 1);
    }

    #[tokio::test]
    async fn test_seeded_quizzes_decode() {
        let dir = tempfile::tempdir().expect("tempdir");
        let pool = fresh_pool(&dir).await;
        seed(&pool).await.expect("seed");

        let rows = crate::repositories::quiz::list_all(&pool).await.expect("list");
        for row in rows {
            let quiz = crate::models::Quiz::try_from(row).expect("decodes");
            assert!(!quiz.questions.is_empty());
        }
    }
}
