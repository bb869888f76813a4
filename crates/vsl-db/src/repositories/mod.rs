// All repository functions are generic over `E: Executor<'e, Database = Sqlite>`
// so they accept both a `&SqlitePool` (direct query) and a `&mut Transaction` (atomic operations).

pub mod budget;
pub mod chapter;
pub mod discussion;
pub mod member;
pub mod note;
pub mod project;
pub mod quiz;
pub mod stats;
pub mod subject;
pub mod task;
pub mod timetable;
