pub mod course_students;
pub mod course_tags;
pub mod courses;
pub mod students;
