pub mod course_data;
pub mod error;
pub mod object_id;
pub mod student_data;

pub use error::ValidationError;
pub use object_id::ObjectId;
