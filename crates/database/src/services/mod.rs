pub mod course;
pub mod query_course;
pub mod reference;
pub mod student;

#[cfg(test)]
mod test;
