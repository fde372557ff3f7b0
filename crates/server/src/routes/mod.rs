pub mod course;
pub mod health;
pub mod student;

#[cfg(test)]
mod test;
