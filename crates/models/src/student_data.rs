use crate::error::{ValidationError, require_text};

/// A validated student ready to be persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    pub name: String,
    pub student_number: Option<i64>,
}

impl NewStudent {
    pub fn new(name: String, student_number: Option<i64>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: require_text("name", name)?,
            student_number,
        })
    }
}

/// A partial student update
///
/// `None` leaves the stored value alone. For `student_number`,
/// `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentChanges {
    pub name: Option<String>,
    pub student_number: Option<Option<i64>>,
}

impl StudentChanges {
    pub fn new(
        name: Option<String>,
        student_number: Option<Option<i64>>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            name: name.map(|name| require_text("name", name)).transpose()?,
            student_number,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.student_number.is_none()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_new_student_rejects_blank_name() {
        assert_eq!(
            NewStudent::new(String::new(), Some(7)),
            Err(ValidationError::BlankField("name"))
        );
        assert_eq!(
            NewStudent::new("   ".into(), None),
            Err(ValidationError::BlankField("name"))
        );
    }

    #[test]
    fn test_new_student_keeps_fields() {
        let student = NewStudent::new("Ada".into(), Some(1815)).unwrap();
        assert_eq!(student.name, "Ada");
        assert_eq!(student.student_number, Some(1815));
    }

    #[test]
    fn test_changes_reject_blank_name_only_when_given() {
        assert!(StudentChanges::new(None, Some(None)).is_ok());
        assert_eq!(
            StudentChanges::new(Some(String::new()), None),
            Err(ValidationError::BlankField("name"))
        );
        assert!(StudentChanges::new(None, None).unwrap().is_empty());
    }
}
