use crate::{
    error::{ValidationError, require_text},
    object_id::ObjectId,
};
use std::collections::HashSet;

/// A validated course ready to be persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCourse {
    pub name: String,
    pub description: Option<String>,
    pub tags: Vec<String>,
    pub students: Vec<ObjectId>,
}

impl NewCourse {
    pub fn new(
        name: String,
        description: Option<String>,
        tags: Option<Vec<String>>,
        students: Option<Vec<String>>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            name: require_text("name", name)?,
            description,
            tags: tags.unwrap_or_default(),
            students: parse_student_ids(students.unwrap_or_default())?,
        })
    }
}

/// A partial course update
///
/// `tags` and `students` replace the stored lists wholesale when present.
/// For `description`, `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseChanges {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub tags: Option<Vec<String>>,
    pub students: Option<Vec<ObjectId>>,
}

impl CourseChanges {
    pub fn new(
        name: Option<String>,
        description: Option<Option<String>>,
        tags: Option<Vec<String>>,
        students: Option<Vec<String>>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            name: name.map(|name| require_text("name", name)).transpose()?,
            description,
            tags,
            students: students.map(parse_student_ids).transpose()?,
        })
    }
}

/// Optional filters for listing courses, combined with AND
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseFilter {
    /// Course must carry this tag
    pub tag: Option<String>,
    /// Course must reference a student with exactly this name
    pub student_name: Option<String>,
}

impl CourseFilter {
    /// Empty strings count as "not supplied"
    pub fn new(tag: Option<String>, student_name: Option<String>) -> Self {
        Self {
            tag: tag.filter(|t| !t.is_empty()),
            student_name: student_name.filter(|n| !n.is_empty()),
        }
    }
}

/// Parses student references, dropping repeats but keeping first-seen order
fn parse_student_ids(raw: Vec<String>) -> Result<Vec<ObjectId>, ValidationError> {
    let mut seen = HashSet::new();
    let mut ids = Vec::with_capacity(raw.len());

    for value in raw {
        let id: ObjectId = value.parse()?;
        if seen.insert(id) {
            ids.push(id);
        }
    }

    Ok(ids)
}
