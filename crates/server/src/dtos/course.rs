use super::double_option;
use database::services::course::CourseRecord;
use models::{
    ValidationError,
    course_data::{CourseChanges, CourseFilter, NewCourse},
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Serialize, ToSchema)]
pub struct CourseResponse {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub tags: Vec<String>,
    /// Ids of the referenced students; they may no longer exist
    pub students: Vec<String>,
}

impl From<CourseRecord> for CourseResponse {
    fn from(record: CourseRecord) -> Self {
        Self {
            id: record.course.id,
            name: record.course.name,
            description: record.course.description,
            tags: record.tags,
            students: record.students,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCourseRequest {
    pub name: String,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
    /// Student ids; every one must exist
    pub students: Option<Vec<String>>,
}

impl TryFrom<CreateCourseRequest> for NewCourse {
    type Error = ValidationError;

    fn try_from(request: CreateCourseRequest) -> Result<Self, Self::Error> {
        NewCourse::new(
            request.name,
            request.description,
            request.tags,
            request.students,
        )
    }
}

/// Every field is optional. `tags` and `students` replace the stored lists.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateCourseRequest {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
    pub tags: Option<Vec<String>>,
    pub students: Option<Vec<String>>,
}

impl TryFrom<UpdateCourseRequest> for CourseChanges {
    type Error = ValidationError;

    fn try_from(request: UpdateCourseRequest) -> Result<Self, Self::Error> {
        CourseChanges::new(
            request.name,
            request.description,
            request.tags,
            request.students,
        )
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CourseQueryParams {
    /// Only courses carrying this tag
    pub tag: Option<String>,
    /// Only courses with a student of exactly this name. Ignored when no
    /// student has the name.
    #[serde(rename = "studentName")]
    pub student_name: Option<String>,
}

impl From<CourseQueryParams> for CourseFilter {
    fn from(params: CourseQueryParams) -> Self {
        CourseFilter::new(params.tag, params.student_name)
    }
}
