use super::double_option;
use database::entities::students;
use models::{
    ValidationError,
    student_data::{NewStudent, StudentChanges},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct StudentResponse {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_number: Option<i64>,
}

impl From<students::Model> for StudentResponse {
    fn from(student: students::Model) -> Self {
        Self {
            id: student.id,
            name: student.name,
            student_number: student.student_number,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateStudentRequest {
    pub name: String,
    pub student_number: Option<i64>,
}

impl TryFrom<CreateStudentRequest> for NewStudent {
    type Error = ValidationError;

    fn try_from(request: CreateStudentRequest) -> Result<Self, Self::Error> {
        NewStudent::new(request.name, request.student_number)
    }
}

/// Every field is optional; `student_number: null` clears the number
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateStudentRequest {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<i64>)]
    pub student_number: Option<Option<i64>>,
}

impl TryFrom<UpdateStudentRequest> for StudentChanges {
    type Error = ValidationError;

    fn try_from(request: UpdateStudentRequest) -> Result<Self, Self::Error> {
        StudentChanges::new(request.name, request.student_number)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use sea_orm::prelude::DateTime;
    use serde_json::json;

    fn model(student_number: Option<i64>) -> students::Model {
        students::Model {
            id: "507f1f77bcf86cd799439011".into(),
            name: "Ada".into(),
            student_number,
            created_at: DateTime::default(),
            updated_at: DateTime::default(),
        }
    }

    #[test]
    fn test_response_exposes_id_and_hides_timestamps() {
        let value = serde_json::to_value(StudentResponse::from(model(Some(42)))).unwrap();
        assert_eq!(
            value,
            json!({"id": "507f1f77bcf86cd799439011", "name": "Ada", "student_number": 42})
        );
    }

    #[test]
    fn test_response_omits_missing_number() {
        let value = serde_json::to_value(StudentResponse::from(model(None))).unwrap();
        assert_eq!(value, json!({"id": "507f1f77bcf86cd799439011", "name": "Ada"}));
    }

    #[test]
    fn test_update_request_distinguishes_null_from_absent() {
        let absent: UpdateStudentRequest = serde_json::from_value(json!({"name": "Ada"})).unwrap();
        assert_eq!(absent.student_number, None);

        let cleared: UpdateStudentRequest =
            serde_json::from_value(json!({"student_number": null})).unwrap();
        assert_eq!(cleared.student_number, Some(None));

        let set: UpdateStudentRequest =
            serde_json::from_value(json!({"student_number": 7})).unwrap();
        assert_eq!(set.student_number, Some(Some(7)));
    }
}
