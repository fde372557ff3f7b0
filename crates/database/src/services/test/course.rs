use super::*;
use crate::error::ServiceError;
use models::course_data::CourseChanges;

#[tokio::test]
async fn create_and_get_course_with_relations() -> Result<(), ServiceError> {
    let db = setup().await?;
    let ada = student(&db, "Ada").await;
    let alan = student(&db, "Alan").await;

    let id = CourseService::create(
        &db,
        NewCourse {
            name: "Algebra".into(),
            description: Some("Groups and rings".into()),
            tags: vec!["math".into(), "core".into()],
            students: vec![alan, ada],
        },
    )
    .await?;

    let record = CourseService::get(&db, &id).await?.unwrap();
    assert_eq!(record.course.id, id.to_string());
    assert_eq!(record.course.name, "Algebra");
    assert_eq!(record.course.description.as_deref(), Some("Groups and rings"));
    assert_eq!(record.tags, vec!["math", "core"]);
    assert_eq!(record.students, vec![alan.to_string(), ada.to_string()]);

    Ok(())
}

#[tokio::test]
async fn create_with_unknown_student_persists_nothing() -> Result<(), ServiceError> {
    let db = setup().await?;
    let ada = student(&db, "Ada").await;
    let ghost = ObjectId::new();

    let result = CourseService::create(
        &db,
        NewCourse {
            name: "Algebra".into(),
            description: None,
            tags: vec!["math".into()],
            students: vec![ada, ghost],
        },
    )
    .await;

    match result {
        Err(ServiceError::MissingStudent(id)) => assert_eq!(id, ghost),
        other => panic!("expected MissingStudent, got {other:?}"),
    }

    assert_eq!(courses::Entity::find().all(&db).await?.len(), 0);
    assert_eq!(course_tags::Entity::find().all(&db).await?.len(), 0);
    assert_eq!(course_students::Entity::find().all(&db).await?.len(), 0);

    Ok(())
}

#[tokio::test]
async fn update_description_leaves_everything_else() -> Result<(), ServiceError> {
    let db = setup().await?;
    let ada = student(&db, "Ada").await;
    let id = course(&db, "Algebra", &["math"], &[ada]).await;

    CourseService::update(
        &db,
        &id,
        CourseChanges::new(None, Some(Some("x".into())), None, None).unwrap(),
    )
    .await?;

    let record = CourseService::get(&db, &id).await?.unwrap();
    assert_eq!(record.course.name, "Algebra");
    assert_eq!(record.course.description.as_deref(), Some("x"));
    assert_eq!(record.tags, vec!["math"]);
    assert_eq!(record.students, vec![ada.to_string()]);

    Ok(())
}

#[tokio::test]
async fn update_replaces_lists_wholesale() -> Result<(), ServiceError> {
    let db = setup().await?;
    let ada = student(&db, "Ada").await;
    let alan = student(&db, "Alan").await;
    let id = course(&db, "Algebra", &["math", "core"], &[ada]).await;

    CourseService::update(
        &db,
        &id,
        CourseChanges {
            tags: Some(vec!["theory".into()]),
            students: Some(vec![alan]),
            ..Default::default()
        },
    )
    .await?;

    let record = CourseService::get(&db, &id).await?.unwrap();
    assert_eq!(record.tags, vec!["theory"]);
    assert_eq!(record.students, vec![alan.to_string()]);

    CourseService::update(
        &db,
        &id,
        CourseChanges {
            students: Some(vec![]),
            ..Default::default()
        },
    )
    .await?;

    let record = CourseService::get(&db, &id).await?.unwrap();
    assert!(record.students.is_empty());
    assert_eq!(record.tags, vec!["theory"]);

    Ok(())
}

#[tokio::test]
async fn update_with_unknown_student_changes_nothing() -> Result<(), ServiceError> {
    let db = setup().await?;
    let ada = student(&db, "Ada").await;
    let id = course(&db, "Algebra", &["math"], &[ada]).await;
    let ghost = ObjectId::new();

    let result = CourseService::update(
        &db,
        &id,
        CourseChanges {
            name: Some("Renamed".into()),
            students: Some(vec![ada, ghost]),
            ..Default::default()
        },
    )
    .await;
    assert!(matches!(result, Err(ServiceError::MissingStudent(id)) if id == ghost));

    let record = CourseService::get(&db, &id).await?.unwrap();
    assert_eq!(record.course.name, "Algebra");
    assert_eq!(record.students, vec![ada.to_string()]);

    Ok(())
}

#[tokio::test]
async fn update_unknown_course_is_not_found_before_reference_check() -> Result<(), ServiceError>
{
    let db = setup().await?;

    let result = CourseService::update(
        &db,
        &ObjectId::new(),
        CourseChanges {
            students: Some(vec![ObjectId::new()]),
            ..Default::default()
        },
    )
    .await;
    assert!(matches!(result, Err(ServiceError::CourseNotFound)));

    Ok(())
}

#[tokio::test]
async fn delete_removes_course_and_its_rows() -> Result<(), ServiceError> {
    let db = setup().await?;
    let ada = student(&db, "Ada").await;
    let id = course(&db, "Algebra", &["math"], &[ada]).await;

    CourseService::delete(&db, &id).await?;

    assert!(CourseService::get(&db, &id).await?.is_none());
    assert_eq!(course_tags::Entity::find().all(&db).await?.len(), 0);
    assert_eq!(course_students::Entity::find().all(&db).await?.len(), 0);
    // the student itself is untouched
    assert!(StudentService::get(&db, &ada).await?.is_some());

    let again = CourseService::delete(&db, &id).await;
    assert!(matches!(again, Err(ServiceError::CourseNotFound)));

    Ok(())
}

#[tokio::test]
async fn large_tag_and_student_lists_keep_their_order() -> Result<(), ServiceError> {
    let db = setup().await?;
    let ada = student(&db, "Ada").await;
    let alan = student(&db, "Alan").await;

    let tags: Vec<String> = (0..12_000).map(|i| format!("tag-{i}")).collect();
    let students: Vec<ObjectId> = (0..12_000)
        .map(|i| if i % 2 == 0 { ada } else { alan })
        .collect();

    let id = CourseService::create(
        &db,
        NewCourse {
            name: "Everything".into(),
            description: None,
            tags: tags.clone(),
            students: students.clone(),
        },
    )
    .await?;

    let record = CourseService::get(&db, &id).await?.unwrap();
    assert_eq!(record.tags, tags);
    assert_eq!(
        record.students,
        students.iter().map(ObjectId::to_string).collect::<Vec<_>>()
    );

    let replacement: Vec<String> = (0..11_500).map(|i| format!("new-{i}")).collect();
    CourseService::update(
        &db,
        &id,
        CourseChanges {
            tags: Some(replacement.clone()),
            ..Default::default()
        },
    )
    .await?;

    let record = CourseService::get(&db, &id).await?.unwrap();
    assert_eq!(record.tags, replacement);
    assert_eq!(record.students.len(), 12_000);

    Ok(())
}
