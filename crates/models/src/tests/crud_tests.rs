use anyhow::Result;
use sea_orm::EntityTrait;
use uuid::Uuid;

use super::setup_test_db;
use crate::document::{DocumentStatus, NewDocument};
use crate::attachment::NewAttachment;
use crate::errors::ModelError;
use crate::{attachment, category, document, qa, user};

#[tokio::test]
async fn test_user_crud() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };

    let username = format!("user_{}", &Uuid::new_v4().simple().to_string()[..12]);
    let created = user::create(&db, &username, "$argon2id$stub".into(), None, user::ROLE_USER).await?;
    assert_eq!(created.username, username);
    assert_eq!(created.role, "USER");
    assert!(created.email.is_none());

    let found = user::find_by_username(&db, &username).await?;
    assert_eq!(found.map(|u| u.id), Some(created.id));

    // unique index on username
    let dup = user::create(&db, &username, "$argon2id$other".into(), None, user::ROLE_USER).await;
    assert!(matches!(dup, Err(ModelError::Conflict(_))));

    user::Entity::delete_by_id(created.id).exec(&db).await?;
    assert!(user::find_by_username(&db, &username).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_user_json_hides_password() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };

    let username = format!("json_{}", &Uuid::new_v4().simple().to_string()[..12]);
    let created = user::create(&db, &username, "$argon2id$secret".into(), Some("a@b.c".into()), user::ROLE_ADMIN).await?;
    let json = serde_json::to_value(&created)?;
    assert!(json.get("password").is_none());
    assert_eq!(json["role"], "ADMIN");
    assert_eq!(json["email"], "a@b.c");

    user::Entity::delete_by_id(created.id).exec(&db).await?;
    Ok(())
}

#[tokio::test]
async fn test_category_crud() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };

    let name = format!("cat_{}", Uuid::new_v4());
    let created = category::create(&db, &name, Some("first".into())).await?;
    assert_eq!(created.name, name);
    assert_eq!(created.description.as_deref(), Some("first"));

    let updated = category::update(&db, created.id, "renamed", None).await?;
    let updated = updated.expect("category exists");
    assert_eq!(updated.name, "renamed");
    assert!(updated.description.is_none());
    assert_eq!(updated.create_time, created.create_time);

    category::Entity::delete_by_id(created.id).exec(&db).await?;
    assert!(category::update(&db, created.id, "gone", None).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_category_name_limits() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };

    assert!(matches!(category::create(&db, "  ", None).await, Err(ModelError::Validation(_))));
    let long = "x".repeat(101);
    assert!(matches!(category::create(&db, &long, None).await, Err(ModelError::Validation(_))));
    Ok(())
}

#[tokio::test]
async fn test_qa_crud() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };

    let created = qa::create(&db, "What is Rust?", "A systems language.", Some(7), Some(1)).await?;
    assert_eq!(created.source, qa::SOURCE_MANUAL);
    assert_eq!(created.view_count, 0);
    assert_eq!(created.like_count, 0);
    assert_eq!(created.create_user_id, Some(1));
    assert!(created.source_doc_id.is_none());

    let updated = qa::update_content(&db, created.id, "What is Cargo?", "The build tool.", None)
        .await?
        .expect("qa exists");
    assert_eq!(updated.question, "What is Cargo?");
    assert!(updated.category_id.is_none());
    assert!(updated.update_time >= created.update_time);
    assert_eq!(updated.create_time, created.create_time);

    qa::Entity::delete_by_id(created.id).exec(&db).await?;
    assert!(qa::Entity::find_by_id(created.id).one(&db).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_document_crud() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };

    let created = document::create(
        &db,
        NewDocument {
            title: "handbook".into(),
            file_path: "/uploads/handbook.pdf".into(),
            file_size: Some(1024),
            file_type: Some("pdf".into()),
            create_user_id: Some(1),
        },
    )
    .await?;
    assert_eq!(created.status, DocumentStatus::Uploaded.as_str());
    assert!(created.process_result.is_none());

    let found = document::find_by_id(&db, created.id).await?;
    assert_eq!(found.map(|d| d.title), Some("handbook".to_string()));

    assert!(document::delete_by_id(&db, created.id).await?);
    assert!(!document::delete_by_id(&db, created.id).await?);
    Ok(())
}

#[tokio::test]
async fn test_attachment_list_for() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };

    let related_type = format!("QA_{}", &Uuid::new_v4().simple().to_string()[..8]);
    let mut ids = Vec::new();
    for name in ["a.png", "b.png"] {
        let att = attachment::create(
            &db,
            NewAttachment {
                file_name: name.into(),
                file_path: format!("/files/{name}"),
                related_id: Some(42),
                related_type: Some(related_type.clone()),
                ..Default::default()
            },
        )
        .await?;
        ids.push(att.id);
    }

    let listed = attachment::list_for(&db, &related_type, 42).await?;
    assert_eq!(listed.iter().map(|a| a.id).collect::<Vec<_>>(), ids);
    assert!(attachment::list_for(&db, &related_type, 43).await?.is_empty());

    for id in ids {
        assert!(attachment::delete_by_id(&db, id).await?);
    }
    Ok(())
}
