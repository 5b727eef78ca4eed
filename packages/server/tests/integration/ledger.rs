//! Ledger operations exercised directly, below the HTTP layer.

use ::common::{Category, Decision, FlagReason, ModerationStatus, YouTubeResolver};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, Set, SqlErr};

use server::entity::{flag, submission};
use server::ledger::{LedgerError, NewSubmission, SubmissionEdit};

use crate::common::TestApp;

fn new_submission(country: &str, category: &str, url: &str) -> NewSubmission {
    NewSubmission {
        country_code: country.to_string(),
        category: category.to_string(),
        source_url: url.to_string(),
        title: None,
    }
}

#[tokio::test]
async fn new_submissions_start_pending() {
    let app = TestApp::spawn().await;
    let resolver = YouTubeResolver;
    let ledger = app.ledger(&resolver);
    let amal = app.insert_principal("amal@example.com").await;

    let created = ledger
        .create_submission(&amal, new_submission("pse", "cooking", "https://youtu.be/abc123"))
        .await
        .unwrap();

    assert_eq!(created.status, ModerationStatus::Pending);
    assert_eq!(created.country_code, "PSE");
    assert_eq!(created.category, Category::Cooking);
    assert_eq!(created.video_id, "abc123");
    assert_eq!(created.user_email, "amal@example.com");
    assert_eq!(created.created_at, created.updated_at);
}

#[tokio::test]
async fn one_submission_per_user_and_slot() {
    let app = TestApp::spawn().await;
    let resolver = YouTubeResolver;
    let ledger = app.ledger(&resolver);
    let amal = app.insert_principal("amal@example.com").await;

    let first = ledger
        .create_submission(&amal, new_submission("USA", "music", "https://youtu.be/aaa111"))
        .await
        .unwrap();
    let err = ledger
        .create_submission(&amal, new_submission("USA", "music", "https://youtu.be/bbb222"))
        .await
        .unwrap_err();

    assert!(matches!(err, LedgerError::SlotOccupied { existing_id } if existing_id == first.id));
}

#[tokio::test]
async fn same_video_from_another_user_is_duplicate_content() {
    let app = TestApp::spawn().await;
    let resolver = YouTubeResolver;
    let ledger = app.ledger(&resolver);
    let amal = app.insert_principal("amal@example.com").await;
    let omar = app.insert_principal("omar@example.com").await;

    ledger
        .create_submission(&amal, new_submission("USA", "music", "https://youtu.be/aaa111"))
        .await
        .unwrap();
    let err = ledger
        .create_submission(
            &omar,
            new_submission("USA", "music", "https://www.youtube.com/watch?v=aaa111&t=30"),
        )
        .await
        .unwrap_err();

    assert!(matches!(err, LedgerError::DuplicateContent));
}

#[tokio::test]
async fn validation_errors_keep_their_kind() {
    let app = TestApp::spawn().await;
    let resolver = YouTubeResolver;
    let ledger = app.ledger(&resolver);
    let amal = app.insert_principal("amal@example.com").await;

    let country = ledger
        .create_submission(&amal, new_submission("XYZ", "music", "https://youtu.be/aaa111"))
        .await
        .unwrap_err();
    assert!(matches!(country, LedgerError::UnknownCountry(code) if code == "XYZ"));

    let category = ledger
        .create_submission(&amal, new_submission("USA", "sports", "https://youtu.be/aaa111"))
        .await
        .unwrap_err();
    assert!(matches!(category, LedgerError::UnknownCategory(_)));

    let url = ledger
        .create_submission(&amal, new_submission("USA", "music", "https://vimeo.com/12345"))
        .await
        .unwrap_err();
    assert!(matches!(url, LedgerError::InvalidUrl));
}

#[tokio::test]
async fn only_the_owner_can_edit_or_delete() {
    let app = TestApp::spawn().await;
    let resolver = YouTubeResolver;
    let ledger = app.ledger(&resolver);
    let amal = app.insert_principal("amal@example.com").await;
    let omar = app.insert_principal("omar@example.com").await;

    let created = ledger
        .create_submission(&amal, new_submission("USA", "music", "https://youtu.be/aaa111"))
        .await
        .unwrap();

    let edit = SubmissionEdit {
        title: Some(Some("Mine now".into())),
        source_url: None,
    };
    let err = ledger
        .update_submission(created.id, &omar, edit)
        .await
        .unwrap_err();
    assert!(matches!(err, LedgerError::Forbidden));

    let err = ledger
        .delete_submission(created.id, &omar)
        .await
        .unwrap_err();
    assert!(matches!(err, LedgerError::Forbidden));

    let missing = ledger
        .update_submission(9999, &amal, SubmissionEdit::default())
        .await
        .unwrap_err();
    assert!(matches!(missing, LedgerError::NotFound(_)));
}

#[tokio::test]
async fn edit_of_approved_submission_leaves_the_approved_list() {
    let app = TestApp::spawn().await;
    let resolver = YouTubeResolver;
    let ledger = app.ledger(&resolver);
    let amal = app.insert_principal("amal@example.com").await;
    let moderator = app.insert_principal("mod@example.com").await;

    let created = ledger
        .create_submission(&amal, new_submission("USA", "music", "https://youtu.be/aaa111"))
        .await
        .unwrap();
    ledger
        .moderate(created.id, &moderator, Decision::Approve)
        .await
        .unwrap();

    let before = ledger.count_approved_by_category("USA").await.unwrap();
    assert!(before.contains(&(Category::Music, 1)));

    let edited = ledger
        .update_submission(
            created.id,
            &amal,
            SubmissionEdit {
                title: Some(Some("Late night session".into())),
                source_url: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(edited.status, ModerationStatus::Pending);
    assert_eq!(edited.title.as_deref(), Some("Late night session"));
    assert!(edited.updated_at >= created.updated_at);

    let after = ledger.count_approved_by_category("USA").await.unwrap();
    assert!(after.contains(&(Category::Music, 0)));
    assert!(
        ledger
            .list_approved("USA", Category::Music, None, None)
            .await
            .unwrap()
            .is_empty()
    );
}

#[tokio::test]
async fn list_approved_filters_and_limits() {
    let app = TestApp::spawn().await;
    let resolver = YouTubeResolver;
    let ledger = app.ledger(&resolver);
    let moderator = app.insert_principal("mod@example.com").await;

    let mut approved = Vec::new();
    for i in 0..3 {
        let user = app.insert_principal(&format!("user{i}@example.com")).await;
        let created = ledger
            .create_submission(
                &user,
                new_submission("USA", "comedy", &format!("https://youtu.be/vid{i}")),
            )
            .await
            .unwrap();
        ledger
            .moderate(created.id, &moderator, Decision::Approve)
            .await
            .unwrap();
        approved.push(created.id);
    }
    let pending_owner = app.insert_principal("pending@example.com").await;
    ledger
        .create_submission(&pending_owner, new_submission("USA", "comedy", "https://youtu.be/vid9"))
        .await
        .unwrap();
    let rejected_owner = app.insert_principal("rejected@example.com").await;
    let rejected = ledger
        .create_submission(&rejected_owner, new_submission("USA", "comedy", "https://youtu.be/vid8"))
        .await
        .unwrap();
    ledger
        .moderate(rejected.id, &moderator, Decision::Reject)
        .await
        .unwrap();

    let all = ledger
        .list_approved("usa", Category::Comedy, None, None)
        .await
        .unwrap();
    assert_eq!(all.len(), 3);
    assert!(all.iter().all(|s| s.status == ModerationStatus::Approved));
    assert_eq!(all[0].id, approved[2]);

    let two = ledger
        .list_approved("USA", Category::Comedy, None, Some(2))
        .await
        .unwrap();
    assert_eq!(two.len(), 2);

    let none = ledger
        .list_approved("USA", Category::Comedy, None, Some(0))
        .await
        .unwrap();
    assert!(none.is_empty());

    let excluded = ledger
        .list_approved("USA", Category::Comedy, Some(approved[0]), None)
        .await
        .unwrap();
    assert!(excluded.iter().all(|s| s.id != approved[0]));
    assert_eq!(excluded.len(), 2);

    let counts = ledger.count_approved_by_category("USA").await.unwrap();
    assert_eq!(counts.len(), Category::ALL.len());
    assert!(counts.contains(&(Category::Comedy, 3)));
    assert!(counts.contains(&(Category::Inspiration, 0)));
}

#[tokio::test]
async fn moderation_only_decides_pending_rows() {
    let app = TestApp::spawn().await;
    let resolver = YouTubeResolver;
    let ledger = app.ledger(&resolver);
    let amal = app.insert_principal("amal@example.com").await;
    let moderator = app.insert_principal("mod@example.com").await;

    let created = ledger
        .create_submission(&amal, new_submission("USA", "music", "https://youtu.be/aaa111"))
        .await
        .unwrap();
    ledger
        .moderate(created.id, &moderator, Decision::Reject)
        .await
        .unwrap();

    let err = ledger
        .moderate(created.id, &moderator, Decision::Approve)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        LedgerError::InvalidTransition {
            from: ModerationStatus::Rejected,
            to: ModerationStatus::Approved,
        }
    ));

    let queue = ledger
        .list_by_status(Some(ModerationStatus::Rejected), 1, 20)
        .await
        .unwrap();
    assert_eq!(queue.total, 1);
    assert_eq!(queue.items[0].id, created.id);
}

#[tokio::test]
async fn second_flag_by_same_user_is_refused() {
    let app = TestApp::spawn().await;
    let resolver = YouTubeResolver;
    let ledger = app.ledger(&resolver);
    let amal = app.insert_principal("amal@example.com").await;
    let omar = app.insert_principal("omar@example.com").await;

    let created = ledger
        .create_submission(&amal, new_submission("USA", "music", "https://youtu.be/aaa111"))
        .await
        .unwrap();

    assert!(!ledger.has_flagged(created.id, omar.user_id).await.unwrap());
    ledger
        .create_flag(created.id, &omar, FlagReason::Broken)
        .await
        .unwrap();
    let err = ledger
        .create_flag(created.id, &omar, FlagReason::Other)
        .await
        .unwrap_err();
    assert!(matches!(err, LedgerError::AlreadyFlagged));
    assert!(ledger.has_flagged(created.id, omar.user_id).await.unwrap());

    let stored = flag::Entity::find()
        .filter(flag::Column::SubmissionId.eq(created.id))
        .count(&app.db)
        .await
        .unwrap();
    assert_eq!(stored, 1);

    let missing = ledger
        .create_flag(9999, &omar, FlagReason::Broken)
        .await
        .unwrap_err();
    assert!(matches!(missing, LedgerError::NotFound(_)));
}

#[tokio::test]
async fn deleting_a_submission_removes_its_flags() {
    let app = TestApp::spawn().await;
    let resolver = YouTubeResolver;
    let ledger = app.ledger(&resolver);
    let amal = app.insert_principal("amal@example.com").await;
    let omar = app.insert_principal("omar@example.com").await;

    let created = ledger
        .create_submission(&amal, new_submission("USA", "music", "https://youtu.be/aaa111"))
        .await
        .unwrap();
    ledger
        .create_flag(created.id, &omar, FlagReason::Inappropriate)
        .await
        .unwrap();

    ledger.delete_submission(created.id, &amal).await.unwrap();

    assert!(matches!(
        ledger.get_submission(created.id).await,
        Err(LedgerError::NotFound(_))
    ));
    assert_eq!(flag::Entity::find().count(&app.db).await.unwrap(), 0);

    // The slot is free again.
    ledger
        .create_submission(&amal, new_submission("USA", "music", "https://youtu.be/bbb222"))
        .await
        .unwrap();
}

#[tokio::test]
async fn moderation_pages_beyond_any_offset_are_validation_errors() {
    let app = TestApp::spawn().await;
    let resolver = YouTubeResolver;
    let ledger = app.ledger(&resolver);

    let err = ledger.list_by_status(None, u64::MAX, 20).await.unwrap_err();
    assert!(matches!(err, LedgerError::Validation(_)));
    let err = ledger.list_flags(u64::MAX, 20).await.unwrap_err();
    assert!(matches!(err, LedgerError::Validation(_)));

    let empty = ledger.list_by_status(None, 1_000_000, 20).await.unwrap();
    assert!(empty.items.is_empty());
}

fn raw_submission(owner_id: i32, owner_email: &str, video_id: &str) -> submission::ActiveModel {
    let now = Utc::now();
    submission::ActiveModel {
        user_id: Set(owner_id),
        user_email: Set(owner_email.to_string()),
        country_code: Set("USA".to_string()),
        category: Set(Category::Music),
        source_url: Set(format!("https://youtu.be/{video_id}")),
        video_id: Set(video_id.to_string()),
        title: Set(None),
        status: Set(ModerationStatus::Pending),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
}

#[tokio::test]
async fn storage_refuses_a_second_row_for_the_same_slot() {
    let app = TestApp::spawn().await;
    let amal = app.insert_principal("amal@example.com").await;
    let omar = app.insert_principal("omar@example.com").await;

    raw_submission(amal.user_id, &amal.email, "aaa111")
        .insert(&app.db)
        .await
        .unwrap();
    let err = raw_submission(amal.user_id, &amal.email, "bbb222")
        .insert(&app.db)
        .await
        .unwrap_err();
    assert!(matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))));

    // Another user's row in the same slot is fine.
    raw_submission(omar.user_id, &omar.email, "ccc333")
        .insert(&app.db)
        .await
        .unwrap();
    assert_eq!(submission::Entity::find().count(&app.db).await.unwrap(), 2);
}

#[tokio::test]
async fn storage_refuses_a_second_flag_from_the_same_user() {
    let app = TestApp::spawn().await;
    let amal = app.insert_principal("amal@example.com").await;
    let omar = app.insert_principal("omar@example.com").await;
    let created = raw_submission(amal.user_id, &amal.email, "aaa111")
        .insert(&app.db)
        .await
        .unwrap();

    let flag_by = |user_id: i32, reason: FlagReason| flag::ActiveModel {
        submission_id: Set(created.id),
        user_id: Set(user_id),
        reason: Set(reason),
        created_at: Set(Utc::now()),
        ..Default::default()
    };

    flag_by(omar.user_id, FlagReason::Broken)
        .insert(&app.db)
        .await
        .unwrap();
    let err = flag_by(omar.user_id, FlagReason::Other)
        .insert(&app.db)
        .await
        .unwrap_err();
    assert!(matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))));

    flag_by(amal.user_id, FlagReason::Other)
        .insert(&app.db)
        .await
        .unwrap();
    assert_eq!(flag::Entity::find().count(&app.db).await.unwrap(), 2);
}
