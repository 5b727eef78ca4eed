use sea_orm::sea_query::{Index, IndexCreateStatement, PostgresQueryBuilder, SqliteQueryBuilder};
use sea_orm::*;
use tracing::info;

use crate::entity::{flag, role, role_permission, submission};

/// Default roles seeded on startup.
const DEFAULT_ROLES: &[&str] = &["admin", "moderator", "member"];

/// Default role-permission mappings seeded on startup.
const DEFAULT_MAPPINGS: &[(&str, &str)] = &[
    // Admin: all permissions
    ("admin", "submission:create"),
    ("admin", "flag:create"),
    ("admin", "moderation:review"),
    ("admin", "moderation:flags"),
    // Moderator
    ("moderator", "submission:create"),
    ("moderator", "flag:create"),
    ("moderator", "moderation:review"),
    ("moderator", "moderation:flags"),
    // Member
    ("member", "submission:create"),
    ("member", "flag:create"),
];

/// Seed the `role` and `role_permission` tables with defaults.
pub async fn seed_role_permissions(db: &DatabaseConnection) -> Result<(), DbErr> {
    // Seed roles
    let mut roles_inserted = 0u32;
    for &name in DEFAULT_ROLES {
        let model = role::ActiveModel {
            name: Set(name.to_string()),
        };

        let result = role::Entity::insert(model)
            .on_conflict(
                sea_orm::sea_query::OnConflict::column(role::Column::Name)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(db)
            .await;

        match result {
            Ok(n) if n > 0 => roles_inserted += 1,
            Ok(_) | Err(DbErr::RecordNotInserted) => {}
            Err(e) => return Err(e),
        }
    }

    if roles_inserted > 0 {
        info!("Seeded {} new roles", roles_inserted);
    }

    // Seed role-permission mappings
    let mut perms_inserted = 0u32;
    for &(role, permission) in DEFAULT_MAPPINGS {
        let model = role_permission::ActiveModel {
            role: Set(role.to_string()),
            permission: Set(permission.to_string()),
        };

        let result = role_permission::Entity::insert(model)
            .on_conflict(
                sea_orm::sea_query::OnConflict::columns([
                    role_permission::Column::Role,
                    role_permission::Column::Permission,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec_without_returning(db)
            .await;

        match result {
            Ok(n) if n > 0 => perms_inserted += 1,
            Ok(_) | Err(DbErr::RecordNotInserted) => {}
            Err(e) => return Err(e),
        }
    }

    if perms_inserted > 0 {
        info!("Seeded {} new role-permission mappings", perms_inserted);
    }

    Ok(())
}

fn build_index_sql(backend: DbBackend, stmt: &IndexCreateStatement) -> String {
    match backend {
        DbBackend::Sqlite => stmt.to_string(SqliteQueryBuilder),
        _ => stmt.to_string(PostgresQueryBuilder),
    }
}

/// Ensure the uniqueness constraints and listing index exist.
///
/// `uq_submission_slot` and `uq_flag_submission_user` enforce one submission
/// per slot and one flag per user, so errors creating them are returned.
/// The listing index is best-effort.
pub async fn ensure_indexes(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();

    let slot = Index::create()
        .if_not_exists()
        .unique()
        .name("uq_submission_slot")
        .table(submission::Entity)
        .col(submission::Column::UserId)
        .col(submission::Column::CountryCode)
        .col(submission::Column::Category)
        .to_owned();
    db.execute_unprepared(&build_index_sql(backend, &slot)).await?;
    info!("Ensured index uq_submission_slot exists");

    let flag_once = Index::create()
        .if_not_exists()
        .unique()
        .name("uq_flag_submission_user")
        .table(flag::Entity)
        .col(flag::Column::SubmissionId)
        .col(flag::Column::UserId)
        .to_owned();
    db.execute_unprepared(&build_index_sql(backend, &flag_once))
        .await?;
    info!("Ensured index uq_flag_submission_user exists");

    // Composite index for public listings:
    // WHERE country_code = ? AND category = ? AND status = 'approved' ORDER BY created_at DESC
    let listing = Index::create()
        .if_not_exists()
        .name("idx_submission_listing")
        .table(submission::Entity)
        .col(submission::Column::CountryCode)
        .col(submission::Column::Category)
        .col(submission::Column::Status)
        .col(submission::Column::CreatedAt)
        .to_owned();

    match db
        .execute_unprepared(&build_index_sql(backend, &listing))
        .await
    {
        Ok(_) => {
            info!("Ensured index idx_submission_listing exists");
        }
        Err(e) => {
            tracing::warn!("Failed to create index idx_submission_listing: {}", e);
        }
    }

    Ok(())
}
