//! Consumer-side tests: the error contract composes with mocked repositories.

use async_trait::async_trait;
use mockall::automock;
use mockall::predicate::eq;
use repokit::{DataError, DataResult, OptionExt};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq)]
struct UserRecord {
    id: Uuid,
    email: String,
}

/// The narrow per-entity facade consumers are expected to carve out of the
/// generic contract for dependency injection.
#[automock]
#[async_trait]
trait UserDirectory: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> DataResult<Option<UserRecord>>;
    async fn list(&self) -> DataResult<Vec<UserRecord>>;
}

async fn email_of(directory: &dyn UserDirectory, id: Uuid) -> DataResult<String> {
    let user = directory.find_by_id(id).await?.ok_or_not_found("users")?;
    Ok(user.email)
}

#[tokio::test]
async fn mocked_lookup_returns_the_email() {
    let id = Uuid::new_v4();

    let mut directory = MockUserDirectory::new();
    directory.expect_find_by_id().with(eq(id)).returning(|id| {
        Ok(Some(UserRecord {
            id,
            email: "terry@example.com".to_string(),
        }))
    });

    let email = email_of(&directory, id).await.unwrap();
    assert_eq!(email, "terry@example.com");
}

#[tokio::test]
async fn mocked_missing_row_surfaces_not_found() {
    let mut directory = MockUserDirectory::new();
    directory.expect_find_by_id().returning(|_| Ok(None));

    let err = email_of(&directory, Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, DataError::NotFound(_)));
}

#[tokio::test]
async fn mocked_store_failures_propagate_unchanged() {
    let mut directory = MockUserDirectory::new();
    directory
        .expect_list()
        .returning(|| Err(DataError::configuration("DATABASE_URL is not set")));

    let err = directory.list().await.unwrap_err();
    assert!(matches!(err, DataError::Configuration(_)));
}
