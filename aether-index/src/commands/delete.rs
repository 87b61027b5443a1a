//! Delete the evidence index behind a confirmation flag.

use tracing::{info, warn};

use crate::AdminError;
use aether_index_repository::{IndexAdminClient, IndexDeletion};

/// What `delete_index` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// No confirmation was given; nothing was contacted.
    Refused,
    /// The index was removed.
    Deleted,
    /// The index was already absent.
    NotFound,
}

/// Delete the index if `force` is set.
///
/// `connect` is only invoked once deletion is confirmed, so an unconfirmed
/// run neither builds a client nor sends a request.
pub async fn delete_index<F>(force: bool, connect: F) -> Result<DeleteOutcome, AdminError>
where
    F: FnOnce() -> Result<IndexAdminClient, AdminError>,
{
    if !force {
        warn!("Refusing to delete index without --force flag.");
        return Ok(DeleteOutcome::Refused);
    }

    let client = connect()?;
    let index = client.index_name();

    match client.delete().await? {
        IndexDeletion::Deleted => {
            info!(index = %index, "Deleted index");
            Ok(DeleteOutcome::Deleted)
        }
        IndexDeletion::NotFound => {
            warn!(index = %index, "Index does not exist");
            Ok(DeleteOutcome::NotFound)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::mock::{Call, MockProvider};

    #[tokio::test]
    async fn test_refuses_without_force() {
        let outcome = delete_index(false, || -> Result<IndexAdminClient, AdminError> {
            panic!("client must not be built without --force")
        })
        .await
        .unwrap();

        assert_eq!(outcome, DeleteOutcome::Refused);
    }

    #[tokio::test]
    async fn test_refusal_ignores_bad_configuration() {
        let outcome = delete_index(false, || Err(AdminError::config("https without key")))
            .await
            .unwrap();
        assert_eq!(outcome, DeleteOutcome::Refused);
    }

    #[tokio::test]
    async fn test_deletes_existing_index() {
        let (client, calls) = MockProvider::new()
            .with_existing_index()
            .into_client("aether_evidence");

        let outcome = delete_index(true, || Ok(client)).await.unwrap();

        assert_eq!(outcome, DeleteOutcome::Deleted);
        assert_eq!(
            *calls.lock().await,
            vec![Call::Delete("aether_evidence".to_string())]
        );
    }

    #[tokio::test]
    async fn test_missing_index_is_success() {
        let (client, _calls) = MockProvider::new().into_client("aether_evidence");

        let outcome = delete_index(true, || Ok(client)).await.unwrap();

        assert_eq!(outcome, DeleteOutcome::NotFound);
    }

    #[tokio::test]
    async fn test_request_error_propagates() {
        let (client, _calls) = MockProvider::new().failing().into_client("aether_evidence");

        let result = delete_index(true, || Ok(client)).await;

        assert!(matches!(result, Err(AdminError::RequestError(_))));
    }

    #[tokio::test]
    async fn test_config_error_propagates_when_forced() {
        let result = delete_index(true, || Err(AdminError::config("https without key"))).await;
        assert!(matches!(result, Err(AdminError::ConfigError(_))));
    }
}
