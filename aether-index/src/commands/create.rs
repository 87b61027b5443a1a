//! Create the evidence index.

use tracing::{error, info, warn};

use crate::AdminError;
use aether_index_repository::IndexAdminClient;

/// What `create_index` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateOutcome {
    /// The index was absent and has been created.
    Created,
    /// The index was already there; nothing was written.
    AlreadyExists,
}

/// Create the index with the fixed schema unless it already exists.
///
/// Request errors are logged and returned. There is no partial-creation
/// recovery; creation is a single remote call.
pub async fn create_index(client: &IndexAdminClient) -> Result<CreateOutcome, AdminError> {
    let index = client.index_name();

    let exists = client.exists().await.map_err(|e| {
        error!(index = %index, error = %e, "Failed to check index");
        e
    })?;

    if exists {
        warn!(index = %index, "Index already exists. Skipping creation.");
        return Ok(CreateOutcome::AlreadyExists);
    }

    if let Err(e) = client.create().await {
        error!(index = %index, error = %e, "Failed to create index");
        return Err(e.into());
    }

    info!(index = %index, "Created index");
    Ok(CreateOutcome::Created)
}
