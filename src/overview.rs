//! Composite entity detail view.
//!
//! The entity detail screen combines the entity itself with its resources,
//! live status, and optionally its scorecard. The sub-fetches run
//! concurrently and independently; a failing section degrades to an
//! explicit marker instead of failing the whole view.

use crate::catalog::{EntityDetail, EntityResource, EntityStatus, Scorecard};
use crate::client::{ApiClient, ApiError};
use serde::Serialize;
use tracing::warn;

/// Scorecard slot in the merged view: requested or not, and if requested,
/// whether the fetch succeeded.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case", tag = "state", content = "scorecard")]
pub enum ScorecardSection {
    NotRequested,
    Unavailable,
    Ready(Scorecard),
}

impl ScorecardSection {
    pub fn is_unavailable(&self) -> bool {
        matches!(self, ScorecardSection::Unavailable)
    }
}

/// Immutable merged view handed to the renderer.
#[derive(Debug, Clone, Serialize)]
pub struct EntityOverview {
    #[serde(flatten)]
    pub detail: EntityDetail,
    pub resources: Vec<EntityResource>,
    pub status: Option<EntityStatus>,
    pub scorecard: ScorecardSection,
}

impl EntityOverview {
    /// Merge sub-fetch results deterministically. Any failed section is
    /// dropped (status, resources) or marked (scorecard); the entity itself
    /// must have loaded for an overview to exist at all.
    pub fn assemble(
        detail: EntityDetail,
        resources: Result<Vec<EntityResource>, ApiError>,
        status: Result<EntityStatus, ApiError>,
        scorecard: Option<Result<Scorecard, ApiError>>,
    ) -> Self {
        let resources = match resources {
            Ok(resources) => resources,
            Err(err) => {
                warn!("entity resources unavailable: {}", err);
                Vec::new()
            }
        };
        let status = match status {
            Ok(status) => Some(status),
            Err(err) => {
                warn!("entity status unavailable: {}", err);
                None
            }
        };
        let scorecard = match scorecard {
            None => ScorecardSection::NotRequested,
            Some(Ok(scorecard)) => ScorecardSection::Ready(scorecard),
            Some(Err(err)) => {
                warn!("entity scorecard unavailable: {}", err);
                ScorecardSection::Unavailable
            }
        };
        EntityOverview {
            detail,
            resources,
            status,
            scorecard,
        }
    }
}

/// Fetch the composite view for one entity. The entity detail itself is
/// required; the three sub-fetches then run concurrently and all complete
/// before the merge (no short-circuit on first failure).
pub async fn fetch_entity_overview(
    client: &ApiClient,
    id: &str,
    with_scorecard: bool,
) -> Result<EntityOverview, ApiError> {
    let detail = client.get_entity(id).await?;
    let entity_id = detail.entity.id.clone();

    let resources = client.get_entity_resources(&entity_id);
    let status = client.get_entity_status(&entity_id);
    let scorecard = async {
        if with_scorecard {
            Some(client.get_entity_scorecard(&entity_id).await)
        } else {
            None
        }
    };

    let (resources, status, scorecard) = tokio::join!(resources, status, scorecard);
    Ok(EntityOverview::assemble(detail, resources, status, scorecard))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Entity, EntityLink};

    fn sample_detail() -> EntityDetail {
        EntityDetail {
            entity: Entity {
                id: "payments".to_string(),
                name: "Payments".to_string(),
                slug: "payments".to_string(),
                entity_type: "service".to_string(),
                owner: "platform".to_string(),
                description: String::new(),
                tags: Vec::new(),
            },
            lifecycle: "production".to_string(),
            links: vec![EntityLink {
                title: "Runbook".to_string(),
                url: "https://r".to_string(),
                icon: String::new(),
            }],
        }
    }

    fn sample_status() -> EntityStatus {
        EntityStatus {
            health: "healthy".to_string(),
            uptime: 99.95,
            last_deploy_at: String::new(),
            incident_count: 0,
        }
    }

    fn server_error() -> ApiError {
        ApiError::Api {
            status: 500,
            message: "boom".to_string(),
        }
    }

    #[test]
    fn scorecard_failure_degrades_without_failing_the_view() {
        let view = EntityOverview::assemble(
            sample_detail(),
            Ok(vec![]),
            Ok(sample_status()),
            Some(Err(server_error())),
        );
        assert!(view.status.is_some());
        assert!(view.scorecard.is_unavailable());
    }

    #[test]
    fn status_failure_drops_only_the_status_section() {
        let view = EntityOverview::assemble(
            sample_detail(),
            Ok(vec![EntityResource {
                id: "db-1".to_string(),
                name: "orders-db".to_string(),
                resource_type: "postgres".to_string(),
                environment: "prod".to_string(),
                description: String::new(),
            }]),
            Err(server_error()),
            None,
        );
        assert!(view.status.is_none());
        assert_eq!(view.resources.len(), 1);
        assert!(matches!(view.scorecard, ScorecardSection::NotRequested));
    }

    #[test]
    fn unrequested_scorecard_stays_unrequested() {
        let view = EntityOverview::assemble(sample_detail(), Ok(vec![]), Ok(sample_status()), None);
        assert!(matches!(view.scorecard, ScorecardSection::NotRequested));
    }
}
