//! Typed accessors for the Shoehorn catalog and directory resources.
//!
//! Each resource family gets a small set of methods on [`ApiClient`] plus a
//! normalization shim that flattens the server's wire shapes into stable
//! CLI-facing models. Every method performs exactly one request; result
//! sets beyond one page (`limit=100`) are only partially returned.

use crate::client::{build_query, ApiClient, ApiError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::warn;

const PAGE_LIMIT: &str = "100";

// ─── /me ────────────────────────────────────────────────────────────────────

/// The current user's full profile.
#[derive(Debug, Clone, Serialize)]
pub struct Me {
    pub id: String,
    pub email: String,
    pub name: String,
    pub tenant_id: String,
    pub roles: Vec<String>,
    pub groups: Vec<String>,
    pub teams: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MeWire {
    #[serde(default)]
    id: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    name: String,
    // The API reports the username in a field called "user".
    #[serde(default)]
    user: String,
    #[serde(default)]
    first_name: String,
    #[serde(default)]
    last_name: String,
    // Seen as "tenant", "tenant_id", or "tenantId" depending on server
    // version.
    #[serde(default, alias = "tenant", alias = "tenant_id")]
    tenant_id: String,
    #[serde(default)]
    roles: Vec<String>,
    #[serde(default)]
    groups: Vec<String>,
    #[serde(default)]
    teams: Vec<String>,
}

/// Prefer an explicit display name, then first+last, then the username.
fn display_name(name: &str, first: &str, last: &str, username: &str) -> String {
    if !name.is_empty() {
        return name.to_string();
    }
    let composed = format!("{} {}", first, last).trim().to_string();
    if !composed.is_empty() {
        return composed;
    }
    username.to_string()
}

impl ApiClient {
    pub async fn get_me(&self) -> Result<Me, ApiError> {
        let raw: MeWire = self.get("/api/v1/me").await?;
        Ok(Me {
            name: display_name(&raw.name, &raw.first_name, &raw.last_name, &raw.user),
            id: raw.id,
            email: raw.email,
            tenant_id: raw.tenant_id,
            roles: raw.roles,
            groups: raw.groups,
            teams: raw.teams,
        })
    }
}

// ─── Auth status ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthStatus {
    pub authenticated: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

impl ApiClient {
    /// Server-side verification of the current bearer token.
    pub async fn get_auth_status(&self) -> Result<AuthStatus, ApiError> {
        self.get("/api/v1/auth/cli/status").await
    }
}

// ─── Entities ───────────────────────────────────────────────────────────────

/// A catalog entity in summary form.
#[derive(Debug, Clone, Serialize)]
pub struct Entity {
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(rename = "type")]
    pub entity_type: String,
    pub owner: String,
    pub description: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EntityLink {
    pub title: String,
    pub url: String,
    pub icon: String,
}

/// Full entity detail.
#[derive(Debug, Clone, Serialize)]
pub struct EntityDetail {
    #[serde(flatten)]
    pub entity: Entity,
    pub lifecycle: String,
    pub links: Vec<EntityLink>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityResource {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "type")]
    pub resource_type: String,
    #[serde(default)]
    pub environment: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityStatus {
    #[serde(default)]
    pub health: String,
    #[serde(default)]
    pub uptime: f64,
    #[serde(default)]
    pub last_deploy_at: String,
    #[serde(default)]
    pub incident_count: i64,
}

/// Optional filters for listing entities.
#[derive(Debug, Clone, Default)]
pub struct ListEntitiesOpts {
    pub entity_type: String,
    pub search: String,
    pub owner: String,
}

#[derive(Debug, Deserialize)]
struct ServiceWire {
    #[serde(default)]
    id: String,
    #[serde(default)]
    name: String,
    #[serde(default, rename = "type")]
    entity_type: String,
}

/// Compatibility shim: the server reports `owner` either as an array of
/// `{id, type}` refs or as a bare string, depending on the entity's
/// ingestion path. The first ref's id wins.
fn parse_owner(raw: Option<&serde_json::Value>) -> String {
    let Some(raw) = raw else {
        return String::new();
    };
    if let Some(refs) = raw.as_array() {
        return refs
            .first()
            .and_then(|r| r.get("id"))
            .and_then(|id| id.as_str())
            .unwrap_or_default()
            .to_string();
    }
    raw.as_str().unwrap_or_default().to_string()
}

#[derive(Debug, Deserialize)]
struct EntityWire {
    #[serde(default)]
    service: Option<ServiceWire>,
    #[serde(default)]
    owner: Option<serde_json::Value>,
    #[serde(default)]
    description: String,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    lifecycle: String,
    #[serde(default)]
    links: Vec<EntityLinkWire>,
}

#[derive(Debug, Deserialize)]
struct EntityLinkWire {
    #[serde(default)]
    name: String,
    #[serde(default)]
    url: String,
    #[serde(default)]
    icon: String,
}

impl EntityWire {
    fn into_entity(self) -> Entity {
        let service = self.service.unwrap_or(ServiceWire {
            id: String::new(),
            name: String::new(),
            entity_type: String::new(),
        });
        Entity {
            slug: service.id.clone(),
            id: service.id,
            name: service.name,
            entity_type: service.entity_type,
            owner: parse_owner(self.owner.as_ref()),
            description: self.description,
            tags: self.tags,
        }
    }

    fn into_detail(self) -> EntityDetail {
        let lifecycle = self.lifecycle.clone();
        let links = self
            .links
            .iter()
            .map(|l| EntityLink {
                title: l.name.clone(),
                url: l.url.clone(),
                icon: l.icon.clone(),
            })
            .collect();
        EntityDetail {
            entity: self.into_entity(),
            lifecycle,
            links,
        }
    }
}

#[derive(Debug, Deserialize)]
struct EntitiesPageWire {
    #[serde(default)]
    entities: Vec<EntityWire>,
}

#[derive(Debug, Deserialize)]
struct EntityDetailWire {
    entity: EntityWire,
}

#[derive(Debug, Deserialize)]
struct ResourcesWire {
    #[serde(default)]
    resources: Vec<EntityResource>,
}

impl ApiClient {
    pub async fn list_entities(&self, opts: &ListEntitiesOpts) -> Result<Vec<Entity>, ApiError> {
        let query = build_query(&[
            ("type", &opts.entity_type),
            ("search", &opts.search),
            ("owner", &opts.owner),
            ("limit", PAGE_LIMIT),
        ]);
        let page: EntitiesPageWire = self.get(&format!("/api/v1/entities{}", query)).await?;
        Ok(page.entities.into_iter().map(EntityWire::into_entity).collect())
    }

    /// Entities owned by any of the caller's teams, in team order,
    /// deduplicated by entity id. Returns `None` when the caller belongs to
    /// no teams. A team whose listing fails is skipped so one broken team
    /// does not hide the rest.
    pub async fn list_owned_entities(&self) -> Result<Option<Vec<Entity>>, ApiError> {
        let me = self.get_me().await?;
        if me.teams.is_empty() {
            return Ok(None);
        }

        let mut seen = HashSet::new();
        let mut entities = Vec::new();
        for team in &me.teams {
            let opts = ListEntitiesOpts {
                owner: team.clone(),
                ..Default::default()
            };
            let owned = match self.list_entities(&opts).await {
                Ok(owned) => owned,
                Err(err) => {
                    warn!("skipping team '{}': {}", team, err);
                    continue;
                }
            };
            for entity in owned {
                if seen.insert(entity.id.clone()) {
                    entities.push(entity);
                }
            }
        }
        Ok(Some(entities))
    }

    pub async fn get_entity(&self, id: &str) -> Result<EntityDetail, ApiError> {
        let wrapper: EntityDetailWire = self.get(&format!("/api/v1/entities/{}", id)).await?;
        Ok(wrapper.entity.into_detail())
    }

    pub async fn get_entity_resources(&self, id: &str) -> Result<Vec<EntityResource>, ApiError> {
        let wrapper: ResourcesWire = self
            .get(&format!("/api/v1/entities/{}/resources", id))
            .await?;
        Ok(wrapper.resources)
    }

    pub async fn get_entity_status(&self, id: &str) -> Result<EntityStatus, ApiError> {
        self.get(&format!("/api/v1/entities/{}/status", id)).await
    }

    pub async fn get_entity_scorecard(&self, id: &str) -> Result<Scorecard, ApiError> {
        self.get(&format!("/api/v1/entities/{}/scorecard", id)).await
    }
}

// ─── Scorecard ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scorecard {
    #[serde(default)]
    pub score: i64,
    #[serde(default)]
    pub max_score: i64,
    #[serde(default)]
    pub grade: String,
    #[serde(default)]
    pub checks: Vec<ScorecardCheck>,
    #[serde(default)]
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScorecardCheck {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub passed: bool,
    #[serde(default)]
    pub weight: i64,
    #[serde(default)]
    pub message: String,
}

// ─── Teams ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub member_count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamMember {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TeamDetail {
    #[serde(flatten)]
    pub team: Team,
    pub members: Vec<TeamMember>,
}

#[derive(Debug, Deserialize)]
struct TeamsWire {
    #[serde(default)]
    teams: Vec<Team>,
}

#[derive(Debug, Deserialize)]
struct TeamDetailWire {
    team: Team,
    #[serde(default)]
    members: Vec<TeamMember>,
}

impl ApiClient {
    pub async fn list_teams(&self) -> Result<Vec<Team>, ApiError> {
        let wire: TeamsWire = self.get("/api/v1/teams").await?;
        Ok(wire.teams)
    }

    pub async fn get_team(&self, id_or_slug: &str) -> Result<TeamDetail, ApiError> {
        let wire: TeamDetailWire = self.get(&format!("/api/v1/teams/{}", id_or_slug)).await?;
        Ok(TeamDetail {
            team: wire.team,
            members: wire.members,
        })
    }
}

// ─── Users ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct UserDetail {
    #[serde(flatten)]
    pub user: User,
    pub groups: Vec<String>,
    pub teams: Vec<String>,
    pub roles: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserWire {
    #[serde(default)]
    id: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    username: String,
    #[serde(default)]
    first_name: String,
    #[serde(default)]
    last_name: String,
    #[serde(default)]
    groups: Vec<String>,
    #[serde(default)]
    teams: Vec<String>,
    #[serde(default)]
    roles: Vec<String>,
}

impl UserWire {
    fn into_user(self) -> User {
        User {
            name: display_name("", &self.first_name, &self.last_name, &self.username),
            id: self.id,
            email: self.email,
        }
    }
}

#[derive(Debug, Deserialize)]
struct UsersWire {
    #[serde(default)]
    items: Vec<UserWire>,
}

impl ApiClient {
    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        let wire: UsersWire = self.get("/api/v1/users").await?;
        Ok(wire.items.into_iter().map(UserWire::into_user).collect())
    }

    pub async fn get_user(&self, id: &str) -> Result<UserDetail, ApiError> {
        let wire: UserWire = self.get(&format!("/api/v1/users/{}", id)).await?;
        let groups = wire.groups.clone();
        let teams = wire.teams.clone();
        let roles = wire.roles.clone();
        Ok(UserDetail {
            user: wire.into_user(),
            groups,
            teams,
            roles,
        })
    }
}

// ─── Groups ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct Group {
    pub name: String,
    pub role_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Role {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Deserialize)]
struct GroupWire {
    #[serde(default)]
    name: String,
    #[serde(default)]
    roles: Vec<Role>,
}

#[derive(Debug, Deserialize)]
struct GroupsWire {
    #[serde(default)]
    items: Vec<GroupWire>,
}

#[derive(Debug, Deserialize)]
struct RolesWire {
    #[serde(default)]
    roles: Vec<Role>,
}

impl ApiClient {
    pub async fn list_groups(&self) -> Result<Vec<Group>, ApiError> {
        let wire: GroupsWire = self.get("/api/v1/groups").await?;
        Ok(wire
            .items
            .into_iter()
            .map(|g| Group {
                name: g.name,
                role_count: g.roles.len(),
            })
            .collect())
    }

    pub async fn get_group_roles(&self, group: &str) -> Result<Vec<Role>, ApiError> {
        let wire: RolesWire = self.get(&format!("/api/v1/groups/{}/roles", group)).await?;
        Ok(wire.roles)
    }
}

// ─── Search ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct SearchHit {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub hit_type: String,
    pub description: String,
    pub score: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchResult {
    pub hits: Vec<SearchHit>,
    pub total_count: i64,
}

#[derive(Debug, Deserialize)]
struct SearchHitWire {
    #[serde(default)]
    id: String,
    #[serde(default)]
    title: String,
    #[serde(default, rename = "type")]
    hit_type: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    score: f64,
}

#[derive(Debug, Deserialize)]
struct SearchWire {
    #[serde(default)]
    results: Vec<SearchHitWire>,
    #[serde(default)]
    page: SearchPageWire,
}

#[derive(Debug, Default, Deserialize)]
struct SearchPageWire {
    #[serde(default)]
    total: i64,
}

impl ApiClient {
    pub async fn search(&self, query: &str) -> Result<SearchResult, ApiError> {
        let qs = build_query(&[("q", query)]);
        let wire: SearchWire = self.get(&format!("/api/v1/search{}", qs)).await?;
        Ok(SearchResult {
            hits: wire
                .results
                .into_iter()
                .map(|r| SearchHit {
                    id: r.id,
                    name: r.title,
                    hit_type: r.hit_type,
                    description: r.description,
                    score: r.score,
                })
                .collect(),
            total_count: wire.page.total,
        })
    }
}

// ─── K8s agents ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct K8sAgent {
    pub id: String,
    pub cluster_name: String,
    pub status: String,
    pub version: String,
    pub last_seen: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct K8sAgentWire {
    #[serde(default)]
    id: i64,
    #[serde(default)]
    cluster_id: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    online_status: String,
    #[serde(default)]
    last_heartbeat: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
struct K8sAgentsWire {
    #[serde(default)]
    agents: Vec<K8sAgentWire>,
}

/// Render a heartbeat timestamp as a coarse relative age.
pub fn format_last_seen(heartbeat: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    let Some(heartbeat) = heartbeat else {
        return "never".to_string();
    };
    let age = now.signed_duration_since(heartbeat);
    if age.num_minutes() < 1 {
        "just now".to_string()
    } else if age.num_hours() < 1 {
        format!("{}m ago", age.num_minutes())
    } else if age.num_days() < 1 {
        format!("{}h ago", age.num_hours())
    } else {
        format!("{}d ago", age.num_days())
    }
}

impl ApiClient {
    pub async fn list_k8s_agents(&self) -> Result<Vec<K8sAgent>, ApiError> {
        let wire: K8sAgentsWire = self.get("/api/v1/k8s/agents").await?;
        let now = Utc::now();
        Ok(wire
            .agents
            .into_iter()
            .map(|a| K8sAgent {
                id: a.id.to_string(),
                cluster_name: a.cluster_id,
                status: a.online_status,
                version: a.name,
                last_seen: format_last_seen(a.last_heartbeat, now),
            })
            .collect())
    }
}

// ─── Forge ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mold {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoldInput {
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "type")]
    pub input_type: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub default: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoldStep {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub action: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoldDetail {
    #[serde(flatten)]
    pub mold: Mold,
    #[serde(default)]
    pub inputs: Vec<MoldInput>,
    #[serde(default)]
    pub steps: Vec<MoldStep>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForgeRun {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub mold_id: String,
    #[serde(default)]
    pub mold_slug: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub created_by: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForgeRunList {
    #[serde(default)]
    pub runs: Vec<ForgeRun>,
    #[serde(default)]
    pub total_count: i64,
}

#[derive(Debug, Serialize)]
struct CreateRunRequest<'a> {
    mold_slug: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    inputs: Option<&'a HashMap<String, serde_json::Value>>,
}

#[derive(Debug, Deserialize)]
struct MoldsWire {
    #[serde(default)]
    molds: Vec<Mold>,
}

impl ApiClient {
    pub async fn list_molds(&self) -> Result<Vec<Mold>, ApiError> {
        let wire: MoldsWire = self.get("/api/v1/forge/molds").await?;
        Ok(wire.molds)
    }

    pub async fn get_mold(&self, slug: &str) -> Result<MoldDetail, ApiError> {
        self.get(&format!("/api/v1/forge/molds/{}", slug)).await
    }

    pub async fn list_runs(&self, mold_slug: &str) -> Result<ForgeRunList, ApiError> {
        let qs = build_query(&[("mold", mold_slug)]);
        self.get(&format!("/api/v1/forge/runs{}", qs)).await
    }

    pub async fn get_run(&self, id: &str) -> Result<ForgeRun, ApiError> {
        self.get(&format!("/api/v1/forge/runs/{}", id)).await
    }

    /// Start a new run from a mold slug. Input-schema validation is owned
    /// by the server; inputs pass through untyped.
    pub async fn create_run(
        &self,
        mold_slug: &str,
        inputs: Option<&HashMap<String, serde_json::Value>>,
    ) -> Result<ForgeRun, ApiError> {
        self.post("/api/v1/forge/runs", &CreateRunRequest { mold_slug, inputs })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn raw(json: &str) -> serde_json::Value {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn owner_array_takes_first_ref() {
        let owner = raw(r#"[{"id":"platform","type":"team"},{"id":"sre","type":"team"}]"#);
        assert_eq!(parse_owner(Some(&owner)), "platform");
    }

    #[test]
    fn owner_bare_string_is_accepted() {
        let owner = raw(r#""platform""#);
        assert_eq!(parse_owner(Some(&owner)), "platform");
    }

    #[test]
    fn owner_missing_or_unparseable_is_empty() {
        assert_eq!(parse_owner(None), "");
        let owner = raw("42");
        assert_eq!(parse_owner(Some(&owner)), "");
        let empty = raw("[]");
        assert_eq!(parse_owner(Some(&empty)), "");
    }

    #[test]
    fn display_name_fallback_chain() {
        assert_eq!(display_name("Ada L", "A", "B", "ada"), "Ada L");
        assert_eq!(display_name("", "Ada", "Lovelace", "ada"), "Ada Lovelace");
        assert_eq!(display_name("", "Ada", "", "ada"), "Ada");
        assert_eq!(display_name("", "", "", "ada"), "ada");
    }

    #[test]
    fn entity_wire_flattens_service_block() {
        let json = r#"{
            "service": {"id": "payments", "name": "Payments", "type": "service"},
            "owner": [{"id": "platform", "type": "team"}],
            "description": "handles money",
            "tags": ["tier-1"],
            "lifecycle": "production",
            "links": [{"name": "Runbook", "url": "https://r", "icon": "book"}]
        }"#;
        let wire: EntityWire = serde_json::from_str(json).unwrap();
        let detail = wire.into_detail();
        assert_eq!(detail.entity.id, "payments");
        assert_eq!(detail.entity.slug, "payments");
        assert_eq!(detail.entity.owner, "platform");
        assert_eq!(detail.lifecycle, "production");
        assert_eq!(detail.links[0].title, "Runbook");
    }

    #[test]
    fn last_seen_buckets() {
        let now = Utc::now();
        assert_eq!(format_last_seen(None, now), "never");
        assert_eq!(format_last_seen(Some(now - Duration::seconds(20)), now), "just now");
        assert_eq!(format_last_seen(Some(now - Duration::minutes(5)), now), "5m ago");
        assert_eq!(format_last_seen(Some(now - Duration::hours(3)), now), "3h ago");
        assert_eq!(format_last_seen(Some(now - Duration::days(2)), now), "2d ago");
    }

    #[test]
    fn create_run_request_omits_empty_inputs() {
        let body = CreateRunRequest {
            mold_slug: "new-service",
            inputs: None,
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"mold_slug":"new-service"}"#
        );
    }
}
