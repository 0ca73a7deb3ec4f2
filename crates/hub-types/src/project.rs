use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct City {
    pub code: String,
    pub name: String,
}

/// Category attached to a project, labelled in English and French.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ProjectTag {
    pub id: u64,
    pub label: String,
    pub label_fr: String,
    pub color: String,
}

/// A person taking part in a project.
///
/// `accepted` and `notified` are three-state: `None` means the server sent no
/// value, and it is omitted again on the way out rather than written as `null`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ProjectMember {
    pub city: City,
    pub login: String,
    pub lastname: String,
    pub firstname: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accepted: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notified: Option<bool>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub scholar_year: u32,
    pub average_mark: f64,
    pub document_uploaded: bool,
    pub video_uploaded: bool,
    pub logo_uploaded: bool,
    pub banner_uploaded: bool,
    pub id: u64,
    pub name: String,
    pub description: String,
    pub owner: String,
    pub members: Vec<ProjectMember>,
    pub owner_city: City,
    pub looking_for_members: bool,
    pub status: String,
    pub envisaged_type: String,
    pub public_video: bool,
    pub created_at: String,
    pub updated_at: String,
    pub tags: Vec<ProjectTag>,
    pub total_views: u64,
    pub total_stars: u64,
    pub starred: bool,
}
