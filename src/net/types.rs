//! Wire DTOs for the TechKatta REST API.
//!
//! DESIGN
//! ======
//! These types mirror the server's JSON schemas field for field so serde
//! round-trips stay lossless. The session flows only manipulate `User` and
//! `TokenPair`; the community/hackathon shapes are typed here so feed and
//! directory pages can deserialize responses without ad-hoc `Value` poking.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Platform role assigned at registration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Mentor,
    Recruiter,
    Admin,
}

/// An authenticated platform user as returned by `/api/v1/users/me`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: String,
    pub email: String,
    pub username: String,
    /// Display name; the UI falls back to `username` when absent.
    pub full_name: Option<String>,
    pub role: Role,
    pub is_verified: bool,
    pub is_active: bool,
    /// Account creation timestamp (ISO 8601 string).
    pub created_at: String,
}

/// Access/refresh token pair issued by login and refresh endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    /// Always `"bearer"` from the current server.
    pub token_type: String,
}

/// Login form payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

/// Registration form payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterData {
    pub email: String,
    pub username: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

/// Extended profile attached to a user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub user_id: String,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
    pub github_username: Option<String>,
    pub linkedin_url: Option<String>,
    /// Community reputation score.
    pub reputation: i64,
}

/// A skill from the platform catalogue.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub category: String,
}

/// Self-assessed proficiency attached to a user's skill.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Proficiency {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

/// A skill claimed by a user, with proficiency.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSkill {
    pub skill: Skill,
    pub proficiency: Proficiency,
}

/// An interest-based community.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Community {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub member_count: i64,
    pub created_at: String,
}

/// Feed post category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Discussion,
    Question,
    Showcase,
    Article,
}

/// A community feed post. The document store keys posts by `_id`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Post {
    #[serde(rename = "_id")]
    pub id: String,
    pub author_id: String,
    pub community_id: Option<String>,
    pub title: String,
    pub content: String,
    pub content_type: ContentType,
    pub upvotes: i64,
    pub created_at: String,
}

/// Where a hackathon takes place.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HackathonMode {
    Online,
    Offline,
    Hybrid,
}

/// Lifecycle state of a hackathon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HackathonStatus {
    Upcoming,
    Ongoing,
    Completed,
}

/// A hackathon listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hackathon {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub mode: HackathonMode,
    pub status: HackathonStatus,
    pub start_date: String,
    pub end_date: String,
    pub max_team_size: i64,
}

/// Recruitment state of a hackathon team.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamStatus {
    Forming,
    Complete,
    Disbanded,
}

/// A hackathon team.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: String,
    pub hackathon_id: String,
    pub name: String,
    pub leader_id: String,
    pub status: TeamStatus,
}
