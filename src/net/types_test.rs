use super::*;

// =============================================================
// Helpers
// =============================================================

fn make_user() -> User {
    User {
        id: "u-1".to_owned(),
        email: "alice@campus.edu".to_owned(),
        username: "alice".to_owned(),
        full_name: Some("Alice Kumar".to_owned()),
        role: Role::Student,
        is_verified: true,
        is_active: true,
        created_at: "2025-09-01T12:00:00Z".to_owned(),
    }
}

fn make_token_pair() -> TokenPair {
    TokenPair {
        access_token: "acc-1".to_owned(),
        refresh_token: "ref-1".to_owned(),
        token_type: "bearer".to_owned(),
    }
}

// =============================================================
// Role serde
// =============================================================

#[test]
fn role_serializes_to_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Student).unwrap(), "\"student\"");
    assert_eq!(serde_json::to_string(&Role::Mentor).unwrap(), "\"mentor\"");
    assert_eq!(serde_json::to_string(&Role::Recruiter).unwrap(), "\"recruiter\"");
    assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
}

#[test]
fn role_deserializes_from_lowercase() {
    assert_eq!(serde_json::from_str::<Role>("\"student\"").unwrap(), Role::Student);
    assert_eq!(serde_json::from_str::<Role>("\"admin\"").unwrap(), Role::Admin);
}

#[test]
fn role_rejects_uppercase() {
    assert!(serde_json::from_str::<Role>("\"Student\"").is_err());
}

// =============================================================
// User serde
// =============================================================

#[test]
fn user_round_trip() {
    let user = make_user();
    let json = serde_json::to_string(&user).unwrap();
    let back: User = serde_json::from_str(&json).unwrap();
    assert_eq!(user, back);
}

#[test]
fn user_without_full_name() {
    let json = r#"{
        "id": "u-2",
        "email": "bob@campus.edu",
        "username": "bob",
        "full_name": null,
        "role": "mentor",
        "is_verified": false,
        "is_active": true,
        "created_at": "2025-09-02T08:30:00Z"
    }"#;
    let user: User = serde_json::from_str(json).unwrap();
    assert_eq!(user.username, "bob");
    assert_eq!(user.full_name, None);
    assert_eq!(user.role, Role::Mentor);
}

// =============================================================
// TokenPair serde
// =============================================================

#[test]
fn token_pair_round_trip() {
    let pair = make_token_pair();
    let json = serde_json::to_string(&pair).unwrap();
    let back: TokenPair = serde_json::from_str(&json).unwrap();
    assert_eq!(pair, back);
}

#[test]
fn token_pair_deserializes_from_login_response() {
    let json = r#"{
        "access_token": "eyJ.acc",
        "refresh_token": "eyJ.ref",
        "token_type": "bearer"
    }"#;
    let pair: TokenPair = serde_json::from_str(json).unwrap();
    assert_eq!(pair.access_token, "eyJ.acc");
    assert_eq!(pair.refresh_token, "eyJ.ref");
}

// =============================================================
// RegisterData serde
// =============================================================

#[test]
fn register_data_omits_absent_full_name() {
    let data = RegisterData {
        email: "bob@campus.edu".to_owned(),
        username: "bob".to_owned(),
        password: "hunter2hunter2".to_owned(),
        full_name: None,
    };
    let value = serde_json::to_value(&data).unwrap();
    assert!(value.get("full_name").is_none());
}

#[test]
fn register_data_includes_full_name_when_present() {
    let data = RegisterData {
        email: "bob@campus.edu".to_owned(),
        username: "bob".to_owned(),
        password: "hunter2hunter2".to_owned(),
        full_name: Some("Bob Singh".to_owned()),
    };
    let value = serde_json::to_value(&data).unwrap();
    assert_eq!(value["full_name"], "Bob Singh");
}

// =============================================================
// Domain shapes
// =============================================================

#[test]
fn post_maps_document_store_id_field() {
    let json = r#"{
        "_id": "p-1",
        "author_id": "u-1",
        "community_id": null,
        "title": "Show and tell",
        "content": "Built a thing.",
        "content_type": "showcase",
        "upvotes": 3,
        "created_at": "2025-10-01T00:00:00Z"
    }"#;
    let post: Post = serde_json::from_str(json).unwrap();
    assert_eq!(post.id, "p-1");
    assert_eq!(post.content_type, ContentType::Showcase);
    let back = serde_json::to_value(&post).unwrap();
    assert_eq!(back["_id"], "p-1");
}

#[test]
fn hackathon_enums_round_trip() {
    let hack = Hackathon {
        id: "h-1".to_owned(),
        title: "Winter Build".to_owned(),
        description: None,
        mode: HackathonMode::Hybrid,
        status: HackathonStatus::Upcoming,
        start_date: "2025-12-01".to_owned(),
        end_date: "2025-12-03".to_owned(),
        max_team_size: 4,
    };
    let json = serde_json::to_string(&hack).unwrap();
    let back: Hackathon = serde_json::from_str(&json).unwrap();
    assert_eq!(hack, back);
}

#[test]
fn team_status_deserializes_from_lowercase() {
    assert_eq!(serde_json::from_str::<TeamStatus>("\"forming\"").unwrap(), TeamStatus::Forming);
    assert_eq!(serde_json::from_str::<TeamStatus>("\"disbanded\"").unwrap(), TeamStatus::Disbanded);
}

#[test]
fn proficiency_deserializes_from_lowercase() {
    assert_eq!(
        serde_json::from_str::<Proficiency>("\"intermediate\"").unwrap(),
        Proficiency::Intermediate
    );
}
