use super::*;
use crate::net::types::Role;

fn make_user(username: &str, full_name: Option<&str>) -> User {
    User {
        id: "u-1".to_owned(),
        email: format!("{username}@campus.edu"),
        username: username.to_owned(),
        full_name: full_name.map(str::to_owned),
        role: Role::Student,
        is_verified: true,
        is_active: true,
        created_at: "2025-09-01T12:00:00Z".to_owned(),
    }
}

#[test]
fn avatar_initial_is_the_uppercased_first_letter() {
    assert_eq!(avatar_initial(&make_user("alice", None)), "A");
}

#[test]
fn avatar_initial_handles_already_uppercase_names() {
    assert_eq!(avatar_initial(&make_user("Bob", None)), "B");
}

#[test]
fn avatar_initial_of_empty_username_is_empty() {
    assert_eq!(avatar_initial(&make_user("", None)), "");
}

#[test]
fn welcome_name_prefers_the_full_name() {
    let user = make_user("alice", Some("Alice Kumar"));
    assert_eq!(welcome_name(Some(&user)), "Alice Kumar");
}

#[test]
fn welcome_name_falls_back_to_the_username() {
    let user = make_user("alice", None);
    assert_eq!(welcome_name(Some(&user)), "alice");
}

#[test]
fn welcome_name_without_a_user_is_neutral() {
    assert_eq!(welcome_name(None), "there");
}
