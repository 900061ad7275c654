use crate::{Identity, Provider, normalize_email};

#[test]
fn test_normalize_email() {
    assert_eq!(normalize_email("  Alice@Example.COM "), "alice@example.com");
    assert_eq!(normalize_email("a@b.com"), "a@b.com");
}

#[test]
fn test_new_local() {
    let identity = Identity::new_local("Alice@Example.com", "$2b$12$hash".to_string());

    assert_eq!(identity.email.as_deref(), Some("alice@example.com"));
    assert_eq!(identity.password_hash.as_deref(), Some("$2b$12$hash"));
    assert_eq!(identity.provider, Provider::Local);
    assert!(identity.federated_id.is_none());
    assert!(!identity.is_linked());
}

#[test]
fn test_new_federated() {
    let identity = Identity::new_federated(
        "ext-42".to_string(),
        Some("Bob@Example.com".to_string()),
        Some("Bob".to_string()),
        None,
    );

    assert_eq!(identity.email.as_deref(), Some("bob@example.com"));
    assert_eq!(identity.federated_id.as_deref(), Some("ext-42"));
    assert_eq!(identity.provider, Provider::Federated);
    assert!(identity.password_hash.is_none());
    assert!(identity.is_linked());
}

#[test]
fn test_link_federated_merges_profile() {
    let mut identity = Identity::new_local("a@b.com", "hash".to_string());
    identity.link_federated(
        "ext-1".to_string(),
        Some("Alice".to_string()),
        Some("https://cdn/avatar.png".to_string()),
    );

    assert_eq!(identity.federated_id.as_deref(), Some("ext-1"));
    assert_eq!(identity.display_name.as_deref(), Some("Alice"));
    assert_eq!(identity.avatar_url.as_deref(), Some("https://cdn/avatar.png"));
    assert_eq!(identity.provider, Provider::Federated);
    // The local credential survives linking
    assert_eq!(identity.password_hash.as_deref(), Some("hash"));
}

#[test]
fn test_link_federated_keeps_existing_profile_on_empty_incoming() {
    let mut identity = Identity::new_local("a@b.com", "hash".to_string());
    identity.display_name = Some("Existing".to_string());

    identity.link_federated("ext-1".to_string(), Some(String::new()), None);

    assert_eq!(identity.display_name.as_deref(), Some("Existing"));
}
