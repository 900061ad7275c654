use crate::{hash_password, verify_password};

#[test]
fn hash_then_verify_round_trip() {
    let hash = hash_password("correct horse battery staple").unwrap();

    assert!(verify_password("correct horse battery staple", &hash));
    assert!(!verify_password("wrong password", &hash));
}

#[test]
fn hash_is_salted() {
    let a = hash_password("same-password").unwrap();
    let b = hash_password("same-password").unwrap();

    assert_ne!(a, b);
}

#[test]
fn verify_against_garbage_hash_is_false_not_error() {
    assert!(!verify_password("anything", "not-a-bcrypt-hash"));
    assert!(!verify_password("anything", ""));
}
