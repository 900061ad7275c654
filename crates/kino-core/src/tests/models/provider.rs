use crate::{CoreError, Provider};

use std::str::FromStr;

#[test]
fn test_provider_round_trip() {
    for provider in [Provider::Local, Provider::Federated] {
        assert_eq!(Provider::from_str(provider.as_str()).unwrap(), provider);
    }
}

#[test]
fn test_provider_invalid_value() {
    let result = Provider::from_str("github");
    assert!(matches!(result, Err(CoreError::InvalidProvider { .. })));
}
