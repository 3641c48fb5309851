use super::*;
use std::str::FromStr;
use uuid::Uuid;

#[test]
fn test_typed_id_creation() {
    let id = UserId::new("user1");
    assert_eq!(id.as_str(), "user1");
    assert!(!id.is_empty());
}

#[test]
fn test_typed_id_empty() {
    assert!(UserId::from("").is_empty());
}

#[test]
fn test_typed_id_display() {
    let id = AccountId::from("acc4");
    assert_eq!(format!("{id}"), "acc4");
}

#[test]
fn test_typed_id_serializes_transparently() {
    let id = TransactionId::from("txn1");
    assert_eq!(serde_json::to_string(&id).unwrap(), "\"txn1\"");

    let parsed: TransactionId = serde_json::from_str("\"txn2\"").unwrap();
    assert_eq!(parsed.into_inner(), "txn2");
}

#[test]
fn test_session_id_from_uuid() {
    let uuid = Uuid::new_v4();
    let id = SessionId::from_uuid(uuid);
    assert_eq!(id.into_inner(), uuid);
}

#[test]
fn test_session_id_from_str() {
    let uuid = Uuid::new_v4();
    let id = SessionId::from_str(&uuid.to_string()).unwrap();
    assert_eq!(id.into_inner(), uuid);
    assert!(SessionId::from_str("invalid").is_err());
}

#[test]
fn test_session_ids_are_unique() {
    assert_ne!(SessionId::new(), SessionId::default());
}
