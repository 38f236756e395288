//! Unit tests for domain exceptions

use std::error::Error as StdError;

use crate::domain::ErrorItem;
use crate::errors::domain_exception::{items_and_content_message, items_message};
use crate::errors::{DomainException, ExceptionKind};
use crate::resources::ErrorMessageKey;

fn items(messages: &[&str]) -> Vec<ErrorItem> {
    messages.iter().map(|message| ErrorItem::new(*message)).collect()
}

fn content(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|line| line.to_string()).collect()
}

#[test]
fn test_log_message_is_used_verbatim() {
    let error = DomainException::business(ErrorMessageKey::InvalidBundleId, "bundle 42 does not exist");
    assert_eq!(error.technical_message(), "bundle 42 does not exist");
    assert_eq!(error.to_string(), "bundle 42 does not exist");
    assert_eq!(error.kind(), ExceptionKind::Business);
    assert_eq!(error.resource_key(), Some(ErrorMessageKey::InvalidBundleId));
    assert!(error.error_items().is_none());
}

#[test]
fn test_items_message_keeps_trailing_space() {
    let error = DomainException::with_items(
        ExceptionKind::JobPosting,
        ErrorMessageKey::InvalidCustomFieldName,
        items(&["A", "B"]),
    );
    assert_eq!(error.technical_message(), "A B ");
    assert_eq!(error.error_items(), Some(items(&["A", "B"]).as_slice()));
    assert!(error.additional_content().is_empty());
}

#[test]
fn test_items_and_content_trims_final_separator() {
    let error = DomainException::with_items_and_content(
        ExceptionKind::Business,
        ErrorMessageKey::InvalidMediaId,
        Some(items(&["A"])),
        Some(content(&["C"])),
    );
    assert_eq!(error.technical_message(), "A : C");
    assert_eq!(error.additional_content(), &["C".to_string()]);
}

#[test]
fn test_items_and_content_with_only_content() {
    let message = items_and_content_message(None, Some(&content(&["first", "second"])));
    assert_eq!(message, "first : second");
}

#[test]
fn test_items_and_content_with_nothing_is_empty() {
    assert_eq!(items_and_content_message(None, None), "");
    assert_eq!(items_and_content_message(Some(&[]), Some(&[])), "");
}

#[test]
fn test_items_and_content_cuts_at_last_colon() {
    // Colons inside messages come before the appended separator and survive.
    let message = items_and_content_message(Some(&items(&["Title: too long"])), None);
    assert_eq!(message, "Title: too long");
}

#[test]
fn test_items_message_empty() {
    assert_eq!(items_message(&[]), "");
}

#[test]
fn test_key_only_exception() {
    let error = DomainException::new(ExceptionKind::Business, ErrorMessageKey::InvalidUserId);
    assert_eq!(error.resource_key_str(), "InvalidUserId");
    assert_eq!(error.technical_message(), "InvalidUserId");
    assert!(error.source().is_none());
}

#[test]
fn test_authentication_kinds_may_omit_key() {
    let error = DomainException::not_authenticated(None);
    assert_eq!(error.kind(), ExceptionKind::NotAuthenticated);
    assert_eq!(error.resource_key_str(), "");
    assert!(!error.kind().is_domain_rule_violation());

    let error = DomainException::unauthorized_action(Some(ErrorMessageKey::AccessDenied));
    assert_eq!(error.kind(), ExceptionKind::UnauthorizedAction);
    assert_eq!(error.resource_key_str(), "AccessDenied");
}

#[test]
fn test_domain_rule_violation_kinds() {
    assert!(ExceptionKind::Business.is_domain_rule_violation());
    assert!(ExceptionKind::JobPosting.is_domain_rule_violation());
    assert!(!ExceptionKind::UnauthorizedAction.is_domain_rule_violation());
}

#[test]
fn test_source_chain_is_exposed() {
    let io = std::io::Error::new(std::io::ErrorKind::Other, "disk unavailable");
    let error = DomainException::business(ErrorMessageKey::LogNotSubmitted, "log write failed")
        .with_source(io);

    let source = error.source().expect("inner cause");
    assert_eq!(source.to_string(), "disk unavailable");

    let chain: Vec<String> = anyhow::Error::new(error).chain().map(|e| e.to_string()).collect();
    assert_eq!(chain, vec!["log write failed", "disk unavailable"]);
}
