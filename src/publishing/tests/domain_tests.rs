//! Unit tests for publishing domain value objects.

use crate::publishing::domain::{DomainError, Repository, Server, Workspace};
use rstest::rstest;
use std::hash::{BuildHasher, RandomState};

fn server(url: &str, user: Option<&str>, password: Option<&str>, persist: bool) -> Server {
    Server::new(url, user, password, persist).expect("server should be valid")
}

// ── Server construction ────────────────────────────────────────────

#[rstest]
#[case("http://host:8080/dna-server", Some("admin"), None, false)]
#[case("https://repo.example.com", Some("admin"), Some("secret"), true)]
#[case("http://host", None, None, false)]
#[case("http://host:9090/base/path", Some("reader"), Some("pw"), false)]
fn valid_server_combinations_are_accepted(
    #[case] url: &str,
    #[case] user: Option<&str>,
    #[case] password: Option<&str>,
    #[case] persist: bool,
) {
    let descriptor = Server::new(url, user, password, persist).expect("server should be valid");

    assert_eq!(descriptor.url().as_str(), url::Url::parse(url).expect("url").as_str());
    assert_eq!(descriptor.user(), user);
    assert_eq!(descriptor.password(), password);
    assert_eq!(descriptor.persist_password(), persist);
}

#[rstest]
#[case("", None, None, false)]
#[case("   ", Some("admin"), Some("secret"), true)]
#[case("", Some("admin"), None, false)]
fn empty_url_always_fails_construction(
    #[case] url: &str,
    #[case] user: Option<&str>,
    #[case] password: Option<&str>,
    #[case] persist: bool,
) {
    let result = Server::new(url, user, password, persist);

    assert!(matches!(result, Err(DomainError::InvalidServer(_))));
}

#[rstest]
#[case("not a url")]
#[case("ftp://host/pub")]
#[case("host:8080/content")]
fn non_http_or_malformed_urls_are_rejected(#[case] url: &str) {
    let result = Server::new(url, None, None, false);

    assert!(matches!(result, Err(DomainError::InvalidServer(_))));
}

#[rstest]
#[case(None)]
#[case(Some(""))]
#[case(Some("   "))]
fn password_without_user_fails_construction(#[case] user: Option<&str>) {
    let result = Server::new("http://host:8080/dna-server", user, Some("secret"), false);

    let error = result.expect_err("construction should fail");
    assert!(error.status().is_error());
    assert!(
        error.status().message().contains("password"),
        "unexpected message: {}",
        error.status().message()
    );
}

#[rstest]
fn construction_error_carries_a_non_empty_status_message() {
    let error = Server::new("", None, None, false).expect_err("construction should fail");

    assert!(error.status().is_error());
    assert!(!error.status().message().is_empty());
}

#[rstest]
fn empty_credentials_normalize_to_none() {
    let descriptor = server("http://host", Some("   "), Some(""), false);

    assert_eq!(descriptor.user(), None);
    assert_eq!(descriptor.password(), None);
}

#[rstest]
fn user_is_trimmed_before_storage() {
    let descriptor = server("http://host", Some("  admin  "), None, false);

    assert_eq!(descriptor.user(), Some("admin"));
}

// ── Server equality, hashing, and the key relation ─────────────────

#[rstest]
fn equality_is_reflexive_symmetric_and_transitive() {
    let first = server("http://host:8080/dna-server", Some("admin"), Some("secret"), true);
    let second = server("http://host:8080/dna-server", Some("admin"), Some("secret"), true);
    let third = server("http://host:8080/dna-server", Some("admin"), Some("secret"), true);

    assert_eq!(first, first);
    assert_eq!(first, second);
    assert_eq!(second, first);
    assert_eq!(second, third);
    assert_eq!(first, third);
}

#[rstest]
fn equal_servers_hash_equally() {
    let first = server("http://host:8080/dna-server", Some("admin"), Some("secret"), true);
    let second = server("http://host:8080/dna-server", Some("admin"), Some("secret"), true);
    let hasher = RandomState::new();

    assert_eq!(first, second);
    assert_eq!(hasher.hash_one(&first), hasher.hash_one(&second));
}

#[rstest]
#[case(Some("admin"), Some("other"), true)]
#[case(Some("admin"), None, true)]
fn servers_differing_only_in_credential_detail_are_unequal_but_share_a_key(
    #[case] user: Option<&str>,
    #[case] password: Option<&str>,
    #[case] persist: bool,
) {
    let first = server("http://host:8080/dna-server", Some("admin"), Some("secret"), false);
    let second = server("http://host:8080/dna-server", user, password, persist);

    assert_ne!(first, second);
    assert!(first.has_same_key(&second));
    assert!(second.has_same_key(&first));
}

#[rstest]
fn servers_with_different_users_do_not_share_a_key() {
    let first = server("http://host:8080/dna-server", Some("admin"), None, false);
    let second = server("http://host:8080/dna-server", Some("reader"), None, false);

    assert!(!first.has_same_key(&second));
}

#[rstest]
fn servers_with_different_urls_do_not_share_a_key() {
    let first = server("http://host:8080/dna-server", Some("admin"), None, false);
    let second = server("http://other:8080/dna-server", Some("admin"), None, false);

    assert!(!first.has_same_key(&second));
}

// ── Server rendering ───────────────────────────────────────────────

#[rstest]
fn debug_output_redacts_the_password() {
    let descriptor = server("http://host", Some("admin"), Some("secret"), true);
    let rendered = format!("{descriptor:?}");

    assert!(rendered.contains("<redacted>"));
    assert!(!rendered.contains("secret"));
}

#[rstest]
fn display_names_the_url_and_user() {
    let descriptor = server("http://host/", Some("admin"), None, false);

    assert_eq!(descriptor.to_string(), "http://host/ as user 'admin'");
}

#[rstest]
fn display_marks_anonymous_access() {
    let descriptor = server("http://host/", None, None, false);

    assert_eq!(descriptor.to_string(), "http://host/ with anonymous access");
}

// ── Repository ─────────────────────────────────────────────────────

#[rstest]
fn repository_keeps_its_name_and_server() {
    let owner = server("http://host", Some("admin"), None, false);
    let repository = Repository::new("  prod  ", owner.clone()).expect("valid repository");

    assert_eq!(repository.name(), "prod");
    assert_eq!(repository.server(), &owner);
}

#[rstest]
#[case("")]
#[case("   ")]
fn empty_repository_name_is_rejected(#[case] name: &str) {
    let owner = server("http://host", None, None, false);
    let result = Repository::new(name, owner);

    assert!(matches!(result, Err(DomainError::InvalidRepository(_))));
}

#[rstest]
fn repositories_are_equal_by_name_and_server() {
    let owner = server("http://host", Some("admin"), None, false);
    let first = Repository::new("prod", owner.clone()).expect("valid repository");
    let second = Repository::new("prod", owner.clone()).expect("valid repository");
    let renamed = Repository::new("staging", owner).expect("valid repository");
    let elsewhere = Repository::new(
        "prod",
        server("http://other", Some("admin"), None, false),
    )
    .expect("valid repository");

    assert_eq!(first, second);
    assert_ne!(first, renamed);
    assert_ne!(first, elsewhere);
}

// ── Workspace ──────────────────────────────────────────────────────

#[rstest]
fn workspace_exposes_its_repository_and_server() {
    let owner = server("http://host", Some("admin"), None, false);
    let repository = Repository::new("prod", owner.clone()).expect("valid repository");
    let workspace = Workspace::new("main", repository.clone()).expect("valid workspace");

    assert_eq!(workspace.name(), "main");
    assert_eq!(workspace.repository(), &repository);
    assert_eq!(workspace.server(), &owner);
}

#[rstest]
#[case("")]
#[case("  ")]
fn empty_workspace_name_is_rejected(#[case] name: &str) {
    let owner = server("http://host", None, None, false);
    let repository = Repository::new("prod", owner).expect("valid repository");
    let result = Workspace::new(name, repository);

    assert!(matches!(result, Err(DomainError::InvalidWorkspace(_))));
}

#[rstest]
fn workspaces_are_equal_by_name_and_repository() {
    let owner = server("http://host", None, None, false);
    let repository = Repository::new("prod", owner).expect("valid repository");
    let first = Workspace::new("main", repository.clone()).expect("valid workspace");
    let second = Workspace::new("main", repository.clone()).expect("valid workspace");
    let renamed = Workspace::new("draft", repository).expect("valid workspace");

    assert_eq!(first, second);
    assert_ne!(first, renamed);
}
