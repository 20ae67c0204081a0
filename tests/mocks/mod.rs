//! Test doubles shared by the integration tests.

mod mock_contact_repository;

#[allow(unused_imports)]
pub use mock_contact_repository::MockContactRepository;
