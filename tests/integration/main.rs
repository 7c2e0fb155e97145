//! Integration test suite. Requires the test database configured in
//! `config/test.toml`.


mod auth_test;
mod profile_test;
mod recovery_test;
mod users_admin_test;
