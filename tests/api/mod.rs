//! API endpoint tests

mod health_tests;
mod home_tests;
