//! Account service tests

mod service_tests;
