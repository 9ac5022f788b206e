mod auth_flow_tests;
mod contact_tests;
mod pages_tests;
mod search_tests;
