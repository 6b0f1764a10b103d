mod app_tests;
mod cli_context_tests;
mod config_tests;
mod fakes;
mod page_tests;
