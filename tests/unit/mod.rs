/// Unit test entry point
mod progress_tests;
