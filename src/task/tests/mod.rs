mod query_tests;
mod support;
mod tags_tests;
