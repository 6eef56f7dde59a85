mod detail_tests;
mod search_tests;
