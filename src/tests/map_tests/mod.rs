mod initialize_tests;
mod page_tests;
