mod map_tests;
mod router_tests;
