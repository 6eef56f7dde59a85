pub mod map;
pub mod property_detail;
pub mod search_result;

pub use map::map_page;
pub use property_detail::property_detail_page;
pub use search_result::search_result_fragment;
