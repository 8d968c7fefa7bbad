pub mod home_page;
pub mod iconography_search_page;
