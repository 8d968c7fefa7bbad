pub mod advanced_search_form;
pub mod filter_summary;
pub mod iconography_result_list;
