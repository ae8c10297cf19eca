pub mod layout;
pub mod placement;
pub mod search;
pub mod word_list;
