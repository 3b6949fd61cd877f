pub mod header;
pub mod footer;
pub mod search_box;
pub mod filter;
pub mod product_list;
pub mod loading;
pub mod cart_bar;
