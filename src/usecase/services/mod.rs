pub mod load_service;
pub mod page_service;
