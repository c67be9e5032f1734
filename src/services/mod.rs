pub mod formula_service;
pub mod lol_service;
pub mod populate_service;
pub mod render_service;
pub mod store_service;
