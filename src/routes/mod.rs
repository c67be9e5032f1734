pub mod index;
pub mod lol_route;
