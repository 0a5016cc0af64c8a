pub mod guards;
pub mod repository;
mod routes;

pub use routes::get_router;
