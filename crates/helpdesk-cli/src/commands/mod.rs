pub mod demo;
pub mod products;
pub mod queue;
pub mod submit;
pub mod tickets;
pub mod users;
