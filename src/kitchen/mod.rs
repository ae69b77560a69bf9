mod manager;
mod persistence;

pub use manager::Kitchen;
pub use persistence::{load_meals, save_meals};
