// Booking Calendar Library
// Scheduling core for the resource booking platform: view windowing,
// conflict detection, and drag-to-create interactions.

pub mod models;
pub mod services;
pub mod utils;
