// App module for the facility map
// Holds application state and routes input to it

pub mod input;
pub mod state;

pub use input::{handle_input, handle_mouse};
pub use state::{App, AppScreen};
