mod setup;

pub use setup::{
    cleanup_terminal_state as cleanup, set_mouse_capture, setup_terminal as setup,
};
