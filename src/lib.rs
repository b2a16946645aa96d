pub mod gate;
pub mod layout;
pub mod menu;
pub mod net;
pub mod state;
