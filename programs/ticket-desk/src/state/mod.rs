pub use calendar::*;
pub use cart::*;
pub use checkout::*;
pub use config::*;
pub use game::*;
pub use receipt::*;
pub use selection::*;
pub use session::*;
pub use treasury::*;

pub mod calendar;
pub mod cart;
pub mod checkout;
pub mod config;
pub mod game;
pub mod receipt;
pub mod selection;
pub mod session;
pub mod treasury;
