pub use checkout::*;
pub use close_session::*;
pub use edit_selection::*;
pub use init_config::*;
pub use manage_cart::*;
pub use open_session::*;
pub use quick_pick::*;
pub use select_game::*;
pub use update_schedule::*;
pub use withdraw_from_treasury::*;

pub mod checkout;
pub mod close_session;
pub mod edit_selection;
pub mod init_config;
pub mod manage_cart;
pub mod open_session;
pub mod quick_pick;
pub mod select_game;
pub mod update_schedule;
pub mod withdraw_from_treasury;
