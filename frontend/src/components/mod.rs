pub mod alert;
pub mod badge;
pub mod button;
pub mod card;
pub mod empty_state;
pub mod listing_card;
pub mod loading;
pub mod my_foods;
pub mod navbar;
pub mod number_input;
pub mod request_card;
pub mod tabs;
pub mod toast;
