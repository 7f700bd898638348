pub mod all_foods;
pub mod my_donations;
