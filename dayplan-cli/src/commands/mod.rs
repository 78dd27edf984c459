pub mod add;
pub mod mv;
pub mod resize;
pub mod rm;
pub mod show;
