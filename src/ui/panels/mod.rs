pub mod bottom;
pub mod customize;
pub mod folders;
pub mod make_icon;
pub mod reset;
pub mod side;
pub mod top;
