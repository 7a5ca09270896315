pub mod catalog;
pub mod contact;
pub mod savings;
pub mod traffic;
