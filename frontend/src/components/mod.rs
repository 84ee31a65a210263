pub mod animated;
pub mod button;
pub mod footer;
pub mod header;
pub mod layout;
pub mod toast;
