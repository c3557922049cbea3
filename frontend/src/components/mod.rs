pub mod icon_button;
pub mod icons;
pub mod navbar;
