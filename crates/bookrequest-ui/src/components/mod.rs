pub(crate) mod atoms;
pub(crate) mod theme_menu;
pub(crate) mod toast;
