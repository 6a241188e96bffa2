pub(crate) mod print;
pub(crate) mod render;
