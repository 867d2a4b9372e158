pub mod view;
pub mod frame;
