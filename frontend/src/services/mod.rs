pub mod config;
pub mod contact_form;
pub mod dom;
pub mod nav;
pub mod scroll;
