pub mod ai;
pub mod auth;
pub mod billing;
pub mod email;
pub mod ocr;
pub mod system;
