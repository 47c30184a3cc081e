pub mod deployment;
pub mod resizer;
pub mod settings;
