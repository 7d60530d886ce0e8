pub mod animation;
pub mod dom;
pub mod engine;
pub mod filter;
pub mod interactions;
pub mod mount;
pub mod page;
pub mod renderer;
pub mod shell;

pub use crate::domain::model::{ContentDocument, Experience, Personal, Project, Skill, Social};
pub use crate::domain::ports::{ConfigProvider, ContentSource, Storage};
pub use crate::utils::error::Result;
