mod featured;
mod home;

#[derive(Debug, Clone, Copy, Default)]
pub enum Page {
    #[default]
    Home,
    Featured,
}

impl Page {
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Featured => "/featured",
        }
    }
}

pub use self::{featured::*, home::*};
