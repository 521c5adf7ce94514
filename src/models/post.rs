use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    Twitter,
    Facebook,
    Instagram,
    LinkedIn,
}

impl Platform {
    pub const ALL: [Platform; 4] = [
        Platform::Twitter,
        Platform::Facebook,
        Platform::Instagram,
        Platform::LinkedIn,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Twitter => "Twitter",
            Platform::Facebook => "Facebook",
            Platform::Instagram => "Instagram",
            Platform::LinkedIn => "LinkedIn",
        }
    }

    /// Step through the platform selector, which has an empty slot before
    /// the first platform.
    pub fn cycle(current: Option<Platform>, forward: bool) -> Option<Platform> {
        let slots = Self::ALL.len() + 1;
        let pos = match current {
            None => 0,
            Some(p) => Self::ALL.iter().position(|&q| q == p).map_or(0, |i| i + 1),
        };
        let next = if forward {
            (pos + 1) % slots
        } else {
            (pos + slots - 1) % slots
        };
        match next {
            0 => None,
            i => Some(Self::ALL[i - 1]),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: u32,
    pub platform: Platform,
    pub content: String,
    pub likes: u64,
    pub shares: u64,
    pub comments: u64,
}

impl Post {
    pub fn engagement_total(&self) -> u64 {
        self.likes + self.shares + self.comments
    }
}
