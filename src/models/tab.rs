use std::fmt;
use std::str::FromStr;

use anyhow::bail;

/// The six mutually exclusive views of the dashboard, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Overview,
    Engagement,
    Posts,
    Trends,
    Demographics,
    Publish,
}

impl Tab {
    pub const ALL: [Tab; 6] = [
        Tab::Overview,
        Tab::Engagement,
        Tab::Posts,
        Tab::Trends,
        Tab::Demographics,
        Tab::Publish,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Tab::Overview => "overview",
            Tab::Engagement => "engagement",
            Tab::Posts => "posts",
            Tab::Trends => "trends",
            Tab::Demographics => "demographics",
            Tab::Publish => "publish",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Engagement => "Engagement",
            Tab::Posts => "Posts",
            Tab::Trends => "Trends",
            Tab::Demographics => "Demographics",
            Tab::Publish => "Publish",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|&t| t == self).unwrap_or(0)
    }

    pub fn from_index(idx: usize) -> Option<Tab> {
        Self::ALL.get(idx).copied()
    }

    pub fn next(self) -> Tab {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Tab {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Tab {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        match Self::ALL.iter().find(|t| t.id().eq_ignore_ascii_case(needle)) {
            Some(tab) => Ok(*tab),
            None => bail!("unknown tab '{s}'"),
        }
    }
}
