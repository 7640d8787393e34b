use std::{fmt::Display, str::FromStr};

use enum_iterator::{all, Sequence};

use crate::model::PostTarget;

/// Группа сабреддитов, в которые постим одной командой.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Sequence)]
pub enum Category {
    Drumming,
    MusicProduction,
    HipHop,
    Gaming,
    Tech,
    Discovery,
}

impl Category {
    pub fn name(self) -> &'static str {
        match self {
            Category::Drumming => "drumming",
            Category::MusicProduction => "music_production",
            Category::HipHop => "hip_hop",
            Category::Gaming => "gaming",
            Category::Tech => "tech",
            Category::Discovery => "discovery",
        }
    }

    /// Сабреддиты категории в порядке отправки.
    pub fn forums(self) -> &'static [&'static str] {
        match self {
            Category::Drumming => &["drums", "Drumming"],
            Category::MusicProduction => &["WeAreTheMusicMakers", "IndieMusicFeedback"],
            Category::HipHop => &["hiphopheads", "makinghiphop"],
            Category::Gaming => &["leagueoflegends"],
            // Сайт показываем на Hacker News, см. --hn.
            Category::Tech => &[],
            Category::Discovery => &["listentothis", "indieheads"],
        }
    }

    pub fn targets(self) -> Vec<PostTarget> {
        self.forums().iter().map(|f| PostTarget::new(f)).collect()
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        all::<Category>()
            .find(|c| c.name() == s)
            .ok_or_else(|| UnknownCategory(s.to_owned()))
    }
}

/// Названия всех категорий.
pub fn names() -> Vec<&'static str> {
    all::<Category>().map(Category::name).collect()
}

/// Флер который требуют некоторые сабреддиты.
pub fn flair(forum: &str) -> Option<&'static str> {
    match forum {
        "WeAreTheMusicMakers" => Some("Feedback"),
        _ => None,
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
#[error("unknown category: {0} (available: {})", names().join(", "))]
pub struct UnknownCategory(pub String);
