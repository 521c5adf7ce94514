use std::collections::HashSet;

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{debug, warn};

use super::post::{Platform, Post};

const MOCK_DATA: &str = include_str!("../../assets/mock_data.json");

/// The five named datasets the dashboard can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetKind {
    Followers,
    Engagement,
    RecentPosts,
    GrowthTrend,
    AudienceDemographics,
}

impl DatasetKind {
    pub fn name(self) -> &'static str {
        match self {
            DatasetKind::Followers => "followers",
            DatasetKind::Engagement => "engagement",
            DatasetKind::RecentPosts => "recentPosts",
            DatasetKind::GrowthTrend => "growthTrend",
            DatasetKind::AudienceDemographics => "audienceDemographics",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FollowerCount {
    pub name: Platform,
    pub value: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EngagementMetrics {
    pub name: Platform,
    pub likes: u64,
    pub shares: u64,
    pub comments: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GrowthPoint {
    /// Month in `YYYY-MM` form.
    pub date: String,
    #[serde(rename = "Twitter")]
    pub twitter: u64,
    #[serde(rename = "Facebook")]
    pub facebook: u64,
    #[serde(rename = "Instagram")]
    pub instagram: u64,
    #[serde(rename = "LinkedIn")]
    pub linkedin: u64,
}

impl GrowthPoint {
    pub fn value(&self, platform: Platform) -> u64 {
        match platform {
            Platform::Twitter => self.twitter,
            Platform::Facebook => self.facebook,
            Platform::Instagram => self.instagram,
            Platform::LinkedIn => self.linkedin,
        }
    }

    pub fn month(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&format!("{}-01", self.date), "%Y-%m-%d").ok()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DemographicSlice {
    pub name: String,
    pub value: u64,
}

/// All static metric data, loaded once at start-up and never mutated.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Datasets {
    pub followers: Vec<FollowerCount>,
    pub engagement: Vec<EngagementMetrics>,
    pub recent_posts: Vec<Post>,
    pub growth_trend: Vec<GrowthPoint>,
    pub audience_demographics: Vec<DemographicSlice>,
}

impl Datasets {
    pub fn load_embedded() -> Result<Self> {
        Self::from_json(MOCK_DATA).context("embedded mock data is corrupt")
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let datasets: Datasets =
            serde_json::from_str(json).context("failed to parse metric datasets")?;
        datasets.check()?;
        debug!(
            posts = datasets.recent_posts.len(),
            months = datasets.growth_trend.len(),
            "loaded metric datasets"
        );
        Ok(datasets)
    }

    pub fn demographic_total(&self) -> u64 {
        self.audience_demographics.iter().map(|s| s.value).sum()
    }

    fn check(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for post in &self.recent_posts {
            if !seen.insert(post.id) {
                bail!("duplicate post id {}", post.id);
            }
        }

        for point in &self.growth_trend {
            if point.month().is_none() {
                bail!("growth trend date '{}' is not YYYY-MM", point.date);
            }
        }

        // Shares are drawn relative to the actual total, so an off sum is
        // only worth a warning.
        let total = self.demographic_total();
        if total != 100 {
            warn!(total, "audience demographics do not sum to 100");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_data_loads() {
        let data = Datasets::load_embedded().unwrap();
        assert_eq!(data.followers.len(), 4);
        assert_eq!(data.engagement.len(), 4);
        assert_eq!(data.recent_posts.len(), 3);
        assert_eq!(data.growth_trend.len(), 4);
        assert_eq!(data.audience_demographics.len(), 5);
        assert_eq!(data.demographic_total(), 100);
    }

    #[test]
    fn test_embedded_values_match_mock_figures() {
        let data = Datasets::load_embedded().unwrap();
        assert_eq!(
            data.followers[2],
            FollowerCount {
                name: Platform::Instagram,
                value: 2000
            }
        );
        assert_eq!(data.engagement[1].shares, 300);
        assert_eq!(data.growth_trend[3].value(Platform::LinkedIn), 800);
        assert_eq!(data.recent_posts[2].content, "Behind the scenes at our photo shoot. #BTS");
        assert_eq!(data.audience_demographics[4].name, "55+");
    }

    #[test]
    fn test_growth_point_month_parses() {
        let data = Datasets::load_embedded().unwrap();
        let month = data.growth_trend[0].month().unwrap();
        assert_eq!(month, NaiveDate::from_ymd_opt(2023, 1, 1).unwrap());
    }

    #[test]
    fn test_duplicate_post_ids_rejected() {
        let json = r#"{
            "followers": [], "engagement": [], "growthTrend": [], "audienceDemographics": [],
            "recentPosts": [
                { "id": 1, "platform": "Twitter", "content": "a", "likes": 0, "shares": 0, "comments": 0 },
                { "id": 1, "platform": "Facebook", "content": "b", "likes": 0, "shares": 0, "comments": 0 }
            ]
        }"#;
        let err = Datasets::from_json(json).unwrap_err();
        assert!(err.to_string().contains("duplicate post id"));
    }

    #[test]
    fn test_bad_month_rejected() {
        let json = r#"{
            "followers": [], "engagement": [], "recentPosts": [], "audienceDemographics": [],
            "growthTrend": [
                { "date": "January", "Twitter": 1, "Facebook": 1, "Instagram": 1, "LinkedIn": 1 }
            ]
        }"#;
        assert!(Datasets::from_json(json).is_err());
    }

    #[test]
    fn test_off_demographic_sum_still_loads() {
        let json = r#"{
            "followers": [], "engagement": [], "recentPosts": [], "growthTrend": [],
            "audienceDemographics": [ { "name": "18-24", "value": 60 }, { "name": "25-34", "value": 60 } ]
        }"#;
        let data = Datasets::from_json(json).unwrap();
        assert_eq!(data.demographic_total(), 120);
    }

    #[test]
    fn test_unknown_platform_rejected() {
        let json = r#"{
            "followers": [ { "name": "MySpace", "value": 1 } ],
            "engagement": [], "recentPosts": [], "growthTrend": [], "audienceDemographics": []
        }"#;
        assert!(Datasets::from_json(json).is_err());
    }

    #[test]
    fn test_dataset_kind_names() {
        assert_eq!(DatasetKind::RecentPosts.name(), "recentPosts");
        assert_eq!(DatasetKind::AudienceDemographics.name(), "audienceDemographics");
    }
}
