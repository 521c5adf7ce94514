//! Maps the active tab to the dataset and panel it shows.
//!
//! [`panel_spec`] is the static lookup table; [`select_panel`] resolves it
//! against the current state and datasets. Both are pure.

use crate::models::dataset::{
    DatasetKind, Datasets, DemographicSlice, EngagementMetrics, FollowerCount, GrowthPoint,
};
use crate::models::filter::filter_posts;
use crate::models::post::Post;
use crate::models::state::ViewState;
use crate::models::tab::Tab;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    /// One bar per category.
    Bar,
    /// Several bars per category, one per y field.
    GroupedBar,
    /// One line per y field over an ordered x axis.
    Line,
    /// Share of the whole per category.
    Pie,
}

/// How a dataset's fields map onto a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartEncoding {
    pub kind: ChartKind,
    pub x_field: &'static str,
    pub y_fields: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelKind {
    Chart(ChartEncoding),
    PostList,
    Form,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelSpec {
    pub heading: &'static str,
    /// `None` for the publish form, which reads the draft instead.
    pub dataset: Option<DatasetKind>,
    pub kind: PanelKind,
}

pub fn panel_spec(tab: Tab) -> PanelSpec {
    match tab {
        Tab::Overview => PanelSpec {
            heading: "Followers Overview",
            dataset: Some(DatasetKind::Followers),
            kind: PanelKind::Chart(ChartEncoding {
                kind: ChartKind::Bar,
                x_field: "name",
                y_fields: &["value"],
            }),
        },
        Tab::Engagement => PanelSpec {
            heading: "Engagement Metrics",
            dataset: Some(DatasetKind::Engagement),
            kind: PanelKind::Chart(ChartEncoding {
                kind: ChartKind::GroupedBar,
                x_field: "name",
                y_fields: &["likes", "shares", "comments"],
            }),
        },
        Tab::Posts => PanelSpec {
            heading: "Recent Posts",
            dataset: Some(DatasetKind::RecentPosts),
            kind: PanelKind::PostList,
        },
        Tab::Trends => PanelSpec {
            heading: "Follower Growth Trends",
            dataset: Some(DatasetKind::GrowthTrend),
            kind: PanelKind::Chart(ChartEncoding {
                kind: ChartKind::Line,
                x_field: "date",
                y_fields: &["Twitter", "Facebook", "Instagram", "LinkedIn"],
            }),
        },
        Tab::Demographics => PanelSpec {
            heading: "Audience Demographics",
            dataset: Some(DatasetKind::AudienceDemographics),
            kind: PanelKind::Chart(ChartEncoding {
                kind: ChartKind::Pie,
                x_field: "name",
                y_fields: &["value"],
            }),
        },
        Tab::Publish => PanelSpec {
            heading: "Publish New Post",
            dataset: None,
            kind: PanelKind::Form,
        },
    }
}

/// The data behind the active tab's panel.
#[derive(Debug, Clone, PartialEq)]
pub enum Panel<'a> {
    Overview(&'a [FollowerCount]),
    Engagement(&'a [EngagementMetrics]),
    Posts(Vec<&'a Post>),
    Trends(&'a [GrowthPoint]),
    Demographics(&'a [DemographicSlice]),
    /// The form reads the draft straight from the view state.
    Publish,
}

pub fn select_panel<'a>(state: &'a ViewState, data: &'a Datasets) -> Panel<'a> {
    match state.active_tab {
        Tab::Overview => Panel::Overview(&data.followers),
        Tab::Engagement => Panel::Engagement(&data.engagement),
        Tab::Posts => Panel::Posts(filter_posts(&data.recent_posts, &state.search_term)),
        Tab::Trends => Panel::Trends(&data.growth_trend),
        Tab::Demographics => Panel::Demographics(&data.audience_demographics),
        Tab::Publish => Panel::Publish,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data() -> Datasets {
        Datasets::load_embedded().unwrap()
    }

    #[test]
    fn test_trends_selects_growth_trend_time_series() {
        let data = data();
        let mut state = ViewState::default();
        assert_eq!(state.active_tab, Tab::Overview);

        state.active_tab = Tab::Trends;
        let spec = panel_spec(state.active_tab);
        assert_eq!(spec.dataset, Some(DatasetKind::GrowthTrend));
        match spec.kind {
            PanelKind::Chart(enc) => {
                assert_eq!(enc.kind, ChartKind::Line);
                assert_eq!(enc.x_field, "date");
                assert_eq!(enc.y_fields.len(), 4);
            }
            other => panic!("expected chart, got {other:?}"),
        }
        assert_eq!(
            select_panel(&state, &data),
            Panel::Trends(&data.growth_trend)
        );
    }

    #[test]
    fn test_every_tab_has_a_spec_and_heading() {
        for tab in Tab::ALL {
            let spec = panel_spec(tab);
            assert!(!spec.heading.is_empty());
            assert_eq!(spec.dataset.is_none(), tab == Tab::Publish);
        }
    }

    #[test]
    fn test_overview_and_engagement_series() {
        let overview = panel_spec(Tab::Overview);
        let engagement = panel_spec(Tab::Engagement);
        assert!(matches!(
            overview.kind,
            PanelKind::Chart(ChartEncoding { kind: ChartKind::Bar, y_fields: &["value"], .. })
        ));
        assert!(matches!(
            engagement.kind,
            PanelKind::Chart(ChartEncoding { kind: ChartKind::GroupedBar, y_fields: &["likes", "shares", "comments"], .. })
        ));
    }

    #[test]
    fn test_posts_panel_applies_search_term() {
        let data = data();
        let state = ViewState {
            active_tab: Tab::Posts,
            search_term: "webinar".to_string(),
            ..ViewState::default()
        };
        match select_panel(&state, &data) {
            Panel::Posts(posts) => {
                assert_eq!(posts.len(), 1);
                assert_eq!(posts[0].id, 2);
            }
            other => panic!("expected posts panel, got {other:?}"),
        }
    }

    #[test]
    fn test_search_term_ignored_off_posts_tab() {
        let data = data();
        let state = ViewState {
            search_term: "nothing matches this".to_string(),
            ..ViewState::default()
        };
        assert_eq!(select_panel(&state, &data), Panel::Overview(&data.followers));
    }

    #[test]
    fn test_publish_tab_selects_form() {
        let data = data();
        let state = ViewState {
            active_tab: Tab::Publish,
            search_term: "webinar".to_string(),
            ..ViewState::default()
        };
        assert_eq!(select_panel(&state, &data), Panel::Publish);
        assert_eq!(panel_spec(Tab::Publish).kind, PanelKind::Form);
    }
}
