//! Filter state and the catalog filter engine.
//!
//! This module defines [`FilterState`], the single mutable filter value owned by
//! the application state, and [`filter_listings`], the pure engine that reduces
//! a catalog to the cards currently visible. The engine is the only piece of
//! recurring logic in the plugin: a conjunctive linear scan that preserves
//! catalog order and never fails.
//!
//! # Contract
//!
//! - Neither the catalog slice nor the filter state is mutated.
//! - The result is a new ordered subsequence of the input; relative order of
//!   surviving listings matches the input order. No ranking or scoring.
//! - Unselected filters are represented as `None` / the inactive tab variants,
//!   so an inactive filter imposes no constraint. Unknown labels parse to the
//!   unselected sentinel rather than producing an error; interactive filter
//!   state must never crash the render.
//! - The capacity and date filters are carried in the state and shown in the
//!   filter bar but are not consulted by the engine. Selecting them changes no
//!   result, so callers skip re-filtering when only those fields change.

use crate::domain::listing::{Listing, PriceUnit};

/// Sentinel label shown on the region dropdown when nothing is selected.
pub const REGION_SENTINEL: &str = "지역";

/// Sentinel label shown on the capacity dropdown when nothing is selected.
pub const CAPACITY_SENTINEL: &str = "인원";

/// Sentinel label shown on the date dropdown when nothing is selected.
pub const DATE_SENTINEL: &str = "날짜";

/// A district from the closed set offered by the region filter.
///
/// Listing records carry the district as a label string; the filter compares
/// labels exactly and case-sensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum District {
    Gangnam,
    Seocho,
    Mapo,
    Gwanak,
}

impl District {
    /// All selectable districts, in dropdown order.
    pub const ALL: [Self; 4] = [Self::Gangnam, Self::Seocho, Self::Mapo, Self::Gwanak];

    /// Returns the district label as it appears in listing records.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Gangnam => "강남구",
            Self::Seocho => "서초구",
            Self::Mapo => "마포구",
            Self::Gwanak => "관악구",
        }
    }

    /// Parses a district label leniently.
    ///
    /// Unknown labels (including the sentinel) return `None`, i.e. "all
    /// districts". This is the only defensive measure against values arriving
    /// from outside the closed set.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.label() == label)
    }
}

/// A capacity bucket from the filter bar.
///
/// Declared in the filter state and rendered in the dropdown, but not applied
/// by [`filter_listings`]; see the module docs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapacityBucket {
    UpToFour,
    FiveToEight,
    NineToTwelve,
    ThirteenPlus,
}

impl CapacityBucket {
    /// All selectable buckets, in dropdown order.
    pub const ALL: [Self; 4] = [
        Self::UpToFour,
        Self::FiveToEight,
        Self::NineToTwelve,
        Self::ThirteenPlus,
    ];

    /// Returns the dropdown label for this bucket.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::UpToFour => "1~4",
            Self::FiveToEight => "5~8",
            Self::NineToTwelve => "9~12",
            Self::ThirteenPlus => "13+",
        }
    }

    /// Parses a bucket label leniently; unknown labels mean "unselected".
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.label() == label)
    }
}

/// A date bucket from the filter bar.
///
/// Like [`CapacityBucket`], carried and displayed but not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateBucket {
    Today,
    Tomorrow,
    ThisWeek,
    NextWeek,
}

impl DateBucket {
    /// All selectable buckets, in dropdown order.
    pub const ALL: [Self; 4] = [Self::Today, Self::Tomorrow, Self::ThisWeek, Self::NextWeek];

    /// Returns the dropdown label for this bucket.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Today => "오늘",
            Self::Tomorrow => "내일",
            Self::ThisWeek => "이번 주",
            Self::NextWeek => "다음 주",
        }
    }

    /// Parses a bucket label leniently; unknown labels mean "unselected".
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.label() == label)
    }
}

/// Category tab in the tab bar.
///
/// Only the 시간단위 and 패키지 tabs constrain results (by pricing unit). The
/// 촬영 and 베스트 공간 tabs are not mapped to a unit or tag constraint and
/// behave like 전체.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryTab {
    All,
    Hourly,
    Package,
    Photography,
    #[default]
    Best,
}

impl CategoryTab {
    /// All tabs, in tab-bar order.
    pub const ALL: [Self; 5] = [
        Self::All,
        Self::Hourly,
        Self::Package,
        Self::Photography,
        Self::Best,
    ];

    /// Returns the tab-bar label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "전체",
            Self::Hourly => "시간단위",
            Self::Package => "패키지",
            Self::Photography => "촬영",
            Self::Best => "베스트 공간",
        }
    }

    /// Parses a tab label leniently, falling back to the default tab.
    ///
    /// Used for the `default_tab` plugin configuration option; a misspelled
    /// value selects 베스트 공간 instead of failing plugin load.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|t| t.label() == label)
            .unwrap_or_default()
    }

    /// Returns the pricing-unit constraint imposed by this tab, if any.
    #[must_use]
    pub const fn unit_constraint(self) -> Option<PriceUnit> {
        match self {
            Self::Hourly => Some(PriceUnit::Hour),
            Self::Package => Some(PriceUnit::Package),
            Self::All | Self::Photography | Self::Best => None,
        }
    }

    /// Returns the tab after this one in tab-bar order, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Returns the tab before this one in tab-bar order, wrapping around.
    #[must_use]
    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// The current filter selection, owned by the application state.
///
/// Created with defaults when the plugin loads, mutated in place by the event
/// handler, and discarded with the pane. Never persisted. Pages and components
/// receive it (or values derived from it) explicitly; there is no ambient
/// filter state, so independent plugin instances cannot interfere.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    /// Free-text search query; matched against titles after trimming.
    pub query: String,

    /// Selected district, or `None` for all districts.
    pub region: Option<District>,

    /// Selected capacity bucket; displayed but not applied.
    pub capacity: Option<CapacityBucket>,

    /// Selected date bucket; displayed but not applied.
    pub date: Option<DateBucket>,

    /// Active category tab.
    pub tab: CategoryTab,
}

impl FilterState {
    /// Returns the label shown on the region dropdown button.
    #[must_use]
    pub fn region_label(&self) -> &'static str {
        self.region.map_or(REGION_SENTINEL, District::label)
    }

    /// Returns the label shown on the capacity dropdown button.
    #[must_use]
    pub fn capacity_label(&self) -> &'static str {
        self.capacity.map_or(CAPACITY_SENTINEL, CapacityBucket::label)
    }

    /// Returns the label shown on the date dropdown button.
    #[must_use]
    pub fn date_label(&self) -> &'static str {
        self.date.map_or(DATE_SENTINEL, DateBucket::label)
    }
}

/// Reduces a catalog to the listings satisfying every active filter.
///
/// This is the filter engine: a pure conjunctive scan. Inactive filters impose
/// no constraint; the result preserves catalog order and may be empty (the
/// shell renders the empty-state placeholder in that case, which is a rendering
/// contract rather than an error).
///
/// Safe to recompute on every relevant state change: the effective inputs are
/// `(region, tab, query)`; capacity and date never affect the output.
///
/// # Examples
///
/// ```
/// use zspaces::domain::{filter_listings, FilterState, CategoryTab};
///
/// let state = FilterState { tab: CategoryTab::All, ..FilterState::default() };
/// let result = filter_listings(&[], &state);
/// assert!(result.is_empty());
/// ```
#[must_use]
pub fn filter_listings(listings: &[Listing], state: &FilterState) -> Vec<Listing> {
    let query = state.query.trim();
    let unit = state.tab.unit_constraint();

    listings
        .iter()
        .filter(|listing| {
            state
                .region
                .map_or(true, |region| listing.district == region.label())
                && unit.map_or(true, |unit| listing.unit == unit)
                && (query.is_empty() || listing.title.contains(query))
        })
        .cloned()
        .collect()
}

/// Returns the character-index ranges where the trimmed query occurs in `text`.
///
/// Used by the view model to underline query matches on card titles. Ranges are
/// `(start, end)` in character indices with exclusive end, non-overlapping, in
/// ascending order. An empty (trimmed) query yields no ranges.
#[must_use]
pub fn match_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
    let query = query.trim();
    if query.is_empty() {
        return Vec::new();
    }

    let query_chars = query.chars().count();
    let mut byte_to_char = std::collections::HashMap::new();
    for (char_idx, (byte_idx, _)) in text.char_indices().enumerate() {
        byte_to_char.insert(byte_idx, char_idx);
    }

    text.match_indices(query)
        .filter_map(|(byte_idx, _)| {
            byte_to_char
                .get(&byte_idx)
                .map(|&start| (start, start + query_chars))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample_listings;

    fn ids(listings: &[Listing]) -> Vec<&str> {
        listings.iter().map(|l| l.id.as_str()).collect()
    }

    fn is_subsequence(subset: &[Listing], superset: &[Listing]) -> bool {
        let mut iter = superset.iter();
        subset.iter().all(|item| iter.any(|other| other == item))
    }

    #[test]
    fn no_active_constraints_is_identity() {
        let catalog = sample_listings();
        let state = FilterState {
            tab: CategoryTab::All,
            ..FilterState::default()
        };

        assert_eq!(filter_listings(&catalog, &state), catalog);
    }

    #[test]
    fn default_tab_imposes_no_constraint() {
        // 베스트 공간 is the default tab and is intentionally unmapped.
        let catalog = sample_listings();
        let state = FilterState::default();

        assert_eq!(filter_listings(&catalog, &state), catalog);
    }

    #[test]
    fn result_is_order_preserving_subsequence() {
        let catalog = sample_listings();
        let states = [
            FilterState::default(),
            FilterState {
                region: Some(District::Gangnam),
                ..FilterState::default()
            },
            FilterState {
                query: "회의실".to_string(),
                ..FilterState::default()
            },
            FilterState {
                tab: CategoryTab::Package,
                ..FilterState::default()
            },
        ];

        for state in states {
            let result = filter_listings(&catalog, &state);
            assert!(is_subsequence(&result, &catalog), "state: {state:?}");
        }
    }

    #[test]
    fn adding_constraints_narrows_monotonically() {
        let catalog = sample_listings();

        let broad = FilterState {
            region: Some(District::Gangnam),
            tab: CategoryTab::All,
            ..FilterState::default()
        };
        let narrow = FilterState {
            region: Some(District::Gangnam),
            tab: CategoryTab::All,
            query: "루프탑".to_string(),
            ..FilterState::default()
        };

        let broad_result = filter_listings(&catalog, &broad);
        let narrow_result = filter_listings(&catalog, &narrow);

        assert!(narrow_result.iter().all(|l| broad_result.contains(l)));
        assert!(narrow_result.len() <= broad_result.len());
    }

    #[test]
    fn filtering_is_idempotent() {
        let catalog = sample_listings();
        let state = FilterState {
            region: Some(District::Gangnam),
            query: "강남".to_string(),
            ..FilterState::default()
        };

        let once = filter_listings(&catalog, &state);
        let twice = filter_listings(&once, &state);

        assert_eq!(once, twice);
    }

    #[test]
    fn query_is_trimmed_before_matching() {
        let catalog = sample_listings();

        let padded = FilterState {
            query: "  강남  ".to_string(),
            ..FilterState::default()
        };
        let trimmed = FilterState {
            query: "강남".to_string(),
            ..FilterState::default()
        };

        assert_eq!(
            filter_listings(&catalog, &padded),
            filter_listings(&catalog, &trimmed)
        );
    }

    #[test]
    fn region_filter_matches_district_exactly() {
        let catalog = sample_listings();
        let state = FilterState {
            region: Some(District::Gangnam),
            tab: CategoryTab::All,
            ..FilterState::default()
        };

        assert_eq!(ids(&filter_listings(&catalog, &state)), vec!["3", "5"]);
    }

    #[test]
    fn hourly_tab_keeps_all_hourly_sample_records() {
        // Every sample record is priced per hour.
        let catalog = sample_listings();
        let state = FilterState {
            tab: CategoryTab::Hourly,
            ..FilterState::default()
        };

        assert_eq!(filter_listings(&catalog, &state).len(), 5);
    }

    #[test]
    fn package_tab_excludes_hourly_records() {
        let catalog = sample_listings();
        let state = FilterState {
            tab: CategoryTab::Package,
            ..FilterState::default()
        };

        assert!(filter_listings(&catalog, &state).is_empty());
    }

    #[test]
    fn query_matches_title_substring() {
        let catalog = sample_listings();
        let state = FilterState {
            query: "이벤트".to_string(),
            ..FilterState::default()
        };

        assert_eq!(ids(&filter_listings(&catalog, &state)), vec!["2"]);
    }

    #[test]
    fn conjunction_can_produce_empty_result() {
        let catalog = sample_listings();
        let state = FilterState {
            region: Some(District::Seocho),
            query: "루프탑".to_string(),
            ..FilterState::default()
        };

        assert!(filter_listings(&catalog, &state).is_empty());
    }

    #[test]
    fn capacity_and_date_never_affect_output() {
        let catalog = sample_listings();
        let base = FilterState {
            region: Some(District::Gangnam),
            ..FilterState::default()
        };
        let with_inactive = FilterState {
            capacity: Some(CapacityBucket::FiveToEight),
            date: Some(DateBucket::NextWeek),
            ..base.clone()
        };

        assert_eq!(
            filter_listings(&catalog, &base),
            filter_listings(&catalog, &with_inactive)
        );
    }

    #[test]
    fn arguments_are_not_mutated() {
        let catalog = sample_listings();
        let before = catalog.clone();
        let state = FilterState {
            query: "이벤트".to_string(),
            ..FilterState::default()
        };

        let _ = filter_listings(&catalog, &state);

        assert_eq!(catalog, before);
        assert_eq!(state.query, "이벤트");
    }

    #[test]
    fn labels_parse_leniently() {
        assert_eq!(District::from_label("강남구"), Some(District::Gangnam));
        assert_eq!(District::from_label("부산광역시"), None);
        assert_eq!(District::from_label(REGION_SENTINEL), None);

        assert_eq!(CategoryTab::from_label("패키지"), CategoryTab::Package);
        assert_eq!(CategoryTab::from_label("no-such-tab"), CategoryTab::Best);

        assert_eq!(
            CapacityBucket::from_label("5~8"),
            Some(CapacityBucket::FiveToEight)
        );
        assert_eq!(CapacityBucket::from_label(""), None);
        assert_eq!(DateBucket::from_label("이번 주"), Some(DateBucket::ThisWeek));
    }

    #[test]
    fn tab_cycling_wraps_in_both_directions() {
        assert_eq!(CategoryTab::Best.next(), CategoryTab::All);
        assert_eq!(CategoryTab::All.prev(), CategoryTab::Best);
        assert_eq!(CategoryTab::Hourly.next(), CategoryTab::Package);
    }

    #[test]
    fn match_ranges_uses_character_indices() {
        // "강남" appears at character offsets 0 and 4 ("강남역_강남" would be 0 and 4);
        // here the title has a single occurrence past multibyte characters.
        let ranges = match_ranges("서울 강남 루프탑", "강남");
        assert_eq!(ranges, vec![(3, 5)]);

        assert!(match_ranges("서울 강남", "").is_empty());
        assert!(match_ranges("서울 강남", "   ").is_empty());

        let multi = match_ranges("강남, 또 강남", "강남");
        assert_eq!(multi, vec![(0, 2), (6, 8)]);
    }
}
