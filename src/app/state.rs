//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the plugin.
//! It owns the filter state, the loaded route leaves, the derived card list, and
//! all transient UI state (selection, input mode, drawer flag), and it computes
//! the immutable view models consumed by the renderer.
//!
//! # Architecture
//!
//! `AppState` separates source data (the catalog and notice leaves) from derived
//! state (filtered listings, selection index). The filter state has exactly one
//! writer, the event handler mutating this struct, and every render reads a
//! consistent snapshot. Nothing here is ambient or global: independent
//! `AppState` values never interfere, which the tests rely on.
//!
//! # Filtering
//!
//! `apply_filters` re-runs the pure filter engine over the catalog leaf. Only
//! the effective filter inputs (region, tab, query) warrant a call; capacity and
//! date selections update dropdown labels without re-filtering, since they never
//! affect the result.

use crate::app::modes::{InputMode, PickerKind, SearchFocus};
use crate::app::router::{Leaf, Route, LOADING_PLACEHOLDER};
use crate::domain::filter::{
    filter_listings, match_ranges, CapacityBucket, DateBucket, District, FilterState,
    CAPACITY_SENTINEL, DATE_SENTINEL, REGION_SENTINEL,
};
use crate::domain::listing::{Listing, Notice};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    CardItem, DrawerInfo, EmptyState, FilterBarInfo, FooterInfo, HeaderInfo, NoticeItem, PageView,
    PickerInfo, SearchBarInfo, TabBarInfo, TabItem, UiViewModel,
};

/// Rows occupied by one card (two content lines plus a separator).
const ROWS_PER_CARD: usize = 3;

/// Search input placeholder, matching the site's header search box.
const SEARCH_PLACEHOLDER: &str = "촬영·스터디룸";

/// Central application state container.
///
/// Created once at plugin load with defaults (empty query, unselected region /
/// capacity / date, 베스트 공간 tab, drawer closed, listings route) and mutated
/// only by the event handler. Discarded with the pane; never persisted.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Listing catalog leaf, loaded by the worker.
    pub catalog: Leaf<Vec<Listing>>,

    /// Notice feed leaf, loaded by the worker.
    pub notices: Leaf<Vec<Notice>>,

    /// Listings matching the current filter state, in catalog order.
    ///
    /// Recomputed by `apply_filters()` after relevant state changes. Used for
    /// rendering and selection bounds checking.
    pub filtered_listings: Vec<Listing>,

    /// Zero-based index of the selected card within `filtered_listings`.
    ///
    /// Clamped by `apply_filters()`; wraps around during navigation.
    pub selected_index: usize,

    /// The current filter selection.
    pub filters: FilterState,

    /// Current input handling mode.
    pub input_mode: InputMode,

    /// Highlighted entry within the open picker dropdown.
    pub picker_index: usize,

    /// Whether the slide-out drawer is open. Closed is the initial state.
    pub menu_open: bool,

    /// Active route.
    pub route: Route,

    /// Color scheme for UI rendering.
    pub theme: Theme,
}

impl AppState {
    /// Creates a new application state with the given theme and default filters.
    ///
    /// Both route leaves start pending; the worker populates them after plugin
    /// load. The default tab can be overridden afterwards via configuration.
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self {
            catalog: Leaf::Pending,
            notices: Leaf::Pending,
            filtered_listings: Vec::new(),
            selected_index: 0,
            filters: FilterState::default(),
            input_mode: InputMode::Normal,
            picker_index: 0,
            menu_open: false,
            route: Route::Listings,
            theme,
        }
    }

    /// Moves card selection down by one position, wrapping to the top.
    ///
    /// No-op if the filtered list is empty.
    pub fn move_selection_down(&mut self) {
        if self.filtered_listings.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.filtered_listings.len();
    }

    /// Moves card selection up by one position, wrapping to the bottom.
    ///
    /// No-op if the filtered list is empty.
    pub fn move_selection_up(&mut self) {
        if self.filtered_listings.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.filtered_listings.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Moves the picker highlight down by one entry, wrapping.
    pub fn move_picker_down(&mut self) {
        let len = self.open_picker_len();
        if len > 0 {
            self.picker_index = (self.picker_index + 1) % len;
        }
    }

    /// Moves the picker highlight up by one entry, wrapping.
    pub fn move_picker_up(&mut self) {
        let len = self.open_picker_len();
        if len > 0 {
            self.picker_index = (self.picker_index + len - 1) % len;
        }
    }

    /// Returns the entry count of the open picker, or 0 when no picker is open.
    fn open_picker_len(&self) -> usize {
        match self.input_mode {
            InputMode::Picker(kind) => Self::picker_items(kind).len(),
            _ => 0,
        }
    }

    /// Returns the dropdown entries for a picker, sentinel first.
    #[must_use]
    pub fn picker_items(kind: PickerKind) -> Vec<&'static str> {
        match kind {
            PickerKind::Region => std::iter::once(REGION_SENTINEL)
                .chain(District::ALL.iter().map(|d| d.label()))
                .collect(),
            PickerKind::Capacity => std::iter::once(CAPACITY_SENTINEL)
                .chain(CapacityBucket::ALL.iter().map(|b| b.label()))
                .collect(),
            PickerKind::Date => std::iter::once(DATE_SENTINEL)
                .chain(DateBucket::ALL.iter().map(|b| b.label()))
                .collect(),
        }
    }

    /// Opens a picker dropdown with the highlight on the current selection.
    pub fn open_picker(&mut self, kind: PickerKind) {
        let position = match kind {
            PickerKind::Region => self
                .filters
                .region
                .and_then(|d| District::ALL.iter().position(|x| *x == d)),
            PickerKind::Capacity => self
                .filters
                .capacity
                .and_then(|b| CapacityBucket::ALL.iter().position(|x| *x == b)),
            PickerKind::Date => self
                .filters
                .date
                .and_then(|b| DateBucket::ALL.iter().position(|x| *x == b)),
        };

        // Entry 0 is the sentinel; selected options sit at position + 1.
        self.picker_index = position.map_or(0, |p| p + 1);
        self.input_mode = InputMode::Picker(kind);
    }

    /// Commits the highlighted picker entry into the filter state.
    ///
    /// Returns `true` when the committed filter affects the result set (only
    /// the region does); capacity and date update their labels without
    /// requiring a re-filter.
    pub fn commit_picker(&mut self, kind: PickerKind) -> bool {
        let choice = self.picker_index.checked_sub(1);

        match kind {
            PickerKind::Region => {
                let region = choice.and_then(|i| District::ALL.get(i).copied());
                let changed = self.filters.region != region;
                self.filters.region = region;
                changed
            }
            PickerKind::Capacity => {
                self.filters.capacity = choice.and_then(|i| CapacityBucket::ALL.get(i).copied());
                false
            }
            PickerKind::Date => {
                self.filters.date = choice.and_then(|i| DateBucket::ALL.get(i).copied());
                false
            }
        }
    }

    /// Re-runs the filter engine over the catalog leaf.
    ///
    /// Updates `filtered_listings` and clamps `selected_index` to valid bounds.
    /// A pending catalog yields an empty list.
    pub fn apply_filters(&mut self) {
        let _span = tracing::debug_span!(
            "apply_filters",
            query_len = self.filters.query.len(),
            region = self.filters.region_label(),
            tab = self.filters.tab.label()
        )
        .entered();

        self.filtered_listings = self
            .catalog
            .ready()
            .map_or_else(Vec::new, |listings| filter_listings(listings, &self.filters));

        if self.filtered_listings.is_empty() {
            self.selected_index = 0;
        } else {
            self.selected_index = self.selected_index.min(self.filtered_listings.len() - 1);
        }

        tracing::debug!(
            filtered_count = self.filtered_listings.len(),
            "filters applied"
        );
    }

    /// Computes a renderable view model from current state and pane dimensions.
    ///
    /// Handles windowing (showing a subset of cards centered on the selection),
    /// query match highlighting, and the loading / empty placeholders.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UiViewModel {
        UiViewModel {
            header: self.compute_header(),
            filter_bar: self.compute_filter_bar(),
            tab_bar: self.compute_tab_bar(),
            search_bar: self.compute_search_bar(),
            page: self.compute_page(rows, cols),
            picker: self.compute_picker(),
            drawer: self.compute_drawer(),
            footer: self.compute_footer(),
        }
    }

    /// Computes the body of the active route.
    fn compute_page(&self, rows: usize, _cols: usize) -> PageView {
        match self.route {
            Route::Listings => {
                if self.catalog.is_pending() {
                    return PageView::Loading {
                        message: LOADING_PLACEHOLDER.to_string(),
                    };
                }
                if self.filtered_listings.is_empty() {
                    return PageView::Empty(EmptyState {
                        message: "조건에 맞는 공간이 없습니다.".to_string(),
                        subtitle: "필터를 바꾸거나 검색어를 지워보세요".to_string(),
                    });
                }
                self.compute_cards(rows)
            }
            Route::Notice => self.notices.ready().map_or_else(
                || PageView::Loading {
                    message: LOADING_PLACEHOLDER.to_string(),
                },
                |notices| PageView::Notices {
                    items: notices
                        .iter()
                        .map(|n| NoticeItem {
                            title: n.title.clone(),
                            date: n.date_label(),
                            body: n.body.clone(),
                        })
                        .collect(),
                },
            ),
        }
    }

    /// Computes the visible card window centered on the selection.
    fn compute_cards(&self, rows: usize) -> PageView {
        let available_cards = self.calculate_available_cards(rows).max(1);

        let mut visible_start = self
            .selected_index
            .saturating_sub(available_cards / 2);
        let visible_end = (visible_start + available_cards).min(self.filtered_listings.len());

        let actual_count = visible_end - visible_start;
        if actual_count < available_cards && self.filtered_listings.len() >= available_cards {
            visible_start = visible_end.saturating_sub(available_cards);
        }

        let query = self.filters.query.trim();

        let items: Vec<CardItem> = self.filtered_listings[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, listing)| {
                let absolute_idx = visible_start + relative_idx;
                CardItem {
                    title: listing.title.clone(),
                    district: listing.district.clone(),
                    tags: listing.display_tags().to_vec(),
                    price: listing.price_label(),
                    stats: listing.stats_label(),
                    image: listing.cover_image().to_string(),
                    is_selected: absolute_idx == self.selected_index,
                    highlight_ranges: if query.is_empty() {
                        Vec::new()
                    } else {
                        match_ranges(&listing.title, query)
                    },
                }
            })
            .collect();

        PageView::Cards {
            items,
            selected_index: self.selected_index.saturating_sub(visible_start),
        }
    }

    /// Number of cards that fit after subtracting UI chrome.
    ///
    /// Chrome is 8 rows normally (blank, header, two borders, filter bar, tab
    /// bar, bottom border, footer) and 11 with the search box open.
    const fn calculate_available_cards(&self, total_rows: usize) -> usize {
        let chrome = match self.input_mode {
            InputMode::Search(_) => 11,
            InputMode::Normal | InputMode::Picker(_) => 8,
        };
        total_rows.saturating_sub(chrome) / ROWS_PER_CARD
    }

    /// Computes header branding and page title.
    fn compute_header(&self) -> HeaderInfo {
        let title = match self.route {
            Route::Listings => {
                format!("{} ({})", self.route.title(), self.filtered_listings.len())
            }
            Route::Notice => self.route.title().to_string(),
        };

        HeaderInfo {
            brand: "SpaceCloud.".to_string(),
            title,
        }
    }

    /// Computes the filter bar labels.
    fn compute_filter_bar(&self) -> FilterBarInfo {
        FilterBarInfo {
            region: self.filters.region_label().to_string(),
            region_selected: self.filters.region.is_some(),
            capacity: self.filters.capacity_label().to_string(),
            capacity_selected: self.filters.capacity.is_some(),
            date: self.filters.date_label().to_string(),
            date_selected: self.filters.date.is_some(),
        }
    }

    /// Computes the category tab bar.
    fn compute_tab_bar(&self) -> TabBarInfo {
        TabBarInfo {
            tabs: crate::domain::filter::CategoryTab::ALL
                .iter()
                .map(|tab| TabItem {
                    label: tab.label().to_string(),
                    is_active: *tab == self.filters.tab,
                })
                .collect(),
        }
    }

    /// Computes the search box state if in search mode.
    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        if matches!(self.input_mode, InputMode::Search(_)) {
            Some(SearchBarInfo {
                query: self.filters.query.clone(),
                placeholder: SEARCH_PLACEHOLDER.to_string(),
            })
        } else {
            None
        }
    }

    /// Computes the open picker dropdown, if any.
    fn compute_picker(&self) -> Option<PickerInfo> {
        let InputMode::Picker(kind) = self.input_mode else {
            return None;
        };

        let title = match kind {
            PickerKind::Region => REGION_SENTINEL,
            PickerKind::Capacity => CAPACITY_SENTINEL,
            PickerKind::Date => DATE_SENTINEL,
        };

        Some(PickerInfo {
            title: title.to_string(),
            items: Self::picker_items(kind)
                .into_iter()
                .map(str::to_string)
                .collect(),
            selected_index: self.picker_index,
        })
    }

    /// Computes the drawer panel when the menu is open.
    fn compute_drawer(&self) -> Option<DrawerInfo> {
        if !self.menu_open {
            return None;
        }

        Some(DrawerInfo {
            account: "게스트로 로그인 / 회원가입".to_string(),
            shortcuts: vec![
                "이벤트".to_string(),
                "예약 리스트".to_string(),
                "이용후기 Q&A".to_string(),
                "찜한공간".to_string(),
            ],
            section: "내 관심정보 설정".to_string(),
            links: vec![
                "스페이스클라우드 홈".to_string(),
                "공지사항".to_string(),
                "도움말".to_string(),
                "1:1 문의".to_string(),
                "서비스 정보".to_string(),
            ],
            powered_by: "Powered by © NSPACE Corp.".to_string(),
        })
    }

    /// Computes footer keybinding hints for the current mode combination.
    fn compute_footer(&self) -> FooterInfo {
        let keybindings = if self.menu_open {
            "ESC or m: close menu".to_string()
        } else {
            match (self.input_mode, self.route) {
                (InputMode::Search(SearchFocus::Typing), _) => {
                    "ESC: exit search  Enter: browse results  Type to filter".to_string()
                }
                (InputMode::Search(SearchFocus::Navigating), _) => {
                    "ESC: exit search  /: edit query  j/k: navigate".to_string()
                }
                (InputMode::Picker(_), _) => {
                    "j/k: choose  Enter: apply  ESC: dismiss".to_string()
                }
                (InputMode::Normal, Route::Listings) => {
                    "j/k: navigate  Tab: category  /: search  r/p/d: filters  m: menu  n: notices  q: quit"
                        .to_string()
                }
                (InputMode::Normal, Route::Notice) => {
                    "b: back to listings  m: menu  q: quit".to_string()
                }
            }
        };

        FooterInfo { keybindings }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample_listings;
    use crate::domain::filter::CategoryTab;

    fn ready_state() -> AppState {
        let mut state = AppState::new(Theme::default());
        state.catalog = Leaf::Ready(sample_listings());
        state.apply_filters();
        state
    }

    #[test]
    fn initial_state_has_defaults() {
        let state = AppState::new(Theme::default());

        assert!(!state.menu_open, "drawer starts closed");
        assert!(state.catalog.is_pending());
        assert_eq!(state.route, Route::Listings);
        assert_eq!(state.filters, FilterState::default());
        assert_eq!(state.filters.tab, CategoryTab::Best);
    }

    #[test]
    fn selection_wraps_in_both_directions() {
        let mut state = ready_state();
        assert_eq!(state.filtered_listings.len(), 5);

        state.move_selection_up();
        assert_eq!(state.selected_index, 4);
        state.move_selection_down();
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn apply_filters_clamps_selection() {
        let mut state = ready_state();
        state.selected_index = 4;

        state.filters.region = Some(District::Gangnam);
        state.apply_filters();

        assert_eq!(state.filtered_listings.len(), 2);
        assert_eq!(state.selected_index, 1);
    }

    #[test]
    fn pending_catalog_renders_loading_placeholder() {
        let state = AppState::new(Theme::default());
        let vm = state.compute_viewmodel(24, 80);

        assert!(matches!(
            vm.page,
            PageView::Loading { ref message } if message == LOADING_PLACEHOLDER
        ));
    }

    #[test]
    fn empty_result_renders_empty_state_not_cards() {
        let mut state = ready_state();
        state.filters.region = Some(District::Seocho);
        state.filters.query = "루프탑".to_string();
        state.apply_filters();

        let vm = state.compute_viewmodel(24, 80);

        match vm.page {
            PageView::Empty(empty) => {
                assert_eq!(empty.message, "조건에 맞는 공간이 없습니다.");
            }
            other => panic!("expected empty state, got {other:?}"),
        }
    }

    #[test]
    fn cards_window_marks_the_selected_card() {
        let mut state = ready_state();
        state.selected_index = 2;

        let vm = state.compute_viewmodel(24, 80);

        match vm.page {
            PageView::Cards { items, selected_index } => {
                assert!(!items.is_empty());
                assert!(items[selected_index].is_selected);
                assert_eq!(items[selected_index].title, "강남루프탑_스튜디오 겸 라운지");
            }
            other => panic!("expected cards, got {other:?}"),
        }
    }

    #[test]
    fn card_titles_carry_match_ranges_for_the_query() {
        let mut state = ready_state();
        state.filters.query = "이벤트".to_string();
        state.apply_filters();

        let vm = state.compute_viewmodel(24, 80);

        match vm.page {
            PageView::Cards { items, .. } => {
                assert_eq!(items.len(), 1);
                assert!(!items[0].highlight_ranges.is_empty());
            }
            other => panic!("expected cards, got {other:?}"),
        }
    }

    #[test]
    fn tiny_panes_still_show_one_card() {
        let state = ready_state();
        let vm = state.compute_viewmodel(5, 40);

        assert!(matches!(
            vm.page,
            PageView::Cards { ref items, .. } if items.len() == 1
        ));
    }

    #[test]
    fn picker_opens_on_current_selection() {
        let mut state = ready_state();
        state.filters.region = Some(District::Mapo);

        state.open_picker(PickerKind::Region);

        assert_eq!(state.input_mode, InputMode::Picker(PickerKind::Region));
        assert_eq!(state.picker_index, 3); // sentinel, 강남구, 서초구, 마포구
    }

    #[test]
    fn committing_the_sentinel_clears_the_region() {
        let mut state = ready_state();
        state.filters.region = Some(District::Mapo);

        state.open_picker(PickerKind::Region);
        state.picker_index = 0;
        let needs_refilter = state.commit_picker(PickerKind::Region);

        assert!(needs_refilter);
        assert_eq!(state.filters.region, None);
    }

    #[test]
    fn capacity_and_date_commits_do_not_request_refilter() {
        let mut state = ready_state();

        state.open_picker(PickerKind::Capacity);
        state.picker_index = 2;
        assert!(!state.commit_picker(PickerKind::Capacity));
        assert_eq!(state.filters.capacity, Some(CapacityBucket::FiveToEight));

        state.open_picker(PickerKind::Date);
        state.picker_index = 1;
        assert!(!state.commit_picker(PickerKind::Date));
        assert_eq!(state.filters.date, Some(DateBucket::Today));
    }

    #[test]
    fn filter_bar_dims_sentinels_and_shows_selections() {
        let mut state = ready_state();
        state.filters.region = Some(District::Gwanak);

        let vm = state.compute_viewmodel(24, 80);

        assert_eq!(vm.filter_bar.region, "관악구");
        assert!(vm.filter_bar.region_selected);
        assert_eq!(vm.filter_bar.capacity, CAPACITY_SENTINEL);
        assert!(!vm.filter_bar.capacity_selected);
    }

    #[test]
    fn header_counts_filtered_listings() {
        let mut state = ready_state();
        state.filters.region = Some(District::Gangnam);
        state.apply_filters();

        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.header.title, "프리미엄존 (2)");
    }

    #[test]
    fn notice_route_renders_notices_when_ready() {
        let mut state = ready_state();
        state.route = Route::Notice;

        let pending = state.compute_viewmodel(24, 80);
        assert!(matches!(pending.page, PageView::Loading { .. }));

        state.notices = Leaf::Ready(vec![Notice {
            id: "n1".to_string(),
            title: "점검 안내".to_string(),
            body: "본문".to_string(),
            posted_at: 1_755_302_400,
        }]);

        let ready = state.compute_viewmodel(24, 80);
        match ready.page {
            PageView::Notices { items } => {
                assert_eq!(items.len(), 1);
                assert_eq!(items[0].date, "2025.08.16");
            }
            other => panic!("expected notices, got {other:?}"),
        }
    }

    #[test]
    fn independent_states_do_not_interfere() {
        let mut first = ready_state();
        let second = ready_state();

        first.filters.query = "강남".to_string();
        first.apply_filters();

        assert_eq!(second.filters.query, "");
        assert_eq!(second.filtered_listings.len(), 5);
    }
}
