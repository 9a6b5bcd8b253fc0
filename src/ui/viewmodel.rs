//! View model types representing renderable UI state.
//!
//! This module defines immutable view models computed from application state,
//! following the MVVM pattern. View models are created via
//! `AppState::compute_viewmodel()` and consumed by the renderer; they contain no
//! business logic, only display-ready data such as pre-formatted labels and
//! match highlight ranges.

/// Complete UI view model for rendering one frame.
///
/// The shell chrome (header, filter bar, tab bar, footer) is always present;
/// the page body varies by route and load state, and the overlays (search box,
/// picker dropdown, drawer panel) are optional.
#[derive(Debug, Clone)]
pub struct UiViewModel {
    /// Header bar (brand and page title).
    pub header: HeaderInfo,

    /// Filter bar with the three dropdown buttons.
    pub filter_bar: FilterBarInfo,

    /// Category tab bar.
    pub tab_bar: TabBarInfo,

    /// Search input box (when in search mode).
    pub search_bar: Option<SearchBarInfo>,

    /// Page body for the active route.
    pub page: PageView,

    /// Open filter dropdown (when in picker mode).
    pub picker: Option<PickerInfo>,

    /// Slide-out navigation drawer (when open).
    pub drawer: Option<DrawerInfo>,

    /// Footer keybinding hints.
    pub footer: FooterInfo,
}

/// Body content of the active route.
#[derive(Debug, Clone)]
pub enum PageView {
    /// The route leaf has not loaded yet; render the loading placeholder.
    Loading {
        /// Placeholder text (`Loading ....`).
        message: String,
    },

    /// Listing cards for the browse page.
    Cards {
        /// Visible window of cards.
        items: Vec<CardItem>,

        /// Index of the selected card within the visible window.
        selected_index: usize,
    },

    /// The browse page matched nothing; render the empty-state placeholder.
    Empty(EmptyState),

    /// Notice entries for the notice page.
    Notices {
        /// Notices, newest first.
        items: Vec<NoticeItem>,
    },
}

/// Display information for a single listing card.
///
/// All labels are pre-formatted; `highlight_ranges` marks query matches in the
/// title as `(start, end)` character ranges with exclusive end.
#[derive(Debug, Clone)]
pub struct CardItem {
    /// Listing title.
    pub title: String,

    /// District label.
    pub district: String,

    /// First three tags.
    pub tags: Vec<String>,

    /// Formatted price line (최저 N원/단위).
    pub price: String,

    /// Formatted like/view counters.
    pub stats: String,

    /// First image URL (truncated by the renderer as needed).
    pub image: String,

    /// Whether this card is currently selected.
    pub is_selected: bool,

    /// Character ranges of query matches in the title.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Display information for a single notice entry.
#[derive(Debug, Clone)]
pub struct NoticeItem {
    /// Notice title.
    pub title: String,

    /// Formatted posted date (YYYY.MM.DD).
    pub date: String,

    /// Notice body text.
    pub body: String,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Brand text (left aligned).
    pub brand: String,

    /// Page title with result count, e.g. `프리미엄존 (5)`.
    pub title: String,
}

/// Filter bar display information.
///
/// Each button shows either the selected value or its sentinel label; the
/// `*_selected` flags let the renderer dim sentinel labels like the site does.
#[derive(Debug, Clone)]
pub struct FilterBarInfo {
    pub region: String,
    pub region_selected: bool,
    pub capacity: String,
    pub capacity_selected: bool,
    pub date: String,
    pub date_selected: bool,
}

/// One entry in the category tab bar.
#[derive(Debug, Clone)]
pub struct TabItem {
    /// Tab label.
    pub label: String,

    /// Whether this tab is active.
    pub is_active: bool,
}

/// Category tab bar display information.
#[derive(Debug, Clone)]
pub struct TabBarInfo {
    /// Tabs in display order.
    pub tabs: Vec<TabItem>,
}

/// Open filter dropdown display information.
#[derive(Debug, Clone)]
pub struct PickerInfo {
    /// Dropdown title (the sentinel label of the filter).
    pub title: String,

    /// Selectable entries; the first is always the sentinel ("unselect").
    pub items: Vec<String>,

    /// Index of the highlighted entry.
    pub selected_index: usize,
}

/// Slide-out drawer display information.
///
/// The drawer content is static navigation chrome; it is still carried through
/// the view model so the renderer stays free of domain strings.
#[derive(Debug, Clone)]
pub struct DrawerInfo {
    /// Account banner text.
    pub account: String,

    /// Icon shortcut entries (events, reservations, reviews, favourites).
    pub shortcuts: Vec<String>,

    /// Section heading rendered between shortcuts and links.
    pub section: String,

    /// Navigation link entries.
    pub links: Vec<String>,

    /// Footer credit line.
    pub powered_by: String,
}

/// Empty state message display information.
#[derive(Debug, Clone)]
pub struct EmptyState {
    /// Primary message (조건에 맞는 공간이 없습니다.).
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

/// Search box display information.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    /// Current search query text.
    pub query: String,

    /// Input placeholder shown while the query is empty.
    pub placeholder: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text.
    pub keybindings: String,
}
