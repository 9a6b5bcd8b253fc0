//! Listing and notice domain models.
//!
//! This module defines the core [`Listing`] type representing a rentable space
//! in the catalog, its [`PriceUnit`] pricing interval, and the [`Notice`] entries
//! shown on the notice page. Records are immutable once loaded; the `likes` and
//! `views` counters are display-only and never mutated by the plugin.

use serde::{Deserialize, Serialize};

/// Number of digits grouped per thousands separator in price formatting.
const PRICE_GROUP: usize = 3;

/// Pricing interval for a listing.
///
/// Serialized with the catalog's Korean labels so the embedded data matches the
/// upstream record format (`"시간"`, `"일"`, `"패키지"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriceUnit {
    /// Hourly pricing (원/시간).
    #[serde(rename = "시간")]
    Hour,

    /// Daily pricing (원/일).
    #[serde(rename = "일")]
    Day,

    /// Package pricing (원/패키지).
    #[serde(rename = "패키지")]
    Package,
}

impl PriceUnit {
    /// Returns the display label used in price strings and card rendering.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hour => "시간",
            Self::Day => "일",
            Self::Package => "패키지",
        }
    }
}

/// Represents a rentable space in the catalog.
///
/// A listing is one browsable card in the result grid. Records are validated by
/// the catalog source on load: `images` must be non-empty and `id` unique within
/// the catalog. Only the first image is displayed; only the first three tags are
/// shown on a card.
///
/// # Fields
///
/// - `id`: unique, stable identifier within the catalog
/// - `title`: display name, possibly carrying a promotional bracketed prefix
/// - `district`: region label from the closed set used by the region filter
/// - `tags`: ordered descriptive labels
/// - `price`: non-negative minor-unit currency amount (원)
/// - `unit`: pricing interval
/// - `images`: ordered image URLs, at least one
/// - `likes` / `views`: display-only counters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub district: String,
    pub tags: Vec<String>,
    pub price: u32,
    pub unit: PriceUnit,
    pub images: Vec<String>,
    pub likes: u32,
    pub views: u32,
}

impl Listing {
    /// Returns the formatted price line for card rendering.
    ///
    /// Format: `최저 {price}원/{unit}` with thousands separators, matching the
    /// listing site's card footer (e.g. `최저 1,000원/시간`).
    ///
    /// # Examples
    ///
    /// ```
    /// use zspaces::domain::{Listing, PriceUnit};
    ///
    /// let listing = Listing {
    ///     id: "1".into(),
    ///     title: "강남역_스테디룸A(화이트톤)".into(),
    ///     district: "서초구".into(),
    ///     tags: vec!["냉난방".into()],
    ///     price: 1000,
    ///     unit: PriceUnit::Hour,
    ///     images: vec!["https://example.com/a.jpg".into()],
    ///     likes: 912,
    ///     views: 606,
    /// };
    /// assert_eq!(listing.price_label(), "최저 1,000원/시간");
    /// ```
    #[must_use]
    pub fn price_label(&self) -> String {
        format!("최저 {}원/{}", format_grouped(self.price), self.unit.label())
    }

    /// Returns the like/view counter line for card rendering.
    #[must_use]
    pub fn stats_label(&self) -> String {
        format!("♥ {} · 조회 {}", self.likes, self.views)
    }

    /// Returns the first (representative) image URL.
    ///
    /// The catalog source guarantees `images` is non-empty, so this falls back
    /// to an empty string only for records constructed outside the source.
    #[must_use]
    pub fn cover_image(&self) -> &str {
        self.images.first().map_or("", String::as_str)
    }

    /// Returns at most the first three tags for card display.
    #[must_use]
    pub fn display_tags(&self) -> &[String] {
        let end = self.tags.len().min(3);
        &self.tags[..end]
    }
}

/// Formats a non-negative amount with comma thousands separators.
fn format_grouped(amount: u32) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / PRICE_GROUP);

    let offset = digits.len() % PRICE_GROUP;
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (i + PRICE_GROUP - offset) % PRICE_GROUP == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    grouped
}

/// A service notice shown on the notice page.
///
/// Notices are loaded by the worker alongside the catalog and rendered as a
/// dated list. `posted_at` is a unix timestamp formatted on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub id: String,
    pub title: String,
    pub body: String,
    pub posted_at: i64,
}

impl Notice {
    /// Returns the posted date formatted as `YYYY.MM.DD`.
    ///
    /// Timestamps outside the representable range render as a dash rather than
    /// failing, since notice metadata must never break the page.
    #[must_use]
    pub fn date_label(&self) -> String {
        chrono::DateTime::from_timestamp(self.posted_at, 0)
            .map_or_else(|| "-".to_string(), |dt| dt.format("%Y.%m.%d").to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(price: u32, unit: PriceUnit) -> Listing {
        Listing {
            id: "1".to_string(),
            title: "강남역_스테디룸A(화이트톤)".to_string(),
            district: "서초구".to_string(),
            tags: vec![
                "냉난방".to_string(),
                "배달가능".to_string(),
                "주차".to_string(),
                "TV".to_string(),
            ],
            price,
            unit,
            images: vec!["https://example.com/a.jpg".to_string()],
            likes: 912,
            views: 606,
        }
    }

    #[test]
    fn price_label_groups_thousands() {
        assert_eq!(listing(1000, PriceUnit::Hour).price_label(), "최저 1,000원/시간");
        assert_eq!(listing(500, PriceUnit::Day).price_label(), "최저 500원/일");
        assert_eq!(
            listing(1_250_000, PriceUnit::Package).price_label(),
            "최저 1,250,000원/패키지"
        );
        assert_eq!(listing(0, PriceUnit::Hour).price_label(), "최저 0원/시간");
    }

    #[test]
    fn display_tags_caps_at_three() {
        let l = listing(1000, PriceUnit::Hour);
        assert_eq!(l.display_tags().len(), 3);
        assert_eq!(l.display_tags()[0], "냉난방");
    }

    #[test]
    fn unit_round_trips_through_korean_labels() {
        let json = serde_json::to_string(&PriceUnit::Hour).unwrap();
        assert_eq!(json, "\"시간\"");
        let unit: PriceUnit = serde_json::from_str("\"패키지\"").unwrap();
        assert_eq!(unit, PriceUnit::Package);
    }

    #[test]
    fn notice_date_label_formats_timestamp() {
        let notice = Notice {
            id: "n1".to_string(),
            title: "점검 안내".to_string(),
            body: String::new(),
            posted_at: 1_755_000_000, // 2025-08-12 UTC
        };
        assert_eq!(notice.date_label(), "2025.08.12");
    }
}
