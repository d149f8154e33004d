//! Presentation helpers shared by the TUI and headless output.

use crate::types::Item;

/// Star breakdown for a 0–5 rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarRating {
    pub full: u8,
    pub half: bool,
    pub empty: u8,
}

impl StarRating {
    /// `full = floor(r)`, a half star when the fraction is at least 0.5, and
    /// `empty = 5 - ceil(r)`. Out-of-range and NaN ratings are clamped.
    pub fn from_rating(rating: f32) -> Self {
        let r = if rating.is_nan() { 0.0 } else { rating.clamp(0.0, 5.0) };
        let full = r.floor();
        Self {
            full: full as u8,
            half: r - full >= 0.5,
            empty: (5.0 - r.ceil()) as u8,
        }
    }

    /// `★★★★½☆`-style rendering.
    pub fn render(&self) -> String {
        let mut s = "★".repeat(self.full as usize);
        if self.half {
            s.push('½');
        }
        s.push_str(&"☆".repeat(self.empty as usize));
        s
    }
}

pub fn format_price(price: f64) -> String {
    format!("${price:.2}")
}

/// One-line summary used by headless text output.
pub fn item_line(item: &Item) -> String {
    format!(
        "{:>4}  {:<40}  {:<16}  {:<12}  {:>9}  {}",
        item.id,
        item.title,
        item.brand,
        item.category,
        format_price(item.price),
        item.rating,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_star() {
        let s = StarRating::from_rating(4.5);
        assert_eq!(s, StarRating { full: 4, half: true, empty: 0 });
        assert_eq!(s.render(), "★★★★½");
    }

    #[test]
    fn fraction_below_half_rounds_down_but_leaves_no_empty_slot() {
        // ceil(4.2) = 5 so no empty star is drawn
        let s = StarRating::from_rating(4.2);
        assert_eq!(s, StarRating { full: 4, half: false, empty: 0 });
    }

    #[test]
    fn whole_and_clamped() {
        assert_eq!(StarRating::from_rating(3.0).render(), "★★★☆☆");
        assert_eq!(StarRating::from_rating(9.0).render(), "★★★★★");
        assert_eq!(StarRating::from_rating(-1.0).render(), "☆☆☆☆☆");
    }

    #[test]
    fn price_two_decimals() {
        assert_eq!(format_price(5.0), "$5.00");
        assert_eq!(format_price(129.99), "$129.99");
    }
}
