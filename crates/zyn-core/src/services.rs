//! Services page — category buttons and a search box that narrow the same
//! list together.
//!
//! Unlike the shop, where a category tab and a search replace each other,
//! here a card is shown only when it passes *both* the active button and the
//! query.

use crate::search::ALL;
use crate::types::Service;

#[derive(Debug, Clone)]
pub struct ServicesState {
    services: Vec<Service>,
    /// Active category button, lower-cased. `"all"` shows every category.
    pub filter: String,
    /// Raw query as typed.
    pub query: String,
}

impl ServicesState {
    pub fn new(services: Vec<Service>) -> Self {
        Self { services, filter: ALL.to_string(), query: String::new() }
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    /// Filter buttons: `"all"` then each distinct category in first-seen order.
    pub fn categories(&self) -> Vec<String> {
        let mut out = vec![ALL.to_string()];
        for s in &self.services {
            let cat = s.category.to_lowercase();
            if !cat.is_empty() && !out.contains(&cat) {
                out.push(cat);
            }
        }
        out
    }

    pub fn set_filter(&mut self, filter: &str) {
        self.filter = filter.trim().to_lowercase();
        if self.filter.is_empty() {
            self.filter = ALL.to_string();
        }
        tracing::debug!(filter = %self.filter, "services: filter");
    }

    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
        tracing::debug!(query = %self.query, "services: query");
    }

    /// Escape in the search box.
    pub fn clear_query(&mut self) {
        self.query.clear();
    }

    pub fn visible(&self) -> Vec<&Service> {
        filter_services(&self.filter, &self.query, &self.services)
    }
}

/// Cards whose category equals `filter` (or any, for `"all"`) and whose title
/// or description contains the trimmed, lower-cased `query`.
pub fn filter_services<'a>(filter: &str, query: &str, services: &'a [Service]) -> Vec<&'a Service> {
    let filter = filter.trim().to_lowercase();
    let query = query.trim().to_lowercase();
    services
        .iter()
        .filter(|s| filter.is_empty() || filter == ALL || s.category.to_lowercase() == filter)
        .filter(|s| {
            query.is_empty()
                || s.title.to_lowercase().contains(&query)
                || s.description.to_lowercase().contains(&query)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(title: &str, description: &str, category: &str) -> Service {
        Service {
            title: title.to_string(),
            description: description.to_string(),
            category: category.to_string(),
        }
    }

    fn sample() -> Vec<Service> {
        vec![
            service("Web Development", "Sites and apps", "development"),
            service("Brand Identity", "Logos for the web", "design"),
            service("SEO", "Rank higher", "marketing"),
        ]
    }

    fn titles(v: &[&Service]) -> Vec<String> {
        v.iter().map(|s| s.title.clone()).collect()
    }

    #[test]
    fn all_and_empty_query_shows_everything() {
        let state = ServicesState::new(sample());
        assert_eq!(state.visible().len(), 3);
    }

    #[test]
    fn filter_and_query_intersect() {
        let mut state = ServicesState::new(sample());
        state.set_query("web");
        assert_eq!(titles(&state.visible()), vec!["Web Development", "Brand Identity"]);
        state.set_filter("Design");
        assert_eq!(titles(&state.visible()), vec!["Brand Identity"]);
        state.clear_query();
        assert_eq!(titles(&state.visible()), vec!["Brand Identity"]);
    }

    #[test]
    fn category_match_is_exact_not_substring() {
        let services = sample();
        assert!(filter_services("dev", "", &services).is_empty());
    }

    #[test]
    fn categories_listed_once() {
        let state = ServicesState::new(sample());
        assert_eq!(state.categories(), vec!["all", "development", "design", "marketing"]);
    }
}
