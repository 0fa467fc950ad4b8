// Profile Gallery
// Category filters and "load more" paging over example profiles

use tracing::debug;

use crate::constants::FILTER_ALL;
use crate::content::Profile;

/// Filterable, incrementally revealed list of profiles
#[derive(Debug, Clone)]
pub struct ProfileGallery {
    profiles: Vec<Profile>,
    /// `all` followed by every category in first-seen order
    filters: Vec<String>,
    active_filter: usize,
    page_size: usize,
    visible_count: usize,
    /// Selection within the visible profiles
    selected: usize,
}

impl ProfileGallery {
    pub fn new(profiles: Vec<Profile>, page_size: usize) -> Self {
        let page_size = page_size.max(1);
        let mut filters = vec![FILTER_ALL.to_string()];
        for category in profiles.iter().flat_map(|p| p.categories.iter()) {
            if !filters.contains(category) {
                filters.push(category.clone());
            }
        }

        Self {
            profiles,
            filters,
            active_filter: 0,
            page_size,
            visible_count: page_size,
            selected: 0,
        }
    }

    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    pub fn profile(&self, index: usize) -> Option<&Profile> {
        self.profiles.get(index)
    }

    pub fn filters(&self) -> &[String] {
        &self.filters
    }

    pub fn active_filter(&self) -> &str {
        &self.filters[self.active_filter]
    }

    pub fn active_filter_index(&self) -> usize {
        self.active_filter
    }

    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    fn matches(profile: &Profile, filter: &str) -> bool {
        filter == FILTER_ALL || profile.categories.iter().any(|c| c == filter)
    }

    /// Indices of all profiles matching the active filter
    pub fn matching(&self) -> Vec<usize> {
        let filter = self.active_filter();
        self.profiles
            .iter()
            .enumerate()
            .filter(|(_, p)| Self::matches(p, filter))
            .map(|(i, _)| i)
            .collect()
    }

    /// Indices of the matching profiles currently revealed
    pub fn visible(&self) -> Vec<usize> {
        let mut matching = self.matching();
        matching.truncate(self.visible_count);
        matching
    }

    /// Whether the "load more" control should be shown
    pub fn has_more(&self) -> bool {
        self.matching().len() > self.visible_count
    }

    /// Switch filter; resets paging and selection
    pub fn set_filter(&mut self, index: usize) {
        if index >= self.filters.len() {
            return;
        }
        self.active_filter = index;
        self.visible_count = self.page_size;
        self.selected = 0;
        debug!(filter = %self.active_filter(), "gallery filter changed");
    }

    pub fn next_filter(&mut self) {
        self.set_filter((self.active_filter + 1) % self.filters.len());
    }

    pub fn load_more(&mut self) {
        self.visible_count += self.page_size;
        debug!(visible = self.visible_count, "gallery load more");
    }

    pub fn select_next(&mut self) {
        let visible = self.visible().len();
        if self.selected + 1 < visible {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Position of the selection among the visible profiles
    pub fn selected_position(&self) -> usize {
        self.selected
    }

    /// Profile index of the current selection
    pub fn selected_profile(&self) -> Option<usize> {
        self.visible().get(self.selected).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(name: &str, categories: &[&str]) -> Profile {
        Profile {
            name: name.to_string(),
            age: 30,
            location: "London".to_string(),
            bio: String::new(),
            categories: categories.iter().map(|c| c.to_string()).collect(),
        }
    }

    fn gallery() -> ProfileGallery {
        ProfileGallery::new(
            vec![
                profile("A", &["new"]),
                profile("B", &["popular"]),
                profile("C", &["new", "online"]),
                profile("D", &["online"]),
                profile("E", &["new"]),
                profile("F", &["popular"]),
                profile("G", &["new"]),
            ],
            3,
        )
    }

    #[test]
    fn test_filters_in_first_seen_order() {
        assert_eq!(gallery().filters(), &["all", "new", "popular", "online"]);
    }

    #[test]
    fn test_all_shows_first_page() {
        let gallery = gallery();
        assert_eq!(gallery.visible(), vec![0, 1, 2]);
        assert!(gallery.has_more());
    }

    #[test]
    fn test_category_filter() {
        let mut gallery = gallery();
        gallery.set_filter(1);
        assert_eq!(gallery.matching(), vec![0, 2, 4, 6]);
        assert_eq!(gallery.visible(), vec![0, 2, 4]);

        gallery.load_more();
        assert_eq!(gallery.visible(), vec![0, 2, 4, 6]);
        assert!(!gallery.has_more());
    }

    #[test]
    fn test_changing_filter_resets_paging() {
        let mut gallery = gallery();
        gallery.load_more();
        gallery.select_next();
        assert_eq!(gallery.visible_count(), 6);

        gallery.next_filter();
        assert_eq!(gallery.active_filter(), "new");
        assert_eq!(gallery.visible_count(), 3);
        assert_eq!(gallery.selected_position(), 0);
    }

    #[test]
    fn test_filter_cycle_wraps() {
        let mut gallery = gallery();
        for _ in 0..4 {
            gallery.next_filter();
        }
        assert_eq!(gallery.active_filter(), "all");
    }

    #[test]
    fn test_selection_stays_within_visible() {
        let mut gallery = gallery();
        gallery.set_filter(3);
        gallery.select_next();
        gallery.select_next();
        gallery.select_next();
        assert_eq!(gallery.selected_profile(), Some(3));
        gallery.select_previous();
        gallery.select_previous();
        assert_eq!(gallery.selected_profile(), Some(2));
    }

    #[test]
    fn test_empty_gallery() {
        let gallery = ProfileGallery::new(Vec::new(), 3);
        assert_eq!(gallery.filters(), &["all"]);
        assert!(gallery.visible().is_empty());
        assert!(!gallery.has_more());
        assert_eq!(gallery.selected_profile(), None);
    }
}
