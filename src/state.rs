use crate::catalog::Catalog;
use crate::search::filter;

/// Host-side picker state: selected zone, search text, dropdown visibility.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    pub selected: Option<String>,
    pub query: String,
    pub dropdown_open: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionEvent {
    /// Search text replaced
    QueryEdited(String),
    /// A zone chosen from the list
    ZonePicked(String),
    DropdownToggled,
    /// System zone discovered at startup
    AmbientZoneResolved(String),
}

impl SelectionState {
    /// Apply one event, returning the next state.
    pub fn reduce(self, event: SelectionEvent) -> SelectionState {
        match event {
            SelectionEvent::QueryEdited(query) => SelectionState { query, ..self },
            SelectionEvent::ZonePicked(zone) => SelectionState {
                selected: Some(zone),
                query: String::new(),
                dropdown_open: false,
            },
            SelectionEvent::DropdownToggled => SelectionState {
                dropdown_open: !self.dropdown_open,
                ..self
            },
            SelectionEvent::AmbientZoneResolved(zone) => match self.selected {
                Some(_) => self,
                None => SelectionState {
                    selected: Some(zone),
                    ..self
                },
            },
        }
    }

    /// Catalog entries visible for the current query.
    pub fn visible(&self, catalog: &Catalog) -> Catalog {
        filter(catalog, &self.query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::helpers::sample_catalog;

    #[test]
    fn test_initial_state_is_empty() {
        let state = SelectionState::default();
        assert_eq!(state.selected, None);
        assert!(state.query.is_empty());
        assert!(!state.dropdown_open);
    }

    #[test]
    fn test_ambient_zone_sets_initial_selection() {
        let state = SelectionState::default()
            .reduce(SelectionEvent::AmbientZoneResolved("Europe/Paris".into()));
        assert_eq!(state.selected.as_deref(), Some("Europe/Paris"));
    }

    #[test]
    fn test_ambient_zone_never_overrides_pick() {
        let state = SelectionState::default()
            .reduce(SelectionEvent::ZonePicked("Asia/Tokyo".into()))
            .reduce(SelectionEvent::AmbientZoneResolved("Europe/Paris".into()));
        assert_eq!(state.selected.as_deref(), Some("Asia/Tokyo"));
    }

    #[test]
    fn test_pick_closes_dropdown_and_clears_query() {
        let state = SelectionState::default()
            .reduce(SelectionEvent::DropdownToggled)
            .reduce(SelectionEvent::QueryEdited("ger".into()))
            .reduce(SelectionEvent::ZonePicked("Europe/Berlin".into()));
        assert_eq!(
            state,
            SelectionState {
                selected: Some("Europe/Berlin".into()),
                query: String::new(),
                dropdown_open: false,
            }
        );
    }

    #[test]
    fn test_query_edit_keeps_selection() {
        let state = SelectionState::default()
            .reduce(SelectionEvent::ZonePicked("Asia/Tokyo".into()))
            .reduce(SelectionEvent::QueryEdited("fr".into()));
        assert_eq!(state.selected.as_deref(), Some("Asia/Tokyo"));
        assert_eq!(state.query, "fr");
    }

    #[test]
    fn test_toggle_twice_closes() {
        let state = SelectionState::default()
            .reduce(SelectionEvent::DropdownToggled)
            .reduce(SelectionEvent::DropdownToggled);
        assert!(!state.dropdown_open);
    }

    #[test]
    fn test_visible_follows_query() {
        let catalog = sample_catalog();
        let state = SelectionState::default();
        assert!(state.visible(&catalog).shares_storage(&catalog));

        let state = state.reduce(SelectionEvent::QueryEdited("franc".into()));
        assert_eq!(state.visible(&catalog).ids(), vec!["Europe/Paris"]);
    }
}
