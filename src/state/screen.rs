/// Plant list screen controller
///
/// Owns the search query, the modal visibility flag and the current
/// selection. All transitions are synchronous and happen on the UI thread.
use super::catalog::Catalog;
use super::data::{Plant, PlantId};

/// Visibility of the detail modal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Open,
}

#[derive(Debug)]
pub struct PlantListScreen {
    catalog: Catalog,
    query: String,
    modal: ModalState,
    /// Last pressed plant. Survives closing the modal.
    selected: Option<PlantId>,
}

impl PlantListScreen {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            query: String::new(),
            modal: ModalState::Closed,
            selected: None,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: String) {
        self.query = query;
    }

    /// Plants matching the current query, in catalog order
    pub fn visible_plants(&self) -> Vec<&Plant> {
        self.catalog.filter(&self.query)
    }

    /// Select a plant and open the modal.
    /// Returns false (and changes nothing) if the id is unknown.
    pub fn select(&mut self, id: PlantId) -> bool {
        if self.catalog.get(id).is_none() {
            tracing::warn!("Ignoring press on unknown plant {}", id);
            return false;
        }
        self.selected = Some(id);
        self.modal = ModalState::Open;
        true
    }

    /// Lower the modal. The selection is kept.
    pub fn close_modal(&mut self) {
        self.modal = ModalState::Closed;
    }

    pub fn modal(&self) -> ModalState {
        self.modal
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal() == ModalState::Open
    }

    pub fn selected(&self) -> Option<&Plant> {
        self.selected.and_then(|id| self.catalog.get(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen() -> PlantListScreen {
        PlantListScreen::new(Catalog::new())
    }

    #[test]
    fn test_initial_state() {
        let screen = screen();
        assert_eq!(screen.modal(), ModalState::Closed);
        assert!(screen.selected().is_none());
        assert_eq!(screen.query(), "");
        assert_eq!(screen.visible_plants().len(), 4);
    }

    #[test]
    fn test_select_opens_modal_with_that_plant() {
        let mut screen = screen();
        assert!(screen.select(2));
        assert!(screen.is_modal_open());
        assert_eq!(screen.selected().map(|p| p.id), Some(2));
    }

    #[test]
    fn test_close_keeps_selection() {
        let mut screen = screen();
        screen.select(3);
        screen.close_modal();
        assert_eq!(screen.modal(), ModalState::Closed);
        assert_eq!(screen.selected().map(|p| p.name.as_str()), Some("Paraphelia"));
    }

    #[test]
    fn test_select_while_open_replaces_selection() {
        let mut screen = screen();
        screen.select(1);
        screen.select(4);
        assert!(screen.is_modal_open());
        assert_eq!(screen.selected().map(|p| p.id), Some(4));
    }

    #[test]
    fn test_close_when_already_closed_is_noop() {
        let mut screen = screen();
        screen.close_modal();
        assert_eq!(screen.modal(), ModalState::Closed);
        assert!(screen.selected().is_none());
    }

    #[test]
    fn test_unknown_id_is_ignored() {
        let mut screen = screen();
        assert!(!screen.select(42));
        assert_eq!(screen.modal(), ModalState::Closed);
        assert!(screen.selected().is_none());
    }

    #[test]
    fn test_query_changes_visible_plants() {
        let mut screen = screen();
        screen.set_query("RAPH".to_string());
        let ids: Vec<PlantId> = screen.visible_plants().iter().map(|p| p.id).collect();
        // Paraphelia contains "raph" too
        assert_eq!(ids, vec![3, 4]);

        screen.set_query("RAPHIS".to_string());
        let ids: Vec<PlantId> = screen.visible_plants().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![4]);

        screen.set_query(String::new());
        assert_eq!(screen.visible_plants().len(), 4);
    }

    #[test]
    fn test_selection_survives_filtering_it_out() {
        let mut screen = screen();
        screen.select(1);
        screen.set_query("raphis".to_string());
        assert_eq!(screen.selected().map(|p| p.id), Some(1));
    }
}
