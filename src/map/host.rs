use std::collections::HashMap;

/// Well-known id of the element the map mounts into.
pub const MAP_CONTAINER_ID: &str = "map";

#[derive(Debug, Clone, PartialEq)]
pub struct HostElement {
    pub visible: bool,
}

/// The slice of the host page the widget can see: which element ids exist
/// and whether they are laid out.
#[derive(Debug, Clone, Default)]
pub struct HostPage {
    elements: HashMap<String, HostElement>,
}

impl HostPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// A page that provides the standard visible map container.
    pub fn with_map_container() -> Self {
        let mut page = Self::new();
        page.add_element(MAP_CONTAINER_ID, true);
        page
    }

    pub fn add_element(&mut self, id: impl Into<String>, visible: bool) {
        self.elements.insert(id.into(), HostElement { visible });
    }

    pub fn element(&self, id: &str) -> Option<&HostElement> {
        self.elements.get(id)
    }
}
