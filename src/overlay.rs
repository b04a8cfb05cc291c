//! Menu, mask, and modal share one backdrop; this keeps them consistent.

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModalImage {
    pub src: String,
    pub alt: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OverlayState {
    menu_open: bool,
    modal: Option<ModalImage>,
}

impl OverlayState {
    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn modal(&self) -> Option<&ModalImage> {
        self.modal.as_ref()
    }

    pub fn modal_open(&self) -> bool {
        self.modal.is_some()
    }

    /// Body scrolling is locked while the modal is up.
    pub fn scroll_locked(&self) -> bool {
        self.modal_open()
    }

    /// Menu button and nav links.
    pub fn toggle_menu(&self) -> Self {
        Self {
            menu_open: !self.menu_open,
            ..self.clone()
        }
    }

    pub fn open_modal(&self, image: ModalImage) -> Self {
        Self {
            modal: Some(image),
            ..self.clone()
        }
    }

    pub fn close_modal(&self) -> Self {
        Self {
            modal: None,
            ..self.clone()
        }
    }

    /// A modal owns the mask while it is open; otherwise the mask closes the
    /// menu.
    pub fn click_mask(&self) -> Self {
        if self.modal_open() {
            return self.close_modal();
        }

        if self.menu_open {
            return self.toggle_menu();
        }

        self.clone()
    }
}
