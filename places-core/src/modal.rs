//! Popup visibility.
//!
//! [`ModalManager`] holds the one open popup and the guard of the escape-key
//! listener that goes with it. The guard is created on open and dropped on
//! close, or when the manager itself is dropped.

pub const ESCAPE_KEY: &str = "Escape";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Popup {
    Profile,
    Avatar,
    NewCard,
    Image,
    Confirm,
}

impl Popup {
    pub fn type_class(self) -> &'static str {
        match self {
            Popup::Profile => "popup_type_edit",
            Popup::Avatar => "popup_type_avatar",
            Popup::NewCard => "popup_type_new-card",
            Popup::Image => "popup_type_image",
            Popup::Confirm => "popup_type_confirm",
        }
    }
}

/// Where a mouse-down inside a popup landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The popup element itself, outside its content box.
    Backdrop,
    CloseGlyph,
    Content,
}

impl ClickTarget {
    pub fn dismisses(self) -> bool {
        matches!(self, ClickTarget::Backdrop | ClickTarget::CloseGlyph)
    }
}

#[derive(Debug)]
pub struct ModalManager<P, G = ()> {
    current: Option<P>,
    escape_listener: Option<G>,
}

impl<P: Copy + PartialEq, G> ModalManager<P, G> {
    pub fn new() -> Self {
        Self {
            current: None,
            escape_listener: None,
        }
    }

    pub fn current(&self) -> Option<P> {
        self.current
    }

    pub fn is_open(&self, popup: P) -> bool {
        self.current == Some(popup)
    }

    pub fn has_escape_listener(&self) -> bool {
        self.escape_listener.is_some()
    }

    /// Opens `popup`; `listen` registers the escape-key listener and returns its guard.
    pub fn open_with(&mut self, popup: P, listen: impl FnOnce() -> G) {
        // старый обработчик снимаем до регистрации нового
        self.escape_listener = None;
        self.escape_listener = Some(listen());
        self.current = Some(popup);
    }

    /// Closes `popup` if it is the open one.
    pub fn close(&mut self, popup: P) -> bool {
        if !self.is_open(popup) {
            return false;
        }
        self.current = None;
        self.escape_listener = None;
        true
    }

    pub fn close_current(&mut self) -> Option<P> {
        let popup = self.current?;
        self.close(popup);
        Some(popup)
    }

    /// Keyboard handler: Escape closes whichever popup is open.
    pub fn handle_key(&mut self, key: &str) -> Option<P> {
        if key == ESCAPE_KEY {
            self.close_current()
        } else {
            None
        }
    }
}

impl<P: Copy + PartialEq> ModalManager<P, ()> {
    pub fn open(&mut self, popup: P) {
        self.open_with(popup, || ());
    }
}

impl<P: Copy + PartialEq, G> Default for ModalManager<P, G> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Counts live listeners the way a DOM registration would.
    struct Listener(Rc<Cell<i32>>);

    impl Listener {
        fn register(live: &Rc<Cell<i32>>) -> Self {
            live.set(live.get() + 1);
            Listener(live.clone())
        }
    }

    impl Drop for Listener {
        fn drop(&mut self) {
            self.0.set(self.0.get() - 1);
        }
    }

    #[test]
    fn open_registers_and_close_removes_listener() {
        let live = Rc::new(Cell::new(0));
        let mut modal: ModalManager<Popup, Listener> = ModalManager::new();

        modal.open_with(Popup::Profile, || Listener::register(&live));
        assert!(modal.is_open(Popup::Profile));
        assert_eq!(live.get(), 1);

        assert!(modal.close(Popup::Profile));
        assert_eq!(modal.current(), None);
        assert_eq!(live.get(), 0);
    }

    #[test]
    fn reopening_keeps_a_single_listener() {
        let live = Rc::new(Cell::new(0));
        let mut modal: ModalManager<Popup, Listener> = ModalManager::new();

        modal.open_with(Popup::Profile, || Listener::register(&live));
        modal.open_with(Popup::NewCard, || Listener::register(&live));

        assert_eq!(live.get(), 1);
        assert_eq!(modal.current(), Some(Popup::NewCard));
    }

    #[test]
    fn closing_another_popup_is_a_no_op() {
        let mut modal: ModalManager<Popup> = ModalManager::new();
        modal.open(Popup::Avatar);

        assert!(!modal.close(Popup::Image));
        assert!(modal.is_open(Popup::Avatar));
        assert!(modal.has_escape_listener());
    }

    #[test]
    fn escape_closes_current_popup_only() {
        let mut modal: ModalManager<Popup> = ModalManager::new();
        modal.open(Popup::Image);

        assert_eq!(modal.handle_key("Enter"), None);
        assert!(modal.is_open(Popup::Image));

        assert_eq!(modal.handle_key(ESCAPE_KEY), Some(Popup::Image));
        assert_eq!(modal.current(), None);
        assert!(!modal.has_escape_listener());
        assert_eq!(modal.handle_key(ESCAPE_KEY), None);
    }

    #[test]
    fn dropping_manager_drops_listener() {
        let live = Rc::new(Cell::new(0));
        {
            let mut modal: ModalManager<Popup, Listener> = ModalManager::new();
            modal.open_with(Popup::Confirm, || Listener::register(&live));
            assert_eq!(live.get(), 1);
        }
        assert_eq!(live.get(), 0);
    }

    #[test]
    fn backdrop_and_close_glyph_dismiss() {
        assert!(ClickTarget::Backdrop.dismisses());
        assert!(ClickTarget::CloseGlyph.dismisses());
        assert!(!ClickTarget::Content.dismisses());
    }
}
