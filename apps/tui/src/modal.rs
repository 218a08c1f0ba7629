/// What happens when the user confirms the open modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalAction {
    None,
    SubmitAddFacility,
    DeleteFacility(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Modal {
    pub title: String,
    pub body: String,
    pub on_confirm: ModalAction,
    pub show_cancel: bool,
}

/// The single modal slot. At most one dialog is open at a time.
#[derive(Debug, Default, Clone)]
pub struct ModalHost {
    current: Option<Modal>,
}

impl ModalHost {
    pub const fn new() -> Self {
        Self { current: None }
    }

    pub fn show(
        &mut self,
        title: impl Into<String>,
        body: impl Into<String>,
        on_confirm: ModalAction,
        show_cancel: bool,
    ) {
        self.current = Some(Modal {
            title: title.into(),
            body: body.into(),
            on_confirm,
            show_cancel,
        });
    }

    /// One-button notice.
    pub fn alert(&mut self, body: impl Into<String>) {
        self.show("Notice", body, ModalAction::None, false);
    }

    pub fn hide(&mut self) {
        self.current = None;
    }

    pub const fn current(&self) -> Option<&Modal> {
        self.current.as_ref()
    }

    pub const fn is_open(&self) -> bool {
        self.current.is_some()
    }

    pub fn confirm_action(&self) -> Option<&ModalAction> {
        self.current.as_ref().map(|modal| &modal.on_confirm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alert_has_no_cancel_button() {
        let mut host = ModalHost::new();
        host.alert("Saved");
        let modal = host.current().unwrap();
        assert!(!modal.show_cancel);
        assert_eq!(modal.on_confirm, ModalAction::None);
        assert_eq!(modal.body, "Saved");
    }
}
