#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalKind {
    Create,
    Edit,
    Delete,
    #[default]
    None,
}

impl ModalKind {
    /// The size each form is shown at: the confirmation is small, the editors take the page.
    pub fn default_size(&self) -> ModalSize {
        match self {
            ModalKind::Delete => ModalSize::Medium,
            _ => ModalSize::Full,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalSize {
    #[default]
    Medium,
    Full,
}

impl ModalSize {
    pub fn class(&self) -> &'static str {
        match self {
            ModalSize::Medium => "modal--md",
            ModalSize::Full => "modal--full",
        }
    }
}

/// Open flag, size and form type of the posts modal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModalDescriptor {
    pub open: bool,
    pub size: ModalSize,
    pub kind: ModalKind,
}

impl ModalDescriptor {
    pub fn opened(kind: ModalKind) -> Self {
        Self {
            open: true,
            size: kind.default_size(),
            kind,
        }
    }

    /// Same descriptor with `open` cleared; kind and size are kept.
    pub fn closed(self) -> Self {
        Self {
            open: false,
            ..self
        }
    }
}
