pub const CREATED: &str = "Created Successfully";
pub const UPDATED: &str = "Updated Successfully";
pub const DELETED: &str = "Deleted Successfully";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub level: ToastLevel,
    pub message: String,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: ToastLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: ToastLevel::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == ToastLevel::Error
    }
}

/// Short-lived notifications waiting to be shown or dismissed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Toasts {
    next_id: u64,
    items: Vec<(u64, Toast)>,
}

impl Toasts {
    pub fn push(&mut self, toast: Toast) -> u64 {
        self.next_id += 1;
        self.items.push((self.next_id, toast));
        self.next_id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|(item_id, _)| *item_id != id);
    }

    pub fn iter(&self) -> impl Iterator<Item = &(u64, Toast)> {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dismiss_removes_only_that_toast() {
        let mut toasts = Toasts::default();
        let first = toasts.push(Toast::success(CREATED));
        toasts.push(Toast::error("boom"));
        toasts.dismiss(first);
        let remaining: Vec<_> = toasts.iter().map(|(_, toast)| toast.clone()).collect();
        assert_eq!(remaining, vec![Toast::error("boom")]);
    }
}
