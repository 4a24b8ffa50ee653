pub mod posts_modal;

pub use posts_modal::{ModalView, PostsModal, Submission};
