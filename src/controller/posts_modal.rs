//! State behind the admin create/edit/delete post modal.
//!
//! The parent page decides which modal is open and for which post; this type
//! keeps the editable copy of that post and runs the network call for the
//! form being shown. Submission is split in two halves (`*_submission` to
//! snapshot the request, `complete` to apply the outcome) so a UI can release
//! its state while the request is in flight. `handle_*` chain both halves.

use tracing::{error, info};

use crate::modal::{ModalDescriptor, ModalKind};
use crate::models::{BlogPost, PostPayload};
use crate::notify::{self, Toast};
use crate::post_form::PostForm;
use crate::services::{ApiError, PostsService, ServiceResult, error_message};

/// One mutation, captured from the form at submit time.
#[derive(Clone, Debug, PartialEq)]
pub enum Submission {
    Create(PostPayload),
    Update { id: String, payload: PostPayload },
    Delete { id: String },
}

impl Submission {
    pub async fn send<S: PostsService + ?Sized>(&self, service: &S) -> ServiceResult<()> {
        match self {
            Submission::Create(payload) => service.create_post(payload).await,
            Submission::Update { id, payload } => service.update_post(id, payload).await,
            Submission::Delete { id } => service.delete_post(id).await,
        }
    }

    pub fn action(&self) -> &'static str {
        match self {
            Submission::Create(_) => "create",
            Submission::Update { .. } => "update",
            Submission::Delete { .. } => "delete",
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            Submission::Create(_) => notify::CREATED,
            Submission::Update { .. } => notify::UPDATED,
            Submission::Delete { .. } => notify::DELETED,
        }
    }
}

/// What the modal should draw right now.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModalView {
    Hidden,
    Create { heading: String },
    Edit { heading: String },
    Delete { prompt: String },
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PostsModal {
    pub modal: ModalDescriptor,
    pub selected_post: Option<BlogPost>,
    pub form: PostForm,
}

impl PostsModal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the selection and rebuilds the form from it.
    pub fn select_post(&mut self, post: Option<BlogPost>) {
        self.form = PostForm::from_selection(post.as_ref());
        self.selected_post = post;
    }

    /// Opens `kind`. The form is only rebuilt when the selection actually
    /// changes, so reopening the create form keeps whatever was typed.
    pub fn open(&mut self, kind: ModalKind, post: Option<BlogPost>) {
        if self.selected_post != post {
            self.select_post(post);
        }
        self.modal = ModalDescriptor::opened(kind);
    }

    pub fn is_open(&self) -> bool {
        self.modal.open
    }

    pub fn view(&self) -> ModalView {
        if !self.modal.open {
            return ModalView::Hidden;
        }
        let title = self
            .selected_post
            .as_ref()
            .map(|post| post.title.as_str())
            .unwrap_or_default();
        match self.modal.kind {
            ModalKind::Create => ModalView::Create {
                heading: "Create a new post".into(),
            },
            ModalKind::Edit => ModalView::Edit {
                heading: format!("Editing {title}"),
            },
            ModalKind::Delete => ModalView::Delete {
                prompt: format!("Are you sure you want to delete {title} ?"),
            },
            ModalKind::None => ModalView::Hidden,
        }
    }

    /// Close and drop the selection. Edit and delete use this for their cancel
    /// buttons and close controls.
    pub fn handle_close(&mut self) {
        self.select_post(None);
        self.modal = self.modal.closed();
    }

    /// Close and leave selection and form alone.
    pub fn dismiss(&mut self) {
        self.modal = self.modal.closed();
    }

    /// The modal's own close control (overlay click, escape).
    pub fn close_control(&mut self) {
        match self.modal.kind {
            ModalKind::Create => self.dismiss(),
            ModalKind::Edit | ModalKind::Delete => self.handle_close(),
            ModalKind::None => {}
        }
    }

    pub fn create_submission(&self) -> Submission {
        Submission::Create(self.form.to_payload())
    }

    pub fn edit_submission(&self) -> ServiceResult<Submission> {
        Ok(Submission::Update {
            id: self.selected_id()?,
            payload: self.form.to_payload(),
        })
    }

    pub fn delete_submission(&self) -> ServiceResult<Submission> {
        Ok(Submission::Delete {
            id: self.selected_id()?,
        })
    }

    fn selected_id(&self) -> ServiceResult<String> {
        self.selected_post
            .as_ref()
            .map(|post| post.id.trim().to_string())
            .filter(|id| !id.is_empty())
            .ok_or(ApiError::MissingPostId)
    }

    /// Applies the outcome of a sent submission. Success refetches, closes and
    /// reports; failure only reports, the modal stays open for another try.
    pub fn complete<F: FnOnce()>(
        &mut self,
        submission: &Submission,
        result: ServiceResult<()>,
        refetch: F,
    ) -> Toast {
        match result {
            Ok(()) => {
                info!(action = submission.action(), "post saved");
                refetch();
                self.dismiss();
                Toast::success(submission.success_message())
            }
            Err(err) => Self::failure(submission.action(), &err),
        }
    }

    fn failure(action: &str, err: &ApiError) -> Toast {
        error!(action, error = %err, "post request failed");
        Toast::error(error_message(err))
    }

    async fn submit<S, F>(&mut self, submission: ServiceResult<Submission>, service: &S, refetch: F) -> Toast
    where
        S: PostsService + ?Sized,
        F: FnOnce(),
    {
        let submission = match submission {
            Ok(submission) => submission,
            Err(err) => return Self::failure("submit", &err),
        };
        let result = submission.send(service).await;
        self.complete(&submission, result, refetch)
    }

    pub async fn handle_create<S, F>(&mut self, service: &S, refetch: F) -> Toast
    where
        S: PostsService + ?Sized,
        F: FnOnce(),
    {
        let submission = self.create_submission();
        self.submit(Ok(submission), service, refetch).await
    }

    pub async fn handle_edit<S, F>(&mut self, service: &S, refetch: F) -> Toast
    where
        S: PostsService + ?Sized,
        F: FnOnce(),
    {
        let submission = self.edit_submission();
        self.submit(submission, service, refetch).await
    }

    pub async fn handle_delete<S, F>(&mut self, service: &S, refetch: F) -> Toast
    where
        S: PostsService + ?Sized,
        F: FnOnce(),
    {
        let submission = self.delete_submission();
        self.submit(submission, service, refetch).await
    }
}
