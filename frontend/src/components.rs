use dioxus::prelude::*;

use blog_site::controller::{ModalView, PostsModal, Submission};
use blog_site::models::{Supporter, TeamMember};
use blog_site::notify::{Toast, Toasts};
use blog_site::post_form::{add_list_item, remove_list_item};
use blog_site::presentation::{SupporterCard as SupporterCardView, team_social_icons};
use blog_site::services::{ServiceResult, error_message};

use crate::posts_client;

#[derive(Clone, Copy, PartialEq)]
enum Action {
    Create,
    Edit,
    Delete,
}

/// Create / edit / delete dialogs for the admin posts table.
#[component]
pub fn PostsModalView(
    state: Signal<PostsModal>,
    toasts: Signal<Toasts>,
    api_base: Signal<String>,
    on_saved: EventHandler<()>,
) -> Element {
    let mut state = state;

    let submit = move |action: Action| {
        let submission: ServiceResult<Submission> = {
            let modal = state.read();
            match action {
                Action::Create => Ok(modal.create_submission()),
                Action::Edit => modal.edit_submission(),
                Action::Delete => modal.delete_submission(),
            }
        };
        let base = api_base.read().clone();
        let mut state = state;
        let mut toasts = toasts;
        spawn(async move {
            let toast = match submission {
                Ok(submission) => {
                    let result = submission.send(&posts_client(&base)).await;
                    state
                        .write()
                        .complete(&submission, result, || on_saved.call(()))
                }
                Err(err) => Toast::error(error_message(&err)),
            };
            toasts.write().push(toast);
        });
    };

    let view = state.read().view();
    let size_class = state.read().modal.size.class();
    match view {
        ModalView::Hidden => rsx! {},
        ModalView::Create { heading } => rsx! {
            div { class: "modal-overlay", onclick: move |_| state.write().close_control() }
            div { class: "modal {size_class}",
                h2 { class: "modal__title", "{heading}" }
                form {
                    onsubmit: move |evt: FormEvent| {
                        evt.prevent_default();
                        submit(Action::Create);
                    },
                    PostFields { state }
                    div { class: "modal__actions",
                        button { class: "btn btn--green", r#type: "submit", "Submit" }
                        button {
                            class: "btn btn--blue",
                            r#type: "button",
                            onclick: move |_| state.write().dismiss(),
                            "cancel"
                        }
                    }
                }
            }
        },
        ModalView::Edit { heading } => rsx! {
            div { class: "modal-overlay", onclick: move |_| state.write().close_control() }
            div { class: "modal {size_class}",
                h2 { class: "modal__title", "{heading}" }
                form {
                    onsubmit: move |evt: FormEvent| {
                        evt.prevent_default();
                        submit(Action::Edit);
                    },
                    PostFields { state }
                    div { class: "modal__actions",
                        button { class: "btn btn--blue", r#type: "submit", "Update" }
                        button {
                            class: "btn btn--blue",
                            r#type: "button",
                            onclick: move |_| state.write().handle_close(),
                            "cancel"
                        }
                    }
                }
            }
        },
        ModalView::Delete { prompt } => rsx! {
            div { class: "modal-overlay", onclick: move |_| state.write().close_control() }
            div { class: "modal {size_class}",
                h4 { "{prompt}" }
                div { class: "modal__actions",
                    button { class: "btn btn--red", onclick: move |_| submit(Action::Delete), "Delete" }
                    button { class: "btn btn--gray", onclick: move |_| state.write().handle_close(), "cancel" }
                }
            }
        },
    }
}

#[component]
fn PostFields(state: Signal<PostsModal>) -> Element {
    let mut state = state;
    let form = state.read().form.clone();

    rsx! {
        section { class: "form-grid",
            div { class: "form-child",
                label { "Title" }
                input { value: "{form.title}", oninput: move |evt| state.write().form.title = evt.value() }
                label { "Author" }
                input { value: "{form.author}", oninput: move |evt| state.write().form.author = evt.value() }
                label { "Original file name" }
                input {
                    value: "{form.original_filename}",
                    oninput: move |evt| state.write().form.original_filename = evt.value()
                }
            }
            div { class: "form-child",
                h4 { "Categories" }
                ListItems {
                    items: form.categories.clone(),
                    on_change: move |items| state.write().form.categories = items,
                }
            }
            div { class: "form-child",
                h4 { "Tags" }
                ListItems {
                    items: form.tags.clone(),
                    on_change: move |items| state.write().form.tags = items,
                }
            }
        }
        div { class: "form-content",
            label { "Content" }
            textarea {
                rows: "12",
                value: "{form.content}",
                oninput: move |evt| state.write().form.content = evt.value()
            }
        }
    }
}

/// Editable list of short strings (categories, tags).
#[component]
pub fn ListItems(items: Vec<String>, on_change: EventHandler<Vec<String>>) -> Element {
    let mut draft = use_signal(String::new);
    let current = items.clone();

    rsx! {
        div { class: "list-items",
            div { class: "list-items__add",
                input {
                    value: "{draft.read()}",
                    placeholder: "Add item",
                    oninput: move |evt| draft.set(evt.value())
                }
                button {
                    r#type: "button",
                    onclick: move |_| {
                        let mut next = current.clone();
                        if add_list_item(&mut next, &draft.read()) {
                            on_change.call(next);
                        }
                        draft.set(String::new());
                    },
                    "Add"
                }
            }
            ul {
                for (index, item) in items.iter().cloned().enumerate() {
                    li { key: "{index}-{item}",
                        span { "{item}" }
                        button {
                            r#type: "button",
                            class: "link danger",
                            onclick: {
                                let items = items.clone();
                                move |_| {
                                    let mut next = items.clone();
                                    if remove_list_item(&mut next, index).is_some() {
                                        on_change.call(next);
                                    }
                                }
                            },
                            "×"
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ToastList(toasts: Signal<Toasts>) -> Element {
    let mut toasts = toasts;
    let items: Vec<(u64, Toast)> = toasts.read().iter().cloned().collect();

    rsx! {
        div { class: "toasts",
            for (id, toast) in items {
                div {
                    key: "{id}",
                    class: if toast.is_error() { "toast toast--error" } else { "toast toast--success" },
                    span { "{toast.message}" }
                    button { class: "link", onclick: move |_| toasts.write().dismiss(id), "×" }
                }
            }
        }
    }
}

/// Row of social icons; networks without a URL are skipped.
#[component]
pub fn TeamSocialIcon(member: TeamMember) -> Element {
    let icons = team_social_icons(&member);
    rsx! {
        div { class: "team-social",
            for icon in icons {
                a {
                    key: "{icon.network.label()}",
                    href: "{icon.href}",
                    target: "_blank",
                    title: "{icon.network.label()}",
                    i { class: "icon {icon.network.icon_class()}" }
                }
            }
        }
    }
}

#[component]
pub fn SupporterCard(supporter: Supporter) -> Element {
    let card = SupporterCardView::from(&supporter);
    rsx! {
        a { href: "{card.href}", target: "{card.target}",
            div {
                class: "supporter-card",
                "data-aos": card.aos.clone().unwrap_or_default(),
                img { src: "{card.image_src}", alt: "{card.image_alt}" }
            }
        }
    }
}
