use dioxus::prelude::*;

use crate::common::{stream::full_link, style};
use api::photo::PhotoDescriptor;

pub static MODAL_STACK: GlobalSignal<Vec<Modal>> = Signal::global(|| Vec::new());

// Modal
//
// this enumerates the modal boxes we can display, and pushing one onto the
// modal stack will trigger the ModalBox, below
pub enum Modal {
    ShowPhoto(PhotoDescriptor),
}

// ModalBox
//
// once included into another element, this displays the modal on the top of
// the stack (from the global signal).  it renders nothing while the stack is
// empty, so it is safe to leave in place permanently
#[component]
pub fn ModalBox() -> Element {
    rsx! {
        div {
            style { "{style::MODAL}" }
            div { class: "modal",
                div { class: "modal-content",
                    div { class: "modal-header",
                        span {
                            class: "close",
                            onclick: move |_| {
                                MODAL_STACK.with_mut(|v| v.pop());
                            },
                            "X"
                        }
                    }
                    match MODAL_STACK.read().last() {
                        Some(val) => match val {
                            Modal::ShowPhoto(photo) => rsx! {
                                ShowPhotoBox { photo: photo.clone() }
                            },
                        },
                        None => return rsx! {},
                    }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct ShowPhotoBoxProps {
    photo: PhotoDescriptor,
}

#[component]
fn ShowPhotoBox(props: ShowPhotoBoxProps) -> Element {
    let photo = props.photo;

    let Some(link) = full_link(&photo) else {
        return modal_err("photo is missing its source address");
    };

    rsx! {
        div { class: "modal-media",
            div {
                img { src: "{link}", alt: "{photo.title}" }
            }
            if !photo.title.is_empty() {
                div { class: "modal-info",
                    span { "{photo.title}" }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct ModalErrProps {
    err: String,
}

#[component]
fn ModalErr(props: ModalErrProps) -> Element {
    rsx! {
        div { class: "modal-body",
            span { "{props.err}" }
        }
    }
}

pub fn modal_err(err: impl Into<String>) -> Element {
    rsx! {
        ModalErr { err: err.into() }
    }
}
