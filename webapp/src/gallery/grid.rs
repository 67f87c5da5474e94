use dioxus::prelude::*;

use crate::common::{
    modal::{MODAL_STACK, Modal},
    stream::thumbnail_link,
    style,
};
use api::photo::PhotoDescriptor;

#[derive(Clone, PartialEq, Props)]
struct PhotoTileProps {
    photo: PhotoDescriptor,
}

#[component]
fn PhotoTile(props: PhotoTileProps) -> Element {
    let photo = props.photo;

    // records without a cdn address render nothing at all
    let Some(link) = thumbnail_link(&photo) else {
        return rsx! {};
    };

    let title = photo.title.clone();

    rsx! {
        div {
            class: "photo-tile",
            img {
                onclick: move |_| { MODAL_STACK.with_mut(|v| v.push(Modal::ShowPhoto(photo.clone()))) },

                src: "{link}",
                alt: "{title}",
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct PhotoGridProps {
    photos: Vec<PhotoDescriptor>,
}

#[component]
pub fn PhotoGrid(props: PhotoGridProps) -> Element {
    rsx! {
        div {
            style { "{style::PHOTO_GRID}" }
            div {
                class: "photo-grid",
                for photo in props.photos.iter() {
                    PhotoTile { photo: photo.clone() }
                }
            }
        }
    }
}
