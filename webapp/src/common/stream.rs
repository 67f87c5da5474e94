use api::{CDN_URL, photo::PhotoDescriptor};

// cdn addresses are assembled client-side from the descriptor parts, and
// records missing any part have no address at all

pub fn thumbnail_link(photo: &PhotoDescriptor) -> Option<String> {
    photo
        .has_source()
        .then(|| format!("{CDN_URL}/{}/{}_{}.jpg", photo.server, photo.id, photo.secret))
}

pub fn full_link(photo: &PhotoDescriptor) -> Option<String> {
    photo
        .has_source()
        .then(|| format!("{CDN_URL}/{}/{}_{}_b.jpg", photo.server, photo.id, photo.secret))
}
