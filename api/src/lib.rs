use constcat::concat;

pub mod photo;

// upstream endpoints
//
// the rest endpoint serves every api method and switches on the method query
// parameter, so the method-specific urls share one base query string
pub const REST_URL: &str = "https://www.flickr.com/services/rest/";
pub const CDN_URL: &str = "https://live.staticflickr.com";

// page geometry is fixed at build time, and the feed pages are 1-indexed
pub const PAGE_SIZE: &str = "20";
pub const SAFE_SEARCH: &str = "1";

const BASE_QUERY: &str = concat!(
    "format=json&nojsoncallback=1&safe_search=",
    SAFE_SEARCH,
    "&per_page=",
    PAGE_SIZE
);

pub const RECENT_URL: &str = concat!(REST_URL, "?method=flickr.photos.getRecent&", BASE_QUERY);
pub const SEARCH_URL: &str = concat!(REST_URL, "?method=flickr.photos.search&", BASE_QUERY);

// baked in at compile time so the wasm bundle does not need a config fetch,
// missing keys fail at request time with the upstream error message
pub const API_KEY: &str = match option_env!("FILMSTRIP_API_KEY") {
    Some(key) => key,
    None => "",
};
