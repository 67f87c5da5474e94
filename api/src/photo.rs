use serde::{Deserialize, Serialize};

use crate::{API_KEY, RECENT_URL, SEARCH_URL};

// structs and types

// the upstream feed omits fields on damaged records instead of failing the
// whole page, so everything defaults and the grid skips unrenderable entries
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhotoDescriptor {
    pub id: String,
    pub server: String,
    pub secret: String,
    pub title: String,
}

impl PhotoDescriptor {
    // the cdn address needs all three parts, title is optional
    pub fn has_source(&self) -> bool {
        !(self.id.is_empty() || self.server.is_empty() || self.secret.is_empty())
    }
}

// response envelope
//
// a failed call still comes back as http 200 with stat = "fail" and a
// human-readable message, so the envelope carries both shapes
#[derive(Debug, Deserialize)]
pub struct PhotoFeed {
    pub photos: Option<PhotoBatch>,
    pub stat: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PhotoBatch {
    pub photo: Option<Vec<PhotoDescriptor>>,
}

impl PhotoFeed {
    pub fn into_photos(self) -> anyhow::Result<Vec<PhotoDescriptor>> {
        if self.stat.as_deref() == Some("fail") {
            return Err(anyhow::Error::msg(self.message.unwrap_or_else(|| {
                String::from("upstream reported failure without a message")
            })));
        }

        let batch = self
            .photos
            .ok_or_else(|| anyhow::Error::msg("response missing photos object"))?;

        batch
            .photo
            .ok_or_else(|| anyhow::Error::msg("response missing photo list"))
    }
}

// messages

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FetchPhotosReq {
    pub text: String,
    pub page: u32,
}

impl FetchPhotosReq {
    // empty text means the public stream, anything else is a search
    pub fn endpoint(&self, api_key: &str) -> String {
        if self.text.is_empty() {
            format!("{RECENT_URL}&page={}&api_key={}", self.page, api_key)
        } else {
            format!(
                "{SEARCH_URL}&text={}&page={}&api_key={}",
                urlencoding::encode(&self.text),
                self.page,
                api_key
            )
        }
    }
}

// fetch one page of the feed for the given request
pub async fn fetch_photos(req: &FetchPhotosReq) -> anyhow::Result<Vec<PhotoDescriptor>> {
    let resp = gloo_net::http::Request::get(req.endpoint(API_KEY).as_str())
        .send()
        .await?;

    if resp.ok() {
        resp.json::<PhotoFeed>().await?.into_photos()
    } else {
        Err(anyhow::Error::msg(resp.text().await?))
    }
}
