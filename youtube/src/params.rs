//! Request parameters for the supported endpoints.
//!
//! Every filter is an `Option`; unset filters are left out of the query
//! string entirely. `maxResults`, `pageToken` and `key` are owned by the
//! client and are never serialized from here.
use serde::Serialize;
use serde_json::Value;

use crate::{Error, Result};

macro_rules! api_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $value:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $value),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                match s {
                    $($value => Ok($name::$variant),)+
                    other => Err(Error::InvalidArgument(format!(
                        "'{}' is not a valid {} (expected one of: {})",
                        other,
                        stringify!($name),
                        [$($value),+].join(", ")
                    ))),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }
    };
}

api_enum! {
    /// Resource parts returned by `search`.
    SearchPart { Id => "id", Snippet => "snippet" }
}

api_enum! {
    /// Resource parts returned by `playlistItems`.
    PlaylistItemPart {
        Id => "id",
        Snippet => "snippet",
        ContentDetails => "contentDetails",
        Status => "status",
    }
}

api_enum! {
    Order {
        Date => "date",
        Rating => "rating",
        Relevance => "relevance",
        Title => "title",
        VideoCount => "videoCount",
        ViewCount => "viewCount",
    }
}

api_enum! {
    SafeSearch { Moderate => "moderate", Off => "none", Strict => "strict" }
}

api_enum! {
    ResourceType { Channel => "channel", Playlist => "playlist", Video => "video" }
}

api_enum! {
    VideoCaption { Any => "any", ClosedCaption => "closedCaption", Off => "none" }
}

api_enum! {
    VideoDefinition { Any => "any", High => "high", Standard => "standard" }
}

api_enum! {
    VideoDuration { Any => "any", Long => "long", Medium => "medium", Short => "short" }
}

impl Default for SearchPart {
    fn default() -> Self { SearchPart::Snippet }
}

impl Default for PlaylistItemPart {
    fn default() -> Self { PlaylistItemPart::Snippet }
}

/// Parameters of a paged endpoint.
pub trait EndpointParams: Serialize {
    /// Path of the endpoint, relative to the API base URL.
    const PATH: &'static str;

    /// The cursor the first page request starts from.
    fn page_token(&self) -> Option<&str>;

    /// Checked before any request is made.
    fn validate(&self) -> Result<()> { Ok(()) }

    /// Flattens the set filters into query pairs.
    fn to_query(&self) -> Result<Vec<(String, String)>> {
        let map = match serde_json::to_value(self)? {
            Value::Object(map) => map,
            other => {
                return Err(Error::InvalidArgument(format!(
                    "{} parameters must serialize to an object, got {}",
                    Self::PATH,
                    other
                )))
            }
        };

        Ok(map
            .into_iter()
            .filter_map(|(name, value)| match value {
                Value::Null => None,
                Value::String(s) => Some((name, s)),
                other => Some((name, other.to_string())),
            })
            .collect())
    }
}

/// Filters for `GET /search`.
///
/// Only the documented search filters are sent. There is no `filter`
/// pseudo-parameter (such as `filter=forContentOwner`); the query carries
/// exactly the fields that are set here.
///
/// ```
/// # use youtube::params::{SearchParams, Order};
/// let params = SearchParams {
///     order: Some(Order::Date),
///     ..SearchParams::query("rust")
/// };
/// assert_eq!(params.q.as_deref(), Some("rust"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    pub part: SearchPart,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_behalf_of_content_owner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<Order>,
    /// RFC 3339 timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_after: Option<String>,
    /// RFC 3339 timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_before: Option<String>,
    /// ISO 3166-1 alpha-2 country code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_to_video_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safe_search: Option<SafeSearch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic_id: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<ResourceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_caption: Option<VideoCaption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_category_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_definition: Option<VideoDefinition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_dimension: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_duration: Option<VideoDuration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_embeddable: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_license: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_syndicated: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_type: Option<String>,
    #[serde(skip)]
    pub page_token: Option<String>,
}

impl SearchParams {
    /// Free-text search with every other filter unset.
    pub fn query<S: Into<String>>(q: S) -> Self {
        SearchParams {
            q: Some(q.into()),
            ..Default::default()
        }
    }
}

impl EndpointParams for SearchParams {
    const PATH: &'static str = "search";

    fn page_token(&self) -> Option<&str> { self.page_token.as_deref() }
}

/// Filters for `GET /playlistItems`. Exactly one of `id` and `playlist_id`
/// must be set.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItemsParams {
    pub part: PlaylistItemPart,
    /// Comma separated playlist item ids.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub playlist_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,
    #[serde(skip)]
    pub page_token: Option<String>,
}

impl PlaylistItemsParams {
    pub fn playlist<S: Into<String>>(playlist_id: S) -> Self {
        PlaylistItemsParams {
            playlist_id: Some(playlist_id.into()),
            ..Default::default()
        }
    }

    pub fn items<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let ids = ids.into_iter().map(|id| id.as_ref().to_owned()).collect::<Vec<_>>();
        PlaylistItemsParams {
            id: Some(ids.join(",")),
            ..Default::default()
        }
    }
}

impl EndpointParams for PlaylistItemsParams {
    const PATH: &'static str = "playlistItems";

    fn page_token(&self) -> Option<&str> { self.page_token.as_deref() }

    fn validate(&self) -> Result<()> {
        match (&self.id, &self.playlist_id) {
            (Some(_), None) | (None, Some(_)) => Ok(()),
            (None, None) => Err(Error::InvalidArgument(
                "either `id` or `playlistId` must be set".into(),
            )),
            (Some(_), Some(_)) => Err(Error::InvalidArgument(
                "`id` and `playlistId` are mutually exclusive".into(),
            )),
        }
    }
}
