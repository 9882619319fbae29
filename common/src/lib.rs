use serde::Serialize;
use url::form_urlencoded;

/// Body of a branch creation request.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct NewBranch {
    pub name: String,
}

#[derive(Clone, Debug)]
pub struct GetRequest {
    pub base_url: String,
    pub query: Vec<(String, String)>,
}

impl GetRequest {
    pub fn new<K, V>(base_url: impl Into<String>, query: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        GetRequest {
            base_url: base_url.into(),
            query: query
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Base URL with the encoded query appended, or the base URL alone when
    /// there are no pairs.
    pub fn url(&self) -> String {
        if self.query.is_empty() {
            return self.base_url.clone();
        }
        format!("{}?{}", self.base_url, query_string(&self.query))
    }
}

#[derive(Clone, Debug)]
pub struct PostRequest {
    pub url: String,
    pub body: NewBranch,
}

impl PostRequest {
    pub fn new(url: impl Into<String>, name: impl Into<String>) -> Self {
        PostRequest {
            url: url.into(),
            body: NewBranch { name: name.into() },
        }
    }
}

/// Form-urlencodes `pairs` in the order given.
pub fn query_string<K, V>(pairs: &[(K, V)]) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs.iter().map(|(k, v)| (k.as_ref(), v.as_ref())))
        .finish()
}
