use common::{GetRequest, PostRequest};

/// Where the two requests go and what they carry.
#[derive(Clone, Debug)]
pub struct Config {
    pub endpoint: String,
    pub query: Vec<(String, String)>,
    pub branch_name: String,
}

impl Config {
    /// Same literals as the default, aimed at another host.
    pub fn with_base(base: &str) -> Self {
        Config {
            endpoint: format!("{}/branch", base.trim_end_matches('/')),
            ..Config::default()
        }
    }

    pub fn get_request(&self) -> GetRequest {
        GetRequest::new(self.endpoint.clone(), self.query.iter().cloned())
    }

    pub fn post_request(&self) -> PostRequest {
        PostRequest::new(self.endpoint.clone(), self.branch_name.clone())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            endpoint: String::from("http://localhost:8080/branch"),
            query: vec![
                (String::from("key1"), String::from("value1")),
                (String::from("key2"), String::from("value2")),
            ],
            branch_name: String::from("branch 1"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_targets_local_branch_endpoint() {
        let config = Config::default();
        assert_eq!(
            config.get_request().url(),
            "http://localhost:8080/branch?key1=value1&key2=value2"
        );
        let post = config.post_request();
        assert_eq!(post.url, "http://localhost:8080/branch");
        assert_eq!(post.body.name, "branch 1");
    }

    #[test]
    fn with_base_keeps_literals() {
        let config = Config::with_base("http://127.0.0.1:4000/");
        assert_eq!(
            config.get_request().url(),
            "http://127.0.0.1:4000/branch?key1=value1&key2=value2"
        );
    }
}
