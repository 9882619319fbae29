pub mod config;
pub mod error;
pub mod fetch;
pub mod report;

pub use config::Config;
pub use error::{FetchError, Result};
pub use fetch::{get_branch, post_branch};
pub use report::Report;

use reqwest::{Client, Method};

/// Fires the GET and the POST together. Each report is emitted as soon as its
/// request settles, so the two lines may come out in either order.
pub async fn run(client: &Client, config: &Config) -> (Report, Report) {
    let get = config.get_request();
    let post = config.post_request();

    tokio::join!(
        async {
            let report = Report::new(Method::GET, get_branch(client, &get).await);
            report.emit();
            report
        },
        async {
            let report = Report::new(Method::POST, post_branch(client, &post).await);
            report.emit();
            report
        },
    )
}
