//! Local Search Example
//!
//! Looks up review results for a free-text location against the live Yelp
//! v1 API. The client key is read from the `YWSID` environment variable:
//!
//! ```sh
//! YWSID=your-client-key cargo run -p local-search-demo -- "Noe Valley, San Francisco CA"
//! ```

// Example-specific lint allowances
#![allow(missing_docs)]
#![allow(clippy::print_stdout)]

use yelp::prelude::*;

#[tokio::main]
async fn main() -> yelp::Result<()> {
    let client_key = std::env::var("YWSID")
        .map_err(|_| Error::config("'YWSID' was not set in environment"))?;

    let location = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "Noe Valley, San Francisco CA".to_string());

    let reviews = ReviewSearchApi::new(client_key)?;
    let found = reviews
        .by_location(&location, &LocationOptions::default())
        .await?;

    println!("{found:#}");

    Ok(())
}
