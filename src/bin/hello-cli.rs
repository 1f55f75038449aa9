//! Small HTTP client for poking the demo server.
//!
//! ```text
//! hello-cli http://127.0.0.1:4567/
//! hello-cli -d abc http://127.0.0.1:4567/
//! hello-cli -X DELETE -v http://127.0.0.1:4567/
//! ```

use std::process::ExitCode;

use clap::Parser;
use reqwest::header::{ACCEPT, USER_AGENT};
use reqwest::Method;
use url::Url;

#[derive(Parser)]
#[command(name = "hello-cli", version)]
#[command(about = "Send one HTTP request and print the response", long_about = None)]
struct Cli {
    /// HTTP method. Defaults to GET, or POST when --data is given.
    #[arg(short = 'X', long = "request")]
    method: Option<Method>,

    /// Request body.
    #[arg(short, long)]
    data: Option<String>,

    /// User-Agent header.
    #[arg(short = 'A', long, default_value = concat!("hello-cli/", env!("CARGO_PKG_VERSION")))]
    user_agent: String,

    /// Print the status line and response headers before the body.
    #[arg(short, long)]
    verbose: bool,

    /// Target URL.
    url: String,
}

impl Cli {
    fn method(&self) -> Method {
        match (&self.method, &self.data) {
            (Some(method), _) => method.clone(),
            (None, Some(_)) => Method::POST,
            (None, None) => Method::GET,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let url = Url::parse(&cli.url).map_err(|e| format!("Invalid url: {} ({})", cli.url, e))?;
    let client = reqwest::Client::new();

    let mut request = client
        .request(cli.method(), url)
        .header(USER_AGENT, &cli.user_agent)
        .header(ACCEPT, "*/*");
    if let Some(data) = cli.data {
        request = request.body(data);
    }

    let res = request.send().await?;

    if cli.verbose {
        println!("{:?} {}", res.version(), res.status());
        for (name, value) in res.headers() {
            println!("{}: {}", name, value.to_str().unwrap_or("<binary>"));
        }
        println!();
    }

    print!("{}", res.text().await?);
    Ok(())
}
