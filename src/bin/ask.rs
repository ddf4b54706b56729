use clap::Parser;
use log::{debug, error};

/// Send one prompt to an ask service and print the result record
#[derive(Parser, Debug)]
#[command(name = "ask", version)]
struct Args
{   /// Prompt text
    #[arg(default_value = "apa yang dimaksud dengan AI Model")]
    prompt: String
  , /// Base URL of the service; `/api/ask` is appended
    #[arg(long, default_value = "https://ai.ptov.my.id")]
    url: String
  , /// Model name sent with the prompt
    #[arg(long, default_value = askai::config::DEFAULT_MODEL)]
    model: String
  , /// Upper bound on the whole call, in seconds
    #[arg(long, default_value_t = askai::config::DEFAULT_TIMEOUT_SECS)]
    timeout: u64
  , /// Verify the server's TLS certificate
    #[arg(long)]
    verify_certs: bool
}

#[tokio::main]
async fn main()
{   env_logger::init();
    let args = Args::parse();
    debug!("Parsed args: {:?}", args);

    let config = askai::AskConfig::new(args.url)
      .with_default_model(args.model)
      .with_timeout_secs(args.timeout)
      .with_insecure_skip_verify(!args.verify_certs);

    let result = match askai::AskClient::new(config)
    {   Ok(client) => client.ask_default(args.prompt).await
      , Err(e) => askai::AskResult::from(e)
    };

    match serde_json::to_string_pretty(&result)
    {   Ok(text) => println!("{}", text)
      , Err(e) => error!("Failed to render result: {}", e)
    }

    if result.is_error()
    {   std::process::exit(1);
    }
}
