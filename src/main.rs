use amazon_scraper::{ProductLinks, ProductRecord, ResultTable, Url, SEARCH_URL};
use eyre::Result;
use futures::StreamExt;
use tokio::sync::mpsc;
use tracing::{info, warn};

/// Product pages fetched in flight at once.
const CONCURRENT_FETCHES: usize = 8;

/// Output file, written in the working directory.
const OUTPUT_FILE: &str = "amazon_products.csv";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let links = ProductLinks::fetch(Url::parse(SEARCH_URL)?).await?;
    info!("collected {} product links", links.len());

    // Single consumer accumulates the table; fetch workers only send.
    let (sender, mut receiver) = mpsc::channel::<ProductRecord>(CONCURRENT_FETCHES);
    let collector = tokio::spawn(async move {
        let mut table = ResultTable::new();
        while let Some(record) = receiver.recv().await {
            table.push(record);
        }
        table
    });

    futures::stream::iter(links)
        .for_each_concurrent(CONCURRENT_FETCHES, |link| {
            let sender = sender.clone();
            async move {
                let record = match Url::parse(&link) {
                    Ok(url) => ProductRecord::fetch(url).await,
                    Err(err) => Err(err.into()),
                };
                match record {
                    Ok(record) => {
                        if sender.send(record).await.is_err() {
                            warn!("result channel closed early");
                        }
                    }
                    // A failed page never aborts the run.
                    Err(err) => warn!("skipping {link}: {err}"),
                }
            }
        })
        .await;
    drop(sender);

    let table = collector.await?;
    let rows = table.write_csv_file(OUTPUT_FILE)?;
    info!("extracted {} records, kept {} rows", table.len(), rows);
    println!("Data saved to {OUTPUT_FILE}");
    Ok(())
}
