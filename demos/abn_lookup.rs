//! Look up an ABN against the Australian Business Register.
//!
//! Run with: `ABR_GUID=... cargo run --example abn_lookup --features abr -- 51824753556`

use auid::Abn;
use auid::abr::{AbrClient, AbrConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let raw = std::env::args().nth(1).unwrap_or_else(|| "51824753556".into());
    let abn = Abn::parse(&raw)?;

    let client = AbrClient::new(AbrConfig::from_env()?)?;
    let details = client.lookup_abn(&abn).await?;

    println!("ABN:         {}", details.abn);
    println!("Entity:      {}", details.entity_name);
    println!("Status:      {}", details.status);
    if let Some(acn) = &details.acn {
        println!("ACN:         {acn}");
    }
    if let (Some(pc), Some(state)) = (details.postcode, details.state) {
        println!("Location:    {state} {pc}");
    }
    println!(
        "GST:         {}",
        details
            .gst_registered_from
            .map(|d| format!("registered from {d}"))
            .unwrap_or_else(|| "not registered".into())
    );
    for name in &details.business_names {
        println!("Trading as:  {name}");
    }
    Ok(())
}
