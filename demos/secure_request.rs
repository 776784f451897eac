//! End-to-end demo: a client seals a request, the server authority opens it.
//!
//! Run with: cargo run --example secure_request

use involucra::involucra_core::{EnvelopeSealer, KeyAuthority};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct SignupRequest {
    id: u64,
    email: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Server side: one keypair for the lifetime of the service
    let authority = KeyAuthority::generate()?;

    // Client side: fetch the base64 SPKI once per session, then seal
    let distributed_key = authority.public_key_b64()?;
    let sealer = EnvelopeSealer::with_server_key(&distributed_key)?;

    let request = SignupRequest {
        id: 1,
        email: "a@b.com".to_string(),
    };
    let envelope = sealer.seal(&request)?;
    println!("envelope on the wire:");
    println!("{}", serde_json::to_string_pretty(&envelope)?);

    // Server side: open and decode
    let opened: SignupRequest = authority.open(&envelope)?;
    println!("opened payload: {:?}", opened);
    assert_eq!(opened, request);

    Ok(())
}
