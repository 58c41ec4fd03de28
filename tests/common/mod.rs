use assert_cmd::cargo_bin;
use mockito::{Mock, Server};
use std::process::Command;

pub const SENDER: &str = "0x5e4d";

/// Mocks a wallet bridge whose account is connected.
pub fn connected_wallet(server: &mut Server) -> Mock {
    server
        .mock("GET", "/account")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(format!(r#"{{"connected": true, "address": "{}"}}"#, SENDER))
        .create()
}

/// An un-created sign-and-execute mock, so callers can set expectations first.
pub fn signing(server: &mut Server, status: usize, body: &str) -> Mock {
    server
        .mock("POST", "/sign-and-execute")
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body)
}

/// `proposal-desk submit` pointed at the given servers, auto-confirming payment.
pub fn submit_command(wallet_url: &str, backend_url: &str) -> Command {
    let mut cmd = Command::new(cargo_bin!("proposal-desk"));
    cmd.env_remove("BACKEND_URL")
        .env_remove("WALLET_BRIDGE_URL")
        .env_remove("RUST_LOG")
        .arg("submit")
        .arg("--yes")
        .arg("--wallet-url")
        .arg(wallet_url)
        .arg("--backend-url")
        .arg(backend_url);
    cmd
}
