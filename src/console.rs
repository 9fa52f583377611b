//! Startup banner for interactive runs.

use std::net::SocketAddr;

use colored::Colorize;

use crate::handlers::health::ONLINE_MESSAGE;

const TITLE: &str = "compose-updater healthcheck v0.1.0";
const PAD: usize = 3;

fn border(left: char, right: char) -> String {
    let width = TITLE.chars().count() + 2 * PAD;
    format!("{}{}{}", left, "═".repeat(width), right)
}

pub fn print_banner() {
    let pad = " ".repeat(PAD);
    println!();
    println!("{}", border('╔', '╗').cyan());
    println!("║{}{}{}║", pad, TITLE.bold().white(), pad);
    println!("{}", border('╚', '╝').cyan());
    println!();
}

pub fn print_startup(addr: SocketAddr) {
    println!("{} {}", "→".dimmed(), format!("http://{}", addr).cyan().underline());
    println!("  {} {}  {}", "ANY ".green(), "/".white(), ONLINE_MESSAGE.dimmed());
    println!();
}
