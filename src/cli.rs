use clap::{Parser, Subcommand};
use std::net::IpAddr;

#[derive(Parser)]
#[command(name = "empty_check_api")]
#[command(about = "Empty-check REST API server")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    #[command(about = "Start the API server")]
    Serve {
        #[arg(long, default_value = "0.0.0.0")]
        address: IpAddr,
        #[arg(long, default_value_t = 8000)]
        port: u16,
    },
}

pub fn print_usage() {
    println!("Usage: empty_check_api <command>");
    println!();
    println!("Commands:");
    println!("  serve    Start the API server");
    println!();
    println!("Run 'empty_check_api <command> --help' for more information on a command.");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_requires_subcommand() {
        let cli = Cli::try_parse_from(["app"]).expect("parse");
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_serve_uses_defaults() {
        let cli = Cli::try_parse_from(["app", "serve"]).expect("parse");
        match cli.command {
            Some(Command::Serve { address, port }) => {
                assert_eq!(address.to_string(), "0.0.0.0");
                assert_eq!(port, 8000);
            }
            None => panic!("expected serve command"),
        }
    }

    #[test]
    fn test_serve_accepts_overrides() {
        let cli = Cli::try_parse_from(["app", "serve", "--address", "127.0.0.1", "--port", "9000"])
            .expect("parse");
        match cli.command {
            Some(Command::Serve { address, port }) => {
                assert_eq!(address.to_string(), "127.0.0.1");
                assert_eq!(port, 9000);
            }
            None => panic!("expected serve command"),
        }
    }

    #[test]
    fn test_serve_rejects_invalid_address() {
        assert!(Cli::try_parse_from(["app", "serve", "--address", "not-an-ip"]).is_err());
    }
}
