use clap::Parser;
use img2c_rest::{AppState, router};
use std::net::SocketAddr;

/// Command line arguments structure.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The address to bind
    #[arg(short, long, default_value = "127.0.0.1:8080")]
    bind: SocketAddr,
    /// Listen on all interfaces at this port instead of --bind
    #[arg(short, long, env = "PORT")]
    port: Option<u16>,
}

impl Args {
    fn addr(&self) -> SocketAddr {
        match self.port {
            Some(port) => SocketAddr::from(([0, 0, 0, 0], port)),
            None => self.bind,
        }
    }
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let addr = args.addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router(AppState::default())).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_overrides_bind() {
        let args = Args::try_parse_from(["img2c_rest", "--port", "9000"]).unwrap();
        assert_eq!(args.addr(), "0.0.0.0:9000".parse().unwrap());

        let args = Args::try_parse_from(["img2c_rest", "--bind", "127.0.0.1:1234"]).unwrap();
        if std::env::var_os("PORT").is_none() {
            assert_eq!(args.addr(), "127.0.0.1:1234".parse().unwrap());
        }
    }
}
