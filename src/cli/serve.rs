use crate::{config, error, server};

pub async fn serve(address: Option<String>) {
    let addr = address.unwrap_or_else(config::server_addr);

    if let Err(e) = server::start_api_server(&addr).await {
        error!("Server stopped. Err: {}", e);
    }
}
