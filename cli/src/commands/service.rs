use portscout_common::config::Config;
use portscout_common::services;

use crate::terminal::{format, print};

pub fn service(ports: Vec<u16>, cfg: &Config) -> anyhow::Result<()> {
    if cfg.json {
        let names: Vec<serde_json::Value> = ports
            .iter()
            .map(|port| serde_json::json!({ "port": port, "service": services::service_name(*port) }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&names)?);
        return Ok(());
    }

    print::header("well-known services", cfg.quiet);
    let key_width: usize = ports.iter().map(|port| port.to_string().len()).max().unwrap_or(0);
    for port in ports {
        let name = services::service_name(port);
        print::aligned_line(
            &port.to_string(),
            format::service_to_colored(name),
            key_width,
        );
    }
    Ok(())
}
