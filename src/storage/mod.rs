//! Topology report persistence module

use crate::network::Network;
use anyhow::{Context, Result};
use serde_json::{json, to_string_pretty};
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

/// Write `summary.json` and `routers.json` describing the network
pub fn save_topology(network: &Network, output_dir: &Path) -> Result<()> {
    log::info!("Saving topology report to {}", output_dir.display());

    fs::create_dir_all(output_dir)
        .with_context(|| format!("creating {}", output_dir.display()))?;

    save_summary(network, output_dir)?;
    save_routers(network, output_dir)?;

    log::info!("Topology report saved");

    Ok(())
}

fn write_json(path: &Path, value: &serde_json::Value) -> Result<()> {
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    file.write_all(to_string_pretty(value)?.as_bytes())?;
    Ok(())
}

fn save_summary(network: &Network, output_dir: &Path) -> Result<()> {
    let summary = json!({
        "network": network.summary(),
        "clusters": network.cluster_metrics(),
    });

    write_json(&output_dir.join("summary.json"), &summary)
}

fn save_routers(network: &Network, output_dir: &Path) -> Result<()> {
    let routers: Vec<_> = network
        .clusters()
        .iter()
        .zip(network.registry().into_iter().flat_map(|r| r.iter()))
        .map(|(cluster, router)| {
            json!({
                "index": router.index,
                "gateway": router.gateway,
                "members": cluster.members,
            })
        })
        .collect();

    let links: Vec<_> = network
        .router_graph()
        .map(|g| g.links())
        .unwrap_or_default()
        .into_iter()
        .map(|(a, b, weight)| json!({ "source": a, "target": b, "weight": weight }))
        .collect();

    write_json(
        &output_dir.join("routers.json"),
        &json!({ "routers": routers, "links": links }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_both_reports() {
        let mut network = Network::default();
        network
            .build_host_graph([(1, 2, 1), (2, 3, 2), (3, 4, 1), (1, 4, 5)])
            .unwrap();
        network.partition_and_register_routers(2).unwrap();
        network.build_router_graph([(2, 4, 7)]).unwrap();

        let dir = tempfile::tempdir().unwrap();
        save_topology(&network, dir.path()).unwrap();

        let read = |name: &str| -> serde_json::Value {
            serde_json::from_str(&fs::read_to_string(dir.path().join(name)).unwrap()).unwrap()
        };

        let summary = read("summary.json");
        assert_eq!(summary["network"]["cluster_count"], 2);
        assert_eq!(summary["clusters"][1]["forest_weight"], 1);

        let routers = read("routers.json");
        assert_eq!(routers["routers"][0]["gateway"], 2);
        assert_eq!(routers["routers"][1]["members"], json!([3, 4]));
        assert_eq!(routers["links"][0]["weight"], 7);
    }
}
