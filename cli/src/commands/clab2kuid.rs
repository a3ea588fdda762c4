use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::Context;
use knet_common::config::{Config, LinkPolicy, Overrides};
use knet_common::inventory::{Link, Node};
use knet_core::Mapper;
use tracing::{debug, warn};

use crate::commands::Clab2kuidArgs;
use crate::terminal::print;

pub fn clab2kuid(args: Clab2kuidArgs, config_path: Option<&Path>) -> anyhow::Result<()> {
    let overrides = Overrides {
        region: args.region,
        site: args.site,
        namespace: args.namespace,
        link_policy: args.skip_invalid_links.then_some(LinkPolicy::Skip),
    };
    let cfg: Config = Config::load(config_path, overrides).context("failed to load configuration")?;
    debug!("Using {:?}", cfg);

    let clab_file = &args.clab_file;
    let yaml: String = fs::read_to_string(clab_file)
        .with_context(|| format!("cannot read {}", clab_file.display()))?;

    print::header("mapping topology");
    let mapper: Mapper = Mapper::new(cfg.site_id(), &yaml)
        .with_context(|| format!("cannot load topology {}", clab_file.display()))?;

    let nodes: Vec<Node> = mapper
        .list_nodes()
        .into_iter()
        .map(|node| node.with_namespace(&cfg.namespace))
        .collect();
    let links: Vec<Link> = match mapper.list_links(cfg.link_policy) {
        Ok(links) => links
            .into_iter()
            .map(|link| link.with_namespace(&cfg.namespace))
            .collect(),
        Err(err) => {
            warn!("No links produced this run: {err}");
            Vec::new()
        }
    };
    let skipped: usize = match cfg.link_policy {
        LinkPolicy::Skip => mapper.topology().links().len() - links.len(),
        LinkPolicy::Abort => 0,
    };

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot create {}", path.display()))?;
            let mut out = BufWriter::new(file);
            write_resources(&mut out, &nodes, &links)?;
            out.flush()?;
        }
        None => {
            let mut out = io::stdout().lock();
            write_resources(&mut out, &nodes, &links)?;
            out.flush()?;
        }
    }

    print::summary(nodes.len(), links.len(), skipped);
    Ok(())
}

/// Nodes first, then links.
fn write_resources<W: Write>(out: &mut W, nodes: &[Node], links: &[Link]) -> anyhow::Result<()> {
    print::write_documents(out, nodes)?;
    print::write_documents(out, links)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
