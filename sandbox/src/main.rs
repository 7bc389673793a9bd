mod arguments;

use crate::arguments::Command;
use anyhow::Context;
use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use scenery::scene::registry::{AssemblyContext, SceneId};
use scenery::serialization::wire::encode_scene;
use std::env;
use std::io::Write;

const DEFAULT_LOG_FILTER: &str = "info";
const ASSETS_VARIABLE: &str = "SCENERY_ASSETS";
const SEED_VARIABLE: &str = "SCENERY_SEED";

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER)).init();

    match arguments::parse(env::args().skip(1), env::var(ASSETS_VARIABLE).ok())? {
        Command::List => {
            let mut output = std::io::stdout().lock();
            for (index, id) in SceneId::catalogue().enumerate() {
                writeln!(output, "{index:>2} {id}")?;
            }
        }
        Command::Assemble { scene, assets_directory, sphere_count } => {
            let id = resolve_scene(&scene)?;
            let mut rng = make_rng();
            let mut context = AssemblyContext::new(&mut rng)
                .with_assets_directory(assets_directory)
                .with_sphere_count(sphere_count);

            let descriptor = id.assemble(&mut context).with_context(|| format!("failed to assemble {id}"))?;
            if let Some(bounds) = descriptor.bounds() {
                info!("scene extent: {:?} .. {:?}", bounds.min(), bounds.max());
            }

            let encoded = encode_scene(&descriptor).context("failed to encode scene")?;
            let mut output = std::io::stdout().lock();
            writeln!(output, "{encoded}")?;
        }
    }

    Ok(())
}

fn resolve_scene(token: &str) -> anyhow::Result<SceneId> {
    match token.parse::<usize>() {
        Ok(index) => Ok(SceneId::from_index(index)?),
        Err(_) => Ok(SceneId::from_name(token)?),
    }
}

fn make_rng() -> StdRng {
    match env::var(SEED_VARIABLE).map(|value| value.parse::<u64>()) {
        Ok(Ok(seed)) => {
            info!("using seed {seed}");
            StdRng::seed_from_u64(seed)
        }
        Ok(Err(e)) => {
            warn!("ignoring {SEED_VARIABLE}: {e}");
            StdRng::from_entropy()
        }
        Err(_) => StdRng::from_entropy(),
    }
}
