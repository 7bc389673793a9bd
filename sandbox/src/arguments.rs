use anyhow::{bail, Context};
use scenery::scene::registry::{DEFAULT_ASSETS_DIRECTORY, DEFAULT_SPHERE_COUNT};
use std::path::PathBuf;

pub(crate) const USAGE: &str = "usage: sandbox <scene-name | scene-index> [assets-dir] [sphere-count] | sandbox --list";

#[derive(Debug, PartialEq)]
pub(crate) enum Command {
    List,
    Assemble {
        scene: String,
        assets_directory: PathBuf,
        sphere_count: usize,
    },
}

/// Positional arguments win over `assets_fallback`, which in turn wins over
/// the built-in defaults.
pub(crate) fn parse<Tokens>(tokens: Tokens, assets_fallback: Option<String>) -> anyhow::Result<Command>
where
    Tokens: IntoIterator<Item = String>,
{
    let mut tokens = tokens.into_iter();

    let Some(scene) = tokens.next() else {
        bail!(USAGE);
    };
    if scene == "--list" || scene == "-l" {
        return Ok(Command::List);
    }

    let assets_directory = tokens
        .next()
        .or(assets_fallback)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_ASSETS_DIRECTORY));

    let sphere_count = match tokens.next() {
        Some(token) => token.parse::<usize>().with_context(|| format!("sphere count must be a non-negative integer, got {token:?}"))?,
        None => DEFAULT_SPHERE_COUNT,
    };

    if let Some(extra) = tokens.next() {
        bail!("unexpected argument {extra:?}; {USAGE}");
    }

    Ok(Command::Assemble { scene, assets_directory, sphere_count })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(source: &[&str]) -> Vec<String> {
        source.iter().map(|token| token.to_string()).collect()
    }

    #[test]
    fn test_list() {
        assert_eq!(parse(tokens(&["--list"]), None).unwrap(), Command::List);
    }

    #[test]
    fn test_missing_scene() {
        let actual = parse(tokens(&[]), None);
        assert!(actual.unwrap_err().to_string().starts_with("usage"));
    }

    #[test]
    fn test_defaults() {
        let actual = parse(tokens(&["Cornell"]), None).unwrap();
        assert_eq!(actual, Command::Assemble {
            scene: "Cornell".to_string(),
            assets_directory: PathBuf::from(DEFAULT_ASSETS_DIRECTORY),
            sphere_count: DEFAULT_SPHERE_COUNT,
        });
    }

    #[test]
    fn test_environment_fallback_for_assets() {
        let actual = parse(tokens(&["Bunny"]), Some("/srv/meshes".to_string())).unwrap();
        assert!(matches!(actual, Command::Assemble { assets_directory, .. } if assets_directory == PathBuf::from("/srv/meshes")));
    }

    #[test]
    fn test_positional_arguments_win() {
        let actual = parse(tokens(&["Spheres", "media", "12"]), Some("/srv/meshes".to_string())).unwrap();
        assert_eq!(actual, Command::Assemble {
            scene: "Spheres".to_string(),
            assets_directory: PathBuf::from("media"),
            sphere_count: 12,
        });
    }

    #[test]
    fn test_bad_sphere_count() {
        assert!(parse(tokens(&["Spheres", "media", "many"]), None).is_err());
    }

    #[test]
    fn test_extra_argument() {
        assert!(parse(tokens(&["Spheres", "media", "1", "2"]), None).is_err());
    }
}
