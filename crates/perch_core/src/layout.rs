//! Layout resources and inflation
//!
//! A layout is a small TOML view tree packaged as an asset:
//!
//! ```toml
//! [root]
//! kind = "frame"
//! id = "content"
//!
//! [[root.children]]
//! kind = "game_surface"
//! id = "game_view"
//!
//! [root.children.surface]
//! width = 640
//! height = 480
//! ```
//!
//! The layout contract: exactly one `game_surface` node, and view ids unique
//! within the tree. Inflation turns the tree into a [`ViewHierarchy`] that
//! owns the created game surface.

use std::collections::HashSet;
use std::fmt;

use perch_platform::{AssetLoader, AssetPath, GameSurface, PlatformError, SurfaceConfig};
use serde::{Deserialize, Serialize};

use crate::error::{HostError, Result};

/// Stable identifier of a view within a layout
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ViewId(String);

impl ViewId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ViewId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A node in a layout tree
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViewNode {
    /// Container for other views
    Frame {
        #[serde(default)]
        id: Option<ViewId>,
        #[serde(default)]
        children: Vec<ViewNode>,
    },
    /// The embedded game surface
    GameSurface {
        id: ViewId,
        #[serde(default)]
        surface: SurfaceConfig,
    },
}

impl ViewNode {
    pub fn id(&self) -> Option<&ViewId> {
        match self {
            ViewNode::Frame { id, .. } => id.as_ref(),
            ViewNode::GameSurface { id, .. } => Some(id),
        }
    }

    fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a ViewNode)) {
        visit(self);
        if let ViewNode::Frame { children, .. } = self {
            for child in children {
                child.walk(visit);
            }
        }
    }
}

#[derive(Deserialize)]
struct LayoutFile {
    root: ViewNode,
}

/// Creates the game surface for a `game_surface` node during inflation
pub trait SurfaceFactory {
    fn create_surface(
        &mut self,
        id: &ViewId,
        config: &SurfaceConfig,
    ) -> std::result::Result<Box<dyn GameSurface>, PlatformError>;
}

impl<F> SurfaceFactory for F
where
    F: FnMut(&ViewId, &SurfaceConfig) -> std::result::Result<Box<dyn GameSurface>, PlatformError>,
{
    fn create_surface(
        &mut self,
        id: &ViewId,
        config: &SurfaceConfig,
    ) -> std::result::Result<Box<dyn GameSurface>, PlatformError> {
        self(id, config)
    }
}

/// A parsed, validated layout
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutResource {
    name: String,
    root: ViewNode,
}

impl LayoutResource {
    /// Parse and validate a layout; `name` is used in errors
    pub fn parse(name: &str, source: &str) -> Result<Self> {
        let file: LayoutFile = toml::from_str(source).map_err(|source| HostError::LayoutParse {
            resource: name.to_string(),
            source,
        })?;

        let layout = Self {
            name: name.to_string(),
            root: file.root,
        };
        layout.validate()?;
        Ok(layout)
    }

    /// Load a layout through the platform's asset loader
    pub fn load(assets: &dyn AssetLoader, path: &AssetPath) -> Result<Self> {
        let source = assets.load_string(path)?;
        Self::parse(path.as_str(), &source)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn root(&self) -> &ViewNode {
        &self.root
    }

    fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        let mut duplicate = None;
        let mut surfaces = 0usize;

        self.root.walk(&mut |node| {
            if matches!(node, ViewNode::GameSurface { .. }) {
                surfaces += 1;
            }
            if let Some(id) = node.id() {
                if !seen.insert(id) && duplicate.is_none() {
                    duplicate = Some(id.clone());
                }
            }
        });

        if let Some(id) = duplicate {
            return Err(self.invalid(format!("view id '{}' is declared more than once", id)));
        }
        match surfaces {
            1 => Ok(()),
            0 => Err(self.invalid("no game_surface view declared".to_string())),
            n => Err(self.invalid(format!(
                "{} game_surface views declared, expected exactly one",
                n
            ))),
        }
    }

    fn invalid(&self, reason: String) -> HostError {
        HostError::InvalidLayout {
            resource: self.name.clone(),
            reason,
        }
    }

    /// Build the view hierarchy, creating the game surface through `factory`
    pub fn inflate(&self, factory: &mut dyn SurfaceFactory) -> Result<ViewHierarchy> {
        let mut view_ids = Vec::new();
        let mut surface_node = None;

        self.root.walk(&mut |node| {
            if let Some(id) = node.id() {
                view_ids.push(id.clone());
            }
            if let ViewNode::GameSurface { id, surface } = node {
                surface_node = Some((id, surface));
            }
        });

        // validate() guarantees exactly one surface
        let (surface_id, config) = surface_node
            .ok_or_else(|| self.invalid("no game_surface view declared".to_string()))?;

        tracing::debug!(
            layout = %self.name,
            surface = %surface_id,
            width = config.width,
            height = config.height,
            "inflating layout"
        );
        let surface = factory.create_surface(surface_id, config)?;

        Ok(ViewHierarchy {
            view_ids,
            surface_id: surface_id.clone(),
            surface,
        })
    }
}

/// Inflated views of a layout
///
/// Owns the game surface for as long as the activity keeps the hierarchy.
pub struct ViewHierarchy {
    view_ids: Vec<ViewId>,
    surface_id: ViewId,
    surface: Box<dyn GameSurface>,
}

impl ViewHierarchy {
    /// Whether a view with `id` was inflated
    pub fn contains(&self, id: &ViewId) -> bool {
        self.view_ids.contains(id)
    }

    /// All inflated view ids, in tree order
    pub fn view_ids(&self) -> &[ViewId] {
        &self.view_ids
    }

    pub fn surface_id(&self) -> &ViewId {
        &self.surface_id
    }

    /// Look up the game surface by its stable id
    pub fn find_game_surface(&mut self, id: &ViewId) -> Result<&mut dyn GameSurface> {
        if *id == self.surface_id {
            Ok(self.surface.as_mut())
        } else if self.contains(id) {
            Err(HostError::NotAGameSurface(id.clone()))
        } else {
            Err(HostError::ViewNotFound(id.clone()))
        }
    }
}

impl fmt::Debug for ViewHierarchy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewHierarchy")
            .field("view_ids", &self.view_ids)
            .field("surface_id", &self.surface_id)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use perch_platform::MemoryAssetLoader;

    const MAIN: &str = r#"
[root]
kind = "frame"
id = "content"

[[root.children]]
kind = "game_surface"
id = "game_view"

[root.children.surface]
width = 320
height = 240
title = "cr1ck_t"
"#;

    struct NullSurface;

    impl GameSurface for NullSurface {
        fn suspend(&mut self) {}
        fn resume(&mut self) {}
    }

    fn null_factory(
        _id: &ViewId,
        _config: &SurfaceConfig,
    ) -> std::result::Result<Box<dyn GameSurface>, PlatformError> {
        Ok(Box::new(NullSurface))
    }

    #[test]
    fn test_parse_layout() {
        let layout = LayoutResource::parse("main", MAIN).unwrap();
        let ViewNode::Frame { id, children } = layout.root() else {
            panic!("root should be a frame");
        };
        assert_eq!(id.as_ref(), Some(&ViewId::from("content")));
        assert_eq!(
            children[0],
            ViewNode::GameSurface {
                id: ViewId::from("game_view"),
                surface: SurfaceConfig {
                    width: 320,
                    height: 240,
                    title: Some("cr1ck_t".to_string()),
                },
            }
        );
    }

    #[test]
    fn test_surface_config_defaults() {
        let layout = LayoutResource::parse(
            "bare",
            "[root]\nkind = \"game_surface\"\nid = \"game_view\"\n",
        )
        .unwrap();
        let ViewNode::GameSurface { surface, .. } = layout.root() else {
            panic!("root should be the game surface");
        };
        assert_eq!(*surface, SurfaceConfig::default());
        assert_eq!((surface.width, surface.height), (640, 480));
    }

    #[test]
    fn test_missing_surface_rejected() {
        let err = LayoutResource::parse("empty", "[root]\nkind = \"frame\"\n").unwrap_err();
        assert!(matches!(err, HostError::InvalidLayout { .. }));
    }

    #[test]
    fn test_two_surfaces_rejected() {
        let source = r#"
[root]
kind = "frame"

[[root.children]]
kind = "game_surface"
id = "a"

[[root.children]]
kind = "game_surface"
id = "b"
"#;
        let err = LayoutResource::parse("twice", source).unwrap_err();
        assert!(err.to_string().contains("2 game_surface views"), "{err}");
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let source = r#"
[root]
kind = "frame"
id = "game_view"

[[root.children]]
kind = "game_surface"
id = "game_view"
"#;
        let err = LayoutResource::parse("dup", source).unwrap_err();
        assert!(err.to_string().contains("more than once"), "{err}");
    }

    #[test]
    fn test_parse_error_names_resource() {
        let err = LayoutResource::parse("broken", "[root\n").unwrap_err();
        assert!(matches!(err, HostError::LayoutParse { ref resource, .. } if resource == "broken"));
    }

    #[test]
    fn test_inflate_and_lookup() {
        let layout = LayoutResource::parse("main", MAIN).unwrap();
        let mut factory = null_factory;
        let mut views = layout.inflate(&mut factory).unwrap();

        assert_eq!(views.view_ids(), &[ViewId::from("content"), ViewId::from("game_view")]);
        assert_eq!(views.surface_id(), &ViewId::from("game_view"));
        assert!(views.find_game_surface(&ViewId::from("game_view")).is_ok());
        assert!(matches!(
            views.find_game_surface(&ViewId::from("content")),
            Err(HostError::NotAGameSurface(_))
        ));
        assert!(matches!(
            views.find_game_surface(&ViewId::from("missing")),
            Err(HostError::ViewNotFound(_))
        ));
    }

    #[test]
    fn test_factory_receives_surface_config() {
        let layout = LayoutResource::parse("main", MAIN).unwrap();
        let mut seen = None;
        let mut factory = |id: &ViewId, config: &SurfaceConfig| {
            seen = Some((id.clone(), config.clone()));
            Ok::<_, PlatformError>(Box::new(NullSurface) as Box<dyn GameSurface>)
        };
        layout.inflate(&mut factory).unwrap();

        let (id, config) = seen.unwrap();
        assert_eq!(id.as_str(), "game_view");
        assert_eq!(config.width, 320);
    }

    #[test]
    fn test_factory_error_propagates() {
        let layout = LayoutResource::parse("main", MAIN).unwrap();
        let mut factory = |_: &ViewId, _: &SurfaceConfig| {
            Err::<Box<dyn GameSurface>, _>(PlatformError::InitFailed("no gpu".to_string()))
        };
        assert!(matches!(
            layout.inflate(&mut factory),
            Err(HostError::Platform(PlatformError::InitFailed(_)))
        ));
    }

    #[test]
    fn test_load_from_assets() {
        let assets = MemoryAssetLoader::new().with("layout/activity_main.toml", MAIN);
        let layout =
            LayoutResource::load(&assets, &AssetPath::from("layout/activity_main.toml")).unwrap();
        assert_eq!(layout.name(), "layout/activity_main.toml");

        let missing = LayoutResource::load(&assets, &AssetPath::from("layout/other.toml"));
        assert!(matches!(
            missing,
            Err(HostError::Platform(PlatformError::AssetLoad(_)))
        ));
    }
}
