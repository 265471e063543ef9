use std::path::Path;

use serde::Deserialize;

use crate::raycast::CastStrategy;
use crate::types::{
    DEFAULT_CELL_SIZE, DEFAULT_FOV_DEG, DEFAULT_RAYS_PER_DEGREE, DEFAULT_WALL_PROBABILITY, EMPTY,
    GridcastError, MapInfo, WALL,
};

const LAYOUT_WALL: char = '#';
const LAYOUT_EMPTY: char = '.';

/// Scene configuration, usually read from YAML.
///
/// ```yaml
/// map:
///   cell_size: 32
///   layout:
///     - "#####"
///     - "#...#"
///     - "#####"
/// view:
///   fov_deg: 66
///   rays_per_degree: 2
/// strategy: boundary
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GridcastConfig {
    #[serde(default)]
    pub map: MapConfig,
    #[serde(default)]
    pub view: ViewConfig,
    #[serde(default)]
    pub generation: GenerationConfig,
    #[serde(default)]
    pub strategy: CastStrategy,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MapConfig {
    #[serde(default = "default_map_side")]
    pub width: u32,
    #[serde(default = "default_map_side")]
    pub height: u32,
    #[serde(default = "default_cell_size")]
    pub cell_size: f64,
    #[serde(default)]
    pub border_size: f64,
    /// Fixed level, one string per row: `#` is a wall, `.` is empty. When
    /// present it overrides `width`/`height` and no random level is drawn.
    #[serde(default)]
    pub layout: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ViewConfig {
    #[serde(default = "default_fov")]
    pub fov_deg: f64,
    #[serde(default = "default_rays_per_degree")]
    pub rays_per_degree: f64,
    #[serde(default)]
    pub heading_deg: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GenerationConfig {
    #[serde(
        default = "default_wall_probability",
        deserialize_with = "deserialize_probability"
    )]
    pub wall_probability: f64,
    #[serde(default = "default_border_walls")]
    pub border_walls: bool,
    #[serde(default)]
    pub seed: u64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            width: default_map_side(),
            height: default_map_side(),
            cell_size: default_cell_size(),
            border_size: 0.0,
            layout: None,
        }
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            fov_deg: default_fov(),
            rays_per_degree: default_rays_per_degree(),
            heading_deg: 0.0,
        }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            wall_probability: default_wall_probability(),
            border_walls: default_border_walls(),
            seed: 0,
        }
    }
}

fn default_map_side() -> u32 {
    16
}

fn default_cell_size() -> f64 {
    DEFAULT_CELL_SIZE
}

fn default_fov() -> f64 {
    DEFAULT_FOV_DEG
}

fn default_rays_per_degree() -> f64 {
    DEFAULT_RAYS_PER_DEGREE
}

fn default_wall_probability() -> f64 {
    DEFAULT_WALL_PROBABILITY
}

fn default_border_walls() -> bool {
    true
}

fn deserialize_probability<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(serde::de::Error::custom(
            "wall_probability must be in the range [0.0, 1.0]",
        ))
    }
}

impl MapConfig {
    /// Map metadata, with dimensions taken from the layout when one is given.
    pub fn info(&self) -> MapInfo {
        let (width, height) = match &self.layout {
            Some(rows) => (
                rows.first().map_or(0, |r| r.chars().count()) as u32,
                rows.len() as u32,
            ),
            None => (self.width, self.height),
        };
        MapInfo {
            width,
            height,
            cell_size: self.cell_size,
            border_size: self.border_size,
        }
    }

    /// Cells of the fixed layout, row-major. `None` when the level is random.
    pub fn layout_cells(&self) -> Result<Option<Vec<u8>>, GridcastError> {
        let Some(rows) = &self.layout else {
            return Ok(None);
        };
        let width = rows.first().map_or(0, |r| r.chars().count());
        if width == 0 {
            return Err(GridcastError::InvalidMetadata("layout is empty".to_string()));
        }

        let mut cells = Vec::with_capacity(width * rows.len());
        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() != width {
                return Err(GridcastError::InvalidMetadata(format!(
                    "layout row {} has {} cells, expected {}",
                    y,
                    row.chars().count(),
                    width
                )));
            }
            for (x, c) in row.chars().enumerate() {
                cells.push(match c {
                    LAYOUT_WALL => WALL,
                    LAYOUT_EMPTY => EMPTY,
                    other => {
                        return Err(GridcastError::InvalidMetadata(format!(
                            "layout cell ({x}, {y}) is {other:?}, expected '{LAYOUT_WALL}' or '{LAYOUT_EMPTY}'"
                        )));
                    }
                });
            }
        }
        Ok(Some(cells))
    }
}

impl GridcastConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, GridcastError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Cross-field checks serde cannot express.
    pub fn validate(&self) -> Result<(), GridcastError> {
        self.map.info().validate()?;
        self.map.layout_cells()?;
        if !self.view.heading_deg.is_finite() {
            return Err(GridcastError::InvalidConfig(format!(
                "heading must be finite, got {}",
                self.view.heading_deg
            )));
        }
        Ok(())
    }
}

pub fn load_config(yaml_path: impl AsRef<Path>) -> Result<GridcastConfig, GridcastError> {
    let yaml_path = yaml_path.as_ref();
    let yaml_str = std::fs::read_to_string(yaml_path)?;
    let config = GridcastConfig::from_yaml_str(&yaml_str)?;
    log::debug!(
        "loaded config from {}: {:?} strategy",
        yaml_path.display(),
        config.strategy
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = GridcastConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config, GridcastConfig::default());
        assert_eq!(config.map.info().width, 16);
        assert_eq!(config.strategy, CastStrategy::Boundary);
        assert!(config.generation.border_walls);
    }

    #[test]
    fn parses_layout() {
        let yaml = r#####"
map:
  cell_size: 10
  layout:
    - "####"
    - "#..#"
    - "####"
strategy: dda
"#####;
        let config = GridcastConfig::from_yaml_str(yaml).unwrap();
        let info = config.map.info();
        assert_eq!((info.width, info.height), (4, 3));
        let cells = config.map.layout_cells().unwrap().unwrap();
        assert_eq!(cells, vec![1, 1, 1, 1, 1, 0, 0, 1, 1, 1, 1, 1]);
        assert_eq!(config.strategy, CastStrategy::Dda);
    }

    #[test]
    fn rejects_ragged_layout() {
        let yaml = "map:\n  layout: [\"###\", \"#.\"]\n";
        let err = GridcastConfig::from_yaml_str(yaml).unwrap_err();
        assert!(matches!(err, GridcastError::InvalidMetadata(_)));
    }

    #[test]
    fn rejects_unknown_layout_glyph() {
        let yaml = "map:\n  layout: [\"#x#\"]\n";
        assert!(GridcastConfig::from_yaml_str(yaml).is_err());
    }

    #[test]
    fn rejects_out_of_range_probability() {
        let yaml = "generation:\n  wall_probability: 1.5\n";
        let err = GridcastConfig::from_yaml_str(yaml).unwrap_err();
        assert!(matches!(err, GridcastError::Yaml(_)));
    }

    #[test]
    fn rejects_zero_cell_size() {
        let yaml = "map:\n  cell_size: 0\n";
        let err = GridcastConfig::from_yaml_str(yaml).unwrap_err();
        assert!(matches!(err, GridcastError::InvalidConfig(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_config("/definitely/not/here.yaml").unwrap_err();
        assert!(matches!(err, GridcastError::Io(_)));
    }
}
