//! Game settings
//!
//! Everything the session is built from. Defaults reproduce the classic
//! layout; the web host may override them with JSON from the canvas element.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Reasons a settings document is rejected
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("invalid settings JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{field} must be positive and finite, got {value}")]
    NonPositive { field: &'static str, value: f32 },
    #[error("paddle width {paddle} does not fit a surface {surface} wide")]
    PaddleTooWide { paddle: f32, surface: f32 },
    #[error("brick grid needs at least one row and one column")]
    EmptyBrickGrid,
    #[error("brick grid of {columns} x {rows} exceeds {max} bricks")]
    TooManyBricks {
        columns: usize,
        rows: usize,
        max: usize,
    },
}

/// Upper bound on bricks in a grid
pub const MAX_BRICKS: usize = 4096;

/// A CSS color string, passed through to the drawing surface untouched
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub String);

impl Color {
    pub fn new(css: &str) -> Self {
        Self(css.to_owned())
    }

    pub fn as_css(&self) -> &str {
        &self.0
    }
}

/// Size of the drawing surface in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceSettings {
    pub width: f32,
    pub height: f32,
}

impl Default for SurfaceSettings {
    fn default() -> Self {
        Self {
            width: SURFACE_WIDTH,
            height: SURFACE_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaddleSettings {
    pub width: f32,
    pub height: f32,
    /// Pixels moved per frame while a direction is held
    pub step: f32,
    /// Distance from the surface bottom to the paddle's top edge
    pub bottom_offset: f32,
}

impl Default for PaddleSettings {
    fn default() -> Self {
        Self {
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            step: PADDLE_STEP,
            bottom_offset: PADDLE_BOTTOM_OFFSET,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BallSettings {
    pub radius: f32,
    /// Distance from the surface bottom to the ball's starting center
    pub bottom_offset: f32,
    pub dx: f32,
    pub dy: f32,
}

impl Default for BallSettings {
    fn default() -> Self {
        Self {
            radius: BALL_RADIUS,
            bottom_offset: BALL_BOTTOM_OFFSET,
            dx: BALL_DX,
            dy: BALL_DY,
        }
    }
}

/// Shape of the brick grid. Fixed for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrickLayout {
    pub rows: usize,
    pub columns: usize,
    pub width: f32,
    pub height: f32,
    pub padding: f32,
    pub offset_top: f32,
    pub offset_left: f32,
}

impl Default for BrickLayout {
    fn default() -> Self {
        Self {
            rows: BRICK_ROWS,
            columns: BRICK_COLUMNS,
            width: BRICK_WIDTH,
            height: BRICK_HEIGHT,
            padding: BRICK_PADDING,
            offset_top: BRICK_OFFSET_TOP,
            offset_left: BRICK_OFFSET_LEFT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub paddle: Color,
    pub ball: Color,
    pub brick: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            paddle: Color::new(PADDLE_COLOR),
            ball: Color::new(BALL_COLOR),
            brick: Color::new(BRICK_COLOR),
        }
    }
}

/// Complete game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub surface: SurfaceSettings,
    pub paddle: PaddleSettings,
    pub ball: BallSettings,
    pub bricks: BrickLayout,
    pub palette: Palette,
    /// Text shown when the ball falls past the paddle
    pub game_over_message: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            surface: SurfaceSettings::default(),
            paddle: PaddleSettings::default(),
            ball: BallSettings::default(),
            bricks: BrickLayout::default(),
            palette: Palette::default(),
            game_over_message: GAME_OVER_MESSAGE.to_owned(),
        }
    }
}

impl Settings {
    /// Parse a (possibly partial) JSON document; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Settings for a host surface of the given size.
    ///
    /// The optional JSON override is validated against the host size, not the
    /// default one. Rejected overrides are logged and the defaults are used.
    pub fn for_surface(json: Option<&str>, width: f32, height: f32) -> Self {
        let fallback = || Self::default().with_surface(width, height);
        let Some(json) = json else {
            return fallback();
        };

        let resolved = serde_json::from_str::<Self>(json)
            .map_err(SettingsError::from)
            .map(|settings| settings.with_surface(width, height))
            .and_then(|settings| settings.validate().map(|()| settings));
        match resolved {
            Ok(settings) => {
                log::info!("Loaded settings override");
                settings
            }
            Err(e) => {
                log::warn!("Ignoring settings override: {}", e);
                fallback()
            }
        }
    }

    /// Same settings on a surface of a different size
    pub fn with_surface(mut self, width: f32, height: f32) -> Self {
        self.surface = SurfaceSettings { width, height };
        self
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        let positive = [
            ("surface.width", self.surface.width),
            ("surface.height", self.surface.height),
            ("paddle.width", self.paddle.width),
            ("paddle.height", self.paddle.height),
            ("paddle.step", self.paddle.step),
            ("ball.radius", self.ball.radius),
            ("bricks.width", self.bricks.width),
            ("bricks.height", self.bricks.height),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(SettingsError::NonPositive { field, value });
            }
        }

        if self.paddle.width > self.surface.width {
            return Err(SettingsError::PaddleTooWide {
                paddle: self.paddle.width,
                surface: self.surface.width,
            });
        }

        if self.bricks.rows == 0 || self.bricks.columns == 0 {
            return Err(SettingsError::EmptyBrickGrid);
        }

        let (columns, rows) = (self.bricks.columns, self.bricks.rows);
        match columns.checked_mul(rows) {
            Some(count) if count <= MAX_BRICKS => {}
            _ => {
                return Err(SettingsError::TooManyBricks {
                    columns,
                    rows,
                    max: MAX_BRICKS,
                });
            }
        }

        Ok(())
    }

    /// Settings embedded in the canvas element's `data-settings` attribute
    #[cfg(target_arch = "wasm32")]
    pub fn load(canvas: &web_sys::HtmlCanvasElement) -> Self {
        Self::for_surface(
            canvas.get_attribute("data-settings").as_deref(),
            canvas.width() as f32,
            canvas.height() as f32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.bricks.rows, 3);
        assert_eq!(settings.bricks.columns, 5);
        assert_eq!(settings.palette.paddle.as_css(), "#c0392b");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings =
            Settings::from_json(r#"{ "bricks": { "rows": 4 }, "palette": { "ball": "white" } }"#)
                .unwrap();
        assert_eq!(settings.bricks.rows, 4);
        assert_eq!(settings.bricks.columns, BRICK_COLUMNS);
        assert_eq!(settings.palette.ball, Color::new("white"));
        assert_eq!(settings.paddle, PaddleSettings::default());
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = Settings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_rejects_paddle_wider_than_surface() {
        let err =
            Settings::from_json(r#"{ "surface": { "width": 50 }, "paddle": { "width": 75 } }"#)
                .unwrap_err();
        assert!(matches!(err, SettingsError::PaddleTooWide { .. }));
    }

    #[test]
    fn test_rejects_non_positive_dimensions() {
        let err = Settings::from_json(r#"{ "ball": { "radius": 0 } }"#).unwrap_err();
        match err {
            SettingsError::NonPositive { field, .. } => assert_eq!(field, "ball.radius"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_rejects_empty_grid() {
        let err = Settings::from_json(r#"{ "bricks": { "columns": 0 } }"#).unwrap_err();
        assert!(matches!(err, SettingsError::EmptyBrickGrid));
    }

    #[test]
    fn test_with_surface_overrides_size_only() {
        let settings = Settings::default().with_surface(800.0, 600.0);
        assert_eq!(settings.surface.width, 800.0);
        assert_eq!(settings.surface.height, 600.0);
        assert_eq!(settings.paddle, PaddleSettings::default());
    }

    #[test]
    fn test_rejects_infinite_dimensions() {
        // Too large for f32, deserializes as infinity
        let err = Settings::from_json(r#"{ "paddle": { "step": 1e39 } }"#).unwrap_err();
        match err {
            SettingsError::NonPositive { field, value } => {
                assert_eq!(field, "paddle.step");
                assert!(value.is_infinite());
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_rejects_oversized_grid() {
        let err = Settings::from_json(r#"{ "bricks": { "rows": 4294967296, "columns": 4294967296 } }"#)
            .unwrap_err();
        assert!(matches!(err, SettingsError::TooManyBricks { .. }));

        let err = Settings::from_json(r#"{ "bricks": { "rows": 100, "columns": 100 } }"#)
            .unwrap_err();
        assert!(matches!(
            err,
            SettingsError::TooManyBricks {
                columns: 100,
                rows: 100,
                max: MAX_BRICKS
            }
        ));

        assert!(Settings::from_json(r#"{ "bricks": { "rows": 64, "columns": 64 } }"#).is_ok());
    }

    #[test]
    fn test_override_checked_against_host_surface() {
        let json = r#"{ "paddle": { "width": 400 } }"#;
        // Fits the default 480 wide surface
        let settings = Settings::from_json(json).unwrap();
        assert!(matches!(
            settings.with_surface(300.0, 150.0).validate(),
            Err(SettingsError::PaddleTooWide { .. })
        ));

        let settings = Settings::for_surface(Some(json), 300.0, 150.0);
        assert_eq!(settings, Settings::default().with_surface(300.0, 150.0));
        assert_eq!(settings.paddle.width, PADDLE_WIDTH);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_override_applied_on_host_surface() {
        let settings = Settings::for_surface(Some(r#"{ "paddle": { "width": 100 } }"#), 300.0, 150.0);
        assert_eq!(settings.paddle.width, 100.0);
        assert_eq!(settings.surface, SurfaceSettings { width: 300.0, height: 150.0 });

        let settings = Settings::for_surface(None, 640.0, 480.0);
        assert_eq!(settings, Settings::default().with_surface(640.0, 480.0));

        let settings = Settings::for_surface(Some("{ broken"), 640.0, 480.0);
        assert_eq!(settings, Settings::default().with_surface(640.0, 480.0));
    }
}
