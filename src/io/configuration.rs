//! Pipeline constants and runtime configuration defaults

// Default values for configurable parameters
/// Default raster width in pixels
pub const DEFAULT_WIDTH: usize = 2000;
/// Default raster height in pixels
pub const DEFAULT_HEIGHT: usize = 2000;
/// Default seed lattice density (approximately n × n sample points)
pub const DEFAULT_LATTICE_DENSITY: usize = 10;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed raster dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

/// Maximum channel value declared in raster headers
pub const MAX_CHANNEL_VALUE: u8 = 255;

// Border rendering palette
/// Color for cells on the boundary between two Voronoi cells
pub const BORDER_COLOR: [u8; 3] = [255, 255, 255];
/// Color for Voronoi cell interiors after border rendering
pub const BACKGROUND_COLOR: [u8; 3] = [0, 0, 0];
/// Color marking junctions where three or more Voronoi cells meet
pub const CORNER_COLOR: [u8; 3] = [251, 72, 196];

/// Neutral fill for unassigned cells in visualization frames
pub const UNASSIGNED_FRAME_COLOR: [u8; 4] = [128, 128, 128, 255];

// Output settings
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 120;
/// Hold multiplier applied to the final GIF frame
pub const FINAL_FRAME_HOLD: u32 = 10;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 50;
