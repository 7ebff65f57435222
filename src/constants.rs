//! Application-wide constants.
//!
//! Centralizes magic numbers and policy values so the rest of the codebase
//! stays self-documenting.

// ============================================================================
// Geometry
// ============================================================================

/// Fixed pixel density used for every mm <-> px conversion (approx. 96 DPI).
pub const PIXELS_PER_MM: f32 = 3.78;

/// Length of a generated element id (base-36 characters).
pub const ID_LENGTH: usize = 9;

// ============================================================================
// Page Defaults
// ============================================================================

/// Default page margin on every side, in mm.
pub const DEFAULT_MARGIN_MM: f32 = 20.0;

// ============================================================================
// Element Sizing
// ============================================================================

/// Minimum element width enforced while resizing, in mm.
pub const MIN_ELEMENT_WIDTH_MM: f32 = 10.0;

/// Minimum element height enforced while resizing, in mm.
pub const MIN_ELEMENT_HEIGHT_MM: f32 = 5.0;

/// Widest an ingested image may come in at, in mm (printable A4 width).
pub const MAX_IMAGE_WIDTH_MM: f32 = 170.0;

// ============================================================================
// Zoom
// ============================================================================

/// Minimum zoom level
pub const MIN_ZOOM: f32 = 0.1;

/// Maximum zoom level
pub const MAX_ZOOM: f32 = 5.0;

/// Default zoom level
pub const DEFAULT_ZOOM: f32 = 1.0;

// ============================================================================
// History & Clipboard
// ============================================================================

/// Maximum undo history states to keep
pub const MAX_HISTORY_STATES: usize = 50;

/// Offset applied to pasted elements on both axes, in mm.
pub const PASTE_OFFSET_MM: f32 = 5.0;

// ============================================================================
// Input Handling
// ============================================================================

/// Minimum size for marquee selection to trigger (prevents accidental selection)
pub const MIN_MARQUEE_SIZE_PX: f32 = 5.0;

/// Size of the resize handle hit area in pixels (at zoom 1.0)
pub const RESIZE_HANDLE_SIZE_PX: f32 = 12.0;

// ============================================================================
// Style Defaults
// ============================================================================

/// Default font stack for text elements
pub const DEFAULT_FONT_FAMILY: &str = "Inter, sans-serif";

/// Default font size in px
pub const DEFAULT_FONT_SIZE: f32 = 12.0;

/// Default text color
pub const DEFAULT_TEXT_COLOR: &str = "#000000";

/// Default line height multiplier
pub const DEFAULT_LINE_HEIGHT: f32 = 1.4;

/// Default left padding (indent) in px
pub const DEFAULT_PADDING: f32 = 4.0;
